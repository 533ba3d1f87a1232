use axum::{
    extract::{Query, State},
    response::Json,
};
use chroma_core::{ColorDistance, PackedColor};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::{ColorGeneration, GenerationKind};
use crate::services::{GenerationCache, PreviewService, ResolvedColor};

/// Query parameters for /api/color
#[derive(Debug, Deserialize)]
pub struct ColorQuery {
    pub name: String,
    #[serde(default)]
    pub range: usize,
}

/// A resolved color
#[derive(Debug, Serialize, ToSchema)]
pub struct ColorInfo {
    /// Catalog name, or the token itself for colors outside the catalog
    pub name: String,
    /// Uppercase `#RRGGBB`
    pub hex: String,
    #[schema(value_type = Vec<u8>)]
    pub rgb: [u8; 3],
    /// Packed 24-bit value
    pub value: u32,
}

impl ColorInfo {
    pub fn new(name: impl Into<String>, color: PackedColor) -> Self {
        let (r, g, b) = color.to_rgb();
        Self {
            name: name.into(),
            hex: color.to_hex(),
            rgb: [r, g, b],
            value: color.value(),
        }
    }
}

impl From<&ResolvedColor> for ColorInfo {
    fn from(resolved: &ResolvedColor) -> Self {
        Self::new(resolved.name.clone(), resolved.color)
    }
}

/// A numbered swatch in a preview
#[derive(Debug, Serialize, ToSchema)]
pub struct SwatchInfo {
    /// 1-based label drawn on the swatch
    pub index: usize,
    #[serde(flatten)]
    pub color: ColorInfo,
    /// Squared RGB distance to the color it was measured against
    pub distance: u32,
    /// True when the catalog has no exact match for the computed color
    pub estimate: bool,
}

impl SwatchInfo {
    pub fn from_distances(distances: &[ColorDistance]) -> Vec<Self> {
        distances
            .iter()
            .enumerate()
            .map(|(i, d)| Self {
                index: i + 1,
                color: ColorInfo::new(d.name.clone(), d.color),
                distance: d.distance,
                estimate: !d.is_exact(),
            })
            .collect()
    }
}

/// Response from the /api/color endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct ColorPreviewResponse {
    /// Token as supplied
    pub input: String,
    pub color: ColorInfo,
    /// Nearest catalog colors, closest first
    pub similar: Vec<SwatchInfo>,
    /// Whether the color was picked at random
    pub random: bool,
    /// One-time share id for the rendered preview
    pub share_id: String,
    /// Where the rendered preview can be fetched once
    pub image_url: String,
}

/// Preview a color and the catalog colors closest to it
///
/// The rendered PNG is kept in the share cache and can be fetched exactly
/// once from `image_url`. The token `random` picks a random catalog color and
/// fills the similar list with random colors as well.
#[utoipa::path(
    get,
    path = "/api/color",
    responses(
        (status = 200, description = "Color preview rendered", body = ColorPreviewResponse),
        (status = 400, description = "Invalid color or range"),
        (status = 500, description = "Rendering error"),
    ),
    params(
        ("name" = String, Query, description = "Color token: decimal value, catalog name, #RRGGBB, #RGB or 'random'"),
        ("range" = Option<usize>, Query, description = "Number of similar colors to include (0-10, default 0)"),
    ),
    tag = "Preview"
)]
pub async fn handle_color(
    State(preview): State<Arc<PreviewService>>,
    State(cache): State<Arc<GenerationCache>>,
    Query(query): Query<ColorQuery>,
) -> Result<Json<ColorPreviewResponse>, ApiError> {
    tracing::info!(token = %query.name, range = query.range, "Color preview request received");

    let result = preview.spawn_color_preview(query.name, query.range).await?;

    let similar = SwatchInfo::from_distances(&result.swatches);
    let color = ColorInfo::from(&result.main);
    let generation = ColorGeneration::new(
        GenerationKind::Color,
        result.main.input.clone(),
        result.main.name.clone(),
        result.main.color,
        result.png,
    );
    let share_id = cache.store(generation).await;

    tracing::info!(
        color = %color.hex,
        similar = similar.len(),
        share_id = %share_id,
        "Color preview ready"
    );

    Ok(Json(ColorPreviewResponse {
        input: result.main.input,
        color,
        similar,
        random: result.main.random,
        image_url: super::share::share_url(&share_id),
        share_id,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_info() {
        let info = ColorInfo::new("Orange", PackedColor::from_rgb(255, 165, 0));
        assert_eq!(info.hex, "#FFA500");
        assert_eq!(info.rgb, [255, 165, 0]);
        assert_eq!(info.value, 0xFFA500);
    }

    #[test]
    fn test_swatch_info_numbering_and_estimate() {
        let distances = vec![
            ColorDistance {
                name: "Red".to_string(),
                color: PackedColor::from_rgb(255, 0, 0),
                distance: 0,
            },
            ColorDistance {
                name: "Crimson".to_string(),
                color: PackedColor::from_rgb(220, 20, 60),
                distance: 5225,
            },
        ];

        let swatches = SwatchInfo::from_distances(&distances);
        assert_eq!(swatches[0].index, 1);
        assert!(!swatches[0].estimate);
        assert_eq!(swatches[1].index, 2);
        assert!(swatches[1].estimate);
    }

    #[test]
    fn test_swatch_info_serializes_flat() {
        let swatch = SwatchInfo {
            index: 1,
            color: ColorInfo::new("Black", PackedColor::BLACK),
            distance: 0,
            estimate: false,
        };
        let json = serde_json::to_value(&swatch).unwrap();
        assert_eq!(json["name"], "Black");
        assert_eq!(json["hex"], "#000000");
        assert_eq!(json["index"], 1);
    }
}
