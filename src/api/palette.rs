use axum::{
    extract::{Query, State},
    response::Json,
};
use chroma_core::PaletteType;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use super::color::{ColorInfo, SwatchInfo};
use crate::error::ApiError;
use crate::models::{ColorGeneration, GenerationKind};
use crate::services::{GenerationCache, PreviewService};

/// Query parameters for /api/palette
#[derive(Debug, Deserialize)]
pub struct PaletteQuery {
    #[serde(rename = "type")]
    pub kind: String,
    pub color: String,
    #[serde(default = "default_layers")]
    pub count: usize,
}

fn default_layers() -> usize {
    1
}

/// A selectable palette variant
#[derive(Debug, Serialize, ToSchema)]
pub struct PaletteTypeInfo {
    /// Stable identifier, e.g. "split-complementary"
    pub id: String,
    /// Human-readable name
    pub name: String,
}

impl From<PaletteType> for PaletteTypeInfo {
    fn from(kind: PaletteType) -> Self {
        Self {
            id: kind.id().to_string(),
            name: kind.display_name().to_string(),
        }
    }
}

/// Response from the /api/palette endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct PaletteResponse {
    pub palette_type: PaletteTypeInfo,
    /// Token as supplied
    pub input: String,
    pub base: ColorInfo,
    /// Palette entries, each snapped to the nearest catalog color
    pub colors: Vec<SwatchInfo>,
    /// Whether the base color was picked at random
    pub random: bool,
    /// One-time share id for the rendered preview
    pub share_id: String,
    /// Where the rendered preview can be fetched once
    pub image_url: String,
}

/// List the available palette types
#[utoipa::path(
    get,
    path = "/api/palette-types",
    responses(
        (status = 200, description = "All palette types in menu order", body = Vec<PaletteTypeInfo>),
    ),
    tag = "Palette"
)]
pub async fn handle_palette_types() -> Json<Vec<PaletteTypeInfo>> {
    Json(PaletteType::ALL.into_iter().map(PaletteTypeInfo::from).collect())
}

/// Generate a harmonic palette around a base color
///
/// `count` is the number of layers; each layer holds five colors.
#[utoipa::path(
    get,
    path = "/api/palette",
    responses(
        (status = 200, description = "Palette rendered", body = PaletteResponse),
        (status = 400, description = "Invalid color, palette type or count"),
        (status = 500, description = "Rendering error"),
    ),
    params(
        ("type" = String, Query, description = "Palette type id, e.g. 'triadic'"),
        ("color" = String, Query, description = "Base color token"),
        ("count" = Option<usize>, Query, description = "Number of palette layers (1-3, default 1)"),
    ),
    tag = "Palette"
)]
pub async fn handle_palette(
    State(preview): State<Arc<PreviewService>>,
    State(cache): State<Arc<GenerationCache>>,
    Query(query): Query<PaletteQuery>,
) -> Result<Json<PaletteResponse>, ApiError> {
    tracing::info!(
        palette = %query.kind,
        token = %query.color,
        layers = query.count,
        "Palette request received"
    );

    // validated again by the service; parsed here to report the type back
    let kind = query.kind.parse::<PaletteType>()?;
    let result = preview
        .spawn_palette_preview(query.kind, query.color, query.count)
        .await?;

    let colors = SwatchInfo::from_distances(&result.swatches);
    let base = ColorInfo::from(&result.main);
    let generation = ColorGeneration::new(
        GenerationKind::Palette(kind),
        result.main.input.clone(),
        result.main.name.clone(),
        result.main.color,
        result.png,
    );
    let share_id = cache.store(generation).await;

    tracing::info!(
        palette = %kind,
        base = %base.hex,
        colors = colors.len(),
        share_id = %share_id,
        "Palette ready"
    );

    Ok(Json(PaletteResponse {
        palette_type: kind.into(),
        input: result.main.input,
        base,
        colors,
        random: result.main.random,
        image_url: super::share::share_url(&share_id),
        share_id,
    }))
}
