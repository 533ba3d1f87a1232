use chroma_core::{
    generate, parse_color_with, Catalog, ColorDistance, ColorError, PackedColor, PaletteError,
    PaletteType,
};
use rand::seq::IteratorRandom;
use std::sync::Arc;
use thiserror::Error;

use crate::error::RenderError;
use crate::models::Limits;
use crate::rendering::{compose, encode_png};

/// Token that selects a random catalog color
pub const RANDOM_TOKEN: &str = "random";

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error(transparent)]
    Palette(#[from] PaletteError),

    #[error("{name} must be between {min} and {max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// A user token resolved to a color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColor {
    /// Token exactly as supplied
    pub input: String,
    /// Catalog name when the color is a catalog entry, otherwise the trimmed token
    pub name: String,
    pub color: PackedColor,
    /// True when the token was `random`
    pub random: bool,
}

/// A main color with related swatches and the encoded preview
#[derive(Debug, Clone)]
pub struct Preview {
    pub main: ResolvedColor,
    pub swatches: Vec<ColorDistance>,
    pub png: Vec<u8>,
}

/// Turns user tokens into rendered previews.
///
/// Cheap to clone; the catalog is shared.
#[derive(Clone)]
pub struct PreviewService {
    catalog: Arc<Catalog>,
    limits: Limits,
}

impl PreviewService {
    pub fn new(catalog: Arc<Catalog>, limits: Limits) -> Self {
        Self { catalog, limits }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Resolve a token, treating `random` (any case) as a random catalog entry.
    pub fn resolve(&self, token: &str) -> Result<ResolvedColor, ColorError> {
        if token.trim().eq_ignore_ascii_case(RANDOM_TOKEN) {
            let entry = self
                .catalog
                .iter()
                .choose(&mut rand::thread_rng())
                .ok_or_else(|| ColorError::InvalidColorFormat(token.to_string()))?;
            return Ok(ResolvedColor {
                input: token.to_string(),
                name: entry.name.clone(),
                color: entry.color,
                random: true,
            });
        }

        let color = parse_color_with(token, &self.catalog)?;
        let name = match self.catalog.find_by_name(token.trim()) {
            Some(entry) => entry.name.clone(),
            None => self
                .catalog
                .nearest(color, None)
                .filter(ColorDistance::is_exact)
                .map_or_else(|| token.trim().to_string(), |exact| exact.name),
        };

        Ok(ResolvedColor {
            input: token.to_string(),
            name,
            color,
            random: false,
        })
    }

    /// Render a color with up to `range` similar catalog colors.
    ///
    /// For a `random` token the similar list is replaced by distinct random
    /// catalog colors that differ from the main one.
    pub fn preview_color(&self, token: &str, range: usize) -> Result<Preview, PreviewError> {
        check_range("range", range, 0, self.limits.max_similar)?;

        let main = self.resolve(token)?;
        let swatches = if main.random {
            self.random_others(main.color, range)
        } else {
            self.catalog.nearest_n(main.color, range, Some(main.color))
        };

        let png = encode_png(compose(main.color, &swatches)?)?;
        tracing::debug!(
            color = %main.color,
            similar = swatches.len(),
            size_bytes = png.len(),
            "Rendered color preview"
        );

        Ok(Preview { main, swatches, png })
    }

    /// Render a palette of `layers` rows around a base color.
    pub fn preview_palette(
        &self,
        kind: &str,
        token: &str,
        layers: usize,
    ) -> Result<Preview, PreviewError> {
        let kind = kind.parse::<PaletteType>()?;
        check_range("count", layers, 1, self.limits.max_palette_layers)?;

        let main = self.resolve(token)?;
        let palette = generate(
            &self.catalog,
            main.color,
            kind,
            layers * self.limits.colors_per_layer,
        );
        let swatches = palette.into_colors();

        let png = encode_png(compose(main.color, &swatches)?)?;
        tracing::debug!(
            color = %main.color,
            palette = %kind,
            colors = swatches.len(),
            size_bytes = png.len(),
            "Rendered palette preview"
        );

        Ok(Preview { main, swatches, png })
    }

    /// [`preview_color`](Self::preview_color) on the blocking thread pool
    pub async fn spawn_color_preview(
        &self,
        token: String,
        range: usize,
    ) -> Result<Preview, PreviewError> {
        let service = self.clone();
        tokio::task::spawn_blocking(move || service.preview_color(&token, range))
            .await
            .map_err(|e| RenderError::Task(e.to_string()))?
    }

    /// [`preview_palette`](Self::preview_palette) on the blocking thread pool
    pub async fn spawn_palette_preview(
        &self,
        kind: String,
        token: String,
        layers: usize,
    ) -> Result<Preview, PreviewError> {
        let service = self.clone();
        tokio::task::spawn_blocking(move || service.preview_palette(&kind, &token, layers))
            .await
            .map_err(|e| RenderError::Task(e.to_string()))?
    }

    fn random_others(&self, main: PackedColor, count: usize) -> Vec<ColorDistance> {
        self.catalog
            .iter()
            .filter(|entry| entry.color != main)
            .choose_multiple(&mut rand::thread_rng(), count)
            .into_iter()
            .map(|entry| ColorDistance {
                name: entry.name.clone(),
                color: entry.color,
                distance: 0,
            })
            .collect()
    }
}

fn check_range(
    name: &'static str,
    value: usize,
    min: usize,
    max: usize,
) -> Result<(), PreviewError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(PreviewError::OutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}
