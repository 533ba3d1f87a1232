use chroma_core::{PackedColor, PaletteType};
use chrono::{DateTime, Utc};

/// What produced a rendered preview
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationKind {
    /// A single color with its nearest named neighbours
    Color,
    /// A harmonic palette around a base color
    Palette(PaletteType),
}

impl GenerationKind {
    /// File name offered when the preview is downloaded
    pub fn file_name(self) -> &'static str {
        match self {
            GenerationKind::Color => "color_preview.png",
            GenerationKind::Palette(_) => "palette_preview.png",
        }
    }
}

/// A rendered preview waiting to be shared
#[derive(Debug, Clone)]
pub struct ColorGeneration {
    pub kind: GenerationKind,
    /// Token exactly as the user supplied it
    pub input: String,
    /// Name shown for the main color
    pub color_name: String,
    pub color: PackedColor,
    /// Encoded PNG
    pub image: Vec<u8>,
    pub created_at: DateTime<Utc>,
}

impl ColorGeneration {
    pub fn new(
        kind: GenerationKind,
        input: impl Into<String>,
        color_name: impl Into<String>,
        color: PackedColor,
        image: Vec<u8>,
    ) -> Self {
        Self {
            kind,
            input: input.into(),
            color_name: color_name.into(),
            color,
            image,
            created_at: Utc::now(),
        }
    }

    /// True once the generation is older than `ttl`.
    pub fn is_expired(&self, ttl: chrono::Duration, now: DateTime<Utc>) -> bool {
        now - self.created_at > ttl
    }
}
