//! The closed set of palette variants.

use std::fmt;
use std::str::FromStr;

use super::error::PaletteError;

/// A color-theory relationship used to derive a palette from a base hue.
///
/// Each variant has a stable kebab-case identifier (used in URLs, CLI
/// arguments and selection menus) and a human-readable display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteType {
    /// One hue, varying saturation and value
    Monochromatic,
    /// Base hue and its opposite
    Complementary,
    /// Base hue and the two neighbours of its opposite
    SplitComplementary,
    /// A 60° window centered on the base hue
    Analogous,
    /// Three hues 120° apart
    Triadic,
    /// Four hues 90° apart
    Tetradic,
}

impl PaletteType {
    /// Every variant, in menu order.
    pub const ALL: [PaletteType; 6] = [
        PaletteType::Monochromatic,
        PaletteType::Complementary,
        PaletteType::SplitComplementary,
        PaletteType::Analogous,
        PaletteType::Triadic,
        PaletteType::Tetradic,
    ];

    /// Stable identifier, e.g. `"split-complementary"`.
    pub fn id(self) -> &'static str {
        match self {
            PaletteType::Monochromatic => "monochromatic",
            PaletteType::Complementary => "complementary",
            PaletteType::SplitComplementary => "split-complementary",
            PaletteType::Analogous => "analogous",
            PaletteType::Triadic => "triadic",
            PaletteType::Tetradic => "tetradic",
        }
    }

    /// Human-readable name, e.g. `"Split Complementary"`.
    pub fn display_name(self) -> &'static str {
        match self {
            PaletteType::Monochromatic => "Monochromatic",
            PaletteType::Complementary => "Complementary",
            PaletteType::SplitComplementary => "Split Complementary",
            PaletteType::Analogous => "Analogous",
            PaletteType::Triadic => "Triadic",
            PaletteType::Tetradic => "Tetradic",
        }
    }

    /// Hue offsets in degrees that slots are distributed across.
    ///
    /// Analogous palettes interpolate across a window instead; their
    /// offsets are the window edges.
    pub fn hue_offsets(self) -> &'static [f64] {
        match self {
            PaletteType::Monochromatic => &[0.0],
            PaletteType::Complementary => &[0.0, 180.0],
            PaletteType::SplitComplementary => &[0.0, 150.0, 210.0],
            PaletteType::Analogous => &[-30.0, 30.0],
            PaletteType::Triadic => &[0.0, 120.0, 240.0],
            PaletteType::Tetradic => &[0.0, 90.0, 180.0, 270.0],
        }
    }
}

impl fmt::Display for PaletteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for PaletteType {
    type Err = PaletteError;

    /// Parse an identifier or display name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        PaletteType::ALL
            .into_iter()
            .find(|kind| {
                s.eq_ignore_ascii_case(kind.id()) || s.eq_ignore_ascii_case(kind.display_name())
            })
            .ok_or_else(|| PaletteError::UnknownPaletteType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for kind in PaletteType::ALL {
            assert_eq!(kind.id().parse::<PaletteType>(), Ok(kind));
            assert_eq!(kind.to_string(), kind.id());
        }
    }

    #[test]
    fn test_display_names_parse() {
        assert_eq!(
            "Split Complementary".parse::<PaletteType>(),
            Ok(PaletteType::SplitComplementary)
        );
        assert_eq!("TRIADIC".parse::<PaletteType>(), Ok(PaletteType::Triadic));
    }

    #[test]
    fn test_unknown_type() {
        assert_eq!(
            "pentadic".parse::<PaletteType>(),
            Err(PaletteError::UnknownPaletteType("pentadic".to_string()))
        );
        assert!("".parse::<PaletteType>().is_err());
    }

    #[test]
    fn test_ids_are_kebab_case() {
        for kind in PaletteType::ALL {
            assert!(kind
                .id()
                .chars()
                .all(|c| c.is_ascii_lowercase() || c == '-'));
        }
    }
}
