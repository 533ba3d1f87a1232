//! Color token parsing
//!
//! A token is resolved by trying, in order:
//!
//! 1. a decimal integer (`"16711680"`)
//! 2. a catalog name, case-insensitive (`"red"`)
//! 3. a 6-digit hex code with optional `#` (`"#FF0000"`, `"ff0000"`)
//! 4. a 3-digit hex shorthand with optional `#` (`"#F00"`, `"f00"`)
//!
//! Because decimal parsing comes first, an all-digit token such as
//! `"123456"` is the decimal value 123456, not the hex color `#123456`.

use thiserror::Error;

use crate::catalog::Catalog;
use crate::color::PackedColor;

/// Error returned when a token matches none of the color grammars.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid color format: {0:?}")]
    InvalidColorFormat(String),
}

/// Parse a color token against the built-in catalog.
///
/// # Examples
///
/// ```
/// use chroma_core::parse_color;
///
/// assert_eq!(parse_color("#FF0000").unwrap().value(), 16711680);
/// assert_eq!(parse_color("F00").unwrap().value(), 16711680);
/// assert_eq!(parse_color("16711680").unwrap().value(), 16711680);
/// assert_eq!(parse_color("Red").unwrap().value(), 16711680);
/// assert!(parse_color("GGGGGG").is_err());
/// ```
pub fn parse_color(token: &str) -> Result<PackedColor, ColorError> {
    parse_color_with(token, Catalog::builtin())
}

/// Parse a color token, resolving names against `catalog`.
///
/// Leading and trailing whitespace is ignored.
pub fn parse_color_with(token: &str, catalog: &Catalog) -> Result<PackedColor, ColorError> {
    let trimmed = token.trim();
    let invalid = || ColorError::InvalidColorFormat(token.to_string());

    if trimmed.is_empty() {
        return Err(invalid());
    }

    if trimmed.bytes().all(|b| b.is_ascii_digit()) {
        // Overflowing 24 bits is treated like integer overflow
        return trimmed
            .parse::<u32>()
            .ok()
            .and_then(PackedColor::new)
            .ok_or_else(invalid);
    }

    if let Some(color) = catalog.lookup_by_name(trimmed) {
        return Ok(color);
    }

    parse_hex(trimmed).ok_or_else(invalid)
}

/// Parse `#RRGGBB`, `RRGGBB`, `#RGB` or `RGB`.
///
/// Shorthand digits are doubled (`F` becomes `FF`).
pub fn parse_hex(hex: &str) -> Option<PackedColor> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let expanded = match digits.len() {
        6 => digits.to_string(),
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        _ => return None,
    };

    u32::from_str_radix(&expanded, 16)
        .ok()
        .and_then(PackedColor::new)
}
