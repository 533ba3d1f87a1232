//! Packed 24-bit RGB color
//!
//! The packed form is what users type, what the catalog stores and what
//! the renderer paints. Red occupies the high byte.

use std::fmt;
use std::str::FromStr;

use super::hsv::{hsv_to_rgb, rgb_to_hsv, Hsv};
use crate::parse::ColorError;

/// Largest value a packed color may hold.
pub const MAX_PACKED: u32 = 0xFF_FFFF;

/// Per-channel factor used for swatch borders.
const DARKEN_FACTOR: f64 = 0.8;

/// A 24-bit RGB color packed into an integer (`0xRRGGBB`).
///
/// There is no alpha channel. The value is always in `0..=0xFFFFFF`,
/// enforced by the constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct PackedColor(u32);

impl PackedColor {
    pub const BLACK: PackedColor = PackedColor(0x00_0000);
    pub const WHITE: PackedColor = PackedColor(0xFF_FFFF);

    /// Create a packed color from a raw integer.
    ///
    /// Returns `None` if the value does not fit in 24 bits.
    #[inline]
    pub const fn new(value: u32) -> Option<Self> {
        if value <= MAX_PACKED {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Create a packed color from 8-bit channels.
    ///
    /// # Example
    /// ```
    /// use chroma_core::PackedColor;
    /// let red = PackedColor::from_rgb(255, 0, 0);
    /// assert_eq!(red.value(), 16711680);
    /// ```
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// The raw integer value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Split into `(r, g, b)`.
    #[inline]
    pub const fn to_rgb(self) -> (u8, u8, u8) {
        (self.r(), self.g(), self.b())
    }

    /// Uppercase `#RRGGBB` form.
    pub fn to_hex(self) -> String {
        format!("#{:06X}", self.0)
    }

    /// Convert to HSV.
    pub fn to_hsv(self) -> Hsv {
        rgb_to_hsv(self.r(), self.g(), self.b())
    }

    /// Convert from HSV, rounding each channel to the nearest byte.
    pub fn from_hsv(hsv: Hsv) -> Self {
        let (r, g, b) = hsv_to_rgb(hsv.hue, hsv.saturation, hsv.value);
        Self::from_rgb(r, g, b)
    }

    /// Same hue, each channel scaled down by a fixed fraction.
    ///
    /// Used for swatch borders.
    pub fn darker(self) -> Self {
        let scale = |c: u8| (c as f64 * DARKEN_FACTOR) as u8;
        Self::from_rgb(scale(self.r()), scale(self.g()), scale(self.b()))
    }

    /// Integer mean of the three channels.
    #[inline]
    pub fn brightness(self) -> u8 {
        ((self.r() as u16 + self.g() as u16 + self.b() as u16) / 3) as u8
    }

    /// Squared Euclidean distance in RGB space.
    #[inline]
    pub fn distance_squared(self, other: PackedColor) -> u32 {
        let dr = self.r() as i32 - other.r() as i32;
        let dg = self.g() as i32 - other.g() as i32;
        let db = self.b() as i32 - other.b() as i32;
        (dr * dr + dg * dg + db * db) as u32
    }
}

impl fmt::Display for PackedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

impl From<(u8, u8, u8)> for PackedColor {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::from_rgb(r, g, b)
    }
}

impl From<PackedColor> for u32 {
    fn from(color: PackedColor) -> Self {
        color.0
    }
}

impl TryFrom<u32> for PackedColor {
    type Error = ColorError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| ColorError::InvalidColorFormat(value.to_string()))
    }
}

impl FromStr for PackedColor {
    type Err = ColorError;

    /// Parse a color token against the built-in catalog.
    ///
    /// See [`crate::parse_color`] for the accepted grammar.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_color(s)
    }
}
