//! Color types and conversion utilities
//!
//! - [`PackedColor`]: 24-bit RGB, the interchange form for every component.
//! - [`Hsv`]: hue/saturation/value, used by the palette generator.
//!
//! # Example
//!
//! ```
//! use chroma_core::PackedColor;
//!
//! let orange = PackedColor::from_rgb(255, 128, 0);
//! let hsv = orange.to_hsv();
//! assert!((hsv.hue - 30.0).abs() < 0.5);
//!
//! let back = PackedColor::from_hsv(hsv);
//! assert_eq!(back, orange);
//! ```

mod hsv;
mod packed;

pub use hsv::{hsv_to_rgb, rgb_to_hsv, wrap_hue, Hsv};
pub use packed::{PackedColor, MAX_PACKED};
