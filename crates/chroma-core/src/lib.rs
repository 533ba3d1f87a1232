#![allow(clippy::module_inception)]

//! chroma-core: color parsing, named-color matching and palette generation
//!
//! This crate is the pure half of the color preview engine. It turns a
//! user-supplied token into a packed RGB color, finds named colors close to
//! it and derives harmonic palettes from it. Nothing here performs I/O or
//! holds mutable shared state, so every function is safe to call from any
//! thread.
//!
//! # Quick Start
//!
//! ```
//! use chroma_core::{generate, parse_color, Catalog, PaletteType};
//!
//! let base = parse_color("#1E90FF").unwrap();
//! let catalog = Catalog::builtin();
//!
//! // Five named colors closest to the base, excluding the base itself
//! let similar = catalog.nearest_n(base, 5, Some(base));
//! assert_eq!(similar.len(), 5);
//!
//! // A ten-color complementary palette snapped to catalog entries
//! let palette = generate(catalog, base, PaletteType::Complementary, 10);
//! assert_eq!(palette.len(), 10);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! token ──parse_color──> PackedColor ──to_hsv──> Hsv
//!                                                 │
//!                               slot_target (hue schedule + perturbation)
//!                                                 │
//!                         from_hsv ──> Catalog::nearest ──> ColorDistance
//! ```
//!
//! Distances are squared Euclidean distances in 8-bit RGB. They are only
//! ever compared, never shown as a perceptual measure.

pub mod catalog;
pub mod color;
pub mod palette;
pub mod parse;


pub use catalog::{Catalog, CatalogError, ColorDistance, NamedColor};
pub use color::{hsv_to_rgb, rgb_to_hsv, Hsv, PackedColor};
pub use palette::{generate, generate_by_id, Palette, PaletteError, PaletteType};
pub use parse::{parse_color, parse_color_with, parse_hex, ColorError};
