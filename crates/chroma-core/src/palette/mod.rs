//! Palette generation
//!
//! This module derives harmonic palettes (monochromatic, complementary,
//! triadic, ...) from a base color and snaps every generated color to the
//! named color catalog.

mod error;
mod generate;
mod kind;

pub use error::PaletteError;
pub use generate::{generate, generate_by_id, slot_target, Palette};
pub use kind::PaletteType;
