//! Error types for palette generation

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// The selector does not name one of the six palette variants
    #[error("unknown palette type: {0}")]
    UnknownPaletteType(String),
}
