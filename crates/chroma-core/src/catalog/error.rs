//! Error types for catalog construction

use thiserror::Error;

/// Error returned when building a [`Catalog`](super::Catalog) from raw entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No entries were provided
    #[error("catalog cannot be empty")]
    Empty,

    /// An entry's color is not a 3- or 6-digit hex string
    #[error("invalid hex color {hex:?} for catalog entry {name:?}")]
    InvalidHex { name: String, hex: String },

    /// An entry has an empty (or whitespace-only) name
    #[error("catalog entry at index {index} has an empty name")]
    EmptyName { index: usize },

    /// Two entries share a name (compared case-insensitively)
    #[error("duplicate catalog name {0:?}")]
    DuplicateName(String),
}
