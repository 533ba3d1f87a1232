//! Named color catalog
//!
//! The catalog resolves color names typed by users and snaps computed
//! colors to the nearest "real" named color.

mod catalog;
mod error;
mod table;

pub use catalog::{Catalog, ColorDistance, NamedColor};
pub use error::CatalogError;
