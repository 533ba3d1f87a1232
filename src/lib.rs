//! Chromatic Curator
//!
//! Color previews, similar-color lookup and harmonic palettes, rendered to
//! PNG and served over HTTP. The color engine itself lives in `chroma-core`;
//! this library adds rendering and the outer surfaces, and exposes its
//! modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod rendering;
pub mod server;
pub mod services;
