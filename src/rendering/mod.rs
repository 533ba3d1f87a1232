pub mod compose;
pub mod encode;
pub mod glyph;
pub mod raster;

pub use compose::{canvas_size, compose};
pub use encode::encode_png;
pub use raster::Raster;
