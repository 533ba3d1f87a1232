pub mod color;
pub mod palette;
pub mod share;

pub use color::{handle_color, ColorInfo, ColorPreviewResponse, SwatchInfo, __path_handle_color};
pub use palette::{
    handle_palette, handle_palette_types, PaletteResponse, PaletteTypeInfo, __path_handle_palette,
    __path_handle_palette_types,
};
pub use share::{handle_share, share_url, __path_handle_share};
