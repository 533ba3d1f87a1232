//! Swatch layout and compositing.
//!
//! The canvas has a main band holding one large swatch, centered
//! horizontally, and below it a grid of smaller numbered swatches with at
//! most [`PER_ROW`] per row. The grid band is omitted when there are no
//! secondary colors.

use chroma_core::{ColorDistance, PackedColor};

use super::glyph::{draw_number, text_color};
use super::raster::Raster;
use crate::error::RenderError;

/// Edge length of the main swatch.
pub const MAIN_SIZE: u32 = 150;
/// Edge length of a secondary swatch.
pub const SWATCH_SIZE: u32 = 100;
/// Gap around and between swatches.
pub const PADDING: u32 = 10;
/// Border thickness drawn outside each swatch.
pub const BORDER: u32 = 2;
/// Maximum secondary swatches per row.
pub const PER_ROW: usize = 5;

/// Canvas dimensions for a preview with `others` secondary swatches.
pub fn canvas_size(others: usize) -> (u32, u32) {
    let per_row = others.min(PER_ROW) as u32;
    let rows = others.div_ceil(PER_ROW) as u32;

    let width = (MAIN_SIZE + 2 * PADDING).max(per_row * SWATCH_SIZE + (per_row + 1) * PADDING);
    let height = PADDING + MAIN_SIZE + PADDING + rows * (SWATCH_SIZE + PADDING);
    (width, height)
}

/// Top-left corner of secondary swatch `index`.
pub fn swatch_origin(index: usize) -> (u32, u32) {
    let col = (index % PER_ROW) as u32;
    let row = (index / PER_ROW) as u32;
    (
        PADDING + col * (SWATCH_SIZE + PADDING),
        2 * PADDING + MAIN_SIZE + row * (SWATCH_SIZE + PADDING),
    )
}

/// Render `main` and its related colors onto a fresh transparent canvas.
///
/// Secondary swatches are labelled with their 1-based position.
pub fn compose(main: PackedColor, others: &[ColorDistance]) -> Result<Raster, RenderError> {
    let (width, height) = canvas_size(others.len());
    let mut raster = Raster::new(width, height)?;

    let main_x = (width - MAIN_SIZE) / 2;
    draw_swatch(&mut raster, main_x, PADDING, MAIN_SIZE, main);

    for (index, entry) in others.iter().enumerate() {
        let (x, y) = swatch_origin(index);
        draw_swatch(&mut raster, x, y, SWATCH_SIZE, entry.color);

        let center = (SWATCH_SIZE / 2) as i32;
        draw_number(
            &mut raster,
            index + 1,
            x as i32 + center,
            y as i32 + center,
            text_color(entry.color),
        );
    }

    Ok(raster)
}

/// Bordered square: the darker border first, then the fill on top.
fn draw_swatch(raster: &mut Raster, x: u32, y: u32, size: u32, color: PackedColor) {
    raster.fill_rect(
        x as i32 - BORDER as i32,
        y as i32 - BORDER as i32,
        size + 2 * BORDER,
        size + 2 * BORDER,
        color.darker(),
    );
    raster.fill_rect(x as i32, y as i32, size, size, color);
}
