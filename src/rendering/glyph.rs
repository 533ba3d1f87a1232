//! Seven-segment digit glyphs.
//!
//! Each digit is drawn as a handful of filled rectangles inside a
//! `DIGIT_WIDTH` x `DIGIT_HEIGHT` cell:
//!
//! ```text
//!  aaaa
//! f    b
//! f    b
//!  gggg
//! e    c
//! e    c
//!  dddd
//! ```

use chroma_core::PackedColor;

use super::raster::Raster;

pub const DIGIT_WIDTH: u32 = 20;
pub const DIGIT_HEIGHT: u32 = 30;
pub const STROKE: u32 = 4;

const SEG_A: u8 = 1 << 0;
const SEG_B: u8 = 1 << 1;
const SEG_C: u8 = 1 << 2;
const SEG_D: u8 = 1 << 3;
const SEG_E: u8 = 1 << 4;
const SEG_F: u8 = 1 << 5;
const SEG_G: u8 = 1 << 6;

/// Lit segments for digits 0 through 9.
const DIGITS: [u8; 10] = [
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F,
    SEG_B | SEG_C,
    SEG_A | SEG_B | SEG_G | SEG_E | SEG_D,
    SEG_A | SEG_B | SEG_G | SEG_C | SEG_D,
    SEG_F | SEG_G | SEG_B | SEG_C,
    SEG_A | SEG_F | SEG_G | SEG_C | SEG_D,
    SEG_A | SEG_F | SEG_G | SEG_E | SEG_D | SEG_C,
    SEG_A | SEG_B | SEG_C,
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G,
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_F | SEG_G,
];

/// Segment rectangles `(mask, x, y, width, height)` relative to the cell.
const SEGMENTS: [(u8, u32, u32, u32, u32); 7] = {
    const W: u32 = DIGIT_WIDTH;
    const H: u32 = DIGIT_HEIGHT;
    const S: u32 = STROKE;
    [
        (SEG_A, 0, 0, W, S),
        (SEG_B, W - S, 0, S, H / 2),
        (SEG_C, W - S, H / 2, S, H / 2),
        (SEG_D, 0, H - S, W, S),
        (SEG_E, 0, H / 2, S, H / 2),
        (SEG_F, 0, 0, S, H / 2),
        (SEG_G, 0, H / 2 - S / 2, W, S),
    ]
};

/// Draw a single digit centered on `(cx, cy)`. Values above 9 are ignored.
pub fn draw_digit(raster: &mut Raster, digit: u8, cx: i32, cy: i32, color: PackedColor) {
    let Some(&lit) = DIGITS.get(digit as usize) else {
        return;
    };

    let left = cx - (DIGIT_WIDTH / 2) as i32;
    let top = cy - (DIGIT_HEIGHT / 2) as i32;

    for &(mask, x, y, w, h) in &SEGMENTS {
        if lit & mask != 0 {
            raster.fill_rect(left + x as i32, top + y as i32, w, h, color);
        }
    }
}

/// Draw a decimal number with its digits centered as a group on `(cx, cy)`.
///
/// Digits sit edge to edge with no gap between cells.
pub fn draw_number(raster: &mut Raster, number: usize, cx: i32, cy: i32, color: PackedColor) {
    let digits = number.to_string();
    let len = digits.len() as i32;
    let cell = DIGIT_WIDTH as i32;
    let first_center = cx - len * cell / 2 + cell / 2;

    for (i, ch) in digits.bytes().enumerate() {
        draw_digit(raster, ch - b'0', first_center + i as i32 * cell, cy, color);
    }
}

/// Glyph color that stays readable on `background`.
///
/// Bright swatches (integer channel mean above 128) get black text, all
/// others white.
pub fn text_color(background: PackedColor) -> PackedColor {
    if background.brightness() > 128 {
        PackedColor::BLACK
    } else {
        PackedColor::WHITE
    }
}
