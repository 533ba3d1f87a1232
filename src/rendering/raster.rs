//! RGBA pixel buffer with axis-aligned rectangle fills.

use chroma_core::PackedColor;
use tiny_skia::{Paint, Pixmap, Rect, Transform};

use crate::error::RenderError;

/// A fixed-size RGBA canvas that starts fully transparent.
///
/// All drawing is done with hard-edged rectangles; anti-aliasing is off so
/// every pixel is either untouched or exactly the fill color.
pub struct Raster {
    pixmap: Pixmap,
}

impl Raster {
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        let pixmap = Pixmap::new(width, height).ok_or(RenderError::PixmapAllocation)?;
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Fill an opaque rectangle. Parts outside the canvas are clipped.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: PackedColor) {
        let Some(rect) = Rect::from_xywh(x as f32, y as f32, width as f32, height as f32) else {
            return;
        };

        let (r, g, b) = color.to_rgb();
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, 255);
        paint.anti_alias = false;

        self.pixmap
            .fill_rect(rect, &paint, Transform::identity(), None);
    }

    /// Straight (non-premultiplied) RGBA of one pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
    }

    /// Consume the raster, returning row-major straight RGBA bytes.
    pub fn into_rgba(self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixmap.pixels().len() * 4);
        for p in self.pixmap.pixels() {
            let c = p.demultiply();
            out.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        out
    }
}
