//! HSV color model and conversions to and from 8-bit RGB.
//!
//! Both conversions are pure functions; they are the only place where
//! floating point enters the color pipeline.

/// A color in HSV space.
///
/// `hue` is in degrees `[0, 360)`, `saturation` and `value` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

impl Hsv {
    /// Create an HSV color, wrapping the hue and clamping saturation and value.
    pub fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue: wrap_hue(hue),
            saturation: saturation.clamp(0.0, 1.0),
            value: value.clamp(0.0, 1.0),
        }
    }

    /// The same color with the hue rotated by `degrees`.
    pub fn rotate(self, degrees: f64) -> Self {
        Self::new(self.hue + degrees, self.saturation, self.value)
    }
}

/// Reduce a hue into `[0, 360)`.
#[inline]
pub fn wrap_hue(hue: f64) -> f64 {
    let wrapped = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Convert 8-bit RGB to HSV.
///
/// Gray colors (max == min) have hue 0 and saturation 0.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let rf = r as f64 / 255.0;
    let gf = g as f64 / 255.0;
    let bf = b as f64 / 255.0;

    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = max - min;

    if delta == 0.0 {
        return Hsv {
            hue: 0.0,
            saturation: 0.0,
            value: max,
        };
    }

    let hue = if max == rf {
        60.0 * ((gf - bf) / delta).rem_euclid(6.0)
    } else if max == gf {
        60.0 * ((bf - rf) / delta + 2.0)
    } else {
        60.0 * ((rf - gf) / delta + 4.0)
    };

    Hsv {
        hue: wrap_hue(hue),
        saturation: delta / max,
        value: max,
    }
}

/// Convert HSV to 8-bit RGB.
///
/// The hue is reduced modulo 360 and saturation/value are clamped into
/// `[0, 1]` before conversion. Channels are rounded to the nearest integer.
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> (u8, u8, u8) {
    let h = wrap_hue(hue);
    let s = saturation.clamp(0.0, 1.0);
    let v = value.clamp(0.0, 1.0);

    let chroma = v * s;
    let sector = h / 60.0;
    let x = chroma * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
    let m = v - chroma;

    let (r1, g1, b1) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    (to_byte(r1 + m), to_byte(g1 + m), to_byte(b1 + m))
}

#[inline]
fn to_byte(channel: f64) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}
