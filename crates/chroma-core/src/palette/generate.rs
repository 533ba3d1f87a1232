//! Harmonic palette generation.
//!
//! Every variant follows the same pipeline: the base color is converted to
//! HSV once, each slot gets a target hue from the variant's hue schedule,
//! saturation and value are nudged by a factor derived from the slot index
//! so neighbouring slots do not collapse onto the same swatch, and the
//! resulting RGB color is snapped to the nearest catalog entry.

use super::error::PaletteError;
use super::kind::PaletteType;
use crate::catalog::{Catalog, ColorDistance};
use crate::color::{Hsv, PackedColor};

const MIN_SATURATION: f64 = 0.1;
const MIN_VALUE: f64 = 0.2;

/// An ordered, catalog-snapped palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    kind: PaletteType,
    base: PackedColor,
    colors: Vec<ColorDistance>,
}

impl Palette {
    pub fn kind(&self) -> PaletteType {
        self.kind
    }

    /// The color the palette was derived from.
    pub fn base(&self) -> PackedColor {
        self.base
    }

    pub fn colors(&self) -> &[ColorDistance] {
        &self.colors
    }

    pub fn into_colors(self) -> Vec<ColorDistance> {
        self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Generate `count` catalog colors related to `base` by `kind`.
///
/// Each entry's `distance` is measured between the computed color and the
/// catalog entry it was snapped to, so `is_exact()` tells whether the
/// catalog had the computed color verbatim.
///
/// # Example
///
/// ```
/// use chroma_core::{generate, Catalog, PackedColor, PaletteType};
///
/// let red = PackedColor::from_rgb(255, 0, 0);
/// let palette = generate(Catalog::builtin(), red, PaletteType::Triadic, 6);
/// assert_eq!(palette.len(), 6);
/// ```
pub fn generate(catalog: &Catalog, base: PackedColor, kind: PaletteType, count: usize) -> Palette {
    let hsv = base.to_hsv();

    let colors = (0..count)
        .map(|slot| PackedColor::from_hsv(slot_target(kind, hsv, slot, count)))
        // catalogs are never empty, so every slot snaps
        .filter_map(|target| catalog.nearest(target, None))
        .collect();

    Palette { kind, base, colors }
}

/// Like [`generate`], selecting the variant by identifier or display name.
pub fn generate_by_id(
    catalog: &Catalog,
    base: PackedColor,
    kind: &str,
    count: usize,
) -> Result<Palette, PaletteError> {
    let kind = kind.parse::<PaletteType>()?;
    Ok(generate(catalog, base, kind, count))
}

/// The unsnapped HSV target for one slot.
pub fn slot_target(kind: PaletteType, base: Hsv, slot: usize, count: usize) -> Hsv {
    let Hsv {
        hue: h,
        saturation: s,
        value: v,
    } = base;
    let i = slot as f64;
    let n = count as f64;

    match kind {
        PaletteType::Monochromatic => {
            // saturation rises and value falls along the ramp
            let scale_s = 0.5 + i / n;
            let scale_v = 0.6 + (n - i) / n;
            target(h, s * scale_s, v * scale_v)
        }
        PaletteType::Complementary => {
            let offsets = kind.hue_offsets();
            let band = band_of(slot, count, offsets.len());
            let scale_s = if band == 0 {
                0.7 + i / n
            } else {
                0.7 + (n - i) / n
            };
            let scale_v = 0.7 + i / n;
            target(h + offsets[band], s * scale_s, v * scale_v)
        }
        PaletteType::Analogous => {
            let offsets = kind.hue_offsets();
            let (start, end) = (offsets[0], offsets[offsets.len() - 1]);
            let hue = if count > 1 {
                h + start + (end - start) * i / (n - 1.0)
            } else {
                h
            };
            let scale = cycle(slot, 3);
            target(hue, s * scale, v * scale)
        }
        PaletteType::SplitComplementary | PaletteType::Triadic => {
            let offsets = kind.hue_offsets();
            let band = band_of(slot, count, offsets.len());
            let scale = cycle(slot, 3);
            target(h + offsets[band], s * scale, v * scale)
        }
        PaletteType::Tetradic => {
            let offsets = kind.hue_offsets();
            let band = band_of(slot, count, offsets.len());
            let scale = cycle(slot, 4);
            target(h + offsets[band], s * scale, v * scale)
        }
    }
}

/// Which of `bands` equal (integer-divided) runs of slots `slot` falls in.
fn band_of(slot: usize, count: usize, bands: usize) -> usize {
    (1..bands)
        .find(|&b| slot < b * count / bands)
        .map_or(bands - 1, |b| b - 1)
}

/// Repeating perturbation factor `0.7 + (slot mod period) / period`.
#[inline]
fn cycle(slot: usize, period: usize) -> f64 {
    0.7 + (slot % period) as f64 / period as f64
}

#[inline]
fn target(hue: f64, saturation: f64, value: f64) -> Hsv {
    Hsv::new(
        hue,
        saturation.clamp(MIN_SATURATION, 1.0),
        value.clamp(MIN_VALUE, 1.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_hsv() -> Hsv {
        Hsv::new(200.0, 0.6, 0.8)
    }

    #[test]
    fn test_band_of_halves() {
        let bands: Vec<usize> = (0..5).map(|i| band_of(i, 5, 2)).collect();
        assert_eq!(bands, vec![0, 0, 1, 1, 1]);
    }

    #[test]
    fn test_band_of_thirds() {
        let bands: Vec<usize> = (0..7).map(|i| band_of(i, 7, 3)).collect();
        assert_eq!(bands, vec![0, 0, 1, 1, 2, 2, 2]);
    }

    #[test]
    fn test_band_of_quarters() {
        let bands: Vec<usize> = (0..8).map(|i| band_of(i, 8, 4)).collect();
        assert_eq!(bands, vec![0, 0, 1, 1, 2, 2, 3, 3]);
    }

    #[test]
    fn test_band_of_single_slot() {
        assert_eq!(band_of(0, 1, 2), 1);
        assert_eq!(band_of(0, 1, 3), 2);
        assert_eq!(band_of(0, 1, 1), 0);
    }

    #[test]
    fn test_monochromatic_keeps_hue() {
        for slot in 0..5 {
            let t = slot_target(PaletteType::Monochromatic, base_hsv(), slot, 5);
            assert!((t.hue - 200.0).abs() < 1e-9);
        }
        let first = slot_target(PaletteType::Monochromatic, base_hsv(), 0, 5);
        let last = slot_target(PaletteType::Monochromatic, base_hsv(), 4, 5);
        assert!(first.saturation < last.saturation);
    }

    #[test]
    fn test_complementary_second_half_uses_opposite_hue() {
        let hues: Vec<f64> = (0..6)
            .map(|slot| slot_target(PaletteType::Complementary, base_hsv(), slot, 6).hue)
            .collect();
        for hue in &hues[..3] {
            assert!((hue - 200.0).abs() < 1e-9);
        }
        for hue in &hues[3..] {
            assert!((hue - 20.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_split_complementary_hues() {
        let hues: Vec<f64> = (0..6)
            .map(|slot| slot_target(PaletteType::SplitComplementary, base_hsv(), slot, 6).hue)
            .collect();
        let expected = [200.0, 200.0, 350.0, 350.0, 50.0, 50.0];
        for (hue, want) in hues.iter().zip(expected) {
            assert!((hue - want).abs() < 1e-9, "{hues:?}");
        }
    }

    #[test]
    fn test_analogous_spans_window() {
        let hues: Vec<f64> = (0..5)
            .map(|slot| slot_target(PaletteType::Analogous, base_hsv(), slot, 5).hue)
            .collect();
        let expected = [170.0, 185.0, 200.0, 215.0, 230.0];
        for (hue, want) in hues.iter().zip(expected) {
            assert!((hue - want).abs() < 1e-9, "{hues:?}");
        }
    }

    #[test]
    fn test_analogous_single_slot_is_base_hue() {
        let t = slot_target(PaletteType::Analogous, base_hsv(), 0, 1);
        assert!((t.hue - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_analogous_wraps_around_zero() {
        let t = slot_target(PaletteType::Analogous, Hsv::new(10.0, 1.0, 1.0), 0, 3);
        assert!((t.hue - 340.0).abs() < 1e-9);
    }

    #[test]
    fn test_tetradic_hues() {
        let hues: Vec<f64> = (0..4)
            .map(|slot| slot_target(PaletteType::Tetradic, base_hsv(), slot, 4).hue)
            .collect();
        let expected = [200.0, 290.0, 20.0, 110.0];
        for (hue, want) in hues.iter().zip(expected) {
            assert!((hue - want).abs() < 1e-9, "{hues:?}");
        }
    }

    #[test]
    fn test_perturbation_is_clamped() {
        let dark = Hsv::new(0.0, 0.0, 0.0);
        for kind in PaletteType::ALL {
            for slot in 0..10 {
                let t = slot_target(kind, dark, slot, 10);
                assert!(t.saturation >= MIN_SATURATION && t.saturation <= 1.0);
                assert!(t.value >= MIN_VALUE && t.value <= 1.0);
            }
        }
    }

    #[test]
    fn test_generate_snaps_to_catalog() {
        let catalog = Catalog::builtin();
        let palette = generate(catalog, PackedColor::from_rgb(30, 144, 255), PaletteType::Triadic, 9);
        assert_eq!(palette.len(), 9);
        assert_eq!(palette.kind(), PaletteType::Triadic);
        for entry in palette.colors() {
            assert_eq!(catalog.lookup_by_name(&entry.name), Some(entry.color));
        }
    }

    #[test]
    fn test_generate_zero_count() {
        let palette = generate(Catalog::builtin(), PackedColor::WHITE, PaletteType::Analogous, 0);
        assert!(palette.is_empty());
    }

    #[test]
    fn test_generate_is_deterministic() {
        let base = PackedColor::from_rgb(120, 40, 200);
        let a = generate(Catalog::builtin(), base, PaletteType::Tetradic, 12);
        let b = generate(Catalog::builtin(), base, PaletteType::Tetradic, 12);
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_by_id() {
        let base = PackedColor::from_rgb(255, 0, 0);
        let palette = generate_by_id(Catalog::builtin(), base, "split-complementary", 3).unwrap();
        assert_eq!(palette.kind(), PaletteType::SplitComplementary);

        assert_eq!(
            generate_by_id(Catalog::builtin(), base, "rainbow", 3),
            Err(PaletteError::UnknownPaletteType("rainbow".to_string()))
        );
    }
}
