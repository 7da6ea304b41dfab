//! Mask generation: palette colors → index intensities.

use rand::Rng;

use super::diagnostics::Diagnostics;
use super::options::{Encoding, Step};
use super::Transformed;
use crate::color::Rgba;
use crate::image::PixelGrid;
use crate::palette::Palette;

/// Outcome of classifying one source pixel against the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskPixel {
    /// Encode this palette index.
    Index(usize),
    /// Fully transparent and the palette has no transparent entry.
    Transparent,
    /// Opaque (or partially transparent) color absent from the palette.
    Unmatched,
}

/// Classify `color`: exact match first, then the palette's first
/// transparent entry for alpha-0 pixels.
#[inline]
pub fn classify(color: Rgba, palette: &Palette) -> MaskPixel {
    if let Some(index) = palette.index_of(color) {
        return MaskPixel::Index(index);
    }
    if color.is_transparent() {
        return match palette.first_transparent() {
            Some(index) => MaskPixel::Index(index),
            None => MaskPixel::Transparent,
        };
    }
    MaskPixel::Unmatched
}

/// Write intensity `value` as a mask pixel.
///
/// Random channels draw a fresh byte from `rng` per call.
#[inline]
pub fn encode_value<R: Rng + ?Sized>(value: u8, encoding: Encoding, rng: &mut R) -> Rgba {
    match encoding {
        Encoding::Normalized => Rgba::opaque(value, value, value),
        Encoding::Random(fill) => {
            let green = if fill.green { rng.gen::<u8>() } else { 0 };
            let blue = if fill.blue { rng.gen::<u8>() } else { 0 };
            Rgba::opaque(value, green, blue)
        }
        Encoding::Red => Rgba::opaque(value, 0, 0),
    }
}

/// Replace every palette-colored pixel with its encoded index.
///
/// Pixels are visited in scan order. Transparent pixels without a
/// transparent palette entry and colors absent from the palette are copied
/// through unchanged and recorded in the returned [`Diagnostics`]. The
/// source image is not modified.
///
/// # Example
///
/// ```
/// use palette_mask::{generate_mask, Encoding, Palette, PixelGrid, Rgba, Step};
///
/// let palette = Palette::new(vec![Rgba::opaque(0, 0, 0), Rgba::opaque(255, 255, 255)]);
/// let image = PixelGrid::filled(2, 2, Rgba::opaque(255, 255, 255));
///
/// let out = generate_mask(&image, &palette, Step::new(64).unwrap(), Encoding::Red, &mut rand::thread_rng());
/// assert_eq!(out.image.get(0, 0), Rgba::opaque(64, 0, 0));
/// assert!(out.diagnostics.is_clean());
/// ```
pub fn generate_mask<R: Rng + ?Sized>(
    image: &PixelGrid,
    palette: &Palette,
    step: Step,
    encoding: Encoding,
    rng: &mut R,
) -> Transformed {
    let mut mask = image.clone();
    let mut diagnostics = Diagnostics::new();

    for (x, y, color) in image.enumerate_pixels() {
        match classify(color, palette) {
            MaskPixel::Index(index) => {
                mask.set(x, y, encode_value(step.encode(index), encoding, rng));
                diagnostics.record_mapped();
            }
            MaskPixel::Transparent => diagnostics.record_transparent(),
            MaskPixel::Unmatched => {
                diagnostics.record_unmatched(color);
            }
        }
    }

    Transformed {
        image: mask,
        diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::ChannelFill;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn three_colors() -> Palette {
        Palette::new(vec![
            Rgba::opaque(255, 0, 0),
            Rgba::opaque(0, 255, 0),
            Rgba::opaque(0, 0, 255),
        ])
    }

    #[test]
    fn test_encode_value_red() {
        assert_eq!(
            encode_value(42, Encoding::Red, &mut rng()),
            Rgba::opaque(42, 0, 0)
        );
    }

    #[test]
    fn test_encode_value_normalized() {
        assert_eq!(
            encode_value(42, Encoding::Normalized, &mut rng()),
            Rgba::opaque(42, 42, 42)
        );
    }

    #[test]
    fn test_encode_value_random_green_only() {
        let fill = ChannelFill::parse("g");
        let mut r = rng();
        for _ in 0..32 {
            let px = encode_value(9, Encoding::Random(fill), &mut r);
            assert_eq!(px.r, 9);
            assert_eq!(px.b, 0);
            assert_eq!(px.a, 255);
        }
    }

    #[test]
    fn test_encode_value_random_is_seed_reproducible() {
        let fill = ChannelFill::parse("gb");
        let a = encode_value(1, Encoding::Random(fill), &mut rng());
        let b = encode_value(1, Encoding::Random(fill), &mut rng());
        assert_eq!(a, b);
    }

    #[test]
    fn test_classify_transparent_uses_first_transparent_entry() {
        let palette = Palette::new(vec![
            Rgba::opaque(0, 0, 0),
            Rgba::new(50, 50, 50, 0),
            Rgba::new(0, 0, 0, 0),
        ]);
        // Exact match wins over the transparent fallback
        assert_eq!(classify(Rgba::new(0, 0, 0, 0), &palette), MaskPixel::Index(2));
        assert_eq!(classify(Rgba::new(9, 9, 9, 0), &palette), MaskPixel::Index(1));
    }

    #[test]
    fn test_classify_transparent_without_entry() {
        assert_eq!(
            classify(Rgba::new(9, 9, 9, 0), &three_colors()),
            MaskPixel::Transparent
        );
    }

    #[test]
    fn test_classify_partial_alpha_is_unmatched() {
        assert_eq!(
            classify(Rgba::new(255, 0, 0, 128), &three_colors()),
            MaskPixel::Unmatched
        );
    }

    #[test]
    fn test_generate_mask_encodes_indices_with_step() {
        let pixels = vec![
            Rgba::opaque(0, 0, 255),
            Rgba::opaque(255, 0, 0),
            Rgba::opaque(0, 255, 0),
        ];
        let image = PixelGrid::new(3, 1, pixels).unwrap();
        let out = generate_mask(
            &image,
            &three_colors(),
            Step::new(10).unwrap(),
            Encoding::Red,
            &mut rng(),
        );
        let reds: Vec<u8> = out.image.pixels().iter().map(|p| p.r).collect();
        assert_eq!(reds, vec![20, 0, 10]);
        assert_eq!(out.diagnostics.mapped_pixels(), 3);
    }

    #[test]
    fn test_generate_mask_leaves_unmatched_and_transparent_unchanged() {
        let stray = Rgba::opaque(1, 2, 3);
        let clear = Rgba::new(4, 5, 6, 0);
        let image = PixelGrid::new(3, 1, vec![stray, clear, Rgba::opaque(0, 255, 0)]).unwrap();
        let out = generate_mask(&image, &three_colors(), Step::ONE, Encoding::Red, &mut rng());

        assert_eq!(out.image.get(0, 0), stray);
        assert_eq!(out.image.get(1, 0), clear);
        assert_eq!(out.image.get(2, 0), Rgba::opaque(1, 0, 0));
        assert_eq!(out.diagnostics.unmatched(), &[stray]);
        assert_eq!(out.diagnostics.transparent_ignored(), 1);
    }

    #[test]
    fn test_generate_mask_does_not_touch_source() {
        let image = PixelGrid::filled(2, 2, Rgba::opaque(0, 0, 255));
        let before = image.clone();
        let _ = generate_mask(&image, &three_colors(), Step::ONE, Encoding::Normalized, &mut rng());
        assert_eq!(image, before);
    }
}
