//! Palette application: mask intensities → palette colors.

use super::diagnostics::Diagnostics;
use super::options::Step;
use super::Transformed;
use crate::color::Rgba;
use crate::image::PixelGrid;
use crate::palette::Palette;

/// Palette color for a mask pixel, or `None` if `red / step` is out of range.
///
/// Only the red channel is read.
#[inline]
pub fn decode_pixel(pixel: Rgba, palette: &Palette, step: Step) -> Option<Rgba> {
    palette.get(step.decode(pixel.r))
}

/// Recolor a mask with `palette`.
///
/// Unless `keep_transparent` is set, any pixel whose alpha is not 255 is a
/// masked-out region and is copied through without consulting the palette.
/// Pixels whose decoded index falls outside the palette are copied through
/// and recorded once per distinct pixel value.
///
/// # Example
///
/// ```
/// use palette_mask::{apply_palette, Palette, PixelGrid, Rgba, Step};
///
/// let palette = Palette::new(vec![Rgba::opaque(0, 0, 0), Rgba::opaque(255, 255, 255)]);
/// let mask = PixelGrid::filled(1, 1, Rgba::opaque(1, 0, 0));
///
/// let out = apply_palette(&mask, &palette, Step::ONE, false);
/// assert_eq!(out.image.get(0, 0), Rgba::opaque(255, 255, 255));
/// ```
pub fn apply_palette(
    mask: &PixelGrid,
    palette: &Palette,
    step: Step,
    keep_transparent: bool,
) -> Transformed {
    let mut image = mask.clone();
    let mut diagnostics = Diagnostics::new();

    for (x, y, pixel) in mask.enumerate_pixels() {
        if !keep_transparent && !pixel.is_opaque() {
            diagnostics.record_transparent();
            continue;
        }
        match decode_pixel(pixel, palette, step) {
            Some(color) => {
                image.set(x, y, color);
                diagnostics.record_mapped();
            }
            None => {
                diagnostics.record_unmatched(pixel);
            }
        }
    }

    Transformed { image, diagnostics }
}
