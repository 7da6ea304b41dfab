//! Palette extraction: the distinct colors of an image.

use std::collections::HashSet;

use crate::color::Rgba;
use crate::image::PixelGrid;

/// Distinct colors in scan order of first appearance.
///
/// Only opaque colors are kept unless `include_transparent` is set, in which
/// case every alpha value qualifies.
pub fn unique_colors(image: &PixelGrid, include_transparent: bool) -> Vec<Rgba> {
    let mut seen = HashSet::new();
    let mut colors = Vec::new();
    for &color in image.pixels() {
        if !include_transparent && !color.is_opaque() {
            continue;
        }
        if seen.insert(color) {
            colors.push(color);
        }
    }
    colors
}

/// One-row palette image of the distinct colors of `image`.
///
/// The result can be fed straight back in as an image palette. It is empty
/// (zero width) when no pixel qualifies.
///
/// # Example
///
/// ```
/// use palette_mask::{generate_palette, PixelGrid, Rgba};
///
/// let image = PixelGrid::filled(2, 1, Rgba::opaque(10, 10, 10));
/// let palette_image = generate_palette(&image, false);
///
/// assert_eq!(palette_image.width(), 1);
/// assert_eq!(palette_image.get(0, 0), Rgba::opaque(10, 10, 10));
/// ```
pub fn generate_palette(image: &PixelGrid, include_transparent: bool) -> PixelGrid {
    PixelGrid::from_row(unique_colors(image, include_transparent))
}
