//! Assertion helpers for tests.

use std::path::Path;

use palette_mask::{PixelGrid, Rgba};
use pretty_assertions::assert_eq;

/// Assert the red channel of every pixel, in scan order.
pub fn assert_reds(image: &PixelGrid, expected: &[u8]) {
    let reds: Vec<u8> = image.pixels().iter().map(|p| p.r).collect();
    assert_eq!(reds, expected);
}

/// Assert the image's pixels, in scan order.
pub fn assert_pixels(image: &PixelGrid, expected: &[Rgba]) {
    assert_eq!(image.pixels(), expected);
}

pub fn assert_missing(path: &Path) {
    assert!(
        !path.exists(),
        "Expected no file at {}, but one was written",
        path.display()
    );
}
