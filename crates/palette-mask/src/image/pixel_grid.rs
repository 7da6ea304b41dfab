//! PixelGrid: an owned RGBA raster in row-major order.
//!
//! [`PixelGrid`] is the image type every transform consumes and produces.
//! It carries no codec: callers decode files into flat RGBA8 bytes and hand
//! them to [`PixelGrid::from_rgba_bytes`], then write
//! [`PixelGrid::to_rgba_bytes`] back out.

use std::fmt;

use crate::color::Rgba;

/// Error building a [`PixelGrid`] from a flat buffer.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageError {
    /// The buffer length does not match `width * height` pixels.
    SizeMismatch {
        /// Expected number of elements
        expected: usize,
        /// Number of elements provided
        actual: usize,
    },
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::SizeMismatch { expected, actual } => {
                write!(
                    f,
                    "pixel buffer size mismatch: expected {} elements, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for ImageError {}

/// A width × height grid of [`Rgba`] pixels.
///
/// Pixels are addressed by `(x, y)` and stored top-to-bottom, left-to-right.
/// Every transform iterates in that order, which makes discovery order
/// (for deduplicated diagnostics and generated palettes) deterministic.
///
/// # Example
///
/// ```
/// use palette_mask::{PixelGrid, Rgba};
///
/// let mut grid = PixelGrid::filled(2, 1, Rgba::TRANSPARENT);
/// grid.set(1, 0, Rgba::opaque(255, 0, 0));
///
/// assert_eq!(grid.get(0, 0), Rgba::TRANSPARENT);
/// assert_eq!(grid.get(1, 0), Rgba::opaque(255, 0, 0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl PixelGrid {
    /// Wrap row-major pixels.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::SizeMismatch`] if `pixels.len() != width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgba>) -> Result<Self, ImageError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(ImageError::SizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A grid with every pixel set to `color`.
    pub fn filled(width: u32, height: u32, color: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    /// A single-row grid holding `colors` left to right.
    pub fn from_row(colors: Vec<Rgba>) -> Self {
        Self {
            width: colors.len() as u32,
            height: if colors.is_empty() { 0 } else { 1 },
            pixels: colors,
        }
    }

    /// Build from interleaved `[R, G, B, A, R, G, B, A, ...]` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::SizeMismatch`] if `bytes.len() != width * height * 4`.
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self, ImageError> {
        let expected = width as usize * height as usize * 4;
        if bytes.len() != expected {
            return Err(ImageError::SizeMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|px| Rgba::new(px[0], px[1], px[2], px[3]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Flatten to interleaved RGBA8 bytes.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for px in &self.pixels {
            bytes.extend_from_slice(&px.to_bytes());
        }
        bytes
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// All pixels, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// True when the grid holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the grid.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Rgba {
        self.pixels[self.offset(x, y)]
    }

    /// Overwrite the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the grid.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Rgba) {
        let offset = self.offset(x, y);
        self.pixels[offset] = color;
    }

    /// Pixels of row `y`, left to right.
    pub fn row(&self, y: u32) -> &[Rgba] {
        let start = y as usize * self.width as usize;
        &self.pixels[start..start + self.width as usize]
    }

    /// Iterate `(x, y, color)` in scan order.
    pub fn enumerate_pixels(&self) -> impl Iterator<Item = (u32, u32, Rgba)> + '_ {
        let width = self.width.max(1);
        self.pixels.iter().enumerate().map(move |(i, &color)| {
            let i = i as u32;
            (i % width, i / width, color)
        })
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }
}
