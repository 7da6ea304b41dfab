//! In-memory raster type shared by every transform.

mod pixel_grid;

pub use pixel_grid::{ImageError, PixelGrid};
