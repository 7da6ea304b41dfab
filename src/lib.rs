//! Redmask - palette index masks for recolorable sprites
//!
//! Converts paletted images into red-channel index masks, reapplies
//! palettes to masks, and extracts palettes from images. The pixel work
//! lives in the `palette-mask` crate; this crate adds file I/O, output
//! naming and the command line pipeline.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
