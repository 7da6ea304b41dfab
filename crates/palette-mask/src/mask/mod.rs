//! Mask transforms
//!
//! Three passes over a [`PixelGrid`], all in scan order:
//!
//! - [`generate_mask`]: palette colors → `index * step` intensities
//! - [`apply_palette`]: intensities → palette colors via `red / step`
//! - [`generate_palette`]: distinct colors → one-row palette image

mod decode;
mod diagnostics;
mod encode;
mod extract;
mod options;

pub use decode::{apply_palette, decode_pixel};
pub use diagnostics::Diagnostics;
pub use encode::{classify, encode_value, generate_mask, MaskPixel};
pub use extract::{generate_palette, unique_colors};
pub use options::{ChannelFill, Encoding, Step, StepError};

use crate::image::PixelGrid;

/// Output of a per-pixel transform: a fresh image plus what was skipped.
#[derive(Debug, Clone)]
pub struct Transformed {
    pub image: PixelGrid,
    pub diagnostics: Diagnostics,
}
