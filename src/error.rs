use std::path::PathBuf;

use palette_mask::{GplError, ImageError, StepError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RedmaskError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Palette format error in {}: {source}", .path.display())]
    Format { path: PathBuf, source: GplError },

    #[error("Palette parse error in {}: {source}", .path.display())]
    Parse { path: PathBuf, source: GplError },

    #[error("Failed to decode image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to encode image {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Pixel buffer error: {0}")]
    Buffer(#[from] ImageError),

    #[error("Invalid step: {0}")]
    InvalidStep(#[from] StepError),

    #[error("No colors to write to palette {}", .0.display())]
    EmptyPalette(PathBuf),
}

impl RedmaskError {
    /// Sort a GIMP palette failure into the format / parse categories.
    pub fn from_gpl(path: impl Into<PathBuf>, source: GplError) -> Self {
        let path = path.into();
        if source.is_format_error() {
            RedmaskError::Format { path, source }
        } else {
            RedmaskError::Parse { path, source }
        }
    }
}
