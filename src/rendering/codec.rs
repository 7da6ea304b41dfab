//! Image file codec.
//!
//! Decodes any supported raster file into an RGBA [`PixelGrid`] and encodes
//! one back, choosing the format from the path's extension.

use std::path::Path;

use image::{ImageReader, RgbaImage};
use palette_mask::{ImageError, PixelGrid};

use crate::error::RedmaskError;

/// Read an image file as RGBA8.
///
/// The format is sniffed from the file content, falling back to the
/// extension. Missing or unreadable files are [`RedmaskError::Io`].
pub fn decode(path: &Path) -> Result<PixelGrid, RedmaskError> {
    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|source| RedmaskError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let rgba = reader
        .decode()
        .map_err(|source| RedmaskError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .into_rgba8();

    let (width, height) = rgba.dimensions();
    tracing::debug!(path = %path.display(), width, height, "Decoded image");

    Ok(PixelGrid::from_rgba_bytes(width, height, rgba.as_raw())?)
}

/// Write `image` to `path`, format chosen by extension.
pub fn encode(image: &PixelGrid, path: &Path) -> Result<(), RedmaskError> {
    let bytes = image.to_rgba_bytes();
    let actual = bytes.len();
    let rgba = RgbaImage::from_raw(image.width(), image.height(), bytes).ok_or(
        ImageError::SizeMismatch {
            expected: image.width() as usize * image.height() as usize * 4,
            actual,
        },
    )?;

    rgba.save(path).map_err(|source| RedmaskError::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "Encoded image"
    );
    Ok(())
}
