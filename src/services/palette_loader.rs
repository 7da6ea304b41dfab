use std::path::Path;

use palette_mask::{parse_gpl, Palette};

use crate::error::RedmaskError;
use crate::rendering::codec;

/// True when `path` names a GIMP palette (`.gpl`, any case).
pub fn is_gpl_path(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("gpl"))
        .unwrap_or(false)
}

/// Load a palette from a `.gpl` file or from the first row of an image.
///
/// GIMP palette colors are opaque; image palettes keep each pixel's alpha.
pub fn load_palette(path: &Path) -> Result<Palette, RedmaskError> {
    let palette = if is_gpl_path(path) {
        let text = std::fs::read_to_string(path).map_err(|source| RedmaskError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse_gpl(&text).map_err(|e| RedmaskError::from_gpl(path, e))?
    } else {
        let image = codec::decode(path)?;
        Palette::from_image_row(&image)
    };

    tracing::info!(
        path = %path.display(),
        name = palette.name(),
        columns = palette.columns(),
        colors = palette.len(),
        "Loaded palette"
    );
    if !palette.comments().is_empty() {
        tracing::debug!(comments = ?palette.comments(), "Palette comments");
    }

    Ok(palette)
}
