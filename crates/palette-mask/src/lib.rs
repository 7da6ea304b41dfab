//! palette-mask: palette index masks for palette-swap rendering
//!
//! An image drawn from a small ordered palette can be rewritten so that each
//! pixel stores *which* palette entry it was, as an intensity in the red
//! channel. Shaders and sprite tools then recolor the mask by looking the
//! index up in any palette of the same length.
//!
//! # Quick Start
//!
//! ```
//! use palette_mask::{apply_palette, generate_mask, Encoding, Palette, PixelGrid, Rgba, Step};
//!
//! let palette = Palette::new(vec![
//!     Rgba::opaque(0, 0, 0),
//!     Rgba::opaque(255, 0, 0),
//!     Rgba::opaque(255, 255, 255),
//! ]);
//! let image = PixelGrid::new(3, 1, palette.colors().to_vec()).unwrap();
//! let step = Step::new(32).unwrap();
//!
//! let mask = generate_mask(&image, &palette, step, Encoding::Red, &mut rand::thread_rng());
//! assert_eq!(mask.image.get(2, 0), Rgba::opaque(64, 0, 0));
//!
//! let restored = apply_palette(&mask.image, &palette, step, false);
//! assert_eq!(restored.image, image);
//! ```
//!
//! # Encoding
//!
//! Palette index `i` becomes intensity `i * step` (saturating at 255) and
//! intensity `v` decodes to index `v / step`. With `(len - 1) * step <= 255`
//! the two are exact inverses on palette colors. The green and blue channels
//! are either zero, a copy of red ([`Encoding::Normalized`]), or random
//! filler ([`Encoding::Random`]); decoding ignores them.
//!
//! # Matching
//!
//! Matching is exact on all four channels; the lowest palette index wins
//! when a color appears more than once. A fully transparent pixel that is
//! not itself in the palette maps to the first palette entry with alpha 0,
//! if there is one. Everything else is left as it was and reported through
//! [`Diagnostics`].
//!
//! # Palettes
//!
//! [`Palette`] is loaded from GIMP palette text with [`parse_gpl`] or taken
//! from the first row of a reference image with
//! [`Palette::from_image_row`]. [`generate_palette`] produces such a
//! reference image from any picture.
//!
//! The crate does no file I/O and no logging; callers decode images into
//! [`PixelGrid`]s and decide how to report [`Diagnostics`].

pub mod color;
pub mod image;
pub mod mask;
pub mod palette;


pub use color::Rgba;
pub use image::{ImageError, PixelGrid};
pub use mask::{
    apply_palette, generate_mask, generate_palette, unique_colors, ChannelFill, Diagnostics,
    Encoding, Step, StepError, Transformed,
};
pub use palette::{parse_gpl, GplError, Palette};
