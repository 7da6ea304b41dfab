//! Palette struct with ordered colors and exact-match lookup.
//!
//! The position of a color in the palette is the value a mask encodes, so
//! order is significant and duplicates are allowed. Lookups always resolve
//! to the lowest index holding a color.

use std::collections::HashMap;

use crate::color::Rgba;
use crate::image::PixelGrid;

/// Column count reported for palettes that do not specify one.
pub const DEFAULT_COLUMNS: u32 = 4;

/// An ordered, indexable sequence of colors plus display metadata.
///
/// The metadata (`name`, `columns`, `comments`, per-color `names`) is carried
/// for round-tripping GIMP palettes and is never consulted by the transforms.
///
/// # Precomputation
///
/// The exact-match table and the first fully transparent entry are built as
/// colors are pushed, so per-pixel lookups are a single hash probe.
///
/// # Example
///
/// ```
/// use palette_mask::{Palette, Rgba};
///
/// let palette = Palette::new(vec![
///     Rgba::opaque(0, 0, 0),
///     Rgba::opaque(255, 255, 255),
///     Rgba::opaque(0, 0, 0),
/// ]);
///
/// assert_eq!(palette.len(), 3);
/// // Duplicates resolve to the first occurrence
/// assert_eq!(palette.index_of(Rgba::opaque(0, 0, 0)), Some(0));
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Rgba>,
    names: Vec<String>,

    name: String,
    columns: u32,
    comments: Vec<String>,

    // First index for each distinct color
    lookup: HashMap<Rgba, usize>,
    first_transparent: Option<usize>,
}

impl Palette {
    /// Create an unnamed palette from colors in index order.
    pub fn new(colors: Vec<Rgba>) -> Self {
        let mut palette = Self::empty();
        for color in colors {
            palette.push(color, String::new());
        }
        palette
    }

    /// A palette with no colors and default metadata.
    pub fn empty() -> Self {
        Self {
            colors: Vec::new(),
            names: Vec::new(),
            name: String::new(),
            columns: DEFAULT_COLUMNS,
            comments: Vec::new(),
            lookup: HashMap::new(),
            first_transparent: None,
        }
    }

    /// Take row 0 of a reference image, left to right, alpha included.
    ///
    /// An empty image yields an empty palette.
    pub fn from_image_row(image: &PixelGrid) -> Self {
        if image.is_empty() {
            return Self::empty();
        }
        Self::new(image.row(0).to_vec())
    }

    /// Append a color with its display name.
    pub fn push(&mut self, color: Rgba, name: String) {
        let index = self.colors.len();
        self.lookup.entry(color).or_insert(index);
        if self.first_transparent.is_none() && color.is_transparent() {
            self.first_transparent = Some(index);
        }
        self.colors.push(color);
        self.names.push(name);
    }

    /// Set the palette's display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the display column hint.
    pub fn with_columns(mut self, columns: u32) -> Self {
        self.columns = columns;
        self
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_columns(&mut self, columns: u32) {
        self.columns = columns;
    }

    pub(crate) fn push_comment(&mut self, comment: String) {
        self.comments.push(comment);
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `index`, if in range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Rgba> {
        self.colors.get(index).copied()
    }

    /// Lowest index whose color equals `color` on all four channels.
    #[inline]
    pub fn index_of(&self, color: Rgba) -> Option<usize> {
        self.lookup.get(&color).copied()
    }

    /// Lowest index whose alpha is 0, regardless of its RGB channels.
    #[inline]
    pub fn first_transparent(&self) -> Option<usize> {
        self.first_transparent
    }

    #[inline]
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    /// Per-color display names, parallel to [`colors()`](Self::colors).
    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    #[inline]
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Render the palette as a single-row image, one pixel per entry.
    pub fn to_image_row(&self) -> PixelGrid {
        PixelGrid::from_row(self.colors.clone())
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::empty()
    }
}
