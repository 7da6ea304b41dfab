//! Non-fatal findings collected during a transform pass.
//!
//! Transforms never log. They record what they skipped here and the caller
//! decides whether and how to report it. Nothing recorded here influences
//! the output image.

use std::collections::HashSet;

use crate::color::Rgba;

/// Per-pass record of skipped pixels.
///
/// Unmatched colors are deduplicated and kept in discovery (scan) order;
/// transparent skips are only counted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    unmatched: Vec<Rgba>,
    seen: HashSet<Rgba>,
    unmatched_pixels: usize,
    transparent_ignored: usize,
    mapped_pixels: usize,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pixel with no palette correspondence. Returns `true` the
    /// first time a given color is seen.
    pub fn record_unmatched(&mut self, color: Rgba) -> bool {
        self.unmatched_pixels += 1;
        if self.seen.insert(color) {
            self.unmatched.push(color);
            true
        } else {
            false
        }
    }

    /// Record a transparent pixel left untouched.
    pub fn record_transparent(&mut self) {
        self.transparent_ignored += 1;
    }

    /// Record a pixel that was rewritten.
    pub fn record_mapped(&mut self) {
        self.mapped_pixels += 1;
    }

    /// Distinct unmatched colors, in scan order of first appearance.
    #[inline]
    pub fn unmatched(&self) -> &[Rgba] {
        &self.unmatched
    }

    /// Total pixels that were unmatched, duplicates included.
    #[inline]
    pub fn unmatched_pixels(&self) -> usize {
        self.unmatched_pixels
    }

    /// Transparent pixels left untouched.
    #[inline]
    pub fn transparent_ignored(&self) -> usize {
        self.transparent_ignored
    }

    /// Pixels rewritten by the transform.
    #[inline]
    pub fn mapped_pixels(&self) -> usize {
        self.mapped_pixels
    }

    /// True when every pixel was rewritten.
    pub fn is_clean(&self) -> bool {
        self.unmatched.is_empty() && self.transparent_ignored == 0
    }
}
