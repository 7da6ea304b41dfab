//! Palette types and the GIMP palette text format
//!
//! This module provides the ordered [`Palette`] type, the `.gpl` reader and
//! writer, and the error type for palette parsing.

mod error;
mod gpl;
mod palette;

pub use error::GplError;
pub use gpl::{parse_gpl, GPL_HEADER};
pub use palette::{Palette, DEFAULT_COLUMNS};
