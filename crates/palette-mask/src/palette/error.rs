//! Error types for palette loading
//!
//! GIMP palette text is either rejected outright (wrong header) or rejected
//! at the first bad number. There is no partial result.

use std::fmt;
use std::num::ParseIntError;

/// Error type for parsing GIMP palette (`.gpl`) text.
#[derive(Debug, Clone, PartialEq)]
pub enum GplError {
    /// The first line is not the literal `GIMP Palette` header.
    HeaderMismatch {
        /// The trimmed first line that was found instead
        found: String,
    },
    /// A color channel is not an integer in `0..=255`.
    InvalidChannel {
        /// 1-based line number
        line: usize,
        /// Channel name (`red`, `green` or `blue`)
        channel: &'static str,
        /// Underlying integer parse failure
        source: ParseIntError,
    },
    /// A recognized parameter carries a malformed value.
    InvalidParameter {
        /// 1-based line number
        line: usize,
        /// Parameter key without the colon
        key: &'static str,
        /// Underlying integer parse failure
        source: ParseIntError,
    },
}

impl GplError {
    /// True for the format-level failure (wrong header), false for value
    /// parse failures.
    pub fn is_format_error(&self) -> bool {
        matches!(self, GplError::HeaderMismatch { .. })
    }
}

impl fmt::Display for GplError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GplError::HeaderMismatch { found } => {
                write!(
                    f,
                    "header mismatch: expected \"GIMP Palette\", found {:?}",
                    found
                )
            }
            GplError::InvalidChannel {
                line,
                channel,
                source,
            } => {
                write!(f, "line {}: invalid {} channel: {}", line, channel, source)
            }
            GplError::InvalidParameter { line, key, source } => {
                write!(f, "line {}: invalid {} value: {}", line, key, source)
            }
        }
    }
}

impl std::error::Error for GplError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GplError::InvalidChannel { source, .. } => Some(source),
            GplError::InvalidParameter { source, .. } => Some(source),
            GplError::HeaderMismatch { .. } => None,
        }
    }
}
