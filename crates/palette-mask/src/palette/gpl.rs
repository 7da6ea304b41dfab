//! GIMP palette (`.gpl`) text format.
//!
//! Layout:
//!
//! ```text
//! GIMP Palette
//! Name: Example          <- parameter section: Name/Columns and # comments
//! Columns: 4
//! # free text
//! 255   0   0 Red        <- one color per line, rest of the line is its name
//!   0 255   0 Bright Green
//! ```
//!
//! The first line that is neither a recognized parameter nor a comment ends
//! the parameter section. After that, comments are still collected and every
//! other line with at least four whitespace-separated tokens is a color.
//! Shorter lines (including blank ones and color lines without a name) are
//! skipped. Alpha is always 255.

use std::fmt::Write as _;
use std::str::FromStr;

use super::error::GplError;
use super::palette::Palette;
use crate::color::Rgba;

/// Literal first line of every GIMP palette.
pub const GPL_HEADER: &str = "GIMP Palette";

const PARAM_NAME: &str = "Name:";
const PARAM_COLUMNS: &str = "Columns:";
const COMMENT: char = '#';
const CHANNELS: [&str; 3] = ["red", "green", "blue"];

/// Name written for colors that have none.
const UNTITLED: &str = "Untitled";

/// Parse GIMP palette text.
///
/// # Errors
///
/// - [`GplError::HeaderMismatch`] if the first line is not `GIMP Palette`
///   (an empty input counts as a mismatch)
/// - [`GplError::InvalidParameter`] if `Columns:` is not an integer
/// - [`GplError::InvalidChannel`] if a color line's first three tokens are
///   not integers in `0..=255`
///
/// # Example
///
/// ```
/// use palette_mask::{parse_gpl, Rgba};
///
/// let palette = parse_gpl("GIMP Palette\n0 0 0 Black\n255 255 255 White\n").unwrap();
/// assert_eq!(palette.colors(), &[Rgba::opaque(0, 0, 0), Rgba::opaque(255, 255, 255)]);
/// assert_eq!(palette.names(), &["Black".to_string(), "White".to_string()]);
/// ```
pub fn parse_gpl(text: &str) -> Result<Palette, GplError> {
    let mut lines = text.lines().map(str::trim);

    let header = lines.next().unwrap_or("");
    if header != GPL_HEADER {
        return Err(GplError::HeaderMismatch {
            found: header.to_string(),
        });
    }

    let mut palette = Palette::empty();
    let mut in_params = true;

    for (offset, line) in lines.enumerate() {
        // Header was line 1
        let line_no = offset + 2;

        if line.starts_with(COMMENT) {
            palette.push_comment(comment_text(line).to_string());
            continue;
        }

        if in_params {
            if let Some(value) = line.strip_prefix(PARAM_NAME) {
                palette.set_name(value.trim().to_string());
                continue;
            }
            if let Some(value) = line.strip_prefix(PARAM_COLUMNS) {
                let columns =
                    value
                        .trim()
                        .parse::<u32>()
                        .map_err(|source| GplError::InvalidParameter {
                            line: line_no,
                            key: "Columns",
                            source,
                        })?;
                palette.set_columns(columns);
                continue;
            }
            in_params = false;
        }

        if let Some((color, name)) = parse_color_line(line, line_no)? {
            palette.push(color, name);
        }
    }

    Ok(palette)
}

/// Text of a comment line: everything after the first `#`, trimmed.
fn comment_text(line: &str) -> &str {
    match line.find(COMMENT) {
        Some(pos) => line[pos + COMMENT.len_utf8()..].trim(),
        None => line.trim(),
    }
}

/// Parse `R G B name...`; `Ok(None)` for lines with fewer than four tokens.
fn parse_color_line(line: &str, line_no: usize) -> Result<Option<(Rgba, String)>, GplError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 4 {
        return Ok(None);
    }

    let mut rgb = [0u8; 3];
    for (i, channel) in CHANNELS.into_iter().enumerate() {
        rgb[i] = tokens[i]
            .parse::<u8>()
            .map_err(|source| GplError::InvalidChannel {
                line: line_no,
                channel,
                source,
            })?;
    }

    let name = tokens[3..].join(" ");
    Ok(Some((Rgba::opaque(rgb[0], rgb[1], rgb[2]), name)))
}

impl Palette {
    /// Parse GIMP palette text. See [`parse_gpl`].
    pub fn from_gpl(text: &str) -> Result<Self, GplError> {
        parse_gpl(text)
    }

    /// Serialize as GIMP palette text.
    ///
    /// Alpha is not representable and is dropped. Unnamed colors are written
    /// as `Untitled` so the line keeps its fourth token and parses back.
    pub fn to_gpl(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", GPL_HEADER);
        let _ = writeln!(out, "{} {}", PARAM_NAME, self.name());
        let _ = writeln!(out, "{} {}", PARAM_COLUMNS, self.columns());
        for comment in self.comments() {
            let _ = writeln!(out, "{} {}", COMMENT, comment);
        }
        for (color, name) in self.colors().iter().zip(self.names()) {
            let name = if name.is_empty() { UNTITLED } else { name };
            let _ = writeln!(out, "{:3} {:3} {:3}\t{}", color.r, color.g, color.b, name);
        }
        out
    }
}

impl FromStr for Palette {
    type Err = GplError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_gpl(s)
    }
}
