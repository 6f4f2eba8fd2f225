//! Character palettes for ASCII rendering.

use std::fmt;
use std::str::FromStr;

/// Default palette (10 levels).
/// Index 0 is used for the darkest pixels, so black renders as `@` and
/// white as a space. Works well on light backgrounds.
pub const DEFAULT_CHARSET: &str = "@%#*+=-:. ";

/// Standard ASCII density ramp (10 levels), the reverse of the default.
/// Black renders as a space and white as `@`. Works well on dark terminals.
pub const STANDARD_CHARSET: &str = " .:-=+*#%@";

/// Error returned when a palette has no glyphs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Charset must not be empty.")]
pub struct EmptyCharsetError;

/// An ordered, non-empty palette of glyphs.
///
/// Glyphs are stored as `char`s so multi-byte palettes (block characters,
/// for example) index per glyph rather than per byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    glyphs: Vec<char>,
}

impl Charset {
    /// Build a palette from a string, one glyph per `char`.
    pub fn new(chars: &str) -> Result<Self, EmptyCharsetError> {
        let glyphs: Vec<char> = chars.chars().collect();
        if glyphs.is_empty() {
            return Err(EmptyCharsetError);
        }
        Ok(Self { glyphs })
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Never true for a constructed palette.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self {
            glyphs: DEFAULT_CHARSET.chars().collect(),
        }
    }
}

impl FromStr for Charset {
    type Err = EmptyCharsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Charset::new(s)
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for glyph in &self.glyphs {
            write!(f, "{}", glyph)?;
        }
        Ok(())
    }
}
