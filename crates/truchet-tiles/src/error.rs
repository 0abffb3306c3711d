// SPDX-License-Identifier: MIT
//
// Errors raised while ingesting glyph data.
//
// Composition itself never fails: once text has become tiles, every
// operation is total. The only fallible step is turning raw glyph files
// into tiles, which happens once, up front.

use std::io;
use std::path::PathBuf;

/// Error reading or validating glyph data.
#[derive(Debug, thiserror::Error)]
pub enum GlyphError {
    /// A glyph row contains a character outside the tile alphabet.
    ///
    /// `line` and `column` are 1-based and count chars, not bytes.
    #[error("invalid tile {found:?} at line {line}, column {column}")]
    InvalidTile {
        line: usize,
        column: usize,
        found: char,
    },

    /// Same as [`GlyphError::InvalidTile`], attributed to a letter.
    #[error("glyph '{letter}': {source}")]
    InLetter {
        letter: char,
        #[source]
        source: Box<Self>,
    },

    /// A glyph has more rows than a letter line holds.
    #[error("glyph has {rows} rows, at most {max} allowed")]
    TooTall { rows: usize, max: usize },

    /// A glyph file or directory could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GlyphError {
    /// Attach the letter whose data produced this error.
    #[must_use]
    pub fn in_letter(self, letter: char) -> Self {
        Self::InLetter {
            letter,
            source: Box::new(self),
        }
    }
}

/// Result alias for glyph ingestion.
pub type GlyphResult<T> = Result<T, GlyphError>;
