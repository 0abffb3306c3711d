// SPDX-License-Identifier: MIT
//
// LetterGlyph: one letter as rows of tiles.
//
// A glyph is an immutable value. Rows are stored as given and may differ
// in length; composition decides how wide each row ends up. A glyph with
// no rows stands for a space.
//
// Every transform (invert, pad, frame) returns a fresh glyph, so a glyph
// shared by several words is never observed half-transformed.

use std::fmt;

use crate::error::{GlyphError, GlyphResult};
use crate::tile::TileChar;

/// A letter drawn in tiles.
///
/// # Examples
///
/// ```
/// use truchet_tiles::glyph::LetterGlyph;
///
/// let glyph = LetterGlyph::parse("ʎXλ\nX X\n").unwrap();
/// assert_eq!(glyph.height(), 2);
/// assert_eq!(glyph.width(), 3);
/// assert_eq!(glyph.inverted().to_string(), "y ɣ\n X ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct LetterGlyph {
    rows: Vec<Vec<TileChar>>,
}

impl LetterGlyph {
    // ─── Construction ────────────────────────────────────────────────────

    /// Build a glyph from rows of tiles.
    ///
    /// Trailing zero-length rows are dropped.
    #[must_use]
    pub fn new(mut rows: Vec<Vec<TileChar>>) -> Self {
        while rows.last().is_some_and(Vec::is_empty) {
            rows.pop();
        }
        Self { rows }
    }

    /// Build a glyph keeping every row, including trailing empty ones.
    pub(crate) const fn from_exact_rows(rows: Vec<Vec<TileChar>>) -> Self {
        Self { rows }
    }

    /// The glyph for a space: no rows at all.
    #[must_use]
    pub const fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    /// Parse glyph text, one row per line.
    ///
    /// Carriage returns are ignored. Every other character must belong to
    /// the tile alphabet.
    ///
    /// # Errors
    ///
    /// Returns [`GlyphError::InvalidTile`] naming the first offending
    /// character.
    pub fn parse(text: &str) -> GlyphResult<Self> {
        let rows = text
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                line.trim_end_matches('\r')
                    .chars()
                    .enumerate()
                    .map(|(col_idx, ch)| {
                        TileChar::from_char(ch).ok_or(GlyphError::InvalidTile {
                            line: line_idx + 1,
                            column: col_idx + 1,
                            found: ch,
                        })
                    })
                    .collect::<GlyphResult<Vec<_>>>()
            })
            .collect::<GlyphResult<Vec<_>>>()?;
        Ok(Self::new(rows))
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    /// Whether this is the space glyph.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Length of row `index`, or 0 past the last row.
    #[must_use]
    pub fn row_width(&self, index: usize) -> usize {
        self.rows.get(index).map_or(0, Vec::len)
    }

    /// Row `index`, if present.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[TileChar]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// All rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[Vec<TileChar>] {
        &self.rows
    }

    /// Consume the glyph and return its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<Vec<TileChar>> {
        self.rows
    }

    // ─── Transforms ──────────────────────────────────────────────────────

    /// Swap filled and empty in every tile.
    ///
    /// The space glyph stays empty.
    #[must_use]
    pub fn inverted(&self) -> Self {
        Self {
            rows: self
                .rows
                .iter()
                .map(|row| row.iter().map(|t| t.inverse()).collect())
                .collect(),
        }
    }

    /// Left-justify into `widths.len()` rows, row `r` exactly `widths[r]`
    /// tiles wide.
    ///
    /// Short rows and missing rows are filled with `fill`; long rows are
    /// kept intact.
    #[must_use]
    pub fn padded(&self, widths: &[usize], fill: TileChar) -> Self {
        let rows = widths
            .iter()
            .enumerate()
            .map(|(r, &width)| {
                let mut row = self.rows.get(r).cloned().unwrap_or_default();
                if row.len() < width {
                    row.resize(width, fill);
                }
                row
            })
            .collect();
        Self { rows }
    }

    /// Wrap in a one-tile `Full` border.
    ///
    /// Content is first cut or padded (with `Full`) to exactly
    /// `inner_height` rows of `inner_width` tiles, so the result is always
    /// `inner_height + 2` rows of `inner_width + 2`. Framing the space
    /// glyph yields a solid block.
    #[must_use]
    pub fn framed(&self, inner_height: usize, inner_width: usize) -> Self {
        let outer_width = inner_width + 2;
        let mut rows = Vec::with_capacity(inner_height + 2);
        rows.push(vec![TileChar::Full; outer_width]);
        for r in 0..inner_height {
            let mut row = Vec::with_capacity(outer_width);
            row.push(TileChar::Full);
            let content = self.rows.get(r).map_or(&[][..], Vec::as_slice);
            let kept = content.len().min(inner_width);
            row.extend_from_slice(&content[..kept]);
            row.resize(inner_width + 1, TileChar::Full);
            row.push(TileChar::Full);
            rows.push(row);
        }
        rows.push(vec![TileChar::Full; outer_width]);
        Self { rows }
    }
}

impl fmt::Display for LetterGlyph {
    /// Rows joined by newlines, no trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for tile in row {
                write!(f, "{tile}")?;
            }
        }
        Ok(())
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
