// SPDX-License-Identifier: MIT
//
// CharGrid: the finished, rectangular block of tiles.
//
// Composition produces glyphs whose rows may still be ragged (a vertical
// stack, for instance). Anything handed to the vector stage goes through
// CharGrid first, which right-pads every row with BLANK so that
// (row, col) addressing is total inside `width × height`.
//
// Row-major flat storage, same as a terminal frame buffer:
// `index = row * width + col`.

use std::fmt;

use crate::glyph::LetterGlyph;
use crate::tile::TileChar;

/// A rectangular grid of tiles.
///
/// # Examples
///
/// ```
/// use truchet_tiles::glyph::LetterGlyph;
/// use truchet_tiles::grid::CharGrid;
/// use truchet_tiles::tile::TileChar;
///
/// let glyph = LetterGlyph::parse("X\nλɣ\n").unwrap();
/// let grid = CharGrid::from_glyph(&glyph);
/// assert_eq!((grid.width(), grid.height()), (2, 2));
/// assert_eq!(grid.get(0, 1), Some(TileChar::Blank));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct CharGrid {
    width: usize,
    height: usize,
    tiles: Vec<TileChar>,
}

impl CharGrid {
    /// A grid with no rows.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            tiles: Vec::new(),
        }
    }

    /// Build from rows, right-padding each with `Blank` to the widest.
    #[must_use]
    pub fn from_rows(rows: &[Vec<TileChar>]) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut tiles = Vec::with_capacity(width * rows.len());
        for row in rows {
            tiles.extend_from_slice(row);
            tiles.resize(tiles.len() + (width - row.len()), TileChar::Blank);
        }
        Self {
            width,
            height: rows.len(),
            tiles,
        }
    }

    /// Build from a glyph's rows.
    #[must_use]
    pub fn from_glyph(glyph: &LetterGlyph) -> Self {
        Self::from_rows(glyph.rows())
    }

    /// Number of columns.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Whether the grid has no rows.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.height == 0
    }

    /// Tile at `(row, col)`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<TileChar> {
        if row < self.height && col < self.width {
            Some(self.tiles[row * self.width + col])
        } else {
            None
        }
    }

    /// Iterate rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[TileChar]> {
        // chunks() panics on 0; a zero-width grid still has `height` rows.
        (0..self.height).map(move |r| &self.tiles[r * self.width..(r + 1) * self.width])
    }

    /// Iterate `(row, col, tile)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, TileChar)> + '_ {
        self.rows()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, &t)| (r, c, t)))
    }
}

impl From<&LetterGlyph> for CharGrid {
    fn from(glyph: &LetterGlyph) -> Self {
        Self::from_glyph(glyph)
    }
}

impl fmt::Display for CharGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
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
