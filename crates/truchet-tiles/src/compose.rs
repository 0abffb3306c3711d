// SPDX-License-Identifier: MIT
//
// Compositor: joining glyphs side by side and stacking them.
//
// Horizontal join
//
//   Every glyph in a word shares one row count (GLYPH_ROWS). For row r the
//   target width is the longest row r among the glyphs, never less than
//   MIN_COLUMN_WIDTH; glyphs with fewer than r + 1 rows contribute 0. The
//   widest of these row targets becomes the column width, so every row of
//   the joined block comes out the same length no matter how ragged the
//   input glyphs are.
//
//   Each glyph is left-justified into its column and columns are separated
//   by a single tile. Padding and separator use the same fill tile:
//
//     Normal    BLANK  → letters on an empty background
//     Inverted  FULL   → letters cut out of a solid background
//
// Vertical stack
//
//   Rows concatenated top to bottom with one empty row after every
//   non-empty glyph. Spaces contribute nothing.

use crate::glyph::LetterGlyph;
use crate::tile::TileChar;

/// Rows in every built-in letter glyph.
pub const GLYPH_ROWS: usize = 5;

/// The narrowest a letter column may be. Also the width of a space.
pub const MIN_COLUMN_WIDTH: usize = 3;

/// Layout parameters for joining glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Compositor {
    /// Output row count; rows beyond a glyph's extent are filled.
    pub rows: usize,
    /// Minimum column width.
    pub min_column_width: usize,
}

impl Default for Compositor {
    fn default() -> Self {
        Self {
            rows: GLYPH_ROWS,
            min_column_width: MIN_COLUMN_WIDTH,
        }
    }
}

impl Compositor {
    /// Per-row target widths for `glyphs`.
    ///
    /// Entry `r` is `max(min_column_width, longest row r among glyphs)`.
    #[must_use]
    pub fn row_widths(&self, glyphs: &[LetterGlyph]) -> Vec<usize> {
        (0..self.rows)
            .map(|r| {
                glyphs
                    .iter()
                    .map(|g| g.row_width(r))
                    .max()
                    .unwrap_or(0)
                    .max(self.min_column_width)
            })
            .collect()
    }

    /// The single column width shared by every glyph and every row.
    #[must_use]
    pub fn column_width(&self, glyphs: &[LetterGlyph]) -> usize {
        self.row_widths(glyphs)
            .into_iter()
            .max()
            .unwrap_or(self.min_column_width)
    }

    /// Join glyphs left to right.
    ///
    /// Returns exactly `self.rows` rows of identical length, or the empty
    /// glyph when `glyphs` is empty.
    ///
    /// ```
    /// use truchet_tiles::compose::Compositor;
    /// use truchet_tiles::glyph::LetterGlyph;
    /// use truchet_tiles::tile::TileChar;
    ///
    /// let compositor = Compositor { rows: 2, min_column_width: 2 };
    /// let a = LetterGlyph::parse("Xλ\nX\n").unwrap();
    /// let b = LetterGlyph::parse("y\n").unwrap();
    /// let joined = compositor.join(&[a, b], TileChar::Blank);
    /// assert_eq!(joined.to_string(), "Xλ y \nX    ");
    /// ```
    #[must_use]
    pub fn join(&self, glyphs: &[LetterGlyph], fill: TileChar) -> LetterGlyph {
        if glyphs.is_empty() {
            return LetterGlyph::empty();
        }

        let width = self.column_width(glyphs);
        let widths = vec![width; self.rows];
        let padded: Vec<LetterGlyph> = glyphs.iter().map(|g| g.padded(&widths, fill)).collect();

        let line_len = glyphs.len() * width + (glyphs.len() - 1);
        let rows = (0..self.rows)
            .map(|r| {
                let mut line = Vec::with_capacity(line_len);
                for (i, glyph) in padded.iter().enumerate() {
                    if i > 0 {
                        line.push(fill);
                    }
                    if let Some(row) = glyph.row(r) {
                        line.extend_from_slice(row);
                    }
                }
                line
            })
            .collect();

        LetterGlyph::from_exact_rows(rows)
    }

    /// Stack glyphs top to bottom, one empty row after each non-empty glyph.
    #[must_use]
    pub fn stack(glyphs: &[LetterGlyph]) -> LetterGlyph {
        let mut rows = Vec::new();
        for glyph in glyphs.iter().filter(|g| !g.is_empty()) {
            rows.extend(glyph.rows().iter().cloned());
            rows.push(Vec::new());
        }
        // The final separator row is part of the result.
        LetterGlyph::from_exact_rows(rows)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn glyph(text: &str) -> LetterGlyph {
        LetterGlyph::parse(text).unwrap()
    }

    // ── Row widths ──────────────────────────────────────────────────────

    #[test]
    fn row_widths_respect_minimum() {
        let c = Compositor::default();
        let widths = c.row_widths(&[glyph("X\nX\nX\nX\nX\n")]);
        assert_eq!(widths, vec![MIN_COLUMN_WIDTH; GLYPH_ROWS]);
    }

    #[test]
    fn row_widths_take_widest_glyph_per_row() {
        let c = Compositor::default();
        let widths = c.row_widths(&[glyph("XXXX\nX\n"), glyph("X\nXXXXX\n")]);
        assert_eq!(widths, vec![4, 5, 3, 3, 3]);
    }

    #[test]
    fn short_glyph_contributes_zero() {
        let c = Compositor { rows: 3, min_column_width: 1 };
        assert_eq!(c.row_widths(&[glyph("XX\n")]), vec![2, 1, 1]);
    }

    // ── Horizontal join ─────────────────────────────────────────────────

    #[test]
    fn join_is_rectangular() {
        let c = Compositor::default();
        let glyphs = [
            glyph("ʎXλ\nX X\nXXX\nX X\nX X\n"),
            glyph("X\n"),
            LetterGlyph::empty(),
            glyph("XλʎX\nXɣyX\nX  X\n"),
            glyph("  ɣλ\n\n\n\nXXXXXX\n"),
        ];
        let joined = c.join(&glyphs, TileChar::Blank);
        assert_eq!(joined.height(), GLYPH_ROWS);
        let len = joined.row_width(0);
        assert!(joined.rows().iter().all(|row| row.len() == len));
        assert_eq!(len, glyphs.len() * 6 + glyphs.len() - 1);
    }

    #[test]
    fn join_separates_with_fill() {
        let c = Compositor { rows: 1, min_column_width: 1 };
        let joined = c.join(&[glyph("λ\n"), glyph("ɣ\n")], TileChar::Full);
        assert_eq!(joined.to_string(), "λXɣ");
    }

    #[test]
    fn join_pads_space_with_fill() {
        let c = Compositor { rows: 2, min_column_width: 2 };
        let joined = c.join(&[LetterGlyph::empty()], TileChar::Full);
        assert_eq!(joined.to_string(), "XX\nXX");
    }

    #[test]
    fn join_nothing_is_empty() {
        assert!(Compositor::default().join(&[], TileChar::Blank).is_empty());
    }

    #[test]
    fn join_single_glyph_is_padded_glyph() {
        let c = Compositor { rows: 3, min_column_width: 3 };
        let joined = c.join(&[glyph("λ\nXX\n")], TileChar::Blank);
        assert_eq!(joined.to_string(), "λ  \nXX \n   ");
    }

    // ── Vertical stack ──────────────────────────────────────────────────

    #[test]
    fn stack_adds_separator_after_each_glyph() {
        let stacked = Compositor::stack(&[glyph("XX\n"), glyph("λ\nɣ\n")]);
        assert_eq!(stacked.height(), 5);
        assert_eq!(stacked.row_width(1), 0);
        assert_eq!(stacked.row_width(4), 0);
        assert_eq!(stacked.to_string(), "XX\n\nλ\nɣ\n");
    }

    #[test]
    fn stack_skips_spaces() {
        let stacked = Compositor::stack(&[LetterGlyph::empty(), glyph("X\n"), LetterGlyph::empty()]);
        assert_eq!(stacked.height(), 2);
    }

    #[test]
    fn stack_nothing_is_empty() {
        assert!(Compositor::stack(&[]).is_empty());
        assert!(Compositor::stack(&[LetterGlyph::empty()]).is_empty());
    }
}
