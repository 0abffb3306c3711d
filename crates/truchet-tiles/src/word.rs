// SPDX-License-Identifier: MIT
//
// WordRenderer: from input text to a finished tile grid.
//
// Ingestion policy, applied per char after lowercasing:
//
//   ' '         → the space glyph
//   alphabetic  → source.load(ch), skipped when absent
//   anything    → dropped
//
// Modes:
//
//   Normal    join with BLANK fill.
//   Inverted  invert every letter, join with FULL fill so gaps and spaces
//             read as solid, then frame the whole word once. The result is
//             one bordered rectangle with a single consistent border.
//
// Vertical layout stacks the same glyphs instead of joining them.

use crate::compose::Compositor;
use crate::glyph::LetterGlyph;
use crate::grid::CharGrid;
use crate::source::GlyphSource;
use crate::tile::TileChar;

/// Positive or negative rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum RenderMode {
    /// Letters on an empty background.
    #[default]
    Normal,
    /// Letters cut out of a framed solid block.
    Inverted,
}

/// Direction letters are laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Layout {
    /// Left to right, one row of letters.
    #[default]
    Horizontal,
    /// Top to bottom, one letter per block.
    Vertical,
}

/// Turns text into tile grids using a glyph source.
///
/// # Examples
///
/// ```
/// use truchet_tiles::source::GlyphSet;
/// use truchet_tiles::word::{Layout, RenderMode, WordRenderer};
///
/// let glyphs = GlyphSet::builtin().unwrap();
/// let renderer = WordRenderer::new(&glyphs);
/// let grid = renderer.render("Hi!", RenderMode::Normal, Layout::Horizontal);
/// assert_eq!(grid.height(), 5);
/// assert_eq!(grid.width(), 3 + 1 + 3);
/// ```
#[derive(Debug, Clone)]
pub struct WordRenderer<S> {
    source: S,
    compositor: Compositor,
}

impl<S: GlyphSource> WordRenderer<S> {
    /// A renderer with the default five-row compositor.
    pub fn new(source: S) -> Self {
        Self::with_compositor(source, Compositor::default())
    }

    /// A renderer with explicit layout parameters.
    pub const fn with_compositor(source: S, compositor: Compositor) -> Self {
        Self { source, compositor }
    }

    /// The compositor in use.
    pub const fn compositor(&self) -> &Compositor {
        &self.compositor
    }

    /// Map each accepted character of `text` to a glyph.
    ///
    /// Spaces become the empty glyph; unknown and non-alphabetic
    /// characters contribute nothing.
    pub fn glyphs(&self, text: &str) -> Vec<LetterGlyph> {
        text.chars()
            .flat_map(char::to_lowercase)
            .filter_map(|ch| {
                if ch == ' ' {
                    Some(LetterGlyph::empty())
                } else if ch.is_alphabetic() {
                    let glyph = self.source.load(ch);
                    if glyph.is_none() {
                        log::trace!("no glyph for {ch:?}, skipping");
                    }
                    glyph
                } else {
                    log::trace!("dropping non-letter {ch:?}");
                    None
                }
            })
            .collect()
    }

    /// Render `text` to a rectangular grid.
    ///
    /// Text with no usable characters renders to the empty grid.
    pub fn render(&self, text: &str, mode: RenderMode, layout: Layout) -> CharGrid {
        let glyphs = self.glyphs(text);
        if glyphs.is_empty() {
            return CharGrid::empty();
        }

        let glyphs = match mode {
            RenderMode::Normal => glyphs,
            RenderMode::Inverted => glyphs.iter().map(LetterGlyph::inverted).collect(),
        };

        let block = match (layout, mode) {
            (Layout::Horizontal, RenderMode::Normal) => {
                self.compositor.join(&glyphs, TileChar::Blank)
            }
            (Layout::Horizontal, RenderMode::Inverted) => {
                let joined = self.compositor.join(&glyphs, TileChar::Full);
                joined.framed(joined.height(), joined.width())
            }
            (Layout::Vertical, _) => Compositor::stack(&glyphs),
        };

        CharGrid::from_glyph(&block)
    }

    /// Render `text` as newline-joined rows.
    pub fn render_text(&self, text: &str, mode: RenderMode, layout: Layout) -> String {
        self.render(text, mode, layout).to_string()
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::{GLYPH_ROWS, MIN_COLUMN_WIDTH};
    use crate::source::GlyphSet;
    use pretty_assertions::assert_eq;

    const GOLDEN_A: &str = "\
ʎXλ
X X
XXX
X X
X X";

    fn renderer() -> WordRenderer<GlyphSet> {
        WordRenderer::new(GlyphSet::builtin().unwrap())
    }

    fn normal(text: &str) -> String {
        renderer().render_text(text, RenderMode::Normal, Layout::Horizontal)
    }

    fn inverted(text: &str) -> CharGrid {
        renderer().render(text, RenderMode::Inverted, Layout::Horizontal)
    }

    // ── Ingestion ───────────────────────────────────────────────────────

    #[test]
    fn glyphs_skip_non_letters() {
        let r = renderer();
        assert_eq!(r.glyphs("a1-b").len(), 2);
        assert_eq!(r.glyphs("a b").len(), 3);
        assert!(r.glyphs("a b")[1].is_empty());
    }

    #[test]
    fn glyphs_fold_case() {
        let r = renderer();
        assert_eq!(r.glyphs("ABC"), r.glyphs("abc"));
    }

    #[test]
    fn glyphs_skip_letters_without_data() {
        let r = renderer();
        assert!(r.glyphs("é").is_empty());
        assert_eq!(r.glyphs("aßz").len(), 2);
    }

    #[test]
    fn tab_and_newline_are_dropped() {
        assert_eq!(renderer().glyphs("a\tb\n").len(), 2);
    }

    // ── Normal mode ─────────────────────────────────────────────────────

    #[test]
    fn single_letter_matches_golden() {
        assert_eq!(normal("a"), GOLDEN_A);
        assert_eq!(normal("A"), GOLDEN_A);
    }

    #[test]
    fn no_letters_is_empty_string() {
        assert_eq!(normal(""), "");
        assert_eq!(normal("1234"), "");
        assert_eq!(normal("!?#"), "");
    }

    #[test]
    fn space_separates_letters() {
        let out = normal("a b");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), GLYPH_ROWS);

        // a | sep | space | sep | b
        let gap_start = MIN_COLUMN_WIDTH;
        let gap_end = MIN_COLUMN_WIDTH + 1 + MIN_COLUMN_WIDTH + 1;
        for line in &lines {
            let chars: Vec<char> = line.chars().collect();
            assert_eq!(chars.len(), 3 * MIN_COLUMN_WIDTH + 2);
            assert!(chars[gap_start..gap_end].iter().all(|&c| c == ' '), "{line:?}");
        }
        // Both letters keep their own ink.
        let first: String = lines[0].chars().take(MIN_COLUMN_WIDTH).collect();
        let last: String = lines[0].chars().skip(gap_end).collect();
        assert_eq!(first, "ʎXλ");
        assert_eq!(last, "XXλ");
    }

    #[test]
    fn word_rows_are_uniform() {
        let out = normal("Quick Mew");
        let widths: Vec<usize> = out.lines().map(|l| l.chars().count()).collect();
        assert_eq!(widths.len(), GLYPH_ROWS);
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{widths:?}");
    }

    #[test]
    fn rendering_is_idempotent() {
        assert_eq!(normal("hello world"), normal("hello world"));
    }

    // ── Inverted mode ───────────────────────────────────────────────────

    #[test]
    fn inverted_letter_is_bordered_rectangle() {
        for letter in ["a", "m", "q", "z"] {
            let grid = inverted(letter);
            assert_eq!(grid.height(), GLYPH_ROWS + 2, "{letter}");
            let rows: Vec<&[TileChar]> = grid.rows().collect();
            assert!(rows[0].iter().all(|&t| t == TileChar::Full), "{letter}");
            assert!(rows[rows.len() - 1].iter().all(|&t| t == TileChar::Full));
            for row in &rows {
                assert_eq!(row.len(), grid.width());
                assert_eq!(row[0], TileChar::Full);
                assert_eq!(row[row.len() - 1], TileChar::Full);
            }
        }
    }

    #[test]
    fn inverted_a_is_framed_inverse() {
        let expected = "\
XXXXX
Xy ɣX
X X X
X   X
X X X
X X X
XXXXX";
        assert_eq!(inverted("a").to_string(), expected);
    }

    #[test]
    fn inverted_space_is_solid_block() {
        let grid = inverted(" ");
        assert_eq!(grid.height(), GLYPH_ROWS + 2);
        assert_eq!(grid.width(), MIN_COLUMN_WIDTH + 2);
        assert!(grid.cells().all(|(_, _, t)| t == TileChar::Full));
    }

    #[test]
    fn inverted_separators_are_solid() {
        let grid = inverted("ab");
        // Column between the two letters: frame (1) + letter (3).
        let sep_col = 1 + MIN_COLUMN_WIDTH;
        for row in 0..grid.height() {
            assert_eq!(grid.get(row, sep_col), Some(TileChar::Full));
        }
        assert_eq!(grid.width(), 2 * MIN_COLUMN_WIDTH + 1 + 2);
    }

    #[test]
    fn inverted_nothing_is_empty() {
        assert!(inverted("123").is_empty());
    }

    // ── Vertical layout ─────────────────────────────────────────────────

    #[test]
    fn vertical_stacks_letters() {
        let grid = renderer().render("a b", RenderMode::Normal, Layout::Vertical);
        // Two letters, one separator row after each, space skipped.
        assert_eq!(grid.height(), 2 * (GLYPH_ROWS + 1));
        let text = grid.to_string();
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines[0], "ʎXλ");
        assert_eq!(lines[GLYPH_ROWS], "   ");
        assert_eq!(lines[GLYPH_ROWS + 1], "XXλ");
    }

    #[test]
    fn vertical_inverted_inverts_each_letter() {
        let grid = renderer().render("a", RenderMode::Inverted, Layout::Vertical);
        assert_eq!(grid.get(0, 0), Some(TileChar::Y));
        assert_eq!(grid.get(2, 1), Some(TileChar::Blank));
    }
}
