// SPDX-License-Identifier: MIT
//
// truchet-tiles: letters built from six Truchet tiles.
//
// The textual half of truchet. Six tile symbols (blank, full, and four
// diagonal half-cells) form a closed alphabet with an involutive inverse.
// Letter glyphs are small grids of those tiles; the compositor pads,
// joins, stacks, inverts, and frames them into one rectangular CharGrid,
// which is what the vector renderer consumes.
//
//   tile     → TileChar, Directions, Corners
//   glyph    → LetterGlyph (immutable rows of tiles)
//   source   → GlyphSource trait, GlyphSet (built-in or directory)
//   compose  → Compositor (horizontal join, vertical stack)
//   grid     → CharGrid (rectangular result)
//   word     → WordRenderer (text → CharGrid, normal / inverted)
//
// Nothing here performs I/O except GlyphSet::from_dir.

pub mod compose;
pub mod error;
pub mod glyph;
pub mod grid;
pub mod source;
pub mod tile;
pub mod word;

pub use error::{GlyphError, GlyphResult};
pub use glyph::LetterGlyph;
pub use grid::CharGrid;
pub use source::{GlyphSet, GlyphSource};
pub use tile::{Corner, Corners, Directions, TileChar};
pub use word::{Layout, RenderMode, WordRenderer};
