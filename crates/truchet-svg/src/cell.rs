// SPDX-License-Identifier: MIT
//
// CellRenderer: one tile at one grid position → a list of primitives.
//
// Parity. Each cell has a base orientation chosen by its checkerboard
// position; the `flipped` flag swaps the two:
//
//   parity       = (row + col) mod 2
//   matches_base = parity == flipped
//
// With the flag off the top-left cell takes the base pattern.
//
// Bowtie:
//
//   contour  FULL draws both diagonals. A half-tile draws the diagonal that
//            bounds it plus a half-diagonal from the center to the corner
//            on its filled side.
//   fills    matches_base → left / right triangles, gated on LEFT / RIGHT.
//            otherwise    → top / bottom triangles, gated on TOP / BOTTOM.
//
// Circle / Triangle:
//
//   BLANK draws nothing. Otherwise the active diagonal is {TL, BR} when
//   matches_base and {TR, BL} when not; each active corner gets an ink
//   quadrant (sector or triangle). Every unavailable corner of the tile is
//   then painted over with a paper triangle.
//
// Contours come before fills in the output; fills follow in the order
// above.

use truchet_tiles::tile::{Corner, Directions, TileChar};

use crate::geometry::{CellPoints, Point};
use crate::primitive::{Paint, Primitive};
use crate::style::TileStyle;

/// Checkerboard orientation of the cell at (`row`, `col`).
#[inline]
#[must_use]
pub const fn matches_base(row: usize, col: usize, flipped: bool) -> bool {
    ((row + col) % 2 == 1) == flipped
}

/// Quadrant shape for the corner-based styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuadrantShape {
    Sector,
    Triangle,
}

/// Draws single tiles for one style, flag and cell size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRenderer {
    style: TileStyle,
    flipped: bool,
    points: CellPoints,
}

impl CellRenderer {
    #[must_use]
    pub fn new(style: TileStyle, flipped: bool, cell_size: f64) -> Self {
        Self {
            style,
            flipped,
            points: CellPoints::new(cell_size),
        }
    }

    #[must_use]
    pub const fn style(&self) -> TileStyle {
        self.style
    }

    #[must_use]
    pub const fn flipped(&self) -> bool {
        self.flipped
    }

    #[must_use]
    pub const fn points(&self) -> &CellPoints {
        &self.points
    }

    /// Primitives for `tile` at grid position (`row`, `col`), in cell-local
    /// coordinates.
    #[must_use]
    pub fn render(&self, tile: TileChar, row: usize, col: usize) -> Vec<Primitive> {
        if tile.is_blank() {
            return Vec::new();
        }
        let base = matches_base(row, col, self.flipped);
        match self.style {
            TileStyle::Bowtie => {
                let mut out = self.contour(tile);
                self.bowtie_fills(tile, base, &mut out);
                out
            }
            TileStyle::Circle => self.quadrant_fills(tile, base, QuadrantShape::Sector),
            TileStyle::Triangle => self.quadrant_fills(tile, base, QuadrantShape::Triangle),
        }
    }

    // ─── Bowtie ─────────────────────────────────────────────────────────────

    fn contour(&self, tile: TileChar) -> Vec<Primitive> {
        let p = &self.points;
        let line = |from: Point, to: Point| Primitive::Line { from, to };
        let back = line(p.top_left, p.bottom_right);
        let forward = line(p.bottom_left, p.top_right);
        match tile {
            TileChar::Blank => Vec::new(),
            TileChar::Full => vec![back, forward],
            TileChar::Lambda => vec![back, line(p.center, p.bottom_left)],
            TileChar::Gamma => vec![back, line(p.center, p.top_right)],
            TileChar::Y => vec![forward, line(p.center, p.top_left)],
            TileChar::UpsideY => vec![forward, line(p.center, p.bottom_right)],
        }
    }

    fn bowtie_fills(&self, tile: TileChar, base: bool, out: &mut Vec<Primitive>) {
        let p = &self.points;
        let dirs = tile.directions();
        let ink = |points: [Point; 3]| Primitive::Triangle {
            points,
            paint: Paint::Ink,
        };
        let halves = if base {
            [
                (Directions::LEFT, [p.top_left, p.center, p.bottom_left]),
                (Directions::RIGHT, [p.top_right, p.center, p.bottom_right]),
            ]
        } else {
            [
                (Directions::TOP, [p.top_left, p.center, p.top_right]),
                (Directions::BOTTOM, [p.bottom_left, p.center, p.bottom_right]),
            ]
        };
        out.extend(
            halves
                .into_iter()
                .filter(|(dir, _)| dirs.contains(*dir))
                .map(|(_, pts)| ink(pts)),
        );
    }

    // ─── Corner quadrants ───────────────────────────────────────────────────

    fn quadrant_fills(&self, tile: TileChar, base: bool, shape: QuadrantShape) -> Vec<Primitive> {
        let active = if base {
            [Corner::TopLeft, Corner::BottomRight]
        } else {
            [Corner::TopRight, Corner::BottomLeft]
        };

        let mut out: Vec<Primitive> = active
            .into_iter()
            .map(|corner| self.quadrant(corner, shape, Paint::Ink))
            .collect();
        out.extend(
            tile.unavailable_corners()
                .corners()
                .map(|corner| self.quadrant(corner, QuadrantShape::Triangle, Paint::Paper)),
        );
        out
    }

    fn quadrant(&self, corner: Corner, shape: QuadrantShape, paint: Paint) -> Primitive {
        let q = self.points.quadrant(corner);
        match shape {
            QuadrantShape::Triangle => Primitive::Triangle {
                points: [q.apex, q.horizontal, q.vertical],
                paint,
            },
            QuadrantShape::Sector => Primitive::Sector {
                apex: q.apex,
                start: q.horizontal,
                end: q.vertical,
                radius: self.points.span,
                clockwise: corner.on_main_diagonal(),
            },
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
