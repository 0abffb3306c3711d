// SPDX-License-Identifier: MIT

//! Cell landmark points.
//!
//! Every tile is drawn in its own local coordinate space, origin at the
//! cell's top-left corner, y pointing down. The landmarks depend only on
//! the cell size, so they are computed once per render and shared by
//! every cell.
//!
//! ```text
//!   (0,0) TL ───────────── TR (s,0)
//!         │                 │
//!         │        C        │
//!         │                 │
//!   (0,s) BL ───────────── BR (s,s)
//! ```
//!
//! Each corner quadrant spans from its corner to two edge points at
//! `QUADRANT_FRACTION × size` along the adjacent edges.

use std::fmt;

use truchet_tiles::tile::Corner;

/// How far along an edge a corner quadrant reaches, as a fraction of the
/// cell size.
pub const QUADRANT_FRACTION: f64 = 0.65;

/// A point in cell-local or document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A coordinate formatted for SVG: at most two decimals, no trailing
/// zeros, integers without a decimal point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Num(pub f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = (self.0 * 100.0).round() / 100.0;
        // Avoid "-0".
        let rounded = if rounded == 0.0 { 0.0 } else { rounded };
        write!(f, "{rounded}")
    }
}

/// One corner quadrant: the corner plus its two edge points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadrant {
    pub corner: Corner,
    /// The corner point itself.
    pub apex: Point,
    /// Edge point on the horizontal (top or bottom) edge.
    pub horizontal: Point,
    /// Edge point on the vertical (left or right) edge.
    pub vertical: Point,
}

/// Landmarks of a square cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPoints {
    pub size: f64,
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_left: Point,
    pub bottom_right: Point,
    pub center: Point,
    /// Distance from a corner to its quadrant edge points.
    pub span: f64,
}

impl CellPoints {
    /// Landmarks for a cell of side `size`.
    #[must_use]
    pub fn new(size: f64) -> Self {
        let half = size / 2.0;
        Self {
            size,
            top_left: Point::new(0.0, 0.0),
            top_right: Point::new(size, 0.0),
            bottom_left: Point::new(0.0, size),
            bottom_right: Point::new(size, size),
            center: Point::new(half, half),
            span: QUADRANT_FRACTION * size,
        }
    }

    /// The cell point at `corner`.
    #[must_use]
    pub const fn corner(&self, corner: Corner) -> Point {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomLeft => self.bottom_left,
            Corner::BottomRight => self.bottom_right,
        }
    }

    /// The quadrant anchored at `corner`.
    #[must_use]
    pub fn quadrant(&self, corner: Corner) -> Quadrant {
        let (s, f) = (self.size, self.span);
        let (horizontal, vertical) = match corner {
            Corner::TopLeft => (Point::new(f, 0.0), Point::new(0.0, f)),
            Corner::TopRight => (Point::new(s - f, 0.0), Point::new(s, f)),
            Corner::BottomLeft => (Point::new(f, s), Point::new(0.0, s - f)),
            Corner::BottomRight => (Point::new(s - f, s), Point::new(s, s - f)),
        };
        Quadrant {
            corner,
            apex: self.corner(corner),
            horizontal,
            vertical,
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
