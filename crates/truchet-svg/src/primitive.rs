// SPDX-License-Identifier: MIT

//! Vector primitives and their SVG elements.
//!
//! Cell geometry is produced as plain data ([`Primitive`]) and only turned
//! into markup at the end, so tests can inspect what a cell draws without
//! parsing SVG.

use std::fmt;

use crate::geometry::{Num, Point};

/// Contour stroke color.
pub const STROKE_CONTOUR: &str = "#111";
/// Background grid stroke color.
pub const STROKE_GRID: &str = "#ccc";
/// Contour stroke width.
pub const STROKE_CONTOUR_WIDTH: f64 = 1.0;
/// Background grid stroke width.
pub const STROKE_GRID_WIDTH: f64 = 0.5;
/// Fill for inked regions.
pub const FILL_INK: &str = "#444";
/// Fill for negative regions painted over ink.
pub const FILL_PAPER: &str = "#fff";

/// Which fill a shape gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paint {
    /// Filled, foreground.
    Ink,
    /// Background-colored, used to knock ink back out.
    Paper,
}

impl Paint {
    /// The SVG fill color.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Ink => FILL_INK,
            Self::Paper => FILL_PAPER,
        }
    }
}

/// One drawable shape in cell-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// A stroked segment. Stroke attributes come from the enclosing group.
    Line { from: Point, to: Point },
    /// A filled triangle.
    Triangle { points: [Point; 3], paint: Paint },
    /// A filled circular quadrant: apex, straight edge to `start`, arc of
    /// `radius` to `end`, back to the apex.
    Sector {
        apex: Point,
        start: Point,
        end: Point,
        radius: f64,
        /// SVG sweep flag: true draws the arc clockwise on screen.
        clockwise: bool,
    },
}

impl Primitive {
    /// Whether this shape is a filled region (as opposed to a line).
    #[must_use]
    pub const fn is_fill(&self) -> bool {
        !matches!(self, Self::Line { .. })
    }

    /// The fill of a filled region; `None` for lines.
    #[must_use]
    pub const fn paint(&self) -> Option<Paint> {
        match self {
            Self::Line { .. } => None,
            Self::Triangle { paint, .. } => Some(*paint),
            Self::Sector { .. } => Some(Paint::Ink),
        }
    }
}

impl fmt::Display for Primitive {
    /// The SVG element for this shape.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Line { from, to } => write!(
                f,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
                Num(from.x),
                Num(from.y),
                Num(to.x),
                Num(to.y),
            ),
            Self::Triangle { points: [a, b, c], paint } => write!(
                f,
                r#"<polygon points="{},{} {},{} {},{}" fill="{}" stroke="none"/>"#,
                Num(a.x),
                Num(a.y),
                Num(b.x),
                Num(b.y),
                Num(c.x),
                Num(c.y),
                paint.color(),
            ),
            Self::Sector {
                apex,
                start,
                end,
                radius,
                clockwise,
            } => write!(
                f,
                r#"<path d="M {} {} L {} {} A {} {} 0 0 {} {} {} Z" fill="{}" stroke="none"/>"#,
                Num(apex.x),
                Num(apex.y),
                Num(start.x),
                Num(start.y),
                Num(radius),
                Num(radius),
                u8::from(clockwise),
                Num(end.x),
                Num(end.y),
                FILL_INK,
            ),
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
