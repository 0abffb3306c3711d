// SPDX-License-Identifier: MIT

//! Vector rendering for Truchet tile grids.
//!
//! A [`CharGrid`](truchet_tiles::grid::CharGrid) is drawn cell by cell in
//! one of three [`TileStyle`]s and serialized as a standalone SVG document
//! by [`GridRenderer`].
//!
//! - [`geometry`]: cell landmarks and coordinate formatting
//! - [`primitive`]: lines, triangles and sectors, plus their SVG elements
//! - [`cell`]: one tile at one position → primitives
//! - [`document`]: whole grid → SVG text

pub mod cell;
pub mod document;
pub mod geometry;
pub mod primitive;
pub mod style;

pub use cell::{CellRenderer, matches_base};
pub use document::{DEFAULT_CELL_SIZE, GridRenderer};
pub use primitive::{Paint, Primitive};
pub use style::TileStyle;
