// SPDX-License-Identifier: MIT
//
// GridRenderer: a whole CharGrid → one standalone SVG document.
//
// Layout:
//
//   <svg viewBox="0 0 W H">       W = cols × size, H = rows × size
//     <g stroke=#ccc …>           background grid, one line per cell edge
//     <g transform=translate(…)>  one group per cell, row-major
//   </svg>
//
// Every cell gets a group, blank ones included. An empty grid is the bare
// root element with a zero viewBox.

use std::fmt::Write as _;

use truchet_tiles::grid::CharGrid;

use crate::cell::CellRenderer;
use crate::geometry::Num;
use crate::primitive::{STROKE_CONTOUR, STROKE_CONTOUR_WIDTH, STROKE_GRID, STROKE_GRID_WIDTH};
use crate::style::TileStyle;

/// Side of one cell in user units, unless configured otherwise.
pub const DEFAULT_CELL_SIZE: u32 = 20;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Renders tile grids to SVG text.
///
/// # Examples
///
/// ```
/// use truchet_svg::{GridRenderer, TileStyle};
/// use truchet_tiles::grid::CharGrid;
///
/// let svg = GridRenderer::new(TileStyle::Circle).render(&CharGrid::empty());
/// assert_eq!(svg, r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 0 0"></svg>"#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridRenderer {
    pub style: TileStyle,
    pub flipped: bool,
    pub cell_size: u32,
}

impl Default for GridRenderer {
    fn default() -> Self {
        Self::new(TileStyle::default())
    }
}

impl GridRenderer {
    #[must_use]
    pub const fn new(style: TileStyle) -> Self {
        Self {
            style,
            flipped: false,
            cell_size: DEFAULT_CELL_SIZE,
        }
    }

    #[must_use]
    pub const fn flipped(mut self, flipped: bool) -> Self {
        self.flipped = flipped;
        self
    }

    #[must_use]
    pub const fn cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// The SVG document for `grid`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn render(&self, grid: &CharGrid) -> String {
        let size = f64::from(self.cell_size);
        let (rows, cols) = (grid.height(), grid.width());
        let width = cols as f64 * size;
        let height = rows as f64 * size;

        let mut svg = String::new();
        // Writing to a String cannot fail.
        let _ = write!(
            svg,
            r#"<svg xmlns="{SVG_NS}" viewBox="0 0 {} {}">"#,
            Num(width),
            Num(height)
        );
        if grid.is_empty() {
            svg.push_str("</svg>");
            return svg;
        }

        let _ = write!(
            svg,
            r#"<g stroke="{STROKE_GRID}" stroke-width="{}" fill="none">"#,
            Num(STROKE_GRID_WIDTH)
        );
        for r in 0..=rows {
            let y = r as f64 * size;
            let _ = write!(
                svg,
                r#"<line x1="0" y1="{y}" x2="{w}" y2="{y}"/>"#,
                y = Num(y),
                w = Num(width)
            );
        }
        for c in 0..=cols {
            let x = c as f64 * size;
            let _ = write!(
                svg,
                r#"<line x1="{x}" y1="0" x2="{x}" y2="{h}"/>"#,
                x = Num(x),
                h = Num(height)
            );
        }
        svg.push_str("</g>");

        let cell = CellRenderer::new(self.style, self.flipped, size);
        for (r, c, tile) in grid.cells() {
            let _ = write!(
                svg,
                r#"<g transform="translate({},{})" stroke="{STROKE_CONTOUR}" fill="none" stroke-width="{}">"#,
                Num(c as f64 * size),
                Num(r as f64 * size),
                Num(STROKE_CONTOUR_WIDTH)
            );
            for prim in cell.render(tile, r, c) {
                let _ = write!(svg, "{prim}");
            }
            svg.push_str("</g>");
        }

        svg.push_str("</svg>");
        log::debug!(
            "rendered {rows}x{cols} grid as {} svg ({} bytes)",
            self.style.name(),
            svg.len()
        );
        svg
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use truchet_tiles::tile::TileChar;

    fn grid(rows: &[&str]) -> CharGrid {
        let rows: Vec<Vec<TileChar>> = rows
            .iter()
            .map(|r| r.chars().map(|c| TileChar::from_char(c).unwrap()).collect())
            .collect();
        CharGrid::from_rows(&rows)
    }

    #[test]
    fn empty_grid_is_bare_root() {
        for &style in TileStyle::all() {
            assert_eq!(
                GridRenderer::new(style).render(&CharGrid::empty()),
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 0 0"></svg>"#
            );
        }
    }

    #[test]
    fn view_box_scales_with_cell_size() {
        let g = grid(&["XXX", "X X"]);
        let svg = GridRenderer::new(TileStyle::Bowtie).render(&g);
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 60 40">"#));

        let svg = GridRenderer::new(TileStyle::Bowtie).cell_size(8).render(&g);
        assert!(svg.contains(r#"viewBox="0 0 24 16""#));
    }

    #[test]
    fn blank_grid_has_background_and_empty_cells_only() {
        let g = grid(&["   ", "   "]);
        let svg = GridRenderer::new(TileStyle::Circle).render(&g);

        assert!(svg.contains(r##"<g stroke="#ccc" stroke-width="0.5" fill="none">"##));
        // (rows + 1) horizontal + (cols + 1) vertical.
        assert_eq!(svg.matches("<line").count(), 3 + 4);
        assert_eq!(svg.matches("<g transform=").count(), 6);
        assert!(!svg.contains("<polygon"));
        assert!(!svg.contains("<path"));
    }

    #[test]
    fn cells_are_translated_row_major() {
        let g = grid(&["XX", "XX"]);
        let svg = GridRenderer::new(TileStyle::Triangle).render(&g);
        let offsets: Vec<&str> = svg
            .match_indices("translate(")
            .map(|(i, _)| {
                let rest = &svg[i + "translate(".len()..];
                &rest[..rest.find(')').unwrap()]
            })
            .collect();
        assert_eq!(offsets, vec!["0,0", "20,0", "0,20", "20,20"]);
    }

    #[test]
    fn cell_groups_carry_contour_stroke() {
        let svg = GridRenderer::new(TileStyle::Bowtie).render(&grid(&["X"]));
        assert!(svg.contains(
            r##"<g transform="translate(0,0)" stroke="#111" fill="none" stroke-width="1">"##
        ));
        // Background 2 + 2, contour 2.
        assert_eq!(svg.matches("<line").count(), 6);
        assert_eq!(svg.matches("<polygon").count(), 2);
        assert!(svg.ends_with("</g></svg>"));
    }

    #[test]
    fn flag_changes_output() {
        let g = grid(&["Xλ", "ɣX"]);
        let plain = GridRenderer::new(TileStyle::Bowtie).render(&g);
        let flipped = GridRenderer::new(TileStyle::Bowtie).flipped(true).render(&g);
        assert_ne!(plain, flipped);
        assert_eq!(plain, GridRenderer::new(TileStyle::Bowtie).render(&g));
    }

    #[test]
    fn document_is_self_contained() {
        let svg = GridRenderer::default().render(&grid(&["ʎXλ"]));
        assert!(!svg.contains("href"));
        assert!(!svg.contains("<script"));
    }
}
