// SPDX-License-Identifier: MIT

//! Tile styles: the three ways a tile can be drawn.
//!
//! The style is a render-time choice. Glyph data never records it.

/// How each tile is turned into geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum TileStyle {
    /// Structural contour lines plus two filled half-triangles.
    #[default]
    Bowtie,
    /// Two filled circular quadrants on a diagonal.
    Circle,
    /// Two filled corner triangles on a diagonal.
    Triangle,
}

impl TileStyle {
    /// Lowercase name, as accepted on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bowtie => "bowtie",
            Self::Circle => "circle",
            Self::Triangle => "triangle",
        }
    }

    /// Parse a style from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::all().iter().find(|s| s.name() == lower).copied()
    }

    /// All styles.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Bowtie, Self::Circle, Self::Triangle]
    }

    /// Whether the style fills corner quadrants rather than halves.
    #[must_use]
    pub const fn is_corner_based(self) -> bool {
        matches!(self, Self::Circle | Self::Triangle)
    }
}
