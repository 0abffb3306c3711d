// SPDX-License-Identifier: MIT
//
// TileChar: the six-symbol Truchet alphabet.
//
// Every cell of a letter is one of six tiles. Each non-trivial tile is a
// cell split along one diagonal with one half filled:
//
//   ' '  BLANK     nothing filled
//   'X'  FULL      everything filled
//   'λ'  LAMBDA    ◣ lower-left half   (back diagonal \)
//   'ɣ'  GAMMA     ◥ upper-right half  (back diagonal \)
//   'y'  Y         ◤ upper-left half   (forward diagonal /)
//   'ʎ'  UPSIDE_Y  ◢ lower-right half  (forward diagonal /)
//
// Inversion swaps filled and empty, so it pairs each tile with the one
// that fills the opposite half. It is an involution.
//
// Directions record which cell edges touch the filled region. Corners
// record which cell corners the filled region reaches; the one corner a
// half-tile leaves empty is its unavailable corner. Corner-based styles
// use the unavailable corner to keep neighbouring fills from bleeding
// into a tile that doesn't connect there.

use std::fmt;

// ─── Direction & Corner sets ────────────────────────────────────────────────

bitflags::bitflags! {
    /// Cell edges touched by a tile's filled region.
    ///
    /// ```
    /// use truchet_tiles::tile::{Directions, TileChar};
    ///
    /// let dirs = TileChar::Lambda.directions();
    /// assert!(dirs.contains(Directions::LEFT | Directions::BOTTOM));
    /// assert!(!dirs.contains(Directions::TOP));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Directions: u8 {
        const LEFT   = 1 << 0;
        const RIGHT  = 1 << 1;
        const TOP    = 1 << 2;
        const BOTTOM = 1 << 3;
    }
}

bitflags::bitflags! {
    /// Cell corners (quadrants) reached by a tile's filled region.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Corners: u8 {
        const TOP_LEFT     = 1 << 0;
        const TOP_RIGHT    = 1 << 1;
        const BOTTOM_LEFT  = 1 << 2;
        const BOTTOM_RIGHT = 1 << 3;
    }
}

/// A single cell corner, for walking a [`Corners`] set in a fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// All four corners, clockwise from top-left.
    pub const ALL: [Self; 4] = [Self::TopLeft, Self::TopRight, Self::BottomRight, Self::BottomLeft];

    /// This corner as a one-member set.
    #[must_use]
    pub const fn flag(self) -> Corners {
        match self {
            Self::TopLeft => Corners::TOP_LEFT,
            Self::TopRight => Corners::TOP_RIGHT,
            Self::BottomLeft => Corners::BOTTOM_LEFT,
            Self::BottomRight => Corners::BOTTOM_RIGHT,
        }
    }

    /// Whether this corner lies on the main (top-left to bottom-right)
    /// diagonal.
    #[must_use]
    pub const fn on_main_diagonal(self) -> bool {
        matches!(self, Self::TopLeft | Self::BottomRight)
    }
}

impl Corners {
    /// Members of this set in [`Corner::ALL`] order.
    pub fn corners(self) -> impl Iterator<Item = Corner> {
        Corner::ALL.into_iter().filter(move |c| self.contains(c.flag()))
    }
}

// ─── TileChar ───────────────────────────────────────────────────────────────

/// One Truchet tile.
///
/// The alphabet is closed: raw characters become tiles only through
/// [`TileChar::from_char`], so anything past that boundary is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum TileChar {
    /// Empty cell (`' '`).
    #[default]
    Blank,
    /// Solid cell (`'X'`).
    Full,
    /// Lower-left half (`'λ'`).
    Lambda,
    /// Upper-right half (`'ɣ'`).
    Gamma,
    /// Upper-left half (`'y'`).
    Y,
    /// Lower-right half (`'ʎ'`).
    UpsideY,
}

impl TileChar {
    /// All six tiles in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Blank,
        Self::Full,
        Self::Lambda,
        Self::Gamma,
        Self::Y,
        Self::UpsideY,
    ];

    /// Parse the textual form of a tile.
    ///
    /// Returns `None` for anything outside the alphabet.
    ///
    /// ```
    /// use truchet_tiles::tile::TileChar;
    ///
    /// assert_eq!(TileChar::from_char('λ'), Some(TileChar::Lambda));
    /// assert_eq!(TileChar::from_char('#'), None);
    /// ```
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            ' ' => Some(Self::Blank),
            'X' => Some(Self::Full),
            'λ' => Some(Self::Lambda),
            'ɣ' => Some(Self::Gamma),
            'y' => Some(Self::Y),
            'ʎ' => Some(Self::UpsideY),
            _ => None,
        }
    }

    /// The textual form of this tile.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Blank => ' ',
            Self::Full => 'X',
            Self::Lambda => 'λ',
            Self::Gamma => 'ɣ',
            Self::Y => 'y',
            Self::UpsideY => 'ʎ',
        }
    }

    /// The tile with filled and empty regions swapped.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Blank => Self::Full,
            Self::Full => Self::Blank,
            Self::Lambda => Self::Gamma,
            Self::Gamma => Self::Lambda,
            Self::Y => Self::UpsideY,
            Self::UpsideY => Self::Y,
        }
    }

    /// Edges of the cell touched by the filled region.
    #[must_use]
    pub const fn directions(self) -> Directions {
        match self {
            Self::Blank => Directions::empty(),
            Self::Full => Directions::all(),
            Self::Lambda => Directions::LEFT.union(Directions::BOTTOM),
            Self::Gamma => Directions::TOP.union(Directions::RIGHT),
            Self::Y => Directions::TOP.union(Directions::LEFT),
            Self::UpsideY => Directions::BOTTOM.union(Directions::RIGHT),
        }
    }

    /// Corners of the cell reached by the filled region.
    #[must_use]
    pub const fn corners(self) -> Corners {
        match self {
            Self::Blank => Corners::empty(),
            Self::Full => Corners::all(),
            Self::Lambda => Corners::BOTTOM_LEFT
                .union(Corners::BOTTOM_RIGHT)
                .union(Corners::TOP_LEFT),
            Self::Gamma => Corners::TOP_RIGHT
                .union(Corners::BOTTOM_RIGHT)
                .union(Corners::TOP_LEFT),
            Self::Y => Corners::TOP_LEFT
                .union(Corners::BOTTOM_LEFT)
                .union(Corners::TOP_RIGHT),
            Self::UpsideY => Corners::BOTTOM_RIGHT
                .union(Corners::BOTTOM_LEFT)
                .union(Corners::TOP_RIGHT),
        }
    }

    /// The corner a half-tile leaves empty.
    ///
    /// Empty for `Blank` and `Full`, which have no diagonal.
    #[must_use]
    pub const fn unavailable_corners(self) -> Corners {
        match self {
            Self::Blank | Self::Full => Corners::empty(),
            Self::Lambda => Corners::TOP_RIGHT,
            Self::Gamma => Corners::BOTTOM_LEFT,
            Self::Y => Corners::BOTTOM_RIGHT,
            Self::UpsideY => Corners::TOP_LEFT,
        }
    }

    /// Whether this is the empty tile.
    #[inline]
    #[must_use]
    pub const fn is_blank(self) -> bool {
        matches!(self, Self::Blank)
    }
}

impl fmt::Display for TileChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
