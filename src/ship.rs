//! Coordinates and ship geometry.

use core::fmt;

/// Zero-based cell position on a board. `x` indexes rows, `y` columns.
///
/// Components are signed so that candidates handed in from outside, such
/// as typed input converted from 1-based form, can land off the board and
/// be rejected by the board itself rather than by every caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Coord { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Orientation of a ship on the board.
///
/// `Vertical` ships extend down the rows (increasing `x`), `Horizontal`
/// ships extend along the columns (increasing `y`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A ship anchored at its bow cell, with remaining hit points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    bow: Coord,
    length: i32,
    orientation: Orientation,
    hp: i32,
}

impl Ship {
    /// Create an undamaged ship of `length` cells starting at `bow`.
    pub fn new(bow: Coord, length: i32, orientation: Orientation) -> Self {
        debug_assert!(length >= 1);
        Ship {
            bow,
            length,
            orientation,
            hp: length,
        }
    }

    /// Bow (anchor) cell of the ship.
    pub fn bow(&self) -> Coord {
        self.bow
    }

    /// Ship's length in cells.
    pub fn length(&self) -> i32 {
        self.length
    }

    /// Orientation of the ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Remaining hit points, zero once every cell has been hit.
    pub fn hp(&self) -> i32 {
        self.hp
    }

    /// Check if the ship is sunk (all cells hit).
    pub fn is_sunk(&self) -> bool {
        self.hp == 0
    }

    /// Register one hit. Only shot resolution calls this, and never twice
    /// for the same cell.
    pub(crate) fn take_hit(&mut self) {
        debug_assert!(self.hp > 0);
        self.hp -= 1;
    }

    /// Cells occupied by the ship, in order from the bow.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let Ship {
            bow,
            length,
            orientation,
            ..
        } = *self;
        (0..length).map(move |i| match orientation {
            Orientation::Horizontal => Coord::new(bow.x, bow.y + i),
            Orientation::Vertical => Coord::new(bow.x + i, bow.y),
        })
    }

    /// True if `target` is one of the ship's occupied cells.
    pub fn covers(&self, target: Coord) -> bool {
        self.cells().any(|c| c == target)
    }

    /// The ship's cells plus the one-cell margin around them, diagonal
    /// neighbors included: the bounding rectangle grown by one on every
    /// side. May yield coordinates outside any particular board.
    pub fn contour(&self) -> impl Iterator<Item = Coord> {
        let bow = self.bow;
        let stern = match self.orientation {
            Orientation::Horizontal => Coord::new(bow.x, bow.y + self.length - 1),
            Orientation::Vertical => Coord::new(bow.x + self.length - 1, bow.y),
        };
        (bow.x - 1..=stern.x + 1)
            .flat_map(move |x| (bow.y - 1..=stern.y + 1).map(move |y| Coord::new(x, y)))
    }
}
