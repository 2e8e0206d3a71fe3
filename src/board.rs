//! Board state for both phases of the game: ship placement and shooting.

use std::collections::HashSet;

use crate::common::{PlaceError, ShotError, ShotResult};
use crate::ship::{Coord, Ship};

/// Visual state of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Untouched water.
    Empty,
    /// An intact ship cell. Concealed boards render this as water.
    Ship,
    /// A resolved shot that hit nothing, or a revealed buffer cell.
    Miss,
    /// A hit cell of a ship that is still afloat.
    Hit,
    /// A cell of a destroyed ship.
    Sunk,
}

/// Placement phase of a board.
///
/// Accumulates ships under the spacing rule: every placed ship blocks its
/// own cells plus the one-cell buffer around them, diagonals included, for
/// later placements. [`BoardSetup::finish`] consumes the setup and produces
/// the playable [`Board`]; the placement bookkeeping does not survive the
/// transition, so a finished board starts with every cell targetable.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardSetup {
    size: i32,
    cells: Vec<Cell>,
    ships: Vec<Ship>,
    blocked: HashSet<Coord>,
}

impl BoardSetup {
    /// Create an empty `size`x`size` board.
    pub fn new(size: i32) -> Self {
        debug_assert!(size >= 1);
        BoardSetup {
            size,
            cells: vec![Cell::Empty; (size * size) as usize],
            ships: Vec::new(),
            blocked: HashSet::new(),
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Ships placed so far.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Try to place `ship`. Fails without mutating anything if any of its
    /// cells is out of bounds or falls on a previous ship or its buffer.
    pub fn place(&mut self, ship: Ship) -> Result<(), PlaceError> {
        for c in ship.cells() {
            if !in_bounds(self.size, c) {
                return Err(PlaceError::OutOfBounds);
            }
            if self.blocked.contains(&c) {
                return Err(PlaceError::Blocked);
            }
        }
        for c in ship.cells() {
            self.cells[index(self.size, c)] = Cell::Ship;
            self.blocked.insert(c);
        }
        // The buffer blocks later placements but stays invisible; only a
        // destruction during play reveals it.
        for c in ship.contour() {
            if in_bounds(self.size, c) {
                self.blocked.insert(c);
            }
        }
        self.ships.push(ship);
        Ok(())
    }

    /// End the placement phase and produce the playable board.
    pub fn finish(self) -> Board {
        Board {
            size: self.size,
            hidden: false,
            cells: self.cells,
            ships: self.ships,
            targeted: HashSet::new(),
            sunk: 0,
        }
    }
}

/// Shooting phase of a board: the fleet under fire.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    size: i32,
    hidden: bool,
    cells: Vec<Cell>,
    ships: Vec<Ship>,
    targeted: HashSet<Coord>,
    sunk: usize,
}

impl Board {
    /// Side length of the board.
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Whether renderers should conceal intact ship cells.
    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// The fleet, with its accumulated damage.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships destroyed so far. Never decreases.
    pub fn sunk_count(&self) -> usize {
        self.sunk
    }

    /// True once every ship of the fleet has been destroyed.
    pub fn all_sunk(&self) -> bool {
        self.sunk == self.ships.len()
    }

    /// True if `target` was already fired at or revealed by a sinking.
    pub fn was_targeted(&self, target: Coord) -> bool {
        self.targeted.contains(&target)
    }

    /// State of one cell, or `None` outside the board.
    pub fn cell(&self, c: Coord) -> Option<Cell> {
        if in_bounds(self.size, c) {
            Some(self.cells[index(self.size, c)])
        } else {
            None
        }
    }

    /// Rows of the cell matrix, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size as usize)
    }

    /// Resolve a shot at `target`.
    ///
    /// Refused shots leave the board untouched. A hit that empties a ship's
    /// last cell marks the whole ship as sunk and reveals its surrounding
    /// water as misses; those revealed cells count as targeted from then on.
    pub fn shoot(&mut self, target: Coord) -> Result<ShotResult, ShotError> {
        if !in_bounds(self.size, target) {
            return Err(ShotError::OutOfBounds);
        }
        if self.targeted.contains(&target) {
            return Err(ShotError::AlreadyTargeted);
        }
        self.targeted.insert(target);

        let Some(i) = self.ships.iter().position(|s| s.covers(target)) else {
            self.cells[index(self.size, target)] = Cell::Miss;
            return Ok(ShotResult::Miss);
        };
        self.ships[i].take_hit();
        self.cells[index(self.size, target)] = Cell::Hit;
        if !self.ships[i].is_sunk() {
            return Ok(ShotResult::Hit);
        }

        self.sunk += 1;
        let ship = self.ships[i];
        for c in ship.cells() {
            self.cells[index(self.size, c)] = Cell::Sunk;
        }
        // Every ship cell is already in `targeted` (sinking means they were
        // all hit), so the insert gate marks exactly the surrounding water
        // and bars it from future shots.
        for c in ship.contour() {
            if in_bounds(self.size, c) && self.targeted.insert(c) {
                self.cells[index(self.size, c)] = Cell::Miss;
            }
        }
        Ok(ShotResult::Sunk)
    }
}

fn in_bounds(size: i32, c: Coord) -> bool {
    c.x >= 0 && c.x < size && c.y >= 0 && c.y < size
}

fn index(size: i32, c: Coord) -> usize {
    (c.x * size + c.y) as usize
}
