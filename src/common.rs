//! Shared outcome and error types for board operations.

use core::fmt;

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// Shot hit open water.
    Miss,
    /// Shot hit a ship that still has intact cells.
    Hit,
    /// Shot destroyed the last intact cell of a ship.
    Sunk,
}

/// Reasons a shot is refused without resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotError {
    /// Target lies outside the board.
    OutOfBounds,
    /// Target was already fired at, or revealed by a sunken ship.
    AlreadyTargeted,
}

impl fmt::Display for ShotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotError::OutOfBounds => write!(f, "Shot is off the board"),
            ShotError::AlreadyTargeted => write!(f, "Cell was already fired at"),
        }
    }
}

impl std::error::Error for ShotError {}

/// Reasons a ship cannot be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    /// Part of the ship would lie outside the board.
    OutOfBounds,
    /// Part of the ship would touch or overlap another ship.
    Blocked,
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceError::OutOfBounds => write!(f, "Ship placement is out of bounds"),
            PlaceError::Blocked => write!(f, "Ship placement overlaps another ship or its buffer"),
        }
    }
}

impl std::error::Error for PlaceError {}
