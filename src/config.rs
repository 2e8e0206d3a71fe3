//! Standard match parameters.

/// Side length of the standard board.
pub const BOARD_SIZE: i32 = 6;

/// Ship lengths of the standard fleet, longest first.
pub const FLEET: [i32; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Random placement attempts allowed while building one board before the
/// build is abandoned and the board restarted from scratch.
pub const PLACEMENT_BUDGET: u32 = 2000;

/// Abandoned builds allowed before fleet generation fails with a
/// [`GenerateError`](crate::GenerateError).
pub const BUILD_LIMIT: u32 = 100;
