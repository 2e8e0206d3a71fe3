use rand::rngs::SmallRng;

use crate::common::{ShotError, ShotResult};
use crate::ship::Coord;

/// Interface implemented by different player types.
///
/// A player's one obligation is to pick the next target; the game loop
/// checks the pick against the opposing board and asks again until a shot
/// resolves. The `handle_*` hooks exist for presentation: interactive
/// players print from them, automated players keep the default no-ops.
pub trait Player {
    /// Choose the next cell to fire at on the opposing board.
    fn choose_target(&mut self, rng: &mut SmallRng) -> Coord;

    /// Inform the player of the outcome of its own shot.
    fn handle_shot(&mut self, _target: Coord, _outcome: ShotResult) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_incoming(&mut self, _target: Coord, _outcome: ShotResult) {}

    /// Inform the player that its pick was refused; `choose_target` will
    /// be called again.
    fn handle_rejected(&mut self, _target: Coord, _error: ShotError) {}
}
