//! Automated player with uniform random targeting.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::player::Player;
use crate::ship::Coord;

/// Computer player that fires at a uniformly random in-bounds cell.
///
/// Picks are not checked against earlier shots; the game loop simply asks
/// again when the board refuses one.
pub struct RandomPlayer {
    size: i32,
}

impl RandomPlayer {
    /// Player for a `size`x`size` opposing board.
    pub fn new(size: i32) -> Self {
        RandomPlayer { size }
    }
}

impl Player for RandomPlayer {
    fn choose_target(&mut self, rng: &mut SmallRng) -> Coord {
        Coord::new(
            rng.random_range(0..self.size),
            rng.random_range(0..self.size),
        )
    }
}
