//! Match orchestration: fleet generation, the turn state machine and the
//! shot retry loop.

use core::fmt;

use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::{Board, BoardSetup};
use crate::common::ShotResult;
use crate::config::{BOARD_SIZE, BUILD_LIMIT, FLEET, PLACEMENT_BUDGET};
use crate::player::Player;
use crate::ship::{Coord, Orientation, Ship};

/// One of the two sides of a match. Side one moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    One,
    Two,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
        }
    }
}

/// State of the match. `Won` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Turn(Side),
    Won(Side),
}

/// Fleet generation gave up: the fleet could not be placed within the
/// build budget. Indicates an infeasible board size and fleet combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateError {
    pub size: i32,
    pub builds: u32,
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "could not place the fleet on a {}x{} board after {} builds",
            self.size, self.size, self.builds
        )
    }
}

impl std::error::Error for GenerateError {}

/// Place the whole fleet once. `None` when the placement budget runs out.
fn try_fleet<R: Rng>(rng: &mut R, size: i32, fleet: &[i32]) -> Option<Board> {
    let mut setup = BoardSetup::new(size);
    let mut attempts = 0u32;
    for &length in fleet {
        loop {
            attempts += 1;
            if attempts > PLACEMENT_BUDGET {
                return None;
            }
            let bow = Coord::new(rng.random_range(0..size), rng.random_range(0..size));
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            if setup.place(Ship::new(bow, length, orientation)).is_ok() {
                break;
            }
        }
    }
    Some(setup.finish())
}

/// Build a board with `fleet` placed at random, restarting from scratch
/// whenever a build exhausts its placement budget. Gives up after
/// [`BUILD_LIMIT`] builds.
pub fn random_board<R: Rng>(rng: &mut R, size: i32, fleet: &[i32]) -> Result<Board, GenerateError> {
    for build in 0..BUILD_LIMIT {
        if let Some(board) = try_fleet(rng, size, fleet) {
            if build > 0 {
                log::debug!("fleet placed on build {}", build + 1);
            }
            return Ok(board);
        }
        if build + 1 < BUILD_LIMIT {
            log::debug!("placement budget exhausted, restarting the board");
        }
    }
    Err(GenerateError {
        size,
        builds: BUILD_LIMIT,
    })
}

/// A running match: two boards, two players and the turn state machine.
pub struct Game {
    boards: [Board; 2],
    players: [Box<dyn Player>; 2],
    rng: SmallRng,
    state: GameState,
    turns: u32,
}

impl Game {
    /// Standard match: a random fleet for each side on the configured board
    /// size, with side two's board concealed. Side one moves first.
    pub fn new(
        player_one: Box<dyn Player>,
        player_two: Box<dyn Player>,
        mut rng: SmallRng,
    ) -> Result<Self, GenerateError> {
        let board_one = random_board(&mut rng, BOARD_SIZE, &FLEET)?;
        let mut board_two = random_board(&mut rng, BOARD_SIZE, &FLEET)?;
        board_two.set_hidden(true);
        Ok(Game::with_boards(
            [board_one, board_two],
            [player_one, player_two],
            rng,
        ))
    }

    /// Match over caller-supplied boards. No concealment is applied.
    pub fn with_boards(
        boards: [Board; 2],
        players: [Box<dyn Player>; 2],
        rng: SmallRng,
    ) -> Self {
        Game {
            boards,
            players,
            rng,
            state: GameState::Turn(Side::One),
            turns: 0,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Resolved shots so far, both sides combined.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    /// Run one turn of the active side and advance the state machine.
    ///
    /// A hit keeps the turn with the same side; a miss or a sinking passes
    /// it; destroying the last ship wins the match. Terminal states are
    /// returned unchanged.
    pub fn step(&mut self) -> GameState {
        if let GameState::Turn(side) = self.state {
            let outcome = self.take_turn(side);
            self.turns += 1;
            let foe = side.opponent();
            if self.boards[foe.index()].all_sunk() {
                log::debug!("side {:?} wins after {} shots", side, self.turns);
                self.state = GameState::Won(side);
            } else if outcome != ShotResult::Hit {
                self.state = GameState::Turn(foe);
            }
        }
        self.state
    }

    /// Drive the match to the end and return the winner.
    pub fn run(&mut self) -> Side {
        loop {
            if let GameState::Won(side) = self.step() {
                return side;
            }
        }
    }

    /// Ask `side` for targets until one resolves against the opposing
    /// board. Rejected picks are reported back to the player; the loop
    /// relies on the player eventually producing an untried in-bounds cell.
    fn take_turn(&mut self, side: Side) -> ShotResult {
        let shooter = side.index();
        let foe = side.opponent().index();
        loop {
            let target = self.players[shooter].choose_target(&mut self.rng);
            match self.boards[foe].shoot(target) {
                Ok(outcome) => {
                    log::debug!("side {:?} fires at {}: {:?}", side, target, outcome);
                    self.players[shooter].handle_shot(target, outcome);
                    self.players[foe].handle_incoming(target, outcome);
                    return outcome;
                }
                Err(error) => {
                    log::debug!("side {:?} pick {} rejected: {}", side, target, error);
                    self.players[shooter].handle_rejected(target, error);
                }
            }
        }
    }
}
