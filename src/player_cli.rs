//! Interactive player reading targets from stdin.

use std::io::{self, Write};

use rand::rngs::SmallRng;

use crate::common::{ShotError, ShotResult};
use crate::player::Player;
use crate::ship::Coord;
use crate::ui;

/// Human player. Prompts on stdout and reads "row col" pairs from stdin.
/// Ends the process when stdin closes.
pub struct CliPlayer;

impl CliPlayer {
    pub fn new() -> Self {
        Self
    }
}

/// Parse a typed target: exactly two base-10 integers, 1-based as entered,
/// converted to 0-based. Returns `None` on anything else, including numbers
/// the 0-based shift cannot represent. Range checking belongs to the board,
/// so "0 0" parses fine (to `(-1, -1)`) and gets rejected by the shot itself.
pub fn parse_target(input: &str) -> Option<Coord> {
    let mut parts = input.split_whitespace();
    let x = parts.next()?;
    let y = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    let x: i32 = x.parse().ok()?;
    let y: i32 = y.parse().ok()?;
    Some(Coord::new(x.checked_sub(1)?, y.checked_sub(1)?))
}

impl Player for CliPlayer {
    fn choose_target(&mut self, _rng: &mut SmallRng) -> Coord {
        loop {
            print!("Your shot (row col): ");
            io::stdout().flush().unwrap();
            let mut line = String::new();
            // read_line returns 0 bytes only at end of input
            if io::stdin().read_line(&mut line).unwrap() == 0 {
                println!("\nNo more input, quitting.");
                std::process::exit(0);
            }
            match parse_target(&line) {
                Some(target) => return target,
                None => println!("Enter two numbers, e.g. 2 5."),
            }
        }
    }

    fn handle_shot(&mut self, target: Coord, outcome: ShotResult) {
        match outcome {
            ShotResult::Miss => println!("You fired at {}: miss.", ui::one_based(target)),
            ShotResult::Hit => println!("You fired at {}: hit!", ui::one_based(target)),
            ShotResult::Sunk => println!("You fired at {}: ship destroyed!", ui::one_based(target)),
        }
    }

    fn handle_incoming(&mut self, target: Coord, outcome: ShotResult) {
        match outcome {
            ShotResult::Miss => println!("Opponent fired at {}: miss.", ui::one_based(target)),
            ShotResult::Hit => {
                println!("Opponent fired at {}: your ship is hit!", ui::one_based(target))
            }
            ShotResult::Sunk => println!(
                "Opponent fired at {}: your ship is destroyed!",
                ui::one_based(target)
            ),
        }
    }

    fn handle_rejected(&mut self, _target: Coord, error: ShotError) {
        println!("{}.", error);
    }
}
