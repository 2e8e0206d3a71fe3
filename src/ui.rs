//! Console presentation: board rendering and user-facing text.

use crate::board::{Board, Cell};
use crate::ship::Coord;

/// Welcome text printed before an interactive match.
pub const GREETING: &str = "-------------------
    Welcome to
    Sea Battle
-------------------
 input format: x y
 x - row number
 y - column number";

/// Render a board as a bordered table, one line per row, 1-based headers.
///
/// Intact ship cells are shown only when the board is not hidden or when
/// `reveal` overrides the flag (own board, post-game display). Hits, sunk
/// ships and misses are always shown.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let show_ships = !board.hidden() || reveal;
    let mut out = String::from("  |");
    for col in 1..=board.size() {
        out.push_str(&format!(" {} |", col));
    }
    for (row, cells) in board.rows().enumerate() {
        out.push_str(&format!("\n{} |", row + 1));
        for &cell in cells {
            let mark = match cell {
                Cell::Empty => 'O',
                Cell::Ship if show_ships => '■',
                Cell::Ship => 'O',
                Cell::Miss => '.',
                Cell::Hit => 'X',
                Cell::Sunk => '#',
            };
            out.push_str(&format!(" {} |", mark));
        }
    }
    out
}

/// Format a coordinate the way players type it: 1-based "row col".
pub fn one_based(c: Coord) -> String {
    format!("{} {}", c.x + 1, c.y + 1)
}
