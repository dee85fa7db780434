//! Win detection
//!
//! The grid is scanned cell by cell in row-major order (top row first, left to
//! right), and from each occupied cell four directions are tried. The first
//! cell that starts a complete run decides the result. In a position reached
//! by legal play at most one player can own a run, but for hand-built grids
//! holding runs for both players this scan order is what picks the winner.

use crate::{grid::*, LOSS_SCORE, RUN_LENGTH, WIN_SCORE};

/// A direction a run is followed in, as a (row, column) step
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// down and to the right
    DiagonalDown,
    /// up and to the right
    DiagonalUp,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (-1, 1),
        }
    }
}

/// Checks whether `RUN_LENGTH` cells starting at `(row, column)` and following
/// `direction` all hold the same disc
pub fn run_from(grid: &Grid, row: usize, column: usize, direction: Direction) -> Option<Player> {
    let owner = grid.get(row, column)?.owner()?;
    let (d_row, d_column) = direction.step();

    for i in 1..RUN_LENGTH as isize {
        let r = row as isize + d_row * i;
        let c = column as isize + d_column * i;
        // negative coordinates are out of bounds
        if r < 0 || c < 0 {
            return None;
        }
        if grid.get(r as usize, c as usize)?.owner() != Some(owner) {
            return None;
        }
    }
    Some(owner)
}

/// Finds the owner of the first run found in scan order
pub fn winner(grid: &Grid) -> Option<Player> {
    for row in 0..grid.rows() {
        for column in 0..grid.columns() {
            if let Some(player) = Direction::ALL
                .iter()
                .find_map(|&direction| run_from(grid, row, column, direction))
            {
                return Some(player);
            }
        }
    }
    None
}

/// Scores a grid from the point of view of the opponent of `opponent`
///
/// Returns [`LOSS_SCORE`] if the first run found belongs to `opponent`,
/// [`WIN_SCORE`] if it belongs to anyone else, and 0 if there is no run.
/// A drawn grid and an undecided one both score 0.
pub fn evaluate(grid: &Grid, opponent: Player) -> i32 {
    match winner(grid) {
        Some(player) if player == opponent => LOSS_SCORE,
        Some(_) => WIN_SCORE,
        None => 0,
    }
}
