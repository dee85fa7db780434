//! A depth-limited minimax agent for the board game 'Connect 4'
//!
//! The agent looks a fixed number of moves ahead and scores positions by
//! exact win detection only: a win is worth 10, a loss -10 and anything else 0.
//! It works on any grid size the environment reports.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{Game, MinimaxAgent, SearchConfig};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // player one has three in a row on the floor, and is to move
//! let game = Game::from_moves(6, 7, "112233")?;
//! let agent = MinimaxAgent::new(SearchConfig { max_depth: 2, parallel: false })?;
//!
//! assert_eq!(agent.choose_move(&game)?, 3);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;

pub mod error;

pub mod grid;

pub mod terminal;

pub mod search;

pub mod environment;


pub use environment::{Environment, Game, GameState, MinimaxAgent};
pub use error::GameError;
pub use grid::{Cell, Grid, Player};
pub use search::{SearchConfig, SearchContext, Searcher};

/// The default number of plies searched below the root
pub const MAX_DEPTH: usize = 8;

/// The number of discs in a row needed to win
pub const RUN_LENGTH: usize = 4;

/// Terminal value of a position won by the searching player
pub const WIN_SCORE: i32 = 10;

/// Terminal value of a position won by the opponent
pub const LOSS_SCORE: i32 = -WIN_SCORE;

/// The default grid height in cells
pub const DEFAULT_ROWS: usize = 6;

/// The default grid width in cells
pub const DEFAULT_COLUMNS: usize = 7;

const_assert!(MAX_DEPTH >= 1);
const_assert_eq!(RUN_LENGTH, 4);
const_assert!(WIN_SCORE > 0);
