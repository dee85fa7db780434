//! The game an agent plays in, and the agent itself

use tracing::trace;

use crate::{error::GameError, grid::*, search::*, terminal::winner};

/// The widest grid a move string of single digits can address
pub const MAX_MOVE_STRING_COLUMNS: usize = 9;

/// What an agent can observe of the game it takes part in
pub trait Environment {
    fn rows(&self) -> usize;

    fn columns(&self) -> usize;

    /// An independent copy of the current grid
    fn snapshot(&self) -> Grid;

    /// The player the agent acts for
    fn role(&self) -> Player;
}

/// An agent picking its moves with a depth-limited minimax search
#[derive(Copy, Clone, Debug, Default)]
pub struct MinimaxAgent {
    config: SearchConfig,
}

impl MinimaxAgent {
    pub fn new(config: SearchConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Returns the column to drop a disc into for the environment's current role
    pub fn choose_move<E: Environment>(&self, env: &E) -> Result<usize, GameError> {
        let (_score, column) = self.search(env)?.choose_move()?;
        Ok(column)
    }

    /// Builds a searcher over the environment's current position
    ///
    /// The role and snapshot are read once and held fixed for the whole search.
    pub fn search<E: Environment>(&self, env: &E) -> Result<Searcher, GameError> {
        let player = env.role();
        let (rows, columns) = (env.rows(), env.columns());
        let grid = env.snapshot();
        if grid.rows() != rows || grid.columns() != columns {
            return Err(GameError::DimensionMismatch {
                rows,
                columns,
                found_rows: grid.rows(),
                found_columns: grid.columns(),
            });
        }
        Ok(Searcher::with_config(grid, player, self.config))
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    Won(Player),
    Draw,
}

impl GameState {
    fn of(grid: &Grid) -> Self {
        match winner(grid) {
            Some(player) => GameState::Won(player),
            None if grid.is_full() => GameState::Draw,
            None => GameState::Playing,
        }
    }
}

/// A game in progress, alternating turns between two players
#[derive(Clone, Debug)]
pub struct Game {
    grid: Grid,
    to_move: Player,
    state: GameState,
    history: Vec<usize>,
}

impl Game {
    pub fn new(rows: usize, columns: usize) -> Result<Self, GameError> {
        Ok(Self::from_grid(Grid::new(rows, columns)?, Player::One))
    }

    /// Wraps an existing grid, with `to_move` playing next
    pub fn from_grid(grid: Grid, to_move: Player) -> Self {
        let state = GameState::of(&grid);
        Self {
            grid,
            to_move,
            state,
            history: Vec::new(),
        }
    }

    /// Replays a string of 1-indexed column digits on an empty grid
    ///
    /// Each move is a single digit, so a non-empty move string can only
    /// describe grids of at most 9 columns.
    pub fn from_moves<S: AsRef<str>>(
        rows: usize,
        columns: usize,
        moves: S,
    ) -> Result<Self, GameError> {
        let mut game = Self::new(rows, columns)?;
        if !moves.as_ref().is_empty() && columns > MAX_MOVE_STRING_COLUMNS {
            return Err(GameError::MoveStringTooWide { columns });
        }

        for (position, column_char) in moves.as_ref().chars().enumerate() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column) if column >= 1 => {
                    game.play(column - 1)?;
                }
                _ => {
                    return Err(GameError::InvalidMove {
                        character: column_char,
                        position,
                    })
                }
            }
        }
        Ok(game)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// The 0-indexed columns played so far
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Drops a disc for the player to move into the 0-indexed `column`
    pub fn play(&mut self, column: usize) -> Result<GameState, GameError> {
        if self.state != GameState::Playing {
            return Err(GameError::GameOver);
        }
        self.grid = self.grid.play(column, self.to_move)?;
        self.history.push(column);
        trace!(player = self.to_move.number(), column, "played move");

        self.state = GameState::of(&self.grid);
        self.to_move = self.to_move.opponent();

        Ok(self.state)
    }
}

impl Environment for Game {
    fn rows(&self) -> usize {
        self.grid.rows()
    }

    fn columns(&self) -> usize {
        self.grid.columns()
    }

    fn snapshot(&self) -> Grid {
        self.grid.clone()
    }

    fn role(&self) -> Player {
        self.to_move
    }
}
