//! Errors reported by grid, search and game operations

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Invalid move, column {column} out of range. Columns must be below {columns}")]
    InvalidColumn { column: usize, columns: usize },

    #[error("Invalid move, column {column} full")]
    FullColumn { column: usize },

    #[error("no legal moves remain, the grid is full")]
    NoLegalMoves,

    #[error("invalid grid dimensions {rows}x{columns}")]
    InvalidDimensions { rows: usize, columns: usize },

    #[error("snapshot is {found_rows}x{found_columns} but the environment reports {rows}x{columns}")]
    DimensionMismatch {
        rows: usize,
        columns: usize,
        found_rows: usize,
        found_columns: usize,
    },

    #[error("search depth must be at least 1, got {0}")]
    InvalidDepth(usize),

    #[error("could not parse '{character}' as a cell at row {row}, column {column}")]
    InvalidCell {
        character: char,
        row: usize,
        column: usize,
    },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("could not parse '{character}' at position {position} as a valid move")]
    InvalidMove { character: char, position: usize },

    #[error("move strings address at most 9 columns, the grid has {columns}")]
    MoveStringTooWide { columns: usize },

    #[error("Invalid move, game is over")]
    GameOver,
}
