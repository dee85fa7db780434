//! Grid snapshots, move generation and move application
//!
//! A [`Grid`] is a plain value: cloning it produces an independent deep copy,
//! and [`Grid::play`] never touches `self`, so hypothetical moves explored by
//! the search can never leak into the caller's board or into sibling branches.

use std::fmt;
use std::str::FromStr;

use crate::error::GameError;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The cell state of a disc belonging to this player
    pub fn cell(self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }

    /// 1 for the first player, 2 for the second
    pub fn number(self) -> usize {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn owner(&self) -> Option<Player> {
        match self {
            Cell::PlayerOne => Some(Player::One),
            Cell::PlayerTwo => Some(Player::Two),
            Cell::Empty => None,
        }
    }

    fn to_char(self) -> char {
        match self {
            Cell::PlayerOne => 'X',
            Cell::PlayerTwo => 'O',
            Cell::Empty => '.',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '.' | '_' => Some(Cell::Empty),
            'X' | 'x' | 'R' | 'r' => Some(Cell::PlayerOne),
            'O' | 'o' | 'Y' | 'y' => Some(Cell::PlayerTwo),
            _ => None,
        }
    }
}

/// A rectangular snapshot of the board
///
/// Row 0 is the top of the board, where discs enter, and row `rows - 1` is
/// the floor. Cells are stored row-major.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an empty grid
    pub fn new(rows: usize, columns: usize) -> Result<Self, GameError> {
        let cells = rows
            .checked_mul(columns)
            .filter(|&len| len > 0 && len <= isize::MAX as usize)
            .ok_or(GameError::InvalidDimensions { rows, columns })?;
        Ok(Self {
            rows,
            columns,
            cells: vec![Cell::Empty; cells],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the cell at `(row, column)`, or `None` if it lies outside the grid
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        if row < self.rows && column < self.columns {
            Some(self.cells[row * self.columns + column])
        } else {
            None
        }
    }

    /// Lists the columns whose top cell is empty, in ascending order
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..self.columns)
            .filter(|&column| self.cells[column].is_empty())
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.legal_moves().is_empty()
    }

    pub fn disc_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// The row a disc dropped into `column` would come to rest in
    fn landing_row(&self, column: usize) -> Option<usize> {
        (0..self.rows)
            .rev()
            .find(|&row| self.cells[row * self.columns + column].is_empty())
    }

    /// Returns a copy of this grid with a disc for `player` dropped into `column`
    ///
    /// The disc lands in the lowest empty row of the column. `self` is left
    /// untouched.
    pub fn play(&self, column: usize, player: Player) -> Result<Self, GameError> {
        if column >= self.columns {
            return Err(GameError::InvalidColumn {
                column,
                columns: self.columns,
            });
        }
        let row = self
            .landing_row(column)
            .ok_or(GameError::FullColumn { column })?;
        Ok(self.placed(row, column, player))
    }

    /// A copy of this grid with a disc for `player` at `(row, column)`
    fn placed(&self, row: usize, column: usize, player: Player) -> Self {
        let mut next = self.clone();
        next.cells[row * self.columns + column] = player.cell();
        next
    }

    /// Iterates over `(column, successor)` for every legal move of `player`
    pub fn successors(&self, player: Player) -> impl Iterator<Item = (usize, Grid)> + '_ {
        // a legal column has an empty top cell, so it always has a landing row
        (0..self.columns)
            .filter(move |&column| self.cells[column].is_empty())
            .filter_map(move |column| self.landing_row(column).map(|row| (column, row)))
            .map(move |(column, row)| (column, self.placed(row, column, player)))
    }

    /// Checks that the discs in every column form a contiguous run up from the floor
    pub fn obeys_gravity(&self) -> bool {
        (0..self.columns).all(|column| {
            let mut seen_empty = false;
            for row in (0..self.rows).rev() {
                let empty = self.cells[row * self.columns + column].is_empty();
                if seen_empty && !empty {
                    return false;
                }
                seen_empty |= empty;
            }
            true
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.columns) {
            let line: String = row.iter().map(|cell| cell.to_char()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GameError;

    /// Parses one line per row, top row first
    ///
    /// `.` is an empty cell, `X` (or `R`) a disc of the first player and `O`
    /// (or `Y`) a disc of the second. Gravity is not enforced, so floating
    /// discs can be used to build test positions.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let rows = lines.len();
        let columns = lines.first().map_or(0, |line| line.chars().count());
        let mut grid = Grid::new(rows, columns)?;

        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != columns {
                return Err(GameError::RaggedRows {
                    row,
                    expected: columns,
                    found,
                });
            }
            for (column, character) in line.chars().enumerate() {
                grid.cells[row * columns + column] =
                    Cell::from_char(character).ok_or(GameError::InvalidCell {
                        character,
                        row,
                        column,
                    })?;
            }
        }
        Ok(grid)
    }
}
