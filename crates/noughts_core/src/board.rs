//! 3x3 board storage.

use crate::{FieldState, GameError, ParseBoardError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{instrument, trace};

/// Side length of the board.
pub const SIDE: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = SIDE * SIDE;

/// Fixed 3x3 grid of cells in row-major order (`row * 3 + col`).
///
/// The board is plain storage. It checks bounds and nothing else; turn
/// order and outcomes live in [`crate::Game`] and [`crate::GameState`].
///
/// Serialized as its 9-symbol record, e.g. `"X   O    "`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board {
    cells: [FieldState; CELLS],
}

impl Board {
    /// Creates a board with every cell `Empty`.
    pub fn new() -> Self {
        Self {
            cells: [FieldState::Empty; CELLS],
        }
    }

    /// Creates a board from cells in row-major order.
    pub fn from_cells(cells: [FieldState; CELLS]) -> Self {
        Self { cells }
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// [`GameError::OutOfRange`] if `row` or `col` is not in `0..3`.
    pub fn get(&self, row: usize, col: usize) -> Result<FieldState, GameError> {
        Ok(self.cells[index(row, col)?])
    }

    /// Overwrites the cell at `(row, col)`. No legality checks are made.
    ///
    /// # Errors
    ///
    /// [`GameError::OutOfRange`] if `row` or `col` is not in `0..3`.
    #[instrument(skip(self))]
    pub fn set(&mut self, row: usize, col: usize, value: FieldState) -> Result<(), GameError> {
        let idx = index(row, col)?;
        trace!(idx, previous = ?self.cells[idx], "Overwriting cell");
        self.cells[idx] = value;
        Ok(())
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[FieldState; CELLS] {
        &self.cells
    }

    /// Number of cells holding `value`.
    pub fn count(&self, value: FieldState) -> usize {
        self.cells.iter().filter(|&&cell| cell == value).count()
    }

    /// True when no cell is `Empty`.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_mark())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn index(row: usize, col: usize) -> Result<usize, GameError> {
    if row >= SIDE || col >= SIDE {
        return Err(GameError::OutOfRange { row, col });
    }
    Ok(row * SIDE + col)
}

/// Writes the 9-symbol record.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let found = s.chars().count();
        if found != CELLS {
            return Err(ParseBoardError::WrongLength { found });
        }

        let mut cells = [FieldState::Empty; CELLS];
        for (index, (cell, symbol)) in cells.iter_mut().zip(s.chars()).enumerate() {
            *cell = FieldState::from_symbol(symbol)
                .ok_or(ParseBoardError::UnknownSymbol { symbol, index })?;
        }
        Ok(Self { cells })
    }
}

impl TryFrom<String> for Board {
    type Error = ParseBoardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.to_string()
    }
}
