//! Error types for the game core.
//!
//! Every failure here is a synchronous validation failure. The board is
//! left untouched whenever one of these is returned.

use crate::{FieldState, GameState};
use derive_more::{Display, Error};

/// Rejection of a board access or a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Row or column outside `0..3`.
    #[display("cell ({}, {}) is outside the 3x3 board", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// A move tried to place `Empty`.
    #[display("a move must place a mark, not clear a cell")]
    InvalidState,

    /// Target cell already holds a mark.
    #[display("cell ({}, {}) is already occupied by {}", row, col, occupant)]
    OccupiedCell {
        /// Target row.
        row: usize,
        /// Target column.
        col: usize,
        /// Mark already in the cell.
        occupant: FieldState,
    },

    /// The game already has a winner or is tied.
    #[display("game is already over ({:?})", state)]
    GameOver {
        /// Outcome that ended the game.
        state: GameState,
    },

    /// Turn-order violation.
    #[display(
        "{} may not move now ({} crosses, {} noughts on the board)",
        mark,
        crosses,
        noughts
    )]
    InvalidMove {
        /// Mark that tried to move.
        mark: FieldState,
        /// Crosses on the board before the move.
        crosses: usize,
        /// Noughts on the board before the move.
        noughts: usize,
    },
}

/// A stored board record could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// Record does not hold exactly 9 symbols.
    #[display("board record must hold 9 symbols, found {}", found)]
    WrongLength {
        /// Number of symbols found.
        found: usize,
    },

    /// Record holds a symbol other than `X`, `O` or space.
    #[display("unknown board symbol {:?} at index {}", symbol, index)]
    UnknownSymbol {
        /// Offending symbol.
        symbol: char,
        /// Row-major cell index.
        index: usize,
    },
}

/// Seat assignment failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SeatError {
    /// Someone already plays this mark.
    #[display("the {} seat is already taken", mark)]
    SeatTaken {
        /// Requested mark.
        mark: FieldState,
    },

    /// The player already holds a seat at this board.
    #[display("player already plays {}", mark)]
    AlreadySeated {
        /// Mark the player already holds.
        mark: FieldState,
    },

    /// Both seats are taken.
    #[display("both seats are taken")]
    TableFull,

    /// Nobody can be seated at `Empty`.
    #[display("there is no seat for empty cells")]
    NoSuchSeat,
}
