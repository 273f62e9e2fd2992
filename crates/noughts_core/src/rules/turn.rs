//! Turn order derived from mark counts.
//!
//! No "current player" is stored anywhere. Whose move it is follows from
//! how many crosses and noughts are on the board: Cross moves when the
//! counts are equal, Nought moves when Cross is ahead.

use crate::{Board, FieldState};

/// Mark counts that decide whose move is legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnParity {
    /// Crosses on the board.
    pub crosses: usize,
    /// Noughts on the board.
    pub noughts: usize,
}

impl TurnParity {
    /// Counts the marks on `board`.
    pub fn of(board: &Board) -> Self {
        Self {
            crosses: board.count(FieldState::Cross),
            noughts: board.count(FieldState::Nought),
        }
    }

    /// True if `mark` may be placed next.
    pub fn permits(self, mark: FieldState) -> bool {
        match mark {
            FieldState::Cross => self.crosses == self.noughts,
            FieldState::Nought => self.crosses > self.noughts,
            FieldState::Empty => false,
        }
    }

    /// The mark allowed to move next, if the counts allow exactly one.
    pub fn next_mark(self) -> Option<FieldState> {
        [FieldState::Cross, FieldState::Nought]
            .into_iter()
            .find(|&mark| self.permits(mark))
    }
}
