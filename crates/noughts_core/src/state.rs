//! Derived game outcome.

use crate::rules::{completes_line, is_tie};
use crate::{Board, FieldState};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Outcome of a board, always recomputed from its cells.
///
/// There is no stored state machine: any board, including one built
/// directly without going through [`crate::Game::occupy_field`], has a
/// well-defined `GameState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// Moves are still possible.
    OnGoing,
    /// Cross holds a full line.
    CrossesWon,
    /// Nought holds a full line.
    NoughtsWon,
    /// Board is full with no line.
    Tie,
}

impl GameState {
    /// Evaluates `board`.
    ///
    /// Cross is checked before Nought. A board where both hold a line cannot
    /// arise through legal moves; for such a board this reports
    /// `CrossesWon`.
    #[instrument(skip(board), fields(board = %board))]
    pub fn of(board: &Board) -> Self {
        if completes_line(board, FieldState::Cross) {
            GameState::CrossesWon
        } else if completes_line(board, FieldState::Nought) {
            GameState::NoughtsWon
        } else if is_tie(board) {
            GameState::Tie
        } else {
            GameState::OnGoing
        }
    }

    /// True for every state except `OnGoing`.
    pub fn is_over(self) -> bool {
        !matches!(self, GameState::OnGoing)
    }

    /// The winning mark, if any.
    pub fn winner(self) -> Option<FieldState> {
        match self {
            GameState::CrossesWon => Some(FieldState::Cross),
            GameState::NoughtsWon => Some(FieldState::Nought),
            GameState::OnGoing | GameState::Tie => None,
        }
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameState::OnGoing => write!(f, "ongoing"),
            GameState::CrossesWon => write!(f, "crosses won"),
            GameState::NoughtsWon => write!(f, "noughts won"),
            GameState::Tie => write!(f, "tie"),
        }
    }
}
