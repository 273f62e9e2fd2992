//! Tie detection.

use super::win::completes_line;
use crate::{Board, FieldState};
use tracing::instrument;

/// True when the board is full and neither mark holds a line.
#[instrument(skip(board), fields(board = %board))]
pub fn is_tie(board: &Board) -> bool {
    board.is_full()
        && !completes_line(board, FieldState::Cross)
        && !completes_line(board, FieldState::Nought)
}
