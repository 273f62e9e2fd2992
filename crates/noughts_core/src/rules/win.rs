//! Line completion.

use crate::{Board, FieldState};
use tracing::instrument;

/// Three `(row, col)` cells that win when uniformly marked.
pub type Line = [(usize, usize); 3];

/// The three rows.
pub const ROWS: [Line; 3] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
];

/// The three columns.
pub const COLUMNS: [Line; 3] = [
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
];

/// Top-left to bottom-right, then top-right to bottom-left.
pub const DIAGONALS: [Line; 2] = [[(0, 0), (1, 1), (2, 2)], [(0, 2), (1, 1), (2, 0)]];

/// True if `mark` holds every cell of at least one of the 8 lines.
///
/// Rows, columns and diagonals are each checked on their own; the answer is
/// the OR over all of them, so the evaluation order is not observable.
#[instrument(skip(board), fields(board = %board))]
pub fn completes_line(board: &Board, mark: FieldState) -> bool {
    if !mark.is_mark() {
        return false;
    }

    let owns = |line: &Line| line.iter().all(|&(row, col)| board.get(row, col) == Ok(mark));

    let row = ROWS.iter().any(owns);
    let column = COLUMNS.iter().any(owns);
    let diagonal = DIAGONALS.iter().any(owns);

    row || column || diagonal
}
