//! Move validation on top of a caller-owned board.

use crate::rules::TurnParity;
use crate::{Board, FieldState, GameError, GameState, SIDE};
use tracing::{info, instrument, warn};

/// Game rules applied to a board the caller owns.
///
/// `Game` holds an exclusive borrow of the board for as long as it lives and
/// keeps no state of its own. Whose turn it is and whether the game is over
/// are both derived from the cells on every call.
///
/// `Game` does not synchronize anything. Callers sharing a board between
/// threads must serialize moves themselves, otherwise two moves validated
/// against the same counts could both be written.
#[derive(Debug)]
pub struct Game<'a> {
    board: &'a mut Board,
}

impl<'a> Game<'a> {
    /// Wraps `board` for the duration of the borrow.
    pub fn new(board: &'a mut Board) -> Self {
        Self { board }
    }

    /// The wrapped board.
    pub fn board(&self) -> &Board {
        self.board
    }

    /// Current outcome, recomputed from the board.
    pub fn state(&self) -> GameState {
        GameState::of(self.board)
    }

    /// The mark that may move next.
    ///
    /// `None` once the game is over, or when the board holds counts no
    /// legal sequence of moves could produce.
    pub fn to_move(&self) -> Option<FieldState> {
        if self.state().is_over() {
            return None;
        }
        TurnParity::of(self.board).next_mark()
    }

    /// Cells that are still `Empty`, in row-major order.
    pub fn free_cells(&self) -> Vec<(usize, usize)> {
        (0..SIDE)
            .flat_map(|row| (0..SIDE).map(move |col| (row, col)))
            .filter(|&(row, col)| self.board.get(row, col) == Ok(FieldState::Empty))
            .collect()
    }

    /// Places `mark` at `(row, col)`.
    ///
    /// Checks run in this order and the board is written only after all of
    /// them pass:
    ///
    /// 1. `mark` is not `Empty` ([`GameError::InvalidState`])
    /// 2. the cell is on the board ([`GameError::OutOfRange`])
    /// 3. the game is still on ([`GameError::GameOver`])
    /// 4. the cell is empty ([`GameError::OccupiedCell`])
    /// 5. it is `mark`'s turn ([`GameError::InvalidMove`])
    #[instrument(skip(self), fields(board = %self.board))]
    pub fn occupy_field(
        &mut self,
        row: usize,
        col: usize,
        mark: FieldState,
    ) -> Result<(), GameError> {
        self.check_move(row, col, mark).inspect_err(|error| {
            warn!(%error, "Move rejected");
        })?;

        self.board.set(row, col, mark)?;
        info!(board = %self.board, state = %self.state(), "Move accepted");
        Ok(())
    }

    fn check_move(&self, row: usize, col: usize, mark: FieldState) -> Result<(), GameError> {
        if !mark.is_mark() {
            return Err(GameError::InvalidState);
        }

        let occupant = self.board.get(row, col)?;

        let state = self.state();
        if state.is_over() {
            return Err(GameError::GameOver { state });
        }

        if occupant.is_mark() {
            return Err(GameError::OccupiedCell { row, col, occupant });
        }

        let parity = TurnParity::of(self.board);
        if !parity.permits(mark) {
            return Err(GameError::InvalidMove {
                mark,
                crosses: parity.crosses,
                noughts: parity.noughts,
            });
        }

        Ok(())
    }
}
