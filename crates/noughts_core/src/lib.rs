//! Noughts and crosses game core.
//!
//! A [`Board`] stores nine [`FieldState`] cells. A [`Game`] borrows a board
//! and enforces the rules: marks alternate starting with Cross, a cell is
//! taken once, and nothing moves after a line is completed or the board
//! fills up. Turn order and outcome are derived from the cells every time
//! they are asked for.
//!
//! ```
//! use noughts_core::{Board, FieldState, Game, GameState};
//!
//! let mut board = Board::new();
//! let mut game = Game::new(&mut board);
//! game.occupy_field(0, 0, FieldState::Cross)?;
//! game.occupy_field(2, 2, FieldState::Nought)?;
//! assert_eq!(game.state(), GameState::OnGoing);
//! assert_eq!(board.to_string(), "X       O");
//! # Ok::<(), noughts_core::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod field;
mod game;
pub mod rules;
mod seats;
mod state;

pub use board::{Board, CELLS, SIDE};
pub use error::{GameError, ParseBoardError, SeatError};
pub use field::FieldState;
pub use game::Game;
pub use seats::Seats;
pub use state::GameState;
