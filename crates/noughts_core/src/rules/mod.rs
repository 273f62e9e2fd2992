//! Game rules for noughts and crosses.
//!
//! Pure functions over a [`Board`](crate::Board). Nothing here mutates the
//! board or stores derived state.

pub mod draw;
pub mod turn;
pub mod win;

pub use draw::is_tie;
pub use turn::TurnParity;
pub use win::{COLUMNS, DIAGONALS, Line, ROWS, completes_line};
