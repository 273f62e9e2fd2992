//! Noughts - reference embedding of the `noughts_core` rules.
//!
//! The core only knows boards, marks and rules. This crate supplies what
//! sits around it:
//!
//! - **Seats**: mapping caller identities to the mark they may place
//! - **Tables**: a board plus its seats and an optimistic-concurrency version
//! - **Registry**: per-table locking so moves on one board are serialized
//! - **Records**: the snapshot handed to and loaded from storage
//!
//! # Example
//!
//! ```
//! use noughts::{GameState, NoughtsConfig, TableManager};
//!
//! # fn example() -> Result<(), noughts::TableError> {
//! let manager = TableManager::new(&NoughtsConfig::default());
//! manager.create_table("lobby-1".to_string())?;
//! manager.join("lobby-1", "ann".to_string())?;
//! manager.join("lobby-1", "bob".to_string())?;
//!
//! let record = manager.play("lobby-1", "ann", 1, 1, Some(0))?;
//! assert_eq!(record.board, "    X    ");
//! assert_eq!(manager.state("lobby-1")?, GameState::OnGoing);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod manager;
mod table;

pub use config::{ConfigError, NoughtsConfig};
pub use error::TableError;
pub use manager::TableManager;
pub use table::{PlayerId, Table, TableId, TableRecord};

pub use noughts_core::{Board, FieldState, GameError, GameState, ParseBoardError, SeatError};
