//! Table registry errors.

use derive_more::{Display, Error};
use noughts_core::{GameError, ParseBoardError, SeatError};

/// Failure of a table registry operation.
///
/// Rule violations from the core arrive wrapped in [`TableError::Game`] so
/// callers can still branch on the exact [`GameError`] kind.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum TableError {
    /// No table with this id.
    #[display("no table {:?}", id)]
    UnknownTable {
        /// Requested table id.
        id: String,
    },

    /// A table with this id already exists.
    #[display("table {:?} already exists", id)]
    TableExists {
        /// Requested table id.
        id: String,
    },

    /// The registry is at its configured size.
    #[display("table limit of {} reached", limit)]
    TableLimit {
        /// Configured limit.
        limit: usize,
    },

    /// The caller has no seat at this table.
    #[display("player {:?} is not seated at this table", player)]
    NotSeated {
        /// Caller identity.
        player: String,
    },

    /// The caller's optimistic-concurrency token is out of date.
    #[display("table is at version {}, move was made against {}", actual, expected)]
    StaleVersion {
        /// Version the caller read.
        expected: u64,
        /// Version the table is at.
        actual: u64,
    },

    /// A lock was poisoned by a panicking holder.
    #[display("table lock poisoned")]
    LockPoisoned,

    /// Move rejected by the game rules.
    #[display("{}", _0)]
    Game(GameError),

    /// Seat assignment failed.
    #[display("{}", _0)]
    Seat(SeatError),

    /// Stored board record is malformed.
    #[display("{}", _0)]
    Record(ParseBoardError),
}

impl From<GameError> for TableError {
    fn from(err: GameError) -> Self {
        Self::Game(err)
    }
}

impl From<SeatError> for TableError {
    fn from(err: SeatError) -> Self {
        Self::Seat(err)
    }
}

impl From<ParseBoardError> for TableError {
    fn from(err: ParseBoardError) -> Self {
        Self::Record(err)
    }
}
