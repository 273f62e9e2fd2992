//! One board with its seats and version token.

use crate::TableError;
use noughts_core::{Board, FieldState, Game, GameState, Seats};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Unique identifier for a table.
pub type TableId = String;

/// Opaque identity of a player.
pub type PlayerId = String;

/// Snapshot exchanged with storage.
///
/// `board` is the 9-symbol row-major record, e.g. `"X   O    "`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRecord {
    /// Table id.
    pub id: TableId,
    /// Number of accepted moves applied through this registry.
    pub version: u64,
    /// 9-symbol board record.
    pub board: String,
    /// Player holding the Cross seat.
    pub crosses: Option<PlayerId>,
    /// Player holding the Nought seat.
    pub noughts: Option<PlayerId>,
}

/// A board, who plays on it, and how many moves it has accepted.
#[derive(Debug, Clone)]
pub struct Table {
    id: TableId,
    board: Board,
    seats: Seats<PlayerId>,
    version: u64,
}

impl Table {
    /// Creates a table with an empty board and free seats.
    pub fn new(id: TableId) -> Self {
        Self {
            id,
            board: Board::new(),
            seats: Seats::new(),
            version: 0,
        }
    }

    /// Rebuilds a table from a stored record.
    ///
    /// # Errors
    ///
    /// [`TableError::Record`] if the board record is malformed,
    /// [`TableError::Seat`] if one player holds both seats.
    pub fn restore(record: TableRecord) -> Result<Self, TableError> {
        let board: Board = record.board.parse()?;
        let seats = Seats::with_players(record.crosses, record.noughts)?;
        Ok(Self {
            id: record.id,
            board,
            seats,
            version: record.version,
        })
    }

    /// Snapshot for storage.
    pub fn record(&self) -> TableRecord {
        TableRecord {
            id: self.id.clone(),
            version: self.version,
            board: self.board.to_string(),
            crosses: self.seats.crosses().cloned(),
            noughts: self.seats.noughts().cloned(),
        }
    }

    /// Table id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Seat owners.
    pub fn seats(&self) -> &Seats<PlayerId> {
        &self.seats
    }

    /// Optimistic-concurrency token.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Current outcome.
    pub fn state(&self) -> GameState {
        GameState::of(&self.board)
    }

    /// Seats `player` at the first free seat.
    #[instrument(skip(self), fields(table_id = %self.id))]
    pub fn join(&mut self, player: PlayerId) -> Result<FieldState, TableError> {
        let mark = self.seats.join(player)?;
        info!(%mark, "Player seated");
        Ok(mark)
    }

    /// Plays `player`'s mark at `(row, col)`.
    ///
    /// The player must hold a seat; the mark placed is the seat's mark.
    #[instrument(skip(self), fields(table_id = %self.id))]
    pub fn play(
        &mut self,
        player: &str,
        row: usize,
        col: usize,
        expected_version: Option<u64>,
    ) -> Result<GameState, TableError> {
        let player = player.to_string();
        let mark = self.seats.mark_of(&player).ok_or_else(|| {
            warn!(%player, "Unseated player attempted move");
            TableError::NotSeated {
                player: player.clone(),
            }
        })?;
        self.place(mark, row, col, expected_version)
    }

    /// Places `mark` at `(row, col)` on behalf of an already authorized
    /// caller.
    ///
    /// When `expected_version` is given it must equal [`Table::version`];
    /// otherwise the move was decided against a stale board and is refused.
    /// On success the version advances by one, wrapping at `u64::MAX`.
    #[instrument(skip(self), fields(table_id = %self.id, version = self.version))]
    pub fn place(
        &mut self,
        mark: FieldState,
        row: usize,
        col: usize,
        expected_version: Option<u64>,
    ) -> Result<GameState, TableError> {
        if let Some(expected) = expected_version
            && expected != self.version
        {
            warn!(expected, actual = self.version, "Stale move refused");
            return Err(TableError::StaleVersion {
                expected,
                actual: self.version,
            });
        }

        let mut game = Game::new(&mut self.board);
        game.occupy_field(row, col, mark)?;
        let state = game.state();

        self.version = self.version.wrapping_add(1);
        info!(%mark, row, col, %state, version = self.version, "Move completed successfully");
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_core::{GameError, SeatError};

    fn seated() -> Table {
        let mut table = Table::new("t1".to_string());
        table.join("ann".to_string()).unwrap();
        table.join("bob".to_string()).unwrap();
        table
    }

    #[test]
    fn test_play_maps_player_to_mark() {
        let mut table = seated();
        assert_eq!(table.play("ann", 0, 0, None), Ok(GameState::OnGoing));
        assert_eq!(table.play("bob", 2, 2, Some(1)), Ok(GameState::OnGoing));
        assert_eq!(table.board().to_string(), "X       O");
        assert_eq!(table.version(), 2);
    }

    #[test]
    fn test_unseated_player_refused() {
        let mut table = seated();
        assert_eq!(
            table.play("eve", 0, 0, None),
            Err(TableError::NotSeated {
                player: "eve".to_string()
            })
        );
        assert_eq!(table.version(), 0);
    }

    #[test]
    fn test_stale_version_leaves_board_unchanged() {
        let mut table = seated();
        table.play("ann", 0, 0, Some(0)).unwrap();
        assert_eq!(
            table.play("bob", 1, 1, Some(0)),
            Err(TableError::StaleVersion {
                expected: 0,
                actual: 1
            })
        );
        assert_eq!(table.board().to_string(), "X        ");
    }

    #[test]
    fn test_rule_errors_keep_their_kind() {
        let mut table = seated();
        assert_eq!(
            table.play("bob", 0, 0, None),
            Err(TableError::Game(GameError::InvalidMove {
                mark: FieldState::Nought,
                crosses: 0,
                noughts: 0
            }))
        );
        assert_eq!(table.version(), 0);
    }

    #[test]
    fn test_place_rejects_empty() {
        let mut table = Table::new("t3".to_string());
        assert_eq!(
            table.place(FieldState::Empty, 0, 0, None),
            Err(TableError::Game(GameError::InvalidState))
        );
        assert_eq!(table.place(FieldState::Cross, 0, 0, None), Ok(GameState::OnGoing));
    }

    #[test]
    fn test_record_restore() {
        let mut table = seated();
        table.play("ann", 1, 1, None).unwrap();
        let record = table.record();
        assert_eq!(record.board, "    X    ");
        assert_eq!(record.crosses.as_deref(), Some("ann"));

        let restored = Table::restore(record.clone()).unwrap();
        assert_eq!(restored.record(), record);
        assert_eq!(restored.seats().mark_of(&"bob".to_string()), Some(FieldState::Nought));
    }

    #[test]
    fn test_version_wraps_instead_of_overflowing() {
        let mut table = Table::restore(TableRecord {
            id: "t4".to_string(),
            version: u64::MAX,
            board: "         ".to_string(),
            crosses: None,
            noughts: None,
        })
        .unwrap();
        assert_eq!(
            table.place(FieldState::Cross, 1, 1, Some(u64::MAX)),
            Ok(GameState::OnGoing)
        );
        assert_eq!(table.version(), 0);
    }

    #[test]
    fn test_restore_rejects_one_player_in_both_seats() {
        let record = TableRecord {
            id: "t5".to_string(),
            version: 0,
            board: "         ".to_string(),
            crosses: Some("ann".to_string()),
            noughts: Some("ann".to_string()),
        };
        assert_eq!(
            Table::restore(record).map(|t| t.version()),
            Err(TableError::Seat(SeatError::AlreadySeated {
                mark: FieldState::Cross
            }))
        );
    }

    #[test]
    fn test_restore_rejects_bad_board() {
        let record = TableRecord {
            id: "t2".to_string(),
            version: 0,
            board: "XX".to_string(),
            crosses: None,
            noughts: None,
        };
        assert!(matches!(
            Table::restore(record),
            Err(TableError::Record(_))
        ));
    }
}
