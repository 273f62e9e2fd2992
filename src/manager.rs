//! Registry of live tables.
//!
//! Each table sits behind its own mutex. A move locks the table, validates
//! against the board it sees, writes, and bumps the version before the lock
//! is released, so two moves on one board are always serialized. Moves on
//! different tables never contend beyond the brief registry lookup.

use crate::table::{PlayerId, Table, TableId, TableRecord};
use crate::{NoughtsConfig, TableError};
use noughts_core::{FieldState, GameState};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, instrument, warn};

type SharedTable = Arc<Mutex<Table>>;

/// Manages all tables.
#[derive(Debug, Clone)]
pub struct TableManager {
    tables: Arc<Mutex<HashMap<TableId, SharedTable>>>,
    max_tables: usize,
}

impl TableManager {
    /// Creates an empty registry bounded by `config.max_tables`.
    #[instrument(skip(config))]
    pub fn new(config: &NoughtsConfig) -> Self {
        info!(max_tables = config.max_tables(), "Creating table manager");
        Self {
            tables: Arc::new(Mutex::new(HashMap::new())),
            max_tables: *config.max_tables(),
        }
    }

    fn registry(&self) -> Result<MutexGuard<'_, HashMap<TableId, SharedTable>>, TableError> {
        self.tables.lock().map_err(|_| TableError::LockPoisoned)
    }

    fn table(&self, id: &str) -> Result<SharedTable, TableError> {
        self.registry()?
            .get(id)
            .cloned()
            .ok_or_else(|| TableError::UnknownTable { id: id.to_string() })
    }

    fn with_table<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut Table) -> Result<T, TableError>,
    ) -> Result<T, TableError> {
        let shared = self.table(id)?;
        let mut table = shared.lock().map_err(|_| TableError::LockPoisoned)?;
        f(&mut table)
    }

    fn insert(&self, table: Table) -> Result<(), TableError> {
        let mut tables = self.registry()?;
        if tables.contains_key(table.id()) {
            warn!(table_id = table.id(), "Table already exists");
            return Err(TableError::TableExists {
                id: table.id().to_string(),
            });
        }
        if tables.len() >= self.max_tables {
            warn!(limit = self.max_tables, "Table limit reached");
            return Err(TableError::TableLimit {
                limit: self.max_tables,
            });
        }
        tables.insert(table.id().to_string(), Arc::new(Mutex::new(table)));
        Ok(())
    }

    /// Creates a table with an empty board.
    #[instrument(skip(self))]
    pub fn create_table(&self, id: TableId) -> Result<TableRecord, TableError> {
        let table = Table::new(id);
        let record = table.record();
        self.insert(table)?;
        info!(table_id = %record.id, "Table created");
        Ok(record)
    }

    /// Loads a table from a stored record.
    #[instrument(skip(self), fields(table_id = %record.id))]
    pub fn restore(&self, record: TableRecord) -> Result<GameState, TableError> {
        let table = Table::restore(record)?;
        let state = table.state();
        self.insert(table)?;
        info!(%state, "Table restored");
        Ok(state)
    }

    /// Seats `player` at the first free seat of table `id`.
    #[instrument(skip(self))]
    pub fn join(&self, id: &str, player: PlayerId) -> Result<FieldState, TableError> {
        self.with_table(id, |table| table.join(player))
    }

    /// Plays `player`'s mark on table `id` and returns the resulting snapshot.
    #[instrument(skip(self))]
    pub fn play(
        &self,
        id: &str,
        player: &str,
        row: usize,
        col: usize,
        expected_version: Option<u64>,
    ) -> Result<TableRecord, TableError> {
        self.with_table(id, |table| {
            table.play(player, row, col, expected_version)?;
            Ok(table.record())
        })
    }

    /// Places `mark` on table `id` for a caller authorized outside the
    /// seat model.
    #[instrument(skip(self))]
    pub fn place(
        &self,
        id: &str,
        mark: FieldState,
        row: usize,
        col: usize,
        expected_version: Option<u64>,
    ) -> Result<TableRecord, TableError> {
        self.with_table(id, |table| {
            table.place(mark, row, col, expected_version)?;
            Ok(table.record())
        })
    }

    /// Snapshot of table `id`.
    pub fn record(&self, id: &str) -> Result<TableRecord, TableError> {
        self.with_table(id, |table| Ok(table.record()))
    }

    /// Current outcome of table `id`.
    pub fn state(&self, id: &str) -> Result<GameState, TableError> {
        self.with_table(id, |table| Ok(table.state()))
    }

    /// Ids of all live tables, sorted.
    pub fn table_ids(&self) -> Result<Vec<TableId>, TableError> {
        let mut ids: Vec<TableId> = self.registry()?.keys().cloned().collect();
        ids.sort();
        debug!(count = ids.len(), "Listed tables");
        Ok(ids)
    }
}
