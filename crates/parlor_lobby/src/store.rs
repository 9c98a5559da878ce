//! Progress records and the store seam shared across the portal.
//!
//! Game engines report wins through [`ProgressSink`]; hosts read and
//! write records through [`ProgressStore`]. [`MemoryStore`] keeps the
//! records in memory and [`SharedStore`] wraps one in a reference-counted
//! handle so a single store can back several game sessions at once.

use derive_getters::Getters;
use derive_new::new;
use parlor_tictactoe::ProgressSink;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument};

/// Saved state of one portal game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct GameRecord {
    /// Whether the game's Easy opponent has been beaten.
    pub won: bool,
    /// Completion percentage, 0 to 100.
    pub progress: u8,
}

/// Keyed progress storage the portal reads and writes.
///
/// Implementations map a game identifier, which is a catalog or variant
/// title, to its [`GameRecord`]. Hosts that persist progress elsewhere,
/// such as browser storage, supply their own implementation.
pub trait ProgressStore {
    /// Returns the record saved under `game_id`, if any.
    fn get(&self, game_id: &str) -> Option<GameRecord>;

    /// Saves `record` under `game_id`, replacing any previous record.
    fn set(&mut self, game_id: &str, record: GameRecord);
}

/// In-memory [`ProgressStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MemoryStore {
    /// Records keyed by game identifier.
    records: BTreeMap<String, GameRecord>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for MemoryStore {
    fn get(&self, game_id: &str) -> Option<GameRecord> {
        self.records.get(game_id).copied()
    }

    fn set(&mut self, game_id: &str, record: GameRecord) {
        self.records.insert(game_id.to_string(), record);
    }
}

// ─────────────────────────────────────────────────────────────
//  Shared handle
// ─────────────────────────────────────────────────────────────

/// Shared handle over a [`MemoryStore`].
///
/// Clones see the same records, so one handle can serve as the progress
/// sink of several sessions while the host keeps another for reads.
#[derive(Debug, Clone)]
pub struct SharedStore {
    records: Arc<Mutex<MemoryStore>>,
}

impl SharedStore {
    /// Creates a handle over an empty store.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating shared progress store");
        Self {
            records: Arc::new(Mutex::new(MemoryStore::new())),
        }
    }

    /// Creates a handle over an existing store, e.g. a restored snapshot.
    pub fn from_store(store: MemoryStore) -> Self {
        Self {
            records: Arc::new(Mutex::new(store)),
        }
    }

    /// Copies the current records out of the handle.
    pub fn snapshot(&self) -> MemoryStore {
        self.records.lock().unwrap().clone()
    }
}

impl Default for SharedStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressStore for SharedStore {
    fn get(&self, game_id: &str) -> Option<GameRecord> {
        self.records.lock().unwrap().get(game_id)
    }

    fn set(&mut self, game_id: &str, record: GameRecord) {
        self.records.lock().unwrap().set(game_id, record);
    }
}

impl ProgressSink for SharedStore {
    fn record_win(&mut self, game_id: &str) {
        let mut store = self.records.lock().unwrap();
        let mut record = store.get(game_id).unwrap_or_default();
        record.won = true;
        record.progress = 100;
        store.set(game_id, record);
        debug!(game_id, "Win recorded");
    }
}
