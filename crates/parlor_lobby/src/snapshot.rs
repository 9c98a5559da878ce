//! Whole-portal persistence.
//!
//! A [`PortalSnapshot`] captures the progress store and the library as
//! one serde value, so a host can stash the portal as JSON and bring it
//! back later.

use crate::library::Library;
use crate::store::MemoryStore;
use serde::{Deserialize, Serialize};

/// Serializable state of the whole portal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalSnapshot {
    /// Saved progress records.
    store: MemoryStore,
    /// Saved library entries.
    library: Library,
}

impl PortalSnapshot {
    /// Captures a store and a library as one snapshot.
    pub fn capture(store: MemoryStore, library: Library) -> Self {
        Self { store, library }
    }

    /// Splits the snapshot back into a store and a library.
    pub fn restore(self) -> (MemoryStore, Library) {
        (self.store, self.library)
    }

    /// Serializes the snapshot to JSON.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error when encoding fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parses a snapshot from JSON.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error when `json` does not
    /// hold a snapshot.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
