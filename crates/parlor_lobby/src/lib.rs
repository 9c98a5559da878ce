//! Parlor lobby library - progress, catalogs, and the player library
//!
//! This library ties the portal's games together: a progress store the
//! game engines report into, the arcade and variant-hub catalogs with
//! their unlock thresholds, the player's rated game library, and a JSON
//! snapshot for persistence.
//!
//! # Architecture
//!
//! - **Store**: the [`ProgressStore`] seam with an in-memory
//!   implementation and a shared handle that doubles as the board games'
//!   progress sink
//! - **Catalogs**: the advertised arcade titles and the five-variant hub
//!   with derived portal progress and unlock thresholds
//! - **Library**: saved titles with ratings and store-backed progress,
//!   plus the word game's save-and-resume bridge
//! - **Snapshot**: one serde value capturing store and library
//!
//! # Example
//!
//! ```
//! use parlor_lobby::{SharedStore, is_unlocked, portal_progress};
//! use parlor_tictactoe::ProgressSink;
//!
//! let mut store = SharedStore::new();
//! assert!(!is_unlocked(1, portal_progress(&store)));
//!
//! store.record_win("Tic Tac Toe");
//! let progress = portal_progress(&store);
//! assert_eq!(progress, 20);
//! assert!(is_unlocked(1, progress));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod catalog;
mod library;
mod snapshot;
mod store;

// Crate-level exports - Progress store
pub use store::{GameRecord, MemoryStore, ProgressStore, SharedStore};

// Crate-level exports - Catalogs and unlocks
pub use catalog::{
    ARCADE, ArcadeEntry, HUB, VariantEntry, WORDLE_TITLE, detail_for, is_unlocked,
    portal_progress, unlock_threshold,
};

// Crate-level exports - Player library
pub use library::{Library, LibraryEntry, UnknownTitle, record_word_progress, resume_word_game};

// Crate-level exports - Persistence
pub use snapshot::PortalSnapshot;
