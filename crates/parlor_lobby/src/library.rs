//! The player's saved game library.
//!
//! Titles from the arcade catalog can be added, rated, and removed;
//! entry progress mirrors the progress store on demand. This module
//! also owns the bridge into the word game, whose saved percentage
//! lives in the store under [`WORDLE_TITLE`].

use crate::catalog::{HUB, WORDLE_TITLE, portal_progress};
use crate::store::{GameRecord, ProgressStore};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use parlor_wordgame::WordSession;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Genre stamped on entries added from the catalog.
const DEFAULT_GENRE: &str = "Puzzle";

/// A library operation addressed a title that is not saved.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("no library entry titled '{title}'")]
pub struct UnknownTitle {
    /// Title that was looked up.
    pub title: String,
}

/// One saved game in the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct LibraryEntry {
    /// Display title, matching the catalog.
    title: String,
    /// Genre label.
    genre: String,
    /// Completion percentage, 0 to 100.
    #[getter(skip)]
    progress: u8,
    /// Star rating, 0 until rated, then 1 to 5.
    #[getter(skip)]
    rating: u8,
}

impl LibraryEntry {
    /// Completion percentage, 0 to 100.
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Star rating, 0 until rated, then 1 to 5.
    pub fn rating(&self) -> u8 {
        self.rating
    }
}

/// A player's saved games with ratings and progress display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    /// Saved entries in insertion order.
    entries: Vec<LibraryEntry>,
}

impl Library {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Saved entries in insertion order.
    pub fn entries(&self) -> &[LibraryEntry] {
        &self.entries
    }

    /// Returns the saved entry titled `title`, if any.
    pub fn get(&self, title: &str) -> Option<&LibraryEntry> {
        self.entries.iter().find(|entry| entry.title == title)
    }

    fn position_of(&self, title: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.title == title)
    }
}

// ─────────────────────────────────────────────────────────────
//  Library maintenance
// ─────────────────────────────────────────────────────────────

impl Library {
    /// Adds `title` with the default genre, no progress and no rating.
    ///
    /// Returns false when an entry with the same title already exists;
    /// duplicates are never created.
    #[instrument(skip(self))]
    pub fn add(&mut self, title: &str) -> bool {
        if self.get(title).is_some() {
            debug!(title, "Already in library");
            return false;
        }
        self.entries.push(LibraryEntry::new(
            title.to_string(),
            DEFAULT_GENRE.to_string(),
            0,
            0,
        ));
        info!(title, "Added to library");
        true
    }

    /// Rates the entry titled `title`, clamping `stars` into 1 to 5.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownTitle`] when the title is not in the library.
    #[instrument(skip(self))]
    pub fn rate(&mut self, title: &str, stars: u8) -> Result<(), UnknownTitle> {
        let index = self.position_of(title).ok_or_else(|| UnknownTitle {
            title: title.to_string(),
        })?;
        let clamped = stars.clamp(1, 5);
        self.entries[index].rating = clamped;
        debug!(title, rating = clamped, "Entry rated");
        Ok(())
    }

    /// Removes and returns the entry titled `title`.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownTitle`] when the title is not in the library.
    #[instrument(skip(self))]
    pub fn remove(&mut self, title: &str) -> Result<LibraryEntry, UnknownTitle> {
        let index = self.position_of(title).ok_or_else(|| UnknownTitle {
            title: title.to_string(),
        })?;
        let entry = self.entries.remove(index);
        info!(title, "Removed from library");
        Ok(entry)
    }

    /// Refreshes every entry's progress from the store.
    ///
    /// The hub's own entry mirrors derived portal progress; every other
    /// entry shows the percentage saved under its title, unchanged when
    /// the store has no record.
    #[instrument(skip(self, store))]
    pub fn sync_progress(&mut self, store: &impl ProgressStore) {
        for entry in &mut self.entries {
            if entry.title == HUB[0].title() {
                entry.progress = portal_progress(store);
            } else if let Some(record) = store.get(&entry.title) {
                entry.progress = record.progress;
            }
        }
        debug!(count = self.entries.len(), "Library progress synced");
    }
}

// ─────────────────────────────────────────────────────────────
//  Word game bridge
// ─────────────────────────────────────────────────────────────

/// Saves the word game's progress percentage under [`WORDLE_TITLE`].
///
/// The record's won flag is set once the run is complete.
#[instrument(skip(store))]
pub fn record_word_progress(store: &mut impl ProgressStore, percent: u8) {
    let percent = percent.min(100);
    store.set(WORDLE_TITLE, GameRecord::new(percent >= 100, percent));
    debug!(percent, "Word game progress saved");
}

/// Resumes a word game session from the percentage saved under
/// [`WORDLE_TITLE`], starting fresh when nothing is saved.
#[instrument(skip(store))]
pub fn resume_word_game(store: &impl ProgressStore) -> WordSession {
    let percent = store
        .get(WORDLE_TITLE)
        .map(|record| record.progress)
        .unwrap_or(0);
    info!(percent, "Resuming word game from store");
    WordSession::resume(percent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use parlor_wordgame::LevelPhase;

    #[test]
    fn test_add_ignores_duplicate_titles() {
        let mut library = Library::new();
        assert!(library.add("Wordle"));
        assert!(!library.add("Wordle"));
        assert_eq!(library.entries().len(), 1);

        let entry = library.get("Wordle").unwrap();
        assert_eq!(entry.genre(), "Puzzle");
        assert_eq!(entry.progress(), 0);
        assert_eq!(entry.rating(), 0);
    }

    #[test]
    fn test_rate_clamps_into_the_star_range() {
        let mut library = Library::new();
        library.add("Chess");

        library.rate("Chess", 0).unwrap();
        assert_eq!(library.get("Chess").unwrap().rating(), 1);

        library.rate("Chess", 9).unwrap();
        assert_eq!(library.get("Chess").unwrap().rating(), 5);

        library.rate("Chess", 3).unwrap();
        assert_eq!(library.get("Chess").unwrap().rating(), 3);
    }

    #[test]
    fn test_unknown_titles_are_rejected() {
        let mut library = Library::new();
        let err = library.rate("Snake", 4).unwrap_err();
        assert_eq!(err.title, "Snake");
        assert!(library.remove("Snake").is_err());
    }

    #[test]
    fn test_remove_returns_the_dropped_entry() {
        let mut library = Library::new();
        library.add("Sudoku");
        library.rate("Sudoku", 2).unwrap();

        let removed = library.remove("Sudoku").unwrap();
        assert_eq!(removed.title(), "Sudoku");
        assert_eq!(removed.rating(), 2);
        assert!(library.get("Sudoku").is_none());
        assert!(library.entries().is_empty());
    }

    #[test]
    fn test_sync_pulls_percentages_from_the_store() {
        let mut store = MemoryStore::new();
        store.set(WORDLE_TITLE, GameRecord::new(false, 47));

        let mut library = Library::new();
        library.add(WORDLE_TITLE);
        library.add("Memory Match");
        library.sync_progress(&store);

        assert_eq!(library.get(WORDLE_TITLE).unwrap().progress(), 47);
        assert_eq!(
            library.get("Memory Match").unwrap().progress(),
            0,
            "entries without a record keep their percentage"
        );
    }

    #[test]
    fn test_hub_entry_mirrors_portal_progress() {
        let mut store = MemoryStore::new();
        store.set("Tic Tac Toe", GameRecord::new(true, 100));
        store.set("XO Special", GameRecord::new(true, 100));

        let mut library = Library::new();
        library.add("Tic Tac Toe");
        library.sync_progress(&store);

        assert_eq!(library.get("Tic Tac Toe").unwrap().progress(), 40);
    }

    #[test]
    fn test_word_progress_round_trips_through_the_store() {
        let mut store = MemoryStore::new();
        record_word_progress(&mut store, 47);

        let record = store.get(WORDLE_TITLE).unwrap();
        assert!(!record.won);
        assert_eq!(record.progress, 47);

        let session = resume_word_game(&store);
        assert_eq!(session.level_index(), 7);
        assert_eq!(session.progress(), 47);
    }

    #[test]
    fn test_finished_runs_read_back_as_won() {
        let mut store = MemoryStore::new();
        record_word_progress(&mut store, 100);
        assert!(store.get(WORDLE_TITLE).unwrap().won);

        let session = resume_word_game(&store);
        assert_eq!(session.phase(), LevelPhase::Finished);
    }

    #[test]
    fn test_resume_starts_fresh_without_a_record() {
        let store = MemoryStore::new();
        let session = resume_word_game(&store);
        assert_eq!(session.level_index(), 0);
        assert_eq!(session.progress(), 0);
    }
}
