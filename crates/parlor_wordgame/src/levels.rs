//! The fixed fifteen-level word catalog.
//!
//! Levels run from three-letter words to two-word phrases; the try and
//! hint budgets grow with the words. Clearing level `k` of `n` sets the
//! saved progress to `round(100 * k / n)` percent, and a saved
//! percentage maps back to `floor(percent * n / 100)` when a player
//! returns.

use serde::Serialize;

/// One entry of the level catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Level {
    word: &'static str,
    description: &'static str,
    tries: u8,
    hints: u8,
}

impl Level {
    /// The answer, as written in the catalog.
    pub fn word(&self) -> &'static str {
        self.word
    }

    /// The clue shown alongside the puzzle.
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Guesses allowed before the level fails.
    pub fn tries(&self) -> u8 {
        self.tries
    }

    /// Hint budget for the level.
    pub fn hints(&self) -> u8 {
        self.hints
    }

    /// Number of guessable letters, spaces excluded.
    pub fn letter_count(&self) -> usize {
        self.word.chars().filter(|ch| *ch != ' ').count()
    }
}

/// The catalog, ordered easiest first.
pub const LEVELS: [Level; 15] = [
    Level {
        word: "cat",
        description: "A small domestic animal",
        tries: 2,
        hints: 0,
    },
    Level {
        word: "dog",
        description: "Man's best friend",
        tries: 2,
        hints: 0,
    },
    Level {
        word: "sun",
        description: "Gives us light",
        tries: 2,
        hints: 0,
    },
    Level {
        word: "apple",
        description: "A sweet red or green fruit",
        tries: 3,
        hints: 0,
    },
    Level {
        word: "grape",
        description: "Round purple or green fruit",
        tries: 3,
        hints: 0,
    },
    Level {
        word: "peach",
        description: "Juicy fruit with fuzzy skin",
        tries: 3,
        hints: 0,
    },
    Level {
        word: "journey",
        description: "A long trip",
        tries: 5,
        hints: 1,
    },
    Level {
        word: "fantasy",
        description: "Imaginative fiction world",
        tries: 5,
        hints: 1,
    },
    Level {
        word: "mystery",
        description: "Something unknown or puzzling",
        tries: 5,
        hints: 1,
    },
    Level {
        word: "basketball",
        description: "A popular team sport",
        tries: 7,
        hints: 3,
    },
    Level {
        word: "journalist",
        description: "Someone who writes news",
        tries: 7,
        hints: 3,
    },
    Level {
        word: "spacecraft",
        description: "Vehicle to travel in space",
        tries: 7,
        hints: 3,
    },
    Level {
        word: "quantum leap",
        description: "A sudden and significant change or advance",
        tries: 7,
        hints: 3,
    },
    Level {
        word: "black market",
        description: "Illegal trade of goods or services",
        tries: 7,
        hints: 3,
    },
    Level {
        word: "time capsule",
        description: "A container storing objects for future discovery",
        tries: 7,
        hints: 3,
    },
];

/// Progress percentage after clearing `cleared` of `total` levels.
pub fn percent_for(cleared: usize, total: usize) -> u8 {
    ((cleared * 100 + total / 2) / total) as u8
}

/// Level index a saved percentage resumes at, or `None` once finished.
///
/// The mapping floors, so percentages that round up replay the level
/// that produced them.
pub fn resume_level(percent: u8) -> Option<usize> {
    if percent >= 100 {
        return None;
    }
    Some(usize::from(percent) * LEVELS.len() / 100)
}
