//! Portal catalogs and unlock rules.
//!
//! The arcade page advertises twelve titles, three of which are playable
//! here. The tic-tac-toe hub lists five board variants that unlock one
//! by one as portal progress grows; progress itself is derived from the
//! won flags in the store, one fifth per beaten variant.

use crate::store::ProgressStore;

/// Library and store title of the word game.
pub const WORDLE_TITLE: &str = "Wordle";

/// One advertised arcade title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArcadeEntry {
    title: &'static str,
    blurb: &'static str,
    playable: bool,
}

impl ArcadeEntry {
    /// Display title, also the key used in stores and libraries.
    pub fn title(&self) -> &'static str {
        self.title
    }

    /// One-line description shown on the card.
    pub fn blurb(&self) -> &'static str {
        self.blurb
    }

    /// Whether the portal can actually start this game.
    pub fn playable(&self) -> bool {
        self.playable
    }
}

/// The advertised arcade titles in display order.
pub const ARCADE: [ArcadeEntry; 12] = [
    ArcadeEntry {
        title: "Tic Tac Toe",
        blurb: "Classic X vs O strategy game",
        playable: true,
    },
    ArcadeEntry {
        title: "Wordle",
        blurb: "Guess the hidden word in 6 tries",
        playable: true,
    },
    ArcadeEntry {
        title: "Hangman",
        blurb: "Save the stickman by guessing letters",
        playable: false,
    },
    ArcadeEntry {
        title: "Sudoku",
        blurb: "Fill the grid with numbers 1-9 logically",
        playable: false,
    },
    ArcadeEntry {
        title: "Chess",
        blurb: "Strategic board game of kings and queens",
        playable: false,
    },
    ArcadeEntry {
        title: "Minesweeper",
        blurb: "Avoid the mines and clear the grid",
        playable: false,
    },
    ArcadeEntry {
        title: "Snake",
        blurb: "Grow the snake without hitting walls",
        playable: false,
    },
    ArcadeEntry {
        title: "Connect Four",
        blurb: "Line up 4 discs before your opponent",
        playable: false,
    },
    ArcadeEntry {
        title: "Word Search",
        blurb: "Find hidden words in a letter grid",
        playable: false,
    },
    ArcadeEntry {
        title: "KenKen",
        blurb: "Math-based grid puzzle game",
        playable: false,
    },
    ArcadeEntry {
        title: "Memory Match",
        blurb: "Match pairs of cards using memory",
        playable: true,
    },
    ArcadeEntry {
        title: "Checkers",
        blurb: "Classic strategy board game with jumps",
        playable: false,
    },
];

// ─────────────────────────────────────────────────────────────
//  Variant hub
// ─────────────────────────────────────────────────────────────

/// One entry of the tic-tac-toe hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantEntry {
    title: &'static str,
    blurb: &'static str,
}

impl VariantEntry {
    /// Display title, matching the variant's game identifier.
    pub fn title(&self) -> &'static str {
        self.title
    }

    /// One-line description shown on the hub card.
    pub fn blurb(&self) -> &'static str {
        self.blurb
    }
}

/// The hub's five board variants in unlock order.
pub const HUB: [VariantEntry; 5] = [
    VariantEntry {
        title: "Tic Tac Toe",
        blurb: "Classic X vs O strategy game",
    },
    VariantEntry {
        title: "XO Special",
        blurb: "Reverse X and O variant",
    },
    VariantEntry {
        title: "Pyramid Tic Tac Toe",
        blurb: "Unique pyramid layout",
    },
    VariantEntry {
        title: "Among Sus",
        blurb: "Fun imposter mini game",
    },
    VariantEntry {
        title: "5x5 Grid",
        blurb: "Bigger tic tac toe challenge",
    },
];

/// Portal progress needed to open hub entry `index`, in percent.
///
/// Entry `i` of `n` opens at `100 * i / n`, so the five variants unlock
/// at 0, 20, 40, 60 and 80 percent.
pub fn unlock_threshold(index: usize) -> u8 {
    (index * 100 / HUB.len()) as u8
}

/// Whether hub entry `index` is open at `progress` percent.
pub fn is_unlocked(index: usize, progress: u8) -> bool {
    progress >= unlock_threshold(index)
}

/// Derives portal progress from the store as the share of hub variants
/// won, in percent.
pub fn portal_progress(store: &impl ProgressStore) -> u8 {
    let won = HUB
        .iter()
        .filter(|entry| store.get(entry.title()).is_some_and(|record| record.won))
        .count();
    (won * 100 / HUB.len()) as u8
}

/// Longer description shown on a title's detail card.
///
/// Covers the playable arcade titles and the hub variants; display-only
/// arcade titles have no detail text.
pub fn detail_for(title: &str) -> Option<&'static str> {
    match title {
        "Tic Tac Toe" => Some(
            "A family of grid games where two players take turns marking X or O. \
             The goal is to line up the target count in a row horizontally, \
             vertically, or diagonally.",
        ),
        "Wordle" => Some(
            "Guess the hidden word within limited tries. After each guess, \
             letters are marked to show whether they are correct and in the \
             right spot.",
        ),
        "Memory Match" => Some(
            "A card-matching game where all cards start face down. Players flip \
             two cards at a time, trying to find matching pairs from memory.",
        ),
        "XO Special" => Some(
            "A reverse version of X and O where the strategy flips: avoid \
             making three in a row.",
        ),
        "Among Sus" => Some(
            "An imposter-themed turn game on the classic grid where spelling \
             the word SUS in any direction scores.",
        ),
        "5x5 Grid" => Some(
            "A bigger tic tac toe challenge with more rows and columns to \
             strategize over.",
        ),
        "Pyramid Tic Tac Toe" => Some(
            "A pyramid-shaped tic tac toe variant that adds a new twist to the \
             gameplay.",
        ),
        _ => None,
    }
}
