//! Difficulty sizes and deck dealing.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Board size options for a matching game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum MatchDifficulty {
    /// Six cards, three pairs.
    Easy,
    /// Ten cards, five pairs.
    Medium,
    /// Sixteen cards, eight pairs.
    Hard,
}

impl MatchDifficulty {
    /// Number of cards dealt at this difficulty.
    pub fn card_count(self) -> usize {
        match self {
            MatchDifficulty::Easy => 6,
            MatchDifficulty::Medium => 10,
            MatchDifficulty::Hard => 16,
        }
    }

    /// Number of pairs hidden in the deck.
    pub fn pair_count(self) -> usize {
        self.card_count() / 2
    }
}

/// Deals a shuffled deck for `difficulty`.
///
/// Face values run 1 through the pair count, each appearing exactly
/// twice.
pub(crate) fn deal<R: Rng>(difficulty: MatchDifficulty, rng: &mut R) -> Vec<u8> {
    let pairs = difficulty.pair_count() as u8;
    let mut deck: Vec<u8> = (1..=pairs).chain(1..=pairs).collect();
    deck.shuffle(rng);
    deck
}
