//! The two-flip matching state machine.

use crate::deck::{MatchDifficulty, deal};
use derive_more::{Display, Error};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A flip rejected without touching state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum FlipError {
    /// The index lies outside the deck.
    #[display("card {} is outside the deck", index)]
    OutOfRange {
        /// The rejected index.
        index: usize,
    },
    /// The card is already the face-up half of the current pair.
    #[display("card {} is already face up", index)]
    AlreadyFaceUp {
        /// The rejected index.
        index: usize,
    },
    /// The card already belongs to a matched pair.
    #[display("card {} is already matched", index)]
    AlreadyMatched {
        /// The rejected index.
        index: usize,
    },
}

/// What a flip did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipOutcome {
    /// First card of a pair turned face up.
    FirstUp {
        /// The card now showing.
        index: usize,
    },
    /// Second card completed a pair.
    Matched {
        /// Face value of the pair.
        value: u8,
        /// First card of the pair.
        first: usize,
        /// Second card of the pair.
        second: usize,
    },
    /// Second card did not match; both turn back down.
    Mismatch {
        /// First card of the failed pair.
        first: usize,
        /// Second card of the failed pair.
        second: usize,
    },
}

/// How a single card currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum CardState {
    /// Face down.
    Down,
    /// Face up as the first half of the pair in progress.
    Up,
    /// Locked face up in a matched pair.
    Matched,
}

/// One deal of the memory matching game.
pub struct MatchingSession {
    /// Chosen board size.
    difficulty: MatchDifficulty,
    /// Face values by card index.
    cards: Vec<u8>,
    /// First card of the pair in progress, if any.
    face_up: Option<usize>,
    /// Matched flags by card index.
    matched: Vec<bool>,
    /// Pair comparisons made so far.
    attempts: u32,
    /// Randomness for redeals.
    rng: StdRng,
}

impl MatchingSession {
    /// Deals a fresh board at `difficulty`.
    #[instrument(fields(difficulty = %difficulty))]
    pub fn new(difficulty: MatchDifficulty) -> Self {
        Self::with_rng(difficulty, StdRng::from_os_rng())
    }

    /// Deals with seeded shuffle randomness.
    pub fn seeded(difficulty: MatchDifficulty, seed: u64) -> Self {
        Self::with_rng(difficulty, StdRng::seed_from_u64(seed))
    }

    fn with_rng(difficulty: MatchDifficulty, mut rng: StdRng) -> Self {
        info!(cards = difficulty.card_count(), "Dealing matching board");
        let cards = deal(difficulty, &mut rng);
        let matched = vec![false; cards.len()];
        Self {
            difficulty,
            cards,
            face_up: None,
            matched,
            attempts: 0,
            rng,
        }
    }

    /// Turns the card at `index` face up.
    ///
    /// The first flip of a pair stays up; the second flip compares the
    /// two cards, locking them on a match and turning both back down
    /// otherwise. The returned outcome carries the indices either way so
    /// a presenter can show the failed pair before hiding it.
    ///
    /// # Errors
    ///
    /// Returns [`FlipError`] when the index is out of range, the card is
    /// the currently face-up one, or its pair is already matched. State
    /// is unchanged on error.
    #[instrument(skip(self), fields(difficulty = %self.difficulty))]
    pub fn flip(&mut self, index: usize) -> Result<FlipOutcome, FlipError> {
        if index >= self.cards.len() {
            warn!(index, "Flip outside the deck rejected");
            return Err(FlipError::OutOfRange { index });
        }
        if self.matched[index] {
            warn!(index, "Flip of a matched card rejected");
            return Err(FlipError::AlreadyMatched { index });
        }
        if self.face_up == Some(index) {
            warn!(index, "Repeated flip rejected");
            return Err(FlipError::AlreadyFaceUp { index });
        }

        let Some(first) = self.face_up.take() else {
            self.face_up = Some(index);
            debug!(index, "First card up");
            return Ok(FlipOutcome::FirstUp { index });
        };

        self.attempts += 1;
        if self.cards[first] == self.cards[index] {
            self.matched[first] = true;
            self.matched[index] = true;
            let value = self.cards[index];
            debug!(value, "Pair matched");
            if self.is_won() {
                info!(attempts = self.attempts, "All pairs matched");
            }
            Ok(FlipOutcome::Matched {
                value,
                first,
                second: index,
            })
        } else {
            debug!(first, second = index, "Pair mismatched");
            Ok(FlipOutcome::Mismatch {
                first,
                second: index,
            })
        }
    }

    /// Redeals the same difficulty with a fresh shuffle.
    #[instrument(skip(self), fields(difficulty = %self.difficulty))]
    pub fn restart(&mut self) {
        debug!("Board redealt");
        self.cards = deal(self.difficulty, &mut self.rng);
        self.matched = vec![false; self.cards.len()];
        self.face_up = None;
        self.attempts = 0;
    }

    /// Whether every pair is matched.
    pub fn is_won(&self) -> bool {
        self.matched.iter().all(|flag| *flag)
    }

    /// How the card at `index` currently shows.
    pub fn state_of(&self, index: usize) -> Option<CardState> {
        if index >= self.cards.len() {
            return None;
        }
        let state = if self.matched[index] {
            CardState::Matched
        } else if self.face_up == Some(index) {
            CardState::Up
        } else {
            CardState::Down
        };
        Some(state)
    }

    /// Face value of the card at `index`.
    pub fn value_at(&self, index: usize) -> Option<u8> {
        self.cards.get(index).copied()
    }

    /// Chosen board size.
    pub fn difficulty(&self) -> MatchDifficulty {
        self.difficulty
    }

    /// Number of cards on the board.
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Pairs still hidden.
    pub fn remaining_pairs(&self) -> usize {
        self.matched.iter().filter(|flag| !**flag).count() / 2
    }

    /// Pair comparisons made so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Finds the partner of `index` by value.
    fn partner(session: &MatchingSession, index: usize) -> usize {
        let value = session.value_at(index).unwrap();
        (0..session.card_count())
            .find(|&other| other != index && session.value_at(other) == Some(value))
            .unwrap()
    }

    #[test]
    fn test_first_flip_stays_up() {
        let mut session = MatchingSession::seeded(MatchDifficulty::Easy, 1);
        assert_eq!(session.flip(0).unwrap(), FlipOutcome::FirstUp { index: 0 });
        assert_eq!(session.state_of(0), Some(CardState::Up));
    }

    #[test]
    fn test_matching_pair_locks_both_cards() {
        let mut session = MatchingSession::seeded(MatchDifficulty::Easy, 1);
        let other = partner(&session, 0);
        session.flip(0).unwrap();
        let outcome = session.flip(other).unwrap();
        assert!(matches!(outcome, FlipOutcome::Matched { .. }));
        assert_eq!(session.state_of(0), Some(CardState::Matched));
        assert_eq!(session.state_of(other), Some(CardState::Matched));
        assert_eq!(session.attempts(), 1);
    }

    #[test]
    fn test_mismatch_turns_both_back_down() {
        let mut session = MatchingSession::seeded(MatchDifficulty::Easy, 1);
        let value = session.value_at(0).unwrap();
        let different = (0..session.card_count())
            .find(|&other| session.value_at(other) != Some(value))
            .unwrap();
        session.flip(0).unwrap();
        let outcome = session.flip(different).unwrap();
        assert_eq!(
            outcome,
            FlipOutcome::Mismatch {
                first: 0,
                second: different
            }
        );
        assert_eq!(session.state_of(0), Some(CardState::Down));
        assert_eq!(session.state_of(different), Some(CardState::Down));
    }

    #[test]
    fn test_flipping_the_same_card_twice_is_rejected() {
        let mut session = MatchingSession::seeded(MatchDifficulty::Easy, 1);
        session.flip(2).unwrap();
        assert_eq!(
            session.flip(2).unwrap_err(),
            FlipError::AlreadyFaceUp { index: 2 }
        );
        // The pair in progress is untouched by the rejection.
        assert_eq!(session.state_of(2), Some(CardState::Up));
    }

    #[test]
    fn test_matched_cards_reject_further_flips() {
        let mut session = MatchingSession::seeded(MatchDifficulty::Easy, 1);
        let other = partner(&session, 0);
        session.flip(0).unwrap();
        session.flip(other).unwrap();
        assert_eq!(
            session.flip(0).unwrap_err(),
            FlipError::AlreadyMatched { index: 0 }
        );
    }

    #[test]
    fn test_out_of_range_flip_is_rejected() {
        let mut session = MatchingSession::seeded(MatchDifficulty::Easy, 1);
        assert_eq!(
            session.flip(6).unwrap_err(),
            FlipError::OutOfRange { index: 6 }
        );
    }

    #[test]
    fn test_clearing_the_board_wins() {
        let mut session = MatchingSession::seeded(MatchDifficulty::Medium, 3);
        while !session.is_won() {
            let index = (0..session.card_count())
                .find(|&card| session.state_of(card) == Some(CardState::Down))
                .unwrap();
            session.flip(index).unwrap();
            session.flip(partner(&session, index)).unwrap();
        }
        assert_eq!(session.remaining_pairs(), 0);
        assert_eq!(session.attempts(), 5);
    }

    #[test]
    fn test_restart_redeals_and_clears_attempts() {
        let mut session = MatchingSession::seeded(MatchDifficulty::Easy, 1);
        session.flip(0).unwrap();
        session.flip(partner(&session, 0)).unwrap();
        session.restart();
        assert_eq!(session.attempts(), 0);
        assert!(!session.is_won());
        assert!((0..6).all(|card| session.state_of(card) == Some(CardState::Down)));
    }
}
