//! Level-by-level guessing sessions.

use crate::feedback::{LetterMark, score_guess};
use crate::levels::{LEVELS, Level, percent_for, resume_level};
use derive_more::{Display, Error};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A guessing operation rejected without touching state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum WordGameError {
    /// The guess length does not match the answer.
    #[display("expected a guess of {} letters, got {}", expected, got)]
    WrongLength {
        /// Length of the answer, spaces included.
        expected: usize,
        /// Length of the rejected guess.
        got: usize,
    },
    /// The level ran out of tries; retry or restart first.
    #[display("the level has failed, retry it first")]
    LevelFailed,
    /// Every level is already cleared.
    #[display("the catalog is already finished")]
    AlreadyFinished,
    /// The level's hint budget is spent.
    #[display("no hints left")]
    HintsExhausted,
    /// Every guessable letter was already revealed this try.
    #[display("nothing left to reveal")]
    NothingToReveal,
}

/// Where a session stands within the current level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum LevelPhase {
    /// Tries remain on the current level.
    Guessing,
    /// The current level ran out of tries.
    Failed,
    /// All fifteen levels are cleared.
    Finished,
}

/// What a guess did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// The word matched; the session advanced to the next level or
    /// finished the catalog.
    Cleared {
        /// Saved progress percentage after the clear.
        progress: u8,
    },
    /// Wrong word with tries to spare.
    Missed {
        /// Guesses left on this level.
        tries_left: u8,
    },
    /// Wrong word and no tries left; the level fails.
    Failed,
}

/// Per-letter marks plus the resulting outcome of one guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessFeedback {
    /// One mark per answer position.
    pub marks: Vec<LetterMark>,
    /// What the guess did to the session.
    pub outcome: GuessOutcome,
}

/// A letter handed out by the hint budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedLetter {
    /// Position of the letter within the answer.
    pub position: usize,
    /// The letter itself, uppercased.
    pub letter: char,
}

/// A run through the level catalog.
pub struct WordSession {
    /// Index into [`LEVELS`].
    level_index: usize,
    /// Current try, starting at 1.
    attempt: u8,
    /// Hints left on the current level.
    hints_left: u8,
    /// Positions revealed during the current try.
    revealed: Vec<usize>,
    /// Saved progress percentage.
    progress: u8,
    /// Where the session stands.
    phase: LevelPhase,
    /// Randomness for hint positions.
    rng: StdRng,
}

// ─────────────────────────────────────────────────────────────
//  Construction
// ─────────────────────────────────────────────────────────────

impl WordSession {
    /// Starts a fresh run at the first level.
    pub fn new() -> Self {
        Self::with_rng(0, StdRng::from_os_rng())
    }

    /// Starts a fresh run with seeded hint randomness.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(0, StdRng::seed_from_u64(seed))
    }

    /// Resumes a run from a saved progress percentage.
    ///
    /// The percentage floors onto a level index; one hundred or more
    /// opens the session in the finished phase.
    #[instrument]
    pub fn resume(percent: u8) -> Self {
        match resume_level(percent) {
            Some(level_index) => {
                info!(level_index, "Resuming word game");
                let mut session = Self::with_rng(level_index, StdRng::from_os_rng());
                session.progress = percent;
                session
            }
            None => {
                info!("Word game already finished");
                let mut session = Self::with_rng(0, StdRng::from_os_rng());
                session.progress = 100;
                session.phase = LevelPhase::Finished;
                session
            }
        }
    }

    fn with_rng(level_index: usize, rng: StdRng) -> Self {
        Self {
            level_index,
            attempt: 1,
            hints_left: LEVELS[level_index].hints(),
            revealed: Vec::new(),
            progress: 0,
            phase: LevelPhase::Guessing,
            rng,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Guessing
// ─────────────────────────────────────────────────────────────

impl WordSession {
    /// Scores `attempt` against the current answer.
    ///
    /// A correct guess saves progress and advances to the next level;
    /// clearing the last level finishes the run. A wrong guess burns a
    /// try, and burning the last one fails the level.
    ///
    /// # Errors
    ///
    /// Returns [`WordGameError`] when the run is finished, the level has
    /// already failed, or the guess length is wrong. State is unchanged
    /// on error.
    #[instrument(skip(self), fields(level = self.level_index, attempt = self.attempt))]
    pub fn guess(&mut self, attempt: &str) -> Result<GuessFeedback, WordGameError> {
        self.ensure_guessing()?;
        let level = LEVELS[self.level_index];
        let answer = level.word();

        let expected = answer.chars().count();
        let got = attempt.chars().count();
        if got != expected {
            warn!(expected, got, "Guess length rejected");
            return Err(WordGameError::WrongLength { expected, got });
        }

        // Space positions are locked boxes; whatever the caller put
        // there is read as the space itself.
        let normalized: String = answer
            .chars()
            .zip(attempt.chars())
            .map(|(wanted, guessed)| {
                if wanted == ' ' {
                    ' '
                } else {
                    guessed.to_ascii_uppercase()
                }
            })
            .collect();
        let marks = score_guess(answer, &normalized);

        let outcome = if normalized == answer.to_ascii_uppercase() {
            self.clear_level()
        } else if self.attempt < level.tries() {
            self.attempt += 1;
            self.revealed.clear();
            let tries_left = level.tries() - self.attempt + 1;
            debug!(tries_left, "Guess missed");
            GuessOutcome::Missed { tries_left }
        } else {
            warn!(level = self.level_index, "Level failed");
            self.phase = LevelPhase::Failed;
            GuessOutcome::Failed
        };

        Ok(GuessFeedback { marks, outcome })
    }

    /// Reveals one unrevealed letter of the current try.
    ///
    /// # Errors
    ///
    /// Returns [`WordGameError`] when the run is finished, the level has
    /// failed, the hint budget is spent, or nothing is left to reveal.
    #[instrument(skip(self), fields(level = self.level_index, hints_left = self.hints_left))]
    pub fn reveal_hint(&mut self) -> Result<RevealedLetter, WordGameError> {
        self.ensure_guessing()?;
        if self.hints_left == 0 {
            warn!("Hint requested with an empty budget");
            return Err(WordGameError::HintsExhausted);
        }

        let answer = LEVELS[self.level_index].word();
        let candidates: Vec<usize> = answer
            .chars()
            .enumerate()
            .filter(|(position, ch)| *ch != ' ' && !self.revealed.contains(position))
            .map(|(position, _)| position)
            .collect();
        if candidates.is_empty() {
            return Err(WordGameError::NothingToReveal);
        }

        let position = candidates[self.rng.random_range(0..candidates.len())];
        let letter = answer
            .chars()
            .nth(position)
            .map(|ch| ch.to_ascii_uppercase())
            .unwrap_or(' ');
        self.revealed.push(position);
        self.hints_left -= 1;
        debug!(position, "Hint revealed");
        Ok(RevealedLetter { position, letter })
    }

    /// Restarts the current level with fresh tries and hints.
    ///
    /// # Errors
    ///
    /// Returns [`WordGameError::AlreadyFinished`] once the catalog is
    /// cleared.
    #[instrument(skip(self), fields(level = self.level_index))]
    pub fn try_again(&mut self) -> Result<(), WordGameError> {
        if self.phase == LevelPhase::Finished {
            return Err(WordGameError::AlreadyFinished);
        }
        debug!("Level retried");
        self.start_level(self.level_index);
        Ok(())
    }

    /// Wipes all progress and starts over from the first level.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Word game restarted from scratch");
        self.progress = 0;
        self.start_level(0);
    }

    fn ensure_guessing(&self) -> Result<(), WordGameError> {
        match self.phase {
            LevelPhase::Guessing => Ok(()),
            LevelPhase::Failed => {
                warn!("Operation rejected, the level has failed");
                Err(WordGameError::LevelFailed)
            }
            LevelPhase::Finished => {
                warn!("Operation rejected, the catalog is finished");
                Err(WordGameError::AlreadyFinished)
            }
        }
    }

    fn clear_level(&mut self) -> GuessOutcome {
        self.progress = percent_for(self.level_index + 1, LEVELS.len());
        info!(
            level = self.level_index,
            progress = self.progress,
            "Level cleared"
        );
        if self.level_index + 1 < LEVELS.len() {
            self.start_level(self.level_index + 1);
        } else {
            info!("Catalog finished");
            self.phase = LevelPhase::Finished;
        }
        GuessOutcome::Cleared {
            progress: self.progress,
        }
    }

    fn start_level(&mut self, level_index: usize) {
        self.level_index = level_index;
        self.attempt = 1;
        self.hints_left = LEVELS[level_index].hints();
        self.revealed.clear();
        self.phase = LevelPhase::Guessing;
    }
}

// ─────────────────────────────────────────────────────────────
//  Read access
// ─────────────────────────────────────────────────────────────

impl WordSession {
    /// The level being played.
    pub fn level(&self) -> Level {
        LEVELS[self.level_index]
    }

    /// Index of the level being played.
    pub fn level_index(&self) -> usize {
        self.level_index
    }

    /// Current try, starting at 1.
    pub fn attempt(&self) -> u8 {
        self.attempt
    }

    /// Hints left on the current level.
    pub fn hints_left(&self) -> u8 {
        self.hints_left
    }

    /// Saved progress percentage.
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Where the session stands.
    pub fn phase(&self) -> LevelPhase {
        self.phase
    }
}

impl Default for WordSession {
    fn default() -> Self {
        Self::new()
    }
}
