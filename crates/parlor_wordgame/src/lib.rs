//! Parlor word game library - the fifteen-level guessing game
//!
//! This library provides the logic behind the portal's word game: a
//! fixed catalog of levels from three-letter words to two-word phrases,
//! per-letter guess feedback, hint budgets, and progress percentages
//! that survive leaving and resuming.
//!
//! # Example
//!
//! ```
//! use parlor_wordgame::{GuessOutcome, WordSession};
//!
//! # fn main() -> Result<(), parlor_wordgame::WordGameError> {
//! let mut session = WordSession::seeded(3);
//! let feedback = session.guess("cat")?;
//! assert_eq!(feedback.outcome, GuessOutcome::Cleared { progress: 7 });
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod feedback;
mod levels;
mod session;

// Crate-level exports - Level catalog
pub use levels::{LEVELS, Level, percent_for, resume_level};

// Crate-level exports - Guess feedback
pub use feedback::LetterMark;

// Crate-level exports - Sessions
pub use session::{
    GuessFeedback, GuessOutcome, LevelPhase, RevealedLetter, WordGameError, WordSession,
};
