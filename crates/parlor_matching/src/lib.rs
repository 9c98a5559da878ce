//! Parlor matching library - the memory pair-matching game
//!
//! This library provides the logic behind the portal's memory game:
//! shuffled decks of paired face values at three board sizes, the
//! two-flip compare protocol, and win detection.
//!
//! # Example
//!
//! ```
//! use parlor_matching::{FlipOutcome, MatchDifficulty, MatchingSession};
//!
//! # fn main() -> Result<(), parlor_matching::FlipError> {
//! let mut session = MatchingSession::seeded(MatchDifficulty::Easy, 42);
//! let outcome = session.flip(0)?;
//! assert_eq!(outcome, FlipOutcome::FirstUp { index: 0 });
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod deck;
mod session;

// Crate-level exports - Difficulties
pub use deck::MatchDifficulty;

// Crate-level exports - Sessions
pub use session::{CardState, FlipError, FlipOutcome, MatchingSession};
