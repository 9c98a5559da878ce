//! Parlor tic-tac-toe library - board variants and computer opponents
//!
//! This library provides the game logic behind the portal's tic-tac-toe
//! hub: board layouts, win rules, opponent policies, and ratcheting
//! match sessions.
//!
//! # Architecture
//!
//! - **Variants**: Classic, misère, pyramid, and 5x5 rule bundles
//! - **Policies**: Random, one-ply heuristic, and minimax opponents
//! - **Sessions**: Turn enforcement plus the Easy-to-Hard ratchet
//! - **Invariants**: First-class, independently testable guarantees
//!
//! # Example
//!
//! ```
//! use parlor_tictactoe::{DiscardProgress, MatchSession, Tier, Variant};
//!
//! # fn main() -> Result<(), parlor_tictactoe::MatchError> {
//! let mut session =
//!     MatchSession::seeded(Variant::classic(), Tier::Easy, Box::new(DiscardProgress), 7);
//!
//! // The human opens on the center; the computer answers.
//! session.player_move(4)?;
//! let (reply, _outcome) = session.computer_turn()?;
//! assert_ne!(reply, 4);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod invariants;
mod layout;
mod policies;
mod rules;
mod session;
mod sus;
mod types;
mod variant;

// Crate-level exports - Core types
pub use types::{ActiveSide, Cell, GameOutcome, Mark, Tier};

// Crate-level exports - Boards and layouts
pub use board::{Board, IllegalMove};
pub use layout::Layout;

// Crate-level exports - Win rules
pub use rules::{Polarity, WinRule, completed_line, completes, evaluate};

// Crate-level exports - Opponent policies
pub use policies::{MinimaxPolicy, NoMovesAvailable, OnePlyPolicy, OpponentPolicy, RandomPolicy};

// Crate-level exports - Variants
pub use variant::{HardPolicy, Variant};

// Crate-level exports - Match sessions
pub use session::{DiscardProgress, MatchError, MatchSession, PlayedMove, ProgressSink};

// Crate-level exports - The Among Sus variant
pub use sus::{SUS_GAME_ID, SusBoard, SusLetter, SusOutcome, SusSession};

// Crate-level exports - Invariants
pub use invariants::{
    AlternatingMarksInvariant, Invariant, InvariantSet, InvariantViolation, MatchInvariants,
    MonotonicBoardInvariant, PlayableCellsInvariant,
};
