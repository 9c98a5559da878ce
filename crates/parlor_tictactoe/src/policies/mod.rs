//! Opponent decision procedures.
//!
//! Three policy kinds cover every variant: uniform [`RandomPolicy`] for
//! the Easy tier, the greedy [`OnePlyPolicy`] (win, block, random), and
//! exhaustive [`MinimaxPolicy`] search with alpha-beta pruning. The weak
//! and strong Hard tiers are deliberately distinct kinds, not strength
//! settings of one another.

mod heuristic;
mod minimax;
mod random;

pub use heuristic::OnePlyPolicy;
pub use minimax::MinimaxPolicy;
pub use random::RandomPolicy;

use crate::board::Board;
use crate::types::Mark;
use derive_more::{Display, Error};

/// A policy was invoked on a board with no open cells.
///
/// Callers must detect terminal boards before asking for a move; seeing
/// this error means the caller's terminal detection is broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("no playable empty cells remain")]
pub struct NoMovesAvailable;

/// A decision procedure for the computer side.
pub trait OpponentPolicy {
    /// Picks an open position for `mark` on the current board.
    ///
    /// # Errors
    ///
    /// Returns [`NoMovesAvailable`] when the board has no open cells.
    fn choose_move(&mut self, board: &Board, mark: Mark) -> Result<usize, NoMovesAvailable>;
}
