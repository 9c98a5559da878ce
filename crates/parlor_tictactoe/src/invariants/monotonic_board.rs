//! Monotonic board invariant: cells never change once marked.

use super::Invariant;
use crate::board::Board;
use crate::session::MatchSession;

/// Invariant: board cells are monotonic (never overwritten).
///
/// Once a cell transitions from empty to marked, it never changes.
/// This is verified by replaying the move history and comparing.
pub struct MonotonicBoardInvariant;

impl Invariant<MatchSession> for MonotonicBoardInvariant {
    fn holds(session: &MatchSession) -> bool {
        // Reconstruct the board from history; every placement must land
        // on an open cell or the history is already inconsistent.
        let mut replayed = Board::new(session.variant().layout().clone());

        for played in session.history() {
            if replayed.place(played.position, played.mark).is_err() {
                return false;
            }
        }

        // The replayed board must match the live one.
        replayed == *session.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
