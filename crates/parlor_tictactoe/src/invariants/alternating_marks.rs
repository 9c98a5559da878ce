//! Alternating marks invariant: moves run X, O, X, O, the human first.

use super::Invariant;
use crate::session::MatchSession;
use crate::types::{ActiveSide, GameOutcome, Mark};

/// Invariant: marks alternate through the history.
///
/// The human's X always opens, no mark moves twice in a row, and while
/// the game is in progress the active side agrees with the history
/// length.
pub struct AlternatingMarksInvariant;

impl Invariant<MatchSession> for AlternatingMarksInvariant {
    fn holds(session: &MatchSession) -> bool {
        let history = session.history();

        if history.is_empty() {
            return true;
        }

        // The human's X must open.
        if history[0].mark != Mark::X {
            return false;
        }

        for window in history.windows(2) {
            if window[0].mark == window[1].mark {
                return false;
            }
        }

        // Terminal games keep whatever side moved last as active.
        if session.outcome() == GameOutcome::InProgress {
            let expected = if history.len() % 2 == 0 {
                ActiveSide::Human
            } else {
                ActiveSide::Computer
            };
            if session.active() != expected {
                return false;
            }
        }

        true
    }

    fn description() -> &'static str {
        "Marks alternate through the history, the human's X first"
    }
}
