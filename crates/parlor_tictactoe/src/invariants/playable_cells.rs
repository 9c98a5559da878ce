//! Playable cells invariant: every move landed on a playable cell.

use super::Invariant;
use crate::session::MatchSession;

/// Invariant: the history only names playable cells.
///
/// Sparse layouts carry inert filler cells; no move may ever have
/// landed on one, nor outside the grid.
pub struct PlayableCellsInvariant;

impl Invariant<MatchSession> for PlayableCellsInvariant {
    fn holds(session: &MatchSession) -> bool {
        let layout = session.variant().layout();
        session
            .history()
            .iter()
            .all(|played| layout.is_playable(played.position))
    }

    fn description() -> &'static str {
        "Every recorded move landed on a playable cell"
    }
}
