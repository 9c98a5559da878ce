//! Formal verification of invariants using Kani model checker.
//!
//! These proof harnesses mathematically verify that invariants hold
//! for ALL possible game states (bounded).

#[cfg(kani)]
mod proofs {
    use crate::board::Board;
    use crate::invariants::{Invariant, InvariantSet, MatchInvariants, MonotonicBoardInvariant};
    use crate::layout::Layout;
    use crate::session::{DiscardProgress, MatchSession};
    use crate::types::{Cell, Mark, Tier};
    use crate::variant::Variant;

    /// Verify that placement never overwrites a marked cell.
    ///
    /// Proves: cells only transition empty to marked, never reverse.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_place_is_monotonic() {
        let mut board = Board::new(Layout::classic());

        let first: usize = kani::any();
        let second: usize = kani::any();
        kani::assume(first < 9);
        kani::assume(second < 9);

        board.place(first, Mark::X).unwrap();

        if second == first {
            assert!(board.place(second, Mark::O).is_err());
            assert_eq!(board.get(first), Some(Cell::Occupied(Mark::X)));
        } else {
            assert!(board.place(second, Mark::O).is_ok());
        }
    }

    /// Verify all match invariants after an arbitrary opening move.
    #[kani::proof]
    #[kani::unwind(12)]
    fn verify_invariants_after_opening() {
        let mut session =
            MatchSession::seeded(Variant::classic(), Tier::Easy, Box::new(DiscardProgress), 0);

        let position: usize = kani::any();
        kani::assume(position < 9);

        session.player_move(position).unwrap();

        assert!(
            MatchInvariants::check_all(&session).is_ok(),
            "match invariants violated after opening move"
        );
    }

    /// Verify the replay check rejects a board the history cannot reach.
    #[kani::proof]
    #[kani::unwind(12)]
    fn verify_monotonic_detects_foreign_marks() {
        let mut session =
            MatchSession::seeded(Variant::classic(), Tier::Easy, Box::new(DiscardProgress), 0);

        let played: usize = kani::any();
        let foreign: usize = kani::any();
        kani::assume(played < 9);
        kani::assume(foreign < 9);
        kani::assume(foreign != played);

        session.player_move(played).unwrap();
        session.board.place(foreign, Mark::O).unwrap();

        assert!(
            !MonotonicBoardInvariant::holds(&session),
            "foreign mark went undetected"
        );
    }
}
