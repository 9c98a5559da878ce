//! One-ply win/block heuristic.

use super::{NoMovesAvailable, OpponentPolicy, RandomPolicy};
use crate::board::Board;
use crate::rules::{WinRule, completes};
use crate::types::Mark;
use tracing::{debug, instrument};

/// Greedy single-lookahead policy: finish an own line, else block the
/// opponent's finishing cell, else play at random.
///
/// Non-exhaustive by design; it cannot see forks and loses to them. This
/// is the Hard tier for variants that do not use full search.
#[derive(Debug)]
pub struct OnePlyPolicy {
    /// Lines the probe checks for completion.
    rule: WinRule,
    /// Fallback when no completion exists on either side.
    fallback: RandomPolicy,
}

impl OnePlyPolicy {
    /// Creates a policy probing against `rule`.
    pub fn new(rule: WinRule) -> Self {
        Self {
            rule,
            fallback: RandomPolicy::new(),
        }
    }

    /// Creates a policy with a seeded random fallback.
    pub fn seeded(rule: WinRule, seed: u64) -> Self {
        Self {
            rule,
            fallback: RandomPolicy::seeded(seed),
        }
    }
}

impl OpponentPolicy for OnePlyPolicy {
    #[instrument(skip(self, board), fields(mark = %mark))]
    fn choose_move(&mut self, board: &Board, mark: Mark) -> Result<usize, NoMovesAvailable> {
        let open = board.empty_positions();
        if open.is_empty() {
            return Err(NoMovesAvailable);
        }
        // Own completions first, then the opponent's.
        for probe in [mark, mark.opponent()] {
            for &position in &open {
                if completes(board, &self.rule, position, probe) {
                    debug!(position, probe = %probe, "One-ply completion found");
                    return Ok(position);
                }
            }
        }
        self.fallback.choose_move(board, mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Layout;

    fn board_from(x_at: &[usize], o_at: &[usize]) -> Board {
        let mut board = Board::new(Layout::classic());
        for &pos in x_at {
            board.place(pos, Mark::X).unwrap();
        }
        for &pos in o_at {
            board.place(pos, Mark::O).unwrap();
        }
        board
    }

    #[test]
    fn test_takes_own_win() {
        // O can finish the middle row at 5.
        let board = board_from(&[0, 1], &[3, 4]);
        let mut policy = OnePlyPolicy::seeded(WinRule::classic(), 1);
        assert_eq!(policy.choose_move(&board, Mark::O), Ok(5));
    }

    #[test]
    fn test_blocks_opponent_win() {
        // X threatens the top row at 2; O has nothing to finish.
        let board = board_from(&[0, 1], &[4]);
        let mut policy = OnePlyPolicy::seeded(WinRule::classic(), 1);
        assert_eq!(policy.choose_move(&board, Mark::O), Ok(2));
    }

    #[test]
    fn test_prefers_own_win_over_block() {
        // X threatens at 2, but O can finish the middle row at 5.
        let board = board_from(&[0, 1, 8], &[3, 4]);
        let mut policy = OnePlyPolicy::seeded(WinRule::classic(), 1);
        assert_eq!(policy.choose_move(&board, Mark::O), Ok(5));
    }

    #[test]
    fn test_falls_back_to_random_when_nothing_completes() {
        let board = board_from(&[0], &[4]);
        let mut policy = OnePlyPolicy::seeded(WinRule::classic(), 5);
        let position = policy.choose_move(&board, Mark::O).unwrap();
        assert!(board.is_open(position));
    }

    #[test]
    fn test_full_board_reports_no_moves() {
        let board = board_from(&[0, 2, 3, 4, 7], &[1, 5, 6, 8]);
        let mut policy = OnePlyPolicy::seeded(WinRule::classic(), 5);
        assert_eq!(policy.choose_move(&board, Mark::O), Err(NoMovesAvailable));
    }
}
