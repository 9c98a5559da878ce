//! Depth-limited minimax with alpha-beta pruning.

use super::{NoMovesAvailable, OpponentPolicy};
use crate::board::Board;
use crate::rules::{Polarity, WinRule, evaluate};
use crate::types::{GameOutcome, Mark};
use tracing::{debug, instrument};

/// Base score of a terminal win; depth adjustments stay well below it.
const WIN_SCORE: i32 = 1_000;

/// Exhaustive adversarial search for the computer side.
///
/// The computer mark maximizes, the human mark minimizes. Terminal wins
/// score `WIN_SCORE - depth_used` for the maximizer and the negation for
/// the minimizer, so the search prefers faster wins and slower losses.
/// Draws and depth-limit cutoffs score zero; there is no static
/// evaluation. Misère boards need no special handling here because
/// [`evaluate`] already inverts the winner.
#[derive(Debug, Clone)]
pub struct MinimaxPolicy {
    /// Lines fed to terminal detection.
    rule: WinRule,
    /// Win polarity fed to terminal detection.
    polarity: Polarity,
    /// Maximum plies searched below the root, counting the root move.
    depth_limit: usize,
}

impl MinimaxPolicy {
    /// Creates a search policy.
    ///
    /// `depth_limit` must be at least the number of open cells for the
    /// search to be exact; smaller limits trade optimality for speed and
    /// score unfinished positions as neutral.
    pub fn new(rule: WinRule, polarity: Polarity, depth_limit: usize) -> Self {
        Self {
            rule,
            polarity,
            depth_limit,
        }
    }

    /// Scores a finished or cut-off position.
    fn terminal_score(&self, outcome: GameOutcome, computer: Mark, depth_used: usize) -> i32 {
        let depth = depth_used as i32;
        match outcome {
            GameOutcome::Win(mark) if mark == computer => WIN_SCORE - depth,
            GameOutcome::Win(_) => -WIN_SCORE + depth,
            _ => 0,
        }
    }

    fn search(
        &self,
        board: &Board,
        computer: Mark,
        depth_left: usize,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        let outcome = evaluate(board, &self.rule, self.polarity);
        if outcome.is_terminal() {
            return self.terminal_score(outcome, computer, self.depth_limit - depth_left);
        }
        if depth_left == 0 {
            return 0;
        }

        let mover = if maximizing {
            computer
        } else {
            computer.opponent()
        };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for position in board.empty_positions() {
            let child = board.with_move_unchecked(position, mover);
            let score = self.search(&child, computer, depth_left - 1, !maximizing, alpha, beta);
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

impl OpponentPolicy for MinimaxPolicy {
    #[instrument(skip(self, board), fields(mark = %mark, depth_limit = self.depth_limit))]
    fn choose_move(&mut self, board: &Board, mark: Mark) -> Result<usize, NoMovesAvailable> {
        let open = board.empty_positions();
        if open.is_empty() {
            return Err(NoMovesAvailable);
        }

        // First strict improvement wins ties, so the pick is deterministic.
        let mut best_position = open[0];
        let mut best_score = i32::MIN;
        for &position in &open {
            let child = board.with_move_unchecked(position, mark);
            let score = self.search(
                &child,
                mark,
                self.depth_limit.saturating_sub(1),
                false,
                i32::MIN,
                i32::MAX,
            );
            if score > best_score {
                best_score = score;
                best_position = position;
            }
        }
        debug!(position = best_position, score = best_score, "Search complete");
        Ok(best_position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Layout;

    fn classic_policy(depth: usize) -> MinimaxPolicy {
        MinimaxPolicy::new(WinRule::classic(), Polarity::Normal, depth)
    }

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
    fn test_takes_immediate_win() {
        // O completes the middle column at 7.
        let board = board_from(&[0, 2, 6], &[1, 4]);
        let mut policy = classic_policy(9);
        assert_eq!(policy.choose_move(&board, Mark::O), Ok(7));
    }

    #[test]
    fn test_blocks_immediate_loss() {
        // X threatens the top row at 2.
        let board = board_from(&[0, 1], &[4]);
        let mut policy = classic_policy(9);
        assert_eq!(policy.choose_move(&board, Mark::O), Ok(2));
    }

    #[test]
    fn test_prefers_win_over_block() {
        // Both sides threaten; O must take its own win at 5.
        let board = board_from(&[0, 1, 8], &[3, 4]);
        let mut policy = classic_policy(9);
        assert_eq!(policy.choose_move(&board, Mark::O), Ok(5));
    }

    #[test]
    fn test_wins_instead_of_settling_for_draw() {
        // O can win now at 5; blocking X at 2 only reaches a drawn board.
        let board = board_from(&[0, 1, 6, 7], &[3, 4, 8]);
        let mut policy = classic_policy(9);
        assert_eq!(policy.choose_move(&board, Mark::O), Ok(5));
    }

    #[test]
    fn test_depth_adjusted_terminal_scores() {
        let policy = classic_policy(9);
        let o_win = GameOutcome::Win(Mark::O);
        let x_win = GameOutcome::Win(Mark::X);
        // Faster wins score higher, slower losses score higher.
        assert!(
            policy.terminal_score(o_win, Mark::O, 1) > policy.terminal_score(o_win, Mark::O, 3)
        );
        assert!(
            policy.terminal_score(x_win, Mark::O, 5) > policy.terminal_score(x_win, Mark::O, 1)
        );
        assert_eq!(policy.terminal_score(GameOutcome::Draw, Mark::O, 4), 0);
    }

    #[test]
    fn test_misere_avoids_completing_own_line() {
        // Under misère, finishing the middle row would hand X the win.
        let rule = WinRule::classic();
        let mut policy = MinimaxPolicy::new(rule, Polarity::Misere, 9);
        let board = board_from(&[0, 1, 8], &[3, 4]);
        let position = policy.choose_move(&board, Mark::O).unwrap();
        assert_ne!(position, 5, "misère search must not finish its own line");
    }

    #[test]
    fn test_self_play_from_empty_board_draws() {
        let rule = WinRule::classic();
        let layout = Layout::classic();
        let mut x_policy = MinimaxPolicy::new(rule.clone(), Polarity::Normal, 9);
        let mut o_policy = MinimaxPolicy::new(rule.clone(), Polarity::Normal, 9);
        let mut board = Board::new(layout);
        let mut mover = Mark::X;
        loop {
            match evaluate(&board, &rule, Polarity::Normal) {
                GameOutcome::InProgress => {}
                outcome => {
                    assert_eq!(outcome, GameOutcome::Draw);
                    break;
                }
            }
            // Both sides maximize their own mark.
            let policy = match mover {
                Mark::X => &mut x_policy,
                Mark::O => &mut o_policy,
            };
            let position = policy.choose_move(&board, mover).unwrap();
            board.place(position, mover).unwrap();
            mover = mover.opponent();
        }
    }

    #[test]
    fn test_never_loses_to_random_on_classic() {
        use crate::policies::RandomPolicy;
        for seed in 0..20 {
            let rule = WinRule::classic();
            let mut human = RandomPolicy::seeded(seed);
            let mut computer = MinimaxPolicy::new(rule.clone(), Polarity::Normal, 9);
            let mut board = Board::new(Layout::classic());
            let mut mover = Mark::X;
            let outcome = loop {
                match evaluate(&board, &rule, Polarity::Normal) {
                    GameOutcome::InProgress => {}
                    outcome => break outcome,
                }
                let position = match mover {
                    Mark::X => human.choose_move(&board, mover).unwrap(),
                    Mark::O => computer.choose_move(&board, mover).unwrap(),
                };
                board.place(position, mover).unwrap();
                mover = mover.opponent();
            };
            assert_ne!(
                outcome,
                GameOutcome::Win(Mark::X),
                "seed {seed} let the random side win"
            );
        }
    }

    #[test]
    fn test_shallow_depth_still_sees_immediate_win_on_five_by_five() {
        let mut board = Board::new(Layout::five_by_five());
        // O holds 0, 1, 2; 3 finishes the window. X marks sit elsewhere.
        for &pos in &[0, 1, 2] {
            board.place(pos, Mark::O).unwrap();
        }
        for &pos in &[10, 11, 12] {
            board.place(pos, Mark::X).unwrap();
        }
        let mut policy = MinimaxPolicy::new(WinRule::five_by_five(), Polarity::Normal, 4);
        assert_eq!(policy.choose_move(&board, Mark::O), Ok(3));
    }

    #[test]
    fn test_shallow_depth_blocks_on_five_by_five() {
        let mut board = Board::new(Layout::five_by_five());
        // X holds 5, 6, 7 and would finish at 8; O has no win of its own.
        for &pos in &[5, 6, 7] {
            board.place(pos, Mark::X).unwrap();
        }
        for &pos in &[20, 21] {
            board.place(pos, Mark::O).unwrap();
        }
        let mut policy = MinimaxPolicy::new(WinRule::five_by_five(), Polarity::Normal, 4);
        assert_eq!(policy.choose_move(&board, Mark::O), Ok(8));
    }

    #[test]
    fn test_pyramid_takes_center_column_win() {
        let mut board = Board::new(Layout::pyramid());
        for &pos in &[2, 7] {
            board.place(pos, Mark::O).unwrap();
        }
        for &pos in &[6, 8] {
            board.place(pos, Mark::X).unwrap();
        }
        let mut policy = MinimaxPolicy::new(WinRule::pyramid(), Polarity::Normal, 9);
        assert_eq!(policy.choose_move(&board, Mark::O), Ok(12));
    }
}
