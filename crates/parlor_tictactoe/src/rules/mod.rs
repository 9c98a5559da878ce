//! Win rules and terminal detection.
//!
//! A [`WinRule`] is an ordered set of lines; [`evaluate`] resolves a board
//! into a [`GameOutcome`] by scanning those lines and then checking for a
//! full board. [`Polarity`] decides whether completing a line wins or
//! loses for the mark that made it.

mod win;

pub use win::{completed_line, completes};

use crate::board::Board;
use crate::types::GameOutcome;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Whether completing a line wins or loses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum Polarity {
    /// Completing a line wins for the mark that made it.
    Normal,
    /// Completing a line loses; the other side is declared winner.
    Misere,
}

/// An ordered set of winning lines over flat board positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinRule {
    /// Lines in declared scan order.
    lines: Vec<Vec<usize>>,
}

impl WinRule {
    /// Creates a rule from explicit lines.
    pub fn new(lines: Vec<Vec<usize>>) -> Self {
        Self { lines }
    }

    /// The eight lines of the classic 3x3 grid: three rows, three columns,
    /// two diagonals.
    pub fn classic() -> Self {
        Self::new(vec![
            vec![0, 1, 2],
            vec![3, 4, 5],
            vec![6, 7, 8],
            vec![0, 3, 6],
            vec![1, 4, 7],
            vec![2, 5, 8],
            vec![0, 4, 8],
            vec![2, 4, 6],
        ])
    }

    /// The twenty-eight run-of-four windows of the 5x5 grid: ten
    /// horizontal, ten vertical, four down-right, four down-left.
    pub fn five_by_five() -> Self {
        let mut lines = Vec::with_capacity(28);
        for row in 0..5 {
            for col in 0..=1 {
                lines.push((0..4).map(|k| row * 5 + col + k).collect());
            }
        }
        for col in 0..5 {
            for row in 0..=1 {
                lines.push((0..4).map(|k| (row + k) * 5 + col).collect());
            }
        }
        for row in 0..=1 {
            for col in 0..=1 {
                lines.push((0..4).map(|k| (row + k) * 5 + col + k).collect());
            }
        }
        for row in 0..=1 {
            for col in 3..=4 {
                lines.push((0..4).map(|k| (row + k) * 5 + col - k).collect());
            }
        }
        Self::new(lines)
    }

    /// The seven lines of the pyramid shape, over its 3x5 flat indexing:
    /// the center column, the middle and bottom rows' runs of three, and
    /// the two slanted edges.
    pub fn pyramid() -> Self {
        Self::new(vec![
            vec![2, 7, 12],
            vec![6, 7, 8],
            vec![10, 11, 12],
            vec![11, 12, 13],
            vec![12, 13, 14],
            vec![2, 6, 10],
            vec![2, 8, 14],
        ])
    }

    /// Lines in declared scan order.
    pub fn lines(&self) -> &[Vec<usize>] {
        &self.lines
    }
}

/// Resolves a board into a game outcome.
///
/// Lines are scanned in declared order; the first fully-marked line
/// decides the winner per `polarity`. The result is order-independent
/// because simultaneous completions in legal play always share the
/// mover's mark. With no completed line, a full board is a draw and
/// anything else is still in progress.
#[instrument(skip(board, rule))]
pub fn evaluate(board: &Board, rule: &WinRule, polarity: Polarity) -> GameOutcome {
    if let Some(maker) = completed_line(board, rule) {
        let winner = match polarity {
            Polarity::Normal => maker,
            Polarity::Misere => maker.opponent(),
        };
        return GameOutcome::Win(winner);
    }
    if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
