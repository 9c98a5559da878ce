//! Line-completion scanning.

use super::WinRule;
use crate::board::Board;
use crate::types::{Cell, Mark};

/// Scans the rule's lines in declared order and returns the mark owning
/// the first fully-marked line, or `None` when no line has completed.
pub fn completed_line(board: &Board, rule: &WinRule) -> Option<Mark> {
    for line in rule.lines() {
        let mut cells = line.iter().map(|&pos| board.get(pos));
        if let Some(Some(Cell::Occupied(mark))) = cells.next() {
            if cells.all(|cell| cell == Some(Cell::Occupied(mark))) {
                return Some(mark);
            }
        }
    }
    None
}

/// Whether placing `mark` at `position` would finish a line.
///
/// The probe behind the one-ply policy's win and block steps; `position`
/// is expected to be open.
pub fn completes(board: &Board, rule: &WinRule, position: usize, mark: Mark) -> bool {
    rule.lines().iter().any(|line| {
        line.contains(&position)
            && line
                .iter()
                .all(|&pos| pos == position || board.get(pos) == Some(Cell::Occupied(mark)))
    })
}
