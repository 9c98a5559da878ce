//! Board state and validated move application.

use crate::layout::Layout;
use crate::types::{Cell, Mark};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A move rejected before touching the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum IllegalMove {
    /// The position lies outside the board.
    #[display("position {} is outside the board", position)]
    OutOfBounds {
        /// The rejected position.
        position: usize,
    },
    /// The position already holds a mark.
    #[display("position {} is already occupied", position)]
    Occupied {
        /// The rejected position.
        position: usize,
    },
    /// The position is an inert filler cell of an irregular layout.
    #[display("position {} is not a playable cell", position)]
    Inert {
        /// The rejected position.
        position: usize,
    },
}

/// A board: an ordered cell sequence interpreted through a [`Layout`].
///
/// Cells only ever transition from empty to occupied; the whole board is
/// replaced on reset. Validation happens before mutation, so a rejected
/// move leaves the board untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Shape of the grid.
    layout: Layout,
    /// Cells in row-major order, one per layout coordinate.
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board for the given layout.
    pub fn new(layout: Layout) -> Self {
        let cells = vec![Cell::Empty; layout.cell_count()];
        Self { layout, cells }
    }

    /// The board's layout.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The cell at `position`, or `None` when out of range.
    pub fn get(&self, position: usize) -> Option<Cell> {
        self.cells.get(position).copied()
    }

    /// Whether `position` is a playable cell with no mark on it.
    pub fn is_open(&self, position: usize) -> bool {
        self.layout.is_playable(position) && self.get(position) == Some(Cell::Empty)
    }

    /// Validates a placement without performing it.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove`] when `position` is out of range, inert, or
    /// already occupied.
    pub fn check_move(&self, position: usize) -> Result<(), IllegalMove> {
        if !self.layout.contains(position) {
            return Err(IllegalMove::OutOfBounds { position });
        }
        if !self.layout.is_playable(position) {
            return Err(IllegalMove::Inert { position });
        }
        if self.cells[position] != Cell::Empty {
            return Err(IllegalMove::Occupied { position });
        }
        Ok(())
    }

    /// Places `mark` at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove`] and leaves the board unchanged when the
    /// placement is invalid.
    pub fn place(&mut self, position: usize, mark: Mark) -> Result<(), IllegalMove> {
        self.check_move(position)?;
        self.cells[position] = Cell::Occupied(mark);
        Ok(())
    }

    /// Returns a copy of the board with `mark` placed at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove`] when the placement is invalid.
    pub fn with_move(&self, position: usize, mark: Mark) -> Result<Self, IllegalMove> {
        let mut next = self.clone();
        next.place(position, mark)?;
        Ok(next)
    }

    /// Copy-with-placement for positions already known to be open.
    ///
    /// Used by search internals that enumerate open positions first.
    pub(crate) fn with_move_unchecked(&self, position: usize, mark: Mark) -> Self {
        debug_assert!(self.is_open(position));
        let mut next = self.clone();
        next.cells[position] = Cell::Occupied(mark);
        next
    }

    /// Flat indices of all open cells, in row-major order.
    pub fn empty_positions(&self) -> Vec<usize> {
        self.layout
            .playable_positions()
            .into_iter()
            .filter(|&pos| self.cells[pos] == Cell::Empty)
            .collect()
    }

    /// Whether every playable cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.layout
            .playable_positions()
            .into_iter()
            .all(|pos| self.cells[pos] != Cell::Empty)
    }

    /// All cells in row-major order, inert cells included.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Open cells render as `.`, inert cells as a space.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in 0..self.layout.rows() {
            for col in 0..self.layout.cols() {
                let pos = self.layout.index(row, col);
                let symbol = if !self.layout.is_playable(pos) {
                    ' '
                } else {
                    match self.cells[pos] {
                        Cell::Empty => '.',
                        Cell::Occupied(Mark::X) => 'X',
                        Cell::Occupied(Mark::O) => 'O',
                    }
                };
                out.push(symbol);
                if col + 1 < self.layout.cols() {
                    out.push(' ');
                }
            }
            if row + 1 < self.layout.rows() {
                out.push('\n');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_on_empty_cell() {
        let mut board = Board::new(Layout::classic());
        assert_eq!(board.place(4, Mark::X), Ok(()));
        assert_eq!(board.get(4), Some(Cell::Occupied(Mark::X)));
    }

    #[test]
    fn test_place_rejects_occupied() {
        let mut board = Board::new(Layout::classic());
        board.place(4, Mark::X).unwrap();
        assert_eq!(
            board.place(4, Mark::O),
            Err(IllegalMove::Occupied { position: 4 })
        );
        // Rejection left the original mark in place.
        assert_eq!(board.get(4), Some(Cell::Occupied(Mark::X)));
    }

    #[test]
    fn test_place_rejects_out_of_bounds() {
        let mut board = Board::new(Layout::classic());
        assert_eq!(
            board.place(9, Mark::X),
            Err(IllegalMove::OutOfBounds { position: 9 })
        );
    }

    #[test]
    fn test_place_rejects_inert_cell() {
        let mut board = Board::new(Layout::pyramid());
        assert_eq!(
            board.place(0, Mark::X),
            Err(IllegalMove::Inert { position: 0 })
        );
        assert_eq!(board.get(0), Some(Cell::Empty));
    }

    #[test]
    fn test_with_move_leaves_original_untouched() {
        let board = Board::new(Layout::classic());
        let next = board.with_move(0, Mark::X).unwrap();
        assert_eq!(board.get(0), Some(Cell::Empty));
        assert_eq!(next.get(0), Some(Cell::Occupied(Mark::X)));
    }

    #[test]
    fn test_empty_positions_shrink_as_marks_land() {
        let mut board = Board::new(Layout::classic());
        assert_eq!(board.empty_positions().len(), 9);
        board.place(0, Mark::X).unwrap();
        board.place(8, Mark::O).unwrap();
        let open = board.empty_positions();
        assert_eq!(open.len(), 7);
        assert!(!open.contains(&0));
        assert!(!open.contains(&8));
    }

    #[test]
    fn test_pyramid_empty_positions_skip_inert() {
        let board = Board::new(Layout::pyramid());
        assert_eq!(board.empty_positions(), vec![2, 6, 7, 8, 10, 11, 12, 13, 14]);
    }

    #[test]
    fn test_is_full_counts_only_playable() {
        let mut board = Board::new(Layout::pyramid());
        for (i, pos) in [2, 6, 7, 8, 10, 11, 12, 13, 14].into_iter().enumerate() {
            assert!(!board.is_full());
            let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
            board.place(pos, mark).unwrap();
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_render_marks_and_inert() {
        let mut board = Board::new(Layout::pyramid());
        board.place(2, Mark::X).unwrap();
        board.place(12, Mark::O).unwrap();
        let rendered = board.render();
        assert!(rendered.contains('X'));
        assert!(rendered.contains('O'));
        assert!(rendered.starts_with("    X"));
    }

    #[test]
    fn test_board_serializes() {
        let mut board = Board::new(Layout::classic());
        board.place(4, Mark::X).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }
}
