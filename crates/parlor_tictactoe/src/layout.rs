//! Board shapes: grid dimensions plus the playable-cell mask.

use serde::{Deserialize, Serialize};

/// The shape of a board.
///
/// Cells are addressed by flat index in row-major order. Irregular shapes
/// such as the pyramid mark some coordinates as non-playable; those cells
/// are permanently inert and excluded from move generation and win checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Number of rows.
    rows: usize,
    /// Number of columns.
    cols: usize,
    /// Playability mask, one entry per cell in row-major order.
    playable: Vec<bool>,
}

impl Layout {
    /// Creates a rectangular layout with every cell playable.
    pub fn rectangular(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            playable: vec![true; rows * cols],
        }
    }

    /// Creates a layout where only the listed `(row, col)` coordinates are
    /// playable; everything else is inert.
    pub fn sparse(rows: usize, cols: usize, playable_coords: &[(usize, usize)]) -> Self {
        let mut playable = vec![false; rows * cols];
        for &(row, col) in playable_coords {
            if row < rows && col < cols {
                playable[row * cols + col] = true;
            }
        }
        Self {
            rows,
            cols,
            playable,
        }
    }

    /// The classic 3x3 grid.
    pub fn classic() -> Self {
        Self::rectangular(3, 3)
    }

    /// The 5x5 grid.
    pub fn five_by_five() -> Self {
        Self::rectangular(5, 5)
    }

    /// The pyramid shape: a 3x5 grid playable only at the apex cell, the
    /// middle three cells of the second row, and the full bottom row.
    pub fn pyramid() -> Self {
        Self::sparse(
            3,
            5,
            &[
                (0, 2),
                (1, 1),
                (1, 2),
                (1, 3),
                (2, 0),
                (2, 1),
                (2, 2),
                (2, 3),
                (2, 4),
            ],
        )
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total cell count, inert cells included.
    pub fn cell_count(&self) -> usize {
        self.playable.len()
    }

    /// Flat index of a `(row, col)` coordinate.
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Whether `position` addresses a cell of the grid at all.
    pub fn contains(&self, position: usize) -> bool {
        position < self.playable.len()
    }

    /// Whether `position` is a playable cell.
    ///
    /// Out-of-range positions are not playable.
    pub fn is_playable(&self, position: usize) -> bool {
        self.playable.get(position).copied().unwrap_or(false)
    }

    /// Flat indices of all playable cells, in row-major order.
    pub fn playable_positions(&self) -> Vec<usize> {
        self.playable
            .iter()
            .enumerate()
            .filter_map(|(pos, &open)| open.then_some(pos))
            .collect()
    }

    /// Number of playable cells.
    pub fn playable_count(&self) -> usize {
        self.playable.iter().filter(|&&open| open).count()
    }
}
