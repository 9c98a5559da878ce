//! Core domain types shared by every board-game variant.

use serde::{Deserialize, Serialize};

/// Mark belonging to one side of a match.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Mark {
    /// The human player's mark (moves first).
    X,
    /// The computer opponent's mark.
    O,
}

impl Mark {
    /// Returns the other side's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark placed yet.
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

/// Result of evaluating a board against its win rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Moves remain and no line has completed.
    InProgress,
    /// The named mark's side has won.
    Win(Mark),
    /// Every playable cell is occupied with no winner.
    Draw,
}

impl GameOutcome {
    /// Whether the game has ended.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}

/// Opponent strength setting.
///
/// Promotion from [`Tier::Easy`] to [`Tier::Hard`] is a one-way ratchet
/// triggered by the human winning at Easy; sessions never demote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Tier {
    /// Random opponent.
    Easy,
    /// Search or heuristic opponent.
    Hard,
}

/// Which side may move next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum ActiveSide {
    /// The human player (always opens the game).
    Human,
    /// The computer opponent.
    Computer,
}
