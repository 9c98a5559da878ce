//! Uniform random move selection.

use super::{NoMovesAvailable, OpponentPolicy};
use crate::board::Board;
use crate::types::Mark;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Picks uniformly among open cells. The Easy tier of every variant.
#[derive(Debug)]
pub struct RandomPolicy {
    /// Source of move randomness.
    rng: StdRng,
}

impl RandomPolicy {
    /// Creates a policy seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a policy with a fixed seed for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl OpponentPolicy for RandomPolicy {
    #[instrument(skip(self, board), fields(mark = %mark))]
    fn choose_move(&mut self, board: &Board, mark: Mark) -> Result<usize, NoMovesAvailable> {
        let open = board.empty_positions();
        if open.is_empty() {
            return Err(NoMovesAvailable);
        }
        let position = open[self.rng.random_range(0..open.len())];
        debug!(position, candidates = open.len(), "Random move selected");
        Ok(position)
    }
}
