//! The Among Sus variant: score-based S-U-S pattern play.
//!
//! Outside the line-win model: completing the palindrome S-U-S along any
//! of the eight classic lines scores a point for the mover, the game runs
//! until the grid is full, and the higher score wins. The human plays S,
//! the computer plays U, and the Easy-to-Hard ratchet works exactly as in
//! the line variants.

use crate::board::IllegalMove;
use crate::policies::NoMovesAvailable;
use crate::session::{MatchError, ProgressSink};
use crate::types::{ActiveSide, Tier};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Progress-store identifier of the variant.
pub const SUS_GAME_ID: &str = "Among Sus";

/// The eight candidate lines, each read in declared order.
const PATTERNS: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Letter placed in the Sus grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum SusLetter {
    /// The human's letter, bookending every pattern.
    S,
    /// The computer's letter, the middle of every pattern.
    U,
}

impl SusLetter {
    /// Returns the other side's letter.
    pub fn opponent(self) -> Self {
        match self {
            SusLetter::S => SusLetter::U,
            SusLetter::U => SusLetter::S,
        }
    }
}

/// 3x3 letter grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SusBoard {
    /// Cells in row-major order.
    cells: [Option<SusLetter>; 9],
}

impl SusBoard {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self { cells: [None; 9] }
    }

    /// The letter at `position`, if any.
    pub fn letter(&self, position: usize) -> Option<SusLetter> {
        self.cells.get(position).copied().flatten()
    }

    /// Places `letter` at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove`] and leaves the grid unchanged when the
    /// position is out of range or already taken.
    pub fn place(&mut self, position: usize, letter: SusLetter) -> Result<(), IllegalMove> {
        if position >= self.cells.len() {
            return Err(IllegalMove::OutOfBounds { position });
        }
        if self.cells[position].is_some() {
            return Err(IllegalMove::Occupied { position });
        }
        self.cells[position] = Some(letter);
        Ok(())
    }

    /// Positions with no letter, in row-major order.
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(pos, cell)| cell.is_none().then_some(pos))
            .collect()
    }

    /// Whether every cell holds a letter.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Number of completed patterns running through `position`.
    ///
    /// A pattern through a just-filled cell cannot have existed before
    /// the fill, so this is exactly the move's newly scored count.
    pub fn patterns_through(&self, position: usize) -> usize {
        PATTERNS
            .iter()
            .filter(|line| line.contains(&position) && self.reads_sus(line))
            .count()
    }

    /// How many patterns placing `letter` at `position` would complete.
    ///
    /// `position` must be empty; this is the probe behind the Hard tier.
    pub fn placement_scores(&self, position: usize, letter: SusLetter) -> usize {
        debug_assert!(self.letter(position).is_none());
        let mut probe = self.clone();
        probe.cells[position] = Some(letter);
        probe.patterns_through(position)
    }

    fn reads_sus(&self, line: &[usize; 3]) -> bool {
        self.letter(line[0]) == Some(SusLetter::S)
            && self.letter(line[1]) == Some(SusLetter::U)
            && self.letter(line[2]) == Some(SusLetter::S)
    }
}

impl Default for SusBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a Sus game; decided only once the grid is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SusOutcome {
    /// Cells remain.
    InProgress,
    /// The human finished with the strictly higher score.
    HumanWins,
    /// The computer finished with the strictly higher score.
    ComputerWins,
    /// Scores came out equal.
    Tie,
}

impl SusOutcome {
    /// Whether the game has ended.
    pub fn is_terminal(self) -> bool {
        !matches!(self, SusOutcome::InProgress)
    }
}

/// A human-versus-computer Sus match.
pub struct SusSession {
    /// Current grid.
    board: SusBoard,
    /// Patterns the human has completed.
    human_score: u32,
    /// Patterns the computer has completed.
    computer_score: u32,
    /// Side allowed to move next.
    active: ActiveSide,
    /// Outcome of the current game.
    outcome: SusOutcome,
    /// Current opponent strength.
    tier: Tier,
    /// Randomness for the Easy tier and the Hard tier's fallback.
    rng: StdRng,
    /// Win reporting collaborator.
    sink: Box<dyn ProgressSink>,
}

impl SusSession {
    /// Starts a match at `tier`; the human opens.
    #[instrument(skip(sink), fields(tier = %tier))]
    pub fn new(tier: Tier, sink: Box<dyn ProgressSink>) -> Self {
        info!("Starting Sus match");
        Self {
            board: SusBoard::new(),
            human_score: 0,
            computer_score: 0,
            active: ActiveSide::Human,
            outcome: SusOutcome::InProgress,
            tier,
            rng: StdRng::from_os_rng(),
            sink,
        }
    }

    /// Starts a match with seeded opponent randomness.
    pub fn seeded(tier: Tier, sink: Box<dyn ProgressSink>, seed: u64) -> Self {
        let mut session = Self::new(tier, sink);
        session.rng = StdRng::seed_from_u64(seed);
        session
    }

    /// Places the human's S and credits any completed patterns.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError`] when the game is over, it is not the
    /// human's turn, or the cell is taken. State is unchanged on error.
    #[instrument(skip(self), fields(position))]
    pub fn player_move(&mut self, position: usize) -> Result<SusOutcome, MatchError> {
        self.ensure_turn(ActiveSide::Human)?;
        self.board.place(position, SusLetter::S)?;
        let scored = self.board.patterns_through(position) as u32;
        self.human_score += scored;
        debug!(position, scored, "Player letter placed");
        Ok(self.settle())
    }

    /// Computes and applies the computer's U.
    ///
    /// At Hard the computer first takes a cell completing its own
    /// pattern, then denies a cell where the human's S would complete
    /// one, then falls back to random; at Easy it always plays random.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError`] when the game is over or the human is
    /// still active.
    #[instrument(skip(self), fields(tier = %self.tier))]
    pub fn computer_turn(&mut self) -> Result<(usize, SusOutcome), MatchError> {
        self.ensure_turn(ActiveSide::Computer)?;
        let position = self.pick_move()?;
        self.board.place(position, SusLetter::U)?;
        let scored = self.board.patterns_through(position) as u32;
        self.computer_score += scored;
        debug!(position, scored, "Computer letter placed");
        Ok((position, self.settle()))
    }

    /// Discards the game and starts fresh at the same tier.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Sus board reset");
        self.board = SusBoard::new();
        self.human_score = 0;
        self.computer_score = 0;
        self.active = ActiveSide::Human;
        self.outcome = SusOutcome::InProgress;
    }

    fn ensure_turn(&self, side: ActiveSide) -> Result<(), MatchError> {
        if self.outcome.is_terminal() {
            warn!(outcome = ?self.outcome, "Move after game end rejected");
            return Err(MatchError::Finished);
        }
        if self.active != side {
            warn!(active = %self.active, "Out-of-turn move rejected");
            return Err(match side {
                ActiveSide::Human => MatchError::NotPlayersTurn,
                ActiveSide::Computer => MatchError::NotComputersTurn,
            });
        }
        Ok(())
    }

    fn pick_move(&mut self) -> Result<usize, NoMovesAvailable> {
        let open = self.board.empty_positions();
        if open.is_empty() {
            return Err(NoMovesAvailable);
        }
        if self.tier == Tier::Hard {
            // Own completions first, then denying the human's.
            for letter in [SusLetter::U, SusLetter::S] {
                for &position in &open {
                    if self.board.placement_scores(position, letter) > 0 {
                        debug!(position, probe = %letter, "Pattern completion found");
                        return Ok(position);
                    }
                }
            }
        }
        Ok(open[self.rng.random_range(0..open.len())])
    }

    fn settle(&mut self) -> SusOutcome {
        let outcome = if !self.board.is_full() {
            SusOutcome::InProgress
        } else if self.human_score > self.computer_score {
            SusOutcome::HumanWins
        } else if self.computer_score > self.human_score {
            SusOutcome::ComputerWins
        } else {
            SusOutcome::Tie
        };
        self.outcome = outcome;
        match outcome {
            SusOutcome::InProgress => {
                self.active = match self.active {
                    ActiveSide::Human => ActiveSide::Computer,
                    ActiveSide::Computer => ActiveSide::Human,
                };
            }
            SusOutcome::HumanWins => {
                info!(
                    human = self.human_score,
                    computer = self.computer_score,
                    "Human outscored the computer"
                );
                if self.tier == Tier::Easy {
                    info!("Easy tier beaten, promoting to Hard");
                    self.sink.record_win(SUS_GAME_ID);
                    self.tier = Tier::Hard;
                    self.reset();
                }
            }
            SusOutcome::ComputerWins | SusOutcome::Tie => {
                info!(
                    human = self.human_score,
                    computer = self.computer_score,
                    "Grid full"
                );
            }
        }
        outcome
    }

    /// Current grid.
    pub fn board(&self) -> &SusBoard {
        &self.board
    }

    /// Patterns the human has completed.
    pub fn human_score(&self) -> u32 {
        self.human_score
    }

    /// Patterns the computer has completed.
    pub fn computer_score(&self) -> u32 {
        self.computer_score
    }

    /// Side allowed to move next.
    pub fn active(&self) -> ActiveSide {
        self.active
    }

    /// Outcome of the current game.
    pub fn outcome(&self) -> SusOutcome {
        self.outcome
    }

    /// Current opponent strength.
    pub fn tier(&self) -> Tier {
        self.tier
    }
}
