//! Human-versus-computer match sessions.
//!
//! A [`MatchSession`] owns one board exclusively and enforces the turn
//! order: the human (X) always opens, the computer (O) answers. Wins at
//! the Easy tier promote the session to Hard, report the win through the
//! injected [`ProgressSink`], and reset the board; the promotion is a
//! one-way ratchet.

use crate::board::{Board, IllegalMove};
use crate::policies::{NoMovesAvailable, OpponentPolicy};
use crate::rules::evaluate;
use crate::types::{ActiveSide, GameOutcome, Mark, Tier};
use crate::variant::Variant;
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Receives first-win reports from ratcheting sessions.
///
/// The store behind the sink maps a game identifier to a won flag and a
/// progress percentage; the session only ever announces "the human beat
/// the Easy opponent of this game".
pub trait ProgressSink {
    /// Records that the human beat the Easy opponent of `game_id`.
    fn record_win(&mut self, game_id: &str);
}

/// Sink for casual play that drops every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardProgress;

impl ProgressSink for DiscardProgress {
    fn record_win(&mut self, _game_id: &str) {}
}

/// A session operation rejected without touching state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum MatchError {
    /// The game already reached a terminal outcome.
    #[display("the game is already over")]
    Finished,
    /// A human move arrived while the computer is active.
    #[display("it is not the player's turn")]
    NotPlayersTurn,
    /// A computer turn was requested while the human is active.
    #[display("it is not the computer's turn")]
    NotComputersTurn,
    /// The placement itself was invalid.
    #[display("{}", _0)]
    #[from]
    Illegal(IllegalMove),
    /// The opponent policy found no open cell; terminal detection in the
    /// calling code is broken if this ever surfaces.
    #[display("{}", _0)]
    #[from]
    Exhausted(NoMovesAvailable),
}

/// One recorded move of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedMove {
    /// Mark that moved.
    pub mark: Mark,
    /// Flat position the mark landed on.
    pub position: usize,
}

impl PlayedMove {
    /// Creates a move record.
    pub fn new(mark: Mark, position: usize) -> Self {
        Self { mark, position }
    }
}

/// A human-versus-computer match of one variant.
pub struct MatchSession {
    /// Variant being played.
    pub(crate) variant: Variant,
    /// Current board.
    pub(crate) board: Board,
    /// Side allowed to move next.
    pub(crate) active: ActiveSide,
    /// Outcome of the current game.
    pub(crate) outcome: GameOutcome,
    /// Current opponent strength.
    pub(crate) tier: Tier,
    /// Moves of the current game, in order.
    pub(crate) history: Vec<PlayedMove>,
    /// Opponent decision procedure for the current tier.
    pub(crate) policy: Box<dyn OpponentPolicy>,
    /// Win reporting collaborator.
    pub(crate) sink: Box<dyn ProgressSink>,
    /// Seed reused when the ratchet rebuilds the policy, for reproducible
    /// games.
    pub(crate) seed: Option<u64>,
}

// ─────────────────────────────────────────────────────────────
//  Construction
// ─────────────────────────────────────────────────────────────

impl MatchSession {
    /// Starts a match of `variant` at `tier`; the human opens.
    #[instrument(skip(variant, sink), fields(variant = %variant.id(), tier = %tier))]
    pub fn new(variant: Variant, tier: Tier, sink: Box<dyn ProgressSink>) -> Self {
        info!("Starting match");
        let board = Board::new(variant.layout().clone());
        let policy = variant.build_policy(tier);
        Self {
            variant,
            board,
            active: ActiveSide::Human,
            outcome: GameOutcome::InProgress,
            tier,
            history: Vec::new(),
            policy,
            sink,
            seed: None,
        }
    }

    /// Starts a match with seeded opponent randomness.
    pub fn seeded(variant: Variant, tier: Tier, sink: Box<dyn ProgressSink>, seed: u64) -> Self {
        let mut session = Self::new(variant, tier, sink);
        session.policy = session.variant.build_policy_seeded(tier, seed);
        session.seed = Some(seed);
        session
    }
}

// ─────────────────────────────────────────────────────────────
//  Turn handling
// ─────────────────────────────────────────────────────────────

impl MatchSession {
    /// Applies the human's move.
    ///
    /// On a non-terminal outcome the computer side becomes active. A
    /// human win at Easy fires the ratchet: the win is recorded, the
    /// session promotes to Hard, and the board resets; the returned
    /// outcome still reports the finished game.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError`] when the game is over, it is not the
    /// human's turn, or the placement is illegal. State is unchanged on
    /// error.
    #[instrument(skip(self), fields(variant = %self.variant.id(), position))]
    pub fn player_move(&mut self, position: usize) -> Result<GameOutcome, MatchError> {
        self.ensure_turn(ActiveSide::Human)?;
        self.board.place(position, Mark::X)?;
        self.history.push(PlayedMove::new(Mark::X, position));
        debug!(position, "Player move applied");
        Ok(self.settle())
    }

    /// Computes and applies the computer's move.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError`] when the game is over, the human is still
    /// active, or the policy finds no open cell.
    #[instrument(skip(self), fields(variant = %self.variant.id(), tier = %self.tier))]
    pub fn computer_turn(&mut self) -> Result<(usize, GameOutcome), MatchError> {
        self.ensure_turn(ActiveSide::Computer)?;
        let position = self.policy.choose_move(&self.board, Mark::O)?;
        self.board.place(position, Mark::O)?;
        self.history.push(PlayedMove::new(Mark::O, position));
        debug!(position, "Computer move applied");
        Ok((position, self.settle()))
    }

    /// Discards the current game and starts a fresh one at the same tier.
    #[instrument(skip(self), fields(variant = %self.variant.id()))]
    pub fn reset(&mut self) {
        debug!("Board reset");
        self.board = Board::new(self.variant.layout().clone());
        self.history.clear();
        self.active = ActiveSide::Human;
        self.outcome = GameOutcome::InProgress;
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

    /// Re-evaluates the board and advances the state machine.
    fn settle(&mut self) -> GameOutcome {
        let outcome = evaluate(&self.board, self.variant.win_rule(), self.variant.polarity());
        self.outcome = outcome;
        match outcome {
            GameOutcome::InProgress => {
                self.active = match self.active {
                    ActiveSide::Human => ActiveSide::Computer,
                    ActiveSide::Computer => ActiveSide::Human,
                };
            }
            GameOutcome::Win(mark) => {
                info!(winner = %mark, "Game won");
                if mark == Mark::X && self.tier == Tier::Easy {
                    self.promote();
                }
            }
            GameOutcome::Draw => {
                info!("Game drawn");
            }
        }
        outcome
    }

    /// Fires the one-way ratchet: record, switch to Hard, reset.
    fn promote(&mut self) {
        info!(variant = %self.variant.id(), "Easy tier beaten, promoting to Hard");
        self.sink.record_win(self.variant.id());
        self.tier = Tier::Hard;
        self.policy = match self.seed {
            Some(seed) => self.variant.build_policy_seeded(self.tier, seed),
            None => self.variant.build_policy(self.tier),
        };
        self.reset();
    }
}

// ─────────────────────────────────────────────────────────────
//  Read access
// ─────────────────────────────────────────────────────────────

impl MatchSession {
    /// Variant being played.
    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side allowed to move next.
    pub fn active(&self) -> ActiveSide {
        self.active
    }

    /// Outcome of the current game.
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Current opponent strength.
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Moves of the current game, in order.
    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }
}
