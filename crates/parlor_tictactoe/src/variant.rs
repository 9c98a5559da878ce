//! Named variant configurations for the portal's line-based games.

use crate::layout::Layout;
use crate::policies::{MinimaxPolicy, OnePlyPolicy, OpponentPolicy, RandomPolicy};
use crate::rules::{Polarity, WinRule};
use crate::types::Tier;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Which policy kind serves as a variant's Hard tier.
///
/// The two kinds stay distinct on purpose: full search and the greedy
/// one-ply probe are different products, not strength settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum HardPolicy {
    /// Depth-limited minimax with alpha-beta pruning.
    Minimax,
    /// Win-block-random single lookahead.
    OnePly,
}

/// A named bundle of layout, win rule, polarity, and Hard-tier policy.
///
/// The `id` doubles as the progress-store key for the variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Variant {
    /// Stable identifier, also the display title.
    id: String,
    /// Board shape.
    layout: Layout,
    /// Winning lines.
    win_rule: WinRule,
    /// Win polarity.
    #[getter(skip)]
    polarity: Polarity,
    /// Hard-tier policy kind.
    #[getter(skip)]
    hard_policy: HardPolicy,
    /// Depth limit handed to the minimax Hard tier.
    #[getter(skip)]
    search_depth: usize,
}

impl Variant {
    /// Classic 3x3 tic-tac-toe; exhaustive search at Hard.
    pub fn classic() -> Self {
        Self {
            id: "Tic Tac Toe".to_string(),
            layout: Layout::classic(),
            win_rule: WinRule::classic(),
            polarity: Polarity::Normal,
            hard_policy: HardPolicy::Minimax,
            search_depth: 9,
        }
    }

    /// Reverse 3x3: completing a line loses.
    pub fn misere() -> Self {
        Self {
            id: "XO Special".to_string(),
            layout: Layout::classic(),
            win_rule: WinRule::classic(),
            polarity: Polarity::Misere,
            hard_policy: HardPolicy::Minimax,
            search_depth: 9,
        }
    }

    /// 5x5 grid with run-of-four windows.
    ///
    /// The Hard tier searches a fixed shallow depth so responses stay
    /// snappy; raise it with [`Variant::with_search_depth`] for exact
    /// play.
    pub fn five_by_five() -> Self {
        Self {
            id: "5x5 Grid".to_string(),
            layout: Layout::five_by_five(),
            win_rule: WinRule::five_by_five(),
            polarity: Polarity::Normal,
            hard_policy: HardPolicy::Minimax,
            search_depth: 4,
        }
    }

    /// Pyramid-shaped board with seven lines.
    pub fn pyramid() -> Self {
        Self {
            id: "Pyramid Tic Tac Toe".to_string(),
            layout: Layout::pyramid(),
            win_rule: WinRule::pyramid(),
            polarity: Polarity::Normal,
            hard_policy: HardPolicy::Minimax,
            search_depth: 9,
        }
    }

    /// All built-in line variants in hub order.
    pub fn all() -> Vec<Self> {
        vec![
            Self::classic(),
            Self::misere(),
            Self::pyramid(),
            Self::five_by_five(),
        ]
    }

    /// Win polarity.
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Hard-tier policy kind.
    pub fn hard_policy(&self) -> HardPolicy {
        self.hard_policy
    }

    /// Depth limit handed to the minimax Hard tier.
    pub fn search_depth(&self) -> usize {
        self.search_depth
    }

    /// Overrides the Hard-tier search depth.
    pub fn with_search_depth(mut self, depth: usize) -> Self {
        self.search_depth = depth;
        self
    }

    /// Overrides the Hard-tier policy kind.
    pub fn with_hard_policy(mut self, policy: HardPolicy) -> Self {
        self.hard_policy = policy;
        self
    }

    /// Builds the opponent policy for a tier.
    pub fn build_policy(&self, tier: Tier) -> Box<dyn OpponentPolicy> {
        match tier {
            Tier::Easy => Box::new(RandomPolicy::new()),
            Tier::Hard => match self.hard_policy {
                HardPolicy::Minimax => Box::new(MinimaxPolicy::new(
                    self.win_rule.clone(),
                    self.polarity,
                    self.search_depth,
                )),
                HardPolicy::OnePly => Box::new(OnePlyPolicy::new(self.win_rule.clone())),
            },
        }
    }

    /// Builds the opponent policy for a tier with seeded randomness.
    pub fn build_policy_seeded(&self, tier: Tier, seed: u64) -> Box<dyn OpponentPolicy> {
        match tier {
            Tier::Easy => Box::new(RandomPolicy::seeded(seed)),
            Tier::Hard => match self.hard_policy {
                HardPolicy::Minimax => Box::new(MinimaxPolicy::new(
                    self.win_rule.clone(),
                    self.polarity,
                    self.search_depth,
                )),
                HardPolicy::OnePly => Box::new(OnePlyPolicy::seeded(self.win_rule.clone(), seed)),
            },
        }
    }
}
