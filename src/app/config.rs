//! Configuration types for session creation.

use serde::{Deserialize, Serialize};

use crate::{
    gridworld::{RewardConfig, clamp_side},
    q_learning::Settings,
};

/// Configuration for creating a [`LabSession`](crate::session::LabSession).
///
/// Dimensions are clamped to `[MIN_SIDE, MAX_SIDE]` when the session is built;
/// learning parameters and rewards are taken as given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Grid rows
    pub rows: usize,
    /// Grid columns
    pub cols: usize,
    /// α and γ
    pub settings: Settings,
    /// Goal and trap rewards
    pub rewards: RewardConfig,
    /// Random seed for reproducible random steps
    pub seed: Option<u64>,
}

impl SessionConfig {
    pub const DEFAULT_ROWS: usize = 4;
    pub const DEFAULT_COLS: usize = 4;

    /// Create a configuration for a `rows x cols` grid.
    ///
    /// Uses default values for other parameters:
    /// - α = 0.5, γ = 0.9
    /// - goal reward 100, trap reward -10
    /// - Seed: None (non-deterministic)
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            settings: Settings::default(),
            rewards: RewardConfig::default(),
            seed: None,
        }
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.settings.learning_rate = learning_rate;
        self
    }

    pub fn with_discount_factor(mut self, discount_factor: f64) -> Self {
        self.settings.discount_factor = discount_factor;
        self
    }

    pub fn with_goal_reward(mut self, goal: f64) -> Self {
        self.rewards.goal = goal;
        self
    }

    pub fn with_trap_reward(mut self, trap: f64) -> Self {
        self.rewards.trap = trap;
        self
    }

    /// Set the random seed for deterministic random steps.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Dimensions after clamping: `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        (clamp_side(self.rows), clamp_side(self.cols))
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ROWS, Self::DEFAULT_COLS)
    }
}
