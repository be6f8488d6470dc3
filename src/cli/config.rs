//! Shared configuration arguments for CLI commands

use clap::Args;

use crate::{app::SessionConfig, gridworld::RewardConfig, q_learning::Settings};

/// Session options shared by `run` and `play`
#[derive(Args, Debug, Clone)]
pub struct SessionArgs {
    /// Grid rows (clamped to 2..8)
    #[arg(long, default_value_t = SessionConfig::DEFAULT_ROWS)]
    pub rows: usize,

    /// Grid columns (clamped to 2..8)
    #[arg(long, default_value_t = SessionConfig::DEFAULT_COLS)]
    pub cols: usize,

    /// Learning rate α
    #[arg(long, default_value_t = Settings::DEFAULT_LEARNING_RATE)]
    pub alpha: f64,

    /// Discount factor γ
    #[arg(long, default_value_t = Settings::DEFAULT_DISCOUNT_FACTOR)]
    pub gamma: f64,

    /// Reward of goal cells
    #[arg(long, default_value_t = RewardConfig::DEFAULT_GOAL)]
    pub goal_reward: f64,

    /// Reward of trap cells
    #[arg(long, default_value_t = RewardConfig::DEFAULT_TRAP)]
    pub trap_reward: f64,

    /// Random seed for reproducible random steps
    #[arg(long)]
    pub seed: Option<u64>,
}

impl SessionArgs {
    pub fn to_config(&self) -> SessionConfig {
        let config = SessionConfig::new(self.rows, self.cols)
            .with_learning_rate(self.alpha)
            .with_discount_factor(self.gamma)
            .with_goal_reward(self.goal_reward)
            .with_trap_reward(self.trap_reward);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}
