//! Global goal/trap reward configuration

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::cell::CellType;

/// Which configured reward is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardKind {
    Goal,
    Trap,
}

impl RewardKind {
    /// Cell type whose reward follows this setting.
    pub fn cell_type(self) -> CellType {
        match self {
            RewardKind::Goal => CellType::Goal,
            RewardKind::Trap => CellType::Trap,
        }
    }
}

impl fmt::Display for RewardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RewardKind::Goal => f.write_str("goal"),
            RewardKind::Trap => f.write_str("trap"),
        }
    }
}

impl FromStr for RewardKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "goal" => Ok(RewardKind::Goal),
            "trap" => Ok(RewardKind::Trap),
            _ => Err(crate::Error::UnknownRewardKind {
                input: s.to_string(),
            }),
        }
    }
}

/// Scalars backing every goal and trap cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RewardConfig {
    pub goal: f64,
    pub trap: f64,
}

impl RewardConfig {
    pub const DEFAULT_GOAL: f64 = 100.0;
    pub const DEFAULT_TRAP: f64 = -10.0;

    pub fn new(goal: f64, trap: f64) -> Self {
        Self { goal, trap }
    }

    pub fn get(&self, kind: RewardKind) -> f64 {
        match kind {
            RewardKind::Goal => self.goal,
            RewardKind::Trap => self.trap,
        }
    }

    pub fn set(&mut self, kind: RewardKind, value: f64) {
        match kind {
            RewardKind::Goal => self.goal = value,
            RewardKind::Trap => self.trap = value,
        }
    }

    /// Reward a freshly placed cell of `kind` receives.
    pub fn reward_for(&self, kind: CellType) -> f64 {
        match kind {
            CellType::Goal => self.goal,
            CellType::Trap => self.trap,
            CellType::Empty | CellType::Wall | CellType::Start => 0.0,
        }
    }
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_GOAL, Self::DEFAULT_TRAP)
    }
}
