//! Serializable view of a session for the presentation layer

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    gridworld::{Grid, Position, RewardConfig},
    q_learning::{QTable, Settings, StepTrace, UserQTable},
};

/// Everything a front end needs to draw the lab at one moment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub grid: Grid,
    pub agent: Position,
    pub start: Position,
    pub settings: Settings,
    pub rewards: RewardConfig,
    pub reference_table: QTable,
    pub user_table: UserQTable,
    /// Newest first
    pub log: Vec<String>,
    pub last_step: Option<StepTrace>,
    pub can_undo: bool,
    pub editing: bool,
}

impl SessionSnapshot {
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
