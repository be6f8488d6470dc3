//! Q-learning lab: step-by-step tabular Q-learning on an editable grid world
//!
//! This crate provides:
//! - A grid world with walls, traps, goals and a single start cell
//! - The deterministic transition model (border clamping, wall bounce)
//! - A reference Q-table updated with the weighted Q-learning rule, next to a
//!   learner-editable table that is checked against it
//! - A session controller with full-snapshot undo and episode restarts
//! - A small CLI front end for scripted or interactive use

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod export;
pub mod gridworld;
pub mod ports;
pub mod q_learning;
pub mod session;

pub use app::SessionConfig;
pub use error::{Error, Result};
pub use gridworld::{Action, Cell, CellType, Grid, Position, RewardConfig, RewardKind};
pub use q_learning::{QTable, Settings, StepTrace, UserQTable};
pub use session::{LabSession, SessionSnapshot};
