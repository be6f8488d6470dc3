//! Grid world environment: cells, rewards and the transition model

pub mod cell;
pub mod grid;
pub mod position;
pub mod rewards;
pub mod transition;

pub use cell::{Cell, CellType};
pub use grid::{Grid, MAX_SIDE, MIN_SIDE, clamp_side};
pub use position::{Action, Position};
pub use rewards::{RewardConfig, RewardKind};
pub use transition::next_position;
