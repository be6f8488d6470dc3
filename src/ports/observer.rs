//! Observer port - watching a lab session as it runs
//!
//! Observers receive step traces, episode restarts, undos and structural
//! resets without coupling the session to a particular output (logs, UI
//! widgets, test recorders).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Result, gridworld::Position, q_learning::StepTrace};

/// Why a session discarded its tables and history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetReason {
    /// Explicit table reset requested by the learner
    Manual,
    /// Grid dimensions changed
    Resize,
    /// A cell was rotated or overwritten
    CellEdit,
}

impl fmt::Display for ResetReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResetReason::Manual => f.write_str("manual"),
            ResetReason::Resize => f.write_str("resize"),
            ResetReason::CellEdit => f.write_str("cell edit"),
        }
    }
}

/// Observer trait for monitoring a lab session
///
/// # Event Sequence
///
/// For each executed step:
/// 1. `on_step(trace)` - after the reference table was updated
/// 2. `on_goal_reached(start)` - only when the destination was a goal
///
/// `on_undo` fires after a snapshot was restored, `on_reset` after a
/// structural reset cleared tables and history.
///
/// # Examples
///
/// ```
/// use qlab::{ports::LabObserver, q_learning::StepTrace};
///
/// struct StepCounter {
///     steps: usize,
/// }
///
/// impl LabObserver for StepCounter {
///     fn on_step(&mut self, _trace: &StepTrace) -> qlab::Result<()> {
///         self.steps += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait LabObserver: Send {
    /// Called once per executed step.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn on_step(&mut self, _trace: &StepTrace) -> Result<()> {
        Ok(())
    }

    /// Called when a step ended on a goal; `restart` is where the agent was sent back to.
    fn on_goal_reached(&mut self, _restart: Position) -> Result<()> {
        Ok(())
    }

    /// Called after undo restored the agent to `restored`.
    fn on_undo(&mut self, _restored: Position) -> Result<()> {
        Ok(())
    }

    /// Called after tables, log and history were cleared.
    fn on_reset(&mut self, _reason: ResetReason) -> Result<()> {
        Ok(())
    }
}
