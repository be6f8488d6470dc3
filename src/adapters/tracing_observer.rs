//! Observer that forwards session events to `tracing`.

use tracing::{debug, info};

use crate::{
    Result,
    gridworld::Position,
    ports::{LabObserver, ResetReason},
    q_learning::StepTrace,
};

/// Emits one `debug` event per step and `info` events for episode
/// boundaries, undo and resets.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl TracingObserver {
    pub fn new() -> Self {
        Self
    }
}

impl LabObserver for TracingObserver {
    fn on_step(&mut self, trace: &StepTrace) -> Result<()> {
        debug!(
            state = %trace.state,
            action = %trace.action,
            reward = trace.reward,
            next_state = %trace.next_state,
            old_q = trace.old_q,
            max_next_q = trace.max_next_q,
            target = trace.target,
            result = trace.result,
            "q-learning step"
        );
        Ok(())
    }

    fn on_goal_reached(&mut self, restart: Position) -> Result<()> {
        info!(restart = %restart, "goal reached, episode restarts");
        Ok(())
    }

    fn on_undo(&mut self, restored: Position) -> Result<()> {
        info!(agent = %restored, "step undone");
        Ok(())
    }

    fn on_reset(&mut self, reason: ResetReason) -> Result<()> {
        info!(%reason, "tables and history reset");
        Ok(())
    }
}
