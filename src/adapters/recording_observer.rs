//! In-memory observer for tests and embedding front ends.

use std::sync::{Arc, Mutex, PoisonError};

use crate::{
    Result,
    gridworld::Position,
    ports::{LabObserver, ResetReason},
    q_learning::StepTrace,
};

/// Event captured by [`RecordingObserver`]
#[derive(Debug, Clone, PartialEq)]
pub enum LabEvent {
    Step(StepTrace),
    GoalReached(Position),
    Undo(Position),
    Reset(ResetReason),
}

/// Records every event in order.
///
/// Clones share the same storage, so a test can keep one handle and give
/// the other to the session.
///
/// # Examples
///
/// ```
/// use qlab::adapters::{LabEvent, RecordingObserver};
/// use qlab::gridworld::Action;
/// use qlab::session::LabSession;
///
/// let recorder = RecordingObserver::new();
/// let mut session = LabSession::default();
/// session.add_observer(Box::new(recorder.clone()));
///
/// session.perform_action(Action::Right)?;
/// assert!(matches!(recorder.events()[0], LabEvent::Step(_)));
/// # Ok::<(), qlab::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<LabEvent>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, event: LabEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }

    /// Snapshot of the events recorded so far
    pub fn events(&self) -> Vec<LabEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of step events recorded
    pub fn step_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, LabEvent::Step(_)))
            .count()
    }
}

impl LabObserver for RecordingObserver {
    fn on_step(&mut self, trace: &StepTrace) -> Result<()> {
        self.push(LabEvent::Step(*trace));
        Ok(())
    }

    fn on_goal_reached(&mut self, restart: Position) -> Result<()> {
        self.push(LabEvent::GoalReached(restart));
        Ok(())
    }

    fn on_undo(&mut self, restored: Position) -> Result<()> {
        self.push(LabEvent::Undo(restored));
        Ok(())
    }

    fn on_reset(&mut self, reason: ResetReason) -> Result<()> {
        self.push(LabEvent::Reset(reason));
        Ok(())
    }
}
