//! Adapters implementing domain ports.
//!
//! Concrete observers for [`crate::ports::LabObserver`]: one that forwards
//! events to `tracing`, one that records them in memory.

pub mod recording_observer;
pub mod tracing_observer;

pub use recording_observer::{LabEvent, RecordingObserver};
pub use tracing_observer::TracingObserver;
