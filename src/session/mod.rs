//! Lab session: the single controller behind the presentation layer
//!
//! A [`LabSession`] owns all mutable state of one learner's exercise and
//! exposes it through methods; nothing lives in globals.

pub mod history;
pub mod lab;
pub mod snapshot;

pub use history::{History, HistoryEntry};
pub use lab::{GOAL_LOG_LINE, LabSession};
pub use snapshot::SessionSnapshot;
