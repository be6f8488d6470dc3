//! Ports (trait boundaries) for external collaborators.
//!
//! The presentation layer talks to the lab through [`crate::session::LabSession`];
//! anything that wants to watch the session as it runs plugs in here.

pub mod observer;

pub use observer::{LabObserver, ResetReason};
