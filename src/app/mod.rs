//! Application layer: session configuration.
//!
//! # Usage
//!
//! ```
//! use qlab::app::SessionConfig;
//! use qlab::session::LabSession;
//!
//! let config = SessionConfig::new(5, 6)
//!     .with_learning_rate(0.3)
//!     .with_discount_factor(0.8)
//!     .with_seed(42);
//! let session = LabSession::new(config);
//! assert_eq!(session.grid().cols(), 6);
//! ```

pub mod config;

pub use config::SessionConfig;
