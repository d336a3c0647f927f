//! Types module
//!
//! Contains core data structures used throughout the application.
//! - `currency`: the closed set of currency codes
//! - `entry`: parsed lines and the kind of source they came from
//! - `snapshot`: point-in-time copy of the store
//! - `error`: error types for the tracker

pub mod currency;
pub mod entry;
pub mod error;
pub mod snapshot;

pub use currency::Currency;
pub use entry::{Entry, InputKind};
pub use error::{LineError, StoreError, TrackerError};
pub use snapshot::Snapshot;
