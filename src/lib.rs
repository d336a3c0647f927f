//! Payment Tracker Library
//! # Overview
//!
//! Accumulates payment amounts per currency from files loaded at startup and
//! from an interactive line stream, and reports the running totals on a fixed
//! cadence, converted to USD where an exchange rate is known.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Currency, Entry, Snapshot, errors)
//! - [`config`] - Fixed configuration constants and the report cadence
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - The shared accumulation store:
//!   - [`core::traits`] - the `TotalsStore` abstraction
//!   - [`core::store`] - DashMap-backed concurrent implementation
//! - [`io`] - Line parsing, batch loading, interactive reading, console output
//! - [`report`] - Report rendering and the periodic reporter task
//! - [`session`] - Sequencing of the batch phase and the concurrent phase
//!
//! # Input Format
//!
//! Every source uses one `<CODE> <AMOUNT>` entry per line, e.g. `USD 100.50`.
//! Record lines add to the total for their currency; rate lines replace the
//! rate for their currency.
//!
//! # Report Format
//!
//! Each cycle prints a blank line, then one line per currency:
//!
//! ```text
//!
//! USD 150 (USD 19.20)
//! HKD 30
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod report;
pub mod session;
pub mod types;

pub use crate::core::{ConcurrentStore, TotalsStore};
pub use config::ReportConfig;
pub use io::{Console, LoadOutcome, LoadTask};
pub use session::{Session, SessionEnd};
pub use types::{Currency, Entry, InputKind, LineError, Snapshot, StoreError, TrackerError};
