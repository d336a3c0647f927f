//! Fixed configuration
//!
//! The tracker has no configuration file or environment settings besides
//! `RUST_LOG`. Everything tunable lives here as a constant; the report cadence
//! is wrapped in [`ReportConfig`] so tests can shorten it.

use crate::types::Currency;
use rust_decimal::RoundingStrategy;
use std::time::Duration;
use tracing::warn;

/// Interactive line that ends the session
pub const QUIT_COMMAND: &str = "quit";

/// File name recognized as a payment record file when given alone
pub const RECORD_FILE_NAME: &str = "record.txt";

/// File name recognized as a rate file when given alone
pub const RATE_FILE_NAME: &str = "rate.txt";

/// Currency that rates convert into
pub const REFERENCE_CURRENCY: Currency = Currency::Usd;

/// Fractional digits shown for converted amounts
pub const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// Half-up rounding: midpoints go away from zero
pub const DISPLAY_ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Default interval between two reports
pub const REPORT_INTERVAL: Duration = Duration::from_secs(60);

/// Configuration for the periodic reporter
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportConfig {
    /// Time between two report cycles
    pub interval: Duration,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            interval: REPORT_INTERVAL,
        }
    }
}

impl ReportConfig {
    /// Create a ReportConfig with a custom interval
    ///
    /// A zero interval cannot drive a timer and falls back to the default.
    pub fn new(interval: Duration) -> Self {
        if interval.is_zero() {
            warn!(
                default_ms = REPORT_INTERVAL.as_millis() as u64,
                "Invalid report interval (0), using default"
            );
            return Self::default();
        }

        Self { interval }
    }
}
