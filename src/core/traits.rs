//! Core trait for the accumulation store
//!
//! Ingestion sources and the reporter only talk to the store through
//! [`TotalsStore`], so they can share one instance across tasks.

use crate::types::{Currency, Entry, InputKind, Snapshot, StoreError};
use rust_decimal::Decimal;

/// Shared per-currency totals and rates
///
/// All methods take `&self`; implementations synchronize internally and must
/// never expose a partially applied update.
pub trait TotalsStore: Send + Sync {
    /// Add `amount` to the running total for `currency`, inserting it if absent
    ///
    /// Returns the new total. On overflow the total is left unchanged.
    fn add_record(&self, currency: Currency, amount: Decimal) -> Result<Decimal, StoreError>;

    /// Insert or overwrite the conversion rate for `currency`
    fn set_rate(&self, currency: Currency, rate: Decimal);

    /// Current total for `currency`, if any amount was recorded
    fn total(&self, currency: Currency) -> Option<Decimal>;

    /// Current rate for `currency`, if one was set
    fn rate(&self, currency: Currency) -> Option<Decimal>;

    /// Owned copy of both mappings
    fn snapshot(&self) -> Snapshot;

    /// Apply a parsed entry according to the kind of source it came from
    ///
    /// Record kinds accumulate, rate kinds replace.
    fn apply(&self, kind: InputKind, entry: Entry) -> Result<(), StoreError> {
        if kind.accumulates() {
            self.add_record(entry.currency, entry.amount)?;
        } else {
            self.set_rate(entry.currency, entry.amount);
        }
        Ok(())
    }
}
