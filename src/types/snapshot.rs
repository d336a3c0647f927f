//! Point-in-time copy of the store used for reporting

use super::currency::Currency;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Owned copy of both store mappings
///
/// A snapshot never changes after it is taken; later writes to the store are
/// not visible through it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    /// Cumulative amount per currency
    pub totals: BTreeMap<Currency, Decimal>,
    /// Latest conversion rate per currency
    pub rates: BTreeMap<Currency, Decimal>,
}

