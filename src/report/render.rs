//! Report rendering
//!
//! Pure functions turning a [`Snapshot`] into console lines.

use crate::config::{DISPLAY_DECIMAL_PLACES, DISPLAY_ROUNDING, REFERENCE_CURRENCY};
use crate::types::{Currency, Snapshot};
use rust_decimal::Decimal;
use tracing::warn;

/// One `<code> <value>` line per recorded currency, in allowlist order
///
/// Only currencies with a rate get a converted value.
pub fn render_report(snapshot: &Snapshot) -> Vec<String> {
    snapshot
        .totals
        .iter()
        .map(|(&currency, &total)| {
            let rate = snapshot.rates.get(&currency).copied();
            format!("{} {}", currency, render_value(currency, total, rate))
        })
        .collect()
}

/// `<total>` or `<total> (USD <converted>)`
pub fn render_value(currency: Currency, total: Decimal, rate: Option<Decimal>) -> String {
    let Some(rate) = rate else {
        return total.to_string();
    };

    match convert(total, rate) {
        Some(converted) => format!("{} ({} {})", total, REFERENCE_CURRENCY, converted),
        None => {
            warn!(%currency, %total, %rate, "Conversion overflow, showing raw total");
            total.to_string()
        }
    }
}

/// `total * rate` rounded half-up to exactly two decimal places
///
/// Returns `None` if the product does not fit a `Decimal`.
pub fn convert(total: Decimal, rate: Decimal) -> Option<Decimal> {
    let mut converted = total
        .checked_mul(rate)?
        .round_dp_with_strategy(DISPLAY_DECIMAL_PLACES, DISPLAY_ROUNDING);
    converted.rescale(DISPLAY_DECIMAL_PLACES);
    Some(converted)
}
