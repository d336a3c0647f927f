//! Line format handling for `<CODE> <AMOUNT>` entries
//!
//! Both the batch files and the interactive stream use the same format: one
//! currency code and one plain decimal amount per line, separated by
//! whitespace. All functions are pure (no I/O) for easy testing.

use crate::types::{Currency, Entry, InputKind, LineError};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse one line into an [`Entry`]
///
/// Validation order matches the error precedence shown to the user: field
/// count first, then the currency code, then the amount.
pub fn parse_line(line: &str, kind: InputKind) -> Result<Entry, LineError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [code, amount] = fields.as_slice() else {
        return Err(LineError::FieldCount {
            kind,
            found: fields.len(),
        });
    };

    let currency = Currency::from_str(code).map_err(|_| LineError::UnknownCurrency {
        kind,
        code: code.to_string(),
    })?;

    let amount = parse_amount(amount).ok_or_else(|| LineError::InvalidAmount {
        kind,
        amount: amount.to_string(),
    })?;

    Ok(Entry::new(currency, amount))
}

/// Parse a plain decimal: optional `-`, at least one digit, optional fraction
///
/// Exponents, thousands separators and a leading `+` are rejected. A trailing
/// dot (`5.`) is accepted. Values `Decimal` cannot hold exactly yield `None`.
pub fn parse_amount(token: &str) -> Option<Decimal> {
    let fraction = plain_decimal_fraction(token)?;
    let amount = Decimal::from_str(token.strip_suffix('.').unwrap_or(token)).ok()?;

    // Decimal rounds off fraction digits beyond what it can hold
    let dropped = &fraction[(amount.scale() as usize).min(fraction.len())..];
    dropped.bytes().all(|b| b == b'0').then_some(amount)
}

/// The fraction digits of a plain decimal token, or `None` if it is not one
fn plain_decimal_fraction(token: &str) -> Option<&str> {
    let unsigned = token.strip_prefix('-').unwrap_or(token);
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let valid = !integer.is_empty()
        && integer.bytes().all(|b| b.is_ascii_digit())
        && fraction.bytes().all(|b| b.is_ascii_digit());
    valid.then_some(fraction)
}
