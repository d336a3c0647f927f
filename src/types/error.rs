//! Error types for the payment tracker
//!
//! # Error Categories
//!
//! - **Line Errors**: a single input line is malformed (wrong field count,
//!   unknown currency, non-numeric amount). Recovered locally: the line is
//!   reported on the console and skipped.
//! - **Store Errors**: an accumulation would overflow the decimal range or
//!   could not be held without rounding. Recovered locally like a line error.
//! - **Tracker Errors**: I/O failures while reading files or starting the
//!   runtime. Logged; only a runtime start failure ends the process.

use super::currency::Currency;
use super::entry::InputKind;
use rust_decimal::Decimal;
use std::path::Path;
use thiserror::Error;

/// A malformed input line
///
/// Every variant carries the [`InputKind`] of the line so the console message
/// can name the source it came from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    /// The line did not split into exactly two fields
    #[error("{kind} line has {found} field(s), expected 2")]
    FieldCount {
        /// Source of the line
        kind: InputKind,
        /// Number of whitespace-separated fields found
        found: usize,
    },

    /// The first field is not an allowlisted currency code
    #[error("unknown currency '{code}' in {kind}")]
    UnknownCurrency {
        /// Source of the line
        kind: InputKind,
        /// The rejected token
        code: String,
    },

    /// The second field is not a plain decimal number
    #[error("invalid amount '{amount}' in {kind}")]
    InvalidAmount {
        /// Source of the line
        kind: InputKind,
        /// The rejected token
        amount: String,
    },
}

impl LineError {
    /// Source of the offending line
    pub fn kind(&self) -> InputKind {
        match self {
            LineError::FieldCount { kind, .. }
            | LineError::UnknownCurrency { kind, .. }
            | LineError::InvalidAmount { kind, .. } => *kind,
        }
    }

    /// The message shown on the console for this line
    pub fn console_message(&self) -> String {
        console_message(self.kind())
    }
}

/// Console message for a rejected line of the given kind
pub fn console_message(kind: InputKind) -> String {
    format!("There is an error in the {}", kind)
}

/// Failure to apply a parsed entry to the store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Adding the amount would leave the representable decimal range
    ///
    /// The existing total is left unchanged.
    #[error("Arithmetic overflow adding {amount} to {currency} total {total}")]
    Overflow {
        currency: Currency,
        total: Decimal,
        amount: Decimal,
    },

    /// The exact sum needs more digits than a `Decimal` holds
    ///
    /// The existing total is left unchanged.
    #[error("Adding {amount} to {currency} total {total} would lose precision")]
    Inexact {
        currency: Currency,
        total: Decimal,
        amount: Decimal,
    },
}

impl StoreError {
    /// Create an Overflow error
    pub fn overflow(currency: Currency, total: Decimal, amount: Decimal) -> Self {
        StoreError::Overflow {
            currency,
            total,
            amount,
        }
    }

    /// Create an Inexact error
    pub fn inexact(currency: Currency, total: Decimal, amount: Decimal) -> Self {
        StoreError::Inexact {
            currency,
            total,
            amount,
        }
    }
}

/// I/O level failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    /// A file exists but could not be opened
    #[error("Failed to open file '{path}': {message}")]
    FileOpen { path: String, message: String },

    /// Reading a file failed part way through
    #[error("Failed to read file '{path}' after {lines} line(s): {message}")]
    FileRead {
        path: String,
        lines: u64,
        message: String,
    },

    /// The async runtime could not be started
    #[error("Failed to start runtime: {message}")]
    Runtime { message: String },
}

impl TrackerError {
    /// Create a FileOpen error
    pub fn file_open(path: &Path, error: &std::io::Error) -> Self {
        TrackerError::FileOpen {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }

    /// Create a FileRead error
    pub fn file_read(path: &Path, lines: u64, error: &std::io::Error) -> Self {
        TrackerError::FileRead {
            path: path.display().to_string(),
            lines,
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::field_count(
        Box::new(LineError::FieldCount { kind: InputKind::Input, found: 3 }),
        "input line has 3 field(s), expected 2"
    )]
    #[case::unknown_currency(
        Box::new(LineError::UnknownCurrency { kind: InputKind::RecordFile, code: "XYZ".to_string() }),
        "unknown currency 'XYZ' in record file"
    )]
    #[case::invalid_amount(
        Box::new(LineError::InvalidAmount { kind: InputKind::RateFile, amount: "abc".to_string() }),
        "invalid amount 'abc' in rate file"
    )]
    #[case::overflow(
        Box::new(StoreError::Overflow { currency: Currency::Usd, total: Decimal::MAX, amount: Decimal::ONE }),
        "Arithmetic overflow adding 1 to USD total 79228162514264337593543950335"
    )]
    #[case::inexact(
        Box::new(StoreError::Inexact { currency: Currency::Usd, total: Decimal::from(10), amount: Decimal::new(1, 1) }),
        "Adding 0.1 to USD total 10 would lose precision"
    )]
    #[case::file_open(
        Box::new(TrackerError::FileOpen { path: "record.txt".to_string(), message: "Permission denied".to_string() }),
        "Failed to open file 'record.txt': Permission denied"
    )]
    #[case::file_read(
        Box::new(TrackerError::FileRead { path: "rate.txt".to_string(), lines: 4, message: "Is a directory (os error 21)".to_string() }),
        "Failed to read file 'rate.txt' after 4 line(s): Is a directory (os error 21)"
    )]
    fn test_error_display(#[case] error: Box<dyn std::error::Error>, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::input(InputKind::Input, "There is an error in the input")]
    #[case::record(InputKind::RecordFile, "There is an error in the record file")]
    #[case::rate(InputKind::RateFile, "There is an error in the rate file")]
    fn test_console_message_names_the_source(#[case] kind: InputKind, #[case] expected: &str) {
        let error = LineError::FieldCount { kind, found: 1 };
        assert_eq!(error.kind(), kind);
        assert_eq!(error.console_message(), expected);
    }
}
