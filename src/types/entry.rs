//! Parsed input lines and the kind of source they came from

use super::currency::Currency;
use rust_decimal::Decimal;
use std::fmt;

/// Where a line came from
///
/// The kind decides two things: how a parsed entry is applied to the store
/// (record kinds accumulate, rate kinds replace) and how errors on that line
/// are labelled on the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// A line typed on the interactive stream
    Input,
    /// A line from the payment record file loaded at startup
    RecordFile,
    /// A line from the exchange rate file loaded at startup
    RateFile,
}

impl InputKind {
    /// Whether entries of this kind are added to the running totals
    pub fn accumulates(self) -> bool {
        !matches!(self, InputKind::RateFile)
    }

    /// Whether raw lines of this kind are echoed back after being handled
    pub fn echoes(self) -> bool {
        matches!(self, InputKind::RecordFile)
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InputKind::Input => "input",
            InputKind::RecordFile => "record file",
            InputKind::RateFile => "rate file",
        })
    }
}

/// A validated `<CODE> <AMOUNT>` line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub currency: Currency,
    pub amount: Decimal,
}

impl Entry {
    pub fn new(currency: Currency, amount: Decimal) -> Self {
        Entry { currency, amount }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::input(InputKind::Input, "input", true, false)]
    #[case::record(InputKind::RecordFile, "record file", true, true)]
    #[case::rate(InputKind::RateFile, "rate file", false, false)]
    fn test_kind_behaviour(
        #[case] kind: InputKind,
        #[case] label: &str,
        #[case] accumulates: bool,
        #[case] echoes: bool,
    ) {
        assert_eq!(kind.to_string(), label);
        assert_eq!(kind.accumulates(), accumulates);
        assert_eq!(kind.echoes(), echoes);
    }
}
