//! Currency codes accepted by the tracker
//!
//! The set of currencies is closed: anything outside [`Currency::ALL`] is
//! rejected by the line parser before it can reach the store.

use std::fmt;
use std::str::FromStr;

/// A currency code from the fixed allowlist
///
/// Ordering follows the allowlist order, which is also the order used when
/// rendering reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Currency {
    Usd,
    Hkd,
    Cny,
    Nzd,
    Gbp,
}

impl Currency {
    /// Every accepted currency, in allowlist order
    pub const ALL: [Currency; 5] = [
        Currency::Usd,
        Currency::Hkd,
        Currency::Cny,
        Currency::Nzd,
        Currency::Gbp,
    ];

    /// The upper-case ISO code as it appears in input and output
    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Hkd => "HKD",
            Currency::Cny => "CNY",
            Currency::Nzd => "NZD",
            Currency::Gbp => "GBP",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a token is not an allowlisted currency code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCurrency(pub String);

impl FromStr for Currency {
    type Err = UnknownCurrency;

    /// Exact, case-sensitive match against the allowlist
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .into_iter()
            .find(|currency| currency.code() == s)
            .ok_or_else(|| UnknownCurrency(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::usd("USD", Currency::Usd)]
    #[case::hkd("HKD", Currency::Hkd)]
    #[case::cny("CNY", Currency::Cny)]
    #[case::nzd("NZD", Currency::Nzd)]
    #[case::gbp("GBP", Currency::Gbp)]
    fn test_parse_allowlisted_codes(#[case] input: &str, #[case] expected: Currency) {
        assert_eq!(input.parse::<Currency>(), Ok(expected));
        assert_eq!(expected.to_string(), input);
    }

    #[rstest]
    #[case::unknown("XYZ")]
    #[case::lowercase("usd")]
    #[case::padded(" USD")]
    #[case::empty("")]
    fn test_parse_rejects_other_tokens(#[case] input: &str) {
        assert_eq!(
            input.parse::<Currency>(),
            Err(UnknownCurrency(input.to_string()))
        );
    }

    #[test]
    fn test_ordering_follows_allowlist() {
        let mut shuffled = vec![Currency::Gbp, Currency::Usd, Currency::Nzd, Currency::Hkd];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![Currency::Usd, Currency::Hkd, Currency::Nzd, Currency::Gbp]
        );
    }
}
