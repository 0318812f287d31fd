//! Base monthly price of a plan

use serde::Serialize;
use std::fmt;

/// Literal that marks a plan priced on request
pub const CUSTOM_PRICE: &str = "Custom";

/// Parsed base price
///
/// Only whole dollar amounts are supported: no cents, no thousands
/// separators, no other currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Price {
    /// Monthly amount in whole dollars
    Amount(u64),
    /// Priced on request, never projected
    Custom,
}

impl Price {
    /// Parse `"$<digits>"` or exactly `"Custom"`
    ///
    /// ```
    /// use plancard_core::models::Price;
    ///
    /// assert_eq!(Price::parse("$29"), Some(Price::Amount(29)));
    /// assert_eq!(Price::parse("Custom"), Some(Price::Custom));
    /// assert_eq!(Price::parse("$29.99"), None);
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        if raw == CUSTOM_PRICE {
            return Some(Price::Custom);
        }

        let digits = raw.strip_prefix('$')?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        // Overflow is the only failure left once the digits check passed
        digits.parse::<u64>().ok().map(Price::Amount)
    }

    /// Monthly amount, if not custom
    pub fn amount(&self) -> Option<u64> {
        match self {
            Price::Amount(n) => Some(*n),
            Price::Custom => None,
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Amount(n) => write!(f, "${}", n),
            Price::Custom => f.write_str(CUSTOM_PRICE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amounts() {
        assert_eq!(Price::parse("$0"), Some(Price::Amount(0)));
        assert_eq!(Price::parse("$79"), Some(Price::Amount(79)));
        assert_eq!(Price::parse("$007"), Some(Price::Amount(7)));
    }

    #[test]
    fn test_parse_custom_is_exact() {
        assert_eq!(Price::parse("Custom"), Some(Price::Custom));
        assert_eq!(Price::parse("custom"), None);
        assert_eq!(Price::parse(" Custom"), None);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for raw in ["", "$", "29", "$$29", "$-5", "$1,000", "$29.99", "€29", "$29 ", "Free"] {
            assert_eq!(Price::parse(raw), None, "{:?} should be rejected", raw);
        }
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert_eq!(Price::parse("$99999999999999999999999"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::Amount(29).to_string(), "$29");
        assert_eq!(Price::Custom.to_string(), "Custom");
    }
}
