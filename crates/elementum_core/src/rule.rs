//! Rule value handling.
//!
//! A rule is a `u32` whose *decimal* digit string is nominally an 8-character
//! binary numeral, e.g. `10010110`. The digits feed the cosmetic preview row
//! and the decimal display label; the transition table never consults them.
//! Parsing the raw input as an integer drops leading zeros, so `"00001010"`
//! becomes the 4-digit value `1010` - callers that require exactly 8 digits
//! must count digits on the parsed value, not on the input text.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// An automaton rule value.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rule(u32);

impl Rule {
    /// Wraps a raw rule value.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// The raw rule value.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Parses raw input text as a rule value.
    ///
    /// This is a plain integer parse: whitespace is trimmed, anything that is
    /// not a `u32` numeral fails with [`CoreError::InvalidRuleInput`]. No
    /// binary-digit or length validation happens here; that belongs to the
    /// presentation layer.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        trimmed
            .parse::<u32>()
            .map(Self)
            .map_err(|_| CoreError::invalid_rule_input(text))
    }

    /// Decimal digits of the rule value, most significant first.
    ///
    /// `Rule::new(0)` yields a single `0` digit.
    pub fn digits(self) -> impl Iterator<Item = u8> {
        self.0
            .to_string()
            .into_bytes()
            .into_iter()
            .map(|b| b - b'0')
    }

    /// Interprets the rule's decimal digit string as a base-2 numeral.
    ///
    /// Fails with [`CoreError::InvalidBinary`] when any digit is not 0 or 1.
    pub fn decimal(self) -> Result<u32> {
        decimal_of(&self.0.to_string())
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Parses a binary-digit string and returns its decimal value.
///
/// Fails when the string contains characters other than `0`/`1`, is empty,
/// or overflows `u32`.
pub fn decimal_of(binary: &str) -> Result<u32> {
    if binary.is_empty() || !binary.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(CoreError::invalid_binary(binary));
    }
    u32::from_str_radix(binary, 2).map_err(|_| CoreError::invalid_binary(binary))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_plain_integers() {
        assert_eq!(Rule::parse("10010110").unwrap().value(), 10_010_110);
        assert_eq!(Rule::parse("  42 ").unwrap().value(), 42);
    }

    #[test]
    fn parse_rejects_non_integers() {
        assert!(matches!(
            Rule::parse("rule 90"),
            Err(CoreError::InvalidRuleInput(_))
        ));
        assert!(Rule::parse("").is_err());
        assert!(Rule::parse("-1").is_err());
    }

    #[test]
    fn parse_drops_leading_zeros() {
        let rule = Rule::parse("00001010").unwrap();
        assert_eq!(rule.value(), 1010);
        assert_eq!(rule.to_string().len(), 4);
    }

    #[test]
    fn digits_are_most_significant_first() {
        let digits: Vec<u8> = Rule::new(10_010_110).digits().collect();
        assert_eq!(digits, vec![1, 0, 0, 1, 0, 1, 1, 0]);
        let zero: Vec<u8> = Rule::new(0).digits().collect();
        assert_eq!(zero, vec![0]);
    }

    #[test]
    fn decimal_of_converts_binary_strings() {
        assert_eq!(decimal_of("1010").unwrap(), 10);
        assert_eq!(decimal_of("11111010").unwrap(), 250);
        assert_eq!(decimal_of("0").unwrap(), 0);
    }

    #[test]
    fn decimal_of_rejects_non_binary() {
        assert!(matches!(
            decimal_of("102"),
            Err(CoreError::InvalidBinary(_))
        ));
        assert!(decimal_of("").is_err());
        assert!(decimal_of("10a1").is_err());
    }

    #[test]
    fn decimal_of_rejects_overflow() {
        // 33 binary digits does not fit a u32
        let too_long = "1".repeat(33);
        assert!(decimal_of(&too_long).is_err());
    }

    #[test]
    fn serde_round_trip_preserves_value() {
        let rule = Rule::new(10101010);
        let json = serde_json::to_string(&rule).unwrap();
        let back: Rule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rule);
    }

    #[test]
    fn rule_decimal_matches_digit_string() {
        assert_eq!(Rule::new(10101010).decimal().unwrap(), 170);
        assert!(Rule::new(12345678).decimal().is_err());
    }
}
