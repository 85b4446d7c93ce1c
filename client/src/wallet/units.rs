//! Decimal ether amounts to wei.

#[cfg(test)]
#[path = "units_test.rs"]
mod units_test;

use alloy_primitives::U256;

/// Decimal places of one ether.
pub const ETHER_DECIMALS: usize = 18;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueParseError {
    #[error("value is empty")]
    Empty,

    #[error("value has no digits")]
    NoDigits,

    #[error("unexpected character {0:?} in value")]
    InvalidCharacter(char),

    #[error("value does not fit in 256 bits")]
    Overflow,
}

/// Parse a decimal ether amount (`"0.1"`, `"2"`, `".5"`) into wei.
///
/// Digits past the 18th decimal place are dropped, so the result is the
/// floor of the exact amount. Signs and exponents are rejected.
///
/// # Errors
///
/// Returns a [`ValueParseError`] when the input is blank, contains anything
/// but ASCII digits and a single `.`, or overflows `U256`.
pub fn parse_ether_value(raw: &str) -> Result<U256, ValueParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValueParseError::Empty);
    }

    let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));
    if whole.is_empty() && fraction.is_empty() {
        return Err(ValueParseError::NoDigits);
    }
    if let Some(c) = whole.chars().chain(fraction.chars()).find(|c| !c.is_ascii_digit()) {
        return Err(ValueParseError::InvalidCharacter(c));
    }

    let fraction = &fraction[..fraction.len().min(ETHER_DECIMALS)];
    let mut digits = String::with_capacity(whole.len() + ETHER_DECIMALS);
    digits.push_str(whole);
    digits.push_str(fraction);
    digits.extend(std::iter::repeat_n('0', ETHER_DECIMALS - fraction.len()));

    U256::from_str_radix(&digits, 10).map_err(|_| ValueParseError::Overflow)
}
