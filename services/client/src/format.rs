//! Display formatting for amounts and dates

use rust_decimal::{Decimal, RoundingStrategy};

use crate::{dates::parse_instant, error::ClientResult};

/// Format an amount as US dollars, e.g. `$1,234.50`
///
/// The sign follows the unrounded amount, so `-0.001` renders as `-$0.00`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = amount.is_sign_negative() && !amount.is_zero();

    let digits = format!("{:.2}", rounded.abs());
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}${}.{}", if negative { "-" } else { "" }, grouped, cents)
}

/// Format a date for display, e.g. `January 5, 2024`
///
/// Timestamps carrying an offset are shown by their UTC calendar date.
pub fn format_date(value: &str) -> ClientResult<String> {
    Ok(parse_instant(value)?.format("%B %-d, %Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use std::str::FromStr;

    fn usd(value: &str) -> String {
        format_currency(Decimal::from_str(value).unwrap())
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(usd("0"), "$0.00");
        assert_eq!(usd("5"), "$5.00");
        assert_eq!(usd("250.5"), "$250.50");
        assert_eq!(usd("999.999"), "$1,000.00");
        assert_eq!(usd("1234567.891"), "$1,234,567.89");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(usd("-3"), "-$3.00");
        assert_eq!(usd("-1234.5"), "-$1,234.50");
    }

    #[test]
    fn test_format_currency_negative_rounding_to_zero() {
        assert_eq!(usd("-0.001"), "-$0.00");
        assert_eq!(usd("-0.004"), "-$0.00");
        assert_eq!(usd("0.004"), "$0.00");
    }

    #[test]
    fn test_format_currency_rounds_half_away_from_zero() {
        assert_eq!(usd("2.345"), "$2.35");
        assert_eq!(usd("-2.345"), "-$2.35");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-01-05").unwrap(), "January 5, 2024");
        assert_eq!(
            format_date("2024-12-25T10:00:00").unwrap(),
            "December 25, 2024"
        );
    }

    #[test]
    fn test_format_date_uses_utc_calendar_day() {
        assert_eq!(
            format_date("2024-12-31T23:30:00-05:00").unwrap(),
            "January 1, 2025"
        );
        assert_eq!(
            format_date("2024-01-01T01:00:00+02:00").unwrap(),
            "December 31, 2023"
        );
    }

    #[test]
    fn test_format_date_invalid() {
        assert!(matches!(
            format_date("not a date"),
            Err(ClientError::InvalidDate(_))
        ));
    }
}
