//! Date utilities for booking forms

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::{ClientError, ClientResult};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Earliest selectable booking date: today (UTC) as `YYYY-MM-DD`
pub fn get_min_date() -> String {
    min_date_at(Utc::now())
}

/// Earliest selectable booking date relative to `now`
pub fn min_date_at(now: DateTime<Utc>) -> String {
    now.date_naive().format("%Y-%m-%d").to_string()
}

/// Number of days a rental spans, counting both the first and the last day
///
/// Partial days round up.
pub fn calculate_days_between(start: &str, end: &str) -> ClientResult<i64> {
    let start = parse_instant(start)?;
    let end = parse_instant(end)?;

    let diff_millis = (end - start).num_milliseconds().abs();
    let diff_days = (diff_millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY;

    Ok(diff_days + 1)
}

/// Parse a plain date, a naive date-time, or an RFC 3339 timestamp
///
/// Timestamps with an offset are normalized to UTC.
pub fn parse_instant(value: &str) -> ClientResult<NaiveDateTime> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.naive_utc());
    }

    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .map_err(|_| ClientError::InvalidDate(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_days_between_is_inclusive() {
        assert_eq!(calculate_days_between("2024-01-01", "2024-01-03").unwrap(), 3);
        assert_eq!(calculate_days_between("2024-01-01", "2024-01-01").unwrap(), 1);
    }

    #[test]
    fn test_days_between_ignores_order() {
        assert_eq!(calculate_days_between("2024-01-03", "2024-01-01").unwrap(), 3);
    }

    #[test]
    fn test_days_between_crosses_leap_day() {
        assert_eq!(calculate_days_between("2024-02-28", "2024-03-01").unwrap(), 3);
    }

    #[test]
    fn test_partial_days_round_up() {
        assert_eq!(
            calculate_days_between("2024-01-01T08:00:00", "2024-01-02T09:30:00").unwrap(),
            3
        );
        assert_eq!(
            calculate_days_between("2024-01-01T00:00:00Z", "2024-01-01T23:00:00+00:00").unwrap(),
            2
        );
    }

    #[test]
    fn test_invalid_date() {
        assert!(matches!(
            calculate_days_between("tomorrow", "2024-01-01"),
            Err(ClientError::InvalidDate(value)) if value == "tomorrow"
        ));
    }

    #[test]
    fn test_min_date_at() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 23, 59, 59).unwrap();
        assert_eq!(min_date_at(now), "2024-03-09");
    }

    #[test]
    fn test_get_min_date_shape() {
        let today = get_min_date();
        assert!(NaiveDate::parse_from_str(&today, "%Y-%m-%d").is_ok());
    }
}
