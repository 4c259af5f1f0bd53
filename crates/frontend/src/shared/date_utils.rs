//! Utilities for date and time formatting
//!
//! Provides consistent date/time formatting across the application

use chrono::{DateTime, Local, Utc};

/// Format a timestamp as `YYYY. MM. DD` in the given timezone.
/// Example: 2024-03-15T14:02:26Z -> "2024. 03. 15"
pub fn format_date_in<Tz: chrono::TimeZone>(datetime: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    datetime.with_timezone(tz).format("%Y. %m. %d").to_string()
}

/// Format a timestamp as `YYYY. MM. DD HH:MM` in the given timezone.
/// Example: 2024-03-15T14:02:26Z -> "2024. 03. 15 14:02"
pub fn format_datetime_in<Tz: chrono::TimeZone>(datetime: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    datetime.with_timezone(tz).format("%Y. %m. %d %H:%M").to_string()
}

/// `format_date_in` using the browser's local timezone.
pub fn format_date(datetime: &DateTime<Utc>) -> String {
    format_date_in(datetime, &Local)
}

/// `format_datetime_in` using the browser's local timezone.
pub fn format_datetime(datetime: &DateTime<Utc>) -> String {
    format_datetime_in(datetime, &Local)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(raw: &str) -> DateTime<Utc> {
        raw.parse().unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date_in(&ts("2024-03-15T14:02:26.123Z"), &Utc), "2024. 03. 15");
        assert_eq!(format_date_in(&ts("2024-12-31T23:59:59Z"), &Utc), "2024. 12. 31");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime_in(&ts("2024-03-15T14:02:26.123Z"), &Utc),
            "2024. 03. 15 14:02"
        );
    }

    #[test]
    fn test_timezone_shifts_date() {
        let kst = chrono::FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(format_date_in(&ts("2024-12-31T20:00:00Z"), &kst), "2025. 01. 01");
    }
}
