//! Date/time utilities for mediaman.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Format a UTC datetime in the given timezone with a chrono format string.
///
/// Falls back to formatting in UTC when the timezone name does not parse.
pub fn format_utc_datetime(dt: &DateTime<Utc>, timezone: &str, format: &str) -> String {
    let tz: Tz = match timezone.parse() {
        Ok(tz) => tz,
        Err(_) => return dt.format(format).to_string(),
    };
    dt.with_timezone(&tz).format(format).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_utc() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let formatted = format_utc_datetime(&dt, "UTC", "%Y/%m/%d %H:%M");
        assert_eq!(formatted, "2024/01/15 10:30");
    }

    #[test]
    fn test_format_with_timezone() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let formatted = format_utc_datetime(&dt, "Asia/Tokyo", "%Y/%m/%d %H:%M");
        // Tokyo is UTC+9.
        assert_eq!(formatted, "2024/01/15 19:30");
    }

    #[test]
    fn test_invalid_timezone_falls_back_to_utc() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let formatted = format_utc_datetime(&dt, "Not/AZone", "%H:%M");
        assert_eq!(formatted, "10:30");
    }
}
