//! Japanese display formatting for publication dates

use chrono::{DateTime, NaiveDate};

/// Display format for publication dates, e.g. `2024年3月5日`
///
/// Month and day are unpadded, matching how dates are written on the site.
pub const JAPANESE_DATE_FORMAT: &str = "%Y年%-m月%-d日";

/// Format a date string for display in Japanese
///
/// Accepts RFC 3339 timestamps, RFC 2822 timestamps (the format RSS uses),
/// and bare `YYYY-MM-DD` dates. Anything else is returned unchanged, which
/// makes the function idempotent: an already formatted date fails every
/// parse and passes through as-is.
pub fn format_japanese_date(input: &str) -> String {
    if let Ok(date) = DateTime::parse_from_rfc3339(input) {
        return date.format(JAPANESE_DATE_FORMAT).to_string();
    }
    if let Ok(date) = DateTime::parse_from_rfc2822(input) {
        return date.format(JAPANESE_DATE_FORMAT).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return date.format(JAPANESE_DATE_FORMAT).to_string();
    }
    input.to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rfc3339() {
        assert_eq!(
            format_japanese_date("2024-03-05T10:30:00+09:00"),
            "2024年3月5日"
        );
    }

    #[test]
    fn test_format_rfc2822() {
        assert_eq!(
            format_japanese_date("Tue, 05 Mar 2024 10:30:00 +0900"),
            "2024年3月5日"
        );
    }

    #[test]
    fn test_format_bare_date() {
        assert_eq!(format_japanese_date("2024-03-05"), "2024年3月5日");
    }

    #[test]
    fn test_month_and_day_are_unpadded() {
        assert_eq!(format_japanese_date("2024-01-09"), "2024年1月9日");
    }

    #[test]
    fn test_unparsable_input_passes_through() {
        assert_eq!(format_japanese_date("not a date"), "not a date");
        assert_eq!(format_japanese_date(""), "");
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let once = format_japanese_date("2024-03-05T10:30:00+09:00");
        let twice = format_japanese_date(&once);
        assert_eq!(once, twice);
    }
}
