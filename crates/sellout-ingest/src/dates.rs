//! Tolerant parsing of vendor-supplied sale dates.
//!
//! Upstream exports mix two encodings in the same column: the reporting
//! format `DD/MM/YYYY` and ISO `YYYY-MM-DD`. Parsing is two explicit
//! fallible attempts composed with a fallback over the original text; a
//! value the first attempt resolved is never re-parsed.

use chrono::NaiveDate;

/// Reporting date format used across raw files and the compiled output.
pub const REPORT_DATE_FORMAT: &str = "%d/%m/%Y";

/// ISO fallback format some vendors ship instead.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a sale date, trying `DD/MM/YYYY` first and `YYYY-MM-DD` second.
///
/// Returns `None` when neither format matches; callers treat that as an
/// invalid date, not an error.
pub fn parse_report_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, REPORT_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT))
        .ok()
}

/// Parses a sale date in the reporting format only, with no fallback.
///
/// Used by the period filter, where anything not already normalized to
/// `DD/MM/YYYY` counts as an invalid date.
pub fn parse_report_date_strict(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), REPORT_DATE_FORMAT).ok()
}

/// Formats a date back into the reporting format.
pub fn format_report_date(date: NaiveDate) -> String {
    date.format(REPORT_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_reporting_format_first() {
        assert_eq!(
            parse_report_date("05/10/2024"),
            NaiveDate::from_ymd_opt(2024, 10, 5)
        );
    }

    #[test]
    fn falls_back_to_iso() {
        assert_eq!(
            parse_report_date("2024-10-05"),
            NaiveDate::from_ymd_opt(2024, 10, 5)
        );
    }

    #[test]
    fn ambiguous_values_resolve_as_day_month_year() {
        // 03/04/2024 is April 3rd, not March 4th.
        assert_eq!(
            parse_report_date("03/04/2024"),
            NaiveDate::from_ymd_opt(2024, 4, 3)
        );
    }

    #[test]
    fn unparseable_values_are_none() {
        assert_eq!(parse_report_date(""), None);
        assert_eq!(parse_report_date("  "), None);
        assert_eq!(parse_report_date("not a date"), None);
        assert_eq!(parse_report_date("32/01/2024"), None);
    }

    #[test]
    fn strict_parse_rejects_iso() {
        assert_eq!(
            parse_report_date_strict("05/10/2024"),
            NaiveDate::from_ymd_opt(2024, 10, 5)
        );
        assert_eq!(parse_report_date_strict("2024-10-05"), None);
    }

    #[test]
    fn round_trips_through_report_format() {
        let date = NaiveDate::from_ymd_opt(2024, 10, 5).unwrap();
        assert_eq!(format_report_date(date), "05/10/2024");
        assert_eq!(parse_report_date("05/10/2024"), Some(date));
    }
}
