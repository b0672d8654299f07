//! Shared record-shaping helpers.
//!
//! The legacy database is full of NULL text columns and loosely typed
//! values; every projection goes through these helpers so that callers only
//! ever see plain strings.

use chrono::{Datelike, NaiveDate};

/// Collapses a nullable text column to a plain string (`NULL` becomes `""`).
pub fn coalesce(value: Option<String>) -> String {
    value.unwrap_or_default()
}

/// Parses a numeric configuration value, falling back when the value is
/// missing or not a number. Used for the login timeout, which reaches us as
/// an environment string.
pub fn coerce_timeout(value: Option<&str>, fallback: u64) -> u64 {
    value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(fallback)
}

/// Formats a raw document number as the display code used by the desktop
/// tool: last two digits of the document year followed by the number
/// zero-padded to four digits (`441` in `2024` becomes `"240441"`).
///
/// Legacy rows may lack a date or a number. Without a date the raw number is
/// shown as-is; without a number the result is empty. Irregular values never
/// fail the listing.
pub fn format_document_number(raw: Option<i32>, date: Option<NaiveDate>) -> String {
    match (raw, date) {
        (Some(number), Some(date)) => {
            let year = format!("{:04}", date.year());
            let suffix = &year[year.len() - 2..];
            format!("{suffix}{number:04}")
        }
        (Some(number), None) => number.to_string(),
        (None, _) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coalesce_maps_null_to_empty() {
        assert_eq!(coalesce(None), "");
        assert_eq!(coalesce(Some("Roma".into())), "Roma");
    }

    #[test]
    fn coerce_timeout_parses_or_falls_back() {
        assert_eq!(coerce_timeout(Some("30"), 5), 30);
        assert_eq!(coerce_timeout(Some(" 10 "), 5), 10);
        assert_eq!(coerce_timeout(Some("abc"), 5), 5);
        assert_eq!(coerce_timeout(Some(""), 5), 5);
        assert_eq!(coerce_timeout(None, 5), 5);
    }

    #[test]
    fn formats_year_suffix_and_padded_number() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15);
        assert_eq!(format_document_number(Some(441), date), "240441");

        let date = NaiveDate::from_ymd_opt(1999, 12, 1);
        assert_eq!(format_document_number(Some(7), date), "990007");
    }

    #[test]
    fn number_wider_than_four_digits_is_not_truncated() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1);
        assert_eq!(format_document_number(Some(12345), date), "2412345");
    }

    #[test]
    fn missing_date_falls_back_to_raw_number() {
        assert_eq!(format_document_number(Some(441), None), "441");
    }

    #[test]
    fn missing_number_yields_empty_string() {
        assert_eq!(format_document_number(None, None), "");
        let date = NaiveDate::from_ymd_opt(2024, 1, 1);
        assert_eq!(format_document_number(None, date), "");
    }
}
