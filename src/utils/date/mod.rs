// Date utility functions
// Shared by the concrete adapters: month arithmetic, text parsing and
// locale-aware formatting on top of chrono.

use chrono::{
    DateTime, Datelike, FixedOffset, Locale, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
};
use std::fmt::{Display, Write};

/// Locale used when a tag cannot be resolved.
pub const FALLBACK_LOCALE: Locale = Locale::en_US;

pub fn is_same_day(date1: &NaiveDateTime, date2: &NaiveDateTime) -> bool {
    date1.date() == date2.date()
}

/// Shift a date by the given number of months, clamping the day to the last
/// day of the resulting month. Dates that would leave chrono's range are
/// returned unchanged.
pub fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let total_months =
        i64::from(date.year()) * 12 + (i64::from(date.month()) - 1) + i64::from(delta);
    let Ok(new_year) = i32::try_from(total_months.div_euclid(12)) else {
        return date;
    };
    let new_month = (total_months.rem_euclid(12) + 1) as u32;
    let max_day = days_in_month(new_year, new_month);
    let day = date.day().min(max_day);
    NaiveDate::from_ymd_opt(new_year, new_month, day).unwrap_or(date)
}

/// Get the number of days in a given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}

/// Resolve a BCP 47 style tag ("fr-FR", "de_DE") into a chrono locale.
pub fn resolve_locale(tag: &str) -> Option<Locale> {
    let normalized = tag.trim().replace('-', "_");
    Locale::try_from(normalized.as_str()).ok()
}

/// Format with chrono's localized strftime. A malformed pattern yields an
/// empty string instead of panicking inside `Display`.
pub fn format_localized<Tz>(date: &DateTime<Tz>, pattern: &str, locale: Locale) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();
    if write!(out, "{}", date.format_localized(pattern, locale)).is_err() {
        log::warn!("Unsupported date format pattern: {:?}", pattern);
        return String::new();
    }
    out
}

/// Result of parsing free-form date text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedText {
    /// Text carried an explicit UTC offset
    Absolute(DateTime<FixedOffset>),
    /// Wall-clock text, to be interpreted in the adapter's zone
    WallClock(NaiveDateTime),
}

const WALL_CLOCK_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y%m%dT%H%M%S",
];

/// Parse ISO 8601 style text. Empty or unparseable text yields `None`.
pub fn parse_iso_text(text: &str) -> Option<ParsedText> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(ParsedText::Absolute(dt));
    }

    for pattern in WALL_CLOCK_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, pattern) {
            return Some(ParsedText::WallClock(naive));
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .map(|date| ParsedText::WallClock(date.and_time(NaiveTime::MIN)))
}

/// Parse text with an explicit strftime pattern; date-only patterns resolve
/// to midnight.
pub fn parse_with_pattern(text: &str, pattern: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(text, pattern)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(text, pattern)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_shift_month_clamps_day() {
        assert_eq!(shift_month(ymd(2024, 1, 31), 1), ymd(2024, 2, 29));
        assert_eq!(shift_month(ymd(2023, 1, 31), 1), ymd(2023, 2, 28));
        assert_eq!(shift_month(ymd(2024, 3, 31), -1), ymd(2024, 2, 29));
    }

    #[test]
    fn test_shift_month_crosses_years() {
        assert_eq!(shift_month(ymd(2024, 12, 15), 1), ymd(2025, 1, 15));
        assert_eq!(shift_month(ymd(2024, 1, 15), -13), ymd(2022, 12, 15));
    }

    #[test]
    fn test_shift_month_out_of_range_is_identity() {
        let date = ymd(2024, 5, 5);
        assert_eq!(shift_month(date, i32::MAX), date);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2024, 4), 30);
    }

    #[test]
    fn test_is_same_day_ignores_time() {
        let morning = ymd(2024, 6, 1).and_hms_opt(0, 0, 0).unwrap();
        let evening = ymd(2024, 6, 1).and_hms_opt(23, 59, 59).unwrap();
        assert!(is_same_day(&morning, &evening));
        assert!(!is_same_day(&morning, &ymd(2024, 6, 2).and_hms_opt(0, 0, 0).unwrap()));
    }

    #[test]
    fn test_parse_iso_text_variants() {
        assert_eq!(
            parse_iso_text("2024-03-10"),
            Some(ParsedText::WallClock(ymd(2024, 3, 10).and_hms_opt(0, 0, 0).unwrap()))
        );
        assert_eq!(
            parse_iso_text(" 2024-03-10T08:30 "),
            Some(ParsedText::WallClock(ymd(2024, 3, 10).and_hms_opt(8, 30, 0).unwrap()))
        );
        assert!(matches!(
            parse_iso_text("2024-03-10T08:30:00Z"),
            Some(ParsedText::Absolute(_))
        ));
        assert_eq!(parse_iso_text(""), None);
        assert_eq!(parse_iso_text("not a date"), None);
        assert_eq!(parse_iso_text("2024-02-30"), None);
    }

    #[test]
    fn test_parse_with_pattern_date_only() {
        assert_eq!(
            parse_with_pattern("10/03/2024", "%d/%m/%Y"),
            Some(ymd(2024, 3, 10).and_hms_opt(0, 0, 0).unwrap())
        );
        assert_eq!(parse_with_pattern("10/03/2024", "%Y-%m-%d"), None);
    }

    #[test]
    fn test_resolve_locale() {
        assert_eq!(resolve_locale("fr-FR"), Some(Locale::fr_FR));
        assert_eq!(resolve_locale("de_DE"), Some(Locale::de_DE));
        assert_eq!(resolve_locale("xx-YY"), None);
    }

    #[test]
    fn test_format_localized() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap();
        assert_eq!(format_localized(&dt, "%B %Y", Locale::en_US), "March 2024");
        assert_eq!(format_localized(&dt, "%B %Y", Locale::fr_FR), "mars 2024");
    }
}
