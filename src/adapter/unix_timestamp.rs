// Unix timestamp adapter
// Dates are epoch milliseconds; calendar fields are resolved in a fixed zone.

use super::{
    localized_month_names, localized_weekday_names, DateInput, DateTimeAdapter, NameStyle,
    SharedLocale,
};
use crate::error::PickerError;
use crate::utils::date::{
    days_in_month, format_localized, parse_iso_text, parse_with_pattern, shift_month,
    ParsedText,
};
use chrono::{DateTime, Datelike, Days, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use std::cmp::Ordering;

#[derive(Debug, Clone)]
pub struct UnixTimestampDateTimeAdapter {
    locale: SharedLocale,
    time_zone: Tz,
}

impl Default for UnixTimestampDateTimeAdapter {
    fn default() -> Self {
        Self {
            locale: SharedLocale::default(),
            time_zone: Tz::UTC,
        }
    }
}

impl UnixTimestampDateTimeAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve calendar fields in `time_zone` instead of UTC.
    pub fn with_time_zone(time_zone: Tz) -> Self {
        Self {
            time_zone,
            ..Self::default()
        }
    }

    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    /// Zoned view of a timestamp. Out-of-range timestamps resolve to the
    /// epoch; callers are expected to check `is_valid` first.
    fn zoned(&self, millis: i64) -> DateTime<Tz> {
        let instant = Utc
            .timestamp_millis_opt(millis)
            .single()
            .unwrap_or_else(|| Utc.from_utc_datetime(&NaiveDateTime::default()));
        instant.with_timezone(&self.time_zone)
    }

    /// Wall-clock time in this adapter's zone to epoch millis. Times that
    /// fall into a DST gap move forward to the first valid instant.
    fn localize(&self, naive: &NaiveDateTime) -> i64 {
        let mut candidate = *naive;
        for _ in 0..4 {
            if let Some(instant) = self.time_zone.from_local_datetime(&candidate).earliest() {
                return instant.timestamp_millis();
            }
            match candidate.checked_add_signed(chrono::Duration::minutes(30)) {
                Some(next) => candidate = next,
                None => break,
            }
        }
        Utc.from_utc_datetime(naive).timestamp_millis()
    }

    fn wall_clock(&self, millis: i64) -> NaiveDateTime {
        self.zoned(millis).naive_local()
    }
}

impl DateTimeAdapter for UnixTimestampDateTimeAdapter {
    type Date = i64;

    fn now(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn create_date(&self, year: i32, month: u32, day: u32) -> Result<i64, PickerError> {
        self.create_date_time(year, month, day, 0, 0, 0)
    }

    fn create_date_time(
        &self,
        year: i32,
        month: u32,
        day: u32,
        hours: u32,
        minutes: u32,
        seconds: u32,
    ) -> Result<i64, PickerError> {
        let date = chrono::NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(PickerError::InvalidDate { year, month, day })?;
        let time = NaiveTime::from_hms_opt(hours, minutes, seconds).ok_or(
            PickerError::InvalidTime {
                hour: hours,
                minute: minutes,
                second: seconds,
            },
        )?;
        Ok(self.localize(&date.and_time(time)))
    }

    fn get_year(&self, date: &i64) -> i32 {
        self.zoned(*date).year()
    }

    fn get_month(&self, date: &i64) -> u32 {
        self.zoned(*date).month()
    }

    fn get_date(&self, date: &i64) -> u32 {
        self.zoned(*date).day()
    }

    fn get_day(&self, date: &i64) -> u32 {
        self.zoned(*date).weekday().num_days_from_sunday()
    }

    fn get_hours(&self, date: &i64) -> u32 {
        self.zoned(*date).hour()
    }

    fn get_minutes(&self, date: &i64) -> u32 {
        self.zoned(*date).minute()
    }

    fn get_seconds(&self, date: &i64) -> u32 {
        self.zoned(*date).second()
    }

    fn get_time(&self, date: &i64) -> i64 {
        *date
    }

    fn get_num_days_in_month(&self, date: &i64) -> u32 {
        let zoned = self.zoned(*date);
        days_in_month(zoned.year(), zoned.month())
    }

    fn get_week_number(&self, date: &i64) -> u32 {
        self.zoned(*date).iso_week().week()
    }

    fn get_year_name(&self, date: &i64) -> String {
        self.format(date, "%Y")
    }

    fn get_month_names(&self, style: NameStyle) -> Vec<String> {
        localized_month_names(self.locale.locale(), style)
    }

    fn get_day_of_week_names(&self, style: NameStyle) -> Vec<String> {
        localized_weekday_names(self.locale.locale(), style)
    }

    fn add_calendar_years(&self, date: &i64, amount: i32) -> i64 {
        self.add_calendar_months(date, amount.saturating_mul(12))
    }

    fn add_calendar_months(&self, date: &i64, amount: i32) -> i64 {
        let wall = self.wall_clock(*date);
        let shifted = shift_month(wall.date(), amount).and_time(wall.time());
        self.localize(&shifted)
    }

    fn add_calendar_days(&self, date: &i64, amount: i64) -> i64 {
        let wall = self.wall_clock(*date);
        let days = Days::new(amount.unsigned_abs());
        let shifted = if amount >= 0 {
            wall.checked_add_days(days)
        } else {
            wall.checked_sub_days(days)
        };
        shifted.map(|naive| self.localize(&naive)).unwrap_or(*date)
    }

    fn set_hours(&self, date: &i64, hours: u32) -> i64 {
        let wall = self.wall_clock(*date);
        wall.with_hour(hours.min(23))
            .map(|naive| self.localize(&naive))
            .unwrap_or(*date)
    }

    fn set_minutes(&self, date: &i64, minutes: u32) -> i64 {
        let wall = self.wall_clock(*date);
        wall.with_minute(minutes.min(59))
            .map(|naive| self.localize(&naive))
            .unwrap_or(*date)
    }

    fn set_seconds(&self, date: &i64, seconds: u32) -> i64 {
        let wall = self.wall_clock(*date);
        wall.with_second(seconds.min(59))
            .map(|naive| self.localize(&naive))
            .unwrap_or(*date)
    }

    fn difference_in_calendar_days(&self, a: &i64, b: &i64) -> i64 {
        self.wall_clock(*a)
            .date()
            .signed_duration_since(self.wall_clock(*b).date())
            .num_days()
    }

    fn compare(&self, a: &i64, b: &i64) -> Ordering {
        a.cmp(b)
    }

    fn is_date_instance(&self, raw: &DateInput<i64>) -> bool {
        matches!(raw, DateInput::Value(_) | DateInput::Millis(_))
    }

    fn is_valid(&self, date: &i64) -> bool {
        Utc.timestamp_millis_opt(*date).single().is_some()
    }

    fn deserialize(&self, raw: DateInput<i64>) -> Option<i64> {
        match raw.normalize_json() {
            DateInput::Value(millis) | DateInput::Millis(millis) => Some(millis),
            DateInput::Text(text) => match parse_iso_text(&text) {
                Some(ParsedText::Absolute(instant)) => Some(instant.timestamp_millis()),
                Some(ParsedText::WallClock(naive)) => Some(self.localize(&naive)),
                // Bare numeric text is a timestamp
                None => text.trim().parse::<i64>().ok(),
            },
            DateInput::Empty | DateInput::Json(_) => None,
        }
    }

    fn parse(&self, text: &str, pattern: &str) -> Option<i64> {
        parse_with_pattern(text, pattern).map(|naive| self.localize(&naive))
    }

    fn format(&self, date: &i64, pattern: &str) -> String {
        format_localized(&self.zoned(*date), pattern, self.locale.locale())
    }

    fn to_iso8601(&self, date: &i64) -> String {
        self.zoned(*date)
            .format("%Y-%m-%dT%H:%M:%S%.3f%:z")
            .to_string()
    }

    fn set_locale(&self, locale: &str) {
        self.locale.set(locale);
    }

    fn locale(&self) -> String {
        self.locale.tag()
    }
}
