// Native date adapter
// Wall-clock `NaiveDateTime` values interpreted in the local time zone.

use super::{
    localized_month_names, localized_weekday_names, DateInput, DateTimeAdapter, NameStyle,
    SharedLocale,
};
use crate::error::PickerError;
use crate::utils::date::{
    days_in_month, format_localized, is_same_day, parse_iso_text, parse_with_pattern, shift_month,
    ParsedText,
};
use chrono::{
    Datelike, Days, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc,
};
use std::cmp::Ordering;

#[derive(Debug, Clone, Default)]
pub struct NativeDateTimeAdapter {
    locale: SharedLocale,
}

impl NativeDateTimeAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(tag: &str) -> Self {
        Self {
            locale: SharedLocale::new(tag),
        }
    }

    fn from_millis(millis: i64) -> Option<NaiveDateTime> {
        Utc.timestamp_millis_opt(millis)
            .single()
            .map(|instant| instant.with_timezone(&Local).naive_local())
    }
}

impl DateTimeAdapter for NativeDateTimeAdapter {
    type Date = NaiveDateTime;

    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn create_date(&self, year: i32, month: u32, day: u32) -> Result<NaiveDateTime, PickerError> {
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
    ) -> Result<NaiveDateTime, PickerError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(PickerError::InvalidDate { year, month, day })?;
        let time = NaiveTime::from_hms_opt(hours, minutes, seconds).ok_or(
            PickerError::InvalidTime {
                hour: hours,
                minute: minutes,
                second: seconds,
            },
        )?;
        Ok(date.and_time(time))
    }

    fn get_year(&self, date: &NaiveDateTime) -> i32 {
        date.year()
    }

    fn get_month(&self, date: &NaiveDateTime) -> u32 {
        date.month()
    }

    fn get_date(&self, date: &NaiveDateTime) -> u32 {
        date.day()
    }

    fn get_day(&self, date: &NaiveDateTime) -> u32 {
        date.weekday().num_days_from_sunday()
    }

    fn get_hours(&self, date: &NaiveDateTime) -> u32 {
        date.hour()
    }

    fn get_minutes(&self, date: &NaiveDateTime) -> u32 {
        date.minute()
    }

    fn get_seconds(&self, date: &NaiveDateTime) -> u32 {
        date.second()
    }

    fn get_time(&self, date: &NaiveDateTime) -> i64 {
        Local
            .from_local_datetime(date)
            .earliest()
            .map(|instant| instant.timestamp_millis())
            .unwrap_or_else(|| Utc.from_utc_datetime(date).timestamp_millis())
    }

    fn get_num_days_in_month(&self, date: &NaiveDateTime) -> u32 {
        days_in_month(date.year(), date.month())
    }

    fn get_week_number(&self, date: &NaiveDateTime) -> u32 {
        date.iso_week().week()
    }

    fn get_year_name(&self, date: &NaiveDateTime) -> String {
        self.format(date, "%Y")
    }

    fn get_month_names(&self, style: NameStyle) -> Vec<String> {
        localized_month_names(self.locale.locale(), style)
    }

    fn get_day_of_week_names(&self, style: NameStyle) -> Vec<String> {
        localized_weekday_names(self.locale.locale(), style)
    }

    fn add_calendar_years(&self, date: &NaiveDateTime, amount: i32) -> NaiveDateTime {
        self.add_calendar_months(date, amount.saturating_mul(12))
    }

    fn add_calendar_months(&self, date: &NaiveDateTime, amount: i32) -> NaiveDateTime {
        shift_month(date.date(), amount).and_time(date.time())
    }

    fn add_calendar_days(&self, date: &NaiveDateTime, amount: i64) -> NaiveDateTime {
        let days = Days::new(amount.unsigned_abs());
        let shifted = if amount >= 0 {
            date.checked_add_days(days)
        } else {
            date.checked_sub_days(days)
        };
        shifted.unwrap_or(*date)
    }

    fn set_hours(&self, date: &NaiveDateTime, hours: u32) -> NaiveDateTime {
        date.with_hour(hours.min(23)).unwrap_or(*date)
    }

    fn set_minutes(&self, date: &NaiveDateTime, minutes: u32) -> NaiveDateTime {
        date.with_minute(minutes.min(59)).unwrap_or(*date)
    }

    fn set_seconds(&self, date: &NaiveDateTime, seconds: u32) -> NaiveDateTime {
        date.with_second(seconds.min(59)).unwrap_or(*date)
    }

    fn difference_in_calendar_days(&self, a: &NaiveDateTime, b: &NaiveDateTime) -> i64 {
        a.date().signed_duration_since(b.date()).num_days()
    }

    fn compare(&self, a: &NaiveDateTime, b: &NaiveDateTime) -> Ordering {
        a.cmp(b)
    }

    fn is_same_day(&self, a: &NaiveDateTime, b: &NaiveDateTime) -> bool {
        is_same_day(a, b)
    }

    fn is_date_instance(&self, raw: &DateInput<NaiveDateTime>) -> bool {
        matches!(raw, DateInput::Value(_))
    }

    fn is_valid(&self, _date: &NaiveDateTime) -> bool {
        // Every NaiveDateTime names a real instant
        true
    }

    fn deserialize(&self, raw: DateInput<NaiveDateTime>) -> Option<NaiveDateTime> {
        match raw.normalize_json() {
            DateInput::Value(date) => Some(date),
            DateInput::Text(text) => match parse_iso_text(&text)? {
                ParsedText::Absolute(instant) => Some(instant.with_timezone(&Local).naive_local()),
                ParsedText::WallClock(naive) => Some(naive),
            },
            DateInput::Millis(millis) => Self::from_millis(millis),
            DateInput::Empty | DateInput::Json(_) => None,
        }
    }

    fn parse(&self, text: &str, pattern: &str) -> Option<NaiveDateTime> {
        parse_with_pattern(text, pattern)
    }

    fn format(&self, date: &NaiveDateTime, pattern: &str) -> String {
        format_localized(&Utc.from_utc_datetime(date), pattern, self.locale.locale())
    }

    fn to_iso8601(&self, date: &NaiveDateTime) -> String {
        date.format("%Y-%m-%dT%H:%M:%S%.3f").to_string()
    }

    fn set_locale(&self, locale: &str) {
        self.locale.set(locale);
    }

    fn locale(&self) -> String {
        self.locale.tag()
    }
}
