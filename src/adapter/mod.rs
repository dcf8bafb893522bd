//! Date representation abstraction.
//!
//! Everything above this module manipulates dates only through
//! [`DateTimeAdapter`]. Swapping the concrete date type means writing a new
//! adapter, never touching the calendar state machine or the grid builders.

pub mod formats;
pub mod native;
pub mod unix_timestamp;

pub use formats::DateTimeFormats;
pub use native::NativeDateTimeAdapter;
pub use unix_timestamp::UnixTimestampDateTimeAdapter;

use crate::error::PickerError;
use crate::utils::date::{resolve_locale, FALLBACK_LOCALE};
use chrono::Locale;
use std::cmp::Ordering;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};

/// Raw date-like input supplied by a host before it has been trusted.
///
/// Every value crossing into the calendar goes through
/// [`DateTimeAdapter::deserialize`] first.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DateInput<D> {
    #[default]
    Empty,
    /// Already the adapter's own date type (may still be invalid)
    Value(D),
    /// ISO 8601 text
    Text(String),
    /// Milliseconds since the Unix epoch
    Millis(i64),
    /// Loosely typed input, e.g. from a form or a config file
    Json(serde_json::Value),
}

impl<D> From<Option<D>> for DateInput<D> {
    fn from(value: Option<D>) -> Self {
        match value {
            Some(date) => DateInput::Value(date),
            None => DateInput::Empty,
        }
    }
}

impl<D> From<&str> for DateInput<D> {
    fn from(text: &str) -> Self {
        DateInput::Text(text.to_string())
    }
}

impl<D> From<String> for DateInput<D> {
    fn from(text: String) -> Self {
        DateInput::Text(text)
    }
}

impl<D> From<serde_json::Value> for DateInput<D> {
    fn from(value: serde_json::Value) -> Self {
        DateInput::Json(value)
    }
}

impl<D> DateInput<D> {
    /// Flatten JSON input into one of the typed variants.
    pub fn normalize_json(self) -> DateInput<D> {
        match self {
            DateInput::Json(serde_json::Value::Null) => DateInput::Empty,
            DateInput::Json(serde_json::Value::String(text)) => DateInput::Text(text),
            DateInput::Json(serde_json::Value::Number(number)) => {
                match number.as_i64().or_else(|| number.as_f64().map(|f| f as i64)) {
                    Some(millis) => DateInput::Millis(millis),
                    None => DateInput::Empty,
                }
            }
            DateInput::Json(_) => DateInput::Empty,
            other => other,
        }
    }
}

/// Width of month and weekday names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameStyle {
    Long,
    Short,
    Narrow,
}

/// Locale setting shared by clones of one adapter.
///
/// Cloning an adapter shares its locale; the last `set_locale` call wins for
/// every holder of a clone.
#[derive(Debug, Clone)]
pub struct SharedLocale {
    inner: Arc<RwLock<(String, Locale)>>,
}

impl SharedLocale {
    pub fn new(tag: &str) -> Self {
        let locale = Self::resolve(tag);
        Self {
            inner: Arc::new(RwLock::new((tag.to_string(), locale))),
        }
    }

    pub fn set(&self, tag: &str) {
        let locale = Self::resolve(tag);
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *guard = (tag.to_string(), locale);
    }

    pub fn tag(&self) -> String {
        self.inner.read().unwrap_or_else(|e| e.into_inner()).0.clone()
    }

    pub fn locale(&self) -> Locale {
        self.inner.read().unwrap_or_else(|e| e.into_inner()).1
    }

    fn resolve(tag: &str) -> Locale {
        resolve_locale(tag).unwrap_or_else(|| {
            log::warn!("Unknown locale {:?}, falling back to en_US", tag);
            FALLBACK_LOCALE
        })
    }
}

impl Default for SharedLocale {
    fn default() -> Self {
        Self::new("en-US")
    }
}

/// Capability set every concrete date representation implements.
///
/// Months are 1-based (1 = January). Day of week is 0-based from Sunday.
pub trait DateTimeAdapter {
    type Date: Clone + Debug + PartialEq;

    fn now(&self) -> Self::Date;

    /// Midnight of the given calendar day.
    fn create_date(&self, year: i32, month: u32, day: u32) -> Result<Self::Date, PickerError>;

    fn create_date_time(
        &self,
        year: i32,
        month: u32,
        day: u32,
        hours: u32,
        minutes: u32,
        seconds: u32,
    ) -> Result<Self::Date, PickerError>;

    fn get_year(&self, date: &Self::Date) -> i32;
    fn get_month(&self, date: &Self::Date) -> u32;
    fn get_date(&self, date: &Self::Date) -> u32;
    /// Day of week, 0 = Sunday
    fn get_day(&self, date: &Self::Date) -> u32;
    fn get_hours(&self, date: &Self::Date) -> u32;
    fn get_minutes(&self, date: &Self::Date) -> u32;
    fn get_seconds(&self, date: &Self::Date) -> u32;
    /// Milliseconds since the Unix epoch
    fn get_time(&self, date: &Self::Date) -> i64;
    fn get_num_days_in_month(&self, date: &Self::Date) -> u32;
    /// ISO 8601 week number
    fn get_week_number(&self, date: &Self::Date) -> u32;

    /// Locale-aware year label
    fn get_year_name(&self, date: &Self::Date) -> String;
    fn get_month_names(&self, style: NameStyle) -> Vec<String>;
    fn get_date_names(&self) -> Vec<String> {
        (1..=31).map(|day| day.to_string()).collect()
    }
    /// Weekday names starting from Sunday
    fn get_day_of_week_names(&self, style: NameStyle) -> Vec<String>;
    fn get_first_day_of_week(&self) -> u32 {
        0
    }

    fn add_calendar_years(&self, date: &Self::Date, amount: i32) -> Self::Date;
    fn add_calendar_months(&self, date: &Self::Date, amount: i32) -> Self::Date;
    fn add_calendar_days(&self, date: &Self::Date, amount: i64) -> Self::Date;
    fn set_hours(&self, date: &Self::Date, hours: u32) -> Self::Date;
    fn set_minutes(&self, date: &Self::Date, minutes: u32) -> Self::Date;
    fn set_seconds(&self, date: &Self::Date, seconds: u32) -> Self::Date;

    /// Whole calendar days from `b` to `a`, ignoring time of day
    fn difference_in_calendar_days(&self, a: &Self::Date, b: &Self::Date) -> i64;

    /// Total order by calendar instant
    fn compare(&self, a: &Self::Date, b: &Self::Date) -> Ordering;

    fn is_equal(&self, a: &Self::Date, b: &Self::Date) -> bool {
        self.compare(a, b) == Ordering::Equal
    }

    fn is_same_day(&self, a: &Self::Date, b: &Self::Date) -> bool {
        self.get_year(a) == self.get_year(b)
            && self.get_month(a) == self.get_month(b)
            && self.get_date(a) == self.get_date(b)
    }

    /// `date` if it lies within `[min, max]`, otherwise the nearest bound.
    /// A missing bound is unbounded on that side.
    fn clamp_date(
        &self,
        date: &Self::Date,
        min: Option<&Self::Date>,
        max: Option<&Self::Date>,
    ) -> Self::Date {
        if let Some(min) = min {
            if self.compare(date, min) == Ordering::Less {
                return min.clone();
            }
        }
        if let Some(max) = max {
            if self.compare(date, max) == Ordering::Greater {
                return max.clone();
            }
        }
        date.clone()
    }

    /// Whether the raw input already carries the adapter's date type.
    fn is_date_instance(&self, raw: &DateInput<Self::Date>) -> bool;

    fn is_valid(&self, date: &Self::Date) -> bool;

    /// Normalize host input into a date. Never fails: anything unparseable
    /// becomes `None`. Instances pass through untouched, even if invalid.
    fn deserialize(&self, raw: DateInput<Self::Date>) -> Option<Self::Date>;

    /// `deserialize` followed by the instance and validity checks.
    fn get_valid_date_or_null(&self, raw: DateInput<Self::Date>) -> Option<Self::Date> {
        let date = self.deserialize(raw)?;
        let checked = DateInput::Value(date);
        if !self.is_date_instance(&checked) {
            return None;
        }
        match checked {
            DateInput::Value(date) if self.is_valid(&date) => Some(date),
            _ => None,
        }
    }

    /// Parse text with a strftime pattern.
    fn parse(&self, text: &str, pattern: &str) -> Option<Self::Date>;

    fn format(&self, date: &Self::Date, pattern: &str) -> String;

    fn to_iso8601(&self, date: &Self::Date) -> String;

    /// Affects subsequent `format`/name calls on this adapter and its clones.
    fn set_locale(&self, locale: &str);

    fn locale(&self) -> String;
}

/// Localized month names, January first.
pub(crate) fn localized_month_names(locale: Locale, style: NameStyle) -> Vec<String> {
    (1..=12)
        .filter_map(|month| chrono::NaiveDate::from_ymd_opt(2017, month, 1))
        .map(|date| name_for(&date, locale, style, "%B", "%b"))
        .collect()
}

/// Localized weekday names, Sunday first.
pub(crate) fn localized_weekday_names(locale: Locale, style: NameStyle) -> Vec<String> {
    // 2017-01-01 was a Sunday
    (1..=7)
        .filter_map(|day| chrono::NaiveDate::from_ymd_opt(2017, 1, day))
        .map(|date| name_for(&date, locale, style, "%A", "%a"))
        .collect()
}

fn name_for(
    date: &chrono::NaiveDate,
    locale: Locale,
    style: NameStyle,
    long: &str,
    short: &str,
) -> String {
    use chrono::TimeZone;

    let instant = chrono::Utc.from_utc_datetime(&date.and_time(chrono::NaiveTime::MIN));
    match style {
        NameStyle::Long => crate::utils::date::format_localized(&instant, long, locale),
        NameStyle::Short => crate::utils::date::format_localized(&instant, short, locale),
        NameStyle::Narrow => crate::utils::date::format_localized(&instant, long, locale)
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default(),
    }
}
