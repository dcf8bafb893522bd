// Test fixtures - reusable test data
// Provides consistent dates and calendars across the integration tests

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use datetime_picker::{Calendar, NativeDateTimeAdapter};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns the date at midnight
    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    /// Returns Mar 10, 2024 at midnight (a Sunday)
    pub fn mar_10_2024() -> NaiveDateTime {
        ymd(2024, 3, 10)
    }

    /// Returns Feb 29, 2024 at 12:00 (leap year)
    pub fn leap_day_2024() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    /// Mar 10, 2024 00:00 UTC in epoch milliseconds
    pub const MAR_10_2024_UTC_MILLIS: i64 = 1_710_028_800_000;
}

/// Sample calendars for testing
pub mod calendars {
    use super::*;

    /// Month view calendar in March 2024, nothing selected
    pub fn march_2024() -> Calendar<NativeDateTimeAdapter> {
        Calendar::builder(NativeDateTimeAdapter::new())
            .picker_moment(Some(dates::mar_10_2024()))
            .build()
            .unwrap()
    }

    /// Calendar limited to January 2024
    pub fn january_2024_only() -> Calendar<NativeDateTimeAdapter> {
        Calendar::builder(NativeDateTimeAdapter::new())
            .min_date("2024-01-01")
            .max_date("2024-01-31")
            .picker_moment(Some(dates::ymd(2024, 1, 15)))
            .build()
            .unwrap()
    }
}
