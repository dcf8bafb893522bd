// Property-based tests for the adapter laws and selection predicates
// Run against both date representations with random inputs

use chrono::NaiveDate;
use datetime_picker::models::view::SelectMode;
use datetime_picker::{
    Calendar, DateInput, DateTimeAdapter, NativeDateTimeAdapter, UnixTimestampDateTimeAdapter,
};
use proptest::prelude::*;
use std::cmp::Ordering;

fn native_date() -> impl Strategy<Value = chrono::NaiveDateTime> {
    (1900..2100i32, 1..=12u32, 1..=28u32, 0..24u32, 0..60u32, 0..60u32).prop_map(
        |(year, month, day, hour, minute, second)| {
            NaiveDate::from_ymd_opt(year, month, day)
                .unwrap()
                .and_hms_opt(hour, minute, second)
                .unwrap()
        },
    )
}

// Roughly 1906..2096
fn unix_millis() -> impl Strategy<Value = i64> {
    -2_000_000_000_000i64..4_000_000_000_000i64
}

proptest! {
    /// Property: every date compares equal to itself
    #[test]
    fn prop_compare_is_reflexive(native in native_date(), millis in unix_millis()) {
        prop_assert_eq!(NativeDateTimeAdapter::new().compare(&native, &native), Ordering::Equal);
        prop_assert_eq!(UnixTimestampDateTimeAdapter::new().compare(&millis, &millis), Ordering::Equal);
    }

    /// Property: swapping the operands reverses the ordering
    #[test]
    fn prop_compare_is_antisymmetric(a in native_date(), b in native_date(), x in unix_millis(), y in unix_millis()) {
        let native = NativeDateTimeAdapter::new();
        prop_assert_eq!(native.compare(&a, &b), native.compare(&b, &a).reverse());

        let unix = UnixTimestampDateTimeAdapter::new();
        prop_assert_eq!(unix.compare(&x, &y), unix.compare(&y, &x).reverse());
    }

    /// Property: a <= b and b <= c imply a <= c
    #[test]
    fn prop_compare_is_transitive(a in native_date(), b in native_date(), c in native_date()) {
        let adapter = NativeDateTimeAdapter::new();
        if adapter.compare(&a, &b) != Ordering::Greater && adapter.compare(&b, &c) != Ordering::Greater {
            prop_assert_ne!(adapter.compare(&a, &c), Ordering::Greater);
        }
    }

    /// Property: a clamped value always lies within ordered bounds
    #[test]
    fn prop_clamp_stays_within_bounds(value in native_date(), a in native_date(), b in native_date()) {
        let adapter = NativeDateTimeAdapter::new();
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        let clamped = adapter.clamp_date(&value, Some(&min), Some(&max));

        prop_assert_ne!(adapter.compare(&clamped, &min), Ordering::Less);
        prop_assert_ne!(adapter.compare(&clamped, &max), Ordering::Greater);
        if value >= min && value <= max {
            prop_assert_eq!(clamped, value);
        }
    }

    /// Property: adding and removing n months returns to the same month
    #[test]
    fn prop_add_months_round_trips_year_and_month(
        date in native_date(),
        millis in unix_millis(),
        months in -1200..1200i32,
    ) {
        let native = NativeDateTimeAdapter::new();
        let back = native.add_calendar_months(&native.add_calendar_months(&date, months), -months);
        prop_assert_eq!(native.get_year(&back), native.get_year(&date));
        prop_assert_eq!(native.get_month(&back), native.get_month(&date));

        let unix = UnixTimestampDateTimeAdapter::new();
        let back = unix.add_calendar_months(&unix.add_calendar_months(&millis, months), -months);
        prop_assert_eq!(unix.get_year(&back), unix.get_year(&millis));
        prop_assert_eq!(unix.get_month(&back), unix.get_month(&millis));
    }

    /// Property: month arithmetic never leaves a real calendar day
    #[test]
    fn prop_add_months_clamps_day(year in 1900..2100i32, month in 1..=12u32, months in -48..48i32) {
        let adapter = NativeDateTimeAdapter::new();
        let last = adapter.create_date(year, month, 1).unwrap();
        let last = adapter.add_calendar_days(&last, i64::from(adapter.get_num_days_in_month(&last)) - 1);
        let shifted = adapter.add_calendar_months(&last, months);
        prop_assert!(adapter.get_date(&shifted) <= adapter.get_num_days_in_month(&shifted));
    }

    /// Property: deserializing a deserialized value changes nothing
    #[test]
    fn prop_deserialize_is_idempotent(date in native_date(), millis in unix_millis()) {
        let native = NativeDateTimeAdapter::new();
        let text = native.to_iso8601(&date);
        let once = native.deserialize(DateInput::Text(text));
        prop_assert_eq!(once, Some(date));
        let twice = once.and_then(|d| native.deserialize(DateInput::Value(d)));
        prop_assert_eq!(twice, once);

        let unix = UnixTimestampDateTimeAdapter::new();
        let once = unix.deserialize(DateInput::Millis(millis));
        let twice = once.and_then(|d| unix.deserialize(DateInput::Value(d)));
        prop_assert_eq!(twice, once);
        let from_text = unix.deserialize(DateInput::Text(unix.to_iso8601(&millis)));
        prop_assert_eq!(from_text, Some(millis));
    }

    /// Property: a single pick marks exactly its own cell
    #[test]
    fn prop_single_pick_is_the_only_selected_cell(day in 1..=31u32, other in -10..45i64) {
        let adapter = NativeDateTimeAdapter::new();
        let mut calendar = Calendar::builder(adapter.clone())
            .picker_moment(Some(adapter.create_date(2024, 3, 1).unwrap()))
            .build()
            .unwrap();

        prop_assert!(calendar.select_date(adapter.create_date(2024, 3, day).unwrap()));
        let body = calendar.body();
        prop_assert!(body.is_selected(i64::from(day)));
        if other != i64::from(day) {
            prop_assert!(!body.is_selected(other));
        }
    }

    /// Property: range endpoints follow click order
    #[test]
    fn prop_range_endpoints_follow_clicks(first in 1..=31u32, second in 1..=31u32) {
        let adapter = NativeDateTimeAdapter::new();
        let mut calendar = Calendar::builder(adapter.clone())
            .picker_moment(Some(adapter.create_date(2024, 3, 1).unwrap()))
            .select_mode(SelectMode::Range)
            .build()
            .unwrap();

        calendar.select_date(adapter.create_date(2024, 3, first).unwrap());
        calendar.select_date(adapter.create_date(2024, 3, second).unwrap());
        let body = calendar.body();
        prop_assert!(body.is_range_from(i64::from(first)));
        prop_assert!(body.is_range_to(i64::from(second)));
    }
}

#[test]
fn test_deserialize_empty_is_none() {
    assert_eq!(NativeDateTimeAdapter::new().deserialize(DateInput::Empty), None);
    assert_eq!(UnixTimestampDateTimeAdapter::new().deserialize(DateInput::Empty), None);
    assert_eq!(
        NativeDateTimeAdapter::new().deserialize(DateInput::from(serde_json::Value::Null)),
        None
    );
}
