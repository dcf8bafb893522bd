// Unit tests for selection modes and view names
// Covers how picks land in the selection for every mode

use chrono::NaiveDate;
use datetime_picker::models::selection::Selection;
use datetime_picker::models::view::{DateView, SelectMode};
use test_case::test_case;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
}

fn pick_all(mode: SelectMode, start: &[Option<u32>], picks: &[u32]) -> Selection<NaiveDate> {
    let mut selection = Selection::new();
    selection.set_selecteds(start.iter().map(|d| d.map(day)).collect());
    for &d in picks {
        selection.apply_pick(mode, day(d));
    }
    selection
}

#[test_case(SelectMode::Single, false ; "single")]
#[test_case(SelectMode::Range, true ; "range")]
#[test_case(SelectMode::RangeFrom, true ; "range from")]
#[test_case(SelectMode::RangeTo, true ; "range to")]
fn test_mode_family(mode: SelectMode, is_range: bool) {
    assert_eq!(mode.is_range(), is_range);
    assert_eq!(mode.is_single(), !is_range);
}

#[test_case(&[], &[4, 9], (Some(4), Some(9)) ; "two clicks fill both ends")]
#[test_case(&[], &[9, 4], (Some(9), Some(4)) ; "reversed clicks are kept")]
#[test_case(&[], &[4, 9, 12], (Some(12), None) ; "third click restarts")]
#[test_case(&[Some(1), Some(2)], &[7], (Some(7), None) ; "complete range restarts")]
fn test_range_picks(start: &[Option<u32>], picks: &[u32], expected: (Option<u32>, Option<u32>)) {
    let selection = pick_all(SelectMode::Range, start, picks);
    assert_eq!(selection.range_from().copied(), expected.0.map(day));
    assert_eq!(selection.range_to().copied(), expected.1.map(day));
}

#[test_case(SelectMode::RangeFrom, &[None, Some(20)], 10, (Some(10), Some(20)) ; "from keeps end")]
#[test_case(SelectMode::RangeFrom, &[], 10, (Some(10), None) ; "from on empty")]
#[test_case(SelectMode::RangeTo, &[Some(5), None], 10, (Some(5), Some(10)) ; "to keeps start")]
#[test_case(SelectMode::RangeTo, &[], 10, (None, Some(10)) ; "to on empty")]
fn test_half_range_picks(
    mode: SelectMode,
    start: &[Option<u32>],
    pick: u32,
    expected: (Option<u32>, Option<u32>),
) {
    let selection = pick_all(mode, start, &[pick]);
    assert_eq!(selection.selecteds().len(), 2);
    assert_eq!(selection.range_from().copied(), expected.0.map(day));
    assert_eq!(selection.range_to().copied(), expected.1.map(day));
}

#[test]
fn test_single_pick_leaves_range_untouched() {
    let selection = pick_all(SelectMode::Single, &[Some(1), Some(2)], &[15]);
    assert_eq!(selection.selected(), Some(&day(15)));
    assert_eq!(selection.range_from(), Some(&day(1)));
}

#[test_case(DateView::Month, "month")]
#[test_case(DateView::Year, "year")]
#[test_case(DateView::MultiYear, "multi-year")]
fn test_view_names(view: DateView, name: &str) {
    assert_eq!(view.name(), name);
}
