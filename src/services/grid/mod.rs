//! Grid builders, one per calendar view.
//!
//! A builder turns the picker moment plus configuration into a page of
//! [`CalendarCell`]s and maps dates to and from the numeric cell keys of its
//! view. The calendar picks the builder for the active view through
//! [`grid_builder`].

mod month;
mod multi_year;
mod year;

pub use month::MonthGrid;
pub use multi_year::MultiYearGrid;
pub use year::YearGrid;

use crate::adapter::{DateTimeAdapter, DateTimeFormats};
use crate::models::cell::CalendarCell;
use crate::models::settings::MultiYearOptions;
use crate::models::view::DateView;
use crate::utils::date::days_in_month;

/// Everything a builder needs besides the adapter.
pub struct GridContext<'a, D> {
    pub picker_moment: &'a D,
    pub min_date: Option<&'a D>,
    pub max_date: Option<&'a D>,
    /// 0 = Sunday
    pub first_day_of_week: u32,
    pub show_calendar_weeks: bool,
    pub multi_year: MultiYearOptions,
    pub formats: &'a DateTimeFormats,
    /// Combined filter and bounds check
    pub is_enabled: &'a dyn Fn(&D) -> bool,
}

/// Column header of the day grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekdayName {
    pub long: String,
    pub short: String,
    pub narrow: String,
}

/// One rendered page of a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    pub view: DateView,
    pub rows: Vec<Vec<CalendarCell>>,
    pub num_cols: usize,
    /// Row-major index of the cell holding the picker moment
    pub active_cell: usize,
    pub today_value: Option<i64>,
    /// ISO week per row, month view with calendar weeks only
    pub week_numbers: Vec<u32>,
    /// Day grid column headers, starting at the first day of week
    pub weekdays: Vec<WeekdayName>,
}

impl CalendarGrid {
    pub fn empty(view: DateView, num_cols: usize) -> Self {
        Self {
            view,
            rows: Vec::new(),
            num_cols,
            active_cell: 0,
            today_value: None,
            week_numbers: Vec::new(),
            weekdays: Vec::new(),
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&CalendarCell> {
        self.rows.get(row).and_then(|cells| cells.get(col))
    }

    pub fn cells(&self) -> impl Iterator<Item = &CalendarCell> {
        self.rows.iter().flatten()
    }
}

pub trait GridBuilder<A: DateTimeAdapter> {
    fn view(&self) -> DateView;

    fn build(&self, adapter: &A, ctx: &GridContext<'_, A::Date>) -> CalendarGrid;

    /// Key of `date` relative to the page anchored at the picker moment.
    fn cell_value(&self, adapter: &A, ctx: &GridContext<'_, A::Date>, date: &A::Date) -> i64;

    /// Date a key resolves to, carrying the picker moment's time of day.
    fn cell_date(&self, adapter: &A, ctx: &GridContext<'_, A::Date>, value: i64)
        -> Option<A::Date>;

    /// Whether two dates are shown on the same page of this view.
    fn is_same_page(
        &self,
        adapter: &A,
        ctx: &GridContext<'_, A::Date>,
        a: &A::Date,
        b: &A::Date,
    ) -> bool;
}

/// Builder for the given view.
pub fn grid_builder<'a, A: DateTimeAdapter + 'a>(view: DateView) -> Box<dyn GridBuilder<A> + 'a> {
    match view {
        DateView::Month => Box::new(MonthGrid),
        DateView::Year => Box::new(YearGrid),
        DateView::MultiYear => Box::new(MultiYearGrid),
    }
}

/// `year`/`month`/`day` clamped to the month length, at the moment's time.
pub(crate) fn date_at_moment_time<A: DateTimeAdapter>(
    adapter: &A,
    moment: &A::Date,
    year: i32,
    month: u32,
    day: u32,
) -> Option<A::Date> {
    let day = day.min(days_in_month(year, month));
    adapter
        .create_date_time(
            year,
            month,
            day,
            adapter.get_hours(moment),
            adapter.get_minutes(moment),
            adapter.get_seconds(moment),
        )
        .ok()
}

/// Whether any day of the month passes the filter and bounds.
pub(crate) fn is_month_enabled<A: DateTimeAdapter>(
    adapter: &A,
    ctx: &GridContext<'_, A::Date>,
    year: i32,
    month: u32,
) -> bool {
    (1..=days_in_month(year, month)).any(|day| {
        adapter
            .create_date(year, month, day)
            .map(|date| (ctx.is_enabled)(&date))
            .unwrap_or(false)
    })
}
