// Day grid
// Six weeks starting on the configured first day of week

use super::{date_at_moment_time, CalendarGrid, GridBuilder, GridContext, WeekdayName};
use crate::adapter::{DateTimeAdapter, NameStyle};
use crate::models::cell::CalendarCell;
use crate::models::view::DateView;

pub const DAYS_PER_WEEK: usize = 7;
pub const WEEKS_PER_VIEW: usize = 6;

#[derive(Debug, Clone, Copy, Default)]
pub struct MonthGrid;

impl MonthGrid {
    /// First day of the displayed month at the picker moment's time
    fn first_date_of_month<A: DateTimeAdapter>(
        adapter: &A,
        moment: &A::Date,
    ) -> Option<A::Date> {
        date_at_moment_time(
            adapter,
            moment,
            adapter.get_year(moment),
            adapter.get_month(moment),
            1,
        )
    }

    /// First day of the displayed month at midnight. Cells are built on
    /// whole days so day-granular bounds compare cleanly.
    fn first_day_of_month<A: DateTimeAdapter>(adapter: &A, moment: &A::Date) -> Option<A::Date> {
        adapter
            .create_date(adapter.get_year(moment), adapter.get_month(moment), 1)
            .ok()
    }

    /// Number of leading cells taken by the previous month
    fn first_row_offset<A: DateTimeAdapter>(
        adapter: &A,
        first_of_month: &A::Date,
        first_day_of_week: u32,
    ) -> i64 {
        let weekday = adapter.get_day(first_of_month) as i64;
        (DAYS_PER_WEEK as i64 + weekday - first_day_of_week as i64).rem_euclid(DAYS_PER_WEEK as i64)
    }

    fn weekday_headers<A: DateTimeAdapter>(adapter: &A, first_day_of_week: u32) -> Vec<WeekdayName> {
        let long = adapter.get_day_of_week_names(NameStyle::Long);
        let short = adapter.get_day_of_week_names(NameStyle::Short);
        let narrow = adapter.get_day_of_week_names(NameStyle::Narrow);

        (0..DAYS_PER_WEEK)
            .map(|i| (i + first_day_of_week as usize) % DAYS_PER_WEEK)
            .map(|day| WeekdayName {
                long: long.get(day).cloned().unwrap_or_default(),
                short: short.get(day).cloned().unwrap_or_default(),
                narrow: narrow.get(day).cloned().unwrap_or_default(),
            })
            .collect()
    }
}

impl<A: DateTimeAdapter> GridBuilder<A> for MonthGrid {
    fn view(&self) -> DateView {
        DateView::Month
    }

    fn build(&self, adapter: &A, ctx: &GridContext<'_, A::Date>) -> CalendarGrid {
        let Some(first) = Self::first_day_of_month(adapter, ctx.picker_moment) else {
            log::warn!("Picker moment has no first day of month; rendering an empty day grid");
            return CalendarGrid::empty(DateView::Month, DAYS_PER_WEEK);
        };

        let offset = Self::first_row_offset(adapter, &first, ctx.first_day_of_week);
        let days_in_month = adapter.get_num_days_in_month(&first) as i64;
        let date_names = adapter.get_date_names();
        let now = adapter.now();

        let mut today_value = None;
        let mut week_numbers = Vec::new();
        let mut rows = Vec::with_capacity(WEEKS_PER_VIEW);

        for row in 0..WEEKS_PER_VIEW {
            let mut week = Vec::with_capacity(DAYS_PER_WEEK);
            for col in 0..DAYS_PER_WEEK {
                let days_diff = (row * DAYS_PER_WEEK + col) as i64 - offset;
                let date = adapter.add_calendar_days(&first, days_diff);
                let value = days_diff + 1;

                if adapter.is_same_day(&now, &date) {
                    today_value = Some(value);
                }

                let day = adapter.get_date(&date);
                let display = date_names
                    .get(day as usize - 1)
                    .cloned()
                    .unwrap_or_else(|| day.to_string());

                week.push(
                    CalendarCell::new(
                        value,
                        display,
                        adapter.format(&date, &ctx.formats.date_a11y_label),
                        (ctx.is_enabled)(&date),
                    )
                    .adjacent(value < 1 || value > days_in_month)
                    .with_style_tag(format!("weekday-{}", adapter.get_day(&date))),
                );
            }

            if ctx.show_calendar_weeks {
                // The fourth cell of a row always lies in the row's ISO week
                let mid_week = adapter.add_calendar_days(&first, (row * DAYS_PER_WEEK) as i64 - offset + 3);
                week_numbers.push(adapter.get_week_number(&mid_week));
            }

            rows.push(week);
        }

        let active_cell = (offset + adapter.get_date(ctx.picker_moment) as i64 - 1).max(0) as usize;

        CalendarGrid {
            view: DateView::Month,
            rows,
            num_cols: DAYS_PER_WEEK,
            active_cell,
            today_value,
            week_numbers,
            weekdays: Self::weekday_headers(adapter, ctx.first_day_of_week),
        }
    }

    fn cell_value(&self, adapter: &A, ctx: &GridContext<'_, A::Date>, date: &A::Date) -> i64 {
        match Self::first_day_of_month(adapter, ctx.picker_moment) {
            Some(first) => adapter.difference_in_calendar_days(date, &first) + 1,
            None => adapter.get_date(date) as i64,
        }
    }

    fn cell_date(
        &self,
        adapter: &A,
        ctx: &GridContext<'_, A::Date>,
        value: i64,
    ) -> Option<A::Date> {
        let first = Self::first_date_of_month(adapter, ctx.picker_moment)?;
        Some(adapter.add_calendar_days(&first, value - 1))
    }

    fn is_same_page(
        &self,
        adapter: &A,
        _ctx: &GridContext<'_, A::Date>,
        a: &A::Date,
        b: &A::Date,
    ) -> bool {
        adapter.get_year(a) == adapter.get_year(b) && adapter.get_month(a) == adapter.get_month(b)
    }
}
