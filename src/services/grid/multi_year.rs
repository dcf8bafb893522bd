// Year grid
// A page of `years_per_row * year_rows` years. Pages are anchored so that the
// max bound (or else the min bound) lands on a page edge.

use super::{date_at_moment_time, is_month_enabled, CalendarGrid, GridBuilder, GridContext};
use crate::adapter::DateTimeAdapter;
use crate::models::cell::CalendarCell;
use crate::models::view::DateView;

#[derive(Debug, Clone, Copy, Default)]
pub struct MultiYearGrid;

impl MultiYearGrid {
    fn years_per_page<D>(ctx: &GridContext<'_, D>) -> i64 {
        i64::from(ctx.multi_year.years_per_page().max(1))
    }

    /// Year that starts some page
    fn starting_year<A: DateTimeAdapter>(adapter: &A, ctx: &GridContext<'_, A::Date>) -> i64 {
        if let Some(max) = ctx.max_date {
            adapter.get_year(max) as i64 - Self::years_per_page(ctx) + 1
        } else if let Some(min) = ctx.min_date {
            adapter.get_year(min) as i64
        } else {
            0
        }
    }

    /// Position of `date`'s year within its page
    pub fn active_offset<A: DateTimeAdapter>(
        adapter: &A,
        ctx: &GridContext<'_, A::Date>,
        date: &A::Date,
    ) -> i64 {
        (adapter.get_year(date) as i64 - Self::starting_year(adapter, ctx))
            .rem_euclid(Self::years_per_page(ctx))
    }

    fn is_year_enabled<A: DateTimeAdapter>(
        adapter: &A,
        ctx: &GridContext<'_, A::Date>,
        year: i32,
    ) -> bool {
        if ctx.min_date.is_some_and(|min| year < adapter.get_year(min)) {
            return false;
        }
        if ctx.max_date.is_some_and(|max| year > adapter.get_year(max)) {
            return false;
        }
        (1..=12).any(|month| is_month_enabled(adapter, ctx, year, month))
    }
}

impl<A: DateTimeAdapter> GridBuilder<A> for MultiYearGrid {
    fn view(&self) -> DateView {
        DateView::MultiYear
    }

    fn build(&self, adapter: &A, ctx: &GridContext<'_, A::Date>) -> CalendarGrid {
        let per_row = ctx.multi_year.years_per_row.max(1) as usize;
        let rows = ctx.multi_year.year_rows.max(1) as usize;
        let active_offset = Self::active_offset(adapter, ctx, ctx.picker_moment);
        let first_year = adapter.get_year(ctx.picker_moment) as i64 - active_offset;

        let rows = (0..rows)
            .map(|row| {
                (0..per_row)
                    .map(|col| {
                        let year = first_year + (row * per_row + col) as i64;
                        let jan_first = i32::try_from(year)
                            .ok()
                            .and_then(|y| adapter.create_date(y, 1, 1).ok());
                        match jan_first {
                            Some(date) => {
                                let name = adapter.get_year_name(&date);
                                CalendarCell::new(
                                    year,
                                    name.clone(),
                                    name,
                                    Self::is_year_enabled(adapter, ctx, year as i32),
                                )
                            }
                            None => CalendarCell::new(year, year.to_string(), year.to_string(), false),
                        }
                    })
                    .collect()
            })
            .collect();

        CalendarGrid {
            view: DateView::MultiYear,
            rows,
            num_cols: per_row,
            active_cell: active_offset as usize,
            today_value: Some(adapter.get_year(&adapter.now()) as i64),
            week_numbers: Vec::new(),
            weekdays: Vec::new(),
        }
    }

    fn cell_value(&self, adapter: &A, _ctx: &GridContext<'_, A::Date>, date: &A::Date) -> i64 {
        adapter.get_year(date) as i64
    }

    fn cell_date(
        &self,
        adapter: &A,
        ctx: &GridContext<'_, A::Date>,
        value: i64,
    ) -> Option<A::Date> {
        let moment = ctx.picker_moment;
        let year = i32::try_from(value).ok()?;
        date_at_moment_time(
            adapter,
            moment,
            year,
            adapter.get_month(moment),
            adapter.get_date(moment),
        )
    }

    fn is_same_page(
        &self,
        adapter: &A,
        ctx: &GridContext<'_, A::Date>,
        a: &A::Date,
        b: &A::Date,
    ) -> bool {
        let page_start =
            |date: &A::Date| adapter.get_year(date) as i64 - Self::active_offset(adapter, ctx, date);
        page_start(a) == page_start(b)
    }
}
