// Month grid
// Twelve months of the picker moment's year, three per row

use super::{date_at_moment_time, is_month_enabled, CalendarGrid, GridBuilder, GridContext};
use crate::adapter::{DateTimeAdapter, NameStyle};
use crate::models::cell::CalendarCell;
use crate::models::view::DateView;

pub const MONTHS_PER_ROW: usize = 3;
pub const YEAR_ROWS: usize = 4;

#[derive(Debug, Clone, Copy, Default)]
pub struct YearGrid;

impl<A: DateTimeAdapter> GridBuilder<A> for YearGrid {
    fn view(&self) -> DateView {
        DateView::Year
    }

    fn build(&self, adapter: &A, ctx: &GridContext<'_, A::Date>) -> CalendarGrid {
        let year = adapter.get_year(ctx.picker_moment);
        let month_names = adapter.get_month_names(NameStyle::Short);
        let now = adapter.now();

        let rows = (0..YEAR_ROWS)
            .map(|row| {
                (0..MONTHS_PER_ROW)
                    .map(|col| {
                        let month = (row * MONTHS_PER_ROW + col + 1) as u32;
                        let display = month_names
                            .get(month as usize - 1)
                            .cloned()
                            .unwrap_or_else(|| month.to_string());
                        let aria_label = adapter
                            .create_date(year, month, 1)
                            .map(|first| adapter.format(&first, &ctx.formats.month_year_a11y_label))
                            .unwrap_or_else(|_| display.clone());

                        CalendarCell::new(
                            month as i64,
                            display,
                            aria_label,
                            is_month_enabled(adapter, ctx, year, month),
                        )
                    })
                    .collect()
            })
            .collect();

        let today_value =
            (adapter.get_year(&now) == year).then(|| adapter.get_month(&now) as i64);

        CalendarGrid {
            view: DateView::Year,
            rows,
            num_cols: MONTHS_PER_ROW,
            active_cell: adapter.get_month(ctx.picker_moment) as usize - 1,
            today_value,
            week_numbers: Vec::new(),
            weekdays: Vec::new(),
        }
    }

    /// Months of other years continue the numbering: -11..0 for the
    /// previous year, 13..24 for the next.
    fn cell_value(&self, adapter: &A, ctx: &GridContext<'_, A::Date>, date: &A::Date) -> i64 {
        let year_diff = adapter.get_year(date) as i64 - adapter.get_year(ctx.picker_moment) as i64;
        year_diff * 12 + adapter.get_month(date) as i64
    }

    fn cell_date(
        &self,
        adapter: &A,
        ctx: &GridContext<'_, A::Date>,
        value: i64,
    ) -> Option<A::Date> {
        let moment = ctx.picker_moment;
        let year = adapter.get_year(moment) as i64 + (value - 1).div_euclid(12);
        let month = ((value - 1).rem_euclid(12) + 1) as u32;
        let year = i32::try_from(year).ok()?;
        date_at_moment_time(adapter, moment, year, month, adapter.get_date(moment))
    }

    fn is_same_page(
        &self,
        adapter: &A,
        _ctx: &GridContext<'_, A::Date>,
        a: &A::Date,
        b: &A::Date,
    ) -> bool {
        adapter.get_year(a) == adapter.get_year(b)
    }
}
