// Keyboard navigation
// Arrow and paging keys move the picker moment within the active view;
// Enter picks the cell under the moment.

use super::Calendar;
use crate::adapter::DateTimeAdapter;
use crate::models::view::DateView;
use crate::services::grid::{grid_builder, MultiYearGrid};

/// Keys the calendar reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarKey {
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    Enter,
}

impl<A: DateTimeAdapter> Calendar<A> {
    /// Handle a key press in the active view. `alt` widens the paging keys
    /// (a year in the day grid, a decade in the month grid, ten pages in
    /// the year grid). Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: CalendarKey, alt: bool) -> bool {
        if key == CalendarKey::Enter {
            self.pick_active_cell();
            return true;
        }

        let target = match self.current_view {
            DateView::Month => self.month_view_target(key, alt),
            DateView::Year => self.year_view_target(key, alt),
            DateView::MultiYear => self.multi_year_view_target(key, alt),
        };

        match target {
            Some(date) => {
                self.handle_picker_moment_change(date);
                self.move_focus_on_next_tick = true;
                true
            }
            None => false,
        }
    }

    fn month_view_target(&self, key: CalendarKey, alt: bool) -> Option<A::Date> {
        let adapter = &self.adapter;
        let moment = &self.picker_moment;
        let date = match key {
            CalendarKey::Left => adapter.add_calendar_days(moment, -1),
            CalendarKey::Right => adapter.add_calendar_days(moment, 1),
            CalendarKey::Up => adapter.add_calendar_days(moment, -7),
            CalendarKey::Down => adapter.add_calendar_days(moment, 7),
            CalendarKey::Home => {
                adapter.add_calendar_days(moment, 1 - i64::from(adapter.get_date(moment)))
            }
            CalendarKey::End => {
                let remaining = adapter.get_num_days_in_month(moment) - adapter.get_date(moment);
                adapter.add_calendar_days(moment, i64::from(remaining))
            }
            CalendarKey::PageUp if alt => adapter.add_calendar_years(moment, -1),
            CalendarKey::PageUp => adapter.add_calendar_months(moment, -1),
            CalendarKey::PageDown if alt => adapter.add_calendar_years(moment, 1),
            CalendarKey::PageDown => adapter.add_calendar_months(moment, 1),
            CalendarKey::Enter => return None,
        };
        Some(date)
    }

    fn year_view_target(&self, key: CalendarKey, alt: bool) -> Option<A::Date> {
        let adapter = &self.adapter;
        let moment = &self.picker_moment;
        let month = adapter.get_month(moment) as i32;
        let date = match key {
            CalendarKey::Left => adapter.add_calendar_months(moment, -1),
            CalendarKey::Right => adapter.add_calendar_months(moment, 1),
            CalendarKey::Up => adapter.add_calendar_months(moment, -3),
            CalendarKey::Down => adapter.add_calendar_months(moment, 3),
            CalendarKey::Home => adapter.add_calendar_months(moment, 1 - month),
            CalendarKey::End => adapter.add_calendar_months(moment, 12 - month),
            CalendarKey::PageUp => adapter.add_calendar_years(moment, if alt { -10 } else { -1 }),
            CalendarKey::PageDown => adapter.add_calendar_years(moment, if alt { 10 } else { 1 }),
            CalendarKey::Enter => return None,
        };
        Some(date)
    }

    fn multi_year_view_target(&self, key: CalendarKey, alt: bool) -> Option<A::Date> {
        let per_row = self.multi_year.years_per_row as i32;
        let per_page = self.multi_year.years_per_page() as i32;
        let offset = self.with_grid_context(|ctx| {
            MultiYearGrid::active_offset(&self.adapter, ctx, &self.picker_moment)
        }) as i32;

        let years = match key {
            CalendarKey::Left => -1,
            CalendarKey::Right => 1,
            CalendarKey::Up => -per_row,
            CalendarKey::Down => per_row,
            CalendarKey::Home => -offset,
            CalendarKey::End => per_page - offset - 1,
            CalendarKey::PageUp => -per_page * if alt { 10 } else { 1 },
            CalendarKey::PageDown => per_page * if alt { 10 } else { 1 },
            CalendarKey::Enter => return None,
        };
        Some(self.adapter.add_calendar_years(&self.picker_moment, years))
    }

    /// Pick the cell holding the picker moment, as if it had been clicked.
    fn pick_active_cell(&mut self) {
        let builder = grid_builder::<A>(self.current_view);
        let (grid, value) = self.with_grid_context(|ctx| {
            (
                builder.build(&self.adapter, ctx),
                builder.cell_value(&self.adapter, ctx, &self.picker_moment),
            )
        });

        match grid.cells().find(|cell| cell.value() == value).cloned() {
            Some(cell) => self.select_calendar_cell(&cell),
            None => log::debug!("No cell with key {} in the {} grid", value, self.current_view.name()),
        };
    }
}

