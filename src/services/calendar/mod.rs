//! Calendar navigation and selection state machine.
//!
//! A [`Calendar`] owns the active view, the picker moment and the selection
//! of one picker instance. Host input always goes through the adapter's
//! `deserialize` plus validity checks; invalid input is absorbed as `None`.
//! Outward notifications queue up as [`CalendarEvent`]s until the host
//! drains them.

mod body;
mod events;
mod keyboard;

pub use body::CalendarBody;
pub use events::CalendarEvent;
pub use keyboard::CalendarKey;

use crate::adapter::{DateInput, DateTimeAdapter, DateTimeFormats};
use crate::error::PickerError;
use crate::models::cell::CalendarCell;
use crate::models::selection::Selection;
use crate::models::settings::{MultiYearOptions, PickerSettings};
use crate::models::view::{DateView, SelectMode};
use crate::services::grid::{grid_builder, CalendarGrid, GridBuilder, GridContext};
use std::cmp::Ordering;
use std::collections::VecDeque;

/// Extra predicate deciding which dates may be picked.
pub type DateFilter<D> = Box<dyn Fn(&D) -> bool>;

pub struct Calendar<A: DateTimeAdapter> {
    adapter: A,
    current_view: DateView,
    picker_moment: A::Date,
    min_date: Option<A::Date>,
    max_date: Option<A::Date>,
    selection: Selection<A::Date>,
    select_mode: SelectMode,
    date_filter: Option<DateFilter<A::Date>>,
    first_day_of_week: u32,
    start_view: DateView,
    year_only: bool,
    multiyear_only: bool,
    hide_other_months: bool,
    show_calendar_weeks: bool,
    formats: DateTimeFormats,
    multi_year: MultiYearOptions,
    events: VecDeque<CalendarEvent<A::Date>>,
    /// Set on view changes; the render loop moves focus to the active cell
    /// once the new grid exists and then clears it.
    move_focus_on_next_tick: bool,
}

impl<A: DateTimeAdapter> Calendar<A> {
    /// Calendar in month view, anchored at now, with nothing selected
    pub fn new(adapter: A) -> Self {
        let picker_moment = adapter.now();
        Self {
            adapter,
            current_view: DateView::Month,
            picker_moment,
            min_date: None,
            max_date: None,
            selection: Selection::new(),
            select_mode: SelectMode::Single,
            date_filter: None,
            first_day_of_week: 0,
            start_view: DateView::Month,
            year_only: false,
            multiyear_only: false,
            hide_other_months: false,
            show_calendar_weeks: false,
            formats: DateTimeFormats::default(),
            multi_year: MultiYearOptions::default(),
            events: VecDeque::new(),
            move_focus_on_next_tick: false,
        }
    }

    pub fn builder(adapter: A) -> CalendarBuilder<A> {
        CalendarBuilder::new(adapter)
    }

    /// Apply a settings value to a fresh calendar. The settings' locale is
    /// set on the adapter (and thereby on every clone sharing it).
    pub fn from_settings(adapter: A, settings: &PickerSettings) -> Result<Self, PickerError> {
        adapter.set_locale(&settings.locale);
        Self::builder(adapter)
            .select_mode(settings.select_mode)
            .start_view(settings.start_view)
            .first_day_of_week(u32::from(settings.first_day_of_week))
            .year_only(settings.year_only)
            .multiyear_only(settings.multiyear_only)
            .hide_other_months(settings.hide_other_months)
            .show_calendar_weeks(settings.show_calendar_weeks)
            .formats(settings.formats.clone())
            .multi_year(settings.multi_year)
            .build()
    }

    // ----- inputs -----

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn min_date(&self) -> Option<&A::Date> {
        self.min_date.as_ref()
    }

    /// Deserialize, validate and truncate to the start of the day. Invalid
    /// or empty input clears the bound.
    pub fn set_min_date(&mut self, raw: DateInput<A::Date>) {
        self.min_date = self.day_bound(raw);
    }

    pub fn max_date(&self) -> Option<&A::Date> {
        self.max_date.as_ref()
    }

    pub fn set_max_date(&mut self, raw: DateInput<A::Date>) {
        self.max_date = self.day_bound(raw);
    }

    pub fn picker_moment(&self) -> &A::Date {
        &self.picker_moment
    }

    /// Invalid input falls back to now; the result is clamped to the bounds.
    pub fn set_picker_moment(&mut self, raw: DateInput<A::Date>) {
        let moment = self.valid_date(raw).unwrap_or_else(|| self.adapter.now());
        self.picker_moment = self.clamp(&moment);
    }

    pub fn selection(&self) -> &Selection<A::Date> {
        &self.selection
    }

    pub fn selected(&self) -> Option<&A::Date> {
        self.selection.selected()
    }

    pub fn set_selected(&mut self, raw: DateInput<A::Date>) {
        let value = self.valid_date(raw);
        self.selection.set_selected(value);
    }

    pub fn selecteds(&self) -> &[Option<A::Date>] {
        self.selection.selecteds()
    }

    /// Invalid entries become `None` in place so range positions survive.
    pub fn set_selecteds<I>(&mut self, raws: I)
    where
        I: IntoIterator<Item = DateInput<A::Date>>,
    {
        let values = raws.into_iter().map(|raw| self.valid_date(raw)).collect();
        self.selection.set_selecteds(values);
    }

    pub fn select_mode(&self) -> SelectMode {
        self.select_mode
    }

    pub fn set_select_mode(&mut self, mode: SelectMode) {
        self.select_mode = mode;
    }

    pub fn set_date_filter<F>(&mut self, filter: F)
    where
        F: Fn(&A::Date) -> bool + 'static,
    {
        self.date_filter = Some(Box::new(filter));
    }

    pub fn clear_date_filter(&mut self) {
        self.date_filter = None;
    }

    pub fn first_day_of_week(&self) -> u32 {
        self.first_day_of_week
    }

    pub fn set_first_day_of_week(&mut self, day: u32) -> Result<(), PickerError> {
        if day > 6 {
            return Err(PickerError::InvalidFirstDayOfWeek(day));
        }
        self.first_day_of_week = day;
        Ok(())
    }

    pub fn start_view(&self) -> DateView {
        self.start_view
    }

    pub fn set_start_view(&mut self, view: DateView) {
        self.start_view = view;
    }

    pub fn year_only(&self) -> bool {
        self.year_only
    }

    pub fn set_year_only(&mut self, year_only: bool) {
        self.year_only = year_only;
    }

    pub fn multiyear_only(&self) -> bool {
        self.multiyear_only
    }

    pub fn set_multiyear_only(&mut self, multiyear_only: bool) {
        self.multiyear_only = multiyear_only;
    }

    pub fn hide_other_months(&self) -> bool {
        self.hide_other_months
    }

    pub fn set_hide_other_months(&mut self, hide: bool) {
        self.hide_other_months = hide;
    }

    pub fn show_calendar_weeks(&self) -> bool {
        self.show_calendar_weeks
    }

    pub fn set_show_calendar_weeks(&mut self, show: bool) {
        self.show_calendar_weeks = show;
    }

    pub fn formats(&self) -> &DateTimeFormats {
        &self.formats
    }

    pub fn set_formats(&mut self, formats: DateTimeFormats) {
        self.formats = formats;
    }

    pub fn multi_year_options(&self) -> MultiYearOptions {
        self.multi_year
    }

    pub fn set_multi_year_options(&mut self, options: MultiYearOptions) -> Result<(), PickerError> {
        if !options.is_valid() {
            return Err(PickerError::InvalidMultiYearLayout {
                rows: options.year_rows,
                cols: options.years_per_row,
            });
        }
        self.multi_year = options;
        Ok(())
    }

    // ----- derived state -----

    pub fn current_view(&self) -> DateView {
        self.current_view
    }

    pub fn is_in_single_mode(&self) -> bool {
        self.select_mode.is_single()
    }

    pub fn is_in_range_mode(&self) -> bool {
        self.select_mode.is_range()
    }

    pub fn is_month_view(&self) -> bool {
        self.current_view == DateView::Month
    }

    /// No period arrows on the year grid
    pub fn show_control_arrows(&self) -> bool {
        self.current_view != DateView::MultiYear
    }

    /// Month view shows the month-year label, the other views the year name.
    pub fn period_button_text(&self) -> String {
        if self.is_month_view() {
            self.adapter
                .format(&self.picker_moment, &self.formats.month_year_label)
        } else {
            self.adapter.get_year_name(&self.picker_moment)
        }
    }

    /// Selectable iff the filter and both bounds accept the date.
    pub fn is_date_enabled(&self, date: &A::Date) -> bool {
        if !self.date_filter.as_ref().map_or(true, |filter| filter(date)) {
            return false;
        }

        // Bounds are whole days, so the time of day never matters here
        let day = self.start_of_day(date);
        self.min_date
            .as_ref()
            .map_or(true, |min| self.adapter.compare(&day, min) != Ordering::Less)
            && self
                .max_date
                .as_ref()
                .map_or(true, |max| self.adapter.compare(&day, max) != Ordering::Greater)
    }

    pub fn prev_enabled(&self) -> bool {
        self.min_date
            .as_ref()
            .map_or(true, |min| !self.is_same_view(&self.picker_moment, min))
    }

    pub fn next_enabled(&self) -> bool {
        self.max_date
            .as_ref()
            .map_or(true, |max| !self.is_same_view(&self.picker_moment, max))
    }

    /// Page of the active view
    pub fn grid(&self) -> CalendarGrid {
        let builder = grid_builder::<A>(self.current_view);
        self.with_grid_context(|ctx| builder.build(&self.adapter, ctx))
    }

    /// Cell interaction handler for the current render pass
    pub fn body(&self) -> CalendarBody {
        let builder = grid_builder::<A>(self.current_view);
        let (grid, selected_values) = self.with_grid_context(|ctx| {
            let grid = builder.build(&self.adapter, ctx);
            let key = |date: &A::Date| builder.cell_value(&self.adapter, ctx, date);
            let selected_values = if self.is_in_single_mode() {
                self.selection.selected().map(key).into_iter().map(Some).collect()
            } else {
                vec![
                    self.selection.range_from().map(key),
                    self.selection.range_to().map(key),
                ]
            };
            (grid, selected_values)
        });

        CalendarBody::new(grid, selected_values, self.select_mode)
            .hide_other_months(self.hide_other_months && self.is_month_view())
    }

    // ----- transitions -----

    /// Month view goes to the year grid; the coarser views go back down as
    /// far as the `*_only` flags allow.
    pub fn toggle_views(&mut self) {
        let next = match self.current_view {
            DateView::Month => DateView::MultiYear,
            _ if self.multiyear_only => DateView::MultiYear,
            DateView::Year if self.year_only => DateView::MultiYear,
            _ if self.year_only => DateView::Year,
            _ => DateView::Month,
        };
        self.set_current_view(next);
    }

    pub fn previous_period(&mut self) {
        self.picker_moment = if self.is_month_view() {
            self.adapter.add_calendar_months(&self.picker_moment, -1)
        } else {
            self.adapter.add_calendar_years(&self.picker_moment, -1)
        };
        self.emit(CalendarEvent::PickerMomentChanged(self.picker_moment.clone()));
    }

    pub fn next_period(&mut self) {
        self.picker_moment = if self.is_month_view() {
            self.adapter.add_calendar_months(&self.picker_moment, 1)
        } else {
            self.adapter.add_calendar_years(&self.picker_moment, 1)
        };
        self.emit(CalendarEvent::PickerMomentChanged(self.picker_moment.clone()));
    }

    /// Accept a pick. Dates failing the filter or bounds are ignored and
    /// emit nothing. Returns whether the pick was accepted.
    pub fn select_date(&mut self, date: A::Date) -> bool {
        if !self.is_date_enabled(&date) {
            log::debug!("Ignoring pick of unselectable date {:?}", date);
            return false;
        }

        self.selection.apply_pick(self.select_mode, date.clone());
        self.emit(CalendarEvent::DateClicked(date.clone()));
        self.emit(CalendarEvent::SelectedChanged(date));
        true
    }

    /// Move the picker moment to `date` and switch to `view`. When the
    /// `*_only` flags make `view` unreachable the pick is final instead.
    pub fn go_to_date_in_view(&mut self, date: A::Date, view: DateView) {
        self.handle_picker_moment_change(date.clone());

        let reachable = (!self.year_only && !self.multiyear_only)
            || (self.multiyear_only && view == DateView::MultiYear)
            || (self.year_only && view != DateView::Month);

        if reachable {
            self.set_current_view(view);
        } else {
            self.select_date(date);
        }
    }

    /// Clamp `date` into the bounds, make it the picker moment and announce it.
    pub fn handle_picker_moment_change(&mut self, date: A::Date) {
        self.picker_moment = self.clamp(&date);
        self.emit(CalendarEvent::PickerMomentChanged(self.picker_moment.clone()));
    }

    pub fn confirm_selection(&mut self) {
        self.emit(CalendarEvent::UserSelection);
    }

    pub fn select_year_in_multi_year_view(&mut self, normalized_year: A::Date) {
        self.emit(CalendarEvent::YearSelected(normalized_year));
    }

    pub fn select_month_in_year_view(&mut self, normalized_month: A::Date) {
        self.emit(CalendarEvent::MonthSelected(normalized_month));
    }

    /// Pick reported by the renderer as a grid position.
    pub fn select_cell_at(&mut self, row: usize, col: usize) {
        let Some(cell) = self.body().select_cell(row, col) else {
            log::debug!("No cell at row {} col {}", row, col);
            return;
        };
        self.select_calendar_cell(&cell);
    }

    /// Pick reported by the renderer as a cell of the current grid.
    pub fn select_calendar_cell(&mut self, cell: &CalendarCell) {
        if !cell.enabled() {
            return;
        }

        match self.current_view {
            DateView::Month => {
                if self.hide_other_months && cell.belongs_to_adjacent_period() {
                    return;
                }
                if let Some(date) = self.cell_date(cell.value()) {
                    if self.select_date(date) {
                        self.confirm_selection();
                    }
                }
            }
            DateView::Year => {
                let Some(date) = self.cell_date(cell.value()) else {
                    return;
                };
                let year = self.adapter.get_year(&date);
                let month = self.adapter.get_month(&date);
                if let Ok(first_of_month) = self.adapter.create_date(year, month, 1) {
                    self.select_month_in_year_view(first_of_month);
                }
                self.go_to_date_in_view(date, DateView::Month);
            }
            DateView::MultiYear => {
                let Some(date) = self.cell_date(cell.value()) else {
                    return;
                };
                let year = self.adapter.get_year(&date);
                if let Ok(jan_first) = self.adapter.create_date(year, 1, 1) {
                    self.select_year_in_multi_year_view(jan_first);
                }
                self.go_to_date_in_view(date, DateView::Year);
            }
        }
    }

    // ----- events and focus -----

    pub fn events(&self) -> impl Iterator<Item = &CalendarEvent<A::Date>> {
        self.events.iter()
    }

    /// Hand the queued events to the host
    pub fn drain_events(&mut self) -> Vec<CalendarEvent<A::Date>> {
        self.events.drain(..).collect()
    }

    pub fn focus_requested(&self) -> bool {
        self.move_focus_on_next_tick
    }

    /// Consume the pending focus request. Returns `true` at most once per
    /// request; dropping the calendar discards any request.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.move_focus_on_next_tick)
    }

    // ----- internals -----

    fn set_current_view(&mut self, view: DateView) {
        if self.current_view != view {
            log::debug!("Calendar view {} -> {}", self.current_view.name(), view.name());
        }
        self.current_view = view;
        self.move_focus_on_next_tick = true;
    }

    fn emit(&mut self, event: CalendarEvent<A::Date>) {
        self.events.push_back(event);
    }

    fn valid_date(&self, raw: DateInput<A::Date>) -> Option<A::Date> {
        self.adapter.get_valid_date_or_null(raw)
    }

    fn day_bound(&self, raw: DateInput<A::Date>) -> Option<A::Date> {
        let date = self.valid_date(raw)?;
        match self.truncate_to_day(&date) {
            Ok(day) => Some(day),
            Err(err) => {
                log::warn!("Dropping date bound: {}", err);
                None
            }
        }
    }

    fn truncate_to_day(&self, date: &A::Date) -> Result<A::Date, PickerError> {
        self.adapter.create_date(
            self.adapter.get_year(date),
            self.adapter.get_month(date),
            self.adapter.get_date(date),
        )
    }

    fn start_of_day(&self, date: &A::Date) -> A::Date {
        self.truncate_to_day(date).unwrap_or_else(|_| date.clone())
    }

    fn clamp(&self, date: &A::Date) -> A::Date {
        self.adapter
            .clamp_date(date, self.min_date.as_ref(), self.max_date.as_ref())
    }

    /// Year grid pages never block the period arrows
    fn is_same_view(&self, a: &A::Date, b: &A::Date) -> bool {
        if self.current_view == DateView::MultiYear {
            return false;
        }
        let builder = grid_builder::<A>(self.current_view);
        self.with_grid_context(|ctx| builder.is_same_page(&self.adapter, ctx, a, b))
    }

    fn with_grid_context<R>(&self, f: impl FnOnce(&GridContext<'_, A::Date>) -> R) -> R {
        let is_enabled = |date: &A::Date| self.is_date_enabled(date);
        let ctx = GridContext {
            picker_moment: &self.picker_moment,
            min_date: self.min_date.as_ref(),
            max_date: self.max_date.as_ref(),
            first_day_of_week: self.first_day_of_week,
            show_calendar_weeks: self.show_calendar_weeks,
            multi_year: self.multi_year,
            formats: &self.formats,
            is_enabled: &is_enabled,
        };
        f(&ctx)
    }

    fn cell_date(&self, value: i64) -> Option<A::Date> {
        let builder = grid_builder::<A>(self.current_view);
        self.with_grid_context(|ctx| builder.cell_date(&self.adapter, ctx, value))
    }
}

/// Builder for configuring a calendar before its first render
pub struct CalendarBuilder<A: DateTimeAdapter> {
    adapter: A,
    min_date: DateInput<A::Date>,
    max_date: DateInput<A::Date>,
    picker_moment: DateInput<A::Date>,
    selected: DateInput<A::Date>,
    selecteds: Vec<DateInput<A::Date>>,
    select_mode: SelectMode,
    date_filter: Option<DateFilter<A::Date>>,
    first_day_of_week: u32,
    start_view: DateView,
    year_only: bool,
    multiyear_only: bool,
    hide_other_months: bool,
    show_calendar_weeks: bool,
    formats: DateTimeFormats,
    multi_year: MultiYearOptions,
}

impl<A: DateTimeAdapter> CalendarBuilder<A> {
    pub fn new(adapter: A) -> Self {
        Self {
            adapter,
            min_date: DateInput::Empty,
            max_date: DateInput::Empty,
            picker_moment: DateInput::Empty,
            selected: DateInput::Empty,
            selecteds: Vec::new(),
            select_mode: SelectMode::Single,
            date_filter: None,
            first_day_of_week: 0,
            start_view: DateView::Month,
            year_only: false,
            multiyear_only: false,
            hide_other_months: false,
            show_calendar_weeks: false,
            formats: DateTimeFormats::default(),
            multi_year: MultiYearOptions::default(),
        }
    }

    pub fn min_date(mut self, raw: impl Into<DateInput<A::Date>>) -> Self {
        self.min_date = raw.into();
        self
    }

    pub fn max_date(mut self, raw: impl Into<DateInput<A::Date>>) -> Self {
        self.max_date = raw.into();
        self
    }

    pub fn picker_moment(mut self, raw: impl Into<DateInput<A::Date>>) -> Self {
        self.picker_moment = raw.into();
        self
    }

    pub fn selected(mut self, raw: impl Into<DateInput<A::Date>>) -> Self {
        self.selected = raw.into();
        self
    }

    pub fn selecteds<I>(mut self, raws: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<DateInput<A::Date>>,
    {
        self.selecteds = raws.into_iter().map(Into::into).collect();
        self
    }

    pub fn select_mode(mut self, mode: SelectMode) -> Self {
        self.select_mode = mode;
        self
    }

    pub fn date_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&A::Date) -> bool + 'static,
    {
        self.date_filter = Some(Box::new(filter));
        self
    }

    pub fn first_day_of_week(mut self, day: u32) -> Self {
        self.first_day_of_week = day;
        self
    }

    pub fn start_view(mut self, view: DateView) -> Self {
        self.start_view = view;
        self
    }

    pub fn year_only(mut self, year_only: bool) -> Self {
        self.year_only = year_only;
        self
    }

    pub fn multiyear_only(mut self, multiyear_only: bool) -> Self {
        self.multiyear_only = multiyear_only;
        self
    }

    pub fn hide_other_months(mut self, hide: bool) -> Self {
        self.hide_other_months = hide;
        self
    }

    pub fn show_calendar_weeks(mut self, show: bool) -> Self {
        self.show_calendar_weeks = show;
        self
    }

    pub fn formats(mut self, formats: DateTimeFormats) -> Self {
        self.formats = formats;
        self
    }

    pub fn multi_year(mut self, options: MultiYearOptions) -> Self {
        self.multi_year = options;
        self
    }

    /// Build the calendar. Bounds are applied before the picker moment so
    /// the initial moment is clamped into them.
    pub fn build(self) -> Result<Calendar<A>, PickerError> {
        let mut calendar = Calendar::new(self.adapter);
        calendar.set_first_day_of_week(self.first_day_of_week)?;
        calendar.set_multi_year_options(self.multi_year)?;

        calendar.set_min_date(self.min_date);
        calendar.set_max_date(self.max_date);
        calendar.set_picker_moment(self.picker_moment);
        calendar.set_selected(self.selected);
        calendar.set_selecteds(self.selecteds);
        calendar.select_mode = self.select_mode;
        calendar.date_filter = self.date_filter;
        calendar.year_only = self.year_only;
        calendar.multiyear_only = self.multiyear_only;
        calendar.hide_other_months = self.hide_other_months;
        calendar.show_calendar_weeks = self.show_calendar_weeks;
        calendar.formats = self.formats;
        calendar.start_view = self.start_view;
        calendar.current_view = self.start_view;

        Ok(calendar)
    }
}
