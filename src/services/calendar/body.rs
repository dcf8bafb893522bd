// Calendar body
// Per-cell visual predicates for one render pass. Picks are handed back to
// the calendar; the body never writes selection state.

use crate::models::cell::CalendarCell;
use crate::models::view::SelectMode;
use crate::services::grid::CalendarGrid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarBody {
    grid: CalendarGrid,
    /// Cell keys of the selection: `[selected]` or `[from, to]`
    selected_values: Vec<Option<i64>>,
    select_mode: SelectMode,
    hide_other_months: bool,
}

impl CalendarBody {
    pub fn new(grid: CalendarGrid, selected_values: Vec<Option<i64>>, select_mode: SelectMode) -> Self {
        Self {
            grid,
            selected_values,
            select_mode,
            hide_other_months: false,
        }
    }

    /// Hide cells of adjacent months (day grid only)
    pub fn hide_other_months(mut self, hide: bool) -> Self {
        self.hide_other_months = hide;
        self
    }

    pub fn grid(&self) -> &CalendarGrid {
        &self.grid
    }

    pub fn rows(&self) -> &[Vec<CalendarCell>] {
        &self.grid.rows
    }

    pub fn num_cols(&self) -> usize {
        self.grid.num_cols
    }

    pub fn active_cell(&self) -> usize {
        self.grid.active_cell
    }

    pub fn selected_values(&self) -> &[Option<i64>] {
        &self.selected_values
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&CalendarCell> {
        self.grid.cell(row, col)
    }

    /// The cell to forward to the calendar for a pick at `(row, col)`
    pub fn select_cell(&self, row: usize, col: usize) -> Option<CalendarCell> {
        self.cell(row, col).cloned()
    }

    pub fn is_in_single_mode(&self) -> bool {
        self.select_mode.is_single()
    }

    pub fn is_in_range_mode(&self) -> bool {
        self.select_mode.is_range()
    }

    pub fn is_active_cell(&self, row: usize, col: usize) -> bool {
        row * self.grid.num_cols + col == self.grid.active_cell
    }

    pub fn is_today(&self, value: i64) -> bool {
        self.grid.today_value == Some(value)
    }

    pub fn is_hidden(&self, cell: &CalendarCell) -> bool {
        self.hide_other_months && cell.belongs_to_adjacent_period()
    }

    pub fn is_selected(&self, value: i64) -> bool {
        if self.selected_values.is_empty() {
            return false;
        }

        if self.is_in_single_mode() {
            return self.selected_values[0] == Some(value);
        }

        self.from_value() == Some(value) || self.to_value() == Some(value)
    }

    /// With both endpoints set, `from <= value <= to`; with one endpoint,
    /// only that endpoint is in range.
    pub fn is_in_range(&self, value: i64) -> bool {
        if !self.is_in_range_mode() {
            return false;
        }

        match (self.from_value(), self.to_value()) {
            (Some(from), Some(to)) => value >= from && value <= to,
            (from, to) => from == Some(value) || to == Some(value),
        }
    }

    pub fn is_range_from(&self, value: i64) -> bool {
        self.is_in_range_mode() && self.from_value() == Some(value)
    }

    pub fn is_range_to(&self, value: i64) -> bool {
        self.is_in_range_mode() && self.to_value() == Some(value)
    }

    fn from_value(&self) -> Option<i64> {
        self.selected_values.first().copied().flatten()
    }

    fn to_value(&self) -> Option<i64> {
        self.selected_values.get(1).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::view::DateView;

    fn grid() -> CalendarGrid {
        let mut grid = CalendarGrid::empty(DateView::Month, 7);
        grid.rows = (0..2)
            .map(|row| {
                (0..7)
                    .map(|col| {
                        let value = row * 7 + col - 1;
                        CalendarCell::new(value, value.to_string(), "", true).adjacent(value < 1)
                    })
                    .collect()
            })
            .collect();
        grid.active_cell = 9;
        grid.today_value = Some(3);
        grid
    }

    #[test]
    fn test_single_mode_predicates() {
        let body = CalendarBody::new(grid(), vec![Some(4)], SelectMode::Single);
        assert!(body.is_selected(4));
        assert!(!body.is_selected(5));
        assert!(!body.is_in_range(4));
        assert!(!body.is_range_from(4));
        assert!(!body.is_range_to(4));
    }

    #[test]
    fn test_empty_selection() {
        let body = CalendarBody::new(grid(), Vec::new(), SelectMode::Single);
        assert!(!body.is_selected(0));
        let body = CalendarBody::new(grid(), vec![None, None], SelectMode::Range);
        assert!(!body.is_selected(0));
        assert!(!body.is_in_range(0));
    }

    #[test]
    fn test_full_range() {
        let body = CalendarBody::new(grid(), vec![Some(3), Some(6)], SelectMode::Range);
        assert!(body.is_selected(3));
        assert!(body.is_selected(6));
        assert!(!body.is_selected(4));
        assert!((3..=6).all(|v| body.is_in_range(v)));
        assert!(!body.is_in_range(2));
        assert!(!body.is_in_range(7));
        assert!(body.is_range_from(3));
        assert!(body.is_range_to(6));
        assert!(!body.is_range_to(3));
    }

    #[test]
    fn test_half_open_range_is_single_point() {
        let body = CalendarBody::new(grid(), vec![Some(5), None], SelectMode::RangeFrom);
        assert!(body.is_in_range(5));
        assert!(!body.is_in_range(6));
        assert!(body.is_range_from(5));
        assert!(!body.is_range_to(5));

        let body = CalendarBody::new(grid(), vec![None, Some(8)], SelectMode::RangeTo);
        assert!(body.is_in_range(8));
        assert!(body.is_range_to(8));
        assert!(!body.is_range_from(8));
    }

    #[test]
    fn test_reversed_range_contains_nothing_between() {
        let body = CalendarBody::new(grid(), vec![Some(9), Some(2)], SelectMode::Range);
        assert!(body.is_range_from(9));
        assert!(body.is_range_to(2));
        assert!(!body.is_in_range(5));
    }

    #[test]
    fn test_active_cell_is_positional() {
        let body = CalendarBody::new(grid(), vec![Some(1)], SelectMode::Single);
        assert!(body.is_active_cell(1, 2));
        assert!(!body.is_active_cell(0, 2));
        assert!(!body.is_active_cell(1, 3));
    }

    #[test]
    fn test_today_and_hidden() {
        let body = CalendarBody::new(grid(), Vec::new(), SelectMode::Single).hide_other_months(true);
        assert!(body.is_today(3));
        let adjacent = body.cell(0, 0).unwrap();
        assert!(body.is_hidden(adjacent));
        assert!(!body.is_hidden(body.cell(1, 0).unwrap()));
    }

    #[test]
    fn test_select_cell_forwards_copy() {
        let body = CalendarBody::new(grid(), Vec::new(), SelectMode::Single);
        assert_eq!(body.select_cell(1, 1).map(|c| c.value()), Some(7));
        assert!(body.select_cell(5, 0).is_none());
    }
}
