// Calendar events
// Emitted by the state machine and drained by the host after each action

/// Outward notification from a [`Calendar`](super::Calendar).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarEvent<D> {
    /// The reference date of the displayed page changed
    PickerMomentChanged(D),
    /// A selectable date was picked
    DateClicked(D),
    /// The selection received a new value
    SelectedChanged(D),
    /// The user explicitly finished choosing
    UserSelection,
    /// A year cell was picked (January 1st of that year)
    YearSelected(D),
    /// A month cell was picked (first day of that month)
    MonthSelected(D),
}

impl<D> CalendarEvent<D> {
    pub fn name(&self) -> &'static str {
        match self {
            CalendarEvent::PickerMomentChanged(_) => "picker-moment-changed",
            CalendarEvent::DateClicked(_) => "date-clicked",
            CalendarEvent::SelectedChanged(_) => "selected-changed",
            CalendarEvent::UserSelection => "user-selection",
            CalendarEvent::YearSelected(_) => "year-selected",
            CalendarEvent::MonthSelected(_) => "month-selected",
        }
    }

    /// Date carried by the event, if any
    pub fn date(&self) -> Option<&D> {
        match self {
            CalendarEvent::PickerMomentChanged(d)
            | CalendarEvent::DateClicked(d)
            | CalendarEvent::SelectedChanged(d)
            | CalendarEvent::YearSelected(d)
            | CalendarEvent::MonthSelected(d) => Some(d),
            CalendarEvent::UserSelection => None,
        }
    }
}
