// Cell module
// One selectable unit of a calendar grid

/// Immutable description of a grid cell.
///
/// The numeric `value` decouples the cell from the underlying date type:
/// day offset in month view, month in year view, year in multi-year view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarCell {
    value: i64,
    display_value: String,
    aria_label: String,
    enabled: bool,
    belongs_to_adjacent_period: bool,
    style_tag: String,
}

impl CalendarCell {
    pub fn new(
        value: i64,
        display_value: impl Into<String>,
        aria_label: impl Into<String>,
        enabled: bool,
    ) -> Self {
        Self {
            value,
            display_value: display_value.into(),
            aria_label: aria_label.into(),
            enabled,
            belongs_to_adjacent_period: false,
            style_tag: String::new(),
        }
    }

    /// Mark the cell as belonging to the previous or next period
    pub fn adjacent(mut self, adjacent: bool) -> Self {
        self.belongs_to_adjacent_period = adjacent;
        self
    }

    pub fn with_style_tag(mut self, tag: impl Into<String>) -> Self {
        self.style_tag = tag.into();
        self
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn display_value(&self) -> &str {
        &self.display_value
    }

    pub fn aria_label(&self) -> &str {
        &self.aria_label
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn belongs_to_adjacent_period(&self) -> bool {
        self.belongs_to_adjacent_period
    }

    pub fn style_tag(&self) -> &str {
        &self.style_tag
    }
}
