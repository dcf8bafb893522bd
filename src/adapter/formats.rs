// Display and parse formats
// strftime patterns consumed through `DateTimeAdapter::format` / `parse`.

use serde::{Deserialize, Serialize};

/// Named formats used by the picker surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateTimeFormats {
    /// Pattern tried by `parse` for typed input
    pub parse_input: String,
    pub full_picker_input: String,
    pub date_picker_input: String,
    pub time_picker_input: String,
    /// Period button text in month view
    pub month_year_label: String,
    /// Accessible label of a day cell
    pub date_a11y_label: String,
    /// Accessible label of a month cell
    pub month_year_a11y_label: String,
}

impl Default for DateTimeFormats {
    fn default() -> Self {
        Self::native()
    }
}

impl DateTimeFormats {
    /// Formats for wall-clock date values
    pub fn native() -> Self {
        Self {
            parse_input: "%Y-%m-%d %H:%M".to_string(),
            full_picker_input: "%-m/%-d/%Y, %-I:%M %p".to_string(),
            date_picker_input: "%-m/%-d/%Y".to_string(),
            time_picker_input: "%-I:%M %p".to_string(),
            month_year_label: "%b %Y".to_string(),
            date_a11y_label: "%B %-d, %Y".to_string(),
            month_year_a11y_label: "%B %Y".to_string(),
        }
    }

    /// Formats for epoch-millisecond values; inputs show the raw timestamp
    pub fn unix_timestamp() -> Self {
        Self {
            parse_input: "%s".to_string(),
            full_picker_input: "%s".to_string(),
            date_picker_input: "%s".to_string(),
            time_picker_input: "%s".to_string(),
            ..Self::native()
        }
    }
}
