// Error types
// Only calendar field construction and configuration validation fail loudly;
// everything else degrades to `None`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerError {
    /// The field combination does not name a real calendar day (month 13, day 32, Feb 30...)
    #[error("invalid date: {year:04}-{month:02}-{day:02} is not a calendar day")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("invalid time: {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u32, minute: u32, second: u32 },

    #[error("first day of week must be 0..=6 (Sunday..Saturday), got {0}")]
    InvalidFirstDayOfWeek(u32),

    #[error("multi-year layout needs 1 to 100 rows and columns, got {rows}x{cols}")]
    InvalidMultiYearLayout { rows: u32, cols: u32 },
}
