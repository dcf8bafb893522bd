// Date/time picker core
// Adapters, grid builders and the calendar state machine

pub mod adapter;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use adapter::{DateInput, DateTimeAdapter, NativeDateTimeAdapter, UnixTimestampDateTimeAdapter};
pub use error::PickerError;
pub use services::calendar::{Calendar, CalendarBuilder, CalendarEvent, CalendarKey};
