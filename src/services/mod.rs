pub mod calendar;
pub mod grid;
pub mod settings;
