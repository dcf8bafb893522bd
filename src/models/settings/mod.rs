// Settings module
// Picker configuration as loaded from a settings file

use super::view::{DateView, SelectMode};
use crate::adapter::DateTimeFormats;
use serde::{Deserialize, Serialize};

/// Upper limit for either side of the year grid
pub const MAX_MULTI_YEAR_SIDE: u32 = 100;

/// Layout of the year grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiYearOptions {
    pub years_per_row: u32,
    pub year_rows: u32,
}

impl Default for MultiYearOptions {
    fn default() -> Self {
        Self {
            years_per_row: 3,
            year_rows: 7,
        }
    }
}

impl MultiYearOptions {
    pub fn years_per_page(&self) -> u32 {
        self.years_per_row.saturating_mul(self.year_rows)
    }

    /// Both sides between 1 and [`MAX_MULTI_YEAR_SIDE`]
    pub fn is_valid(&self) -> bool {
        (1..=MAX_MULTI_YEAR_SIDE).contains(&self.years_per_row)
            && (1..=MAX_MULTI_YEAR_SIDE).contains(&self.year_rows)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerSettings {
    pub select_mode: SelectMode,
    pub start_view: DateView,
    pub first_day_of_week: u8,
    pub year_only: bool,
    pub multiyear_only: bool,
    pub hide_other_months: bool,
    pub show_calendar_weeks: bool,
    pub locale: String,
    pub formats: DateTimeFormats,
    pub multi_year: MultiYearOptions,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            select_mode: SelectMode::Single,
            start_view: DateView::Month,
            first_day_of_week: 0, // Sunday
            year_only: false,
            multiyear_only: false,
            hide_other_months: false,
            show_calendar_weeks: false,
            locale: "en-US".to_string(),
            formats: DateTimeFormats::default(),
            multi_year: MultiYearOptions::default(),
        }
    }
}

impl PickerSettings {
    /// Validate the settings
    pub fn validate(&self) -> Result<(), String> {
        if self.first_day_of_week > 6 {
            return Err(format!(
                "First day of week must be between 0 (Sunday) and 6 (Saturday), got {}",
                self.first_day_of_week
            ));
        }

        if !self.multi_year.is_valid() {
            return Err(format!(
                "Multi-year layout needs 1 to {} rows and columns, got {}x{}",
                MAX_MULTI_YEAR_SIDE, self.multi_year.year_rows, self.multi_year.years_per_row
            ));
        }

        if self.locale.trim().is_empty() {
            return Err("Locale cannot be empty".to_string());
        }

        if self.year_only && self.multiyear_only {
            return Err("year_only and multiyear_only are mutually exclusive".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = PickerSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.multi_year.years_per_page(), 21);
    }

    #[test]
    fn test_invalid_first_day_of_week() {
        let settings = PickerSettings {
            first_day_of_week: 7,
            ..Default::default()
        };
        assert!(settings.validate().unwrap_err().contains("First day of week"));
    }

    #[test]
    fn test_empty_multi_year_layout() {
        let mut settings = PickerSettings::default();
        settings.multi_year.year_rows = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_oversized_multi_year_layout() {
        let mut settings = PickerSettings::default();
        settings.multi_year.years_per_row = u32::MAX;
        settings.multi_year.year_rows = u32::MAX;
        assert_eq!(settings.multi_year.years_per_page(), u32::MAX);
        assert!(settings.validate().unwrap_err().contains("Multi-year layout"));

        settings.multi_year.years_per_row = MAX_MULTI_YEAR_SIDE;
        settings.multi_year.year_rows = MAX_MULTI_YEAR_SIDE;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_conflicting_only_flags() {
        let settings = PickerSettings {
            year_only: true,
            multiyear_only: true,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_toml_partial_document() {
        let settings: PickerSettings = toml::from_str(
            r#"
            select_mode = "rangeFrom"
            start_view = "year"
            first_day_of_week = 1

            [multi_year]
            years_per_row = 4
            "#,
        )
        .unwrap();

        assert_eq!(settings.select_mode, SelectMode::RangeFrom);
        assert_eq!(settings.start_view, DateView::Year);
        assert_eq!(settings.first_day_of_week, 1);
        assert_eq!(settings.multi_year.years_per_row, 4);
        assert_eq!(settings.multi_year.year_rows, 7);
        assert_eq!(settings.locale, "en-US");
    }
}
