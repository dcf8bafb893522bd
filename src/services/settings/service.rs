use crate::models::settings::PickerSettings;
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "picker.toml";

/// Loads and stores [`PickerSettings`] as a TOML file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service backed by the per-user config directory, or the working
    /// directory when the platform has none.
    pub fn default_location() -> Self {
        #[cfg(debug_assertions)]
        let path = PathBuf::from(SETTINGS_FILE);

        #[cfg(not(debug_assertions))]
        let path = match directories::ProjectDirs::from("com", "DateTimePicker", "DateTimePicker") {
            Some(proj_dirs) => proj_dirs.config_dir().join(SETTINGS_FILE),
            None => PathBuf::from(SETTINGS_FILE),
        };

        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the stored settings. A missing file yields the defaults.
    pub fn get(&self) -> Result<PickerSettings> {
        if !self.path.exists() {
            log::info!("No settings at {}, using defaults", self.path.display());
            return Ok(PickerSettings::default());
        }

        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let settings: PickerSettings = toml::from_str(&text)
            .with_context(|| format!("Failed to parse settings in {}", self.path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        Ok(settings)
    }

    /// Update settings
    pub fn update(&self, settings: &PickerSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let text = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, text)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))?;

        log::info!("Saved settings to {}", self.path.display());
        Ok(())
    }

    /// Reset settings to defaults
    pub fn reset(&self) -> Result<()> {
        self.update(&PickerSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::view::{DateView, SelectMode};
    use tempfile::TempDir;

    fn setup_service() -> (TempDir, SettingsService) {
        let dir = TempDir::new().unwrap();
        let service = SettingsService::new(dir.path().join("nested").join(SETTINGS_FILE));
        (dir, service)
    }

    #[test]
    fn test_get_default_settings() {
        let (_dir, service) = setup_service();

        let settings = service.get().unwrap();
        assert_eq!(settings.first_day_of_week, 0);
        assert_eq!(settings.locale, "en-US");
    }

    #[test]
    fn test_update_settings() {
        let (_dir, service) = setup_service();

        let mut settings = service.get().unwrap();
        settings.first_day_of_week = 1;
        settings.select_mode = SelectMode::RangeTo;
        settings.start_view = DateView::MultiYear;
        settings.show_calendar_weeks = true;

        service.update(&settings).unwrap();

        let updated = service.get().unwrap();
        assert_eq!(updated, settings);
    }

    #[test]
    fn test_update_invalid_settings() {
        let (_dir, service) = setup_service();

        let mut settings = service.get().unwrap();
        settings.first_day_of_week = 7;

        assert!(service.update(&settings).is_err());
        assert!(!service.path().exists());
    }

    #[test]
    fn test_reset_settings() {
        let (_dir, service) = setup_service();

        let mut settings = service.get().unwrap();
        settings.locale = "de-DE".to_string();
        service.update(&settings).unwrap();

        service.reset().unwrap();
        assert_eq!(service.get().unwrap(), PickerSettings::default());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let (_dir, service) = setup_service();
        fs::create_dir_all(service.path().parent().unwrap()).unwrap();
        fs::write(service.path(), "first_day_of_week = \"monday\"").unwrap();

        assert!(service.get().is_err());
    }
}
