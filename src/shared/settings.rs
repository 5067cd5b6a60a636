use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::core::units::MetricUnit;
use crate::shared::error::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct AppSettings {
    pub preferences: UserPreferences,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct UserPreferences {
    /// Unit name a fresh balance input starts in, e.g. "none" or "milli".
    pub default_unit: String,
    pub show_unit_selector: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            preferences: UserPreferences {
                default_unit: MetricUnit::None.label().to_string(),
                show_unit_selector: true,
            },
        }
    }
}

impl AppSettings {
    pub fn get_settings_path() -> AppResult<PathBuf> {
        ProjectDirs::from("org", "wallet", "wallet-widgets")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or_else(|| AppError::Settings("Failed to determine config directory".to_string()))
    }

    pub fn load() -> AppResult<Self> {
        let path = Self::get_settings_path()?;

        if !path.exists() {
            let settings = Self::default();
            settings.save()?;
            return Ok(settings);
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Settings(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| AppError::Settings(format!("Failed to parse settings: {}", e)))
    }

    pub fn save(&self) -> AppResult<()> {
        let path = Self::get_settings_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| AppError::Settings(format!("Failed to create config directory: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Settings(format!("Failed to serialize settings: {}", e)))?;

        fs::write(&path, content)
            .map_err(|e| AppError::Settings(format!("Failed to write settings file: {}", e)))
    }

    /// The preferred default unit, falling back to the base unit when the
    /// stored name is unknown.
    pub fn default_unit(&self) -> MetricUnit {
        MetricUnit::from_name(&self.preferences.default_unit).unwrap_or_else(|| {
            eprintln!(
                "[Settings] Unknown default_unit '{}'; falling back to base unit",
                self.preferences.default_unit
            );
            MetricUnit::None
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_start_in_the_base_unit() {
        let settings = AppSettings::default();
        assert_eq!(settings.default_unit(), MetricUnit::None);
        assert!(settings.preferences.show_unit_selector);
    }

    #[test]
    fn test_unknown_unit_name_falls_back() {
        let mut settings = AppSettings::default();
        settings.preferences.default_unit = "parsec".to_string();
        assert_eq!(settings.default_unit(), MetricUnit::None);
    }

    #[test]
    fn test_settings_round_trip_through_json() {
        let mut settings = AppSettings::default();
        settings.preferences.default_unit = "kilo".to_string();
        let json = serde_json::to_string(&settings).unwrap();
        let parsed: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.default_unit(), MetricUnit::Kilo);
    }
}
