//! Configuration management for Pawbook.
//!
//! Handles loading configuration from TOML files and environment variables:
//! where the contact and note stores live, how to reach the weather service,
//! and which holiday calendar to use.

use crate::error::{AssistantError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

/// Environment variable overriding the contact store path.
pub const CONTACTS_ENV: &str = "PAWBOOK_CONTACTS";

/// Environment variable overriding the note store path.
pub const NOTES_ENV: &str = "PAWBOOK_NOTES";

/// Main configuration structure for Pawbook.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Store file locations.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Weather service settings.
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Holiday calendar settings.
    #[serde(default)]
    pub holidays: HolidaysConfig,
}

/// Store file locations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    /// Contact book file.
    #[serde(default = "default_contacts_path")]
    pub contacts: PathBuf,

    /// Note book file.
    #[serde(default = "default_notes_path")]
    pub notes: PathBuf,
}

fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pawbook")
}

fn default_contacts_path() -> PathBuf {
    data_dir().join("contacts.json")
}

fn default_notes_path() -> PathBuf {
    data_dir().join("notes.json")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            contacts: default_contacts_path(),
            notes: default_notes_path(),
        }
    }
}

impl StorageConfig {
    /// Applies `PAWBOOK_CONTACTS` / `PAWBOOK_NOTES` on top of the file values.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Applies overrides found by `lookup`. Empty values are ignored.
    pub fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let present = |key: &str| lookup(key).filter(|path: &String| !path.is_empty());
        if let Some(path) = present(CONTACTS_ENV) {
            self.contacts = PathBuf::from(path);
        }
        if let Some(path) = present(NOTES_ENV) {
            self.notes = PathBuf::from(path);
        }
    }
}

/// Weather service settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeatherConfig {
    /// City search endpoint.
    #[serde(default = "default_geocoding_url")]
    pub geocoding_url: String,

    /// Current conditions endpoint.
    #[serde(default = "default_forecast_url")]
    pub forecast_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_geocoding_url() -> String {
    "https://geocoding-api.open-meteo.com/v1/search".to_string()
}

fn default_forecast_url() -> String {
    "https://api.open-meteo.com/v1/forecast".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            geocoding_url: default_geocoding_url(),
            forecast_url: default_forecast_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl WeatherConfig {
    /// Checks that both endpoints are absolute http(s) URLs.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("weather.geocoding_url", &self.geocoding_url),
            ("weather.forecast_url", &self.forecast_url),
        ] {
            let url = Url::parse(value)
                .map_err(|e| AssistantError::config(format!("Invalid {field}: {e}")))?;
            if url.scheme() != "http" && url.scheme() != "https" {
                return Err(AssistantError::config(format!(
                    "Invalid scheme '{}' in {field}. Expected 'http' or 'https'",
                    url.scheme()
                )));
            }
        }
        Ok(())
    }
}

/// Holiday calendar settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HolidaysConfig {
    /// ISO country code of the calendar.
    #[serde(default = "default_country")]
    pub country: String,
}

fn default_country() -> String {
    "UA".to_string()
}

impl Default for HolidaysConfig {
    fn default() -> Self {
        Self {
            country: default_country(),
        }
    }
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pawbook")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| AssistantError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| {
            AssistantError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })?;
        config.weather.validate()?;
        Ok(config)
    }
}
