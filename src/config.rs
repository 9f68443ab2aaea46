//! Configuration management for `AirInsight`
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::AirInsightError;
use crate::Result as AppResult;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration structure for `AirInsight`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AirInsightConfig {
    /// Upstream API configuration
    #[serde(default)]
    pub api: ApiConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Values read by the dashboard that polls this service
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Upstream weather and air pollution API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// OpenWeatherMap API key. Never defaulted; supply it via file or
    /// `AIRINSIGHT_API__API_KEY`.
    pub api_key: Option<String>,
    /// Current-weather-by-name endpoint
    #[serde(default = "default_weather_url")]
    pub weather_url: String,
    /// Air-pollution-by-coordinates endpoint
    #[serde(default = "default_air_pollution_url")]
    pub air_pollution_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or compact)
    #[serde(default = "default_log_format")]
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// City shown before the user types one
    #[serde(default = "default_city")]
    pub default_city: String,
    /// How often the dashboard should refresh, in seconds
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_seconds: u32,
}

// Default value functions
fn default_weather_url() -> String {
    "https://api.openweathermap.org/data/2.5/weather".to_string()
}

fn default_air_pollution_url() -> String {
    "https://api.openweathermap.org/data/2.5/air_pollution".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_city() -> String {
    "Delhi".to_string()
}

fn default_refresh_interval() -> u32 {
    60
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            weather_url: default_weather_url(),
            air_pollution_url: default_air_pollution_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl ApiConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.into())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_city: default_city(),
            refresh_interval_seconds: default_refresh_interval(),
        }
    }
}

impl AirInsightConfig {
    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        Self::load_with_env(config_path, None)
    }

    /// Load configuration, reading `AIRINSIGHT_*` variables from `env`
    /// instead of the process environment when given
    pub fn load_with_env(
        config_path: Option<PathBuf>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // AIRINSIGHT_API__API_KEY, AIRINSIGHT_LOGGING__LEVEL, ...
        // Values stay strings so all-digit API keys survive intact.
        builder = builder.add_source(
            Environment::with_prefix("AIRINSIGHT")
                .prefix_separator("_")
                .separator("__")
                .source(env),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: AirInsightConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("airinsight").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.api.weather_url.is_empty() {
            self.api.weather_url = default_weather_url();
        }
        if self.api.air_pollution_url.is_empty() {
            self.api.air_pollution_url = default_air_pollution_url();
        }
        if self.api.timeout_seconds == 0 {
            self.api.timeout_seconds = default_timeout();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.dashboard.default_city.trim().is_empty() {
            self.dashboard.default_city = default_city();
        }
        if self.dashboard.refresh_interval_seconds == 0 {
            self.dashboard.refresh_interval_seconds = default_refresh_interval();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_key_shape()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Return the API key, failing when none was supplied
    pub fn require_api_key(&self) -> AppResult<&str> {
        match self.api.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(AirInsightError::config(
                "No API key configured. Set AIRINSIGHT_API__API_KEY or api.api_key in the config file.",
            )),
        }
    }

    /// Check the API key looks plausible when one is present
    fn validate_api_key_shape(&self) -> Result<()> {
        if let Some(api_key) = &self.api.api_key {
            if api_key.trim().is_empty() {
                return Err(AirInsightError::config(
                    "API key cannot be empty if provided. Either remove it or provide a valid key.",
                )
                .into());
            }

            if api_key.len() < 8 {
                return Err(AirInsightError::config(
                    "API key appears to be invalid (too short). Please check your API key.",
                )
                .into());
            }

            if api_key.len() > 100 {
                return Err(AirInsightError::config(
                    "API key appears to be invalid (too long). Please check your API key.",
                )
                .into());
            }
        }

        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.api.timeout_seconds > 300 {
            return Err(AirInsightError::config("API timeout cannot exceed 300 seconds").into());
        }

        if self.dashboard.refresh_interval_seconds > 3600 {
            return Err(
                AirInsightError::config("Refresh interval cannot exceed 3600 seconds").into(),
            );
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(AirInsightError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "compact"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(AirInsightError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        for url in [&self.api.weather_url, &self.api.air_pollution_url] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(AirInsightError::config(format!(
                    "API endpoint '{url}' must be a valid HTTP or HTTPS URL"
                ))
                .into());
            }
        }

        Ok(())
    }

    /// Copy of this configuration that is safe to print
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.api.api_key.is_some() {
            copy.api.api_key = Some("********".to_string());
        }
        copy
    }
}
