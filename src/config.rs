//! Configuration management for the `WeatherTop` application
//!
//! Handles loading configuration from files and environment variables,
//! and provides validation for all configuration settings.

use crate::WeatherTopError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable pointing at an explicit config file
pub const CONFIG_PATH_ENV: &str = "WEATHERTOP_CONFIG";

/// Environment variable the provider key is read from when the config has none
pub const API_KEY_ENV: &str = "OPENWEATHER_KEY";

/// Root configuration structure for the `WeatherTop` application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherTopConfig {
    /// Weather API configuration
    #[serde(default)]
    pub weather: WeatherConfig,
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Dashboard and forecast page settings
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Weather API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeather API key. Without one no provider call is attempted.
    pub api_key: Option<String>,
    /// Base URL for weather API
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    #[serde(default = "default_geo_path")]
    pub geo_path: String,
    #[serde(default = "default_current_path")]
    pub current_path: String,
    #[serde(default = "default_forecast_path")]
    pub forecast_path: String,
    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_seconds: u32,
    /// Unit system requested from the provider
    #[serde(default = "default_weather_units")]
    pub units: String,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Forecast page projection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Number of 3-hour forecast steps shown as hourly slots
    #[serde(default = "default_hourly_slots")]
    pub hourly_slots: usize,
    /// Maximum number of daily entries
    #[serde(default = "default_daily_days")]
    pub daily_days: usize,
    /// Forecast steps between two daily entries (8 x 3h = 24h)
    #[serde(default = "default_daily_stride")]
    pub daily_stride: usize,
}

// Default value functions
fn default_weather_base_url() -> String {
    "https://api.openweathermap.org".to_string()
}

fn default_geo_path() -> String {
    "/geo/1.0/direct".to_string()
}

fn default_current_path() -> String {
    "/data/2.5/weather".to_string()
}

fn default_forecast_path() -> String {
    "/data/2.5/forecast".to_string()
}

fn default_weather_timeout() -> u32 {
    30
}

fn default_weather_units() -> String {
    "metric".to_string()
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_hourly_slots() -> usize {
    16
}

fn default_daily_days() -> usize {
    5
}

fn default_daily_stride() -> usize {
    8
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_weather_base_url(),
            geo_path: default_geo_path(),
            current_path: default_current_path(),
            forecast_path: default_forecast_path(),
            timeout_seconds: default_weather_timeout(),
            units: default_weather_units(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
        }
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
            hourly_slots: default_hourly_slots(),
            daily_days: default_daily_days(),
            daily_stride: default_daily_stride(),
        }
    }
}

impl WeatherTopConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        let explicit = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
        Self::load_from_path(explicit)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
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

        // Add environment variable overrides, e.g. WEATHERTOP_SERVER__PORT=8080
        builder = builder.add_source(
            Environment::with_prefix("WEATHERTOP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: WeatherTopConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        if config.weather.api_key.is_none() {
            config.weather.api_key = std::env::var(API_KEY_ENV)
                .ok()
                .filter(|key| !key.trim().is_empty());
        }

        // Apply defaults for missing values
        config.apply_defaults();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("weathertop").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.weather.base_url.is_empty() {
            self.weather.base_url = default_weather_base_url();
        }
        if self.weather.timeout_seconds == 0 {
            self.weather.timeout_seconds = default_weather_timeout();
        }
        if self.weather.units.is_empty() {
            self.weather.units = default_weather_units();
        }
        if self.server.bind_address.is_empty() {
            self.server.bind_address = default_bind_address();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.dashboard.daily_stride == 0 {
            self.dashboard.daily_stride = default_daily_stride();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_keys()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate API keys and credentials
    pub fn validate_api_keys(&self) -> Result<()> {
        if let Some(api_key) = &self.weather.api_key {
            if api_key.trim().is_empty() {
                return Err(WeatherTopError::config(
                    "Weather API key cannot be empty if provided. Either remove it or provide a valid key."
                ).into());
            }

            if api_key.len() > 100 {
                return Err(WeatherTopError::config(
                    "Weather API key appears to be invalid (too long). Please check your API key."
                ).into());
            }
        }

        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.weather.timeout_seconds > 300 {
            return Err(WeatherTopError::config(
                "Weather API timeout cannot exceed 300 seconds"
            ).into());
        }

        if self.dashboard.hourly_slots > 40 {
            return Err(WeatherTopError::config(
                "Hourly slots cannot exceed 40 (the provider returns 5 days of 3-hour steps)"
            ).into());
        }

        if self.dashboard.daily_days > 5 {
            return Err(WeatherTopError::config(
                "Daily forecast cannot exceed 5 days"
            ).into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(WeatherTopError::config(
                format!("Invalid log level '{}'. Must be one of: {}",
                    self.logging.level,
                    valid_log_levels.join(", ")
                )
            ).into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(WeatherTopError::config(
                format!("Invalid log format '{}'. Must be one of: {}",
                    self.logging.format,
                    valid_log_formats.join(", ")
                )
            ).into());
        }

        let valid_units = ["metric"];
        if !valid_units.contains(&self.weather.units.as_str()) {
            return Err(WeatherTopError::config(
                format!("Unsupported units '{}'. Readings are stored in metric units", self.weather.units)
            ).into());
        }

        if !self.weather.base_url.starts_with("http://") && !self.weather.base_url.starts_with("https://") {
            return Err(WeatherTopError::config(
                "Weather API base URL must be a valid HTTP or HTTPS URL"
            ).into());
        }

        Ok(())
    }
}
