//! Configuration management for `TuniCamp`
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TuniCampError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for `TuniCamp`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TuniCampConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Forecast settings
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Gear rental settings
    #[serde(default)]
    pub rental: RentalConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind to
    #[serde(default = "default_server_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_server_port")]
    pub port: u16,
    /// Largest accepted request body in KB
    #[serde(default = "default_max_body_kb")]
    pub max_body_kb: u32,
}

/// Forecast settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Days fetched when a trip length is not given
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u32,
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

/// Gear rental settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentalConfig {
    /// Currency code shown next to prices
    #[serde(default = "default_currency")]
    pub currency: String,
}

// Default value functions
fn default_server_host() -> String {
    "127.0.0.1".to_string()
}

fn default_server_port() -> u16 {
    3000
}

fn default_max_body_kb() -> u32 {
    64
}

fn default_forecast_days() -> u32 {
    7
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_currency() -> String {
    "TND".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            max_body_kb: default_max_body_kb(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            forecast_days: default_forecast_days(),
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

impl Default for RentalConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

impl TuniCampConfig {
    /// Load configuration from `config_path`, or the default location when
    /// `None`, overlaid with `TUNICAMP__*` environment variables
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

        // Environment overrides, e.g. TUNICAMP__SERVER__PORT=8080
        builder = builder.add_source(
            Environment::with_prefix("TUNICAMP")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TuniCampConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tunicamp").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.server.host.is_empty() {
            self.server.host = default_server_host();
        }
        if self.server.max_body_kb == 0 {
            self.server.max_body_kb = default_max_body_kb();
        }
        if self.weather.forecast_days == 0 {
            self.weather.forecast_days = default_forecast_days();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.rental.currency.is_empty() {
            self.rental.currency = default_currency();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.weather.forecast_days > crate::weather::MAX_FORECAST_DAYS {
            return Err(TuniCampError::config(format!(
                "Forecast days cannot exceed {}",
                crate::weather::MAX_FORECAST_DAYS
            ))
            .into());
        }

        if self.server.max_body_kb > 10_240 {
            return Err(
                TuniCampError::config("Maximum request body cannot exceed 10240 KB").into(),
            );
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TuniCampError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TuniCampError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if self.rental.currency.len() != 3
            || !self.rental.currency.chars().all(|c| c.is_ascii_uppercase())
        {
            return Err(TuniCampError::config(format!(
                "Invalid currency code '{}'. Expected three uppercase letters",
                self.rental.currency
            ))
            .into());
        }

        Ok(())
    }

    /// Address the HTTP server binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
