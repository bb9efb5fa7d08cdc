//! Weather forecasts for trip planning
//!
//! Forecasts come from an injected [`WeatherProvider`]. The packing list
//! generator only looks at the aggregates of a [`WeatherSummary`], so any
//! provider (real API, climate model, fixed test data) can be plugged in.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::models::Location;

pub mod climate;

pub use climate::ClimateWeatherProvider;

/// Longest forecast a provider is asked for
pub const MAX_FORECAST_DAYS: u32 = 16;

/// Weather for a single day
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DailyWeather {
    pub date: NaiveDate,
    /// Minimum temperature in Celsius
    pub temp_min: f64,
    /// Maximum temperature in Celsius
    pub temp_max: f64,
    /// Precipitation amount in mm
    pub precipitation_mm: f64,
    /// Short condition label ("Clear", "Rain", ...)
    pub condition: String,
    /// Human-readable description of weather conditions
    pub description: String,
    /// Relative humidity in percent
    pub humidity: u8,
    pub wind_speed_kmh: f64,
}

impl DailyWeather {
    /// Daily record with only the fields the packing rules read
    #[must_use]
    pub fn new(date: NaiveDate, temp_min: f64, temp_max: f64, precipitation_mm: f64) -> Self {
        let condition = if precipitation_mm > 0.0 { "Rain" } else { "Clear" };
        Self {
            date,
            temp_min,
            temp_max,
            precipitation_mm,
            condition: condition.to_string(),
            description: condition.to_string(),
            humidity: 50,
            wind_speed_kmh: 10.0,
        }
    }

    /// Format temperature range with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{:.0}°C / {:.0}°C", self.temp_min, self.temp_max)
    }
}

/// A multi-day forecast for one location
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherSummary {
    pub location: Location,
    pub days: Vec<DailyWeather>,
}

impl WeatherSummary {
    #[must_use]
    pub fn new(location: Location, days: Vec<DailyWeather>) -> Self {
        Self { location, days }
    }

    /// Highest maximum temperature over all days
    #[must_use]
    pub fn max_temp(&self) -> Option<f64> {
        self.days.iter().map(|d| d.temp_max).reduce(f64::max)
    }

    /// Lowest minimum temperature over all days
    #[must_use]
    pub fn min_temp(&self) -> Option<f64> {
        self.days.iter().map(|d| d.temp_min).reduce(f64::min)
    }

    /// Whether any day has measurable precipitation
    #[must_use]
    pub fn has_rain(&self) -> bool {
        self.days.iter().any(|d| d.precipitation_mm > 0.0)
    }

    /// Weather for the first forecast day
    #[must_use]
    pub fn current(&self) -> Option<&DailyWeather> {
        self.days.first()
    }
}

/// Source of weather forecasts
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Forecast for `days` consecutive days starting today
    async fn fetch_forecast(&self, location: &Location, days: u32) -> Result<WeatherSummary>;
}

#[async_trait]
impl<T: WeatherProvider + ?Sized> WeatherProvider for Box<T> {
    async fn fetch_forecast(&self, location: &Location, days: u32) -> Result<WeatherSummary> {
        (**self).fetch_forecast(location, days).await
    }
}

/// Provider returning a fixed sequence of daily records
///
/// Requests for fewer days than stored are truncated.
#[derive(Debug, Clone, Default)]
pub struct StaticWeatherProvider {
    days: Vec<DailyWeather>,
}

impl StaticWeatherProvider {
    #[must_use]
    pub fn new(days: Vec<DailyWeather>) -> Self {
        Self { days }
    }
}

#[async_trait]
impl WeatherProvider for StaticWeatherProvider {
    async fn fetch_forecast(&self, location: &Location, days: u32) -> Result<WeatherSummary> {
        validate_days(days)?;
        let days = self.days.iter().take(days as usize).cloned().collect();
        Ok(WeatherSummary::new(location.clone(), days))
    }
}

pub(crate) fn validate_days(days: u32) -> Result<()> {
    if days == 0 || days > MAX_FORECAST_DAYS {
        return Err(crate::TuniCampError::validation(format!(
            "Forecast length must be between 1 and {MAX_FORECAST_DAYS} days, got {days}"
        )));
    }
    Ok(())
}
