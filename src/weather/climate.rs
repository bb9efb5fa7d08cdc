//! Deterministic climate-based forecast
//!
//! Stands in for a forecast API: temperatures come from the terrain class
//! implied by the coordinates, rain falls on a fixed cadence on the coast.

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, Utc};

use super::{DailyWeather, WeatherProvider, WeatherSummary, validate_days};
use crate::Result;
use crate::models::Location;

/// Coarse climate zones of Tunisia, derived from coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClimateZone {
    /// South of 34°N
    Desert,
    /// North of 35.5°N
    Highland,
    /// East of 9.5°E
    Coastal,
    Temperate,
}

impl ClimateZone {
    #[must_use]
    pub fn for_location(location: &Location) -> Self {
        if location.latitude < 34.0 {
            ClimateZone::Desert
        } else if location.latitude > 35.5 {
            ClimateZone::Highland
        } else if location.longitude > 9.5 {
            ClimateZone::Coastal
        } else {
            ClimateZone::Temperate
        }
    }

    fn base_temperature(self) -> f64 {
        match self {
            ClimateZone::Desert => 35.0,
            ClimateZone::Highland => 15.0,
            ClimateZone::Coastal => 22.0,
            ClimateZone::Temperate => 25.0,
        }
    }

    fn conditions(self, day_offset: u32) -> (&'static str, &'static str, f64) {
        match self {
            ClimateZone::Desert if day_offset % 3 == 0 => ("Clear", "Clear desert sky", 0.0),
            ClimateZone::Desert => ("Sunny", "Hot and sunny", 0.0),
            ClimateZone::Highland if day_offset % 4 == 0 => ("Clouds", "Partly cloudy", 0.0),
            ClimateZone::Highland => ("Clear", "Clear mountain air", 0.0),
            ClimateZone::Coastal if day_offset % 5 == 0 => ("Rain", "Light rain", 5.0),
            ClimateZone::Coastal => ("Clear", "Pleasant coastal weather", 0.0),
            ClimateZone::Temperate => ("Clear", "Clear sky", 0.0),
        }
    }
}

/// Forecast provider driven by climate zones instead of a remote API
#[derive(Debug, Clone)]
pub struct ClimateWeatherProvider {
    start: Option<NaiveDate>,
}

impl ClimateWeatherProvider {
    /// Forecasts start at the current UTC date
    #[must_use]
    pub fn new() -> Self {
        Self { start: None }
    }

    /// Forecasts start at a fixed date
    #[must_use]
    pub fn starting_on(start: NaiveDate) -> Self {
        Self { start: Some(start) }
    }

    fn day(&self, zone: ClimateZone, start: NaiveDate, offset: u32) -> DailyWeather {
        let base = zone.base_temperature();
        let (condition, description, precipitation_mm) = zone.conditions(offset);
        DailyWeather {
            date: start + Duration::days(i64::from(offset)),
            temp_min: base - 5.0,
            temp_max: base + 5.0,
            precipitation_mm,
            condition: condition.to_string(),
            description: description.to_string(),
            humidity: if precipitation_mm > 0.0 { 80 } else { 45 },
            wind_speed_kmh: 12.0,
        }
    }
}

impl Default for ClimateWeatherProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WeatherProvider for ClimateWeatherProvider {
    #[tracing::instrument(name = "climate_forecast", level = "debug", skip(self, location), fields(location = %location.name))]
    async fn fetch_forecast(&self, location: &Location, days: u32) -> Result<WeatherSummary> {
        validate_days(days)?;
        let zone = ClimateZone::for_location(location);
        let start = self.start.unwrap_or_else(|| Utc::now().date_naive());
        tracing::debug!(?zone, days, "Generating climate forecast");

        let forecast = (0..days).map(|offset| self.day(zone, start, offset)).collect();
        Ok(WeatherSummary::new(location.clone(), forecast))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    #[rstest]
    #[case(33.4667, 9.0203, ClimateZone::Desert)]
    #[case(36.5, 8.75, ClimateZone::Highland)]
    #[case(35.0, 10.6, ClimateZone::Coastal)]
    #[case(35.2, 8.6667, ClimateZone::Temperate)]
    fn test_zone_classification(#[case] lat: f64, #[case] lon: f64, #[case] zone: ClimateZone) {
        let location = Location::tunisia(lat, lon, "somewhere");
        assert_eq!(ClimateZone::for_location(&location), zone);
    }

    #[tokio::test]
    async fn test_desert_forecast_is_hot_and_dry() {
        let provider = ClimateWeatherProvider::starting_on(start());
        let douz = Location::tunisia(33.4667, 9.0203, "Douz");
        let forecast = provider.fetch_forecast(&douz, 7).await.unwrap();

        assert_eq!(forecast.days.len(), 7);
        assert_eq!(forecast.days[0].date, start());
        assert_eq!(forecast.days[6].date, NaiveDate::from_ymd_opt(2025, 3, 7).unwrap());
        assert_eq!(forecast.max_temp(), Some(40.0));
        assert_eq!(forecast.min_temp(), Some(30.0));
        assert!(!forecast.has_rain());
    }

    #[tokio::test]
    async fn test_coastal_rain_every_fifth_day() {
        let provider = ClimateWeatherProvider::starting_on(start());
        let coast = Location::tunisia(35.0, 10.6, "Coast");
        let forecast = provider.fetch_forecast(&coast, 6).await.unwrap();

        let rainy: Vec<usize> = forecast
            .days
            .iter()
            .enumerate()
            .filter(|(_, d)| d.precipitation_mm > 0.0)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(rainy, vec![0, 5]);
    }

    #[tokio::test]
    async fn test_forecast_is_deterministic() {
        let provider = ClimateWeatherProvider::starting_on(start());
        let peak = Location::tunisia(36.5, 8.75, "Kroumirie");
        let first = provider.fetch_forecast(&peak, 5).await.unwrap();
        let second = provider.fetch_forecast(&peak, 5).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_rejects_out_of_range_length() {
        let provider = ClimateWeatherProvider::new();
        let douz = Location::tunisia(33.4667, 9.0203, "Douz");
        assert!(provider.fetch_forecast(&douz, 17).await.is_err());
    }
}
