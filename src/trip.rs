//! Trip planning: forecast and packing list for a camping spot

use serde::{Deserialize, Serialize};

use crate::models::Locale;
use crate::packing::{ItemCategory, PackingCatalog, PackingItem, group_by_category};
use crate::spots::spot_by_id;
use crate::weather::{WeatherProvider, WeatherSummary};
use crate::{Result, TuniCampError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRequest {
    pub spot_id: String,
    /// Trip length in days, also the forecast length
    pub days: u32,
    pub group_size: u32,
    #[serde(default)]
    pub locale: Locale,
}

/// Everything needed to prepare for a trip
#[derive(Debug, Clone, Serialize)]
pub struct TripPlan {
    pub spot_id: String,
    pub spot_name: String,
    pub group_size: u32,
    pub forecast: WeatherSummary,
    pub packing: Vec<(ItemCategory, Vec<PackingItem>)>,
}

impl TripPlan {
    /// All packing items in display order
    #[must_use]
    pub fn packing_items(&self) -> Vec<PackingItem> {
        self.packing
            .iter()
            .flat_map(|(_, items)| items.iter().cloned())
            .collect()
    }
}

/// Combines the spot catalog, a weather provider and the packing catalog
pub struct TripPlanner<P> {
    provider: P,
    catalog: &'static PackingCatalog,
}

impl<P: WeatherProvider> TripPlanner<P> {
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            catalog: PackingCatalog::builtin(),
        }
    }

    #[tracing::instrument(name = "plan_trip", skip(self), fields(spot = %request.spot_id))]
    pub async fn plan(&self, request: &TripRequest) -> Result<TripPlan> {
        if request.group_size == 0 {
            return Err(TuniCampError::validation("Group size must be at least 1"));
        }
        let spot = spot_by_id(&request.spot_id)
            .ok_or_else(|| TuniCampError::not_found("Camping spot", &request.spot_id))?;

        let forecast = self
            .provider
            .fetch_forecast(&spot.location, request.days)
            .await?;
        let items = self.catalog.generate(spot.category, Some(&forecast))?;
        tracing::debug!(items = items.len(), category = %spot.category, "Packing list generated");

        Ok(TripPlan {
            spot_id: spot.id.clone(),
            spot_name: spot.display_name(request.locale).to_string(),
            group_size: request.group_size,
            forecast,
            packing: group_by_category(&items),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::{ClimateWeatherProvider, DailyWeather, StaticWeatherProvider};
    use chrono::NaiveDate;

    fn request(spot_id: &str) -> TripRequest {
        TripRequest {
            spot_id: spot_id.to_string(),
            days: 5,
            group_size: 2,
            locale: Locale::En,
        }
    }

    fn names(plan: &TripPlan) -> Vec<String> {
        plan.packing_items().into_iter().map(|i| i.name).collect()
    }

    #[tokio::test]
    async fn test_desert_trip_with_climate_provider() {
        let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let planner = TripPlanner::new(ClimateWeatherProvider::starting_on(start));
        let plan = planner.plan(&request("sahara-douz")).await.unwrap();

        assert_eq!(plan.spot_name, "Sahara Desert Camp - Douz");
        assert_eq!(plan.forecast.days.len(), 5);
        assert!(names(&plan).contains(&"Extra water bottles".to_string()));
        assert!(!names(&plan).contains(&"Extra warm layers".to_string()));
    }

    #[tokio::test]
    async fn test_injected_forecast_drives_packing() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let provider = StaticWeatherProvider::new(vec![
            DailyWeather::new(start, 4.0, 20.0, 0.0),
            DailyWeather::new(start.succ_opt().unwrap(), 2.0, 12.0, 6.0),
        ]);
        let planner = TripPlanner::new(provider);
        let mut req = request("chaambi-peak");
        req.locale = Locale::Fr;
        let plan = planner.plan(&req).await.unwrap();

        assert_eq!(plan.spot_name, "Camp du Pic du Mont Chaambi");
        let names = names(&plan);
        assert!(names.contains(&"Extra warm layers".to_string()));
        assert!(names.contains(&"Waterproof bags".to_string()));
        assert!(!names.contains(&"Extra water bottles".to_string()));
    }

    #[tokio::test]
    async fn test_unknown_spot_and_empty_group() {
        let planner = TripPlanner::new(ClimateWeatherProvider::new());
        let result = planner.plan(&request("atlantis")).await;
        assert!(matches!(result, Err(TuniCampError::NotFound { .. })));

        let mut req = request("sahara-douz");
        req.group_size = 0;
        assert!(planner.plan(&req).await.is_err());
    }
}
