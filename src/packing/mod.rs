//! Packing list generation
//!
//! Each destination category has a static base list. A generated list is a
//! fresh copy of that base list, extended with items triggered by the
//! forecast (heat, cold, rain) and deduplicated by item name.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::weather::WeatherSummary;
use crate::{Result, TuniCampError};

mod catalog;
pub mod checklist;

pub use checklist::PackingChecklist;

/// Above this maximum temperature extra water is recommended
pub const HOT_THRESHOLD_C: f64 = 35.0;
/// Below this minimum temperature extra layers are recommended
pub const COLD_THRESHOLD_C: f64 = 10.0;

/// Terrain type of a camping destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DestinationCategory {
    Desert,
    Mountain,
    Forest,
    Beach,
}

impl DestinationCategory {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DestinationCategory::Desert => "desert",
            DestinationCategory::Mountain => "mountain",
            DestinationCategory::Forest => "forest",
            DestinationCategory::Beach => "beach",
        }
    }
}

impl std::fmt::Display for DestinationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DestinationCategory {
    type Err = TuniCampError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desert" => Ok(DestinationCategory::Desert),
            "mountain" => Ok(DestinationCategory::Mountain),
            "forest" => Ok(DestinationCategory::Forest),
            "beach" => Ok(DestinationCategory::Beach),
            other => Err(TuniCampError::validation(format!(
                "Unknown destination category '{other}'. Must be one of: desert, mountain, forest, beach"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Clothing,
    Gear,
    Food,
    Safety,
    Personal,
}

/// A single checklist entry; `name` identifies it within a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingItem {
    pub name: String,
    pub category: ItemCategory,
    pub essential: bool,
    #[serde(default)]
    pub weather_dependent: bool,
    #[serde(default)]
    pub season_dependent: bool,
}

impl PackingItem {
    fn weather_extra(name: &str, category: ItemCategory) -> Self {
        Self {
            name: name.to_string(),
            category,
            essential: true,
            weather_dependent: true,
            season_dependent: false,
        }
    }
}

/// Base packing list for one destination category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingList {
    pub region: String,
    pub category: DestinationCategory,
    pub items: Vec<PackingItem>,
}

/// A set of base packing lists
#[derive(Debug, Clone)]
pub struct PackingCatalog {
    lists: Vec<PackingList>,
}

impl PackingCatalog {
    /// Catalog from arbitrary lists
    #[must_use]
    pub fn new(lists: Vec<PackingList>) -> Self {
        Self { lists }
    }

    /// The built-in catalog covering every destination category
    #[must_use]
    pub fn builtin() -> &'static PackingCatalog {
        static BUILTIN: std::sync::LazyLock<PackingCatalog> =
            std::sync::LazyLock::new(|| PackingCatalog::new(catalog::BUILTIN_LISTS.clone()));
        &BUILTIN
    }

    /// Base list registered for `category`
    pub fn list_for(&self, category: DestinationCategory) -> Result<&PackingList> {
        self.lists
            .iter()
            .find(|list| list.category == category)
            .ok_or_else(|| TuniCampError::unknown_category(category.as_str()))
    }

    /// Packing list for a destination, extended by the forecast
    pub fn generate(
        &self,
        category: DestinationCategory,
        weather: Option<&WeatherSummary>,
    ) -> Result<Vec<PackingItem>> {
        let mut items = self.list_for(category)?.items.clone();
        if let Some(weather) = weather {
            items.extend(weather_extras(weather));
        }
        Ok(dedupe_by_name(items))
    }

    /// Combined list for a trip spanning several destination categories
    pub fn merged_list(
        &self,
        categories: &[DestinationCategory],
        weather: Option<&WeatherSummary>,
    ) -> Result<Vec<PackingItem>> {
        if categories.is_empty() {
            return Err(TuniCampError::incomplete("no destination selected"));
        }

        let mut items = Vec::new();
        for &category in categories {
            items.extend(self.list_for(category)?.items.iter().cloned());
        }
        if let Some(weather) = weather {
            items.extend(weather_extras(weather));
        }
        Ok(dedupe_by_name(items))
    }
}

/// Generate a packing list from the built-in catalog
pub fn generate(
    category: DestinationCategory,
    weather: Option<&WeatherSummary>,
) -> Result<Vec<PackingItem>> {
    PackingCatalog::builtin().generate(category, weather)
}

/// Items the forecast calls for, in heat, cold, rain order
fn weather_extras(weather: &WeatherSummary) -> Vec<PackingItem> {
    let mut extras = Vec::new();
    if weather.max_temp().is_some_and(|t| t > HOT_THRESHOLD_C) {
        extras.push(PackingItem::weather_extra("Extra water bottles", ItemCategory::Gear));
    }
    if weather.min_temp().is_some_and(|t| t < COLD_THRESHOLD_C) {
        extras.push(PackingItem::weather_extra("Extra warm layers", ItemCategory::Clothing));
    }
    if weather.has_rain() {
        extras.push(PackingItem::weather_extra("Waterproof bags", ItemCategory::Gear));
    }
    extras
}

/// Keep the first item of every name, preserving order
fn dedupe_by_name(items: Vec<PackingItem>) -> Vec<PackingItem> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.name.clone()))
        .collect()
}

/// Group items by category for display
///
/// Groups appear in order of their first item; items keep their relative order.
#[must_use]
pub fn group_by_category(items: &[PackingItem]) -> Vec<(ItemCategory, Vec<PackingItem>)> {
    let mut groups: Vec<(ItemCategory, Vec<PackingItem>)> = Vec::new();
    for item in items {
        match groups.iter_mut().find(|(category, _)| *category == item.category) {
            Some((_, group)) => group.push(item.clone()),
            None => groups.push((item.category, vec![item.clone()])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;
    use crate::weather::DailyWeather;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn forecast(days: &[(f64, f64, f64)]) -> WeatherSummary {
        let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        WeatherSummary::new(
            Location::tunisia(33.4667, 9.0203, "Douz"),
            days.iter()
                .enumerate()
                .map(|(i, &(min, max, rain))| {
                    DailyWeather::new(start + chrono::Duration::days(i as i64), min, max, rain)
                })
                .collect(),
        )
    }

    fn names(items: &[PackingItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[rstest]
    #[case(DestinationCategory::Desert, 20)]
    #[case(DestinationCategory::Mountain, 16)]
    #[case(DestinationCategory::Forest, 14)]
    #[case(DestinationCategory::Beach, 13)]
    fn test_base_lists_without_weather(#[case] category: DestinationCategory, #[case] len: usize) {
        let items = generate(category, None).unwrap();
        assert_eq!(items.len(), len);
        assert_eq!(items, PackingCatalog::builtin().list_for(category).unwrap().items);
    }

    #[test]
    fn test_hot_desert_adds_water_only() {
        let weather = forecast(&[(18.0, 38.0, 0.0), (20.0, 36.0, 0.0)]);
        let items = generate(DestinationCategory::Desert, Some(&weather)).unwrap();
        let base = generate(DestinationCategory::Desert, None).unwrap();

        assert_eq!(items.len(), base.len() + 1);
        assert_eq!(&items[..base.len()], &base[..]);
        let extra = items.last().unwrap();
        assert_eq!(extra.name, "Extra water bottles");
        assert_eq!(extra.category, ItemCategory::Gear);
        assert!(extra.essential && extra.weather_dependent);
        assert!(!names(&items).contains(&"Extra warm layers"));
        assert!(!names(&items).contains(&"Waterproof bags"));
    }

    #[test]
    fn test_cold_rainy_mountain() {
        let weather = forecast(&[(4.0, 20.0, 0.0), (6.0, 18.0, 3.5)]);
        let items = generate(DestinationCategory::Mountain, Some(&weather)).unwrap();
        let base_len = generate(DestinationCategory::Mountain, None).unwrap().len();

        assert_eq!(
            names(&items[base_len..]),
            vec!["Extra warm layers", "Waterproof bags"]
        );
        assert!(!names(&items).contains(&"Extra water bottles"));
    }

    #[rstest]
    #[case(35.0, 10.0, 0)]
    #[case(35.1, 10.0, 1)]
    #[case(20.0, 9.9, 1)]
    fn test_threshold_edges(#[case] max: f64, #[case] min: f64, #[case] extras: usize) {
        let weather = forecast(&[(min, max, 0.0)]);
        let items = generate(DestinationCategory::Forest, Some(&weather)).unwrap();
        assert_eq!(items.len(), 14 + extras);
    }

    #[test]
    fn test_rain_extra_collapses_with_beach_item() {
        let weather = forecast(&[(18.0, 26.0, 2.0)]);
        let items = generate(DestinationCategory::Beach, Some(&weather)).unwrap();

        let count = items.iter().filter(|i| i.name == "Waterproof bags").count();
        assert_eq!(count, 1);
        // the base list entry wins and keeps its position
        let base = generate(DestinationCategory::Beach, None).unwrap();
        assert_eq!(items, base);
    }

    #[test]
    fn test_empty_forecast_adds_nothing() {
        let weather = forecast(&[]);
        let items = generate(DestinationCategory::Desert, Some(&weather)).unwrap();
        assert_eq!(items.len(), 20);
    }

    #[test]
    fn test_generate_is_idempotent() {
        let weather = forecast(&[(2.0, 40.0, 1.0)]);
        let first = generate(DestinationCategory::Forest, Some(&weather)).unwrap();
        let second = generate(DestinationCategory::Forest, Some(&weather)).unwrap();
        assert_eq!(first, second);
        // the base list is left untouched
        assert_eq!(
            PackingCatalog::builtin()
                .list_for(DestinationCategory::Forest)
                .unwrap()
                .items
                .len(),
            14
        );
    }

    #[test]
    fn test_unregistered_category_is_an_error() {
        let catalog = PackingCatalog::new(vec![
            PackingCatalog::builtin()
                .list_for(DestinationCategory::Beach)
                .unwrap()
                .clone(),
        ]);
        let result = catalog.generate(DestinationCategory::Desert, None);
        assert!(matches!(result, Err(TuniCampError::UnknownCategory { .. })));
    }

    #[test]
    fn test_group_by_category_keeps_first_appearance_order() {
        let weather = forecast(&[(4.0, 20.0, 0.0)]);
        let items = generate(DestinationCategory::Desert, Some(&weather)).unwrap();
        let groups = group_by_category(&items);

        let order: Vec<ItemCategory> = groups.iter().map(|(c, _)| *c).collect();
        assert_eq!(
            order,
            vec![
                ItemCategory::Clothing,
                ItemCategory::Gear,
                ItemCategory::Safety,
                ItemCategory::Personal
            ]
        );
        let clothing = &groups[0].1;
        assert_eq!(clothing.first().unwrap().name, "Lightweight long-sleeve shirts");
        assert_eq!(clothing.last().unwrap().name, "Extra warm layers");
        assert_eq!(groups.iter().map(|(_, g)| g.len()).sum::<usize>(), items.len());
    }

    #[test]
    fn test_merged_list_dedupes_across_destinations() {
        let items = PackingCatalog::builtin()
            .merged_list(&[DestinationCategory::Desert, DestinationCategory::Beach], None)
            .unwrap();
        let all = names(&items);
        assert_eq!(all.iter().filter(|n| **n == "First aid kit").count(), 1);
        assert_eq!(all.iter().filter(|n| **n == "High SPF sunscreen").count(), 1);
        assert!(all.contains(&"Swimwear"));

        assert!(PackingCatalog::builtin().merged_list(&[], None).is_err());
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!(
            "Beach".parse::<DestinationCategory>().unwrap(),
            DestinationCategory::Beach
        );
        assert!("jungle".parse::<DestinationCategory>().is_err());
        assert_eq!(DestinationCategory::Mountain.to_string(), "mountain");
    }
}
