//! Rentable gear and the providers that rent it out

use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::LazyLock;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::pricing::RentalPricing;
use crate::{Result, TuniCampError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GearCategory {
    Tents,
    Sleeping,
    Cooking,
    Hiking,
    Safety,
    Electronics,
}

impl FromStr for GearCategory {
    type Err = TuniCampError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tents" => Ok(GearCategory::Tents),
            "sleeping" => Ok(GearCategory::Sleeping),
            "cooking" => Ok(GearCategory::Cooking),
            "hiking" => Ok(GearCategory::Hiking),
            "safety" => Ok(GearCategory::Safety),
            "electronics" => Ok(GearCategory::Electronics),
            other => Err(TuniCampError::validation(format!(
                "Unknown gear category '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GearCondition {
    Excellent,
    Good,
    Fair,
}

/// Terms a provider rents under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderPolicies {
    pub cancellation: String,
    pub damage: String,
    pub late_fee: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GearProvider {
    pub id: String,
    pub name: String,
    pub description: String,
    pub city: String,
    pub region: String,
    pub rating: f32,
    pub review_count: u32,
    pub specialties: Vec<String>,
    pub phone: String,
    pub email: String,
    pub policies: ProviderPolicies,
    pub verified: bool,
}

impl GearProvider {
    /// "City, Region" as shown on listings
    #[must_use]
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.region)
    }
}

/// An item available for rent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GearItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: GearCategory,
    pub price_per_day: Decimal,
    pub price_per_week: Decimal,
    pub available: bool,
    pub provider_id: String,
    pub condition: GearCondition,
    pub specifications: BTreeMap<String, String>,
    pub included_items: Vec<String>,
    pub deposit_required: Decimal,
    pub min_rental_days: u32,
    pub max_rental_days: u32,
    pub delivery_available: bool,
    pub delivery_fee: Option<Decimal>,
    pub pickup_locations: Vec<String>,
}

impl GearItem {
    /// Price schedule used for booking quotes
    ///
    /// The delivery fee is only part of the schedule when delivery is offered.
    #[must_use]
    pub fn pricing(&self) -> RentalPricing {
        RentalPricing {
            price_per_day: self.price_per_day,
            price_per_week: self.price_per_week,
            deposit_required: self.deposit_required,
            delivery_fee: if self.delivery_available {
                self.delivery_fee
            } else {
                None
            },
        }
    }

    /// Provider renting out this item
    #[must_use]
    pub fn provider(&self) -> Option<&'static GearProvider> {
        provider_by_id(&self.provider_id)
    }
}

/// Filters applied by [`search_gear`]; unset fields match everything
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GearFilter {
    pub category: Option<GearCategory>,
    pub region: Option<String>,
    pub max_price: Option<Decimal>,
}

fn specs(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

static PROVIDERS: LazyLock<Vec<GearProvider>> = LazyLock::new(|| {
    vec![
        GearProvider {
            id: "provider-1".to_string(),
            name: "Desert Adventures Gear".to_string(),
            description: "Specialized in desert camping equipment with over 10 years of experience. We provide high-quality gear perfect for Sahara expeditions.".to_string(),
            city: "Douz".to_string(),
            region: "Kebili".to_string(),
            rating: 4.8,
            review_count: 127,
            specialties: strings(&["Desert Camping", "Camel Trekking", "Traditional Tents"]),
            phone: "+216 75 123 456".to_string(),
            email: "info@desertadventures.tn".to_string(),
            policies: ProviderPolicies {
                cancellation: "Free cancellation up to 48 hours before rental".to_string(),
                damage: "Damage assessment fee applies for equipment damage".to_string(),
                late_fee: "10 TND per day for late returns".to_string(),
            },
            verified: true,
        },
        GearProvider {
            id: "provider-2".to_string(),
            name: "Mountain Gear Tunisia".to_string(),
            description: "Your trusted partner for mountain and forest camping adventures. Quality equipment for all skill levels.".to_string(),
            city: "Ain Draham".to_string(),
            region: "Jendouba".to_string(),
            rating: 4.6,
            review_count: 89,
            specialties: strings(&["Mountain Camping", "Hiking Gear", "Cold Weather Equipment"]),
            phone: "+216 78 987 654".to_string(),
            email: "contact@mountaingear.tn".to_string(),
            policies: ProviderPolicies {
                cancellation: "24 hours notice required for cancellation".to_string(),
                damage: "Full replacement cost for damaged items".to_string(),
                late_fee: "15 TND per day for late returns".to_string(),
            },
            verified: true,
        },
        GearProvider {
            id: "provider-3".to_string(),
            name: "Coastal Camping Co.".to_string(),
            description: "Beach and coastal camping specialists. Perfect gear for Mediterranean adventures along Tunisia's beautiful coastline.".to_string(),
            city: "Hammamet".to_string(),
            region: "Nabeul".to_string(),
            rating: 4.7,
            review_count: 156,
            specialties: strings(&["Beach Camping", "Water Sports", "Family Gear"]),
            phone: "+216 72 456 789".to_string(),
            email: "hello@coastalcamping.tn".to_string(),
            policies: ProviderPolicies {
                cancellation: "Free cancellation up to 24 hours before rental".to_string(),
                damage: "Damage deposit refunded after inspection".to_string(),
                late_fee: "8 TND per day for late returns".to_string(),
            },
            verified: true,
        },
    ]
});

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    name: &str,
    description: &str,
    category: GearCategory,
    (per_day, per_week, deposit): (i64, i64, i64),
    provider_id: &str,
    condition: GearCondition,
    specifications: &[(&str, &str)],
    included_items: &[&str],
    (min_rental_days, max_rental_days): (u32, u32),
    delivery_fee: Option<i64>,
    pickup_locations: &[&str],
) -> GearItem {
    GearItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category,
        price_per_day: Decimal::from(per_day),
        price_per_week: Decimal::from(per_week),
        available: true,
        provider_id: provider_id.to_string(),
        condition,
        specifications: specs(specifications),
        included_items: strings(included_items),
        deposit_required: Decimal::from(deposit),
        min_rental_days,
        max_rental_days,
        delivery_available: delivery_fee.is_some(),
        delivery_fee: delivery_fee.map(Decimal::from),
        pickup_locations: strings(pickup_locations),
    }
}

static GEAR: LazyLock<Vec<GearItem>> = LazyLock::new(|| {
    vec![
        item(
            "gear-1",
            "Traditional Berber Tent (4-Person)",
            "Authentic Berber-style tent perfect for desert camping. Made with traditional materials and designed to withstand desert conditions.",
            GearCategory::Tents,
            (45, 280, 200),
            "provider-1",
            GearCondition::Excellent,
            &[("Capacity", "4 people"), ("Material", "Traditional wool and cotton"), ("Weight", "8 kg"), ("Setup Time", "15 minutes")],
            &["Tent", "Ground tarp", "Setup instructions", "Repair kit"],
            (2, 14),
            Some(25),
            &["Douz Center", "Tozeur Airport"],
        ),
        item(
            "gear-2",
            "4-Season Mountain Tent",
            "Professional-grade 4-season tent suitable for mountain camping in all weather conditions. Waterproof and wind-resistant.",
            GearCategory::Tents,
            (35, 210, 150),
            "provider-2",
            GearCondition::Excellent,
            &[("Capacity", "2 people"), ("Material", "Ripstop nylon with PU coating"), ("Weight", "3.2 kg"), ("Waterproof Rating", "3000mm")],
            &["Tent", "Footprint", "Guy lines", "Stakes", "Stuff sack"],
            (1, 21),
            Some(30),
            &["Ain Draham", "Tabarka", "Jendouba"],
        ),
        item(
            "gear-3",
            "Beach Camping Shelter",
            "Lightweight beach shelter with UV protection. Perfect for coastal camping with easy setup and sand-resistant design.",
            GearCategory::Tents,
            (25, 150, 100),
            "provider-3",
            GearCondition::Good,
            &[("Capacity", "3 people"), ("Material", "UV-resistant polyester"), ("Weight", "2.1 kg"), ("UV Protection", "UPF 50+")],
            &["Shelter", "Sand stakes", "Guy lines", "Carry bag"],
            (1, 10),
            Some(20),
            &["Hammamet", "Nabeul", "Sousse"],
        ),
        item(
            "gear-4",
            "Desert Sleeping System",
            "Complete sleeping system designed for desert conditions. Includes sleeping bag rated for desert nights and insulated pad.",
            GearCategory::Sleeping,
            (20, 120, 80),
            "provider-1",
            GearCondition::Excellent,
            &[("Temperature Rating", "5°C to 25°C"), ("Material", "Down fill with cotton liner"), ("Weight", "1.8 kg"), ("Packed Size", "35cm x 20cm")],
            &["Sleeping bag", "Insulated pad", "Pillow", "Stuff sack"],
            (2, 14),
            Some(15),
            &["Douz Center", "Tozeur Airport"],
        ),
        item(
            "gear-5",
            "Portable Camping Kitchen",
            "Complete cooking setup for group camping. Includes gas stove, cookware, and utensils for up to 6 people.",
            GearCategory::Cooking,
            (30, 180, 120),
            "provider-2",
            GearCondition::Good,
            &[("Stove Type", "2-burner gas stove"), ("Fuel", "Butane/Propane mix"), ("Cookware", "Aluminum non-stick"), ("Serves", "Up to 6 people")],
            &["Gas stove", "2 pots", "1 pan", "Plates", "Cups", "Utensils", "Gas canister"],
            (1, 14),
            Some(25),
            &["Ain Draham", "Tabarka", "Jendouba"],
        ),
        item(
            "gear-6",
            "Professional Hiking Backpack",
            "65L hiking backpack with advanced suspension system. Perfect for multi-day camping trips with excellent weight distribution.",
            GearCategory::Hiking,
            (15, 90, 60),
            "provider-2",
            GearCondition::Excellent,
            &[("Capacity", "65 liters"), ("Material", "Ripstop nylon"), ("Weight", "2.3 kg"), ("Frame", "Internal aluminum frame")],
            &["Backpack", "Rain cover", "Hydration reservoir", "Compression straps"],
            (1, 21),
            Some(20),
            &["Ain Draham", "Tabarka", "Jendouba"],
        ),
    ]
});

/// Every rentable item
#[must_use]
pub fn all_gear() -> &'static [GearItem] {
    &GEAR
}

#[must_use]
pub fn all_providers() -> &'static [GearProvider] {
    &PROVIDERS
}

#[must_use]
pub fn gear_by_id(id: &str) -> Option<&'static GearItem> {
    GEAR.iter().find(|item| item.id == id)
}

#[must_use]
pub fn provider_by_id(id: &str) -> Option<&'static GearProvider> {
    PROVIDERS.iter().find(|provider| provider.id == id)
}

#[must_use]
pub fn gear_by_category(category: GearCategory) -> Vec<&'static GearItem> {
    GEAR.iter().filter(|item| item.category == category).collect()
}

#[must_use]
pub fn gear_by_provider(provider_id: &str) -> Vec<&'static GearItem> {
    GEAR.iter()
        .filter(|item| item.provider_id == provider_id)
        .collect()
}

/// Search the catalog by free text and filters
///
/// The query matches case-insensitively against name and description.
#[must_use]
pub fn search_gear(query: &str, filter: &GearFilter) -> Vec<&'static GearItem> {
    let query = query.trim().to_lowercase();

    GEAR.iter()
        .filter(|item| {
            query.is_empty()
                || item.name.to_lowercase().contains(&query)
                || item.description.to_lowercase().contains(&query)
        })
        .filter(|item| filter.category.is_none_or(|c| item.category == c))
        .filter(|item| match &filter.region {
            Some(region) => item.provider().is_some_and(|p| &p.region == region),
            None => true,
        })
        .filter(|item| filter.max_price.is_none_or(|max| item.price_per_day <= max))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_item_has_a_provider() {
        for item in all_gear() {
            assert!(item.provider().is_some(), "{} has no provider", item.id);
            assert!(item.min_rental_days <= item.max_rental_days);
            assert!(!item.pickup_locations.is_empty());
        }
    }

    #[test]
    fn test_pricing_from_item() {
        let shelter = gear_by_id("gear-3").unwrap();
        let pricing = shelter.pricing();
        assert_eq!(pricing.price_per_day, Decimal::from(25));
        assert_eq!(pricing.price_per_week, Decimal::from(150));
        assert_eq!(pricing.deposit_required, Decimal::from(100));
        assert_eq!(pricing.delivery_fee, Some(Decimal::from(20)));
    }

    #[test]
    fn test_pricing_drops_fee_without_delivery() {
        let mut item = gear_by_id("gear-1").unwrap().clone();
        item.delivery_available = false;
        assert_eq!(item.pricing().delivery_fee, None);
    }

    #[test]
    fn test_lookups() {
        assert_eq!(gear_by_category(GearCategory::Tents).len(), 3);
        assert_eq!(gear_by_provider("provider-2").len(), 3);
        assert!(gear_by_id("gear-99").is_none());
        assert_eq!(provider_by_id("provider-3").unwrap().location(), "Hammamet, Nabeul");
    }

    #[test]
    fn test_search_by_text() {
        let results = search_gear("TENT", &GearFilter::default());
        let ids: Vec<&str> = results.iter().map(|i| i.id.as_str()).collect();
        // matches in names and in descriptions
        assert!(ids.contains(&"gear-1"));
        assert!(ids.contains(&"gear-2"));
        assert!(!ids.contains(&"gear-6"));
    }

    #[test]
    fn test_search_with_filters() {
        let filter = GearFilter {
            category: Some(GearCategory::Tents),
            region: Some("Jendouba".to_string()),
            max_price: None,
        };
        let results = search_gear("", &filter);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "gear-2");

        let cheap = GearFilter {
            max_price: Some(Decimal::from(20)),
            ..GearFilter::default()
        };
        let ids: Vec<&str> = search_gear("", &cheap).iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["gear-4", "gear-6"]);
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("Cooking".parse::<GearCategory>().unwrap(), GearCategory::Cooking);
        assert!("boats".parse::<GearCategory>().is_err());
    }
}
