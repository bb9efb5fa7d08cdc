//! Location model for geographic coordinates and metadata

use serde::{Deserialize, Serialize};

/// Location coordinates
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Location name (city, region, etc.)
    pub name: String,
    /// Country code (ISO 3166-1 alpha-2)
    pub country: Option<String>,
}

impl Location {
    /// Create a new location
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, name: String) -> Self {
        Self {
            latitude,
            longitude,
            name,
            country: None,
        }
    }

    /// Create a location inside Tunisia
    #[must_use]
    pub fn tunisia(latitude: f64, longitude: f64, name: &str) -> Self {
        Self {
            latitude,
            longitude,
            name: name.to_string(),
            country: Some("TN".to_string()),
        }
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }

    /// Great-circle distance to another location in kilometers
    #[must_use]
    pub fn distance_km(&self, other: &Location) -> f64 {
        haversine::distance(
            haversine::Location {
                latitude: self.latitude,
                longitude: self.longitude,
            },
            haversine::Location {
                latitude: other.latitude,
                longitude: other.longitude,
            },
            haversine::Units::Kilometers,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_coordinates() {
        let location = Location::tunisia(33.4667, 9.0203, "Douz");
        assert_eq!(location.format_coordinates(), "33.4667, 9.0203");
        assert_eq!(location.country.as_deref(), Some("TN"));
    }

    #[test]
    fn test_distance_is_symmetric_and_zero_on_self() {
        let douz = Location::tunisia(33.4667, 9.0203, "Douz");
        let tozeur = Location::tunisia(33.9167, 8.1333, "Tozeur");

        assert_eq!(douz.distance_km(&douz), 0.0);
        let there = douz.distance_km(&tozeur);
        let back = tozeur.distance_km(&douz);
        assert!((there - back).abs() < 1e-9);
        // roughly 95 km as the crow flies
        assert!(there > 80.0 && there < 110.0);
    }
}
