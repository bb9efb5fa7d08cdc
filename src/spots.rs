//! Camping spots and geographic search
//!
//! Static catalog of destinations across Tunisia. Each spot carries its
//! terrain category, which selects the packing list for a trip there.

use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::models::{Locale, LocalizedText, Location};
use crate::packing::DestinationCategory;
use crate::{Result, TuniCampError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Moderate,
    Challenging,
}

impl FromStr for Difficulty {
    type Err = TuniCampError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "moderate" => Ok(Difficulty::Moderate),
            "challenging" => Ok(Difficulty::Challenging),
            other => Err(TuniCampError::validation(format!(
                "Unknown difficulty '{other}'"
            ))),
        }
    }
}

/// A camping destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampingSpot {
    pub id: String,
    pub name: LocalizedText,
    pub description: String,
    pub location: Location,
    pub category: DestinationCategory,
    pub difficulty: Difficulty,
    pub amenities: Vec<String>,
    pub rating: f32,
    pub review_count: u32,
    pub region: String,
    /// Elevation in meters, when known
    pub elevation: Option<u32>,
    pub best_season: Vec<String>,
}

impl CampingSpot {
    #[must_use]
    pub fn display_name(&self, locale: Locale) -> &str {
        self.name.get(locale)
    }
}

const WINTER: &[&str] = &["October", "November", "December", "January", "February", "March"];
const SUMMER: &[&str] = &["May", "June", "July", "August", "September"];

#[allow(clippy::too_many_arguments)]
fn spot(
    id: &str,
    name: LocalizedText,
    description: &str,
    (longitude, latitude): (f64, f64),
    category: DestinationCategory,
    difficulty: Difficulty,
    amenities: &[&str],
    (rating, review_count): (f32, u32),
    region: &str,
    elevation: Option<u32>,
    best_season: &[&str],
) -> CampingSpot {
    CampingSpot {
        id: id.to_string(),
        location: Location::tunisia(latitude, longitude, &name.en),
        name,
        description: description.to_string(),
        category,
        difficulty,
        amenities: amenities.iter().map(|a| (*a).to_string()).collect(),
        rating,
        review_count,
        region: region.to_string(),
        elevation,
        best_season: best_season.iter().map(|m| (*m).to_string()).collect(),
    }
}

static SPOTS: LazyLock<Vec<CampingSpot>> = LazyLock::new(|| {
    vec![
        spot(
            "sahara-douz",
            LocalizedText::new("Sahara Desert Camp - Douz", "Camp du Désert du Sahara - Douz", "مخيم الصحراء الكبرى - دوز"),
            "Experience the magic of the Sahara with traditional Berber tents and camel treks. Watch stunning sunrises and sunsets over endless dunes.",
            (9.0203, 33.4667),
            DestinationCategory::Desert,
            Difficulty::Moderate,
            &["Traditional tents", "Camel rides", "Guided tours", "Campfire", "Local cuisine"],
            (4.8, 127),
            "Kebili",
            None,
            WINTER,
        ),
        spot(
            "kroumirie-mountains",
            LocalizedText::new("Kroumirie Mountains Forest Camp", "Camp Forestier des Monts Kroumirie", "مخيم غابات جبال الكرومير"),
            "Nestled in Tunisia's lush northern forests, this spot offers hiking trails, wildlife watching, and cool mountain air.",
            (8.75, 36.5),
            DestinationCategory::Forest,
            Difficulty::Easy,
            &["Hiking trails", "Wildlife watching", "Fresh water", "Shade", "Cool climate"],
            (4.6, 89),
            "Jendouba",
            Some(800),
            &["April", "May", "June", "September", "October"],
        ),
        spot(
            "sidi-bou-said-beach",
            LocalizedText::new("Mediterranean Beach Camp - Sidi Bou Said", "Camp de Plage Méditerranéenne - Sidi Bou Saïd", "مخيم الشاطئ المتوسطي - سيدي بو سعيد"),
            "Coastal camping with stunning Mediterranean views, near the famous blue and white village. Perfect for water sports and beach activities.",
            (10.3467, 36.87),
            DestinationCategory::Beach,
            Difficulty::Easy,
            &["Beach access", "Water sports", "Restaurants nearby", "Historic sites", "Swimming"],
            (4.7, 156),
            "Tunis",
            None,
            SUMMER,
        ),
        spot(
            "chaambi-peak",
            LocalizedText::new("Mount Chaambi Peak Camp", "Camp du Pic du Mont Chaambi", "مخيم قمة جبل الشعانبي"),
            "Tunisia's highest peak offers challenging hiking and spectacular panoramic views. Perfect for experienced campers seeking adventure.",
            (8.6667, 35.2),
            DestinationCategory::Mountain,
            Difficulty::Challenging,
            &["Mountain trails", "Panoramic views", "Wildlife", "Rock climbing", "Stargazing"],
            (4.9, 73),
            "Kasserine",
            Some(1544),
            &["March", "April", "May", "September", "October", "November"],
        ),
        spot(
            "tozeur-oasis",
            LocalizedText::new("Tozeur Oasis Desert Camp", "Camp Désertique de l'Oasis de Tozeur", "مخيم واحة توزر الصحراوي"),
            "Camp among palm groves and natural springs in this stunning desert oasis. Experience traditional Tunisian hospitality and desert culture.",
            (8.1333, 33.9167),
            DestinationCategory::Desert,
            Difficulty::Easy,
            &["Palm groves", "Natural springs", "Traditional architecture", "Local guides", "Desert tours"],
            (4.5, 94),
            "Tozeur",
            None,
            WINTER,
        ),
        spot(
            "hammamet-beach",
            LocalizedText::new("Hammamet Beach Camping", "Camping de la Plage d'Hammamet", "تخييم شاطئ الحمامات"),
            "Popular beach destination with golden sand beaches, clear waters, and vibrant nightlife. Great for families and water enthusiasts.",
            (10.6167, 36.4),
            DestinationCategory::Beach,
            Difficulty::Easy,
            &["Golden beaches", "Water sports", "Restaurants", "Shopping", "Entertainment"],
            (4.4, 203),
            "Nabeul",
            None,
            SUMMER,
        ),
    ]
});

#[must_use]
pub fn all_spots() -> &'static [CampingSpot] {
    &SPOTS
}

#[must_use]
pub fn spot_by_id(id: &str) -> Option<&'static CampingSpot> {
    SPOTS.iter().find(|spot| spot.id == id)
}

#[must_use]
pub fn spots_by_category(category: DestinationCategory) -> Vec<&'static CampingSpot> {
    SPOTS.iter().filter(|spot| spot.category == category).collect()
}

/// Spots whose name, description or region contains `query` (any language)
#[must_use]
pub fn search_spots(query: &str) -> Vec<&'static CampingSpot> {
    let query = query.trim();
    if query.is_empty() {
        return SPOTS.iter().collect();
    }
    let lowered = query.to_lowercase();
    SPOTS
        .iter()
        .filter(|spot| {
            spot.name.contains_ignore_case(query)
                || spot.description.to_lowercase().contains(&lowered)
                || spot.region.to_lowercase().contains(&lowered)
        })
        .collect()
}

/// Geographic search functionality
pub struct GeographicSearch;

impl GeographicSearch {
    /// Spots within `radius_km` of `center`, nearest first, with their distance
    #[must_use]
    pub fn spots_within_radius<'a>(
        spots: &'a [CampingSpot],
        center: &Location,
        radius_km: f64,
    ) -> Vec<(&'a CampingSpot, f64)> {
        let mut results: Vec<(&CampingSpot, f64)> = spots
            .iter()
            .map(|spot| (spot, center.distance_km(&spot.location)))
            .filter(|(_, distance)| *distance <= radius_km)
            .collect();

        results.sort_by(|a, b| a.1.total_cmp(&b.1));
        results
    }
}
