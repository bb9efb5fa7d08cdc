//! `TuniCamp` - Camping trip planning and gear rental for Tunisia
//!
//! This library provides rental cost quotes and booking validation for
//! camping gear, weather-aware packing lists, and the destination catalog
//! the trip planner draws on. Around them sit the community feed, the
//! safety hub and the member profile.

pub mod api;
pub mod community;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod packing;
pub mod profile;
pub mod rental;
pub mod safety;
pub mod session;
pub mod spots;
pub mod trip;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use config::TuniCampConfig;
pub use error::TuniCampError;
pub use models::{Locale, LocalizedText, Location};
pub use packing::{
    DestinationCategory, ItemCategory, PackingCatalog, PackingChecklist, PackingItem,
    group_by_category,
};
pub use rental::{
    BookingConfirmation, BookingRequest, BookingService, CostBreakdown, DateRange,
    DeliveryChoice, RentalPricing, compute_cost,
};
pub use profile::ProfileService;
pub use safety::SafetyBriefing;
pub use spots::{CampingSpot, GeographicSearch};
pub use trip::{TripPlan, TripPlanner, TripRequest};
pub use weather::{ClimateWeatherProvider, DailyWeather, WeatherProvider, WeatherSummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TuniCampError>;
