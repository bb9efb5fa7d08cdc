//! Member profile: preferences, trip history and favourite spots
//!
//! Like the session, the profile lives in memory for the lifetime of the
//! process. Stats are derived from the trip history rather than stored.

use std::collections::HashSet;
use std::sync::RwLock;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Locale, LocalizedText, date};
use crate::rental::DateRange;
use crate::session::User;
use crate::spots::{CampingSpot, spot_by_id};
use crate::{Result, TuniCampError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    Upcoming,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTrip {
    pub id: String,
    pub spot_id: String,
    pub spot_name: LocalizedText,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: TripStatus,
    pub group_size: u32,
    pub notes: Option<String>,
    pub photos: Vec<String>,
    pub rating: Option<u8>,
    pub review: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteSpot {
    pub spot_id: String,
    pub spot_name: LocalizedText,
    pub region: String,
    pub added_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub email: bool,
    pub push: bool,
    pub community: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacySettings {
    pub show_email: bool,
    pub show_location: bool,
    pub show_trips: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub language: Locale,
    pub notifications: NotificationSettings,
    pub privacy: PrivacySettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user: User,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub joined_date: NaiveDate,
    pub preferences: Preferences,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub trips_completed: u32,
    pub spots_visited: u32,
    pub reviews_written: u32,
    pub photos_shared: u32,
}

/// What other members see, filtered by the privacy settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicProfile {
    pub name: String,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub trips: Vec<UserTrip>,
    pub stats: ProfileStats,
}

#[derive(Debug)]
struct ProfileData {
    profile: UserProfile,
    trips: Vec<UserTrip>,
    favorites: Vec<FavoriteSpot>,
    next_trip_id: u64,
}

#[derive(Debug)]
pub struct ProfileService {
    data: RwLock<ProfileData>,
}

impl ProfileService {
    fn with_history(profile: UserProfile, trips: Vec<UserTrip>, favorites: Vec<FavoriteSpot>) -> Self {
        let next_trip_id = trips.len() as u64 + 1;
        Self {
            data: RwLock::new(ProfileData {
                profile,
                trips,
                favorites,
                next_trip_id,
            }),
        }
    }

    /// The demo member shown on the profile page
    #[must_use]
    pub fn demo() -> Self {
        let profile = UserProfile {
            user: User {
                id: "1".to_string(),
                email: "ahmed@example.com".to_string(),
                name: "Ahmed Ben Salem".to_string(),
                avatar: Some("/diverse-profile-avatars.png".to_string()),
            },
            bio: Some("Passionate about exploring Tunisia's natural beauty. Desert camping enthusiast and nature photographer.".to_string()),
            location: Some("Tunis, Tunisia".to_string()),
            joined_date: const { date(2023, 6, 15) },
            preferences: Preferences {
                language: Locale::En,
                notifications: NotificationSettings {
                    email: true,
                    push: true,
                    community: false,
                },
                privacy: PrivacySettings {
                    show_email: false,
                    show_location: true,
                    show_trips: true,
                },
            },
        };

        let trip = |id: &str,
                    spot_id: &str,
                    (start, end): (NaiveDate, NaiveDate),
                    status: TripStatus,
                    group_size: u32| {
            let name = spot_by_id(spot_id)
                .map(|spot| spot.name.clone())
                .unwrap_or_else(|| LocalizedText::new(spot_id, spot_id, spot_id));
            UserTrip {
                id: id.to_string(),
                spot_id: spot_id.to_string(),
                spot_name: name,
                start_date: start,
                end_date: end,
                status,
                group_size,
                notes: None,
                photos: Vec::new(),
                rating: None,
                review: None,
            }
        };
        let trips = vec![
            UserTrip {
                notes: Some("Amazing stargazing experience. Camel trekking was unforgettable!".to_string()),
                photos: vec!["/sahara-douz-camp.png".to_string(), "/desert-sunset.png".to_string()],
                rating: Some(5),
                review: Some("Absolutely magical experience in the Sahara. The silence and vastness of the desert is humbling.".to_string()),
                ..trip("trip-1", "sahara-douz", (const { date(2024, 3, 15) }, const { date(2024, 3, 18) }), TripStatus::Completed, 4)
            },
            UserTrip {
                notes: Some("Challenging hike but worth it for the sunrise views.".to_string()),
                photos: vec!["/chaambi-peak.png".to_string()],
                rating: Some(4),
                ..trip("trip-2", "chaambi-peak", (const { date(2024, 5, 20) }, const { date(2024, 5, 22) }), TripStatus::Completed, 2)
            },
            UserTrip {
                notes: Some("Planning a family camping trip with kids.".to_string()),
                ..trip("trip-3", "kroumirie-mountains", (const { date(2024, 8, 10) }, const { date(2024, 8, 12) }), TripStatus::Upcoming, 6)
            },
        ];

        let favorites = [
            ("sahara-douz", const { date(2024, 1, 15) }),
            ("sidi-bou-said-beach", const { date(2024, 2, 20) }),
            ("kroumirie-mountains", const { date(2024, 3, 10) }),
        ]
        .into_iter()
        .filter_map(|(id, added)| spot_by_id(id).map(|spot| favorite(spot, added)))
        .collect();

        Self::with_history(profile, trips, favorites)
    }

    pub fn profile(&self) -> Result<UserProfile> {
        Ok(self.read()?.profile.clone())
    }

    pub fn update_preferences(&self, preferences: Preferences) -> Result<()> {
        self.write()?.profile.preferences = preferences;
        Ok(())
    }

    pub fn trips(&self) -> Result<Vec<UserTrip>> {
        Ok(self.read()?.trips.clone())
    }

    /// Upcoming trips that have not ended by `today`, soonest first
    pub fn upcoming_trips(&self, today: NaiveDate) -> Result<Vec<UserTrip>> {
        let mut trips: Vec<UserTrip> = self
            .read()?
            .trips
            .iter()
            .filter(|trip| trip.status == TripStatus::Upcoming && trip.end_date >= today)
            .cloned()
            .collect();
        trips.sort_by_key(|trip| trip.start_date);
        Ok(trips)
    }

    /// Record a planned trip to a known spot
    #[tracing::instrument(skip(self, range), fields(start = %range.start, end = %range.end))]
    pub fn plan_trip(&self, spot_id: &str, range: DateRange, group_size: u32) -> Result<UserTrip> {
        let spot = spot_by_id(spot_id).ok_or_else(|| TuniCampError::not_found("Camping spot", spot_id))?;
        range.rental_days()?;
        if group_size == 0 {
            return Err(TuniCampError::validation("Group size must be at least 1"));
        }

        let mut data = self.write()?;
        let trip = UserTrip {
            id: format!("trip-{}", data.next_trip_id),
            spot_id: spot.id.clone(),
            spot_name: spot.name.clone(),
            start_date: range.start,
            end_date: range.end,
            status: TripStatus::Upcoming,
            group_size,
            notes: None,
            photos: Vec::new(),
            rating: None,
            review: None,
        };
        data.next_trip_id += 1;
        data.trips.push(trip.clone());
        tracing::info!(trip_id = %trip.id, "Trip planned");
        Ok(trip)
    }

    /// Mark an upcoming trip as cancelled
    pub fn cancel_trip(&self, trip_id: &str) -> Result<UserTrip> {
        let mut data = self.write()?;
        let trip = data
            .trips
            .iter_mut()
            .find(|trip| trip.id == trip_id)
            .ok_or_else(|| TuniCampError::not_found("Trip", trip_id))?;
        if trip.status != TripStatus::Upcoming {
            return Err(TuniCampError::validation(format!(
                "Only upcoming trips can be cancelled, this one is {:?}",
                trip.status
            )));
        }
        trip.status = TripStatus::Cancelled;
        Ok(trip.clone())
    }

    pub fn favorites(&self) -> Result<Vec<FavoriteSpot>> {
        Ok(self.read()?.favorites.clone())
    }

    /// Add a spot to the favourites; adding it twice keeps the first entry
    pub fn add_favorite(&self, spot_id: &str, today: NaiveDate) -> Result<FavoriteSpot> {
        let spot = spot_by_id(spot_id).ok_or_else(|| TuniCampError::not_found("Camping spot", spot_id))?;
        let mut data = self.write()?;
        if let Some(existing) = data.favorites.iter().find(|f| f.spot_id == spot.id) {
            return Ok(existing.clone());
        }
        let entry = favorite(spot, today);
        data.favorites.push(entry.clone());
        Ok(entry)
    }

    /// Returns whether the spot was a favourite
    pub fn remove_favorite(&self, spot_id: &str) -> Result<bool> {
        let mut data = self.write()?;
        let before = data.favorites.len();
        data.favorites.retain(|f| f.spot_id != spot_id);
        Ok(data.favorites.len() != before)
    }

    pub fn stats(&self) -> Result<ProfileStats> {
        Ok(compute_stats(&self.read()?.trips))
    }

    /// The profile as other members see it
    pub fn public_profile(&self) -> Result<PublicProfile> {
        let data = self.read()?;
        let profile = &data.profile;
        let privacy = profile.preferences.privacy;
        Ok(PublicProfile {
            name: profile.user.name.clone(),
            avatar: profile.user.avatar.clone(),
            bio: profile.bio.clone(),
            email: privacy.show_email.then(|| profile.user.email.clone()),
            location: if privacy.show_location {
                profile.location.clone()
            } else {
                None
            },
            trips: if privacy.show_trips {
                data.trips.clone()
            } else {
                Vec::new()
            },
            stats: compute_stats(&data.trips),
        })
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, ProfileData>> {
        self.data
            .read()
            .map_err(|_| TuniCampError::storage("profile store is poisoned"))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, ProfileData>> {
        self.data
            .write()
            .map_err(|_| TuniCampError::storage("profile store is poisoned"))
    }
}

fn favorite(spot: &CampingSpot, added_date: NaiveDate) -> FavoriteSpot {
    FavoriteSpot {
        spot_id: spot.id.clone(),
        spot_name: spot.name.clone(),
        region: spot.region.clone(),
        added_date,
    }
}

fn compute_stats(trips: &[UserTrip]) -> ProfileStats {
    let completed: Vec<&UserTrip> = trips
        .iter()
        .filter(|trip| trip.status == TripStatus::Completed)
        .collect();
    let spots: HashSet<&str> = completed.iter().map(|trip| trip.spot_id.as_str()).collect();
    let count = |n: usize| u32::try_from(n).unwrap_or(u32::MAX);

    ProfileStats {
        trips_completed: count(completed.len()),
        spots_visited: count(spots.len()),
        reviews_written: count(completed.iter().filter(|trip| trip.review.is_some()).count()),
        photos_shared: count(trips.iter().map(|trip| trip.photos.len()).sum()),
    }
}
