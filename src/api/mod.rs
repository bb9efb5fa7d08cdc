//! JSON API consumed by the web frontend

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::TuniCampError;
use crate::community::{self, DiscussionCategory, DiscussionThread, PhotoPost, Review};
use crate::models::Locale;
use crate::packing::DestinationCategory;
use crate::profile::{
    FavoriteSpot, Preferences, ProfileService, ProfileStats, PublicProfile, UserTrip,
};
use crate::rental::catalog::{self, GearCategory, GearFilter, GearItem, GearProvider};
use crate::rental::{
    BookingConfirmation, BookingRequest, BookingService, CostBreakdown, DateRange,
    DeliveryChoice,
};
use crate::safety::{self, EcoTip, EmergencyContact, Regulation, SafetyBriefing, SafetyTip};
use crate::spots::{self, CampingSpot, Difficulty};
use crate::trip::{TripPlan, TripPlanner, TripRequest};
use crate::weather::WeatherProvider;

/// Shared state of the API handlers
#[derive(Clone)]
pub struct AppState {
    planner: Arc<TripPlanner<Box<dyn WeatherProvider>>>,
    bookings: Arc<BookingService>,
    profile: Arc<ProfileService>,
    default_days: u32,
}

impl AppState {
    #[must_use]
    pub fn new(provider: Box<dyn WeatherProvider>, default_days: u32) -> Self {
        Self {
            planner: Arc::new(TripPlanner::new(provider)),
            bookings: Arc::new(BookingService::new()),
            profile: Arc::new(ProfileService::demo()),
            default_days,
        }
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Error body returned by every failing endpoint
pub struct ApiError(TuniCampError);

impl From<TuniCampError> for ApiError {
    fn from(err: TuniCampError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            TuniCampError::NotFound { .. } => StatusCode::NOT_FOUND,
            TuniCampError::Validation { .. }
            | TuniCampError::InvalidRange { .. }
            | TuniCampError::IncompleteInput { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        } else {
            tracing::debug!(error = %self.0, "Request rejected");
        }
        (status, Json(json!({ "error": self.0.user_message() }))).into_response()
    }
}

type ApiResult<T> = Result<T, ApiError>;

#[derive(Serialize, Deserialize)]
pub struct ApiSpot {
    pub id: String,
    pub name: String,
    pub category: DestinationCategory,
    pub difficulty: Difficulty,
    pub region: String,
    pub rating: f32,
    /// Mean of the community reviews, when there are any
    pub community_rating: Option<f32>,
    pub latitude: f64,
    pub longitude: f64,
}

impl ApiSpot {
    fn from_spot(spot: &CampingSpot, locale: Locale) -> Self {
        Self {
            id: spot.id.clone(),
            name: spot.display_name(locale).to_string(),
            category: spot.category,
            difficulty: spot.difficulty,
            region: spot.region.clone(),
            rating: spot.rating,
            community_rating: community::average_rating(&spot.id),
            latitude: spot.location.latitude,
            longitude: spot.location.longitude,
        }
    }
}

#[derive(Deserialize)]
pub struct SpotQuery {
    pub q: Option<String>,
    pub category: Option<DestinationCategory>,
    pub difficulty: Option<String>,
    #[serde(default)]
    pub locale: Locale,
}

#[derive(Deserialize)]
pub struct PlanQuery {
    pub days: Option<u32>,
    pub group_size: Option<u32>,
    #[serde(default)]
    pub locale: Locale,
}

#[derive(Deserialize)]
pub struct GearQuery {
    pub q: Option<String>,
    pub category: Option<GearCategory>,
    pub region: Option<String>,
    pub max_price: Option<Decimal>,
}

#[derive(Deserialize)]
pub struct QuoteBody {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub delivery: DeliveryChoice,
}

#[derive(Deserialize)]
pub struct DiscussionQuery {
    pub region: Option<String>,
    pub category: Option<String>,
}

#[derive(Deserialize)]
pub struct RegionQuery {
    pub region: Option<String>,
}

#[derive(Deserialize)]
pub struct TipQuery {
    pub category: Option<DestinationCategory>,
}

#[derive(Deserialize)]
pub struct TripQuery {
    #[serde(default)]
    pub upcoming: bool,
}

#[derive(Deserialize)]
pub struct TripBody {
    pub spot_id: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub group_size: u32,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/spots", get(list_spots))
        .route("/spots/{id}", get(get_spot))
        .route("/spots/{id}/plan", get(plan_trip))
        .route("/spots/{id}/reviews", get(spot_reviews))
        .route("/spots/{id}/safety", get(spot_safety))
        .route("/gear", get(list_gear))
        .route("/gear/{id}", get(get_gear))
        .route("/gear/{id}/quote", post(quote_gear))
        .route("/providers", get(list_providers))
        .route("/bookings", post(create_booking))
        .route("/bookings/{id}", get(get_booking))
        .route("/bookings/{id}/accept", post(accept_booking))
        .route("/bookings/{id}/cancel", post(cancel_booking))
        .route("/community/reviews", get(list_reviews))
        .route("/community/discussions", get(list_discussions))
        .route("/community/photos", get(list_photos))
        .route("/safety/contacts", get(list_contacts))
        .route("/safety/tips", get(list_tips))
        .route("/safety/regulations", get(list_regulations))
        .route("/safety/eco-tips", get(list_eco_tips))
        .route("/profile", get(public_profile))
        .route("/profile/stats", get(profile_stats))
        .route("/profile/preferences", get(get_preferences).put(update_preferences))
        .route("/profile/trips", get(list_trips).post(add_trip))
        .route("/profile/trips/{id}/cancel", post(cancel_trip))
        .route("/profile/favorites", get(list_favorites))
        .route(
            "/profile/favorites/{spot_id}",
            put(add_favorite).delete(remove_favorite),
        )
        .with_state(state)
}

async fn list_spots(Query(query): Query<SpotQuery>) -> ApiResult<Json<Vec<ApiSpot>>> {
    let difficulty = query
        .difficulty
        .as_deref()
        .map(str::parse::<Difficulty>)
        .transpose()?;
    let spots = spots::search_spots(query.q.as_deref().unwrap_or_default())
        .into_iter()
        .filter(|spot| query.category.is_none_or(|c| spot.category == c))
        .filter(|spot| difficulty.is_none_or(|d| spot.difficulty == d))
        .map(|spot| ApiSpot::from_spot(spot, query.locale))
        .collect();
    Ok(Json(spots))
}

fn find_spot(id: &str) -> ApiResult<&'static CampingSpot> {
    spots::spot_by_id(id).ok_or_else(|| TuniCampError::not_found("Camping spot", id).into())
}

async fn spot_reviews(Path(id): Path<String>) -> ApiResult<Json<Vec<Review>>> {
    let spot = find_spot(&id)?;
    let reviews = community::reviews_for_spot(&spot.id)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(reviews))
}

async fn spot_safety(Path(id): Path<String>) -> ApiResult<Json<SafetyBriefing>> {
    Ok(Json(safety::briefing(find_spot(&id)?)))
}

async fn get_spot(Path(id): Path<String>) -> ApiResult<Json<CampingSpot>> {
    Ok(Json(find_spot(&id)?.clone()))
}

async fn plan_trip(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<PlanQuery>,
) -> ApiResult<Json<TripPlan>> {
    let request = TripRequest {
        spot_id: id,
        days: query.days.unwrap_or(state.default_days),
        group_size: query.group_size.unwrap_or(1),
        locale: query.locale,
    };
    Ok(Json(state.planner.plan(&request).await?))
}

async fn list_gear(Query(query): Query<GearQuery>) -> Json<Vec<GearItem>> {
    let filter = GearFilter {
        category: query.category,
        region: query.region,
        max_price: query.max_price,
    };
    let items = catalog::search_gear(query.q.as_deref().unwrap_or_default(), &filter)
        .into_iter()
        .cloned()
        .collect();
    Json(items)
}

async fn get_gear(Path(id): Path<String>) -> ApiResult<Json<GearItem>> {
    catalog::gear_by_id(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| TuniCampError::not_found("Gear item", id).into())
}

async fn quote_gear(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<QuoteBody>,
) -> ApiResult<Json<CostBreakdown>> {
    let request = BookingRequest {
        gear_id: id,
        start_date: body.start_date,
        end_date: body.end_date,
        delivery: body.delivery,
        notes: String::new(),
        agree_to_terms: false,
    };
    Ok(Json(state.bookings.quote(&request)?))
}

async fn list_providers() -> Json<Vec<GearProvider>> {
    Json(catalog::all_providers().to_vec())
}

async fn create_booking(
    State(state): State<AppState>,
    Json(request): Json<BookingRequest>,
) -> ApiResult<(StatusCode, Json<BookingConfirmation>)> {
    let confirmation = state.bookings.confirm(request, today())?;
    Ok((StatusCode::CREATED, Json(confirmation)))
}

async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<BookingConfirmation>> {
    Ok(Json(state.bookings.get(&id, today())?))
}

async fn accept_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<BookingConfirmation>> {
    Ok(Json(state.bookings.accept(&id, today())?))
}

async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<BookingConfirmation>> {
    Ok(Json(state.bookings.cancel(&id, today())?))
}

async fn list_reviews() -> Json<Vec<Review>> {
    Json(community::all_reviews().to_vec())
}

async fn list_discussions(
    Query(query): Query<DiscussionQuery>,
) -> ApiResult<Json<Vec<DiscussionThread>>> {
    let category = query
        .category
        .as_deref()
        .map(str::parse::<DiscussionCategory>)
        .transpose()?;
    let threads = match (&query.region, category) {
        (Some(region), _) => community::discussions_by_region(region),
        (None, Some(category)) => community::discussions_by_category(category),
        (None, None) => community::all_discussions().iter().collect(),
    };
    let threads = threads
        .into_iter()
        .filter(|thread| category.is_none_or(|c| thread.category == c))
        .cloned()
        .collect();
    Ok(Json(threads))
}

async fn list_photos() -> Json<Vec<PhotoPost>> {
    Json(community::photo_feed().into_iter().cloned().collect())
}

async fn list_contacts(Query(query): Query<RegionQuery>) -> Json<Vec<EmergencyContact>> {
    let contacts = match query.region.as_deref() {
        Some(region) => safety::contacts_for_region(region).into_iter().cloned().collect(),
        None => safety::emergency_contacts().to_vec(),
    };
    Json(contacts)
}

async fn list_tips(Query(query): Query<TipQuery>) -> Json<Vec<SafetyTip>> {
    let tips = match query.category {
        Some(category) => safety::tips_for(category).into_iter().cloned().collect(),
        None => safety::safety_tips().to_vec(),
    };
    Json(tips)
}

async fn list_regulations(Query(query): Query<RegionQuery>) -> Json<Vec<Regulation>> {
    let rules = match query.region.as_deref() {
        Some(region) => safety::regulations_for_region(region)
            .into_iter()
            .cloned()
            .collect(),
        None => safety::regulations().to_vec(),
    };
    Json(rules)
}

async fn list_eco_tips() -> Json<Vec<EcoTip>> {
    Json(safety::eco_tips().to_vec())
}

async fn public_profile(State(state): State<AppState>) -> ApiResult<Json<PublicProfile>> {
    Ok(Json(state.profile.public_profile()?))
}

async fn profile_stats(State(state): State<AppState>) -> ApiResult<Json<ProfileStats>> {
    Ok(Json(state.profile.stats()?))
}

async fn get_preferences(State(state): State<AppState>) -> ApiResult<Json<Preferences>> {
    Ok(Json(state.profile.profile()?.preferences))
}

async fn update_preferences(
    State(state): State<AppState>,
    Json(preferences): Json<Preferences>,
) -> ApiResult<Json<Preferences>> {
    state.profile.update_preferences(preferences)?;
    Ok(Json(preferences))
}

async fn list_trips(
    State(state): State<AppState>,
    Query(query): Query<TripQuery>,
) -> ApiResult<Json<Vec<UserTrip>>> {
    let trips = if query.upcoming {
        state.profile.upcoming_trips(today())?
    } else {
        state.profile.trips()?
    };
    Ok(Json(trips))
}

async fn add_trip(
    State(state): State<AppState>,
    Json(body): Json<TripBody>,
) -> ApiResult<(StatusCode, Json<UserTrip>)> {
    let range = DateRange::from_selection(body.start_date, body.end_date)?;
    let trip = state.profile.plan_trip(&body.spot_id, range, body.group_size)?;
    Ok((StatusCode::CREATED, Json(trip)))
}

async fn cancel_trip(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserTrip>> {
    Ok(Json(state.profile.cancel_trip(&id)?))
}

async fn list_favorites(State(state): State<AppState>) -> ApiResult<Json<Vec<FavoriteSpot>>> {
    Ok(Json(state.profile.favorites()?))
}

async fn add_favorite(
    State(state): State<AppState>,
    Path(spot_id): Path<String>,
) -> ApiResult<Json<FavoriteSpot>> {
    Ok(Json(state.profile.add_favorite(&spot_id, today())?))
}

async fn remove_favorite(
    State(state): State<AppState>,
    Path(spot_id): Path<String>,
) -> ApiResult<StatusCode> {
    if state.profile.remove_favorite(&spot_id)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(TuniCampError::not_found("Favourite spot", spot_id).into())
    }
}
