//! Integration tests for the TuniCamp library and HTTP API

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{Duration, NaiveDate, Utc};
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tower::ServiceExt;

use tunicamp::api::AppState;
use tunicamp::weather::StaticWeatherProvider;
use tunicamp::{
    ClimateWeatherProvider, CostBreakdown, DailyWeather, DateRange, DeliveryChoice,
    DestinationCategory, Location, PackingChecklist, RentalPricing, TuniCampConfig,
    WeatherSummary, compute_cost, packing, web,
};

fn app() -> Router {
    let start = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
    let state = AppState::new(Box::new(ClimateWeatherProvider::starting_on(start)), 7);
    web::app(state, &TuniCampConfig::default())
}

/// Send through a shared router so state carries across requests
async fn send_to(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    send_to(&app(), request).await
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(empty_request("GET", uri)).await
}

async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
    send(json_request("POST", uri, body)).await
}

/// Scenario A and B of the booking form, end to end through the calculator
#[test]
fn test_rental_quotes_for_beach_shelter() {
    let pricing = RentalPricing::new(
        Decimal::from(25),
        Decimal::from(150),
        Decimal::from(50),
        Some(Decimal::from(20)),
    )
    .unwrap();
    let march = |d| NaiveDate::from_ymd_opt(2025, 3, d).unwrap();

    let pickup = DeliveryChoice::Pickup {
        location: "Hammamet".to_string(),
    };
    let short = DateRange::new(march(1), march(3)).unwrap();
    let costs = compute_cost(Some(&short), &pricing, &pickup).unwrap();
    assert_eq!(costs.total, Decimal::from(125));

    let delivery = DeliveryChoice::Delivery {
        address: "Rue Ibn Khaldoun, Sousse".to_string(),
    };
    let week = DateRange::new(march(1), march(7)).unwrap();
    let costs = compute_cost(Some(&week), &pricing, &delivery).unwrap();
    assert_eq!(
        (costs.days, costs.subtotal, costs.delivery_fee, costs.total),
        (7, Decimal::from(150), Decimal::from(20), Decimal::from(220))
    );
}

#[test]
fn test_packing_checklist_from_forecast() {
    let start = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    let forecast = WeatherSummary::new(
        Location::tunisia(35.2, 8.6667, "Chaambi"),
        vec![
            DailyWeather::new(start, 4.0, 20.0, 0.0),
            DailyWeather::new(start + Duration::days(1), 5.0, 16.0, 4.0),
        ],
    );
    let items = packing::generate(DestinationCategory::Mountain, Some(&forecast)).unwrap();
    let mut checklist = PackingChecklist::new(items);
    assert_eq!(checklist.total(), 18);

    assert!(checklist.toggle("Extra warm layers"));
    assert!(checklist.toggle("Waterproof bags"));
    // 2 of 18
    assert_eq!(checklist.completion_rate(), 11);
}

#[tokio::test]
async fn test_list_spots_filtered_and_localized() {
    let (status, body) = get("/api/spots?category=desert&locale=fr").await;
    assert_eq!(status, StatusCode::OK);
    let spots = body.as_array().unwrap();
    assert_eq!(spots.len(), 2);
    assert_eq!(spots[0]["id"], "sahara-douz");
    assert_eq!(spots[0]["name"], "Camp du Désert du Sahara - Douz");
}

#[tokio::test]
async fn test_unknown_spot_is_404() {
    let (status, body) = get("/api/spots/atlantis").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("atlantis"));
}

#[tokio::test]
async fn test_plan_for_coastal_spot() {
    let (status, body) = get("/api/spots/hammamet-beach/plan?days=6&group_size=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["group_size"], 3);
    assert_eq!(body["forecast"]["days"].as_array().unwrap().len(), 6);

    let names: Vec<String> = body["packing"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|group| group[1].as_array().unwrap().clone())
        .map(|item| item["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names.iter().filter(|n| *n == "Waterproof bags").count(), 1);
}

#[tokio::test]
async fn test_plan_rejects_too_long_forecast() {
    let (status, _) = get("/api/spots/sahara-douz/plan?days=30").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_search_gear() {
    let (status, body) = get("/api/gear?category=tents&max_price=30").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["gear-3"]);
}

#[tokio::test]
async fn test_quote_endpoint() {
    let (status, body) = post(
        "/api/gear/gear-3/quote",
        json!({
            "start_date": "2025-03-01",
            "end_date": "2025-03-08",
            "delivery": {"method": "delivery", "address": "Sousse"}
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let costs: CostBreakdown = serde_json::from_value(body).unwrap();
    assert_eq!(costs.days, 8);
    // eight days bill two started weeks
    assert_eq!(costs.subtotal, Decimal::from(300));
    assert_eq!(costs.total, Decimal::from(420));
}

#[tokio::test]
async fn test_quote_requires_both_dates() {
    let (status, body) = post(
        "/api/gear/gear-3/quote",
        json!({
            "start_date": "2025-03-01",
            "end_date": null,
            "delivery": {"method": "pickup", "location": "Hammamet"}
        }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("complete"));
}

#[tokio::test]
async fn test_quote_rejects_reversed_range() {
    let (status, _) = post(
        "/api/gear/gear-3/quote",
        json!({
            "start_date": "2025-03-05",
            "end_date": "2025-03-01",
            "delivery": {"method": "pickup", "location": "Hammamet"}
        }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_booking() {
    let start = Utc::now().date_naive() + Duration::days(10);
    let (status, body) = post(
        "/api/bookings",
        json!({
            "gear_id": "gear-2",
            "start_date": start,
            "end_date": start + Duration::days(2),
            "delivery": {"method": "pickup", "location": "Tabarka"},
            "notes": "Two hikers",
            "agree_to_terms": true
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "pending");
    assert_eq!(body["gear_name"], "4-Season Mountain Tent");
    assert_eq!(body["costs"]["days"], 3);
}

#[tokio::test]
async fn test_booking_without_terms_is_rejected() {
    let start = Utc::now().date_naive() + Duration::days(10);
    let (status, _) = post(
        "/api/bookings",
        json!({
            "gear_id": "gear-2",
            "start_date": start,
            "end_date": start,
            "delivery": {"method": "pickup", "location": "Tabarka"}
        }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_static_provider_plugs_into_api() {
    let day = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
    let provider = StaticWeatherProvider::new(vec![DailyWeather::new(day, 28.0, 41.0, 0.0)]);
    let state = AppState::new(Box::new(provider), 1);
    let response = web::app(state, &TuniCampConfig::default())
        .oneshot(
            Request::get("/api/spots/kroumirie-mountains/plan")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    let text = body["packing"].to_string();
    assert!(text.contains("Extra water bottles"));
    assert!(!text.contains("Extra warm layers"));
}

#[tokio::test]
async fn test_list_spots_by_difficulty() {
    let (status, body) = get("/api/spots?difficulty=challenging").await;
    assert_eq!(status, StatusCode::OK);
    let spots = body.as_array().unwrap();
    assert_eq!(spots.len(), 1);
    assert_eq!(spots[0]["id"], "chaambi-peak");

    let (status, body) = get("/api/spots?difficulty=extreme").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("extreme"));
}

#[tokio::test]
async fn test_spot_reviews() {
    let (status, body) = get("/api/spots/sahara-douz/reviews").await;
    assert_eq!(status, StatusCode::OK);
    let reviews = body.as_array().unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["rating"], 5);
    assert_eq!(reviews[0]["author"]["name"], "Ahmed Ben Ali");

    let (status, body) = get("/api/spots/hammamet-beach/reviews").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());

    let (status, _) = get("/api/spots/atlantis/reviews").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = get("/api/community/reviews").await;
    assert_eq!(body.as_array().unwrap().len(), 3);

    let (_, body) = get("/api/spots?category=forest").await;
    assert_eq!(body[0]["community_rating"], 4.0);
    let (_, body) = get("/api/spots?category=beach").await;
    let hammamet = body
        .as_array()
        .unwrap()
        .iter()
        .find(|spot| spot["id"] == "hammamet-beach")
        .unwrap();
    assert_eq!(hammamet["community_rating"], Value::Null);
}

#[tokio::test]
async fn test_spot_safety_briefing() {
    let (status, body) = get("/api/spots/sahara-douz/safety").await;
    assert_eq!(status, StatusCode::OK);
    let phones: Vec<&str> = body["contacts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["phone"].as_str().unwrap())
        .collect();
    assert_eq!(phones, vec!["197", "190", "198", "+216 75 470 351"]);
    assert_eq!(body["tips"][0]["category"], "desert");
    assert_eq!(body["regulations"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_community_discussions() {
    let (_, body) = get("/api/community/discussions").await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (_, body) = get("/api/community/discussions?region=North").await;
    assert_eq!(body[0]["category"], "meetup");
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (_, body) = get("/api/community/discussions?category=tips").await;
    assert_eq!(body[0]["id"], "thread-1");

    // both filters apply together
    let (_, body) = get("/api/community/discussions?region=North&category=tips").await;
    assert!(body.as_array().unwrap().is_empty());

    let (status, _) = get("/api/community/discussions?category=rumours").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_photo_feed() {
    let (status, body) = get("/api/community/photos").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["id"], "photo-2");
    assert_eq!(body[1]["comments"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_safety_hub() {
    let (_, body) = get("/api/safety/contacts").await;
    assert_eq!(body.as_array().unwrap().len(), 6);

    let (_, body) = get("/api/safety/contacts?region=Kasserine").await;
    let contacts = body.as_array().unwrap();
    assert_eq!(contacts.len(), 4);
    assert_eq!(contacts[3]["type"], "rescue");

    let (_, body) = get("/api/safety/tips?category=beach").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["title"]["fr"], "Précautions faune sauvage");

    let (_, body) = get("/api/safety/regulations").await;
    assert_eq!(body[0]["permit_required"], true);

    let (_, body) = get("/api/safety/eco-tips").await;
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_list_providers() {
    let (status, body) = get("/api/providers").await;
    assert_eq!(status, StatusCode::OK);
    let providers = body.as_array().unwrap();
    assert_eq!(providers.len(), 3);
    assert_eq!(providers[2]["id"], "provider-3");
}

#[tokio::test]
async fn test_booking_lifecycle() {
    let app = app();
    let start = Utc::now().date_naive() + Duration::days(10);
    let (status, body) = send_to(
        &app,
        json_request(
            "POST",
            "/api/bookings",
            json!({
                "gear_id": "gear-2",
                "start_date": start,
                "end_date": start + Duration::days(2),
                "delivery": {"method": "pickup", "location": "Tabarka"},
                "agree_to_terms": true
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["booking_id"].as_str().unwrap().to_string();

    let (status, body) = send_to(&app, empty_request("GET", &format!("/api/bookings/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "pending");

    let (_, body) = send_to(&app, empty_request("POST", &format!("/api/bookings/{id}/accept"))).await;
    assert_eq!(body["status"], "confirmed");

    let (_, body) = send_to(&app, empty_request("POST", &format!("/api/bookings/{id}/cancel"))).await;
    assert_eq!(body["status"], "cancelled");

    let (status, _) = send_to(&app, empty_request("POST", &format!("/api/bookings/{id}/accept"))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send_to(&app, empty_request("GET", "/api/bookings/booking-99")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_profile_privacy_and_trips() {
    let app = app();
    let (status, body) = send_to(&app, empty_request("GET", "/api/profile")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], Value::Null);
    assert_eq!(body["stats"]["trips_completed"], 2);

    let start = Utc::now().date_naive() + Duration::days(5);
    let (status, body) = send_to(
        &app,
        json_request(
            "POST",
            "/api/profile/trips",
            json!({
                "spot_id": "tozeur-oasis",
                "start_date": start,
                "end_date": start + Duration::days(2),
                "group_size": 3
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], "trip-4");

    let (_, body) = send_to(&app, empty_request("GET", "/api/profile/trips?upcoming=true")).await;
    let upcoming = body.as_array().unwrap();
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0]["spot_id"], "tozeur-oasis");

    let (_, mut preferences) = send_to(&app, empty_request("GET", "/api/profile/preferences")).await;
    preferences["privacy"]["show_email"] = json!(true);
    let (status, _) = send_to(&app, json_request("PUT", "/api/profile/preferences", preferences)).await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = send_to(&app, empty_request("GET", "/api/profile")).await;
    assert_eq!(body["email"], "ahmed@example.com");
}

#[tokio::test]
async fn test_profile_favorites() {
    let app = app();
    let (status, body) = send_to(&app, empty_request("PUT", "/api/profile/favorites/chaambi-peak")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["region"], "Kasserine");

    let (_, body) = send_to(&app, empty_request("GET", "/api/profile/favorites")).await;
    assert_eq!(body.as_array().unwrap().len(), 4);

    let (status, _) = send_to(&app, empty_request("DELETE", "/api/profile/favorites/chaambi-peak")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send_to(&app, empty_request("DELETE", "/api/profile/favorites/chaambi-peak")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send_to(&app, empty_request("PUT", "/api/profile/favorites/atlantis")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
