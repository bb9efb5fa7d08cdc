//! Booking confirmation for gear rentals

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::catalog::{GearItem, gear_by_id};
use super::pricing::{CostBreakdown, DateRange, DeliveryChoice, compute_cost};
use crate::{Result, TuniCampError};

/// Lifecycle of a booking
///
/// `Pending` until the provider accepts it, then `Confirmed`. A confirmed
/// booking reads as `Active` while its dates are running and `Completed`
/// afterwards. Only bookings that have not started can be `Cancelled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Active,
    Completed,
    Cancelled,
}

/// What the booking form submits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub gear_id: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub delivery: DeliveryChoice,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub agree_to_terms: bool,
}

/// Outcome of an accepted booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub booking_id: String,
    pub gear_id: String,
    pub gear_name: String,
    pub status: BookingStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub delivery: DeliveryChoice,
    pub costs: CostBreakdown,
    pub notes: String,
}

impl BookingConfirmation {
    /// Status as of `today`, advancing confirmed bookings through their dates
    #[must_use]
    pub fn status_on(&self, today: NaiveDate) -> BookingStatus {
        let range = DateRange {
            start: self.start_date,
            end: self.end_date,
        };
        match self.status {
            BookingStatus::Confirmed if range.contains(today) => BookingStatus::Active,
            BookingStatus::Confirmed if today > range.end => BookingStatus::Completed,
            status => status,
        }
    }
}

/// Validates booking requests against the gear catalog and keeps the
/// accepted bookings for the lifetime of the service
#[derive(Debug, Default)]
pub struct BookingService {
    next_id: AtomicU64,
    bookings: RwLock<HashMap<String, BookingConfirmation>>,
}

impl BookingService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cost quote for a request without booking it
    pub fn quote(&self, request: &BookingRequest) -> Result<CostBreakdown> {
        let item = find_item(&request.gear_id)?;
        let range = DateRange::from_selection(request.start_date, request.end_date)?;
        compute_cost(Some(&range), &item.pricing(), &request.delivery)
    }

    /// Validate a request and turn it into a pending booking
    ///
    /// `today` is the earliest allowed start date.
    #[tracing::instrument(name = "confirm_booking", skip(self, request), fields(gear_id = %request.gear_id))]
    pub fn confirm(&self, request: BookingRequest, today: NaiveDate) -> Result<BookingConfirmation> {
        let item = find_item(&request.gear_id)?;
        let range = DateRange::from_selection(request.start_date, request.end_date)?;

        if !request.agree_to_terms {
            return Err(TuniCampError::validation(
                "The rental terms must be accepted",
            ));
        }
        if range.start < today {
            return Err(TuniCampError::validation(format!(
                "Start date {} is in the past",
                range.start
            )));
        }
        check_availability(item, &range, &request.delivery)?;

        let costs = compute_cost(Some(&range), &item.pricing(), &request.delivery)?;
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::info!(booking_id = id, total = %costs.total, "Booking accepted");

        let confirmation = BookingConfirmation {
            booking_id: format!("booking-{id}"),
            gear_id: item.id.clone(),
            gear_name: item.name.clone(),
            status: BookingStatus::Pending,
            start_date: range.start,
            end_date: range.end,
            delivery: request.delivery,
            costs,
            notes: request.notes,
        };
        self.bookings
            .write()
            .map_err(|_| poisoned())?
            .insert(confirmation.booking_id.clone(), confirmation.clone());
        Ok(confirmation)
    }

    /// A stored booking with its status as of `today`
    pub fn get(&self, booking_id: &str, today: NaiveDate) -> Result<BookingConfirmation> {
        let bookings = self.bookings.read().map_err(|_| poisoned())?;
        let mut booking = bookings
            .get(booking_id)
            .cloned()
            .ok_or_else(|| TuniCampError::not_found("Booking", booking_id))?;
        booking.status = booking.status_on(today);
        Ok(booking)
    }

    /// Provider acceptance of a pending booking
    #[tracing::instrument(skip(self))]
    pub fn accept(&self, booking_id: &str, today: NaiveDate) -> Result<BookingConfirmation> {
        self.transition(booking_id, today, |status| match status {
            BookingStatus::Pending => Ok(BookingStatus::Confirmed),
            other => Err(TuniCampError::validation(format!(
                "Only pending bookings can be accepted, this one is {other:?}"
            ))),
        })
    }

    /// Cancel a booking that has not started yet
    #[tracing::instrument(skip(self))]
    pub fn cancel(&self, booking_id: &str, today: NaiveDate) -> Result<BookingConfirmation> {
        self.transition(booking_id, today, |status| match status {
            BookingStatus::Pending | BookingStatus::Confirmed => Ok(BookingStatus::Cancelled),
            other => Err(TuniCampError::validation(format!(
                "A booking that is {other:?} cannot be cancelled"
            ))),
        })
    }

    fn transition(
        &self,
        booking_id: &str,
        today: NaiveDate,
        next: impl FnOnce(BookingStatus) -> Result<BookingStatus>,
    ) -> Result<BookingConfirmation> {
        let mut bookings = self.bookings.write().map_err(|_| poisoned())?;
        let booking = bookings
            .get_mut(booking_id)
            .ok_or_else(|| TuniCampError::not_found("Booking", booking_id))?;
        booking.status = next(booking.status_on(today))?;
        tracing::info!(status = ?booking.status, "Booking updated");

        let mut current = booking.clone();
        current.status = current.status_on(today);
        Ok(current)
    }
}

fn poisoned() -> TuniCampError {
    TuniCampError::storage("booking ledger is poisoned")
}

fn find_item(gear_id: &str) -> Result<&'static GearItem> {
    gear_by_id(gear_id).ok_or_else(|| TuniCampError::not_found("Gear item", gear_id))
}

fn check_availability(item: &GearItem, range: &DateRange, delivery: &DeliveryChoice) -> Result<()> {
    if !item.available {
        return Err(TuniCampError::validation(format!(
            "'{}' is not available for rent",
            item.name
        )));
    }

    let days = range.rental_days()?;
    if days < item.min_rental_days || days > item.max_rental_days {
        return Err(TuniCampError::validation(format!(
            "'{}' can be rented for {} to {} days, requested {days}",
            item.name, item.min_rental_days, item.max_rental_days
        )));
    }

    if delivery.is_delivery() && !item.delivery_available {
        return Err(TuniCampError::validation(format!(
            "'{}' cannot be delivered",
            item.name
        )));
    }
    delivery.validate(&item.pickup_locations)
}
