//! Rental cost calculation
//!
//! Turns a booking's date range, the item's price schedule and the chosen
//! fulfillment into a [`CostBreakdown`]. Rentals of a week or longer bill
//! every started week at the weekly rate.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Result, TuniCampError};

/// Rentals of at least this many days use the weekly rate
pub const WEEKLY_RATE_THRESHOLD_DAYS: u32 = 7;

/// Price schedule of a rentable item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalPricing {
    pub price_per_day: Decimal,
    pub price_per_week: Decimal,
    pub deposit_required: Decimal,
    /// Present only when the provider offers delivery
    pub delivery_fee: Option<Decimal>,
}

impl RentalPricing {
    /// Build a validated price schedule
    pub fn new(
        price_per_day: Decimal,
        price_per_week: Decimal,
        deposit_required: Decimal,
        delivery_fee: Option<Decimal>,
    ) -> Result<Self> {
        if price_per_day <= Decimal::ZERO {
            return Err(TuniCampError::validation("Daily price must be positive"));
        }
        if price_per_week <= Decimal::ZERO {
            return Err(TuniCampError::validation("Weekly price must be positive"));
        }
        if deposit_required < Decimal::ZERO {
            return Err(TuniCampError::validation("Deposit cannot be negative"));
        }
        if delivery_fee.is_some_and(|fee| fee < Decimal::ZERO) {
            return Err(TuniCampError::validation("Delivery fee cannot be negative"));
        }
        Ok(Self {
            price_per_day,
            price_per_week,
            deposit_required,
            delivery_fee,
        })
    }

    /// Rental charge for a number of days, before delivery and deposit
    pub fn subtotal(&self, days: u32) -> Result<Decimal> {
        let charge = if days >= WEEKLY_RATE_THRESHOLD_DAYS {
            let weeks = days.div_ceil(WEEKLY_RATE_THRESHOLD_DAYS);
            Decimal::from(weeks).checked_mul(self.price_per_week)
        } else {
            Decimal::from(days).checked_mul(self.price_per_day)
        };
        charge.ok_or_else(overflow)
    }
}

/// Inclusive calendar date range of a rental
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        let range = Self { start, end };
        range.rental_days()?;
        Ok(range)
    }

    /// Build a range from possibly unselected dates
    pub fn from_selection(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Self> {
        match (start, end) {
            (Some(start), Some(end)) => Self::new(start, end),
            (None, _) => Err(TuniCampError::incomplete("no start date selected")),
            (Some(_), None) => Err(TuniCampError::incomplete("no end date selected")),
        }
    }

    /// Number of rental days, counting both endpoints
    pub fn rental_days(&self) -> Result<u32> {
        let between = (self.end - self.start).num_days();
        if between < 0 {
            return Err(TuniCampError::InvalidRange {
                start: self.start,
                end: self.end,
            });
        }
        u32::try_from(between + 1)
            .map_err(|_| TuniCampError::validation("Rental period is too long"))
    }

    /// Whether `date` falls within the range
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// How the renter receives the gear
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum DeliveryChoice {
    /// Collect at one of the provider's pickup locations
    Pickup { location: String },
    /// Delivered to an address for the item's delivery fee
    Delivery { address: String },
}

impl DeliveryChoice {
    #[must_use]
    pub fn is_delivery(&self) -> bool {
        matches!(self, DeliveryChoice::Delivery { .. })
    }

    /// Check the choice against the provider's pickup locations
    pub fn validate(&self, pickup_locations: &[String]) -> Result<()> {
        match self {
            DeliveryChoice::Pickup { location } => {
                if pickup_locations.iter().any(|l| l == location) {
                    Ok(())
                } else if location.trim().is_empty() {
                    Err(TuniCampError::validation("Choose a pickup location"))
                } else {
                    Err(TuniCampError::validation(format!(
                        "Unknown pickup location '{location}'. Must be one of: {}",
                        pickup_locations.join(", ")
                    )))
                }
            }
            DeliveryChoice::Delivery { address } => {
                if address.trim().is_empty() {
                    Err(TuniCampError::validation("Delivery address cannot be empty"))
                } else {
                    Ok(())
                }
            }
        }
    }
}

/// Itemized cost of a rental
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub days: u32,
    pub subtotal: Decimal,
    pub delivery_fee: Decimal,
    pub deposit: Decimal,
    pub total: Decimal,
}

/// Compute the cost of renting an item over `range`
///
/// A missing range means the dates have not been picked yet and yields
/// [`TuniCampError::IncompleteInput`], never a zero-cost breakdown.
pub fn compute_cost(
    range: Option<&DateRange>,
    pricing: &RentalPricing,
    delivery: &DeliveryChoice,
) -> Result<CostBreakdown> {
    let range = range.ok_or_else(|| TuniCampError::incomplete("rental dates not selected"))?;
    let days = range.rental_days()?;

    let subtotal = pricing.subtotal(days)?;
    let delivery_fee = if delivery.is_delivery() {
        pricing.delivery_fee.unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };
    let deposit = pricing.deposit_required;
    let total = subtotal
        .checked_add(delivery_fee)
        .and_then(|sum| sum.checked_add(deposit))
        .ok_or_else(overflow)?;

    Ok(CostBreakdown {
        days,
        subtotal,
        delivery_fee,
        deposit,
        total,
    })
}

fn overflow() -> TuniCampError {
    TuniCampError::validation("Rental cost overflows")
}
