//! Gear rental
//!
//! - Pricing: rental cost calculation from dates, price schedule and fulfillment
//! - Catalog: rentable gear, providers and search
//! - Booking: request validation and confirmation

pub mod booking;
pub mod catalog;
pub mod pricing;

pub use booking::{BookingConfirmation, BookingRequest, BookingService, BookingStatus};
pub use catalog::{GearCategory, GearFilter, GearItem, GearProvider, search_gear};
pub use pricing::{CostBreakdown, DateRange, DeliveryChoice, RentalPricing, compute_cost};
