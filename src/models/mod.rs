//! Data models shared across the `TuniCamp` modules
//!
//! - Location: Geographic coordinates and metadata
//! - Locale: Display language selection and localized strings

pub mod locale;
pub mod location;

use chrono::NaiveDate;

pub use locale::{Locale, LocalizedText};
pub use location::Location;

/// Calendar date for static catalogs; call inside `const { }` so a bad
/// date fails the build
pub(crate) const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid calendar date in catalog"),
    }
}
