//! Time conversions for the kundli calculation engine.
//!
//! This crate provides:
//! - Calendar instant ↔ Julian Day conversion
//! - Greenwich Mean Sidereal Time and Local Sidereal Time
//!
//! All functions are pure and total for finite inputs; identical inputs
//! always produce identical outputs.

pub mod error;
pub mod julian;
pub mod sidereal;

pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, MS_PER_DAY, UNIX_EPOCH_JD, jd_to_datetime, julian_centuries,
    julian_day, parse_datetime,
};
pub use sidereal::{gmst_hours, local_sidereal_hours};
