//! Core data models for the compensation engine.
//!
//! This module contains the domain types: zones, representatives, and the
//! itemised salary they produce.

mod month;
mod representative;
mod salary;
mod zone;

pub use month::{MONTHS_PER_YEAR, month_index, month_name};
pub use representative::Representative;
pub use salary::SalaryBreakdown;
pub use zone::GeographicZone;
