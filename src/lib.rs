//! Monthly compensation engine for sales representatives.
//!
//! This crate models geographic zones and the sales representatives assigned
//! to them, and computes a representative's monthly salary from a fixed base,
//! the zone's meal allowance, and a commission on recorded monthly revenue.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
