//! HTTP API module for the compensation engine.
//!
//! This module provides the REST endpoint computing monthly salary
//! statements for the representatives of a loaded roster.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::SalaryRequest;
pub use response::{ApiError, SalaryStatement};
pub use state::AppState;
