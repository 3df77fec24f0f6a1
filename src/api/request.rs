//! Request types for the compensation API.
//!
//! This module defines the JSON request structure for the `/salary` endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request body for the `/salary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRequest {
    /// The roster id of the representative.
    pub representative_id: u32,
    /// Zero-based month index (0 = January).
    pub month: i32,
    /// Commission rate; the roster's default rate is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commission_rate: Option<Decimal>,
}
