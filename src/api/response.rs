//! Response types for the compensation API.
//!
//! This module defines the salary statement returned on success, the error
//! body returned on failure, and the mapping from [`PayrollError`] to HTTP
//! status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::PayrollError;
use crate::models::SalaryBreakdown;

/// Successful response of the `/salary` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryStatement {
    /// Unique identifier for this statement.
    pub statement_id: Uuid,
    /// When the statement was produced.
    pub generated_at: DateTime<Utc>,
    /// Textual form of the representative.
    pub representative: String,
    /// Textual form of the representative's zone.
    pub zone: String,
    /// The itemised salary.
    pub breakdown: SalaryBreakdown,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<PayrollError> for ApiErrorResponse {
    fn from(error: PayrollError) -> Self {
        let message = error.to_string();
        match error {
            PayrollError::InvalidMonth { .. }
            | PayrollError::NegativeRevenue { .. }
            | PayrollError::NegativeCommissionRate { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_ARGUMENT", message),
            },
            PayrollError::SalaryOverflow { .. } | PayrollError::AnnualRevenueOverflow => {
                ApiErrorResponse {
                    status: StatusCode::UNPROCESSABLE_ENTITY,
                    error: ApiError::new("AMOUNT_OVERFLOW", message),
                }
            }
            PayrollError::RepresentativeNotFound { .. } | PayrollError::ZoneNotFound { .. } => {
                ApiErrorResponse {
                    status: StatusCode::NOT_FOUND,
                    error: ApiError::new("NOT_FOUND", message),
                }
            }
            PayrollError::ConfigNotFound { .. }
            | PayrollError::ConfigParseError { .. }
            | PayrollError::InvalidRoster { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
        }
    }
}
