//! HTTP request handlers for the compensation API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::ConfigLoader;
use crate::error::PayrollResult;

use super::request::SalaryRequest;
use super::response::{ApiError, ApiErrorResponse, SalaryStatement};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/salary", post(salary_handler))
        .with_state(state)
}

/// Handler for POST /salary endpoint.
///
/// Computes the monthly salary statement of a roster representative.
async fn salary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let start_time = Instant::now();
    match build_statement(state.roster(), &request) {
        Ok(statement) => {
            info!(
                correlation_id = %correlation_id,
                representative_id = request.representative_id,
                month = request.month,
                total = %statement.breakdown.total,
                duration_us = start_time.elapsed().as_micros(),
                "Salary computed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(statement),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                representative_id = request.representative_id,
                error = %err,
                "Salary computation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Looks up the representative and itemises their salary for the month.
fn build_statement(
    roster: &ConfigLoader,
    request: &SalaryRequest,
) -> PayrollResult<SalaryStatement> {
    let rep = roster.representative(request.representative_id)?;
    let commission_rate = request
        .commission_rate
        .unwrap_or(roster.policy().default_commission_rate);
    let breakdown = rep.salary_breakdown(request.month, commission_rate)?;

    Ok(SalaryStatement {
        statement_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        representative: rep.to_string(),
        zone: rep.zone().to_string(),
        breakdown,
    })
}
