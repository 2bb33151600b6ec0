//! HTTP request handlers for the Leave and Tax Rules Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_tax, validate_calendar_entry, validate_leave};
use crate::models::{LeaveSubmission, TaxInput};

use super::request::{CalendarEntryRequest, LeaveValidationRequest, TaxCalculationRequest};
use super::response::{ApiError, ApiErrorResponse, LeaveValidationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/leave/validate", post(validate_leave_handler))
        .route("/calendar/validate", post(validate_calendar_handler))
        .route("/tax/calculate", post(calculate_tax_handler))
        .with_state(state)
}

/// Maps a JSON extraction failure to a structured API error.
fn rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
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
    }
}

fn bad_request(error: ApiError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn ok_json<T: serde::Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Handler for POST /leave/validate.
///
/// Validates a leave request against the eligibility rules and, when the
/// request is permissible, assembles the submission payload for the
/// external leave endpoint.
async fn validate_leave_handler(
    payload: Result<Json<LeaveValidationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing leave validation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(rejection, correlation_id)),
    };

    let today = request.today.unwrap_or_else(|| Utc::now().date_naive());

    // Malformed dates are normalized into rejections, not errors
    let domain = match request.resolve() {
        Ok(domain) => domain,
        Err(decision) => {
            warn!(
                correlation_id = %correlation_id,
                reason = decision.reason().unwrap_or_default(),
                "Leave request rejected before validation"
            );
            return ok_json(LeaveValidationResponse::from_decision(decision, None));
        }
    };

    match validate_leave(&domain, &request.balance, today) {
        Ok(decision) => {
            info!(
                correlation_id = %correlation_id,
                leave_type = domain.leave_type.as_str(),
                accepted = decision.is_accepted(),
                "Leave validation completed"
            );
            let submission = decision.total_days().map(|total_days| {
                LeaveSubmission::assemble(
                    &domain,
                    total_days,
                    request.approver_id.clone(),
                    request.shift.clone(),
                )
            });
            ok_json(LeaveValidationResponse::from_decision(decision, submission))
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Leave validation failed"
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

/// Handler for POST /calendar/validate.
///
/// Validates a short-leave, regularization or vendor-meeting entry
/// recorded through the attendance calendar.
async fn validate_calendar_handler(
    payload: Result<Json<CalendarEntryRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calendar entry validation");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(rejection, correlation_id)),
    };

    let today = request.today.unwrap_or_else(|| Utc::now().date_naive());

    let date = match request.resolve_date() {
        Ok(date) => date,
        Err(decision) => {
            return ok_json(LeaveValidationResponse::from_decision(decision, None));
        }
    };

    match validate_calendar_entry(request.leave_type, date, today) {
        Ok(decision) => {
            info!(
                correlation_id = %correlation_id,
                leave_type = request.leave_type.as_str(),
                accepted = decision.is_accepted(),
                "Calendar entry validation completed"
            );
            ok_json(LeaveValidationResponse::from_decision(decision, None))
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calendar entry validation failed"
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

/// Handler for POST /tax/calculate.
///
/// Computes tax liability under the requested regime's loaded table.
async fn calculate_tax_handler(
    State(state): State<AppState>,
    payload: Result<Json<TaxCalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing tax calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(rejection, correlation_id)),
    };

    let input: TaxInput = request.into();

    match compute_tax(&input, state.config().ruleset()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                regime = input.regime.as_code(),
                total_tax = %result.total_tax,
                "Tax calculation completed"
            );
            ok_json(result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Tax calculation failed"
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
