//! Response types for the Leave and Tax Rules Engine API.
//!
//! This module defines the validation response body and the error response
//! structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{LeaveDecision, LeaveSubmission};

/// Response body for the leave and calendar validation endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveValidationResponse {
    /// Whether the request is permissible.
    pub ok: bool,
    /// The derived day charge, present when `ok` is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_days: Option<Decimal>,
    /// The rejection reason, present when `ok` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// The assembled submission payload, present when `ok` is true and the
    /// caller asked for a leave submission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission: Option<LeaveSubmission>,
}

impl LeaveValidationResponse {
    /// Builds the response body from a decision and an optional payload.
    pub fn from_decision(decision: LeaveDecision, submission: Option<LeaveSubmission>) -> Self {
        match decision {
            LeaveDecision::Accepted { total_days } => Self {
                ok: true,
                total_days: Some(total_days),
                reason: None,
                submission,
            },
            LeaveDecision::Rejected { reason } => Self {
                ok: false,
                total_days: None,
                reason: Some(reason),
                submission: None,
            },
        }
    }
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

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::RegimeNotFound { regime } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "REGIME_NOT_FOUND",
                    format!("No tax regime table loaded for '{}'", regime),
                    "The regime is recognized but its slab table is not configured",
                ),
            },
            EngineError::LeaveRuleNotFound { leave_type } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNSUPPORTED_LEAVE_TYPE",
                    format!("Leave type '{}' is not handled by this endpoint", leave_type),
                    "Calendar-flow types are validated through /calendar/validate",
                ),
            },
            EngineError::CalendarRuleNotFound { leave_type } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNSUPPORTED_LEAVE_TYPE",
                    format!("Leave type '{}' is not a calendar entry type", leave_type),
                    "Request-flow types are validated through /leave/validate",
                ),
            },
            EngineError::InvalidAmount { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_AMOUNT",
                    format!("Invalid amount for '{}'", field),
                    message,
                ),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}
