//! HTTP API module for the Leave and Tax Rules Engine.
//!
//! This module provides the REST API endpoints for validating leave
//! requests and calendar entries and for computing tax liability.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalendarEntryRequest, LeaveValidationRequest, TaxCalculationRequest};
pub use response::{ApiError, LeaveValidationResponse};
pub use state::AppState;
