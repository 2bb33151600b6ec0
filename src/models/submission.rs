//! Outbound leave submission payload.
//!
//! A validated request is assembled into this payload for the external
//! submission endpoint. The engine only constructs the payload; dispatching
//! it is the caller's business.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{LeaveRequest, LeaveType};

/// The payload accepted by the external leave submission endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveSubmission {
    /// The kind of leave being submitted.
    pub leave_type: LeaveType,
    /// The first day of the leave.
    pub start_date: NaiveDate,
    /// The last day of the leave, when a range was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// The validated day charge.
    pub total_days: Decimal,
    /// Free-text justification.
    pub reason: String,
    /// The approver this request is routed to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approver_id: Option<String>,
    /// The shift the employee is rostered on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift: Option<String>,
    /// Reference to the uploaded supporting file, when one was attached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_ref: Option<String>,
}

impl LeaveSubmission {
    /// Assembles the payload from a request and its validated day charge.
    pub fn assemble(
        request: &LeaveRequest,
        total_days: Decimal,
        approver_id: Option<String>,
        shift: Option<String>,
    ) -> Self {
        Self {
            leave_type: request.leave_type,
            start_date: request.start_date,
            end_date: request.end_date,
            total_days,
            reason: request.reason.clone(),
            approver_id,
            shift,
            attachment_ref: request.attachment_ref.clone(),
        }
    }
}
