//! Leave request model and related types.
//!
//! This module defines the leave taxonomy, the half-day selector, the
//! ephemeral [`LeaveRequest`] built at submission time, and the
//! [`LeaveDecision`] the validator hands back.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The kinds of leave an employee can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Casual leave, bookable for the near future within the current month.
    Casual,
    /// Medical leave, claimed retroactively with a supporting attachment.
    Medical,
    /// Earned (privilege) leave accrued over service.
    Earned,
    /// Compensatory time off granted for extra hours worked.
    CompOff,
    /// Optional holiday chosen from the employer's restricted-holiday list.
    Optional,
    /// Off-site vendor meeting recorded through the attendance calendar.
    VendorMeeting,
    /// Attendance regularization for a day marked absent.
    Regularized,
    /// A short absence of a few hours within a working day.
    ShortLeave,
}

impl LeaveType {
    /// Returns the wire/config code for this leave type.
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Casual => "casual",
            LeaveType::Medical => "medical",
            LeaveType::Earned => "earned",
            LeaveType::CompOff => "comp_off",
            LeaveType::Optional => "optional",
            LeaveType::VendorMeeting => "vendor_meeting",
            LeaveType::Regularized => "regularized",
            LeaveType::ShortLeave => "short_leave",
        }
    }

    /// Returns true if this type is recorded through the attendance calendar
    /// flow rather than the leave request validator.
    pub fn is_calendar_flow(&self) -> bool {
        matches!(
            self,
            LeaveType::VendorMeeting | LeaveType::Regularized | LeaveType::ShortLeave
        )
    }
}

/// The half-day selector on a leave request form.
///
/// Selecting a half or full day forces the charged days and bypasses the
/// date-window and duration checks; only `None` lets the date range drive
/// the computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HalfDaySelection {
    /// No half-day choice; the date range determines the charged days.
    #[default]
    None,
    /// The first half of a single working day.
    FirstHalf,
    /// The second half of a single working day.
    SecondHalf,
    /// A single full working day.
    FullDay,
}

impl HalfDaySelection {
    /// Returns the forced day charge for this selection, if any.
    ///
    /// `FirstHalf` and `SecondHalf` force 0.5 days, `FullDay` forces 1 day,
    /// and `None` leaves the charge to the date range.
    pub fn forced_days(&self) -> Option<Decimal> {
        match self {
            HalfDaySelection::None => None,
            HalfDaySelection::FirstHalf | HalfDaySelection::SecondHalf => Some(Decimal::new(5, 1)),
            HalfDaySelection::FullDay => Some(Decimal::ONE),
        }
    }
}

/// A leave request as submitted by an employee.
///
/// The request is ephemeral: it is built from form input, validated, turned
/// into a [`crate::models::LeaveSubmission`] payload and discarded. The
/// charged day count is always derived by the validator, never carried on
/// the request itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// The kind of leave being requested.
    pub leave_type: LeaveType,
    /// The first day of the requested leave.
    pub start_date: NaiveDate,
    /// The last day of the requested leave. Ignored when absent or earlier
    /// than the start date.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// The half-day selector.
    #[serde(default)]
    pub half_day: HalfDaySelection,
    /// Free-text justification, required non-empty at submission.
    pub reason: String,
    /// Reference to an uploaded supporting file. Required for medical leave.
    #[serde(default)]
    pub attachment_ref: Option<String>,
}

/// The outcome of validating a leave request or calendar entry.
///
/// Rejections are expected, user-facing outcomes and travel as data; they
/// are never raised as [`crate::error::EngineError`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LeaveDecision {
    /// The request is permissible; `total_days` is the derived day charge.
    Accepted {
        /// The number of days charged, always a multiple of 0.5.
        total_days: Decimal,
    },
    /// The request is not permissible.
    Rejected {
        /// A human-readable reason suitable for inline display.
        reason: String,
    },
}

impl LeaveDecision {
    /// Creates an accepted decision charging the given days.
    pub fn accepted(total_days: Decimal) -> Self {
        LeaveDecision::Accepted { total_days }
    }

    /// Creates a rejected decision with the given reason.
    pub fn rejected(reason: impl Into<String>) -> Self {
        LeaveDecision::Rejected {
            reason: reason.into(),
        }
    }

    /// Returns true for an accepted decision.
    pub fn is_accepted(&self) -> bool {
        matches!(self, LeaveDecision::Accepted { .. })
    }

    /// Returns the charged days for an accepted decision.
    pub fn total_days(&self) -> Option<Decimal> {
        match self {
            LeaveDecision::Accepted { total_days } => Some(*total_days),
            LeaveDecision::Rejected { .. } => None,
        }
    }

    /// Returns the rejection reason, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            LeaveDecision::Accepted { .. } => None,
            LeaveDecision::Rejected { reason } => Some(reason),
        }
    }
}
