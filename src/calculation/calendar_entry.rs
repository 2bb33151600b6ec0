//! Attendance calendar entry validation.
//!
//! Short leave, regularization and vendor meetings are recorded against a
//! single past day through the attendance calendar rather than the leave
//! request form. Their day charge is fixed per type; the only checks are
//! that the day falls in the current calendar month and is not in the
//! future.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{LeaveDecision, LeaveType};

use super::date_math::month_range;

/// Returns the fixed day charge for a calendar-flow leave type.
pub fn calendar_day_charge(leave_type: LeaveType) -> Option<Decimal> {
    match leave_type {
        LeaveType::ShortLeave => Some(Decimal::new(5, 1)),
        LeaveType::Regularized | LeaveType::VendorMeeting => Some(Decimal::ONE),
        _ => None,
    }
}

/// Validates a calendar entry for `date` as of `today`.
///
/// # Errors
///
/// Returns [`EngineError::CalendarRuleNotFound`] when the leave type is not
/// one of the calendar-flow types.
pub fn validate_calendar_entry(
    leave_type: LeaveType,
    date: NaiveDate,
    today: NaiveDate,
) -> EngineResult<LeaveDecision> {
    let charge = calendar_day_charge(leave_type).ok_or_else(|| EngineError::CalendarRuleNotFound {
        leave_type: leave_type.as_str().to_string(),
    })?;

    if !month_range(today).contains(date) {
        return Ok(LeaveDecision::rejected(format!(
            "{} entries must fall within the current month",
            leave_type.as_str()
        )));
    }

    if date > today {
        return Ok(LeaveDecision::rejected(format!(
            "{} entries cannot be recorded for a future date",
            leave_type.as_str()
        )));
    }

    Ok(LeaveDecision::accepted(charge))
}
