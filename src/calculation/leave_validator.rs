//! Leave request eligibility validation.
//!
//! The validator is a pure function over a request, a read-only balance
//! snapshot and a caller-supplied "today". Every expected failure comes
//! back as [`LeaveDecision::Rejected`] with a reason suitable for inline
//! display; only a leave type with no rule entry raises an error.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{HalfDaySelection, LeaveBalance, LeaveDecision, LeaveRequest};

use super::date_math::inclusive_day_count;
use super::leave_rules::rule_for;

/// Validates a leave request and derives the charged day count.
///
/// Checks run in order: required fields, then the booking window and
/// duration bound (both bypassed when a half- or full-day is selected),
/// and the balance last. The first failing check produces the rejection.
///
/// # Errors
///
/// Returns [`EngineError::LeaveRuleNotFound`] when the leave type has no
/// entry in the rule table, which covers the calendar-flow types and marks
/// a caller fault rather than a user-facing rejection.
pub fn validate_leave(
    request: &LeaveRequest,
    balance: &LeaveBalance,
    today: NaiveDate,
) -> EngineResult<LeaveDecision> {
    let rule = rule_for(request.leave_type).ok_or_else(|| EngineError::LeaveRuleNotFound {
        leave_type: request.leave_type.as_str().to_string(),
    })?;

    if request.reason.trim().is_empty() {
        return Ok(LeaveDecision::rejected("a reason is required"));
    }

    if rule.requires_attachment
        && request
            .attachment_ref
            .as_deref()
            .is_none_or(|attachment| attachment.trim().is_empty())
    {
        return Ok(LeaveDecision::rejected(format!(
            "a supporting attachment is required for {} leave",
            request.leave_type.as_str()
        )));
    }

    if rule.requires_half_day && request.half_day == HalfDaySelection::None {
        return Ok(LeaveDecision::rejected(format!(
            "a half-day selection is required for {} leave",
            request.leave_type.as_str()
        )));
    }

    let total_days = match request.half_day.forced_days() {
        // a half- or full-day choice fixes the charge and bypasses the
        // window and duration checks
        Some(forced) => forced,
        None => {
            if !rule.window.permits(request.start_date, today) {
                return Ok(LeaveDecision::rejected(format!(
                    "start date {} is outside the allowed window for {} leave",
                    request.start_date,
                    request.leave_type.as_str()
                )));
            }

            let days = charged_days(request.start_date, request.end_date);
            if let Some(duration) = rule.duration {
                if !duration.permits(days) {
                    return Ok(LeaveDecision::rejected(format!(
                        "{} leave must span between {} and {} days (requested {})",
                        request.leave_type.as_str(),
                        duration.min_days,
                        duration.max_days,
                        days
                    )));
                }
            }
            days
        }
    };

    if rule.draws_balance {
        let remaining = balance.remaining(request.leave_type);
        if total_days > remaining {
            return Ok(LeaveDecision::rejected(format!(
                "insufficient {} leave balance: requested {} days, {} available",
                request.leave_type.as_str(),
                total_days,
                remaining
            )));
        }
    }

    Ok(LeaveDecision::accepted(total_days))
}

/// Derives the charged days from the requested date range.
///
/// An absent end date, or one earlier than the start, is ignored and the
/// request charges a single day.
fn charged_days(start_date: NaiveDate, end_date: Option<NaiveDate>) -> Decimal {
    match end_date {
        Some(end) if end >= start_date => Decimal::from(inclusive_day_count(start_date, end)),
        _ => Decimal::ONE,
    }
}
