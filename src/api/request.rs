//! Request types for the Leave and Tax Rules Engine API.
//!
//! This module defines the JSON request structures for the validation and
//! calculation endpoints. Leave dates arrive as raw form strings and are
//! parsed here, so that malformed input becomes a clean rejection rather
//! than an invalid-date comparison further down.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::parse_iso_date;
use crate::models::{
    DeductionCode, HalfDaySelection, HraDetails, LeaveBalance, LeaveDecision, LeaveRequest,
    LeaveType, TaxInput, TaxRegime,
};

/// Request body for the `/leave/validate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveValidationRequest {
    /// The kind of leave being requested.
    pub leave_type: LeaveType,
    /// The first day of the leave, as entered in the form.
    pub start_date: String,
    /// The last day of the leave, as entered in the form. May be empty.
    #[serde(default)]
    pub end_date: Option<String>,
    /// The half-day selector.
    #[serde(default)]
    pub half_day: HalfDaySelection,
    /// Free-text justification.
    #[serde(default)]
    pub reason: String,
    /// Reference to an uploaded supporting file.
    #[serde(default)]
    pub attachment_ref: Option<String>,
    /// The approver the submission will be routed to.
    #[serde(default)]
    pub approver_id: Option<String>,
    /// The shift the employee is rostered on.
    #[serde(default)]
    pub shift: Option<String>,
    /// The employee's current balance snapshot.
    #[serde(default)]
    pub balance: LeaveBalance,
    /// The reference date for window checks. Defaults to the server date.
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

impl LeaveValidationRequest {
    /// Resolves the raw form input into a domain request.
    ///
    /// Unparseable dates come back as a [`LeaveDecision::Rejected`] with an
    /// inline-displayable reason; an empty end date string is treated as no
    /// end date.
    pub fn resolve(&self) -> Result<LeaveRequest, LeaveDecision> {
        let start_date = parse_iso_date(&self.start_date).ok_or_else(|| {
            LeaveDecision::rejected(format!("'{}' is not a valid start date", self.start_date))
        })?;

        let end_date = match self.end_date.as_deref() {
            Some(raw) if !raw.trim().is_empty() => Some(parse_iso_date(raw).ok_or_else(|| {
                LeaveDecision::rejected(format!("'{}' is not a valid end date", raw))
            })?),
            _ => None,
        };

        Ok(LeaveRequest {
            leave_type: self.leave_type,
            start_date,
            end_date,
            half_day: self.half_day,
            reason: self.reason.clone(),
            attachment_ref: self.attachment_ref.clone(),
        })
    }
}

/// Request body for the `/calendar/validate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEntryRequest {
    /// The calendar-flow leave type being recorded.
    pub leave_type: LeaveType,
    /// The day being recorded, as entered in the form.
    pub date: String,
    /// The reference date for window checks. Defaults to the server date.
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

impl CalendarEntryRequest {
    /// Parses the raw entry date, turning malformed input into a rejection.
    pub fn resolve_date(&self) -> Result<NaiveDate, LeaveDecision> {
        parse_iso_date(&self.date)
            .ok_or_else(|| LeaveDecision::rejected(format!("'{}' is not a valid date", self.date)))
    }
}

/// Request body for the `/tax/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxCalculationRequest {
    /// The regime to compute under.
    pub regime: TaxRegime,
    /// Gross annual income before any deduction.
    pub gross_annual_income: Decimal,
    /// Claimed amounts per deduction category.
    #[serde(default)]
    pub deductions: HashMap<DeductionCode, Decimal>,
    /// HRA exemption inputs, considered only under the old regime.
    #[serde(default)]
    pub hra: Option<HraDetails>,
}

impl From<TaxCalculationRequest> for TaxInput {
    fn from(req: TaxCalculationRequest) -> Self {
        TaxInput {
            regime: req.regime,
            gross_annual_income: req.gross_annual_income,
            deductions: req.deductions,
            hra: req.hra,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_request() -> LeaveValidationRequest {
        LeaveValidationRequest {
            leave_type: LeaveType::Casual,
            start_date: "2026-08-11".to_string(),
            end_date: None,
            half_day: HalfDaySelection::None,
            reason: "errand".to_string(),
            attachment_ref: None,
            approver_id: None,
            shift: None,
            balance: LeaveBalance::new(),
            today: None,
        }
    }

    #[test]
    fn test_resolve_parses_dates() {
        let mut request = base_request();
        request.end_date = Some("2026-08-12".to_string());

        let domain = request.resolve().unwrap();
        assert_eq!(
            domain.start_date,
            NaiveDate::from_ymd_opt(2026, 8, 11).unwrap()
        );
        assert_eq!(
            domain.end_date,
            Some(NaiveDate::from_ymd_opt(2026, 8, 12).unwrap())
        );
    }

    #[test]
    fn test_resolve_rejects_malformed_start_date() {
        let mut request = base_request();
        request.start_date = "tomorrow".to_string();

        let decision = request.resolve().unwrap_err();
        assert!(!decision.is_accepted());
        assert!(decision.reason().unwrap().contains("not a valid start date"));
    }

    #[test]
    fn test_resolve_treats_empty_end_date_as_absent() {
        let mut request = base_request();
        request.end_date = Some("".to_string());

        let domain = request.resolve().unwrap();
        assert_eq!(domain.end_date, None);
    }

    #[test]
    fn test_resolve_rejects_malformed_end_date() {
        let mut request = base_request();
        request.end_date = Some("2026-13-40".to_string());

        let decision = request.resolve().unwrap_err();
        assert!(decision.reason().unwrap().contains("not a valid end date"));
    }

    #[test]
    fn test_deserialize_leave_validation_request() {
        let json = r#"{
            "leave_type": "earned",
            "start_date": "2026-08-11",
            "end_date": "2026-08-15",
            "reason": "family trip",
            "balance": {"earned": "10"},
            "today": "2026-08-10"
        }"#;

        let request: LeaveValidationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.leave_type, LeaveType::Earned);
        assert_eq!(request.half_day, HalfDaySelection::None);
        assert_eq!(
            request.today,
            Some(NaiveDate::from_ymd_opt(2026, 8, 10).unwrap())
        );
    }

    #[test]
    fn test_calendar_request_resolves_date() {
        let request = CalendarEntryRequest {
            leave_type: LeaveType::ShortLeave,
            date: "2026-08-05".to_string(),
            today: None,
        };
        assert_eq!(
            request.resolve_date().unwrap(),
            NaiveDate::from_ymd_opt(2026, 8, 5).unwrap()
        );
    }

    #[test]
    fn test_tax_request_converts_to_input() {
        let json = r#"{
            "regime": "new_fy2526",
            "gross_annual_income": "1000000",
            "deductions": {"employer_pension": "50000"}
        }"#;

        let request: TaxCalculationRequest = serde_json::from_str(json).unwrap();
        let input: TaxInput = request.into();

        assert_eq!(input.regime, TaxRegime::NewFy2526);
        assert_eq!(input.deductions.len(), 1);
    }
}
