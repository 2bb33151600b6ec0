//! The per-leave-type eligibility rule table.
//!
//! Each request-flow leave type maps to one [`LeaveRule`] carrying its
//! booking window, duration bound and extra requirements. The validator
//! looks rules up here instead of branching over leave types; a type with
//! no entry (the calendar-flow types among them) is a configuration fault.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::LeaveType;

use super::date_math::{month_range, offset_range};

/// The booking window constraint on a leave request's start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowRule {
    /// The start date must fall in the current calendar month AND within
    /// `[today - back, today + ahead]`.
    CurrentMonthAnd {
        /// Days before today the window opens.
        back: i64,
        /// Days after today the window closes.
        ahead: i64,
    },
    /// The start date must fall within `[today - back, today + ahead]`,
    /// regardless of month. Negative `ahead` closes the window before today.
    Offset {
        /// Days before today the window opens.
        back: i64,
        /// Days after today the window closes.
        ahead: i64,
    },
    /// No window constraint.
    Unrestricted,
}

impl WindowRule {
    /// Returns true if `start` is a permissible start date as of `today`.
    pub fn permits(&self, start: NaiveDate, today: NaiveDate) -> bool {
        match self {
            WindowRule::CurrentMonthAnd { back, ahead } => month_range(today)
                .intersect(&offset_range(today, *back, *ahead))
                .is_some_and(|window| window.contains(start)),
            WindowRule::Offset { back, ahead } => {
                offset_range(today, *back, *ahead).contains(start)
            }
            WindowRule::Unrestricted => true,
        }
    }
}

/// An inclusive bound on the number of days a request may span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationRule {
    /// Minimum span in days.
    pub min_days: u32,
    /// Maximum span in days.
    pub max_days: u32,
}

impl DurationRule {
    /// Returns true if the charged day count satisfies the bound.
    pub fn permits(&self, total_days: Decimal) -> bool {
        total_days >= Decimal::from(self.min_days) && total_days <= Decimal::from(self.max_days)
    }
}

/// The full eligibility rule for one leave type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaveRule {
    /// Booking window on the start date.
    pub window: WindowRule,
    /// Duration bound, when the type has one.
    pub duration: Option<DurationRule>,
    /// Whether a supporting attachment must be present.
    pub requires_attachment: bool,
    /// Whether a half-day selection must be made.
    pub requires_half_day: bool,
    /// Whether the charged days are checked against the remaining balance.
    pub draws_balance: bool,
}

/// Looks up the eligibility rule for a leave type.
///
/// Calendar-flow types (short leave, regularized, vendor meeting) have no
/// entry here; they are validated by
/// [`super::validate_calendar_entry`].
pub fn rule_for(leave_type: LeaveType) -> Option<LeaveRule> {
    match leave_type {
        LeaveType::Casual => Some(LeaveRule {
            window: WindowRule::CurrentMonthAnd { back: 0, ahead: 7 },
            duration: None,
            requires_attachment: false,
            requires_half_day: false,
            draws_balance: true,
        }),
        LeaveType::Medical => Some(LeaveRule {
            window: WindowRule::Offset { back: 30, ahead: -1 },
            duration: Some(DurationRule {
                min_days: 1,
                max_days: 7,
            }),
            requires_attachment: true,
            requires_half_day: false,
            // the backend settles medical balances on approval
            draws_balance: false,
        }),
        LeaveType::Earned => Some(LeaveRule {
            window: WindowRule::CurrentMonthAnd { back: 14, ahead: 31 },
            duration: Some(DurationRule {
                min_days: 1,
                max_days: 14,
            }),
            requires_attachment: false,
            requires_half_day: false,
            draws_balance: true,
        }),
        LeaveType::CompOff => Some(LeaveRule {
            window: WindowRule::CurrentMonthAnd { back: 14, ahead: 31 },
            duration: Some(DurationRule {
                min_days: 1,
                max_days: 14,
            }),
            requires_attachment: false,
            requires_half_day: true,
            draws_balance: true,
        }),
        LeaveType::Optional => Some(LeaveRule {
            window: WindowRule::Unrestricted,
            duration: None,
            requires_attachment: false,
            requires_half_day: false,
            draws_balance: false,
        }),
        LeaveType::VendorMeeting | LeaveType::Regularized | LeaveType::ShortLeave => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_casual_window_is_clipped_to_current_month() {
        let rule = rule_for(LeaveType::Casual).unwrap();
        let today = date(2026, 8, 28);

        // within the next 7 days but inside the month
        assert!(rule.window.permits(date(2026, 8, 31), today));
        // within the next 7 days but in September
        assert!(!rule.window.permits(date(2026, 9, 2), today));
    }

    #[test]
    fn test_casual_window_rejects_past_and_far_future() {
        let rule = rule_for(LeaveType::Casual).unwrap();
        let today = date(2026, 8, 10);

        assert!(rule.window.permits(date(2026, 8, 10), today));
        assert!(rule.window.permits(date(2026, 8, 17), today));
        assert!(!rule.window.permits(date(2026, 8, 9), today));
        assert!(!rule.window.permits(date(2026, 8, 18), today));
    }

    #[test]
    fn test_medical_window_excludes_today() {
        let rule = rule_for(LeaveType::Medical).unwrap();
        let today = date(2026, 8, 10);

        assert!(rule.window.permits(date(2026, 8, 9), today));
        assert!(rule.window.permits(date(2026, 7, 11), today));
        assert!(!rule.window.permits(date(2026, 8, 10), today));
        assert!(!rule.window.permits(date(2026, 7, 10), today));
    }

    #[test]
    fn test_earned_window_allows_lookback_within_month() {
        let rule = rule_for(LeaveType::Earned).unwrap();
        let today = date(2026, 8, 10);

        // 9 days back, still inside August
        assert!(rule.window.permits(date(2026, 8, 1), today));
        // 14 days back would be July 27, clipped out by the month bound
        assert!(!rule.window.permits(date(2026, 7, 27), today));
    }

    #[test]
    fn test_optional_window_is_unrestricted() {
        let rule = rule_for(LeaveType::Optional).unwrap();
        let today = date(2026, 8, 10);
        assert!(rule.window.permits(date(2030, 1, 1), today));
        assert!(rule.window.permits(date(2020, 1, 1), today));
    }

    #[test]
    fn test_duration_rule_bounds_are_inclusive() {
        let duration = DurationRule {
            min_days: 1,
            max_days: 14,
        };
        assert!(duration.permits(dec("1")));
        assert!(duration.permits(dec("14")));
        assert!(!duration.permits(dec("0.5")));
        assert!(!duration.permits(dec("15")));
    }

    #[test]
    fn test_comp_off_requires_half_day_and_balance() {
        let rule = rule_for(LeaveType::CompOff).unwrap();
        assert!(rule.requires_half_day);
        assert!(rule.draws_balance);
    }

    #[test]
    fn test_medical_requires_attachment_but_not_balance() {
        let rule = rule_for(LeaveType::Medical).unwrap();
        assert!(rule.requires_attachment);
        assert!(!rule.draws_balance);
    }

    #[test]
    fn test_calendar_flow_types_have_no_rule() {
        assert!(rule_for(LeaveType::ShortLeave).is_none());
        assert!(rule_for(LeaveType::Regularized).is_none());
        assert!(rule_for(LeaveType::VendorMeeting).is_none());
    }
}
