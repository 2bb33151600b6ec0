//! Leave balance snapshot.
//!
//! The balance is owned by the employee record and mutated only by the
//! backend on approval; the validator treats it as read-only input.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::LeaveType;

/// A read-only snapshot of remaining leave days per leave type.
///
/// Types with no entry read as a zero balance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeaveBalance {
    balances: HashMap<LeaveType, Decimal>,
}

impl LeaveBalance {
    /// Creates an empty balance snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the remaining balance for a leave type, returning self for chaining.
    pub fn with(mut self, leave_type: LeaveType, remaining: Decimal) -> Self {
        self.balances.insert(leave_type, remaining);
        self
    }

    /// Returns the remaining balance for a leave type (zero when untracked).
    pub fn remaining(&self, leave_type: LeaveType) -> Decimal {
        self.balances
            .get(&leave_type)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }
}

impl From<HashMap<LeaveType, Decimal>> for LeaveBalance {
    fn from(balances: HashMap<LeaveType, Decimal>) -> Self {
        Self { balances }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_missing_entry_reads_as_zero() {
        let balance = LeaveBalance::new();
        assert_eq!(balance.remaining(LeaveType::Casual), Decimal::ZERO);
    }

    #[test]
    fn test_tracked_entry_is_returned() {
        let balance = LeaveBalance::new()
            .with(LeaveType::Earned, dec("12.5"))
            .with(LeaveType::Casual, dec("3"));

        assert_eq!(balance.remaining(LeaveType::Earned), dec("12.5"));
        assert_eq!(balance.remaining(LeaveType::Casual), dec("3"));
        assert_eq!(balance.remaining(LeaveType::Medical), Decimal::ZERO);
    }

    #[test]
    fn test_deserialize_from_wire_map() {
        let json = r#"{"casual": "4", "earned": "10.5", "comp_off": "1"}"#;
        let balance: LeaveBalance = serde_json::from_str(json).unwrap();

        assert_eq!(balance.remaining(LeaveType::Casual), dec("4"));
        assert_eq!(balance.remaining(LeaveType::Earned), dec("10.5"));
        assert_eq!(balance.remaining(LeaveType::CompOff), dec("1"));
    }
}
