//! Error types for the Leave and Tax Rules Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Expected validation outcomes (a leave request being turned down, for
//! example) are NOT errors; they are returned as data. The variants here
//! cover configuration and caller-contract faults only.

use thiserror::Error;

/// The main error type for the Leave and Tax Rules Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use hr_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No slab table is configured for the requested tax regime.
    #[error("No tax regime table loaded for '{regime}'")]
    RegimeNotFound {
        /// The regime code that has no table.
        regime: String,
    },

    /// The leave type has no entry in the eligibility rule table.
    ///
    /// This includes the attendance-calendar types (short leave, regularized,
    /// vendor meeting), which are handled by the calendar flow and must never
    /// reach the leave validator.
    #[error("No eligibility rule for leave type '{leave_type}'")]
    LeaveRuleNotFound {
        /// The leave type with no rule entry.
        leave_type: String,
    },

    /// The leave type has no entry in the calendar entry rule table.
    #[error("No calendar entry rule for leave type '{leave_type}'")]
    CalendarRuleNotFound {
        /// The leave type with no calendar rule entry.
        leave_type: String,
    },

    /// A monetary input was negative or otherwise out of contract.
    #[error("Invalid amount for '{field}': {message}")]
    InvalidAmount {
        /// The input field that was invalid.
        field: String,
        /// A description of what made the amount invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_regime_not_found_displays_code() {
        let error = EngineError::RegimeNotFound {
            regime: "new_fy2627".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "No tax regime table loaded for 'new_fy2627'"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_leave_rule_not_found_displays_type() {
        let error = EngineError::LeaveRuleNotFound {
            leave_type: "short_leave".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "No eligibility rule for leave type 'short_leave'"
        );
    }

    #[test]
    fn test_invalid_amount_displays_field_and_message() {
        let error = EngineError::InvalidAmount {
            field: "gross_annual_income".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid amount for 'gross_annual_income': must not be negative"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_regime_not_found() -> EngineResult<()> {
            Err(EngineError::RegimeNotFound {
                regime: "old".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_regime_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
