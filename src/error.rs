//! Error types for the Salary Manager service.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all failure conditions the service can produce.

use thiserror::Error;

/// The main error type for the Salary Manager service.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use salary_manager::error::PayrollError;
///
/// let error = PayrollError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
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

    /// An employee with the same name is already onboarded.
    #[error("Employee already exists: {name}")]
    EmployeeExists {
        /// The duplicate employee name.
        name: String,
    },

    /// The named employee does not exist in the roster.
    #[error("Employee not found: {name}")]
    EmployeeNotFound {
        /// The name that matched no employee.
        name: String,
    },

    /// An employee field was invalid or missing.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The approver is not part of the configured approver roster.
    #[error("Approver not recognized: {name}")]
    ApproverNotRecognized {
        /// The rejected approver name.
        name: String,
    },

    /// A payslip month was missing or not in `YYYY-MM` form.
    #[error("Invalid payslip month: {value}")]
    InvalidMonth {
        /// The rejected month value.
        value: String,
    },

    /// Days present exceeded the calendar length of the selected month.
    #[error("Days present {days} out of range for the selected month (max {max})")]
    DaysOutOfRange {
        /// The submitted days-present value.
        days: u32,
        /// The maximum days allowed for the month.
        max: u32,
    },

    /// The set-off amount fell outside `0..=pending_advance`.
    #[error("Set-off amount {set_off} out of range (pending advance is {pending})")]
    SetOffOutOfRange {
        /// The submitted set-off amount.
        set_off: i64,
        /// The employee's net outstanding advance.
        pending: i64,
    },

    /// Admin credentials did not match the configured account.
    #[error("Invalid admin credentials")]
    InvalidCredentials,
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = PayrollError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_employee_not_found_displays_name() {
        let error = PayrollError::EmployeeNotFound {
            name: "RAHUL SHARMA".to_string(),
        };
        assert_eq!(error.to_string(), "Employee not found: RAHUL SHARMA");
    }

    #[test]
    fn test_days_out_of_range_displays_bounds() {
        let error = PayrollError::DaysOutOfRange { days: 31, max: 28 };
        assert_eq!(
            error.to_string(),
            "Days present 31 out of range for the selected month (max 28)"
        );
    }

    #[test]
    fn test_set_off_out_of_range_displays_pending() {
        let error = PayrollError::SetOffOutOfRange {
            set_off: 6000,
            pending: 5000,
        };
        assert_eq!(
            error.to_string(),
            "Set-off amount 6000 out of range (pending advance is 5000)"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PayrollError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> PayrollResult<()> {
            Err(PayrollError::EmployeeNotFound {
                name: "GHOST".to_string(),
            })
        }

        fn propagates_error() -> PayrollResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
