//! The year-month pair a payslip is generated for.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PayrollError;

/// A calendar month in a specific year, carried on the wire as `YYYY-MM`.
///
/// This is the month selector value the payslip form submits; it orders
/// chronologically (year first, then month).
///
/// # Example
///
/// ```
/// use salary_manager::models::PayMonth;
///
/// let month: PayMonth = "2024-02".parse().unwrap();
/// assert_eq!(month.year, 2024);
/// assert_eq!(month.month, 2);
/// assert_eq!(month.to_string(), "2024-02");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PayMonth {
    /// The calendar year.
    pub year: i32,
    /// The month number, 1 through 12.
    pub month: u32,
}

impl PayMonth {
    /// Returns the pay month a calendar date falls in.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl FromStr for PayMonth {
    type Err = PayrollError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || PayrollError::InvalidMonth {
            value: value.to_string(),
        };

        let (year, month) = value.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        if !(1..=12).contains(&month) {
            return Err(invalid());
        }

        Ok(Self { year, month })
    }
}

impl TryFrom<String> for PayMonth {
    type Error = PayrollError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PayMonth> for String {
    fn from(month: PayMonth) -> Self {
        month.to_string()
    }
}

impl fmt::Display for PayMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
