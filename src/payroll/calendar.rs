//! Calendar length of a pay month, and the days-present bound it implies.

use crate::models::PayMonth;

/// The permissive upper bound used before any month is selected.
pub const DEFAULT_MAX_DAYS: u32 = 31;

/// Returns whether a year is a Gregorian leap year.
///
/// A year is a leap year iff it is divisible by 4 and (not divisible by
/// 100 or divisible by 400).
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of calendar days in a month.
///
/// # Panics
///
/// Panics if `month` is outside `1..=12`; [`PayMonth`] parsing rejects
/// such values before they reach here.
///
/// # Example
///
/// ```
/// use salary_manager::payroll::days_in_month;
///
/// assert_eq!(days_in_month(2024, 2), 29);
/// assert_eq!(days_in_month(2023, 2), 28);
/// ```
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => panic!("month out of range: {month}"),
    }
}

/// Returns the maximum days-present value for a (possibly unselected)
/// month.
///
/// When no month has been chosen yet the bound is a permissive
/// [`DEFAULT_MAX_DAYS`], so entry is not blocked before selection.
pub fn max_days_present(month: Option<PayMonth>) -> u32 {
    match month {
        Some(m) => days_in_month(m.year, m.month),
        None => DEFAULT_MAX_DAYS,
    }
}

/// Clamps a previously entered days-present value to the month's bound.
///
/// A later change to the month that lowers the maximum pulls the entered
/// value down with it; values already in range pass through unchanged.
pub fn clamp_days_present(days: u32, month: Option<PayMonth>) -> u32 {
    days.min(max_days_present(month))
}
