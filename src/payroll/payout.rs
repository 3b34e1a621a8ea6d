//! Payout arithmetic for a single payslip draft.
//!
//! Plain integer arithmetic in whole currency units. There is no rounding
//! step: inputs are constrained to integers at the entry boundary, so the
//! products and differences here are exact.

/// Computes the month's salary payout.
///
/// `salary_payout = days_present * wage_per_day`.
///
/// # Example
///
/// ```
/// use salary_manager::payroll::salary_payout;
///
/// assert_eq!(salary_payout(26, 900), 23400);
/// ```
pub fn salary_payout(days_present: u32, wage_per_day: i64) -> i64 {
    i64::from(days_present) * wage_per_day
}

/// Computes the payout after the advance set-off is withheld.
///
/// `final_payout = salary_payout - set_off_advance`. The result may be
/// negative when the set-off exceeds the month's payout; callers that
/// want a floor must impose it themselves.
pub fn final_payout(salary_payout: i64, set_off_advance: i64) -> i64 {
    salary_payout - set_off_advance
}
