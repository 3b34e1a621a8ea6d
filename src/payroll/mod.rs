//! The payroll computation and aggregation core.
//!
//! Pure functions over the domain records: payout arithmetic, the
//! days-in-month bound for attendance entry, net-outstanding aggregation
//! of the advance ledger, the shared list search/filter/sort pipeline,
//! and keystroke normalization for date fields. Nothing in this module
//! performs I/O or holds state; the API handlers feed it snapshots and
//! render what it returns.

mod advances;
mod calendar;
mod date_entry;
mod listing;
mod payout;

pub use advances::{aggregate_outstanding, outstanding_for};
pub use calendar::{
    DEFAULT_MAX_DAYS, clamp_days_present, days_in_month, is_leap_year, max_days_present,
};
pub use date_entry::normalize_date_entry;
pub use listing::{SortOrder, compare_entry_dates, narrow_by, parse_entry_date, rank_by, search_by};
pub use payout::{final_payout, salary_payout};
