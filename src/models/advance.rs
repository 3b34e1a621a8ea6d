//! Salary advance records and the aggregated outstanding-balance row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::WorkingUnit;

/// Lifecycle status of an advance entry.
///
/// Entries are recorded as `Pending`; repayments arrive as further entries
/// with negative amounts rather than status transitions, so `Settled` only
/// appears when an admin closes an entry out explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdvanceStatus {
    /// The advance is still open against the employee.
    Pending,
    /// The advance has been closed out.
    Settled,
}

/// A single salary-advance ledger entry.
///
/// `employee_name` is a free-text match key; aggregation matches it
/// exactly (case-sensitive) against other entries. Amounts are signed:
/// positive entries add to the outstanding balance, negative entries
/// record repayments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advance {
    /// Unique identifier assigned on creation.
    pub id: Uuid,
    /// Name of the employee the advance was issued to.
    pub employee_name: String,
    /// Unit of the employee at the time of issue.
    pub unit: WorkingUnit,
    /// Date the advance was taken, as a `DD-MM-YYYY` entry string.
    pub advance_date: String,
    /// Signed amount in whole currency units.
    pub advance_amount: i64,
    /// The approver who signed the advance off.
    pub approved_by: String,
    /// Lifecycle status.
    pub status: AdvanceStatus,
    /// Server timestamp of when the entry was recorded.
    pub generated_at: DateTime<Utc>,
}

/// One row of the aggregated outstanding-balance view: an employee and
/// the positive net sum of their advance entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutstandingAdvance {
    /// The employee the balance belongs to.
    pub employee_name: String,
    /// Net outstanding amount, strictly positive.
    pub total: i64,
}
