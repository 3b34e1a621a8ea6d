//! Request types for the Salary Manager API.
//!
//! This is the single normalization step at the network boundary: every
//! accepted wire spelling (the historical `payPerDay`/`dailyWage` and
//! `workingUnit` variants included) is mapped onto one canonical shape
//! here, and downstream code only ever sees the canonical records.

use serde::{Deserialize, Serialize};

use crate::models::{Role, WorkingUnit};
use crate::payroll::normalize_date_entry;
use crate::store::NewEmployee;

/// Body of `POST /api/employee/add-employee`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardEmployeeRequest {
    /// Full name; uppercase-normalized by the store.
    pub name: String,
    /// One of the fixed roles.
    pub role: Role,
    /// Daily wage. Legacy clients spell this `payPerDay` or `dailyWage`.
    #[serde(alias = "payPerDay", alias = "dailyWage")]
    pub wage_per_day: i64,
    /// One of the fixed units. Legacy clients spell this `workingUnit`.
    #[serde(alias = "workingUnit")]
    pub unit: WorkingUnit,
    /// Optional joining date; normalized to `DD/MM/YYYY` on entry.
    #[serde(default)]
    pub joining_date: Option<String>,
}

impl From<OnboardEmployeeRequest> for NewEmployee {
    fn from(req: OnboardEmployeeRequest) -> Self {
        NewEmployee {
            name: req.name,
            role: req.role,
            wage_per_day: req.wage_per_day,
            unit: req.unit,
            joining_date: req
                .joining_date
                .map(|raw| normalize_date_entry(&raw, '/'))
                .filter(|value| !value.is_empty()),
        }
    }
}

/// Body of `PUT /api/employee/update-wage`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWageRequest {
    /// Stored (uppercase) employee name.
    pub name: String,
    /// The new daily wage.
    #[serde(alias = "payPerDay", alias = "dailyWage")]
    pub wage_per_day: i64,
}

/// Body of `POST /api/advance/generate-advance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateAdvanceRequest {
    /// Stored (uppercase) employee name.
    pub employee_name: String,
    /// Date of the advance as entered; normalized to `DD-MM-YYYY`.
    pub advance_date: String,
    /// Signed amount; negative entries record repayments.
    pub advance_amount: i64,
    /// Must be a member of the configured approver roster.
    pub approved_by: String,
}

/// Body of `POST /api/slip/add-slip`.
///
/// Clients may echo derived fields (`salaryPayout`, `finalPayout`,
/// `pendingAdvance`, ...) from their preview; the server recomputes every
/// one of them and ignores what was sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePayslipRequest {
    /// Stored (uppercase) employee name.
    pub employee_name: String,
    /// Month the slip covers, `YYYY-MM`. Optional on the wire so an
    /// unselected month reports a validation failure, not a parse error.
    #[serde(default)]
    pub month: Option<String>,
    /// Days present, bounded by the month's calendar length.
    pub days_present: u32,
    /// Amount to withhold against the outstanding advance.
    #[serde(default)]
    pub set_off_advance: i64,
}

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// The admin identifier.
    pub admin_id: String,
    /// The admin password.
    pub admin_password: String,
}

/// Query parameters of `GET /api/employee/list-employee`.
///
/// Every parameter is optional; anything missing or unparseable falls
/// back to its permissive default (empty search, "all" filters, no sort).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeListQuery {
    /// Case-insensitive substring match on the name.
    pub search: Option<String>,
    /// Role filter; absent or `all` keeps every role.
    pub role: Option<String>,
    /// Unit filter; absent or `all` keeps every unit.
    pub unit: Option<String>,
    /// Sort key; only `wagePerDay` is sortable.
    pub sort: Option<String>,
    /// Sort direction, `asc` (default) or `desc`.
    pub order: Option<String>,
}

/// Query parameters of `GET /api/advance/list-advance`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdvanceListQuery {
    /// Case-insensitive substring match on the employee name.
    pub search: Option<String>,
    /// Direction of the advance-date sort, `asc` (default) or `desc`.
    pub order: Option<String>,
}

/// Query parameters of `GET /api/advance/outstanding`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutstandingQuery {
    /// Matches the employee name (case-insensitive) or the decimal
    /// rendering of the total.
    pub search: Option<String>,
}

/// Query parameters of `GET /api/util/normalize-date`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NormalizeDateQuery {
    /// The raw field text.
    pub value: Option<String>,
    /// Separator to re-insert; the first character is used, `-` by default.
    pub separator: Option<String>,
}
