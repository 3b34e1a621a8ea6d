//! Generated payslip records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{PayMonth, WorkingUnit};

/// A generated payslip.
///
/// All derived fields (`salary_payout`, `has_advance`, `pending_advance`,
/// `final_payout`) are computed server-side at generation time; a payslip
/// is immutable once generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payslip {
    /// Unique identifier assigned on creation.
    pub id: Uuid,
    /// Name of the employee the slip was generated for.
    pub employee_name: String,
    /// The employee's human-facing code at generation time.
    pub employee_code: String,
    /// The month the slip covers.
    pub month: PayMonth,
    /// The employee's unit at generation time.
    pub working_unit: WorkingUnit,
    /// Days the employee was present, bounded by the month's length.
    pub days_present: u32,
    /// Daily wage applied, in whole currency units.
    pub wage_per_day: i64,
    /// `days_present * wage_per_day`.
    pub salary_payout: i64,
    /// Whether the employee had a positive outstanding advance.
    pub has_advance: bool,
    /// Net outstanding advance at generation time.
    pub pending_advance: i64,
    /// Amount withheld against the outstanding advance,
    /// `0..=pending_advance`.
    pub set_off_advance: i64,
    /// `salary_payout - set_off_advance`. May be negative when the
    /// set-off exceeds the month's payout.
    pub final_payout: i64,
    /// Server timestamp of generation.
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_payslip() -> Payslip {
        Payslip {
            id: Uuid::new_v4(),
            employee_name: "RAKESH KUMAR".to_string(),
            employee_code: "EMP-0004".to_string(),
            month: PayMonth { year: 2024, month: 3 },
            working_unit: WorkingUnit::UnitC,
            days_present: 26,
            wage_per_day: 900,
            salary_payout: 23400,
            has_advance: true,
            pending_advance: 5000,
            set_off_advance: 2000,
            final_payout: 21400,
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn test_payslip_wire_shape_is_camel_case() {
        let slip = create_test_payslip();
        let json = serde_json::to_value(&slip).unwrap();

        assert_eq!(json["employeeName"], "RAKESH KUMAR");
        assert_eq!(json["employeeCode"], "EMP-0004");
        assert_eq!(json["month"], "2024-03");
        assert_eq!(json["workingUnit"], "Unit C");
        assert_eq!(json["daysPresent"], 26);
        assert_eq!(json["salaryPayout"], 23400);
        assert_eq!(json["hasAdvance"], true);
        assert_eq!(json["pendingAdvance"], 5000);
        assert_eq!(json["setOffAdvance"], 2000);
        assert_eq!(json["finalPayout"], 21400);
    }

    #[test]
    fn test_payslip_round_trip() {
        let slip = create_test_payslip();
        let json = serde_json::to_string(&slip).unwrap();
        let back: Payslip = serde_json::from_str(&json).unwrap();
        assert_eq!(back, slip);
    }
}
