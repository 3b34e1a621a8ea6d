//! Employee model and the fixed role/unit sets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// The fixed set of roles an employee can be onboarded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Shift supervision.
    Supervisor,
    /// Machine and equipment maintenance.
    Technician,
    /// Production line operation.
    Operator,
    /// Assembly and fitting work.
    Fitter,
}

impl FromStr for Role {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Supervisor" => Ok(Role::Supervisor),
            "Technician" => Ok(Role::Technician),
            "Operator" => Ok(Role::Operator),
            "Fitter" => Ok(Role::Fitter),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Supervisor => "Supervisor",
            Role::Technician => "Technician",
            Role::Operator => "Operator",
            Role::Fitter => "Fitter",
        };
        f.write_str(label)
    }
}

/// The fixed set of organizational units an employee can belong to.
///
/// Serialized with the space ("Unit A") as the wire contract shows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkingUnit {
    /// Unit A.
    #[serde(rename = "Unit A")]
    UnitA,
    /// Unit B.
    #[serde(rename = "Unit B")]
    UnitB,
    /// Unit C.
    #[serde(rename = "Unit C")]
    UnitC,
}

impl FromStr for WorkingUnit {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Unit A" => Ok(WorkingUnit::UnitA),
            "Unit B" => Ok(WorkingUnit::UnitB),
            "Unit C" => Ok(WorkingUnit::UnitC),
            _ => Err(()),
        }
    }
}

impl fmt::Display for WorkingUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WorkingUnit::UnitA => "Unit A",
            WorkingUnit::UnitB => "Unit B",
            WorkingUnit::UnitC => "Unit C",
        };
        f.write_str(label)
    }
}

/// An onboarded employee.
///
/// Identity (`id`, `code`) is assigned by the store on creation; the name
/// is uppercase-normalized at entry and is the match key the advance and
/// payslip flows use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier assigned on creation.
    pub id: Uuid,
    /// Human-facing employee code, e.g. "EMP-0001".
    #[serde(rename = "employeeCode")]
    pub code: String,
    /// Full name, stored uppercase.
    pub name: String,
    /// The employee's role.
    pub role: Role,
    /// Daily wage in whole currency units, non-negative.
    pub wage_per_day: i64,
    /// The unit the employee works in.
    pub unit: WorkingUnit,
    /// Optional joining date as a day-month-year entry string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joining_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_employee() -> Employee {
        Employee {
            id: Uuid::new_v4(),
            code: "EMP-0001".to_string(),
            name: "RAHUL SHARMA".to_string(),
            role: Role::Supervisor,
            wage_per_day: 950,
            unit: WorkingUnit::UnitA,
            joining_date: None,
        }
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(
            serde_json::to_string(&Role::Supervisor).unwrap(),
            "\"Supervisor\""
        );
        assert_eq!(serde_json::to_string(&Role::Fitter).unwrap(), "\"Fitter\"");
    }

    #[test]
    fn test_unit_serializes_with_space() {
        assert_eq!(
            serde_json::to_string(&WorkingUnit::UnitB).unwrap(),
            "\"Unit B\""
        );
    }

    #[test]
    fn test_unit_parses_display_form() {
        assert_eq!("Unit C".parse::<WorkingUnit>(), Ok(WorkingUnit::UnitC));
        assert!("Unit D".parse::<WorkingUnit>().is_err());
    }

    #[test]
    fn test_role_parses_display_form() {
        assert_eq!("Operator".parse::<Role>(), Ok(Role::Operator));
        assert!("Manager".parse::<Role>().is_err());
    }

    #[test]
    fn test_employee_wire_shape_is_camel_case() {
        let employee = create_test_employee();
        let json = serde_json::to_value(&employee).unwrap();

        assert_eq!(json["name"], "RAHUL SHARMA");
        assert_eq!(json["employeeCode"], "EMP-0001");
        assert_eq!(json["wagePerDay"], 950);
        assert_eq!(json["unit"], "Unit A");
        assert!(json.get("joining_date").is_none());
    }

    #[test]
    fn test_employee_round_trip() {
        let employee = create_test_employee();
        let json = serde_json::to_string(&employee).unwrap();
        let back: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(back, employee);
    }

    #[test]
    fn test_deserialize_rejects_unknown_unit() {
        let json = r#"{
            "id": "7b41f3a2-3a88-4f0a-9d38-6a7f7cf6f9b1",
            "employeeCode": "EMP-0002",
            "name": "AMIT SINGH",
            "role": "Technician",
            "wagePerDay": 750,
            "unit": "Unit Z"
        }"#;

        assert!(serde_json::from_str::<Employee>(json).is_err());
    }
}
