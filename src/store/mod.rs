//! In-memory record store.
//!
//! Persistence is out of scope for this service; records live for the
//! lifetime of the process in `RwLock`-guarded collections shared behind
//! the application state's `Arc`. Handlers take snapshot copies and run
//! the payroll pipeline over those, so cross-view consistency comes from
//! re-reading the store, never from derived caches.

use std::sync::RwLock;
use std::sync::atomic::{AtomicU32, Ordering};

use uuid::Uuid;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Advance, Employee, Payslip, Role, WorkingUnit};

/// The fields an onboarding submission provides; the store assigns
/// identity and normalizes the rest.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    /// Full name as entered (uppercased by the store).
    pub name: String,
    /// The employee's role.
    pub role: Role,
    /// Daily wage in whole currency units.
    pub wage_per_day: i64,
    /// The unit the employee works in.
    pub unit: WorkingUnit,
    /// Optional joining date entry string.
    pub joining_date: Option<String>,
}

/// The in-memory record store for employees, advances and payslips.
#[derive(Debug, Default)]
pub struct Store {
    employees: RwLock<Vec<Employee>>,
    advances: RwLock<Vec<Advance>>,
    payslips: RwLock<Vec<Payslip>>,
    issued_codes: AtomicU32,
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Onboards a new employee.
    ///
    /// The name is uppercase-normalized before storage and must be unique
    /// (compared case-insensitively, since storage uppercases anyway).
    /// The store assigns the id and the next `EMP-NNNN` code.
    pub fn add_employee(&self, new: NewEmployee) -> PayrollResult<Employee> {
        let name = new.name.trim().to_uppercase();
        if name.is_empty() {
            return Err(PayrollError::InvalidEmployee {
                field: "name".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if new.wage_per_day < 0 {
            return Err(PayrollError::InvalidEmployee {
                field: "wagePerDay".to_string(),
                message: "must not be negative".to_string(),
            });
        }

        let mut employees = self.employees.write().expect("employees lock poisoned");
        if employees.iter().any(|e| e.name == name) {
            return Err(PayrollError::EmployeeExists { name });
        }

        let serial = self.issued_codes.fetch_add(1, Ordering::Relaxed) + 1;
        let employee = Employee {
            id: Uuid::new_v4(),
            code: format!("EMP-{serial:04}"),
            name,
            role: new.role,
            wage_per_day: new.wage_per_day,
            unit: new.unit,
            joining_date: new.joining_date,
        };
        employees.push(employee.clone());
        Ok(employee)
    }

    /// Returns a snapshot of all employees in onboarding order.
    pub fn employees(&self) -> Vec<Employee> {
        self.employees.read().expect("employees lock poisoned").clone()
    }

    /// Looks up an employee by exact stored name.
    pub fn find_employee(&self, name: &str) -> Option<Employee> {
        self.employees
            .read()
            .expect("employees lock poisoned")
            .iter()
            .find(|e| e.name == name)
            .cloned()
    }

    /// Updates an employee's daily wage.
    pub fn update_wage(&self, name: &str, wage_per_day: i64) -> PayrollResult<Employee> {
        if wage_per_day < 0 {
            return Err(PayrollError::InvalidEmployee {
                field: "wagePerDay".to_string(),
                message: "must not be negative".to_string(),
            });
        }

        let mut employees = self.employees.write().expect("employees lock poisoned");
        match employees.iter_mut().find(|e| e.name == name) {
            Some(employee) => {
                employee.wage_per_day = wage_per_day;
                Ok(employee.clone())
            }
            None => Err(PayrollError::EmployeeNotFound {
                name: name.to_string(),
            }),
        }
    }

    /// Removes an employee from the roster, returning the removed record.
    pub fn remove_employee(&self, name: &str) -> PayrollResult<Employee> {
        let mut employees = self.employees.write().expect("employees lock poisoned");
        match employees.iter().position(|e| e.name == name) {
            Some(at) => Ok(employees.remove(at)),
            None => Err(PayrollError::EmployeeNotFound {
                name: name.to_string(),
            }),
        }
    }

    /// Records an advance ledger entry.
    pub fn add_advance(&self, advance: Advance) {
        self.advances
            .write()
            .expect("advances lock poisoned")
            .push(advance);
    }

    /// Returns a snapshot of the advance ledger in entry order.
    pub fn advances(&self) -> Vec<Advance> {
        self.advances.read().expect("advances lock poisoned").clone()
    }

    /// Records a generated payslip.
    pub fn add_payslip(&self, payslip: Payslip) {
        self.payslips
            .write()
            .expect("payslips lock poisoned")
            .push(payslip);
    }

    /// Returns a snapshot of all generated payslips in generation order.
    pub fn payslips(&self) -> Vec<Payslip> {
        self.payslips.read().expect("payslips lock poisoned").clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn onboard(name: &str) -> NewEmployee {
        NewEmployee {
            name: name.to_string(),
            role: Role::Operator,
            wage_per_day: 800,
            unit: WorkingUnit::UnitA,
            joining_date: None,
        }
    }

    #[test]
    fn test_add_employee_uppercases_and_assigns_identity() {
        let store = Store::new();
        let employee = store.add_employee(onboard("Pooja Patel")).unwrap();

        assert_eq!(employee.name, "POOJA PATEL");
        assert_eq!(employee.code, "EMP-0001");

        let second = store.add_employee(onboard("Amit Singh")).unwrap();
        assert_eq!(second.code, "EMP-0002");
    }

    #[test]
    fn test_duplicate_name_rejected_case_insensitively() {
        let store = Store::new();
        store.add_employee(onboard("Pooja Patel")).unwrap();

        let result = store.add_employee(onboard("POOJA patel"));
        assert!(matches!(result, Err(PayrollError::EmployeeExists { .. })));
    }

    #[test]
    fn test_empty_name_rejected() {
        let store = Store::new();
        let result = store.add_employee(onboard("   "));
        assert!(matches!(result, Err(PayrollError::InvalidEmployee { .. })));
    }

    #[test]
    fn test_negative_wage_rejected() {
        let store = Store::new();
        let mut new = onboard("Pooja Patel");
        new.wage_per_day = -1;
        let result = store.add_employee(new);
        assert!(matches!(result, Err(PayrollError::InvalidEmployee { .. })));
    }

    #[test]
    fn test_find_employee_matches_stored_name() {
        let store = Store::new();
        store.add_employee(onboard("Pooja Patel")).unwrap();

        assert!(store.find_employee("POOJA PATEL").is_some());
        // Lookup is by the stored (uppercase) form.
        assert!(store.find_employee("Pooja Patel").is_none());
    }

    #[test]
    fn test_update_wage() {
        let store = Store::new();
        store.add_employee(onboard("Pooja Patel")).unwrap();

        let updated = store.update_wage("POOJA PATEL", 830).unwrap();
        assert_eq!(updated.wage_per_day, 830);
        assert_eq!(store.find_employee("POOJA PATEL").unwrap().wage_per_day, 830);
    }

    #[test]
    fn test_update_wage_unknown_employee() {
        let store = Store::new();
        let result = store.update_wage("GHOST", 900);
        assert!(matches!(result, Err(PayrollError::EmployeeNotFound { .. })));
    }

    #[test]
    fn test_remove_employee() {
        let store = Store::new();
        store.add_employee(onboard("Pooja Patel")).unwrap();

        store.remove_employee("POOJA PATEL").unwrap();
        assert!(store.employees().is_empty());
        assert!(matches!(
            store.remove_employee("POOJA PATEL"),
            Err(PayrollError::EmployeeNotFound { .. })
        ));
    }

    #[test]
    fn test_codes_are_not_reused_after_removal() {
        let store = Store::new();
        store.add_employee(onboard("Pooja Patel")).unwrap();
        store.remove_employee("POOJA PATEL").unwrap();

        let next = store.add_employee(onboard("Amit Singh")).unwrap();
        assert_eq!(next.code, "EMP-0002");
    }
}
