//! Net-outstanding aggregation over the advance ledger.

use std::collections::HashMap;

use crate::models::{Advance, OutstandingAdvance};

/// Reduces the advance ledger to net outstanding balance per employee.
///
/// Entries are grouped by exact `employee_name` match (case-sensitive, as
/// stored) and their signed amounts summed. Only groups whose sum is
/// strictly greater than zero are emitted; employees with a zero or
/// negative net are settled and omitted. Rows keep the insertion order of
/// each employee's first appearance in the ledger (stable grouping);
/// there is no secondary sort key for this view.
///
/// # Example
///
/// ```
/// use salary_manager::payroll::aggregate_outstanding;
/// # use salary_manager::models::{Advance, AdvanceStatus, WorkingUnit};
/// # use chrono::Utc;
/// # use uuid::Uuid;
/// # fn entry(name: &str, amount: i64) -> Advance {
/// #     Advance {
/// #         id: Uuid::new_v4(),
/// #         employee_name: name.to_string(),
/// #         unit: WorkingUnit::UnitA,
/// #         advance_date: "01-01-2024".to_string(),
/// #         advance_amount: amount,
/// #         approved_by: "Mahendra Gulechha".to_string(),
/// #         status: AdvanceStatus::Pending,
/// #         generated_at: Utc::now(),
/// #     }
/// # }
///
/// let ledger = vec![entry("A", 100), entry("A", -40), entry("B", -10)];
/// let rows = aggregate_outstanding(&ledger);
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].employee_name, "A");
/// assert_eq!(rows[0].total, 60);
/// ```
pub fn aggregate_outstanding(ledger: &[Advance]) -> Vec<OutstandingAdvance> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<OutstandingAdvance> = Vec::new();

    for advance in ledger {
        match index.get(advance.employee_name.as_str()) {
            Some(&at) => rows[at].total += advance.advance_amount,
            None => {
                index.insert(advance.employee_name.as_str(), rows.len());
                rows.push(OutstandingAdvance {
                    employee_name: advance.employee_name.clone(),
                    total: advance.advance_amount,
                });
            }
        }
    }

    rows.retain(|row| row.total > 0);
    rows
}

/// Returns the net outstanding advance for one employee.
///
/// Sums every ledger entry whose name matches exactly. A settled or
/// unknown employee nets to zero (or below); the payslip flow treats
/// anything not strictly positive as "no active advance".
pub fn outstanding_for(ledger: &[Advance], employee_name: &str) -> i64 {
    ledger
        .iter()
        .filter(|a| a.employee_name == employee_name)
        .map(|a| a.advance_amount)
        .sum()
}
