//! Core data models for the Salary Manager service.
//!
//! This module contains the canonical record types used throughout the
//! service. The API boundary maps every accepted wire shape onto these
//! types; nothing downstream probes alternative field spellings.

mod advance;
mod employee;
mod month;
mod payslip;

pub use advance::{Advance, AdvanceStatus, OutstandingAdvance};
pub use employee::{Employee, Role, WorkingUnit};
pub use month::PayMonth;
pub use payslip::Payslip;
