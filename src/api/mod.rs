//! HTTP API module for the Salary Manager service.
//!
//! This module provides the REST endpoints the payroll administration
//! front end drives: employee onboarding and listing, advance recording
//! and aggregation, payslip generation, dashboard stats and admin
//! session management.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    GenerateAdvanceRequest, GeneratePayslipRequest, LoginRequest, OnboardEmployeeRequest,
    UpdateWageRequest,
};
pub use response::{ApiError, CreatedBody, DashboardStats, DataBody, LoginBody, SessionBody};
pub use state::AppState;
