//! Response types for the Salary Manager API.
//!
//! Success bodies wrap their payload in `{ "data": ... }` (creations add
//! a `msg`); failures are `{ "msg": "..." }` with an appropriate status.
//! This module also maps [`PayrollError`] onto HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::PayrollError;

/// API error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable failure message.
    pub msg: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// Success body carrying a `data` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataBody<T> {
    /// The payload.
    pub data: T,
}

/// Creation body carrying a confirmation message and the created record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedBody<T> {
    /// Confirmation message.
    pub msg: String,
    /// The created record.
    pub data: T,
}

/// Body of a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginBody {
    /// The issued session token (also set as an HttpOnly cookie).
    pub token: String,
    /// The canonical admin identifier, echoed for client-side caching.
    pub admin_id: String,
}

/// Body of a successful session probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionBody {
    /// The admin the session belongs to.
    pub admin_id: String,
}

/// The dashboard headline figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Number of onboarded employees.
    pub total_employees: usize,
    /// Sum of positive advance amounts dated in the current calendar month.
    pub advances_this_month: i64,
    /// Sum of final payouts of slips generated for the current month.
    pub total_payout_this_month: i64,
    /// Employees without a payslip for the current month.
    pub pending_payslips: usize,
}

/// A normalized date-entry value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedDate {
    /// The separator-formatted result.
    pub value: String,
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<PayrollError> for ApiErrorResponse {
    fn from(error: PayrollError) -> Self {
        let status = match error {
            PayrollError::ConfigNotFound { .. } | PayrollError::ConfigParseError { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            PayrollError::EmployeeExists { .. } => StatusCode::CONFLICT,
            PayrollError::EmployeeNotFound { .. } => StatusCode::NOT_FOUND,
            PayrollError::InvalidEmployee { .. }
            | PayrollError::ApproverNotRecognized { .. }
            | PayrollError::InvalidMonth { .. }
            | PayrollError::DaysOutOfRange { .. }
            | PayrollError::SetOffOutOfRange { .. } => StatusCode::BAD_REQUEST,
            PayrollError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        };

        ApiErrorResponse {
            status,
            error: ApiError::new(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serializes_as_msg() {
        let error = ApiError::new("Employee not found: GHOST");
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, r#"{"msg":"Employee not found: GHOST"}"#);
    }

    #[test]
    fn test_data_body_wraps_payload() {
        let body = DataBody { data: vec![1, 2, 3] };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response: ApiErrorResponse = PayrollError::EmployeeNotFound {
            name: "GHOST".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert!(response.error.msg.contains("GHOST"));
    }

    #[test]
    fn test_duplicate_maps_to_409() {
        let response: ApiErrorResponse = PayrollError::EmployeeExists {
            name: "AMIT SINGH".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::CONFLICT);
    }

    #[test]
    fn test_validation_failures_map_to_400() {
        let response: ApiErrorResponse = PayrollError::DaysOutOfRange { days: 31, max: 28 }.into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);

        let response: ApiErrorResponse = PayrollError::SetOffOutOfRange {
            set_off: 9000,
            pending: 5000,
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_bad_credentials_map_to_401() {
        let response: ApiErrorResponse = PayrollError::InvalidCredentials.into();
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_dashboard_stats_wire_shape() {
        let stats = DashboardStats {
            total_employees: 12,
            advances_this_month: 35000,
            total_payout_this_month: 680000,
            pending_payslips: 3,
        };

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["totalEmployees"], 12);
        assert_eq!(json["advancesThisMonth"], 35000);
        assert_eq!(json["totalPayoutThisMonth"], 680000);
        assert_eq!(json["pendingPayslips"], 3);
    }
}
