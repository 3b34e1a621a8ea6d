//! HTTP request handlers for the Salary Manager API.
//!
//! This module contains the handler functions for all API endpoints.
//! Every failure is converted to a `{ "msg": ... }` body at this
//! boundary; nothing below it knows about HTTP.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use chrono::Utc;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{Advance, AdvanceStatus, PayMonth, Payslip, Role, WorkingUnit};
use crate::payroll::{
    SortOrder, aggregate_outstanding, compare_entry_dates, days_in_month, final_payout, narrow_by,
    normalize_date_entry, outstanding_for, parse_entry_date, rank_by, salary_payout, search_by,
};

use super::request::{
    AdvanceListQuery, EmployeeListQuery, GenerateAdvanceRequest, GeneratePayslipRequest,
    LoginRequest, NormalizeDateQuery, OnboardEmployeeRequest, OutstandingQuery, UpdateWageRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, CreatedBody, DashboardStats, DataBody, LoginBody, NormalizedDate,
    SessionBody,
};
use super::state::AppState;
use crate::error::{PayrollError, PayrollResult};

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/employee/list-employee", get(list_employees))
        .route("/api/employee/add-employee", post(add_employee))
        .route("/api/employee/update-wage", put(update_wage))
        .route("/api/employee/delete-employee/:name", delete(delete_employee))
        .route("/api/advance/list-advance", get(list_advances))
        .route("/api/advance/generate-advance", post(generate_advance))
        .route("/api/advance/outstanding", get(outstanding_advances))
        .route("/api/slip/add-slip", post(add_slip))
        .route("/api/slip/list-slip", get(list_slips))
        .route("/api/dashboard/stats", get(dashboard_stats))
        .route("/api/util/normalize-date", get(normalize_date))
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(me))
        .route("/api/auth/logout", post(logout))
        .with_state(state)
}

/// Converts a JSON extraction rejection into the `{msg}` error shape.
fn rejection_response(rejection: JsonRejection) -> Response {
    let msg = match &rejection {
        JsonRejection::JsonDataError(err) => err.body_text(),
        JsonRejection::JsonSyntaxError(err) => format!("Invalid JSON syntax: {err}"),
        JsonRejection::MissingJsonContentType(_) => {
            "Content-Type must be application/json".to_string()
        }
        _ => "Failed to parse request body".to_string(),
    };
    warn!(error = %msg, "Rejected request body");
    (StatusCode::BAD_REQUEST, Json(ApiError::new(msg))).into_response()
}

/// Handler for GET /api/employee/list-employee.
///
/// Applies the pipeline stages in order (name search, role filter, unit
/// filter, wage sort), each over the previous stage's output.
async fn list_employees(
    State(state): State<AppState>,
    Query(query): Query<EmployeeListQuery>,
) -> impl IntoResponse {
    let employees = state.store().employees();

    let search = query.search.unwrap_or_default();
    let employees = search_by(employees, &search, |e| e.name.clone());

    let role = query
        .role
        .as_deref()
        .filter(|value| *value != "all")
        .and_then(|value| value.parse::<Role>().ok());
    let employees = narrow_by(employees, role, |e| e.role);

    let unit = query
        .unit
        .as_deref()
        .filter(|value| *value != "all")
        .and_then(|value| value.parse::<WorkingUnit>().ok());
    let mut employees = narrow_by(employees, unit, |e| e.unit);

    if query.sort.as_deref() == Some("wagePerDay") {
        let order = SortOrder::from_param(query.order.as_deref());
        rank_by(&mut employees, order, |a, b| {
            a.wage_per_day.cmp(&b.wage_per_day)
        });
    }

    Json(DataBody { data: employees })
}

/// Handler for POST /api/employee/add-employee.
async fn add_employee(
    State(state): State<AppState>,
    payload: Result<Json<OnboardEmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(rejection),
    };

    info!(correlation_id = %correlation_id, name = %request.name, "Onboarding employee");

    match state.store().add_employee(request.into()) {
        Ok(employee) => {
            info!(
                correlation_id = %correlation_id,
                code = %employee.code,
                "Employee onboarded"
            );
            (
                StatusCode::CREATED,
                Json(CreatedBody {
                    msg: "Employee onboarded successfully".to_string(),
                    data: employee,
                }),
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Onboarding failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for PUT /api/employee/update-wage.
async fn update_wage(
    State(state): State<AppState>,
    payload: Result<Json<UpdateWageRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(rejection),
    };

    match state.store().update_wage(&request.name, request.wage_per_day) {
        Ok(employee) => Json(CreatedBody {
            msg: "Wage updated successfully".to_string(),
            data: employee,
        })
        .into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for DELETE /api/employee/delete-employee/{name}.
async fn delete_employee(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    match state.store().remove_employee(&name) {
        Ok(employee) => {
            info!(name = %employee.name, code = %employee.code, "Employee removed");
            Json(json!({ "msg": "Employee removed successfully" })).into_response()
        }
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for GET /api/advance/list-advance.
///
/// Returns 404 when the ledger has no entries at all; this is the
/// contract clients already handle by treating 404 as an empty list.
async fn list_advances(
    State(state): State<AppState>,
    Query(query): Query<AdvanceListQuery>,
) -> Response {
    let advances = state.store().advances();
    if advances.is_empty() {
        return (
            StatusCode::NOT_FOUND,
            Json(ApiError::new("No advance records found")),
        )
            .into_response();
    }

    let search = query.search.unwrap_or_default();
    let mut advances = search_by(advances, &search, |a| a.employee_name.clone());

    let order = SortOrder::from_param(query.order.as_deref());
    rank_by(&mut advances, order, |a, b| {
        compare_entry_dates(&a.advance_date, &b.advance_date)
    });

    Json(DataBody { data: advances }).into_response()
}

/// Handler for POST /api/advance/generate-advance.
async fn generate_advance(
    State(state): State<AppState>,
    payload: Result<Json<GenerateAdvanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(rejection),
    };

    info!(
        correlation_id = %correlation_id,
        employee = %request.employee_name,
        amount = request.advance_amount,
        "Recording advance"
    );

    let employee = match state.store().find_employee(&request.employee_name) {
        Some(employee) => employee,
        None => {
            warn!(correlation_id = %correlation_id, "Advance for unknown employee");
            return ApiErrorResponse::from(PayrollError::EmployeeNotFound {
                name: request.employee_name,
            })
            .into_response();
        }
    };

    if !state.config().is_approver(&request.approved_by) {
        warn!(correlation_id = %correlation_id, approver = %request.approved_by, "Unknown approver");
        return ApiErrorResponse::from(PayrollError::ApproverNotRecognized {
            name: request.approved_by,
        })
        .into_response();
    }

    let advance = Advance {
        id: Uuid::new_v4(),
        employee_name: employee.name,
        unit: employee.unit,
        advance_date: normalize_date_entry(&request.advance_date, '-'),
        advance_amount: request.advance_amount,
        approved_by: request.approved_by,
        status: AdvanceStatus::Pending,
        generated_at: Utc::now(),
    };
    state.store().add_advance(advance.clone());

    (
        StatusCode::CREATED,
        Json(CreatedBody {
            msg: "Advance recorded successfully".to_string(),
            data: advance,
        }),
    )
        .into_response()
}

/// Handler for GET /api/advance/outstanding.
///
/// The aggregated positive-balance view. The search term matches the
/// employee name case-insensitively or the decimal rendering of the
/// total; an empty ledger is an empty list here, not a 404.
async fn outstanding_advances(
    State(state): State<AppState>,
    Query(query): Query<OutstandingQuery>,
) -> impl IntoResponse {
    let mut rows = aggregate_outstanding(&state.store().advances());

    if let Some(search) = query.search.filter(|s| !s.is_empty()) {
        let needle = search.to_lowercase();
        rows.retain(|row| {
            row.employee_name.to_lowercase().contains(&needle)
                || row.total.to_string().contains(&search)
        });
    }

    Json(DataBody { data: rows })
}

/// Validates a payslip submission and computes every derived field.
fn build_payslip(state: &AppState, request: GeneratePayslipRequest) -> PayrollResult<Payslip> {
    let employee = state.store().find_employee(&request.employee_name).ok_or(
        PayrollError::EmployeeNotFound {
            name: request.employee_name.clone(),
        },
    )?;

    let month: PayMonth = request.month.as_deref().unwrap_or_default().parse()?;

    let max_days = days_in_month(month.year, month.month);
    if request.days_present > max_days {
        return Err(PayrollError::DaysOutOfRange {
            days: request.days_present,
            max: max_days,
        });
    }

    // Pending balance comes from the ledger at generation time; a zero or
    // negative net counts as no active advance.
    let pending = outstanding_for(&state.store().advances(), &employee.name).max(0);
    if !(0..=pending).contains(&request.set_off_advance) {
        return Err(PayrollError::SetOffOutOfRange {
            set_off: request.set_off_advance,
            pending,
        });
    }

    let salary = salary_payout(request.days_present, employee.wage_per_day);

    Ok(Payslip {
        id: Uuid::new_v4(),
        employee_name: employee.name,
        employee_code: employee.code,
        month,
        working_unit: employee.unit,
        days_present: request.days_present,
        wage_per_day: employee.wage_per_day,
        salary_payout: salary,
        has_advance: pending > 0,
        pending_advance: pending,
        set_off_advance: request.set_off_advance,
        final_payout: final_payout(salary, request.set_off_advance),
        generated_at: Utc::now(),
    })
}

/// Handler for POST /api/slip/add-slip.
async fn add_slip(
    State(state): State<AppState>,
    payload: Result<Json<GeneratePayslipRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(rejection),
    };

    info!(
        correlation_id = %correlation_id,
        employee = %request.employee_name,
        days = request.days_present,
        "Generating payslip"
    );

    match build_payslip(&state, request) {
        Ok(payslip) => {
            state.store().add_payslip(payslip.clone());
            info!(
                correlation_id = %correlation_id,
                final_payout = payslip.final_payout,
                "Payslip generated"
            );
            (StatusCode::CREATED, Json(DataBody { data: payslip })).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Payslip generation failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /api/slip/list-slip.
async fn list_slips(State(state): State<AppState>) -> impl IntoResponse {
    Json(DataBody {
        data: state.store().payslips(),
    })
}

/// Handler for GET /api/dashboard/stats.
async fn dashboard_stats(State(state): State<AppState>) -> impl IntoResponse {
    let current = PayMonth::containing(Utc::now().date_naive());

    let employees = state.store().employees();
    let advances = state.store().advances();
    let payslips = state.store().payslips();

    let advances_this_month = advances
        .iter()
        .filter(|a| a.advance_amount > 0)
        .filter(|a| {
            parse_entry_date(&a.advance_date).map(PayMonth::containing) == Some(current)
        })
        .map(|a| a.advance_amount)
        .sum();

    let total_payout_this_month = payslips
        .iter()
        .filter(|slip| slip.month == current)
        .map(|slip| slip.final_payout)
        .sum();

    let pending_payslips = employees
        .iter()
        .filter(|employee| {
            !payslips
                .iter()
                .any(|slip| slip.employee_name == employee.name && slip.month == current)
        })
        .count();

    Json(DataBody {
        data: DashboardStats {
            total_employees: employees.len(),
            advances_this_month,
            total_payout_this_month,
            pending_payslips,
        },
    })
}

/// Handler for GET /api/util/normalize-date.
async fn normalize_date(Query(query): Query<NormalizeDateQuery>) -> impl IntoResponse {
    let separator = query
        .separator
        .as_deref()
        .and_then(|s| s.chars().next())
        .unwrap_or('-');
    let value = normalize_date_entry(query.value.as_deref().unwrap_or_default(), separator);

    Json(DataBody {
        data: NormalizedDate { value },
    })
}

/// Name of the session cookie set at login.
const SESSION_COOKIE: &str = "token";

/// Pulls the session token from the cookie, falling back to a bearer
/// header for clients that cached the login response's token.
fn session_token(jar: &CookieJar, headers: &HeaderMap) -> Option<String> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        return Some(cookie.value().to_string());
    }
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::to_string)
}

/// Handler for POST /api/auth/login.
async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(rejection),
    };

    let admin_id = match state
        .config()
        .verify_admin(&request.admin_id, &request.admin_password)
    {
        Ok(admin_id) => admin_id,
        Err(err) => {
            warn!(admin_id = %request.admin_id, "Login rejected");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let token = state.sessions().issue(&admin_id);
    info!(admin_id = %admin_id, "Admin signed in");

    let cookie = Cookie::build((SESSION_COOKIE, token.clone()))
        .path("/")
        .http_only(true)
        .build();

    (jar.add(cookie), Json(LoginBody { token, admin_id })).into_response()
}

/// Handler for GET /api/auth/me.
async fn me(State(state): State<AppState>, jar: CookieJar, headers: HeaderMap) -> Response {
    match session_token(&jar, &headers).and_then(|token| state.sessions().peek(&token)) {
        Some(admin_id) => Json(SessionBody { admin_id }).into_response(),
        None => (
            StatusCode::UNAUTHORIZED,
            Json(ApiError::new("No active session")),
        )
            .into_response(),
    }
}

/// Handler for POST /api/auth/logout.
async fn logout(State(state): State<AppState>, jar: CookieJar, headers: HeaderMap) -> Response {
    if let Some(token) = session_token(&jar, &headers) {
        state.sessions().revoke(&token);
    }

    let jar = jar.remove(Cookie::from(SESSION_COOKIE));
    (jar, StatusCode::NO_CONTENT).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/salary").expect("Failed to load config");
        AppState::new(config)
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_add_employee_returns_201_with_code() {
        let router = create_router(create_test_state());

        let (status, body) = send(
            router,
            post_json(
                "/api/employee/add-employee",
                json!({
                    "name": "Rahul Sharma",
                    "role": "Supervisor",
                    "wagePerDay": 950,
                    "unit": "Unit A"
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["name"], "RAHUL SHARMA");
        assert_eq!(body["data"]["employeeCode"], "EMP-0001");
    }

    #[tokio::test]
    async fn test_add_employee_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let (status, body) = send(
            router,
            Request::builder()
                .method("POST")
                .uri("/api/employee/add-employee")
                .header("Content-Type", "application/json")
                .body(Body::from("{invalid json"))
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["msg"].is_string());
    }

    #[tokio::test]
    async fn test_empty_advance_ledger_returns_404() {
        let router = create_router(create_test_state());

        let (status, body) = send(router, get_req("/api/advance/list-advance")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["msg"], "No advance records found");
    }

    #[tokio::test]
    async fn test_slip_for_unknown_employee_returns_404() {
        let router = create_router(create_test_state());

        let (status, body) = send(
            router,
            post_json(
                "/api/slip/add-slip",
                json!({
                    "employeeName": "GHOST",
                    "month": "2024-03",
                    "daysPresent": 10
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["msg"].as_str().unwrap().contains("GHOST"));
    }

    #[tokio::test]
    async fn test_normalize_date_endpoint() {
        let router = create_router(create_test_state());

        let (status, body) = send(
            router,
            get_req("/api/util/normalize-date?value=01122024"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["value"], "01-12-2024");
    }

    #[tokio::test]
    async fn test_login_rejects_bad_credentials() {
        let router = create_router(create_test_state());

        let (status, body) = send(
            router,
            post_json(
                "/api/auth/login",
                json!({"adminId": "admin", "adminPassword": "wrong"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["msg"], "Invalid admin credentials");
    }
}
