use crate::model::request::{AddBalance, EmployeeQuery, RegisterEmployee};
use crate::state::AppState;
use actix_web::{HttpResponse, Responder, web};

/// Register (or re-register) an employee
#[utoipa::path(
    post,
    path = "/api/v1/employees",
    request_body = RegisterEmployee,
    responses(
        (
            status = 200,
            description = "Employee registered",
            body = crate::model::report::Registration
        ),
        (status = 400, description = "Empty employee id", body = Object, example = json!({
            "error": "Invalid input: employee_id must not be empty",
            "code": "INVALID_INPUT"
        }))
    ),
    tag = "Employee"
)]
pub async fn register_employee(
    state: web::Data<AppState>,
    payload: web::Json<RegisterEmployee>,
) -> actix_web::Result<impl Responder> {
    let mut store = state.lock()?;
    let registration = store.ledger.register_employee(
        &payload.employee_id,
        &payload.name,
        &payload.email,
        &payload.department,
    )?;

    Ok(HttpResponse::Ok().json(registration))
}

#[utoipa::path(
    get,
    path = "/api/v1/employees",
    params(EmployeeQuery),
    responses(
        (
            status = 200,
            description = "Employees in registration order",
            body = Vec<crate::model::report::EmployeeView>
        )
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    state: web::Data<AppState>,
    query: web::Query<EmployeeQuery>,
) -> actix_web::Result<impl Responder> {
    let store = state.lock()?;
    let employees = store.ledger.list_employees(query.department.as_deref());

    Ok(HttpResponse::Ok().json(employees))
}

/// Get employee details including leave balance
#[utoipa::path(
    get,
    path = "/api/v1/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = crate::model::report::EmployeeView),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "error": "Employee EMP404 not found",
            "code": "NOT_FOUND"
        }))
    ),
    tag = "Employee"
)]
pub async fn view_employee(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();
    let store = state.lock()?;

    Ok(HttpResponse::Ok().json(store.ledger.view_employee(&employee_id)?))
}

#[utoipa::path(
    get,
    path = "/api/v1/employees/{employee_id}/balance",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Current balance", body = crate::model::report::BalanceReport),
        (status = 404, description = "Employee not found")
    ),
    tag = "Employee"
)]
pub async fn check_balance(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();
    let store = state.lock()?;

    Ok(HttpResponse::Ok().json(store.ledger.check_balance(&employee_id)?))
}

/// Administrative top-up of an employee's balance
#[utoipa::path(
    post,
    path = "/api/v1/employees/{employee_id}/balance",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    request_body = AddBalance,
    responses(
        (
            status = 200,
            description = "Balance updated",
            body = crate::model::report::BalanceAdjustment
        ),
        (status = 400, description = "days is not a positive integer"),
        (status = 404, description = "Employee not found")
    ),
    tag = "Employee"
)]
pub async fn add_leave_balance(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<AddBalance>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();
    let mut store = state.lock()?;
    let adjustment = store.ledger.add_leave_balance(&employee_id, payload.days)?;

    Ok(HttpResponse::Ok().json(adjustment))
}

/// Leave requests of one employee in submission order
#[utoipa::path(
    get,
    path = "/api/v1/employees/{employee_id}/leave",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (
            status = 200,
            description = "Requests of the employee",
            body = Vec<crate::model::leave_request::LeaveRequest>
        )
    ),
    tag = "Employee"
)]
pub async fn view_my_requests(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();
    let store = state.lock()?;

    Ok(HttpResponse::Ok().json(store.ledger.view_my_requests(&employee_id)))
}
