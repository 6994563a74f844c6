use crate::state::AppState;
use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;

/// Leave statistics for one department ("All" for every department)
#[utoipa::path(
    get,
    path = "/api/v1/departments/{department}/summary",
    params(
        ("department" = String, Path, description = "Department name, case-insensitive, or All")
    ),
    responses(
        (
            status = 200,
            description = "Department aggregate",
            body = crate::model::report::DepartmentSummary
        )
    ),
    tag = "Admin"
)]
pub async fn department_summary(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    let department = path.into_inner();
    let store = state.lock()?;

    Ok(HttpResponse::Ok().json(store.ledger.department_summary(&department)))
}

#[utoipa::path(
    get,
    path = "/api/v1/stats",
    responses(
        (
            status = 200,
            description = "Overall system statistics",
            body = crate::model::report::SystemStats
        )
    ),
    tag = "Admin"
)]
pub async fn system_stats(state: web::Data<AppState>) -> actix_web::Result<impl Responder> {
    let store = state.lock()?;

    Ok(HttpResponse::Ok().json(store.system_stats()))
}

#[get("/system/info")]
pub async fn system_info(state: web::Data<AppState>) -> actix_web::Result<impl Responder> {
    let store = state.lock()?;

    Ok(HttpResponse::Ok().json(json!({
        "name": "Leave Management System",
        "version": env!("CARGO_PKG_VERSION"),
        "features": [
            "Employee Management",
            "Leave Request Processing",
            "Policy Knowledge Base",
            "Document Search",
            "Department Analytics"
        ],
        "stats": store.system_stats(),
    })))
}

#[get("/help/quick-start")]
pub async fn quick_start() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "title": "Leave Management System - Quick Start",
        "steps": [
            "1. Register employees with register_employee",
            "2. Add policy documents with add_policy_document",
            "3. Submit leave requests with request_leave",
            "4. Ask policy questions with ask_policy_question",
            "5. Approve/reject requests with approve_leave or reject_leave",
            "6. Check balances with check_balance"
        ],
        "example_policy_question": "How many sick days am I entitled to?",
        "example_search": "search_policies(query = 'annual leave entitlement')"
    }))
}
