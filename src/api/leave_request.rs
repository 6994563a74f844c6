use crate::model::request::{ApproveLeave, CreateLeave, LeaveFilter, RejectLeave};
use crate::state::AppState;
use actix_web::{HttpResponse, Responder, web};

use super::body::json_or_default;

/* =========================
Submit leave request
========================= */
#[utoipa::path(
    post,
    path = "/api/v1/leave",
    request_body(
        content = CreateLeave,
        description = "Leave request payload",
        content_type = "application/json"
    ),
    responses(
        (
            status = 200,
            description = "Leave request submitted in Pending status",
            body = crate::model::leave_request::LeaveRequest
        ),
        (status = 400, description = "Malformed date or end before start"),
        (status = 404, description = "Employee not found"),
        (status = 422, description = "Insufficient balance", body = Object, example = json!({
            "error": "Insufficient leave balance. Available: 2, Requested: 3, Short by: 1",
            "code": "INSUFFICIENT_BALANCE",
            "details": { "available": 2, "requested": 3, "shortfall": 1 }
        }))
    ),
    tag = "Leave"
)]
pub async fn create_leave(
    state: web::Data<AppState>,
    payload: web::Json<CreateLeave>,
) -> actix_web::Result<impl Responder> {
    let mut store = state.lock()?;
    let request = store.ledger.request_leave(
        &payload.employee_id,
        &payload.start_date,
        &payload.end_date,
        &payload.leave_type,
        &payload.reason,
    )?;

    Ok(HttpResponse::Ok().json(request))
}

/* =========================
Approve leave
========================= */
#[utoipa::path(
    put,
    path = "/api/v1/leave/{request_id}/approve",
    params(
        ("request_id" = String, Path, description = "ID of the leave request to approve")
    ),
    request_body(content = ApproveLeave, description = "Optional approver, defaults to MANAGER"),
    responses(
        (
            status = 200,
            description = "Leave approved and balance deducted",
            body = crate::model::report::DecisionResponse
        ),
        (status = 400, description = "Malformed JSON body"),
        (status = 404, description = "Leave request not found"),
        (
            status = 409,
            description = "Leave request already decided",
            body = Object,
            example = json!({
                "error": "Request REQ0001 is already Approved",
                "code": "INVALID_STATE",
                "details": { "request_id": "REQ0001", "status": "Approved" }
            })
        ),
        (status = 422, description = "Balance no longer covers the request")
    ),
    tag = "Leave"
)]
pub async fn approve_leave(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> actix_web::Result<impl Responder> {
    let request_id = path.into_inner();
    let payload: ApproveLeave = json_or_default(&body)?;

    let mut store = state.lock()?;
    let decision = store.approve_leave(&request_id, &payload)?;

    Ok(HttpResponse::Ok().json(decision))
}

/* =========================
Reject leave
========================= */
#[utoipa::path(
    put,
    path = "/api/v1/leave/{request_id}/reject",
    params(
        ("request_id" = String, Path, description = "ID of the leave request to reject")
    ),
    request_body(content = RejectLeave, description = "Optional reason and approver"),
    responses(
        (
            status = 200,
            description = "Leave rejected",
            body = crate::model::report::DecisionResponse
        ),
        (status = 400, description = "Malformed JSON body"),
        (status = 404, description = "Leave request not found"),
        (status = 409, description = "Leave request already decided")
    ),
    tag = "Leave"
)]
pub async fn reject_leave(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> actix_web::Result<impl Responder> {
    let request_id = path.into_inner();
    let payload: RejectLeave = json_or_default(&body)?;

    let mut store = state.lock()?;
    let decision = store.reject_leave(&request_id, &payload)?;

    Ok(HttpResponse::Ok().json(decision))
}

/// for getting a leave request by id
#[utoipa::path(
    get,
    path = "/api/v1/leave/{request_id}",
    params(
        ("request_id" = String, Path, description = "ID of the leave request to fetch")
    ),
    responses(
        (
            status = 200,
            description = "Leave request found",
            body = crate::model::leave_request::LeaveRequest
        ),
        (status = 404, description = "Leave request not found", body = Object, example = json!({
            "error": "Request REQ0042 not found",
            "code": "NOT_FOUND"
        }))
    ),
    tag = "Leave"
)]
pub async fn get_leave(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    let request_id = path.into_inner();
    let store = state.lock()?;

    Ok(HttpResponse::Ok().json(store.ledger.get_request(&request_id)?))
}

/// for listing leave requests in submission order
#[utoipa::path(
    get,
    path = "/api/v1/leave",
    params(LeaveFilter),
    responses(
        (
            status = 200,
            description = "Leave requests matching the status filter",
            body = Vec<crate::model::leave_request::LeaveRequest>
        ),
        (status = 400, description = "Unknown status filter")
    ),
    tag = "Leave"
)]
pub async fn leave_list(
    state: web::Data<AppState>,
    query: web::Query<LeaveFilter>,
) -> actix_web::Result<impl Responder> {
    let filter = query.parse()?;
    let store = state.lock()?;

    Ok(HttpResponse::Ok().json(store.ledger.view_all_requests(filter)))
}
