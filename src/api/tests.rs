use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, test};
use chrono::NaiveDate;
use serde_json::{Value, json};

use crate::config::Config;
use crate::ledger::clock::FixedClock;
use crate::routes::{build_limiter, configure};
use crate::seed::load_demo_data;
use crate::state::{AppState, Store};

fn test_config() -> Config {
    Config::from_lookup(|name| match name {
        "RATE_API_PER_MIN" => Some("0".to_string()),
        _ => None,
    })
    .unwrap()
}

fn empty_state() -> Data<AppState> {
    let clock = FixedClock::on(NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
    Data::new(AppState::new(Store::new(Box::new(clock))))
}

fn seeded_state() -> Data<AppState> {
    let state = empty_state();
    load_demo_data(&mut state.lock().unwrap()).unwrap();
    state
}

macro_rules! app {
    ($state:expr) => {{
        let config = test_config();
        let limiter = Arc::new(build_limiter(config.rate_api_per_min).unwrap());
        test::init_service(
            App::new()
                .wrap(NormalizePath::trim())
                .app_data($state.clone())
                .configure(|cfg| configure(cfg, &config, limiter)),
        )
        .await
    }};
}

#[actix_web::test]
async fn register_request_and_approve_over_http() {
    let state = empty_state();
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/api/v1/employees")
        .set_json(json!({
            "employee_id": "EMP004",
            "name": "David Wilson",
            "email": "david@company.com",
            "department": "Engineering"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["leave_balance"], 20);
    assert_eq!(body["created"], true);

    let req = test::TestRequest::post()
        .uri("/api/v1/leave")
        .set_json(json!({
            "employee_id": "EMP004",
            "start_date": "2024-12-25",
            "end_date": "2024-12-27",
            "reason": "Christmas holiday"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["request_id"], "REQ0001");
    assert_eq!(body["days"], 3);
    assert_eq!(body["status"], "Pending");
    assert_eq!(body["submitted_date"], "2024-12-01");

    // approving without a body falls back to the default approver
    let req = test::TestRequest::put()
        .uri("/api/v1/leave/REQ0001/approve")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["request"]["status"], "Approved");
    assert_eq!(body["request"]["decided_by"], "MANAGER");
    assert_eq!(body["leave_balance"], 17);

    let req = test::TestRequest::get()
        .uri("/api/v1/employees/EMP004/balance")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["leave_balance"], 17);
    assert_eq!(body["days_used"], 3);
}

#[actix_web::test]
async fn unknown_employee_is_404_with_code() {
    let state = empty_state();
    let app = app!(state);

    let req = test::TestRequest::get()
        .uri("/api/v1/employees/EMP404")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(body["error"], "Employee EMP404 not found");
}

#[actix_web::test]
async fn second_decision_is_409() {
    let state = seeded_state();
    let app = app!(state);

    // REQ0001 is approved by the demo data
    let req = test::TestRequest::put()
        .uri("/api/v1/leave/REQ0001/reject")
        .set_json(json!({ "reason": "too late" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "INVALID_STATE");
    assert_eq!(body["details"]["status"], "Approved");
}

#[actix_web::test]
async fn overdrawn_request_is_422_and_not_stored() {
    let state = empty_state();
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/api/v1/employees")
        .set_json(json!({ "employee_id": "EMP001", "name": "Alice Johnson" }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/leave")
        .set_json(json!({
            "employee_id": "EMP001",
            "start_date": "2025-01-01",
            "end_date": "2025-01-31"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "INSUFFICIENT_BALANCE");
    assert_eq!(body["details"]["available"], 20);
    assert_eq!(body["details"]["requested"], 31);
    assert_eq!(body["details"]["shortfall"], 11);

    assert_eq!(state.lock().unwrap().ledger.request_count(), 0);
}

#[actix_web::test]
async fn malformed_date_is_400() {
    let state = seeded_state();
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/api/v1/leave")
        .set_json(json!({
            "employee_id": "EMP001",
            "start_date": "2024-02-30",
            "end_date": "2024-03-01"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "INVALID_DATE");
}

#[actix_web::test]
async fn leave_list_filters_by_status() {
    let state = seeded_state();
    let app = app!(state);

    let req = test::TestRequest::get()
        .uri("/api/v1/leave?status=pending")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["request_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["REQ0002", "REQ0003"]);

    let req = test::TestRequest::get()
        .uri("/api/v1/leave?status=Cancelled")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn department_summary_and_stats() {
    let state = seeded_state();
    let app = app!(state);

    let req = test::TestRequest::get()
        .uri("/api/v1/departments/engineering/summary")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total_employees"], 2);

    let req = test::TestRequest::get().uri("/api/v1/stats").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total_employees"], 4);
    assert_eq!(body["total_policies"], 4);
    assert_eq!(body["approved_requests"], 1);
}

#[actix_web::test]
async fn policy_search_and_lookup() {
    let state = seeded_state();
    let app = app!(state);

    let req = test::TestRequest::get()
        .uri("/api/v1/policies/search?query=sick")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body[0]["policy_id"], "POL002");

    let req = test::TestRequest::get()
        .uri("/api/v1/policies/POL404")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn tools_dispatch_over_http() {
    let state = seeded_state();
    let app = app!(state);

    let req = test::TestRequest::get().uri("/api/v1/tools").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 17);

    let req = test::TestRequest::post()
        .uri("/api/v1/tools/check_balance")
        .set_json(json!({ "employee_id": "EMP001" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["leave_balance"], 15);

    let req = test::TestRequest::post()
        .uri("/api/v1/tools/system_stats")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["pending_requests"], 2);

    let req = test::TestRequest::post()
        .uri("/api/v1/tools/delete_employee")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "UNKNOWN_TOOL");

    let req = test::TestRequest::post()
        .uri("/api/v1/tools/request_leave")
        .set_json(json!({ "employee_id": "EMP001" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn malformed_decision_body_is_400_and_leaves_request_pending() {
    let state = seeded_state();
    let app = app!(state);

    let req = test::TestRequest::put()
        .uri("/api/v1/leave/REQ0002/approve")
        .set_json(json!({ "approver_id": 42 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "INVALID_INPUT");

    let req = test::TestRequest::put()
        .uri("/api/v1/leave/REQ0002/reject")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"reason": "busy""#)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let store = state.lock().unwrap();
    assert!(store.ledger.get_request("REQ0002").unwrap().is_pending());
    assert_eq!(store.ledger.balance_of("EMP002"), Some(20));
}

#[actix_web::test]
async fn decision_body_without_content_type_is_still_read() {
    let state = seeded_state();
    let app = app!(state);

    let req = test::TestRequest::put()
        .uri("/api/v1/leave/REQ0002/approve")
        .set_payload(r#"{"approver_id": "HR01"}"#)
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["request"]["decided_by"], "HR01");
    assert_eq!(body["leave_balance"], 15);
}

#[actix_web::test]
async fn truncated_tool_arguments_are_400() {
    let state = seeded_state();
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/api/v1/tools/view_all_requests")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"status": "Pending""#)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "INVALID_ARGUMENTS");

    let req = test::TestRequest::post()
        .uri("/api/v1/tools/approve_leave")
        .set_json(json!({ "request_id": "REQ0002", "approver_id": 42 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(
        state
            .lock()
            .unwrap()
            .ledger
            .get_request("REQ0002")
            .unwrap()
            .is_pending()
    );

    let req = test::TestRequest::post()
        .uri("/api/v1/tools/view_all_requests")
        .set_payload(r#"{"status": "Pending"}"#)
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}
