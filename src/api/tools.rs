use crate::state::AppState;
use crate::tools::{Tool, ToolError, dispatch};
use actix_web::{HttpResponse, Responder, web};
use serde_json::Value;

use super::body::is_blank;

/// List the callable tools with their keyword arguments
#[utoipa::path(
    get,
    path = "/api/v1/tools",
    responses(
        (status = 200, description = "Tool catalog", body = Vec<crate::tools::ToolSpec>)
    ),
    tag = "Tools"
)]
pub async fn list_tools() -> impl Responder {
    HttpResponse::Ok().json(Tool::catalog())
}

/// Invoke a tool by name with a JSON object of keyword arguments
#[utoipa::path(
    post,
    path = "/api/v1/tools/{name}",
    params(
        ("name" = String, Path, description = "Tool name, e.g. request_leave")
    ),
    request_body(content = Object, description = "Keyword arguments", example = json!({
        "employee_id": "EMP004",
        "start_date": "2024-12-25",
        "end_date": "2024-12-27"
    })),
    responses(
        (status = 200, description = "Result record of the operation", body = Object),
        (status = 400, description = "Missing, wrong-typed or malformed JSON arguments"),
        (status = 404, description = "Unknown tool or referenced record not found")
    ),
    tag = "Tools"
)]
pub async fn call_tool(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> actix_web::Result<impl Responder> {
    let tool = Tool::from_name(&path.into_inner())?;
    // an absent body means no arguments, a present one must be valid JSON
    let arguments = if is_blank(&body) {
        Value::Null
    } else {
        serde_json::from_slice::<Value>(&body)
            .map_err(|source| ToolError::InvalidArguments { tool, source })?
    };

    let mut store = state.lock()?;
    let result = dispatch(&mut store, tool, arguments)?;

    Ok(HttpResponse::Ok().json(result))
}
