use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;

use crate::error::LedgerError;
use crate::tools::ToolError;

impl ResponseError for LedgerError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(ResponseError::status_code(self)).json(self.to_json())
    }
}

impl ResponseError for ToolError {
    fn status_code(&self) -> StatusCode {
        match self {
            ToolError::UnknownTool(_) => StatusCode::NOT_FOUND,
            ToolError::InvalidArguments { .. } => StatusCode::BAD_REQUEST,
            ToolError::Ledger(e) => ResponseError::status_code(e),
            ToolError::Serialize(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ToolError::Ledger(e) => e.to_json(),
            ToolError::UnknownTool(_) => {
                json!({ "error": self.to_string(), "code": "UNKNOWN_TOOL" })
            }
            ToolError::InvalidArguments { .. } => {
                json!({ "error": self.to_string(), "code": "INVALID_ARGUMENTS" })
            }
            ToolError::Serialize(e) => {
                tracing::error!(error = %e, "Failed to serialize tool result");
                json!({ "error": "Internal Server Error", "code": "INTERNAL_ERROR" })
            }
        };
        HttpResponse::build(ResponseError::status_code(self)).json(body)
    }
}
