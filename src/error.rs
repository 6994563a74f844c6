//! Error types returned by ledger and knowledge base operations.

use serde_json::{Value, json};
use thiserror::Error;

use crate::model::leave_request::LeaveStatus;

pub type LedgerResult<T> = Result<T, LedgerError>;

#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    /// Referenced employee, request or policy does not exist.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// Date string is not a `YYYY-MM-DD` calendar date.
    #[error("Invalid date '{value}'. Use YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("End date {end} is before start date {start}")]
    InvalidRange { start: String, end: String },

    /// Decision attempted on a request that already left `Pending`.
    #[error("Request {request_id} is already {status}")]
    InvalidState {
        request_id: String,
        status: LeaveStatus,
    },

    #[error(
        "Insufficient leave balance. Available: {available}, Requested: {requested}, Short by: {shortfall}"
    )]
    InsufficientBalance {
        available: u32,
        requested: u32,
        shortfall: u32,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl LedgerError {
    pub fn employee_not_found(id: &str) -> Self {
        Self::NotFound {
            entity: "Employee",
            id: id.to_string(),
        }
    }

    pub fn request_not_found(id: &str) -> Self {
        Self::NotFound {
            entity: "Request",
            id: id.to_string(),
        }
    }

    pub fn policy_not_found(id: &str) -> Self {
        Self::NotFound {
            entity: "Policy",
            id: id.to_string(),
        }
    }

    pub fn insufficient_balance(available: u32, requested: u32) -> Self {
        Self::InsufficientBalance {
            available,
            requested,
            shortfall: requested.saturating_sub(available),
        }
    }

    /// HTTP status code used when the error is rendered by the API layer.
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::InvalidDate { .. } | Self::InvalidRange { .. } | Self::InvalidInput(_) => 400,
            Self::InvalidState { .. } => 409,
            Self::InsufficientBalance { .. } => 422,
        }
    }

    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::InvalidDate { .. } => "INVALID_DATE",
            Self::InvalidRange { .. } => "INVALID_RANGE",
            Self::InvalidState { .. } => "INVALID_STATE",
            Self::InsufficientBalance { .. } => "INSUFFICIENT_BALANCE",
            Self::InvalidInput(_) => "INVALID_INPUT",
        }
    }

    /// Structured fields a caller can act on without parsing the message.
    pub fn details(&self) -> Option<Value> {
        match self {
            Self::InsufficientBalance {
                available,
                requested,
                shortfall,
            } => Some(json!({
                "available": available,
                "requested": requested,
                "shortfall": shortfall,
            })),
            Self::InvalidState { request_id, status } => Some(json!({
                "request_id": request_id,
                "status": status,
            })),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Value {
        let mut body = json!({
            "error": self.to_string(),
            "code": self.error_code(),
        });
        if let Some(details) = self.details() {
            body["details"] = details;
        }
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_http_status() {
        assert_eq!(LedgerError::employee_not_found("E1").http_status(), 404);
        assert_eq!(
            LedgerError::InvalidDate { value: "x".into() }.http_status(),
            400
        );
        assert_eq!(
            LedgerError::InvalidRange {
                start: "2024-01-02".into(),
                end: "2024-01-01".into()
            }
            .http_status(),
            400
        );
        assert_eq!(
            LedgerError::InvalidState {
                request_id: "REQ0001".into(),
                status: LeaveStatus::Approved
            }
            .http_status(),
            409
        );
        assert_eq!(LedgerError::insufficient_balance(2, 5).http_status(), 422);
        assert_eq!(LedgerError::InvalidInput(String::new()).http_status(), 400);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            LedgerError::employee_not_found("EMP009").to_string(),
            "Employee EMP009 not found"
        );
        assert_eq!(
            LedgerError::InvalidState {
                request_id: "REQ0001".into(),
                status: LeaveStatus::Rejected
            }
            .to_string(),
            "Request REQ0001 is already Rejected"
        );
        assert_eq!(
            LedgerError::insufficient_balance(2, 5).to_string(),
            "Insufficient leave balance. Available: 2, Requested: 5, Short by: 3"
        );
    }

    #[test]
    fn test_insufficient_balance_details() {
        let body = LedgerError::insufficient_balance(4, 10).to_json();
        assert_eq!(body["code"], "INSUFFICIENT_BALANCE");
        assert_eq!(body["details"]["shortfall"], 6);
        assert_eq!(body["details"]["available"], 4);
    }

    #[test]
    fn test_not_found_has_no_details() {
        let body = LedgerError::request_not_found("REQ0042").to_json();
        assert_eq!(body["code"], "NOT_FOUND");
        assert!(body.get("details").is_none());
    }
}
