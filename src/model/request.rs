//! Argument payloads shared by the HTTP handlers and the tool dispatcher.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::LedgerError;
use crate::knowledge::DEFAULT_MAX_RESULTS;
use crate::model::leave_request::StatusFilter;

fn default_department() -> String {
    "General".to_string()
}

fn default_scope() -> String {
    "All".to_string()
}

fn default_leave_type() -> String {
    "Annual".to_string()
}

fn default_approver() -> String {
    "MANAGER".to_string()
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

/* =========================
Employees
========================= */

#[derive(Deserialize, Serialize, ToSchema)]
pub struct RegisterEmployee {
    #[schema(example = "EMP004")]
    pub employee_id: String,
    #[schema(example = "David Wilson")]
    pub name: String,
    #[schema(example = "david@company.com", format = "email")]
    #[serde(default)]
    pub email: String,
    #[schema(example = "Engineering")]
    #[serde(default = "default_department")]
    pub department: String,
}

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct EmployeeQuery {
    /// Filter by department, case-insensitive
    #[schema(example = "Engineering")]
    pub department: Option<String>,
}

/// Arguments naming a single employee.
#[derive(Deserialize, ToSchema)]
pub struct EmployeeRef {
    #[schema(example = "EMP001")]
    pub employee_id: String,
}

#[derive(Deserialize, ToSchema)]
pub struct AddBalance {
    /// days to add, must be positive
    #[schema(example = 5)]
    pub days: i64,
}

#[derive(Deserialize, ToSchema)]
pub struct DepartmentRef {
    /// Department name, or All
    #[schema(example = "Engineering")]
    #[serde(default = "default_scope")]
    pub department: String,
}

/* =========================
Leave requests
========================= */

#[derive(Deserialize, ToSchema)]
pub struct CreateLeave {
    #[schema(example = "EMP004")]
    pub employee_id: String,
    /// YYYY-MM-DD
    #[schema(example = "2024-12-25", format = "date")]
    pub start_date: String,
    /// YYYY-MM-DD, inclusive
    #[schema(example = "2024-12-27", format = "date")]
    pub end_date: String,
    /// Annual, Sick, Emergency, Unpaid
    #[schema(example = "Annual")]
    #[serde(default = "default_leave_type")]
    pub leave_type: String,
    #[schema(example = "Christmas holiday")]
    #[serde(default)]
    pub reason: String,
}

#[derive(Deserialize, ToSchema)]
pub struct ApproveLeave {
    #[schema(example = "MANAGER")]
    #[serde(default = "default_approver")]
    pub approver_id: String,
}

impl Default for ApproveLeave {
    fn default() -> Self {
        Self {
            approver_id: default_approver(),
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct RejectLeave {
    #[schema(example = "Team offsite that week")]
    #[serde(default)]
    pub reason: String,
    #[schema(example = "MANAGER")]
    #[serde(default = "default_approver")]
    pub approver_id: String,
}

impl Default for RejectLeave {
    fn default() -> Self {
        Self {
            reason: String::new(),
            approver_id: default_approver(),
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct LeaveFilter {
    /// All, Pending, Approved or Rejected (default All)
    #[schema(example = "Pending")]
    pub status: Option<String>,
}

impl LeaveFilter {
    pub fn parse(&self) -> Result<StatusFilter, LedgerError> {
        match self.status.as_deref() {
            None => Ok(StatusFilter::All),
            Some(raw) => raw.trim().parse().map_err(|_| {
                LedgerError::InvalidInput(format!(
                    "unknown status '{raw}'. Allowed: All, Pending, Approved, Rejected"
                ))
            }),
        }
    }
}

/* =========================
Policies
========================= */

#[derive(Deserialize, ToSchema)]
pub struct AddPolicy {
    #[schema(example = "POL005")]
    pub policy_id: String,
    #[schema(example = "Parental Leave Policy")]
    pub title: String,
    pub content: String,
    /// General, Annual, Sick, Emergency, Remote, Benefits
    #[schema(example = "Benefits")]
    #[serde(default = "default_department")]
    pub category: String,
}

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct PolicyQuery {
    #[schema(example = "Sick")]
    pub category: Option<String>,
}

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct SearchPolicies {
    #[schema(example = "annual leave entitlement")]
    pub query: String,
    pub category: Option<String>,
    #[schema(example = 3)]
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

#[derive(Deserialize, ToSchema)]
pub struct AskQuestion {
    #[schema(example = "How many sick days am I entitled to?")]
    pub question: String,
    pub category: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct PolicyRef {
    #[schema(example = "POL001")]
    pub policy_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leave_filter_parses_case_insensitively() {
        let filter = LeaveFilter {
            status: Some(" pending ".to_string()),
        };
        assert_eq!(filter.parse().unwrap(), StatusFilter::Pending);
        assert_eq!(LeaveFilter::default().parse().unwrap(), StatusFilter::All);
    }

    #[test]
    fn leave_filter_rejects_unknown_status() {
        let filter = LeaveFilter {
            status: Some("Cancelled".to_string()),
        };
        assert!(matches!(filter.parse(), Err(LedgerError::InvalidInput(_))));
    }

    #[test]
    fn decision_payloads_default_to_manager() {
        let approve: ApproveLeave = serde_json::from_str("{}").unwrap();
        assert_eq!(approve.approver_id, "MANAGER");
        let reject: RejectLeave = serde_json::from_str(r#"{"reason": "busy"}"#).unwrap();
        assert_eq!(reject.approver_id, "MANAGER");
        assert_eq!(reject.reason, "busy");
    }
}
