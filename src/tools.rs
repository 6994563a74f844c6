//! Named tool invocations for an AI-assistant host.
//!
//! A host calls a tool by name with a JSON object of keyword arguments and
//! gets the operation's record back as JSON. Argument structs are the same
//! ones the HTTP handlers deserialize, so both surfaces accept identical
//! field names and defaults.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;
use utoipa::ToSchema;

use crate::error::LedgerError;
use crate::model::request::{
    AddBalance, AddPolicy, ApproveLeave, AskQuestion, CreateLeave, DepartmentRef, EmployeeQuery,
    EmployeeRef, LeaveFilter, PolicyQuery, PolicyRef, RegisterEmployee, RejectLeave,
    SearchPolicies,
};
use crate::state::Store;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Tool {
    RegisterEmployee,
    ViewEmployee,
    ListAllEmployees,
    RequestLeave,
    ApproveLeave,
    RejectLeave,
    CheckBalance,
    ViewAllRequests,
    ViewMyRequests,
    AddLeaveBalance,
    DepartmentSummary,
    SystemStats,
    AddPolicyDocument,
    SearchPolicies,
    AskPolicyQuestion,
    ListAllPolicies,
    GetPolicyById,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ToolSpec {
    #[schema(example = "request_leave")]
    pub name: String,
    pub description: String,
    /// keyword arguments, optional ones end with `?`
    pub arguments: Vec<String>,
}

impl Tool {
    pub fn from_name(name: &str) -> Result<Self, ToolError> {
        name.parse()
            .map_err(|_| ToolError::UnknownTool(name.to_string()))
    }

    pub fn description(self) -> &'static str {
        match self {
            Tool::RegisterEmployee => "Register a new employee, or update an existing one",
            Tool::ViewEmployee => "View employee details including leave balance",
            Tool::ListAllEmployees => "List all employees, optionally filtered by department",
            Tool::RequestLeave => "Submit a leave request. Date format: YYYY-MM-DD",
            Tool::ApproveLeave => "Approve a pending leave request and deduct the balance",
            Tool::RejectLeave => "Reject a pending leave request",
            Tool::CheckBalance => "Check leave balance for an employee",
            Tool::ViewAllRequests => {
                "View leave requests. Status: All, Pending, Approved, Rejected"
            }
            Tool::ViewMyRequests => "View all leave requests for a specific employee",
            Tool::AddLeaveBalance => "Add leave days to an employee's balance (admin)",
            Tool::DepartmentSummary => "Leave statistics by department, or All",
            Tool::SystemStats => "Overall system statistics",
            Tool::AddPolicyDocument => "Add a policy document to the knowledge base",
            Tool::SearchPolicies => "Search policy documents by keyword",
            Tool::AskPolicyQuestion => "Ask a question about leave policies",
            Tool::ListAllPolicies => "List policy documents, optionally by category",
            Tool::GetPolicyById => "Retrieve a specific policy document",
        }
    }

    pub fn arguments(self) -> &'static [&'static str] {
        match self {
            Tool::RegisterEmployee => &["employee_id", "name", "email", "department?"],
            Tool::ViewEmployee | Tool::CheckBalance | Tool::ViewMyRequests => &["employee_id"],
            Tool::ListAllEmployees => &["department?"],
            Tool::RequestLeave => &[
                "employee_id",
                "start_date",
                "end_date",
                "leave_type?",
                "reason?",
            ],
            Tool::ApproveLeave => &["request_id", "approver_id?"],
            Tool::RejectLeave => &["request_id", "reason?", "approver_id?"],
            Tool::ViewAllRequests => &["status?"],
            Tool::AddLeaveBalance => &["employee_id", "days"],
            Tool::DepartmentSummary => &["department?"],
            Tool::SystemStats => &[],
            Tool::AddPolicyDocument => &["policy_id", "title", "content", "category?"],
            Tool::SearchPolicies => &["query", "category?", "max_results?"],
            Tool::AskPolicyQuestion => &["question", "category?"],
            Tool::ListAllPolicies => &["category?"],
            Tool::GetPolicyById => &["policy_id"],
        }
    }

    pub fn spec(self) -> ToolSpec {
        ToolSpec {
            name: self.to_string(),
            description: self.description().to_string(),
            arguments: self.arguments().iter().map(|a| a.to_string()).collect(),
        }
    }

    pub fn catalog() -> Vec<ToolSpec> {
        Tool::iter().map(Tool::spec).collect()
    }
}

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments for {tool}: {source}")]
    InvalidArguments {
        tool: Tool,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("Failed to serialize result: {0}")]
    Serialize(serde_json::Error),
}

/// Identifier in the arguments plus the HTTP body fields.
#[derive(Deserialize)]
struct ForRequest<T> {
    request_id: String,
    #[serde(flatten)]
    body: T,
}

#[derive(Deserialize)]
struct ForEmployee<T> {
    employee_id: String,
    #[serde(flatten)]
    body: T,
}

fn args<T: DeserializeOwned>(tool: Tool, value: Value) -> Result<T, ToolError> {
    serde_json::from_value(value).map_err(|source| ToolError::InvalidArguments { tool, source })
}

fn reply<T: Serialize>(value: T) -> Result<Value, ToolError> {
    serde_json::to_value(value).map_err(ToolError::Serialize)
}

/// Runs one tool against the store. Missing or `null` arguments count as `{}`.
pub fn dispatch(store: &mut Store, tool: Tool, arguments: Value) -> Result<Value, ToolError> {
    let arguments = match arguments {
        Value::Null => Value::Object(Map::new()),
        other => other,
    };
    tracing::debug!(%tool, "Dispatching tool call");

    match tool {
        Tool::RegisterEmployee => {
            let a: RegisterEmployee = args(tool, arguments)?;
            reply(store.ledger.register_employee(&a.employee_id, &a.name, &a.email, &a.department)?)
        }
        Tool::ViewEmployee => {
            let a: EmployeeRef = args(tool, arguments)?;
            reply(store.ledger.view_employee(&a.employee_id)?)
        }
        Tool::ListAllEmployees => {
            let a: EmployeeQuery = args(tool, arguments)?;
            reply(store.ledger.list_employees(a.department.as_deref()))
        }
        Tool::RequestLeave => {
            let a: CreateLeave = args(tool, arguments)?;
            reply(store.ledger.request_leave(
                &a.employee_id,
                &a.start_date,
                &a.end_date,
                &a.leave_type,
                &a.reason,
            )?)
        }
        Tool::ApproveLeave => {
            let a: ForRequest<ApproveLeave> = args(tool, arguments)?;
            reply(store.approve_leave(&a.request_id, &a.body)?)
        }
        Tool::RejectLeave => {
            let a: ForRequest<RejectLeave> = args(tool, arguments)?;
            reply(store.reject_leave(&a.request_id, &a.body)?)
        }
        Tool::CheckBalance => {
            let a: EmployeeRef = args(tool, arguments)?;
            reply(store.ledger.check_balance(&a.employee_id)?)
        }
        Tool::ViewAllRequests => {
            let a: LeaveFilter = args(tool, arguments)?;
            reply(store.ledger.view_all_requests(a.parse()?))
        }
        Tool::ViewMyRequests => {
            let a: EmployeeRef = args(tool, arguments)?;
            reply(store.ledger.view_my_requests(&a.employee_id))
        }
        Tool::AddLeaveBalance => {
            let a: ForEmployee<AddBalance> = args(tool, arguments)?;
            reply(store.ledger.add_leave_balance(&a.employee_id, a.body.days)?)
        }
        Tool::DepartmentSummary => {
            let a: DepartmentRef = args(tool, arguments)?;
            reply(store.ledger.department_summary(&a.department))
        }
        Tool::SystemStats => reply(store.system_stats()),
        Tool::AddPolicyDocument => {
            let a: AddPolicy = args(tool, arguments)?;
            reply(store.add_policy(&a.policy_id, &a.title, &a.content, &a.category)?)
        }
        Tool::SearchPolicies => {
            let a: SearchPolicies = args(tool, arguments)?;
            reply(store.policies.search(&a.query, a.category.as_deref(), a.max_results))
        }
        Tool::AskPolicyQuestion => {
            let a: AskQuestion = args(tool, arguments)?;
            reply(store.policies.ask(&a.question, a.category.as_deref()))
        }
        Tool::ListAllPolicies => {
            let a: PolicyQuery = args(tool, arguments)?;
            reply(store.policies.list(a.category.as_deref()))
        }
        Tool::GetPolicyById => {
            let a: PolicyRef = args(tool, arguments)?;
            reply(store.policies.get(&a.policy_id)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::clock::FixedClock;
    use chrono::NaiveDate;
    use serde_json::json;

    fn store() -> Store {
        Store::new(Box::new(FixedClock::on(
            NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
        )))
    }

    fn call(store: &mut Store, name: &str, arguments: Value) -> Result<Value, ToolError> {
        dispatch(store, Tool::from_name(name)?, arguments)
    }

    #[test]
    fn catalog_lists_every_tool_by_snake_case_name() {
        let catalog = Tool::catalog();
        assert_eq!(catalog.len(), 17);
        assert!(catalog.iter().any(|t| t.name == "view_all_requests"));
        assert!(catalog.iter().any(|t| t.name == "get_policy_by_id"));
        for spec in &catalog {
            assert_eq!(Tool::from_name(&spec.name).unwrap().spec().name, spec.name);
        }
    }

    #[test]
    fn unknown_tool_is_rejected() {
        assert!(matches!(
            Tool::from_name("delete_employee"),
            Err(ToolError::UnknownTool(name)) if name == "delete_employee"
        ));
    }

    #[test]
    fn register_request_approve_through_tools() {
        let mut store = store();
        let registered = call(
            &mut store,
            "register_employee",
            json!({"employee_id": "EMP004", "name": "David Wilson", "email": "david@company.com"}),
        )
        .unwrap();
        assert_eq!(registered["leave_balance"], 20);

        let request = call(
            &mut store,
            "request_leave",
            json!({"employee_id": "EMP004", "start_date": "2024-12-25", "end_date": "2024-12-27"}),
        )
        .unwrap();
        assert_eq!(request["days"], 3);
        assert_eq!(request["status"], "Pending");
        assert_eq!(request["leave_type"], "Annual");

        let decision = call(&mut store, "approve_leave", json!({"request_id": "REQ0001"})).unwrap();
        assert_eq!(decision["request"]["status"], "Approved");
        assert_eq!(decision["request"]["decided_by"], "MANAGER");
        assert_eq!(decision["leave_balance"], 17);

        let balance = call(&mut store, "check_balance", json!({"employee_id": "EMP004"})).unwrap();
        assert_eq!(balance["leave_balance"], 17);
        assert_eq!(balance["total_requests"], 1);
    }

    #[test]
    fn ledger_errors_pass_through() {
        let mut store = store();
        let err = call(&mut store, "check_balance", json!({"employee_id": "EMP404"})).unwrap_err();
        assert!(matches!(
            err,
            ToolError::Ledger(LedgerError::NotFound { entity: "Employee", .. })
        ));
    }

    #[test]
    fn missing_arguments_are_invalid() {
        let mut store = store();
        let err = call(&mut store, "request_leave", json!({"employee_id": "EMP001"})).unwrap_err();
        assert!(matches!(
            err,
            ToolError::InvalidArguments {
                tool: Tool::RequestLeave,
                ..
            }
        ));
    }

    #[test]
    fn null_arguments_use_defaults() {
        let mut store = store();
        let all = call(&mut store, "view_all_requests", Value::Null).unwrap();
        assert_eq!(all, json!([]));
        let summary = call(&mut store, "department_summary", Value::Null).unwrap();
        assert_eq!(summary["department"], "All");
        let stats = call(&mut store, "system_stats", json!({})).unwrap();
        assert_eq!(stats["total_employees"], 0);
    }

    #[test]
    fn unknown_status_filter_is_invalid_input() {
        let mut store = store();
        let err =
            call(&mut store, "view_all_requests", json!({"status": "Cancelled"})).unwrap_err();
        assert!(matches!(err, ToolError::Ledger(LedgerError::InvalidInput(_))));
    }

    #[test]
    fn reject_and_top_up_through_tools() {
        let mut store = store();
        call(
            &mut store,
            "register_employee",
            json!({
                "employee_id": "EMP002",
                "name": "Bob Smith",
                "email": "bob@company.com",
                "department": "HR"
            }),
        )
        .unwrap();
        call(
            &mut store,
            "request_leave",
            json!({
                "employee_id": "EMP002",
                "start_date": "2024-12-30",
                "end_date": "2025-01-03",
                "reason": "New Year break"
            }),
        )
        .unwrap();

        let rejected = call(
            &mut store,
            "reject_leave",
            json!({"request_id": "REQ0001", "reason": "Year-end freeze", "approver_id": "ADMIN"}),
        )
        .unwrap();
        assert_eq!(rejected["request"]["status"], "Rejected");
        assert_eq!(rejected["request"]["rejection_reason"], "Year-end freeze");
        assert_eq!(rejected["leave_balance"], 20);

        let topped = call(
            &mut store,
            "add_leave_balance",
            json!({"employee_id": "EMP002", "days": 3}),
        )
        .unwrap();
        assert_eq!(topped["new_balance"], 23);
    }

    #[test]
    fn policy_tools_round_trip() {
        let mut store = store();
        call(
            &mut store,
            "add_policy_document",
            json!({
                "policy_id": "POL002",
                "title": "Sick Leave Policy",
                "content": "Ten days of paid sick leave.",
                "category": "Sick"
            }),
        )
        .unwrap();

        let found = call(&mut store, "search_policies", json!({"query": "sick"})).unwrap();
        assert_eq!(found[0]["policy_id"], "POL002");

        let doc = call(&mut store, "get_policy_by_id", json!({"policy_id": "POL002"})).unwrap();
        assert_eq!(doc["word_count"], 6);

        let answer =
            call(&mut store, "ask_policy_question", json!({"question": "sick days"})).unwrap();
        assert_eq!(answer["confidence"], "medium");
    }
}
