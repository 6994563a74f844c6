//! Read models returned by ledger queries.

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::model::leave_request::LeaveRequest;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Registration {
    #[schema(example = "EMP004")]
    pub employee_id: String,
    #[schema(example = "David Wilson")]
    pub name: String,
    #[schema(example = 20)]
    pub leave_balance: u32,
    /// false when an existing record was overwritten
    pub created: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct EmployeeView {
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    #[schema(example = "2024-01-01", format = "date", value_type = String)]
    pub join_date: NaiveDate,
    pub leave_balance: u32,
    pub total_requests: usize,
    pub pending_requests: usize,
    pub approved_requests: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BalanceReport {
    pub employee_id: String,
    pub employee_name: String,
    #[schema(example = 17)]
    pub leave_balance: u32,
    pub total_requests: usize,
    pub pending_requests: usize,
    pub approved_requests: usize,
    /// sum of approved request days
    pub days_used: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BalanceAdjustment {
    pub employee_id: String,
    pub employee_name: String,
    pub days_added: u32,
    pub old_balance: u32,
    pub new_balance: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[schema(example = json!({
    "department": "Engineering",
    "total_employees": 2,
    "total_leave_balance": 35,
    "average_leave_balance": 17.5,
    "total_requests": 1,
    "pending_requests": 0,
    "approved_requests": 1,
    "rejected_requests": 0
}))]
pub struct DepartmentSummary {
    pub department: String,
    pub total_employees: usize,
    pub total_leave_balance: u64,
    pub average_leave_balance: f64,
    pub total_requests: usize,
    pub pending_requests: usize,
    pub approved_requests: usize,
    pub rejected_requests: usize,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SystemStats {
    pub total_employees: usize,
    pub total_leave_requests: usize,
    pub pending_requests: usize,
    pub approved_requests: usize,
    pub rejected_requests: usize,
    pub total_policies: usize,
    pub departments: Vec<String>,
    #[schema(example = "2024-12-01 09:30:00")]
    pub server_time: String,
}

/// Outcome of an approval or rejection with the balance after it.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DecisionResponse {
    #[schema(example = "Leave request approved")]
    pub message: String,
    pub request: LeaveRequest,
    #[schema(example = 17)]
    pub leave_balance: u32,
}
