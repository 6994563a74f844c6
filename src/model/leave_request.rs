use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema)]
#[strum(ascii_case_insensitive)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

/// Filter accepted by `view_all_requests`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Display, EnumString, ToSchema)]
#[strum(ascii_case_insensitive)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Approved,
    Rejected,
}

impl StatusFilter {
    pub fn matches(&self, status: LeaveStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => status == LeaveStatus::Pending,
            StatusFilter::Approved => status == LeaveStatus::Approved,
            StatusFilter::Rejected => status == LeaveStatus::Rejected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "request_id": "REQ0001",
    "employee_id": "EMP001",
    "employee_name": "Alice Johnson",
    "start_date": "2024-12-23",
    "end_date": "2024-12-27",
    "days": 5,
    "leave_type": "Annual",
    "reason": "Christmas holiday",
    "status": "Approved",
    "submitted_date": "2024-12-01",
    "decided_by": "ADMIN",
    "decided_date": "2024-12-02",
    "rejection_reason": null
}))]
pub struct LeaveRequest {
    pub request_id: String,
    pub employee_id: String,
    pub employee_name: String,
    #[schema(example = "2024-12-23", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2024-12-27", format = "date", value_type = String)]
    pub end_date: NaiveDate,
    /// inclusive day count
    pub days: u32,
    pub leave_type: String,
    pub reason: String,
    pub status: LeaveStatus,
    #[schema(format = "date", value_type = String)]
    pub submitted_date: NaiveDate,
    pub decided_by: Option<String>,
    #[schema(format = "date", value_type = Option<String>)]
    pub decided_date: Option<NaiveDate>,
    pub rejection_reason: Option<String>,
}

impl LeaveRequest {
    pub fn is_pending(&self) -> bool {
        self.status == LeaveStatus::Pending
    }
}
