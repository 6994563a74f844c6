use crate::model::request::{
    AddBalance, AddPolicy, ApproveLeave, AskQuestion, CreateLeave, DepartmentRef, EmployeeQuery,
    EmployeeRef, LeaveFilter, PolicyQuery, PolicyRef, RegisterEmployee, RejectLeave,
    SearchPolicies,
};
use crate::model::leave_request::{LeaveRequest, LeaveStatus};
use crate::model::policy::{
    Confidence, PolicyAnswer, PolicyDocument, PolicyMatch, PolicySource, PolicySummary,
};
use crate::model::report::{
    BalanceAdjustment, BalanceReport, DecisionResponse, DepartmentSummary, EmployeeView,
    Registration, SystemStats,
};
use crate::tools::ToolSpec;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Leave Ledger API",
        version = "1.0.0",
        description = r#"
## Employee Leave Ledger

An in-memory ledger of employees, leave balances and leave requests, with a small
policy knowledge base. Every operation is also exposed as a named **tool** for
AI-assistant hosts.

### 🔹 Key Features
- **Employee Management**
  - Register employees, list by department, view balances and top up days
- **Leave Management**
  - Submit requests, approve/reject them, and view request history
- **Policy Knowledge Base**
  - Store policy documents, keyword search, and question answering
- **Tools**
  - `POST /api/v1/tools/{name}` with a JSON object of keyword arguments

### 📦 Response Format
- JSON records on success
- `{"error", "code", "details"?}` on failure

---
State lives in memory only and is lost on restart.
"#,
    ),
    paths(
        crate::api::employee::register_employee,
        crate::api::employee::list_employees,
        crate::api::employee::view_employee,
        crate::api::employee::check_balance,
        crate::api::employee::add_leave_balance,
        crate::api::employee::view_my_requests,

        crate::api::leave_request::leave_list,
        crate::api::leave_request::get_leave,
        crate::api::leave_request::create_leave,
        crate::api::leave_request::approve_leave,
        crate::api::leave_request::reject_leave,

        crate::api::policy::add_policy,
        crate::api::policy::list_policies,
        crate::api::policy::get_policy,
        crate::api::policy::search_policies,
        crate::api::policy::ask_policy_question,

        crate::api::admin::department_summary,
        crate::api::admin::system_stats,

        crate::api::tools::list_tools,
        crate::api::tools::call_tool
    ),
    components(
        schemas(
            RegisterEmployee,
            EmployeeQuery,
            EmployeeRef,
            AddBalance,
            Registration,
            EmployeeView,
            BalanceReport,
            BalanceAdjustment,
            CreateLeave,
            ApproveLeave,
            RejectLeave,
            LeaveFilter,
            LeaveRequest,
            LeaveStatus,
            DecisionResponse,
            AddPolicy,
            PolicyQuery,
            SearchPolicies,
            AskQuestion,
            PolicyRef,
            PolicyDocument,
            PolicySummary,
            PolicyMatch,
            PolicySource,
            PolicyAnswer,
            Confidence,
            DepartmentRef,
            DepartmentSummary,
            SystemStats,
            ToolSpec
        )
    ),
    tags(
        (name = "Employee", description = "Employee and balance APIs"),
        (name = "Leave", description = "Leave request APIs"),
        (name = "Policy", description = "Policy knowledge base APIs"),
        (name = "Admin", description = "Department and system statistics"),
        (name = "Tools", description = "Named tool dispatch for assistant hosts"),
    )
)]
pub struct ApiDoc;
