//! Demo employees, policies and requests loaded at startup.

use crate::error::LedgerResult;
use crate::state::Store;

const EMPLOYEES: [(&str, &str, &str, &str); 4] = [
    ("EMP001", "Alice Johnson", "alice@company.com", "Engineering"),
    ("EMP002", "Bob Smith", "bob@company.com", "HR"),
    ("EMP003", "Carol Davis", "carol@company.com", "Sales"),
    ("EMP004", "David Wilson", "david@company.com", "Engineering"),
];

const POLICIES: [(&str, &str, &str, &str); 4] = [
    (
        "POL001",
        "Annual Leave Policy",
        "All full-time employees are entitled to 20 days of annual leave per calendar year. \
         Leave must be requested at least 2 weeks in advance for periods longer than 5 days. \
         Annual leave can be carried over up to 5 days to the next year. \
         Leave balance is prorated for new employees based on their start date.",
        "Annual",
    ),
    (
        "POL002",
        "Sick Leave Policy",
        "Employees are entitled to 10 days of paid sick leave per year. \
         Medical certificate is required for sick leave exceeding 3 consecutive days. \
         Sick leave cannot be carried over to the next year. \
         Unused sick leave does not get paid out upon termination.",
        "Sick",
    ),
    (
        "POL003",
        "Emergency Leave Policy",
        "Emergency leave is granted for unforeseen circumstances such as family emergencies. \
         Employees can take up to 3 days of emergency leave per incident. \
         Emergency leave is subject to manager approval and requires documentation. \
         This leave is deducted from annual leave balance.",
        "Emergency",
    ),
    (
        "POL004",
        "Remote Work Policy",
        "Employees may request remote work arrangements with manager approval. \
         Remote work is available up to 2 days per week for eligible roles. \
         Equipment and internet expenses may be reimbursed as per company guidelines. \
         Core working hours (10 AM - 3 PM) must be maintained regardless of location.",
        "Remote",
    ),
];

const REQUESTS: [(&str, &str, &str, &str, &str); 3] = [
    ("EMP001", "2024-12-23", "2024-12-27", "Annual", "Christmas holiday"),
    ("EMP002", "2024-12-30", "2025-01-03", "Annual", "New Year break"),
    ("EMP003", "2024-12-20", "2024-12-20", "Sick", "Medical appointment"),
];

pub fn load_demo_data(store: &mut Store) -> LedgerResult<()> {
    for (id, name, email, department) in EMPLOYEES {
        store.ledger.register_employee(id, name, email, department)?;
    }

    for (id, title, content, category) in POLICIES {
        store.add_policy(id, title, content, category)?;
    }

    let mut first = None;
    for (employee_id, start, end, leave_type, reason) in REQUESTS {
        let request = store
            .ledger
            .request_leave(employee_id, start, end, leave_type, reason)?;
        first.get_or_insert(request.request_id);
    }

    if let Some(request_id) = first {
        store.ledger.approve_leave(&request_id, "ADMIN")?;
    }

    tracing::info!(
        employees = store.ledger.employee_count(),
        requests = store.ledger.request_count(),
        policies = store.policies.len(),
        "Demo data loaded"
    );
    Ok(())
}
