//! In-memory leave ledger: employees, balances and leave requests.
//!
//! Every operation validates its input before touching any table, so a
//! failed call leaves the ledger exactly as it was. Ids are trimmed on the
//! way in, for lookups as well as registration.

pub mod clock;


use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::model::employee::Employee;
use crate::model::leave_request::{LeaveRequest, LeaveStatus, StatusFilter};
use crate::model::report::{
    BalanceAdjustment, BalanceReport, DepartmentSummary, EmployeeView, Registration, SystemStats,
};

pub use clock::{Clock, SystemClock};

/// Annual allowance granted on first registration.
pub const DEFAULT_LEAVE_BALANCE: u32 = 20;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct LeaveLedger {
    clock: Box<dyn Clock>,
    employees: Vec<Employee>,
    employee_index: HashMap<String, usize>,
    balances: HashMap<String, u32>,
    requests: Vec<LeaveRequest>,
    request_index: HashMap<String, usize>,
}

impl Default for LeaveLedger {
    fn default() -> Self {
        Self::new(Box::new(SystemClock))
    }
}

impl LeaveLedger {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self {
            clock,
            employees: Vec::new(),
            employee_index: HashMap::new(),
            balances: HashMap::new(),
            requests: Vec::new(),
            request_index: HashMap::new(),
        }
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }

    pub fn request_count(&self) -> usize {
        self.requests.len()
    }

    pub fn balance_of(&self, employee_id: &str) -> Option<u32> {
        self.balances.get(employee_id.trim()).copied()
    }

    fn employee(&self, employee_id: &str) -> LedgerResult<&Employee> {
        self.employee_index
            .get(employee_id)
            .map(|&idx| &self.employees[idx])
            .ok_or_else(|| LedgerError::employee_not_found(employee_id))
    }

    fn request_position(&self, request_id: &str) -> LedgerResult<usize> {
        self.request_index
            .get(request_id)
            .copied()
            .ok_or_else(|| LedgerError::request_not_found(request_id))
    }

    fn requests_of<'a>(&'a self, employee_id: &'a str) -> impl Iterator<Item = &'a LeaveRequest> {
        self.requests
            .iter()
            .filter(move |r| r.employee_id == employee_id)
    }

    /* =========================
    Employees
    ========================= */

    /// Inserts a new employee, or overwrites the contact details of an
    /// existing one. Join date and balance of an existing employee are kept.
    pub fn register_employee(
        &mut self,
        employee_id: &str,
        name: &str,
        email: &str,
        department: &str,
    ) -> LedgerResult<Registration> {
        let employee_id = employee_id.trim();
        if employee_id.is_empty() {
            warn!("Rejected registration with empty employee id");
            return Err(LedgerError::InvalidInput(
                "employee_id must not be empty".to_string(),
            ));
        }

        let department = match department.trim() {
            "" => "General",
            d => d,
        };

        let created = match self.employee_index.get(employee_id) {
            Some(&idx) => {
                let existing = &mut self.employees[idx];
                existing.name = name.to_string();
                existing.email = email.to_string();
                existing.department = department.to_string();
                false
            }
            None => {
                self.employee_index
                    .insert(employee_id.to_string(), self.employees.len());
                self.employees.push(Employee {
                    employee_id: employee_id.to_string(),
                    name: name.to_string(),
                    email: email.to_string(),
                    department: department.to_string(),
                    join_date: self.clock.today(),
                });
                self.balances
                    .insert(employee_id.to_string(), DEFAULT_LEAVE_BALANCE);
                true
            }
        };

        let leave_balance = self.balance_of(employee_id).unwrap_or_default();
        info!(employee_id, department, created, "Employee registered");

        Ok(Registration {
            employee_id: employee_id.to_string(),
            name: name.to_string(),
            leave_balance,
            created,
        })
    }

    fn view_of(&self, employee: &Employee) -> EmployeeView {
        let (total, pending, approved) = self.request_counts(&employee.employee_id);
        EmployeeView {
            employee_id: employee.employee_id.clone(),
            name: employee.name.clone(),
            email: employee.email.clone(),
            department: employee.department.clone(),
            join_date: employee.join_date,
            leave_balance: self.balance_of(&employee.employee_id).unwrap_or_default(),
            total_requests: total,
            pending_requests: pending,
            approved_requests: approved,
        }
    }

    fn request_counts(&self, employee_id: &str) -> (usize, usize, usize) {
        self.requests_of(employee_id)
            .fold((0, 0, 0), |(total, pending, approved), r| match r.status {
                LeaveStatus::Pending => (total + 1, pending + 1, approved),
                LeaveStatus::Approved => (total + 1, pending, approved + 1),
                LeaveStatus::Rejected => (total + 1, pending, approved),
            })
    }

    pub fn view_employee(&self, employee_id: &str) -> LedgerResult<EmployeeView> {
        let employee_id = employee_id.trim();
        self.employee(employee_id).map(|e| self.view_of(e))
    }

    /// Employees in registration order, optionally limited to one department.
    pub fn list_employees(&self, department: Option<&str>) -> Vec<EmployeeView> {
        self.employees
            .iter()
            .filter(|e| department.is_none_or(|d| e.in_department(d)))
            .map(|e| self.view_of(e))
            .collect()
    }

    /* =========================
    Leave requests
    ========================= */

    pub fn request_leave(
        &mut self,
        employee_id: &str,
        start_date: &str,
        end_date: &str,
        leave_type: &str,
        reason: &str,
    ) -> LedgerResult<LeaveRequest> {
        let employee_id = employee_id.trim();
        let employee_name = self.employee(employee_id)?.name.clone();

        let start = parse_date(start_date)?;
        let end = parse_date(end_date)?;
        let days = inclusive_days(start, end)?;

        let available = self.balance_of(employee_id).unwrap_or_default();
        if days > available {
            warn!(employee_id, days, available, "Leave request exceeds balance");
            return Err(LedgerError::insufficient_balance(available, days));
        }

        let request = LeaveRequest {
            request_id: format!("REQ{:04}", self.requests.len() + 1),
            employee_id: employee_id.to_string(),
            employee_name,
            start_date: start,
            end_date: end,
            days,
            leave_type: match leave_type.trim() {
                "" => "Annual".to_string(),
                t => t.to_string(),
            },
            reason: reason.to_string(),
            status: LeaveStatus::Pending,
            submitted_date: self.clock.today(),
            decided_by: None,
            decided_date: None,
            rejection_reason: None,
        };

        self.request_index
            .insert(request.request_id.clone(), self.requests.len());
        self.requests.push(request.clone());

        info!(
            request_id = %request.request_id,
            employee_id,
            days,
            "Leave request submitted"
        );
        Ok(request)
    }

    fn pending_request_mut(&mut self, request_id: &str) -> LedgerResult<&mut LeaveRequest> {
        let idx = self.request_position(request_id)?;
        let request = &mut self.requests[idx];
        if !request.is_pending() {
            warn!(request_id, status = %request.status, "Decision on non-pending request");
            return Err(LedgerError::InvalidState {
                request_id: request_id.to_string(),
                status: request.status,
            });
        }
        Ok(request)
    }

    /// Approves a pending request and deducts its days from the employee's
    /// balance. The balance is checked again here since other approvals may
    /// have consumed it after submission.
    pub fn approve_leave(
        &mut self,
        request_id: &str,
        approver_id: &str,
    ) -> LedgerResult<LeaveRequest> {
        let request_id = request_id.trim();
        let today = self.clock.today();
        let idx = self.request_position(request_id)?;
        let (employee_id, days) = {
            let request = self.pending_request_mut(request_id)?;
            (request.employee_id.clone(), request.days)
        };

        let available = self.balance_of(&employee_id).unwrap_or_default();
        let remaining = available
            .checked_sub(days)
            .ok_or_else(|| LedgerError::insufficient_balance(available, days))?;

        self.balances.insert(employee_id.clone(), remaining);

        let request = &mut self.requests[idx];
        request.status = LeaveStatus::Approved;
        request.decided_by = Some(approver_id.to_string());
        request.decided_date = Some(today);

        info!(
            request_id,
            employee_id = %employee_id,
            approver_id,
            new_balance = remaining,
            "Leave request approved"
        );
        Ok(request.clone())
    }

    pub fn reject_leave(
        &mut self,
        request_id: &str,
        reason: &str,
        approver_id: &str,
    ) -> LedgerResult<LeaveRequest> {
        let request_id = request_id.trim();
        let today = self.clock.today();
        let request = self.pending_request_mut(request_id)?;

        request.status = LeaveStatus::Rejected;
        request.decided_by = Some(approver_id.to_string());
        request.decided_date = Some(today);
        request.rejection_reason = Some(reason.to_string());

        info!(request_id, approver_id, "Leave request rejected");
        Ok(request.clone())
    }

    pub fn get_request(&self, request_id: &str) -> LedgerResult<LeaveRequest> {
        let request_id = request_id.trim();
        let idx = self.request_position(request_id)?;
        Ok(self.requests[idx].clone())
    }

    /// Snapshot of requests in submission order.
    pub fn view_all_requests(&self, filter: StatusFilter) -> Vec<LeaveRequest> {
        self.requests
            .iter()
            .filter(|r| filter.matches(r.status))
            .cloned()
            .collect()
    }

    pub fn view_my_requests(&self, employee_id: &str) -> Vec<LeaveRequest> {
        self.requests_of(employee_id.trim()).cloned().collect()
    }

    /* =========================
    Balances & reporting
    ========================= */

    pub fn check_balance(&self, employee_id: &str) -> LedgerResult<BalanceReport> {
        let employee_id = employee_id.trim();
        let employee = self.employee(employee_id)?;
        let (total, pending, approved) = self.request_counts(employee_id);
        let days_used = self
            .requests_of(employee_id)
            .filter(|r| r.status == LeaveStatus::Approved)
            .map(|r| r.days)
            .sum();

        Ok(BalanceReport {
            employee_id: employee.employee_id.clone(),
            employee_name: employee.name.clone(),
            leave_balance: self.balance_of(employee_id).unwrap_or_default(),
            total_requests: total,
            pending_requests: pending,
            approved_requests: approved,
            days_used,
        })
    }

    /// Administrative top-up. No upper cap besides `u32` range.
    pub fn add_leave_balance(
        &mut self,
        employee_id: &str,
        days: i64,
    ) -> LedgerResult<BalanceAdjustment> {
        let employee_id = employee_id.trim();
        let employee_name = self.employee(employee_id)?.name.clone();

        let days = u32::try_from(days)
            .ok()
            .filter(|d| *d > 0)
            .ok_or_else(|| {
                LedgerError::InvalidInput(format!("days must be a positive integer, got {days}"))
            })?;

        let old_balance = self.balance_of(employee_id).unwrap_or_default();
        let new_balance = old_balance.checked_add(days).ok_or_else(|| {
            LedgerError::InvalidInput(format!("adding {days} days overflows the balance"))
        })?;
        self.balances.insert(employee_id.to_string(), new_balance);

        info!(employee_id, days, old_balance, new_balance, "Leave balance topped up");
        Ok(BalanceAdjustment {
            employee_id: employee_id.to_string(),
            employee_name,
            days_added: days,
            old_balance,
            new_balance,
        })
    }

    /// Aggregates for one department, or every department for `"All"`.
    pub fn department_summary(&self, department: &str) -> DepartmentSummary {
        let members: Vec<&Employee> = self
            .employees
            .iter()
            .filter(|e| e.in_department(department))
            .collect();

        let total_leave_balance: u64 = members
            .iter()
            .map(|e| u64::from(self.balance_of(&e.employee_id).unwrap_or_default()))
            .sum();
        let average_leave_balance = if members.is_empty() {
            0.0
        } else {
            total_leave_balance as f64 / members.len() as f64
        };

        let mut summary = DepartmentSummary {
            department: department.to_string(),
            total_employees: members.len(),
            total_leave_balance,
            average_leave_balance,
            total_requests: 0,
            pending_requests: 0,
            approved_requests: 0,
            rejected_requests: 0,
        };

        for request in self.requests.iter().filter(|r| {
            self.employee(&r.employee_id)
                .is_ok_and(|e| e.in_department(department))
        }) {
            summary.total_requests += 1;
            match request.status {
                LeaveStatus::Pending => summary.pending_requests += 1,
                LeaveStatus::Approved => summary.approved_requests += 1,
                LeaveStatus::Rejected => summary.rejected_requests += 1,
            }
        }

        summary
    }

    pub fn system_stats(&self, total_policies: usize) -> SystemStats {
        let count = |status: LeaveStatus| {
            self.requests
                .iter()
                .filter(|r| r.status == status)
                .count()
        };
        let departments: BTreeSet<&str> = self
            .employees
            .iter()
            .map(|e| e.department.as_str())
            .collect();

        SystemStats {
            total_employees: self.employees.len(),
            total_leave_requests: self.requests.len(),
            pending_requests: count(LeaveStatus::Pending),
            approved_requests: count(LeaveStatus::Approved),
            rejected_requests: count(LeaveStatus::Rejected),
            total_policies,
            departments: departments.into_iter().map(str::to_string).collect(),
            server_time: self.clock.now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

fn parse_date(value: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| LedgerError::InvalidDate {
        value: value.to_string(),
    })
}

/// Inclusive span, so a single day counts as 1.
fn inclusive_days(start: NaiveDate, end: NaiveDate) -> LedgerResult<u32> {
    if end < start {
        return Err(LedgerError::InvalidRange {
            start: start.format(DATE_FORMAT).to_string(),
            end: end.format(DATE_FORMAT).to_string(),
        });
    }
    let days = (end - start).num_days() + 1;
    u32::try_from(days).map_err(|_| {
        LedgerError::InvalidInput(format!("leave span of {days} days is too long"))
    })
}
