use std::sync::{Mutex, MutexGuard};

use actix_web::error::ErrorInternalServerError;

use crate::error::LedgerResult;
use crate::knowledge::PolicyStore;
use crate::ledger::{Clock, LeaveLedger};
use crate::model::leave_request::LeaveRequest;
use crate::model::policy::PolicySummary;
use crate::model::report::{DecisionResponse, SystemStats};
use crate::model::request::{ApproveLeave, RejectLeave};

/// Everything the service keeps in memory for the lifetime of the process.
pub struct Store {
    pub ledger: LeaveLedger,
    pub policies: PolicyStore,
}

impl Store {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self {
            ledger: LeaveLedger::new(clock),
            policies: PolicyStore::new(),
        }
    }

    pub fn add_policy(
        &mut self,
        policy_id: &str,
        title: &str,
        content: &str,
        category: &str,
    ) -> LedgerResult<PolicySummary> {
        let now = self.ledger.clock().now();
        self.policies.add(policy_id, title, content, category, now)
    }

    pub fn approve_leave(
        &mut self,
        request_id: &str,
        payload: &ApproveLeave,
    ) -> LedgerResult<DecisionResponse> {
        let request = self.ledger.approve_leave(request_id, &payload.approver_id)?;
        Ok(self.decision("Leave request approved", request))
    }

    pub fn reject_leave(
        &mut self,
        request_id: &str,
        payload: &RejectLeave,
    ) -> LedgerResult<DecisionResponse> {
        let request = self
            .ledger
            .reject_leave(request_id, &payload.reason, &payload.approver_id)?;
        Ok(self.decision("Leave request rejected", request))
    }

    fn decision(&self, message: &str, request: LeaveRequest) -> DecisionResponse {
        let leave_balance = self.ledger.balance_of(&request.employee_id).unwrap_or_default();
        DecisionResponse {
            message: message.to_string(),
            request,
            leave_balance,
        }
    }

    pub fn system_stats(&self) -> SystemStats {
        self.ledger.system_stats(self.policies.len())
    }
}

/// Shared handler state. One lock guards the whole store, so every
/// operation is a single read-modify-write.
pub struct AppState {
    store: Mutex<Store>,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    pub fn lock(&self) -> actix_web::Result<MutexGuard<'_, Store>> {
        self.store.lock().map_err(|e| {
            tracing::error!(error = %e, "Store lock poisoned");
            ErrorInternalServerError("Internal Server Error")
        })
    }
}
