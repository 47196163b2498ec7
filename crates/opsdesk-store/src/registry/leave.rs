//! Key-value implementation of [`LeaveRegistry`].

use chrono::Utc;
use opsdesk_core::error::OpsdeskResult;
use opsdesk_core::models::leave::{
    CreateLeaveRequest, LeaveRequest, LeaveStatus, UpdateLeaveRequest,
};
use opsdesk_core::registry::LeaveRegistry;
use uuid::Uuid;

use crate::LEAVE_REQUESTS_KEY;
use crate::error::StoreError;
use crate::kv::KvStore;

/// Leave request registry stored as one JSON array snapshot.
///
/// Back this with [`crate::MemoryKv`] to keep leave requests in memory
/// only, or with [`crate::FileKv`] to persist them across restarts.
#[derive(Debug, Clone)]
pub struct KvLeaveRegistry<K: KvStore> {
    kv: K,
}

impl<K: KvStore> KvLeaveRegistry<K> {
    pub fn new(kv: K) -> Self {
        Self { kv }
    }

    fn load(&self) -> Result<Vec<LeaveRequest>, StoreError> {
        match self.kv.get(LEAVE_REQUESTS_KEY)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    fn store(&self, requests: &[LeaveRequest]) -> Result<(), StoreError> {
        let json = serde_json::to_string(requests)?;
        self.kv.put(LEAVE_REQUESTS_KEY, &json)
    }

    /// Decide a request. Re-deciding overwrites the prior decision,
    /// approver, date, and comments (last write wins).
    fn decide(
        &self,
        id: Uuid,
        status: LeaveStatus,
        approved_by: &str,
        comments: Option<String>,
    ) -> OpsdeskResult<()> {
        self.update(
            id,
            UpdateLeaveRequest {
                status: Some(status),
                approved_by: Some(approved_by.to_string()),
                approved_date: Some(Utc::now().date_naive()),
                comments: Some(comments),
                ..Default::default()
            },
        )
    }
}

impl<K: KvStore> LeaveRegistry for KvLeaveRegistry<K> {
    fn list(&self, employee_id: Option<Uuid>) -> OpsdeskResult<Vec<LeaveRequest>> {
        let requests = self.load()?;
        Ok(match employee_id {
            Some(id) => requests
                .into_iter()
                .filter(|request| request.employee_id == id)
                .collect(),
            None => requests,
        })
    }

    fn create(&self, input: CreateLeaveRequest) -> OpsdeskResult<LeaveRequest> {
        let request = LeaveRequest {
            id: Uuid::new_v4(),
            employee_id: input.employee_id,
            employee_name: input.employee_name,
            start_date: input.start_date,
            end_date: input.end_date,
            days: input.days,
            reason: input.reason,
            // The creation path always starts a request as pending.
            status: LeaveStatus::Pending,
            applied_date: Utc::now().date_naive(),
            approved_by: None,
            approved_date: None,
            comments: None,
        };

        let mut requests = self.load()?;
        requests.push(request.clone());
        self.store(&requests)?;
        Ok(request)
    }

    fn update(&self, id: Uuid, input: UpdateLeaveRequest) -> OpsdeskResult<()> {
        let mut requests = self.load()?;
        for request in requests.iter_mut().filter(|r| r.id == id) {
            if let Some(start_date) = input.start_date {
                request.start_date = start_date;
            }
            if let Some(end_date) = input.end_date {
                request.end_date = end_date;
            }
            if let Some(days) = input.days {
                request.days = days;
            }
            if let Some(reason) = &input.reason {
                request.reason = reason.clone();
            }
            if let Some(status) = input.status {
                request.status = status;
            }
            if let Some(approved_by) = &input.approved_by {
                request.approved_by = Some(approved_by.clone());
            }
            if let Some(approved_date) = input.approved_date {
                request.approved_date = Some(approved_date);
            }
            if let Some(comments) = &input.comments {
                request.comments = comments.clone();
            }
        }
        self.store(&requests)?;
        Ok(())
    }

    fn approve(
        &self,
        id: Uuid,
        approved_by: &str,
        comments: Option<String>,
    ) -> OpsdeskResult<()> {
        self.decide(id, LeaveStatus::Approved, approved_by, comments)
    }

    fn reject(&self, id: Uuid, approved_by: &str, comments: Option<String>) -> OpsdeskResult<()> {
        self.decide(id, LeaveStatus::Rejected, approved_by, comments)
    }

    fn delete(&self, id: Uuid) -> OpsdeskResult<()> {
        let mut requests = self.load()?;
        requests.retain(|request| request.id != id);
        self.store(&requests)?;
        Ok(())
    }
}
