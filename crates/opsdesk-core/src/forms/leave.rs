//! Leave request form: date-range validation and day counting.

use chrono::NaiveDate;

use crate::error::{OpsdeskError, OpsdeskResult};
use crate::models::identity::Identity;
use crate::models::leave::{CreateLeaveRequest, UpdateLeaveRequest, day_count};

/// User input for submitting or editing a leave request.
#[derive(Debug, Clone)]
pub struct LeaveRequestForm {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

impl LeaveRequestForm {
    /// Validate the date range and return the computed inclusive day
    /// count. The end date must be strictly after the start date.
    pub fn validate(&self) -> OpsdeskResult<i64> {
        if self.start_date >= self.end_date {
            return Err(OpsdeskError::validation("End date must be after start date"));
        }
        Ok(day_count(self.start_date, self.end_date))
    }

    /// Build a creation payload for the requesting identity. Fails before
    /// anything is stored if the range is invalid.
    pub fn into_create(self, requester: &Identity) -> OpsdeskResult<CreateLeaveRequest> {
        let days = self.validate()?;
        Ok(CreateLeaveRequest {
            employee_id: requester.id,
            employee_name: requester.name.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            days,
            reason: self.reason,
        })
    }

    /// Build an update payload for editing a still-pending request. The
    /// day count is recomputed from the edited range.
    pub fn into_update(self) -> OpsdeskResult<UpdateLeaveRequest> {
        let days = self.validate()?;
        Ok(UpdateLeaveRequest {
            start_date: Some(self.start_date),
            end_date: Some(self.end_date),
            days: Some(days),
            reason: Some(self.reason),
            ..Default::default()
        })
    }
}
