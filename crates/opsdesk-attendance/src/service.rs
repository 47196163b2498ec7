//! Attendance submission orchestration.

use opsdesk_core::error::OpsdeskResult;
use opsdesk_core::models::attendance::{AttendanceRecord, ClockKind, CreateAttendanceRecord};
use opsdesk_core::registry::AttendanceLedger;
use uuid::Uuid;

use crate::device::{LocationProvider, PhotoCamera};

/// Clock-in/clock-out service.
///
/// Generic over the device seams and the ledger so the flow is testable
/// without real hardware or persistent storage.
pub struct AttendanceService<L, C, A>
where
    L: LocationProvider,
    C: PhotoCamera,
    A: AttendanceLedger,
{
    location: L,
    camera: C,
    ledger: A,
}

impl<L, C, A> AttendanceService<L, C, A>
where
    L: LocationProvider,
    C: PhotoCamera,
    A: AttendanceLedger,
{
    pub fn new(location: L, camera: C, ledger: A) -> Self {
        Self {
            location,
            camera,
            ledger,
        }
    }

    /// Submit one clock event.
    ///
    /// Resolves the location first — a location failure aborts the whole
    /// submission and nothing is stored. The optional photo is captured
    /// next; a camera failure is non-fatal and the submission proceeds
    /// without a photo. Finally the record is appended to the ledger.
    /// Nothing retries automatically; a failed submission is re-invoked
    /// by the user.
    pub async fn submit(
        &self,
        kind: ClockKind,
        employee_id: Uuid,
        employee_name: &str,
        include_photo: bool,
    ) -> OpsdeskResult<AttendanceRecord> {
        let location = self.location.current_fix().await?;

        let photo = if include_photo {
            match self.camera.capture().await {
                Ok(data) => Some(data),
                Err(err) => {
                    tracing::warn!(error = %err, "could not capture photo, proceeding without it");
                    None
                }
            }
        } else {
            None
        };

        let record = self.ledger.append(CreateAttendanceRecord {
            employee_id,
            employee_name: employee_name.to_string(),
            kind,
            location,
            photo,
        })?;
        tracing::info!(kind = %record.kind, employee = %record.employee_name, "attendance recorded");
        Ok(record)
    }

    /// All records, or one employee's.
    pub fn records(&self, employee_id: Option<Uuid>) -> OpsdeskResult<Vec<AttendanceRecord>> {
        self.ledger.list(employee_id)
    }

    /// Remove exactly one record (admin operation).
    pub fn delete(&self, id: Uuid) -> OpsdeskResult<()> {
        self.ledger.delete(id)
    }
}
