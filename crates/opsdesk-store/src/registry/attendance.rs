//! Key-value implementation of [`AttendanceLedger`].

use chrono::Utc;
use opsdesk_core::error::OpsdeskResult;
use opsdesk_core::models::attendance::{AttendanceRecord, CreateAttendanceRecord};
use opsdesk_core::registry::AttendanceLedger;
use uuid::Uuid;

use crate::ATTENDANCE_KEY;
use crate::error::StoreError;
use crate::kv::KvStore;

/// Append-only attendance ledger stored as one JSON array snapshot.
///
/// Timestamps go through a string encoding on disk and are parsed back to
/// instants on read (serde on `DateTime<Utc>`), so listing always yields
/// true instants suitable for sorting and date filtering.
#[derive(Debug, Clone)]
pub struct KvAttendanceLedger<K: KvStore> {
    kv: K,
}

impl<K: KvStore> KvAttendanceLedger<K> {
    pub fn new(kv: K) -> Self {
        Self { kv }
    }

    fn load(&self) -> Result<Vec<AttendanceRecord>, StoreError> {
        match self.kv.get(ATTENDANCE_KEY)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    fn store(&self, records: &[AttendanceRecord]) -> Result<(), StoreError> {
        let json = serde_json::to_string(records)?;
        self.kv.put(ATTENDANCE_KEY, &json)
    }
}

impl<K: KvStore> AttendanceLedger for KvAttendanceLedger<K> {
    fn append(&self, input: CreateAttendanceRecord) -> OpsdeskResult<AttendanceRecord> {
        let record = AttendanceRecord {
            id: Uuid::new_v4(),
            employee_id: input.employee_id,
            employee_name: input.employee_name,
            kind: input.kind,
            timestamp: Utc::now(),
            location: input.location,
            photo: input.photo,
        };

        let mut records = self.load()?;
        records.push(record.clone());
        self.store(&records)?;
        Ok(record)
    }

    fn list(&self, employee_id: Option<Uuid>) -> OpsdeskResult<Vec<AttendanceRecord>> {
        let records = self.load()?;
        Ok(match employee_id {
            Some(id) => records
                .into_iter()
                .filter(|record| record.employee_id == id)
                .collect(),
            None => records,
        })
    }

    fn delete(&self, id: Uuid) -> OpsdeskResult<()> {
        let mut records = self.load()?;
        records.retain(|record| record.id != id);
        self.store(&records)?;
        Ok(())
    }
}
