//! Attendance domain model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ClockKind {
    ClockIn,
    ClockOut,
}

impl fmt::Display for ClockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockKind::ClockIn => f.write_str("clock-in"),
            ClockKind::ClockOut => f.write_str("clock-out"),
        }
    }
}

/// A single geolocation reading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeoFix {
    pub latitude: f64,
    pub longitude: f64,
    pub address: Option<String>,
}

/// One clock event. Immutable once created — the ledger exposes no update
/// operation, only append and delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: Uuid,
    pub employee_id: Uuid,
    /// Display name denormalized at creation time; deleting the identity
    /// does not cascade here.
    pub employee_name: String,
    pub kind: ClockKind,
    pub timestamp: DateTime<Utc>,
    pub location: GeoFix,
    /// JPEG data URL when a photo was captured with the event.
    pub photo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAttendanceRecord {
    pub employee_id: Uuid,
    pub employee_name: String,
    pub kind: ClockKind,
    pub location: GeoFix,
    pub photo: Option<String>,
}
