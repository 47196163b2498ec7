//! Integration tests for the attendance ledger, including the file-store
//! round trip.

use opsdesk_core::models::attendance::{ClockKind, CreateAttendanceRecord, GeoFix};
use opsdesk_core::registry::AttendanceLedger;
use opsdesk_store::registry::KvAttendanceLedger;
use opsdesk_store::{FileKv, MemoryKv};
use uuid::Uuid;

fn clock_event(employee_id: Uuid, kind: ClockKind) -> CreateAttendanceRecord {
    CreateAttendanceRecord {
        employee_id,
        employee_name: "Dana Field".into(),
        kind,
        location: GeoFix {
            latitude: 52.52,
            longitude: 13.405,
            address: Some("Head office".into()),
        },
        photo: None,
    }
}

#[test]
fn append_stamps_id_and_timestamp() {
    let ledger = KvAttendanceLedger::new(MemoryKv::new());
    let employee_id = Uuid::new_v4();

    let record = ledger
        .append(clock_event(employee_id, ClockKind::ClockIn))
        .unwrap();

    assert_eq!(record.employee_id, employee_id);
    assert_eq!(record.kind, ClockKind::ClockIn);
    assert!(record.photo.is_none());

    let listed = ledger.list(None).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, record.id);
    assert_eq!(listed[0].timestamp, record.timestamp);
}

#[test]
fn list_scopes_by_employee() {
    let ledger = KvAttendanceLedger::new(MemoryKv::new());
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();

    ledger.append(clock_event(first, ClockKind::ClockIn)).unwrap();
    ledger.append(clock_event(first, ClockKind::ClockOut)).unwrap();
    ledger.append(clock_event(second, ClockKind::ClockIn)).unwrap();

    assert_eq!(ledger.list(None).unwrap().len(), 3);
    assert_eq!(ledger.list(Some(first)).unwrap().len(), 2);
    assert_eq!(ledger.list(Some(second)).unwrap().len(), 1);
}

#[test]
fn delete_removes_exactly_one_record() {
    let ledger = KvAttendanceLedger::new(MemoryKv::new());
    let employee_id = Uuid::new_v4();
    let keep = ledger
        .append(clock_event(employee_id, ClockKind::ClockIn))
        .unwrap();
    let drop = ledger
        .append(clock_event(employee_id, ClockKind::ClockOut))
        .unwrap();

    ledger.delete(drop.id).unwrap();
    // Deleting again is a silent no-op.
    ledger.delete(drop.id).unwrap();

    let listed = ledger.list(None).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, keep.id);
}

#[test]
fn file_store_round_trip_preserves_timestamps() {
    // Timestamps pass through a string encoding on disk and must come
    // back as the same instants, to the millisecond and beyond.
    let dir = tempfile::tempdir().unwrap();
    let employee_id = Uuid::new_v4();

    let mut written = Vec::new();
    {
        let ledger = KvAttendanceLedger::new(FileKv::open(dir.path()).unwrap());
        for _ in 0..5 {
            written.push(
                ledger
                    .append(clock_event(employee_id, ClockKind::ClockIn))
                    .unwrap(),
            );
        }
    }

    // A fresh ledger over the same directory sees the same records.
    let reopened = KvAttendanceLedger::new(FileKv::open(dir.path()).unwrap());
    let reloaded = reopened.list(None).unwrap();
    assert_eq!(reloaded.len(), written.len());
    for (before, after) in written.iter().zip(&reloaded) {
        assert_eq!(before.id, after.id);
        assert_eq!(before.timestamp, after.timestamp);
        assert_eq!(before.location, after.location);
    }
}
