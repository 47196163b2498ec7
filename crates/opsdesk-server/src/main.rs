//! Opsdesk Server — application entry point.
//!
//! Opens the local data directory, seeds first-run demo data, and
//! rehydrates any persisted session before the presentation layer takes
//! over.

use std::sync::Arc;

use opsdesk_auth::{SessionConfig, SessionService};
use opsdesk_core::registry::{AttendanceLedger, LeaveRegistry, PurchaseOrderRegistry};
use opsdesk_store::registry::{
    KvAttendanceLedger, KvLeaveRegistry, KvPurchaseOrderRegistry, KvSessionStore,
};
use opsdesk_store::{FileKv, seed_demo_orders};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("opsdesk=info".parse().unwrap()),
        )
        .json()
        .init();

    let data_dir = std::env::var("OPSDESK_DATA_DIR").unwrap_or_else(|_| "data".into());
    tracing::info!(data_dir = %data_dir, "starting opsdesk");

    let kv = Arc::new(FileKv::open(&data_dir)?);

    let orders = KvPurchaseOrderRegistry::new(kv.clone());
    seed_demo_orders(&orders)?;

    let attendance = KvAttendanceLedger::new(kv.clone());
    let leave = KvLeaveRegistry::new(kv.clone());
    let sessions = SessionService::new(KvSessionStore::new(kv), SessionConfig::default());

    match sessions.current() {
        Some(identity) => {
            tracing::info!(email = %identity.email, ?identity.role, "session rehydrated")
        }
        None => tracing::info!("no persisted session, starting logged out"),
    }
    tracing::info!(
        orders = orders.list()?.len(),
        attendance_records = attendance.list(None)?.len(),
        leave_requests = leave.list(None)?.len(),
        "registries ready"
    );

    Ok(())
}
