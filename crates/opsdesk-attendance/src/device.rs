//! Device seams for attendance capture.
//!
//! The platform geolocation and camera facilities are collaborators
//! behind small async traits; production wires real devices, tests wire
//! mocks. These are the only suspension points in the attendance flow.

use std::time::Duration;

use opsdesk_core::error::OpsdeskResult;
use opsdesk_core::models::attendance::GeoFix;

/// Tuning for a single-shot location fix.
#[derive(Debug, Clone)]
pub struct LocationSettings {
    /// Prefer a high-accuracy fix when the platform offers the choice.
    pub high_accuracy: bool,
    /// Give up on the fix attempt after this long (default: 10 s).
    pub timeout: Duration,
    /// A cached fix no older than this may be returned (default: 60 s).
    pub max_fix_age: Duration,
}

impl Default for LocationSettings {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_secs(10),
            max_fix_age: Duration::from_secs(60),
        }
    }
}

/// Single-shot geolocation fix provider.
///
/// Fails with [`OpsdeskError::DeviceUnavailable`] when the platform has
/// no location capability or the fix attempt errors or times out.
///
/// [`OpsdeskError::DeviceUnavailable`]: opsdesk_core::error::OpsdeskError
pub trait LocationProvider: Send + Sync {
    fn current_fix(&self) -> impl Future<Output = OpsdeskResult<GeoFix>> + Send;
}

/// One-frame camera capture.
///
/// Returns a compressed JPEG data URL (quality around 0.8).
/// Implementations must release the camera stream on every exit path,
/// success or failure, so the device is never held.
pub trait PhotoCamera: Send + Sync {
    fn capture(&self) -> impl Future<Output = OpsdeskResult<String>> + Send;
}
