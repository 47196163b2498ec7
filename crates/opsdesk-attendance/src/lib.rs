//! Opsdesk Attendance — geolocation and camera seams plus the
//! clock-in/clock-out submission flow.

pub mod device;
pub mod service;

pub use device::{LocationProvider, LocationSettings, PhotoCamera};
pub use service::AttendanceService;
