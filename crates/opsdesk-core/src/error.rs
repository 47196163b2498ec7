//! Error types for the Opsdesk system.
//!
//! Absent ids are deliberately not an error: update/decide/delete on an id
//! that no longer exists is a silent no-op, so there is no `NotFound`
//! variant.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpsdeskError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Device unavailable: {device}: {reason}")]
    DeviceUnavailable { device: String, reason: String },

    #[error("Storage error: {0}")]
    Storage(String),
}

impl OpsdeskError {
    pub fn validation(message: impl Into<String>) -> Self {
        OpsdeskError::Validation {
            message: message.into(),
        }
    }

    pub fn device(device: impl Into<String>, reason: impl Into<String>) -> Self {
        OpsdeskError::DeviceUnavailable {
            device: device.into(),
            reason: reason.into(),
        }
    }
}

pub type OpsdeskResult<T> = Result<T, OpsdeskError>;
