use super::DriverError;
use crate::util::sanitize_driver_message;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CursorError {
    #[error("OUT CURSOR creation failed: {message} (code {code})")]
    CursorCreationFailed { message: String, code: i32 },
    #[error("OUT CURSOR binding failed for {placeholder}: {message} (code {code})")]
    CursorBindFailed {
        placeholder: String,
        message: String,
        code: i32,
    },
}

impl CursorError {
    pub fn creation_failed(err: DriverError) -> Self {
        CursorError::CursorCreationFailed {
            message: sanitize_driver_message(&err.message),
            code: err.code,
        }
    }

    pub fn bind_failed(placeholder: &str, err: DriverError) -> Self {
        CursorError::CursorBindFailed {
            placeholder: placeholder.to_string(),
            message: sanitize_driver_message(&err.message),
            code: err.code,
        }
    }

    /// Application error code surfaced to callers.
    pub fn error_code(&self) -> u16 {
        match self {
            CursorError::CursorCreationFailed { .. } => 529,
            CursorError::CursorBindFailed { .. } => 528,
        }
    }
}
