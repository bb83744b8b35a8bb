//! Error codes produced by the employee API
//!
//! - 8xxx: Employee errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Serialized as a bare `u16` in error bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 8xxx: Employee ====================
    /// Path identifier is not a well-formed employee id
    EmployeeIdInvalid = 8006,

    // ==================== 9xxx: System ====================
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Errors rendered as a plain-text body instead of JSON
    #[inline]
    pub const fn is_plain_text(&self) -> bool {
        matches!(self, ErrorCode::EmployeeIdInvalid)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::EmployeeIdInvalid => "No record with given id",
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            8006 => Ok(ErrorCode::EmployeeIdInvalid),
            9002 => Ok(ErrorCode::DatabaseError),
            _ => Err(InvalidErrorCode(value)),
        }
    }
}
