//! Error category classification

use super::codes::ErrorCode;

/// Error category classification based on error code ranges
///
/// - 8xxx: Employee errors
/// - 9xxx: System errors (logged, message masked in responses)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Employee errors (8xxx)
    Employee,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            8000..9000 => Self::Employee,
            _ => Self::System,
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
