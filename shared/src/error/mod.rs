//! Unified error system for the employee manager
//!
//! - [`ErrorCode`]: Error codes the API produces
//! - [`AppError`]: Handler error with code and message
//! - [`ApiResponse`]: JSON body of error responses
//!
//! # Error Code Ranges
//!
//! - 8xxx: Employee errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::invalid_id("not-an-id");
//! assert_eq!(err.code, ErrorCode::EmployeeIdInvalid);
//!
//! let err = AppError::database("connection refused");
//! let body = ApiResponse::error(&err);
//! assert_eq!(body.message, "Database error");
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
