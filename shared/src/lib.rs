//! Shared types for the employee manager
//!
//! Types used by both the API server and the client: the employee model,
//! the identifier syntax, and the unified error codes and response bodies.

pub mod error;
pub mod models;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use models::{Employee, EmployeeDraft, EmployeeId, EmployeeInput, InvalidEmployeeId};
