//! Data models
//!
//! Shared between employee-server and employee-client (via API).
//! Record ids are the store-assigned key without the `employee:` table prefix.

pub mod employee;
pub mod employee_id;

// Re-exports
pub use employee::*;
pub use employee_id::*;
