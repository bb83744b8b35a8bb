//! Employee Client - HTTP client and form state for the employee API
//!
//! - [`NetworkHttpClient`] - reqwest 网络调用
//! - [`EmployeeClient`] - 五个员工接口
//! - [`EmployeeBook`] - 列表 + 当前编辑记录 (表单状态)

pub mod book;
pub mod config;
pub mod error;
pub mod http;
pub mod service;

pub use book::{EmployeeBook, Notice};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use service::{EmployeeClient, EmployeeService};

// Re-export shared types for convenience
pub use shared::models::{Employee, EmployeeDraft, EmployeeInput};
