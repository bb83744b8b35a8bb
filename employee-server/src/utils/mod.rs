//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型 (from shared::error)
//! - [`MaybeJson`] - 可能为空的 JSON 响应
//! - 日志初始化

pub mod logger;
pub mod response;

pub use response::MaybeJson;
pub use shared::error::{AppError, AppResult};
