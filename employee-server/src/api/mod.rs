//! API 路由模块
//!
//! # 结构
//!
//! - [`employees`] - 员工 CRUD 接口 (`/employees`)
//! - [`health`] - 健康检查
//! - [`docs`] - OpenAPI 文档 (`/api-docs`)

pub mod docs;
pub mod employees;
pub mod health;

use axum::Router;

use crate::core::ServerState;

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(employees::router())
        .merge(health::router())
        .merge(docs::router())
}
