//! Employee API Module
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /employees | GET | 列出全部员工 |
//! | /employees | POST | 新建员工 |
//! | /employees/{id} | GET | 按 id 查询 (不存在时返回空 body) |
//! | /employees/{id} | PUT | 覆盖四个字段 |
//! | /employees/{id} | DELETE | 删除并返回被删记录 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Collection base path
pub const BASE_PATH: &str = "/employees";

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route(BASE_PATH, get(handler::list).post(handler::create))
        .route(
            "/employees/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
