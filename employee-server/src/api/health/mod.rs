//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /health | GET | 服务与数据库状态 |
//!
//! # 响应示例
//!
//! ```json
//! {
//!   "status": "ok",
//!   "version": "0.1.0",
//!   "uptime_seconds": 42,
//!   "database": { "status": "ok", "latency_ms": 0 }
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::DbService;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

/// 健康检查响应
#[derive(Serialize)]
pub struct HealthResponse {
    /// 状态 (ok | degraded)
    status: &'static str,
    version: &'static str,
    /// 运行时间 (秒)
    uptime_seconds: u64,
    database: CheckResult,
}

/// 单项检查结果
#[derive(Serialize)]
pub struct CheckResult {
    /// 状态 (ok | error)
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    latency_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl CheckResult {
    fn ok_with_latency(latency_ms: u64) -> Self {
        Self {
            status: "ok",
            latency_ms: Some(latency_ms),
            message: None,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            latency_ms: None,
            message: Some(message.into()),
        }
    }
}

pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let db_start = std::time::Instant::now();
    let database = match DbService::ping(&state.db).await {
        Ok(()) => CheckResult::ok_with_latency(db_start.elapsed().as_millis() as u64),
        Err(e) => {
            tracing::warn!(target: "database", error = %e, "Health check failed");
            CheckResult::error(format!("Database error: {}", e))
        }
    };

    Json(HealthResponse {
        status: if database.status == "ok" { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.uptime_seconds(),
        database,
    })
}
