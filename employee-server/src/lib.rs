//! Employee Server - 员工记录管理 REST 服务
//!
//! # 架构概述
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储 (RocksDB 或内存)
//! - **HTTP API** (`api`): `/employees` CRUD、`/health`、`/api-docs`
//!
//! # 模块结构
//!
//! ```text
//! employee-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── utils/         # 日志、响应类型
//! └── db/            # 数据库层
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use crate::core::server::{build_router, serve};
pub use crate::core::{Config, Server, ServerError, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger;

/// 设置运行环境
///
/// 1. 加载 `.env` (不存在时忽略)
/// 2. 初始化日志 (LOG_LEVEL / LOG_DIR; production 输出 JSON 行)
pub fn setup_environment() -> crate::core::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    if let Some(dir) = &config.log_dir {
        std::fs::create_dir_all(dir)?;
    }
    init_logger(
        Some(&config.log_level),
        config.log_dir.as_deref(),
        config.is_production(),
    );

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ______                 __
   / ____/___ ___  ____   / /___  __  _____  ___
  / __/ / __ `__ \/ __ \ / / __ \/ / / / _ \/ _ \
 / /___/ / / / / / /_/ // / /_/ / /_/ /  __/  __/
/_____/_/ /_/ /_/ .___//_/\____/\__, /\___/\___/
               /_/             /____/
    "#
    );
}
