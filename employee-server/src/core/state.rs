use std::time::Instant;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::{Config, Result};
use crate::db::DbService;

/// 服务器状态 - 每个请求共享的只读句柄
///
/// 除数据库连接外不持有任何可变状态；`Surreal<Db>` 内部是 Arc，
/// clone 成本极低，且可安全地被并发请求使用。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
/// | started_at | Instant | 启动时间 (健康检查用) |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    pub started_at: Instant,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替
    pub fn new(config: Config, db: Surreal<Db>) -> Self {
        Self {
            config,
            db,
            started_at: Instant::now(),
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 数据库目录 (确保存在)
    /// 2. 数据库 (DATABASE_PATH 或内存)
    pub async fn initialize(config: &Config) -> Result<Self> {
        if let Some(dir) = config.database_dir() {
            std::fs::create_dir_all(&dir)?;
        }

        let db_service = DbService::new(config).await?;

        Ok(Self::new(config.clone(), db_service.db))
    }

    /// 获取数据库连接
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// 运行时间 (秒)
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
