use std::path::PathBuf;

/// 内存存储的 DATABASE_PATH 取值
pub const MEMORY_DATABASE: &str = "memory";

/// 服务器配置 - 员工管理服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | DATABASE_PATH | ./data/employees.db | RocksDB 路径, `memory` 为内存存储 |
/// | DATABASE_NAMESPACE | employee_manager | SurrealDB namespace |
/// | DATABASE_NAME | main | SurrealDB database |
/// | CORS_ORIGIN | http://localhost:4200 | 唯一允许的跨域来源 |
/// | PUBLIC_URL | http://localhost:{HTTP_PORT} | /api-docs 中的服务地址 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (未设置) | 日志目录，设置后按天滚动写文件 |
/// | ENVIRONMENT | development | 运行环境, production 时日志输出 JSON |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 DATABASE_PATH=memory cargo run -p employee-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 数据库文件路径
    pub database_path: String,
    pub database_namespace: String,
    pub database_name: String,
    /// 允许跨域访问的来源
    pub cors_origin: String,
    /// 对外公布的服务地址 (写入 OpenAPI 文档)
    pub public_url: String,
    pub log_level: String,
    /// 日志目录
    pub log_dir: Option<String>,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        let http_port = std::env::var("HTTP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        Self {
            http_port,
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "./data/employees.db".into()),
            database_namespace: std::env::var("DATABASE_NAMESPACE")
                .unwrap_or_else(|_| "employee_manager".into()),
            database_name: std::env::var("DATABASE_NAME").unwrap_or_else(|_| "main".into()),
            cors_origin: std::env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:4200".into()),
            public_url: std::env::var("PUBLIC_URL")
                .unwrap_or_else(|_| format!("http://localhost:{http_port}")),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(database_path: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.database_path = database_path.into();
        config.http_port = http_port;
        config.public_url = format!("http://localhost:{http_port}");
        config
    }

    /// 内存存储配置 (测试用)
    pub fn in_memory() -> Self {
        Self::with_overrides(MEMORY_DATABASE, 0)
    }

    /// 是否使用内存存储
    pub fn is_in_memory(&self) -> bool {
        self.database_path == MEMORY_DATABASE
    }

    /// 数据库文件所在目录
    pub fn database_dir(&self) -> Option<PathBuf> {
        if self.is_in_memory() {
            return None;
        }
        PathBuf::from(&self.database_path)
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(PathBuf::from)
    }

    /// 是否生产环境 (日志切换为 JSON 格式)
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_config() {
        let config = Config::in_memory();
        assert!(config.is_in_memory());
        assert!(config.database_dir().is_none());
        assert_eq!(config.http_port, 0);
    }

    #[test]
    fn test_database_dir_is_parent_of_path() {
        let config = Config::with_overrides("/var/lib/employees/store.db", 3000);
        assert!(!config.is_in_memory());
        assert_eq!(
            config.database_dir(),
            Some(PathBuf::from("/var/lib/employees"))
        );
        assert_eq!(config.public_url, "http://localhost:3000");
    }

    #[test]
    fn test_only_production_environment_is_production() {
        let mut config = Config::in_memory();
        for (env, expected) in [
            ("production", true),
            ("development", false),
            ("staging", false),
        ] {
            config.environment = env.to_string();
            assert_eq!(config.is_production(), expected, "{env}");
        }
    }

    #[test]
    fn test_bare_file_name_has_no_dir() {
        let config = Config::with_overrides("store.db", 3000);
        assert!(config.database_dir().is_none());
    }
}
