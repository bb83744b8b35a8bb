use thiserror::Error;

use crate::db::repository::RepoError;

/// 服务启动/运行期错误
///
/// 请求级错误使用 [`crate::AppError`]，不经过这里
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("数据库初始化失败: {0}")]
    Database(#[from] RepoError),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("配置错误: {0}")]
    Config(String),
}

/// 服务器 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
