//! Repository Module
//!
//! Provides CRUD operations for SurrealDB tables.

pub mod employee;

// Re-exports
pub use employee::EmployeeRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for shared::AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Database(msg) => shared::AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention
// =============================================================================
//
// 对外 ID 只暴露 record key (不带 "employee:" 前缀)：
//   - 查询: type::thing('employee', $id)
//   - 输出: meta::id(id) AS _id
//   - 校验: shared::EmployeeId::parse，进入 repository 之前完成

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
