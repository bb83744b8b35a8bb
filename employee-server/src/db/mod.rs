//! Database Module
//!
//! Embedded SurrealDB: RocksDB on disk, or the in-memory engine when
//! `DATABASE_PATH=memory`.

pub mod repository;

use crate::core::Config;
use repository::RepoResult;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

/// Table holding employee documents
pub const EMPLOYEE_TABLE: &str = "employee";

/// Database service, owns the embedded store handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open the store, select namespace/database and define the tables
    pub async fn new(config: &Config) -> RepoResult<Self> {
        let db = if config.is_in_memory() {
            Surreal::new::<Mem>(()).await?
        } else {
            Surreal::new::<RocksDb>(config.database_path.as_str()).await?
        };

        db.use_ns(config.database_namespace.as_str())
            .use_db(config.database_name.as_str())
            .await?;

        tracing::info!(
            path = %config.database_path,
            namespace = %config.database_namespace,
            database = %config.database_name,
            "Database connection established"
        );

        // Schemaless: replace must be able to drop fields entirely
        db.query(format!(
            "DEFINE TABLE IF NOT EXISTS {EMPLOYEE_TABLE} SCHEMALESS"
        ))
        .await?
        .check()?;
        tracing::info!("Database schema applied");

        Ok(Self { db })
    }

    /// Cheap round trip used by the health check
    pub async fn ping(db: &Surreal<Db>) -> RepoResult<()> {
        db.query("RETURN true").await?.check()?;
        Ok(())
    }
}
