use crate::config::Config;
use crate::db::schema::SQLITE_INIT;
use crate::digest::Sha1Digest;
use crate::error::CheckError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::info;

pub type SqlitePool = Pool<Sqlite>;

/// Open the process-wide connection pool described by `cfg`.
pub async fn connect(cfg: &Config) -> Result<PwdListStorage, CheckError> {
    let options = SqliteConnectOptions::from_str(&cfg.database_url)?.read_only(cfg.read_only);
    let pool = SqlitePoolOptions::new()
        .max_connections(cfg.max_connections)
        .acquire_timeout(cfg.acquire_timeout())
        .connect_with(options)
        .await?;
    info!(
        database_url = %cfg.database_url,
        max_connections = cfg.max_connections,
        read_only = cfg.read_only,
        "database pool ready"
    );
    Ok(PwdListStorage::new(pool))
}

#[derive(Clone)]
pub struct PwdListStorage {
    pool: SqlitePool,
}

impl PwdListStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), CheckError> {
        // sqlx::query runs a single statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Whether `digest` is present in the breached-password table.
    pub async fn exists(&self, digest: &Sha1Digest) -> Result<bool, CheckError> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM pwdlist WHERE pwd = ? LIMIT 1")
            .bind(digest.as_str())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }
}
