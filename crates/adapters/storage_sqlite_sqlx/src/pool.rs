//! `SQLite` connection pool setup and migration runner.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;

use crate::error::StorageError;

/// Configuration for the `SQLite` storage adapter.
pub struct Config {
    /// `SQLite` connection URL (e.g. `sqlite:shelf.db` or `sqlite::memory:`).
    pub database_url: String,
}

impl Config {
    /// Open the connection pool and bring the schema up to date.
    ///
    /// The database file is created if it does not exist, and all pending
    /// embedded migrations are applied before the pool is handed out.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the connection or a migration fails.
    pub async fn build(self) -> Result<SqlitePool, StorageError> {
        let options =
            SqliteConnectOptions::from_str(&self.database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(pool)
    }
}
