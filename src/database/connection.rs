use std::path::Path;

use sqlx::{
    Connection, Pool, Row, Sqlite, SqliteConnection,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use tracing::{info, instrument, warn};

use crate::error::AppError;

/// Options for the file-backed store. The file is created when missing and
/// foreign keys are declared but not enforced.
pub fn file_options(path: &Path) -> SqliteConnectOptions {
    SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .foreign_keys(false)
}

/// Opens the store behind exactly one connection.
///
/// Idle and lifetime reaping are off: an in-memory store lives only as long
/// as its connection.
#[instrument(skip(options))]
pub async fn open_store(options: SqliteConnectOptions) -> Result<Pool<Sqlite>, AppError> {
    info!("Opening store");
    SqlitePoolOptions::new()
        .min_connections(1)
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .map_err(AppError::Connection)
}

pub async fn close_store(pool: Pool<Sqlite>) {
    pool.close().await;
    info!("Store closed");
}

/// Reads the engine version over a short-lived in-memory connection.
#[instrument]
pub async fn sqlite_version() -> String {
    match probe_version().await {
        Ok(version) => version,
        Err(e) => {
            warn!(error = %e, "Could not read SQLite version");
            "Unknown".to_string()
        }
    }
}

async fn probe_version() -> Result<String, sqlx::Error> {
    let mut conn = SqliteConnection::connect("sqlite::memory:").await?;
    let row = sqlx::query("SELECT sqlite_version()")
        .fetch_one(&mut conn)
        .await?;
    let version: String = row.try_get(0)?;
    conn.close().await?;
    Ok(version)
}
