use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::time::Duration;
use crate::error::CoreError;

pub use sqlx::SqlitePool as DbPool;

/// How long a statement waits for another connection's write lock.
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens the scheduler database at `db_path`, creating the file and any
/// missing parent directories, and brings the `scheduler` table up to date.
///
/// # Errors
///
/// `CoreError::Io` if the parent directory cannot be created,
/// `CoreError::Database` if SQLite refuses the connection,
/// `CoreError::Migration` if the schema cannot be applied.
pub async fn establish_connection(db_path: &str) -> Result<SqlitePool, CoreError> {
    let path = Path::new(db_path);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    if path.exists() {
        tracing::info!(path = %db_path, "opening database");
    } else {
        tracing::info!(path = %db_path, "creating database");
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .busy_timeout(BUSY_TIMEOUT);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}
