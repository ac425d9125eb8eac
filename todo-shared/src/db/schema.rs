/// Schema bootstrap
///
/// Creates the two tables the service needs when they are missing. There is
/// no versioned migration history: the statements are `IF NOT EXISTS` and safe
/// to run on every startup, including against a database file written by an
/// earlier deployment.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE user (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     username TEXT UNIQUE,
///     password TEXT
/// );
///
/// CREATE TABLE todo (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     user_id INTEGER,
///     description TEXT,
///     status TEXT
/// );
/// ```

use sqlx::SqlitePool;
use tracing::info;

const CREATE_USER_TABLE: &str = "CREATE TABLE IF NOT EXISTS user (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT UNIQUE,
    password TEXT
)";

const CREATE_TODO_TABLE: &str = "CREATE TABLE IF NOT EXISTS todo (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER,
    description TEXT,
    status TEXT
)";

/// Creates the `user` and `todo` tables if they do not exist
///
/// # Errors
///
/// Returns an error if either statement fails
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_USER_TABLE).execute(pool).await?;
    sqlx::query(CREATE_TODO_TABLE).execute(pool).await?;

    info!("Database schema ready");
    Ok(())
}

/// Lists the application tables present in the database
pub async fn list_tables(pool: &SqlitePool) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT name FROM sqlite_master
         WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
         ORDER BY name",
    )
    .fetch_all(pool)
    .await
}
