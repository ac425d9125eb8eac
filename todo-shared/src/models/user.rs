/// User model and database operations
///
/// Users are created on registration and never modified or deleted afterwards.
/// Passwords are stored as bcrypt hashes, never in plaintext.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE user (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     username TEXT UNIQUE,
///     password TEXT
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use todo_shared::models::user::{User, CreateUser};
/// use todo_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let id = User::create(&pool, CreateUser {
///     username: "alice".to_string(),
///     password_hash: "$2b$10$...".to_string(),
/// })
/// .await?;
///
/// let found = User::find_by_username(&pool, "alice").await?;
/// assert_eq!(found.map(|u| u.id), Some(id));
/// # Ok(())
/// # }
/// ```

use serde::Serialize;
use sqlx::SqlitePool;

/// User model representing an account
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (assigned by the database)
    pub id: i64,

    /// Username, unique across all users
    pub username: String,

    /// bcrypt password hash
    #[serde(skip_serializing)]
    #[sqlx(rename = "password")]
    pub password_hash: String,
}

/// Input for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUser {
    /// Username (must not already exist)
    pub username: String,

    /// bcrypt hash (NOT plaintext password!)
    pub password_hash: String,
}

impl User {
    /// Creates a new user and returns its ID
    ///
    /// # Errors
    ///
    /// Returns a unique-violation database error if the username is taken,
    /// or any other error the store reports
    pub async fn create(pool: &SqlitePool, data: CreateUser) -> Result<i64, sqlx::Error> {
        let result = sqlx::query("INSERT INTO user (username, password) VALUES (?, ?)")
            .bind(data.username)
            .bind(data.password_hash)
            .execute(pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    /// Finds a user by username
    ///
    /// Matching is exact and case-sensitive.
    pub async fn find_by_username(
        pool: &SqlitePool,
        username: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, COALESCE(username, '') AS username, COALESCE(password, '') AS password
            FROM user
            WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(pool)
        .await
    }
}
