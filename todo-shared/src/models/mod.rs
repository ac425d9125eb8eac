/// Database models
///
/// This module contains the database models and their queries. Every query
/// uses bound parameters.
///
/// # Models
///
/// - `user`: Accounts and password hashes
/// - `todo`: Per-user todo items
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
/// # Ok(())
/// # }
/// ```

pub mod todo;
pub mod user;
