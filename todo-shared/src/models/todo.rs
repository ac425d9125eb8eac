/// Todo model and database operations
///
/// Todos belong to the user who created them. Every lookup and mutation takes
/// the owner's ID alongside the todo ID, so one user can never read or change
/// another user's items through these functions.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE todo (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     user_id INTEGER,
///     description TEXT,
///     status TEXT
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use todo_shared::models::todo::{CreateTodo, Todo, UpdateTodo};
/// use todo_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let id = Todo::create(&pool, CreateTodo {
///     user_id: 1,
///     description: "Buy milk".to_string(),
///     status: "pending".to_string(),
/// })
/// .await?;
///
/// Todo::update(&pool, id, 1, UpdateTodo {
///     status: Some("done".to_string()),
///     ..Default::default()
/// })
/// .await?;
///
/// let todos = Todo::list_by_user(&pool, 1).await?;
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use utoipa::ToSchema;

/// Todo item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Todo {
    /// Unique todo ID (assigned by the database)
    pub id: i64,

    /// Owning user ID
    pub user_id: i64,

    /// Free-text description
    pub description: String,

    /// Free-form status, e.g. "pending" or "done"
    pub status: String,
}

/// Input for creating a todo
#[derive(Debug, Clone)]
pub struct CreateTodo {
    /// Owner
    pub user_id: i64,

    /// Description
    pub description: String,

    /// Initial status
    pub status: String,
}

/// Input for updating a todo
///
/// Only non-None fields are written; the others keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateTodo {
    /// New description
    pub description: Option<String>,

    /// New status
    pub status: Option<String>,
}

// NULL columns can exist in databases written by older deployments.
const SELECT_TODO: &str = "SELECT id, COALESCE(user_id, 0) AS user_id, \
     COALESCE(description, '') AS description, COALESCE(status, '') AS status \
     FROM todo";

impl Todo {
    /// Creates a todo and returns its ID
    pub async fn create(pool: &SqlitePool, data: CreateTodo) -> Result<i64, sqlx::Error> {
        let result =
            sqlx::query("INSERT INTO todo (user_id, description, status) VALUES (?, ?, ?)")
                .bind(data.user_id)
                .bind(data.description)
                .bind(data.status)
                .execute(pool)
                .await?;

        Ok(result.last_insert_rowid())
    }

    /// Lists all todos owned by a user, oldest first
    pub async fn list_by_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<Self>, sqlx::Error> {
        let sql = format!("{SELECT_TODO} WHERE user_id = ? ORDER BY id");

        sqlx::query_as::<_, Todo>(&sql)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Finds a todo by ID, restricted to its owner
    ///
    /// Returns `None` both when the todo does not exist and when it belongs to
    /// someone else.
    pub async fn find_by_id_and_user(
        pool: &SqlitePool,
        id: i64,
        user_id: i64,
    ) -> Result<Option<Self>, sqlx::Error> {
        let sql = format!("{SELECT_TODO} WHERE id = ? AND user_id = ?");

        sqlx::query_as::<_, Todo>(&sql)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Updates a todo owned by `user_id`
    ///
    /// # Returns
    ///
    /// True if a row was updated, false if no such todo is owned by the user
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        user_id: i64,
        data: UpdateTodo,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE todo
            SET description = COALESCE(?, description),
                status = COALESCE(?, status)
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(data.description)
        .bind(data.status)
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes a todo owned by `user_id`
    ///
    /// # Returns
    ///
    /// True if the todo was deleted, false if no such todo is owned by the user
    pub async fn delete(pool: &SqlitePool, id: i64, user_id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todo WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_todo_default() {
        let update = UpdateTodo::default();
        assert!(update.description.is_none());
        assert!(update.status.is_none());
    }

    #[test]
    fn test_todo_serializes_all_fields() {
        let todo = Todo {
            id: 1,
            user_id: 2,
            description: "Write tests".to_string(),
            status: "pending".to_string(),
        };

        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "user_id": 2,
                "description": "Write tests",
                "status": "pending"
            })
        );
    }
}
