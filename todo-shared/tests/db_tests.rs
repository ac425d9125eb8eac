/// Integration tests for the storage layer
///
/// Each test opens its own private in-memory SQLite database, so tests run in
/// parallel without interfering with each other.

use todo_shared::db::pool::{close_pool, create_pool, health_check, DatabaseConfig};
use todo_shared::db::schema::{ensure_schema, list_tables};
use todo_shared::models::todo::{CreateTodo, Todo, UpdateTodo};
use todo_shared::models::user::{CreateUser, User};

async fn setup() -> sqlx::SqlitePool {
    let pool = create_pool(DatabaseConfig::in_memory())
        .await
        .expect("Failed to create pool");
    ensure_schema(&pool).await.expect("Failed to create schema");
    pool
}

fn new_todo(user_id: i64, description: &str) -> CreateTodo {
    CreateTodo {
        user_id,
        description: description.to_string(),
        status: "pending".to_string(),
    }
}

#[tokio::test]
async fn test_create_pool_and_health_check() {
    let pool = create_pool(DatabaseConfig::in_memory())
        .await
        .expect("Failed to create pool");

    assert!(health_check(&pool).await.is_ok());

    close_pool(pool).await;
}

#[tokio::test]
async fn test_queries_fail_after_close() {
    let pool = setup().await;

    close_pool(pool.clone()).await;

    assert!(health_check(&pool).await.is_err());
}

#[tokio::test]
async fn test_schema_is_idempotent() {
    let pool = setup().await;

    ensure_schema(&pool).await.expect("Second run should be a no-op");

    let tables = list_tables(&pool).await.unwrap();
    assert_eq!(tables, vec!["todo".to_string(), "user".to_string()]);
}

#[tokio::test]
async fn test_unopenable_database_is_rejected() {
    let config = DatabaseConfig {
        url: "sqlite:///nonexistent-directory/nested/todo.db".to_string(),
        ..DatabaseConfig::in_memory()
    };

    assert!(create_pool(config).await.is_err());
}

#[tokio::test]
async fn test_create_and_find_user() {
    let pool = setup().await;

    let id = User::create(
        &pool,
        CreateUser {
            username: "alice".to_string(),
            password_hash: "$2b$10$hash".to_string(),
        },
    )
    .await
    .unwrap();

    let user = User::find_by_username(&pool, "alice")
        .await
        .unwrap()
        .expect("User should exist");
    assert_eq!(user.id, id);
    assert_eq!(user.password_hash, "$2b$10$hash");

    assert!(User::find_by_username(&pool, "bob").await.unwrap().is_none());
    assert!(User::find_by_username(&pool, "Alice").await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_username_is_unique_violation() {
    let pool = setup().await;
    let data = CreateUser {
        username: "alice".to_string(),
        password_hash: "h".to_string(),
    };

    User::create(&pool, data.clone()).await.unwrap();
    let err = User::create(&pool, data).await.unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => assert!(db_err.is_unique_violation()),
        other => panic!("Expected database error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_todo_lifecycle() {
    let pool = setup().await;

    let id = Todo::create(&pool, new_todo(1, "Buy milk")).await.unwrap();

    let todos = Todo::list_by_user(&pool, 1).await.unwrap();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].id, id);
    assert_eq!(todos[0].description, "Buy milk");

    let updated = Todo::update(
        &pool,
        id,
        1,
        UpdateTodo {
            status: Some("done".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(updated);

    let todo = Todo::find_by_id_and_user(&pool, id, 1).await.unwrap().unwrap();
    assert_eq!(todo.status, "done");
    // Omitted fields are left as they were
    assert_eq!(todo.description, "Buy milk");

    assert!(Todo::delete(&pool, id, 1).await.unwrap());
    assert!(Todo::list_by_user(&pool, 1).await.unwrap().is_empty());
    assert!(!Todo::delete(&pool, id, 1).await.unwrap());
}

#[tokio::test]
async fn test_todos_are_scoped_to_owner() {
    let pool = setup().await;

    let mine = Todo::create(&pool, new_todo(1, "mine")).await.unwrap();
    Todo::create(&pool, new_todo(2, "theirs")).await.unwrap();

    let listed = Todo::list_by_user(&pool, 1).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].description, "mine");

    assert!(Todo::find_by_id_and_user(&pool, mine, 2).await.unwrap().is_none());
    assert!(!Todo::update(&pool, mine, 2, UpdateTodo::default()).await.unwrap());
    assert!(!Todo::delete(&pool, mine, 2).await.unwrap());

    // Still there for the real owner
    assert!(Todo::find_by_id_and_user(&pool, mine, 1).await.unwrap().is_some());
}

#[tokio::test]
async fn test_null_columns_read_as_empty() {
    let pool = setup().await;

    sqlx::query("INSERT INTO todo (user_id, description, status) VALUES (?, NULL, NULL)")
        .bind(5_i64)
        .execute(&pool)
        .await
        .unwrap();

    let todos = Todo::list_by_user(&pool, 5).await.unwrap();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].description, "");
    assert_eq!(todos[0].status, "");
}
