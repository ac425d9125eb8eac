/// To-do endpoints
///
/// All routes require a bearer token and only ever see the caller's own
/// todos. A todo owned by someone else answers exactly like a missing one.
///
/// # Endpoints
///
/// - `POST /todos` - Create a todo
/// - `GET /todos` - List the caller's todos
/// - `GET /todos/:id` - Fetch one todo
/// - `PUT /todos/:id` - Update description and/or status
/// - `DELETE /todos/:id` - Delete a todo

use crate::{
    app::AppState,
    error::{ApiError, ApiResult, ErrorResponse},
    extract::{ApiJson, ApiPath},
    routes::MessageResponse,
};
use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use todo_shared::{
    auth::middleware::AuthUser,
    models::todo::{CreateTodo, Todo, UpdateTodo},
};
use utoipa::ToSchema;

/// Status given to todos created without one
pub const DEFAULT_STATUS: &str = "pending";

fn todo_not_found() -> ApiError {
    ApiError::NotFound("Todo not found".to_string())
}

/// Create todo request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateTodoRequest {
    /// Owner; must be the caller when given
    pub user_id: Option<i64>,

    /// Description (default: empty)
    pub description: Option<String>,

    /// Status (default: "pending")
    pub status: Option<String>,
}

/// Update todo request
///
/// Omitted fields keep their stored value.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateTodoRequest {
    /// New description
    pub description: Option<String>,

    /// New status
    pub status: Option<String>,
}

/// List response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TodoListResponse {
    /// Always true
    pub status: bool,

    /// The caller's todos, oldest first
    pub todos: Vec<Todo>,
}

/// Single todo response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TodoResponse {
    /// Always true
    pub status: bool,

    /// The requested todo
    pub todo: Todo,
}

/// Create a todo for the caller
#[utoipa::path(
    post,
    path = "/todos",
    request_body = CreateTodoRequest,
    responses(
        (status = 200, description = "Todo created", body = MessageResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "user_id names another user", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    security(("bearer" = [])),
    tag = "todos"
)]
pub async fn create_todo(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ApiJson(req): ApiJson<CreateTodoRequest>,
) -> ApiResult<Json<MessageResponse>> {
    if let Some(owner) = req.user_id {
        if owner != user.id {
            tracing::warn!(
                user_id = user.id,
                requested_owner = owner,
                "Rejected todo creation for another user"
            );
            return Err(ApiError::Forbidden(
                "Cannot create todos for another user".to_string(),
            ));
        }
    }

    let id = Todo::create(
        &state.db,
        CreateTodo {
            user_id: user.id,
            description: req.description.unwrap_or_default(),
            status: req.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        },
    )
    .await?;

    tracing::debug!(todo_id = id, user_id = user.id, "Todo created");

    Ok(Json(MessageResponse::ok("Todo created successfully")))
}

/// List the caller's todos
#[utoipa::path(
    get,
    path = "/todos",
    responses(
        (status = 200, description = "The caller's todos", body = TodoListResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    security(("bearer" = [])),
    tag = "todos"
)]
pub async fn list_todos(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<TodoListResponse>> {
    let todos = Todo::list_by_user(&state.db, user.id).await?;

    Ok(Json(TodoListResponse {
        status: true,
        todos,
    }))
}

/// Fetch one of the caller's todos
#[utoipa::path(
    get,
    path = "/todos/{id}",
    params(("id" = i64, Path, description = "Todo ID")),
    responses(
        (status = 200, description = "The todo", body = TodoResponse),
        (status = 400, description = "Non-numeric ID", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    security(("bearer" = [])),
    tag = "todos"
)]
pub async fn get_todo(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<TodoResponse>> {
    let todo = Todo::find_by_id_and_user(&state.db, id, user.id)
        .await?
        .ok_or_else(todo_not_found)?;

    Ok(Json(TodoResponse { status: true, todo }))
}

/// Update one of the caller's todos
#[utoipa::path(
    put,
    path = "/todos/{id}",
    params(("id" = i64, Path, description = "Todo ID")),
    request_body = UpdateTodoRequest,
    responses(
        (status = 200, description = "Todo updated", body = MessageResponse),
        (status = 400, description = "Malformed body or ID", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    security(("bearer" = [])),
    tag = "todos"
)]
pub async fn update_todo(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<UpdateTodoRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let updated = Todo::update(
        &state.db,
        id,
        user.id,
        UpdateTodo {
            description: req.description,
            status: req.status,
        },
    )
    .await?;

    if !updated {
        return Err(todo_not_found());
    }

    tracing::debug!(todo_id = id, user_id = user.id, "Todo updated");

    Ok(Json(MessageResponse::ok("Todo updated successfully")))
}

/// Delete one of the caller's todos
#[utoipa::path(
    delete,
    path = "/todos/{id}",
    params(("id" = i64, Path, description = "Todo ID")),
    responses(
        (status = 200, description = "Todo deleted", body = MessageResponse),
        (status = 400, description = "Non-numeric ID", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    security(("bearer" = [])),
    tag = "todos"
)]
pub async fn delete_todo(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<MessageResponse>> {
    if !Todo::delete(&state.db, id, user.id).await? {
        return Err(todo_not_found());
    }

    tracing::debug!(todo_id = id, user_id = user.id, "Todo deleted");

    Ok(Json(MessageResponse::ok("Todo deleted successfully")))
}
