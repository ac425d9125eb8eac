/// Authentication endpoints
///
/// - `POST /register` - Create an account
/// - `POST /login` - Exchange username and password for a bearer token

use crate::{
    app::AppState,
    error::{ApiError, ApiResult, ErrorResponse},
    extract::ApiJson,
    routes::MessageResponse,
};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use todo_shared::{
    auth::{jwt, password},
    models::user::{CreateUser, User},
};
use utoipa::ToSchema;
use validator::Validate;

/// Message for both unknown usernames and wrong passwords
const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Register request
///
/// Missing fields deserialize as empty strings and fail validation.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// Desired username
    #[serde(default)]
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    /// Plaintext password
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// Username
    #[serde(default)]
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    /// Plaintext password
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    /// Always true
    pub status: bool,

    /// "Login successful"
    pub message: String,

    /// Bearer token, valid for one hour
    pub token: String,

    /// Username of the account
    #[serde(rename = "userName")]
    pub user_name: String,

    /// ID of the account
    #[serde(rename = "userId")]
    pub user_id: i64,
}

/// Register a new user
///
/// # Errors
///
/// - `400 Bad Request`: Empty username or password
/// - `409 Conflict`: Username already exists
/// - `500 Internal Server Error`: Storage failure
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User created", body = MessageResponse),
        (status = 400, description = "Empty fields or malformed body", body = ErrorResponse),
        (status = 409, description = "Username already exists", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn register(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> ApiResult<Json<MessageResponse>> {
    req.validate()?;

    if User::find_by_username(&state.db, &req.username).await?.is_some() {
        return Err(ApiError::Conflict("Username already exists".to_string()));
    }

    let password_hash = password::hash_password_blocking(req.password).await?;

    // A concurrent registration can still win the race; the UNIQUE
    // constraint then surfaces as 409 through From<sqlx::Error>.
    let user_id = User::create(
        &state.db,
        CreateUser {
            username: req.username.clone(),
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id, username = %req.username, "User registered");

    Ok(Json(MessageResponse::ok("User created successfully")))
}

/// Log in and receive a bearer token
///
/// # Errors
///
/// - `400 Bad Request`: Empty username or password
/// - `401 Unauthorized`: Wrong password
/// - `403 Forbidden`: No such user
/// - `500 Internal Server Error`: Storage failure
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Empty fields or malformed body", body = ErrorResponse),
        (status = 401, description = "Wrong password", body = ErrorResponse),
        (status = 403, description = "Unknown username", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    req.validate()?;

    let user = User::find_by_username(&state.db, &req.username)
        .await?
        .ok_or_else(|| {
            tracing::debug!(username = %req.username, "Login for unknown user");
            ApiError::Forbidden(INVALID_CREDENTIALS.to_string())
        })?;

    let valid = password::verify_password_blocking(req.password, user.password_hash.clone()).await?;
    if !valid {
        tracing::debug!(user_id = user.id, "Login with wrong password");
        return Err(ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    }

    let token = jwt::issue_token(user.id, &user.username, state.jwt_secret())?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(LoginResponse {
        status: true,
        message: "Login successful".to_string(),
        token,
        user_name: user.username,
        user_id: user.id,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_fail_validation() {
        let req: RegisterRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.username, "");

        let err = req.validate().unwrap_err();
        let fields = err.field_errors();
        assert!(fields.contains_key("username"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_login_request_validates() {
        let req: LoginRequest =
            serde_json::from_str(r#"{"username":"a","password":"p"}"#).unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_login_response_field_names() {
        let json = serde_json::to_value(LoginResponse {
            status: true,
            message: "Login successful".to_string(),
            token: "t".to_string(),
            user_name: "alice".to_string(),
            user_id: 7,
        })
        .unwrap();

        assert_eq!(json["userName"], "alice");
        assert_eq!(json["userId"], 7);
        assert!(json.get("user_name").is_none());
    }
}
