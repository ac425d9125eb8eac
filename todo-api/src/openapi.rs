/// OpenAPI document for the HTTP API
///
/// Served as JSON at `/api-docs/openapi.json` and rendered by Swagger UI at
/// `/swagger`.

use crate::{error, routes};
use todo_shared::models::todo::Todo;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

/// Name of the bearer token security scheme referenced by protected paths
pub const BEARER_SCHEME: &str = "bearer";

#[derive(OpenApi)]
#[openapi(
    info(title = "Todo API", description = "User accounts and per-user to-do lists"),
    paths(
        routes::health::health_check,
        routes::auth::register,
        routes::auth::login,
        routes::todos::create_todo,
        routes::todos::list_todos,
        routes::todos::get_todo,
        routes::todos::update_todo,
        routes::todos::delete_todo
    ),
    components(schemas(
        Todo,
        error::ErrorResponse,
        error::ValidationErrorDetail,
        routes::MessageResponse,
        routes::health::HealthResponse,
        routes::auth::RegisterRequest,
        routes::auth::LoginRequest,
        routes::auth::LoginResponse,
        routes::todos::CreateTodoRequest,
        routes::todos::UpdateTodoRequest,
        routes::todos::TodoListResponse,
        routes::todos::TodoResponse
    )),
    modifiers(&BearerSecurity),
    tags(
        (name = "health", description = "Service health"),
        (name = "auth", description = "Registration and login"),
        (name = "todos", description = "To-do items of the authenticated user")
    )
)]
pub struct ApiDoc;

/// Registers the `bearer` HTTP security scheme
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            BEARER_SCHEME,
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}
