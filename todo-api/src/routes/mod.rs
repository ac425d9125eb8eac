/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `auth`: Registration and login
/// - `todos`: To-do CRUD for the authenticated user

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod auth;
pub mod health;
pub mod todos;

/// Response carrying only a status flag and a message
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// True on success
    pub status: bool,

    /// Human-readable outcome
    pub message: String,
}

impl MessageResponse {
    /// Successful response with the given message
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: true,
            message: message.into(),
        }
    }
}
