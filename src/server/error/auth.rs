use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::middleware::auth::Role};

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user is attached to the request.
    ///
    /// Either the session has no user ID or the user it names no longer exists.
    #[error("Request has no authenticated user")]
    NotAuthenticated,

    /// The user is logged in but lacks the role the operation requires.
    #[error("User {user_id} lacks required role {required:?}")]
    MissingRole {
        /// ID of the user that attempted the operation
        user_id: i64,
        /// Role the operation requires
        required: Role,
    },
}

/// Converts authorization errors into HTTP responses.
///
/// Every variant results in 403 Forbidden with the same generic body so that clients
/// cannot distinguish an anonymous caller from an under-privileged one. The specific
/// reason is logged at debug level.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Access denied: {}", self);

        (
            StatusCode::FORBIDDEN,
            Json(ErrorDto {
                error_type: "AccessDeniedException".to_string(),
                message: "Access Denied".to_string(),
            }),
        )
            .into_response()
    }
}
