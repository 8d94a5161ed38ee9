use axum::{http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::api::MessageDto,
    server::{error::AppError, middleware::session::AuthSession},
};

/// GET /api/auth/logout - Clear the session
///
/// Succeeds whether or not a user was logged in.
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out".to_string(),
        }),
    ))
}
