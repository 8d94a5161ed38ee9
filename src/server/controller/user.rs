use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::user::UserDto,
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthGuard, Capability},
        service::user::UserService,
        state::AppState,
    },
};

/// GET /api/currentUser - Get the logged-in user and their roles
///
/// # Authentication
/// Requires user to be logged in
///
/// # Returns
/// - `200 OK`: JSON CurrentUserDto with `ROLE_USER` and, for admins, `ROLE_ADMIN`
/// - `403 Forbidden`: No logged-in user
pub async fn current_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(Capability::Authenticated)
        .await?
        .ok_or(AuthError::NotAuthenticated)?;

    Ok((StatusCode::OK, Json(user.into_current_user_dto())))
}

/// GET /api/admin/users - List all users
///
/// # Authentication
/// Requires admin role
///
/// # Returns
/// - `200 OK`: JSON array of UserDto ordered by ID
/// - `403 Forbidden`: Caller is not an admin
pub async fn get_all_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(Capability::Elevated)
        .await?;

    let users: Vec<UserDto> = UserService::new(&state.db)
        .get_all_users()
        .await?
        .into_iter()
        .map(|u| u.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(users)))
}
