//! Authorization gate.
//!
//! Every operation declares a [`Capability`]. The gate compares it with the caller's
//! role set and either allows the request or fails with [`AuthError`], which the error
//! layer turns into 403 Forbidden before any data is touched.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Roles a user can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Granted to every known user.
    User,
    /// Granted to users flagged as admin.
    Admin,
}

impl Role {
    /// Authority string reported to clients.
    pub fn authority(&self) -> &'static str {
        match self {
            Role::User => "ROLE_USER",
            Role::Admin => "ROLE_ADMIN",
        }
    }
}

/// What an operation requires of its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Anyone, including anonymous callers.
    None,
    /// Any logged-in user.
    Authenticated,
    /// A logged-in user holding the admin role.
    Elevated,
}

/// Checks a caller against the capability an operation requires.
///
/// # Arguments
/// - `caller` - The resolved caller, or `None` for an anonymous request
/// - `capability` - The operation's requirement
///
/// # Returns
/// - `Ok(())` - The caller may proceed
/// - `Err(AuthError::NotAuthenticated)` - Anonymous caller on a protected operation
/// - `Err(AuthError::MissingRole)` - Logged-in caller without the admin role on an elevated operation
pub fn authorize(caller: Option<&User>, capability: Capability) -> Result<(), AuthError> {
    let required = match capability {
        Capability::None => return Ok(()),
        Capability::Authenticated => Role::User,
        Capability::Elevated => Role::Admin,
    };

    let Some(user) = caller else {
        return Err(AuthError::NotAuthenticated);
    };

    if user.roles().contains(&required) {
        Ok(())
    } else {
        Err(AuthError::MissingRole {
            user_id: user.id,
            required,
        })
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the caller from the session.
    ///
    /// A session that names a user who no longer exists is treated as anonymous.
    pub async fn caller(&self) -> Result<Option<User>, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Ok(None);
        };

        let user = UserRepository::new(self.db).find_by_id(user_id).await?;

        if user.is_none() {
            tracing::debug!("Session references missing user {}", user_id);
        }

        Ok(user)
    }

    /// Resolves the caller and checks it against `capability`.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Authorized, logged-in caller
    /// - `Ok(None)` - Anonymous caller on an operation requiring `Capability::None`
    /// - `Err(AppError::AuthErr(_))` - Caller is not allowed to perform the operation
    /// - `Err(AppError::DbErr(_))` / `Err(AppError::SessionErr(_))` - Failed to resolve the caller
    pub async fn require(&self, capability: Capability) -> Result<Option<User>, AppError> {
        let caller = self.caller().await?;

        authorize(caller.as_ref(), capability)?;

        Ok(caller)
    }
}
