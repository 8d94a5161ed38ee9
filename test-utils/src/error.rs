use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to the in-memory database or create its tables.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Failed to read or write the test session.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// The session has no ID after saving it.
    #[error("Session was not assigned an ID")]
    SessionNotSaved,
}
