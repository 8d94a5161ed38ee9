use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Name of the cookie carrying the session ID, as set by `SessionManagerLayer` by default.
const SESSION_COOKIE_NAME: &str = "id";

/// Test context holding an in-memory database and a session stored in it.
///
/// Both are created lazily on first access and live as long as the context. The
/// session shares the database's pool, so a router built over `db` with a
/// `SqliteStore` on the same pool can load it from a cookie.
pub struct TestContext {
    /// Connection to the in-memory SQLite database, created by `database()`.
    pub db: Option<DatabaseConnection>,

    /// Session created by `session()` and stored in the same database.
    pub session: Option<Session>,
}

impl TestContext {
    /// Creates a new empty test context.
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
        }
    }

    /// Gets or creates the in-memory SQLite database connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::DbErr)` - Failed to connect to in-memory SQLite database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;

                Ok(&*self.db.insert(db))
            }
        }
    }

    /// Executes the CREATE TABLE statements collected by `TestBuilder`.
    ///
    /// # Arguments
    /// - `stmts` - Statements to execute in order
    ///
    /// # Returns
    /// - `Ok(())` - All tables created
    /// - `Err(TestError::DbErr)` - Failed to create one or more tables
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Gets or creates the test session.
    ///
    /// On first call this creates the session table in the test database and a fresh
    /// session with the same 7-day inactivity expiry the server uses.
    ///
    /// # Returns
    /// - `Ok(&Session)` - Reference to the session instance
    /// - `Err(TestError::DbErr)` - Failed to initialize database connection or session table
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        match self.session {
            Some(ref session) => Ok(session),
            None => {
                let db = self.database().await?;

                let session_store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
                session_store
                    .migrate()
                    .await
                    .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

                let session = Session::new(
                    None,
                    Arc::new(session_store),
                    Some(Expiry::OnInactivity(Duration::days(7))),
                );

                Ok(&*self.session.insert(session))
            }
        }
    }

    /// Gets or creates both database and session references.
    ///
    /// Avoids holding two mutable borrows when a test needs both.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.database().await?;
        self.session().await?;

        Ok((self.db.as_ref().unwrap(), self.session.as_ref().unwrap()))
    }

    /// Persists the session and returns a `Cookie` header value naming it.
    ///
    /// Call after writing the logged-in user into the session. Requests sent with the
    /// returned header are resolved to that session by the server's session layer.
    ///
    /// # Returns
    /// - `Ok(String)` - Header value of the form `id=<session id>`
    /// - `Err(TestError::SessionErr)` - Failed to save the session
    pub async fn session_cookie(&mut self) -> Result<String, TestError> {
        let session = self.session().await?;
        session.save().await?;

        let id = session.id().ok_or(TestError::SessionNotSaved)?;

        Ok(format!("{}={}", SESSION_COOKIE_NAME, id))
    }
}
