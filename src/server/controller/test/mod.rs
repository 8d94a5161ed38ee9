//! Controller tests driving the full router.
//!
//! Each test builds the real router over an in-memory database, logs a caller in by
//! writing their ID into a stored session, and sends requests with the session cookie.

use axum::{
    body::{Body, Bytes},
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    error::AppError, middleware::session::AuthSession, router::router, state::AppState,
};

mod record;

/// Who is making the requests.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Caller {
    Anonymous,
    User,
    Admin,
}

struct TestApp {
    context: TestContext,
    router: Router,
    cookie: Option<String>,
}

impl TestApp {
    /// Builds the router over fresh record tables with `caller` logged in.
    async fn new(caller: Caller) -> Result<Self, AppError> {
        let mut context = TestBuilder::new()
            .with_record_tables()
            .build()
            .await
            .unwrap();
        let db = context.database().await.unwrap().clone();

        let cookie = match caller {
            Caller::Anonymous => None,
            Caller::User | Caller::Admin => {
                let user = factory::user::UserFactory::new(&db)
                    .admin(caller == Caller::Admin)
                    .build()
                    .await?;
                let session = context.session().await.unwrap();
                AuthSession::new(session).set_user_id(user.id).await?;
                Some(context.session_cookie().await.unwrap())
            }
        };

        let session_store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
        let router = router()
            .with_state(AppState::new(db))
            .layer(SessionManagerLayer::new(session_store));

        Ok(Self {
            context,
            router,
            cookie,
        })
    }

    fn db(&self) -> &DatabaseConnection {
        self.context.db.as_ref().unwrap()
    }

    /// Sends a request and returns the status with the raw response body.
    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Bytes) {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(cookie) = &self.cookie {
            request = request.header(header::COOKIE, cookie);
        }

        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, bytes)
    }

    /// Sends a request and parses the response body as JSON.
    async fn send_json(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let (status, bytes) = self.send(method, uri, body).await;
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, value)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send_json(Method::GET, uri, None).await
    }
}
