//! Campus Records Test Utils
//!
//! Provides shared testing utilities for the campus records service. This crate offers a
//! builder for creating test contexts with in-memory SQLite databases and factories that
//! insert entities with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection and a session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders for every entity
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn finds_article() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_record_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     let article = factory::create_article(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
