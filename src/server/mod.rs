//! Server-side API backend.
//!
//! This module contains the complete backend for the record resources: HTTP handlers,
//! authorization, business logic and data access. The backend uses Axum as the web
//! framework, SeaORM for database operations and tower-sessions for caller identity.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations over SeaORM entities
//! - **Model Layer** (`model/`) - Domain models and the `Resource` descriptions
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session access and the authorization gate
//!
//! # Generic resources
//!
//! Every record resource (articles, help requests, menu item reviews, recommendation
//! requests, organizations, dining commons menu items) is served by the same generic
//! controller, service and repository. Each resource only contributes a `Resource`
//! implementation describing its entity, identity, display name, routes and the
//! conversions between request payloads and stored rows.
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to the resource's generic handler
//! 2. **Controller** resolves the caller from the session and checks the operation's capability
//! 3. **Service** executes the operation, raising `NotFound` for unknown identities
//! 4. **Data** reads or writes the row through SeaORM
//! 5. **Controller** converts the stored row to its DTO; errors map to the `{type, message}` envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
