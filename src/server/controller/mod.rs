//! HTTP request handlers.
//!
//! Handlers extract state, session and request input, check the caller through
//! `AuthGuard`, delegate to the service layer and convert results into DTOs. Errors are
//! returned as `AppError` and rendered by its `IntoResponse` implementation.

pub mod auth;
pub mod record;
pub mod user;

#[cfg(test)]
mod test;
