//! Request-scoped helpers: typed session access and the authorization gate.

pub mod auth;
pub mod session;
