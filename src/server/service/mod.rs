//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They work with domain and
//! entity models rather than DTOs and raise the domain errors (`NotFound`) that the
//! controllers propagate.

pub mod record;
pub mod user;
