//! Database repository layer.
//!
//! Repositories wrap SeaORM queries for the record resources and for users. They return
//! entity models (records) or domain models (users) and never build HTTP responses.

pub mod record;
pub mod user;

#[cfg(test)]
mod test;
