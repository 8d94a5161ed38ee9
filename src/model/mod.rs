//! JSON shapes exchanged with API clients.
//!
//! Field names are camelCase and are part of the wire contract.

pub mod api;
pub mod article;
pub mod help_request;
pub mod menu_item_review;
pub mod recommendation_request;
pub mod ucsb_dining_commons_menu_item;
pub mod ucsb_organization;
pub mod user;
