//! Domain models and resource descriptions.
//!
//! `resource` defines the [`resource::Resource`] trait the generic CRUD engine is built on.
//! Each record module implements it once for its entity.

pub mod article;
pub mod help_request;
pub mod menu_item_review;
pub mod recommendation_request;
pub mod resource;
pub mod ucsb_dining_commons_menu_item;
pub mod ucsb_organization;
pub mod user;
