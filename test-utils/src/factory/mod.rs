//! Factory methods for creating test data.
//!
//! Each entity has a `*Factory` builder for customization and a `create_*` convenience
//! function for quick default creation. Defaults are made unique with a process-wide
//! counter so several records can be created in one test without collisions.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let admin = factory::create_admin(&db).await?;
//! let article = factory::article::ArticleFactory::new(&db)
//!     .title("Test Article")
//!     .build()
//!     .await?;
//! ```

pub mod article;
pub mod help_request;
pub mod helpers;
pub mod menu_item_review;
pub mod recommendation_request;
pub mod ucsb_dining_commons_menu_item;
pub mod ucsb_organization;
pub mod user;

pub use article::create_article;
pub use help_request::create_help_request;
pub use menu_item_review::create_menu_item_review;
pub use recommendation_request::create_recommendation_request;
pub use ucsb_dining_commons_menu_item::create_menu_item;
pub use ucsb_organization::create_organization;
pub use user::{create_admin, create_user};
