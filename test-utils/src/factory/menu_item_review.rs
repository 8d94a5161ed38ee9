//! Menu item review factory for creating test review entities.

use crate::factory::helpers::{midnight, next_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test menu item reviews with customizable fields.
pub struct MenuItemReviewFactory<'a> {
    db: &'a DatabaseConnection,
    item_id: i64,
    stars: i32,
    comments: String,
}

impl<'a> MenuItemReviewFactory<'a> {
    /// Creates a new MenuItemReviewFactory with default values.
    ///
    /// Defaults:
    /// - item_id: auto-incremented
    /// - stars: `3`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            item_id: n as i64,
            stars: 3,
            comments: format!("Review {}", n),
        }
    }

    pub fn stars(mut self, stars: i32) -> Self {
        self.stars = stars;
        self
    }

    /// Builds and inserts the review entity into the database.
    pub async fn build(self) -> Result<entity::menu_item_review::Model, DbErr> {
        entity::menu_item_review::ActiveModel {
            id: ActiveValue::NotSet,
            item_id: ActiveValue::Set(self.item_id),
            reviewer_email: ActiveValue::Set("reviewer@ucsb.edu".to_string()),
            stars: ActiveValue::Set(self.stars),
            date_reviewed: ActiveValue::Set(midnight(2022, 1, 3)),
            comments: ActiveValue::Set(self.comments),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a menu item review with default values.
pub async fn create_menu_item_review(
    db: &DatabaseConnection,
) -> Result<entity::menu_item_review::Model, DbErr> {
    MenuItemReviewFactory::new(db).build().await
}
