//! Dining commons menu item factory for creating test entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test dining commons menu items with customizable fields.
pub struct UcsbDiningCommonsMenuItemFactory<'a> {
    db: &'a DatabaseConnection,
    dining_commons_code: String,
    name: String,
    station: String,
}

impl<'a> UcsbDiningCommonsMenuItemFactory<'a> {
    /// Creates a new UcsbDiningCommonsMenuItemFactory with default values.
    ///
    /// Defaults:
    /// - dining_commons_code: `"ortega"`
    /// - name: `"Dish {n}"` where n is auto-incremented
    /// - station: `"Entrees"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            dining_commons_code: "ortega".to_string(),
            name: format!("Dish {}", next_id()),
            station: "Entrees".to_string(),
        }
    }

    pub fn dining_commons_code(mut self, code: impl Into<String>) -> Self {
        self.dining_commons_code = code.into();
        self
    }

    /// Builds and inserts the menu item entity into the database.
    pub async fn build(self) -> Result<entity::ucsb_dining_commons_menu_item::Model, DbErr> {
        entity::ucsb_dining_commons_menu_item::ActiveModel {
            id: ActiveValue::NotSet,
            dining_commons_code: ActiveValue::Set(self.dining_commons_code),
            name: ActiveValue::Set(self.name),
            station: ActiveValue::Set(self.station),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a dining commons menu item with default values.
pub async fn create_menu_item(
    db: &DatabaseConnection,
) -> Result<entity::ucsb_dining_commons_menu_item::Model, DbErr> {
    UcsbDiningCommonsMenuItemFactory::new(db).build().await
}
