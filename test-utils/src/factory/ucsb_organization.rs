//! Organization factory for creating test organization entities.
//!
//! Organizations are keyed by a caller-supplied code; the factory generates a unique
//! code unless one is set.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test organizations with customizable fields.
pub struct UcsbOrganizationFactory<'a> {
    db: &'a DatabaseConnection,
    org_code: String,
    org_translation_short: String,
    org_translation: String,
    inactive: bool,
}

impl<'a> UcsbOrganizationFactory<'a> {
    /// Creates a new UcsbOrganizationFactory with default values.
    ///
    /// Defaults:
    /// - org_code: `"ORG{n}"` where n is auto-incremented
    /// - inactive: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            org_code: format!("ORG{}", n),
            org_translation_short: format!("Org {}", n),
            org_translation: format!("Organization {}", n),
            inactive: false,
        }
    }

    pub fn org_code(mut self, org_code: impl Into<String>) -> Self {
        self.org_code = org_code.into();
        self
    }

    pub fn inactive(mut self, inactive: bool) -> Self {
        self.inactive = inactive;
        self
    }

    /// Builds and inserts the organization entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::ucsb_organization::Model)` - Created organization
    /// - `Err(DbErr)` - Database error during insert, including a duplicate code
    pub async fn build(self) -> Result<entity::ucsb_organization::Model, DbErr> {
        entity::ucsb_organization::ActiveModel {
            org_code: ActiveValue::Set(self.org_code),
            org_translation_short: ActiveValue::Set(self.org_translation_short),
            org_translation: ActiveValue::Set(self.org_translation),
            inactive: ActiveValue::Set(self.inactive),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an organization with default values.
pub async fn create_organization(
    db: &DatabaseConnection,
) -> Result<entity::ucsb_organization::Model, DbErr> {
    UcsbOrganizationFactory::new(db).build().await
}
