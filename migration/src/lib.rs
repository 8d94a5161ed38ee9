pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_user_table;
mod m20250101_000002_create_article_table;
mod m20250101_000003_create_help_request_table;
mod m20250101_000004_create_menu_item_review_table;
mod m20250101_000005_create_recommendation_request_table;
mod m20250101_000006_create_ucsb_organization_table;
mod m20250101_000007_create_ucsb_dining_commons_menu_item_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_user_table::Migration),
            Box::new(m20250101_000002_create_article_table::Migration),
            Box::new(m20250101_000003_create_help_request_table::Migration),
            Box::new(m20250101_000004_create_menu_item_review_table::Migration),
            Box::new(m20250101_000005_create_recommendation_request_table::Migration),
            Box::new(m20250101_000006_create_ucsb_organization_table::Migration),
            Box::new(m20250101_000007_create_ucsb_dining_commons_menu_item_table::Migration),
        ]
    }
}
