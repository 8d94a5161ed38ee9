use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuItemReview::Table)
                    .if_not_exists()
                    .col(big_pk_auto(MenuItemReview::Id))
                    .col(big_integer(MenuItemReview::ItemId))
                    .col(string(MenuItemReview::ReviewerEmail))
                    .col(integer(MenuItemReview::Stars))
                    .col(date_time(MenuItemReview::DateReviewed))
                    .col(text(MenuItemReview::Comments))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MenuItemReview::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MenuItemReview {
    Table,
    Id,
    ItemId,
    ReviewerEmail,
    Stars,
    DateReviewed,
    Comments,
}
