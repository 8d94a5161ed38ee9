use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HelpRequest::Table)
                    .if_not_exists()
                    .col(big_pk_auto(HelpRequest::Id))
                    .col(string(HelpRequest::RequesterEmail))
                    .col(string(HelpRequest::TeamId))
                    .col(string(HelpRequest::TableOrBreakoutRoom))
                    .col(date_time(HelpRequest::RequestTime))
                    .col(text(HelpRequest::Explanation))
                    .col(boolean(HelpRequest::Solved).default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HelpRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HelpRequest {
    Table,
    Id,
    RequesterEmail,
    TeamId,
    TableOrBreakoutRoom,
    RequestTime,
    Explanation,
    Solved,
}
