use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RecommendationRequest::Table)
                    .if_not_exists()
                    .col(big_pk_auto(RecommendationRequest::Id))
                    .col(string(RecommendationRequest::RequesterEmail))
                    .col(string(RecommendationRequest::ProfessorEmail))
                    .col(text(RecommendationRequest::Explanation))
                    .col(date_time(RecommendationRequest::DateRequested))
                    .col(date_time(RecommendationRequest::DateNeeded))
                    .col(boolean(RecommendationRequest::Done).default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RecommendationRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RecommendationRequest {
    Table,
    Id,
    RequesterEmail,
    ProfessorEmail,
    Explanation,
    DateRequested,
    DateNeeded,
    Done,
}
