use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create reviews table
        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reviews::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reviews::CompanyId).uuid().not_null())
                    .col(ColumnDef::new(Reviews::AuthorName).string().not_null())
                    .col(ColumnDef::new(Reviews::AuthorPhotoUrl).string())
                    .col(ColumnDef::new(Reviews::Rating).integer().not_null())
                    .col(ColumnDef::new(Reviews::Comment).text())
                    .col(ColumnDef::new(Reviews::Source).string().not_null())
                    .col(ColumnDef::new(Reviews::ExternalReviewId).string())
                    .col(
                        ColumnDef::new(Reviews::ReviewDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reviews::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Reviews::IsApproved)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Reviews::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Reviews::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Idempotent external sync key; NULL external ids (manual reviews) never collide
        manager
            .create_index(
                Index::create()
                    .name("idx_reviews_sync_key")
                    .table(Reviews::Table)
                    .col(Reviews::CompanyId)
                    .col(Reviews::Source)
                    .col(Reviews::ExternalReviewId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reviews::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Reviews {
    Table,
    Id,
    CompanyId,
    AuthorName,
    AuthorPhotoUrl,
    Rating,
    Comment,
    Source,
    ExternalReviewId,
    ReviewDate,
    IsActive,
    IsApproved,
    CreatedAt,
    UpdatedAt,
}
