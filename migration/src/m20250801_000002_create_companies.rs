use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create companies table
        manager
            .create_table(
                Table::create()
                    .table(Companies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Companies::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Companies::Name).string().not_null())
                    .col(ColumnDef::new(Companies::Slug).string().not_null())
                    .col(ColumnDef::new(Companies::Description).text())
                    .col(ColumnDef::new(Companies::StreetAddress).string())
                    .col(ColumnDef::new(Companies::PostalCode).string())
                    .col(ColumnDef::new(Companies::City).string())
                    .col(ColumnDef::new(Companies::Phone).string())
                    .col(ColumnDef::new(Companies::Email).string())
                    .col(ColumnDef::new(Companies::Website).string())
                    .col(ColumnDef::new(Companies::Images).json().not_null())
                    .col(ColumnDef::new(Companies::Latitude).double())
                    .col(ColumnDef::new(Companies::Longitude).double())
                    .col(ColumnDef::new(Companies::Rating).double())
                    .col(
                        ColumnDef::new(Companies::ReviewCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Companies::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Companies::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Companies::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // One shared catalogue: slug is unique across every tenant
        manager
            .create_index(
                Index::create()
                    .name("idx_companies_slug")
                    .table(Companies::Table)
                    .col(Companies::Slug)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Companies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Companies {
    Table,
    Id,
    Name,
    Slug,
    Description,
    StreetAddress,
    PostalCode,
    City,
    Phone,
    Email,
    Website,
    Images,
    Latitude,
    Longitude,
    Rating,
    ReviewCount,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
