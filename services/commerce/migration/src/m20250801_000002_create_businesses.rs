use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Businesses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Businesses::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Businesses::Name).string().not_null())
                    .col(ColumnDef::new(Businesses::Category).string().not_null())
                    .col(ColumnDef::new(Businesses::OwnerId).string().not_null())
                    .col(ColumnDef::new(Businesses::ApiKey).string().unique_key())
                    .col(
                        ColumnDef::new(Businesses::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Businesses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Businesses::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Businesses::Table, Businesses::OwnerId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Businesses::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Businesses {
    Table,
    Id,
    Name,
    Category,
    OwnerId,
    ApiKey,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
