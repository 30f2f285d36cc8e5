use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BusinessEmployees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BusinessEmployees::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(BusinessEmployees::BusinessId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BusinessEmployees::UserId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BusinessEmployees::Role)
                            .string()
                            .not_null()
                            .default("employee"),
                    )
                    .col(
                        ColumnDef::new(BusinessEmployees::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(BusinessEmployees::Table, BusinessEmployees::BusinessId)
                            .to(Businesses::Table, Businesses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(BusinessEmployees::Table, BusinessEmployees::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // One membership per (business, user).
        manager
            .create_index(
                Index::create()
                    .table(BusinessEmployees::Table)
                    .col(BusinessEmployees::BusinessId)
                    .col(BusinessEmployees::UserId)
                    .unique()
                    .name("uq_business_employees_business_id_user_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BusinessEmployees::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum BusinessEmployees {
    Table,
    Id,
    BusinessId,
    UserId,
    Role,
    CreatedAt,
}

#[derive(Iden)]
enum Businesses {
    Table,
    Id,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
