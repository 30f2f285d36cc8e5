use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sales::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Sales::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Sales::BusinessId).uuid().not_null())
                    .col(ColumnDef::new(Sales::SellerId).string().not_null())
                    .col(ColumnDef::new(Sales::BuyerName).string().not_null())
                    .col(ColumnDef::new(Sales::BuyerInfo).string())
                    .col(
                        ColumnDef::new(Sales::TotalAmount)
                            .decimal_len(12, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Sales::Status)
                            .string()
                            .not_null()
                            .default("completed"),
                    )
                    .col(
                        ColumnDef::new(Sales::Source)
                            .string()
                            .not_null()
                            .default("web"),
                    )
                    .col(
                        ColumnDef::new(Sales::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Sales::Table, Sales::BusinessId)
                            .to(Businesses::Table, Businesses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Sales::Table, Sales::SellerId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sales::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Sales {
    Table,
    Id,
    BusinessId,
    SellerId,
    BuyerName,
    BuyerInfo,
    TotalAmount,
    Status,
    Source,
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
