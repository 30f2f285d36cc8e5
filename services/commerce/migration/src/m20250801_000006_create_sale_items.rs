use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SaleItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SaleItems::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SaleItems::SaleId).uuid().not_null())
                    .col(ColumnDef::new(SaleItems::ProductId).uuid())
                    .col(ColumnDef::new(SaleItems::ProductName).string().not_null())
                    .col(ColumnDef::new(SaleItems::Quantity).integer().not_null())
                    .col(
                        ColumnDef::new(SaleItems::UnitPrice)
                            .decimal_len(12, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SaleItems::TotalPrice)
                            .decimal_len(12, 2)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(SaleItems::Table, SaleItems::SaleId)
                            .to(Sales::Table, Sales::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    // Keep sale history when a product is deleted.
                    .foreign_key(
                        ForeignKey::create()
                            .from(SaleItems::Table, SaleItems::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SaleItems::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum SaleItems {
    Table,
    Id,
    SaleId,
    ProductId,
    ProductName,
    Quantity,
    UnitPrice,
    TotalPrice,
}

#[derive(Iden)]
enum Sales {
    Table,
    Id,
}

#[derive(Iden)]
enum Products {
    Table,
    Id,
}
