use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(BusinessEmployees::Table)
                    .col(BusinessEmployees::UserId)
                    .name("idx_business_employees_user_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Products::Table)
                    .col(Products::BusinessId)
                    .name("idx_products_business_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Sales::Table)
                    .col(Sales::BusinessId)
                    .col(Sales::CreatedAt)
                    .name("idx_sales_business_id_created_at")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(SaleItems::Table)
                    .col(SaleItems::SaleId)
                    .name("idx_sale_items_sale_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_sale_items_sale_id").to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_sales_business_id_created_at")
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(Index::drop().name("idx_products_business_id").to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_business_employees_user_id")
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum BusinessEmployees {
    Table,
    UserId,
}

#[derive(Iden)]
enum Products {
    Table,
    BusinessId,
}

#[derive(Iden)]
enum Sales {
    Table,
    BusinessId,
    CreatedAt,
}

#[derive(Iden)]
enum SaleItems {
    Table,
    SaleId,
}
