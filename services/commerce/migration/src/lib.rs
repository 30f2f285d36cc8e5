use sea_orm_migration::prelude::*;

mod m20250801_000001_create_users;
mod m20250801_000002_create_businesses;
mod m20250801_000003_create_business_employees;
mod m20250801_000004_create_products;
mod m20250801_000005_create_sales;
mod m20250801_000006_create_sale_items;
mod m20250801_000007_create_invoices;
mod m20250801_000008_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_create_users::Migration),
            Box::new(m20250801_000002_create_businesses::Migration),
            Box::new(m20250801_000003_create_business_employees::Migration),
            Box::new(m20250801_000004_create_products::Migration),
            Box::new(m20250801_000005_create_sales::Migration),
            Box::new(m20250801_000006_create_sale_items::Migration),
            Box::new(m20250801_000007_create_invoices::Migration),
            Box::new(m20250801_000008_add_indexes::Migration),
        ]
    }
}
