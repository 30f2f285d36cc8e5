use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(tradepost_commerce_migration::Migrator).await;
}
