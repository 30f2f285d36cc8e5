use sea_orm::Database;
use tracing::info;

use tradepost_commerce::config::CommerceConfig;
use tradepost_commerce::infra::identity_provider::HttpIdentityProvider;
use tradepost_commerce::router::build_router;
use tradepost_commerce::state::AppState;
use tradepost_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = CommerceConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let redis = deadpool_redis::Config::from_url(&config.redis_url)
        .create_pool(Some(deadpool_redis::Runtime::Tokio1))
        .expect("failed to create redis pool");

    let state = AppState {
        db,
        redis,
        identity_provider: HttpIdentityProvider::new(&config.identity_provider_url),
        low_stock_threshold: config.low_stock_threshold,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.commerce_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("commerce service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
