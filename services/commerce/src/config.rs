/// Commerce service configuration loaded from environment variables.
#[derive(Debug)]
pub struct CommerceConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// Redis connection URL for the identity-mirror cache.
    pub redis_url: String,
    /// TCP port for the HTTP server (default 3101). Env var: `COMMERCE_PORT`.
    pub commerce_port: u16,
    /// Base URL of the external identity provider
    /// (e.g. "https://id.example.com").
    pub identity_provider_url: String,
    /// Stock level at or below which a product counts as low stock
    /// (default 5). Env var: `LOW_STOCK_THRESHOLD`.
    pub low_stock_threshold: i32,
}

impl CommerceConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            redis_url: std::env::var("REDIS_URL").expect("REDIS_URL"),
            commerce_port: std::env::var("COMMERCE_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3101),
            identity_provider_url: std::env::var("IDENTITY_PROVIDER_URL")
                .expect("IDENTITY_PROVIDER_URL"),
            low_stock_threshold: std::env::var("LOW_STOCK_THRESHOLD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
        }
    }
}
