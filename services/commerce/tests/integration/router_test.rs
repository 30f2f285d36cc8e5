use axum::http::StatusCode;
use axum_test::TestServer;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};

use tradepost_commerce::infra::identity_provider::HttpIdentityProvider;
use tradepost_commerce::router::build_router;
use tradepost_commerce::state::AppState;
use tradepost_commerce_schema::businesses;
use tradepost_testing::auth::MockBearer;

/// State wired to a mock database and unreachable redis/provider endpoints.
/// Good enough for routing, extraction, and error-shape assertions.
fn test_state(db: DatabaseConnection) -> AppState {
    let redis = deadpool_redis::Config::from_url("redis://127.0.0.1:1")
        .create_pool(None)
        .unwrap();
    AppState {
        db,
        redis,
        identity_provider: HttpIdentityProvider::new("http://127.0.0.1:1"),
        low_stock_threshold: 5,
    }
}

fn server(db: DatabaseConnection) -> TestServer {
    TestServer::new(build_router(test_state(db))).unwrap()
}

#[tokio::test]
async fn should_answer_health_checks() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let server = server(db);

    server.get("/healthz").await.assert_status_ok();
    server.get("/readyz").await.assert_status_ok();
}

#[tokio::test]
async fn should_reject_missing_credential_before_business_logic() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let server = server(db);

    let response = server.get("/auth/user").await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn should_reject_invalid_game_api_key_with_401() {
    // The API-key lookup returns no business; nothing else is queried.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<businesses::Model>::new()])
        .into_connection();
    let server = server(db);

    let response = server
        .post("/game/sales")
        .json(&serde_json::json!({
            "businessApiKey": "bk_wrong",
            "buyerName": "Ricky Vasquez",
            "items": [{"productId": "0198c2be-7088-7787-a44c-1f2b6a3c7c1e", "quantity": 1}],
        }))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "INVALID_API_KEY");
}

#[tokio::test]
async fn should_surface_infrastructure_failure_as_internal() {
    // Credential present, but the identity cache is unreachable: the client
    // sees a generic internal error, not the dependency detail.
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let server = server(db);

    let bearer = MockBearer::new("some-token");
    let mut request = server.get("/auth/user");
    for (name, value) in bearer.headers().iter() {
        request = request.add_header(name.clone(), value.clone());
    }
    let response = request.await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "INTERNAL");
    assert_eq!(body["message"], "internal error");
}
