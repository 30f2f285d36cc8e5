use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use tower_http::trace::TraceLayer;

use tradepost_core::health::{healthz, readyz};
use tradepost_core::middleware::request_id_layer;

use crate::handlers::{
    auth::get_current_user,
    business::{
        create_business, delete_business, get_business, list_businesses, regenerate_api_key,
        update_business,
    },
    dashboard::get_dashboard_stats,
    employee::{add_employee, list_employees, remove_employee},
    game::create_game_sale,
    invoice::{list_invoices, update_invoice},
    product::{create_product, delete_product, list_low_stock, list_products, update_product},
    sale::{create_sale, get_sale, list_sales},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Auth
        .route("/auth/user", get(get_current_user))
        // Businesses
        .route("/businesses", get(list_businesses))
        .route("/businesses", post(create_business))
        .route("/businesses/{id}", get(get_business))
        .route("/businesses/{id}", patch(update_business))
        .route("/businesses/{id}", delete(delete_business))
        .route("/businesses/{id}/api-key", post(regenerate_api_key))
        // Employees
        .route("/businesses/{id}/employees", get(list_employees))
        .route("/businesses/{id}/employees", post(add_employee))
        .route(
            "/businesses/{id}/employees/{user_id}",
            delete(remove_employee),
        )
        // Products
        .route("/businesses/{id}/products", get(list_products))
        .route("/businesses/{id}/products", post(create_product))
        .route("/products/low-stock", get(list_low_stock))
        .route("/products/{id}", patch(update_product))
        .route("/products/{id}", delete(delete_product))
        // Sales
        .route("/sales", get(list_sales))
        .route("/sales", post(create_sale))
        .route("/sales/{id}", get(get_sale))
        // Invoices
        .route("/invoices", get(list_invoices))
        .route("/invoices/{id}", patch(update_invoice))
        // Game integration
        .route("/game/sales", post(create_game_sale))
        // Dashboard
        .route("/dashboard/stats", get(get_dashboard_stats))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
