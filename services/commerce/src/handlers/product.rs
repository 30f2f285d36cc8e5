use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tradepost_domain::pagination::PageRequest;

use crate::domain::repository::ProductChanges;
use crate::domain::types::Product;
use crate::error::CommerceServiceError;
use crate::extract::CurrentUser;
use crate::state::AppState;
use crate::usecase::product::{
    CreateProductInput, CreateProductUseCase, DeleteProductUseCase, ListProductsUseCase,
    LowStockUseCase, UpdateProductUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: Uuid,
    pub business_id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub stock: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub is_active: bool,
    #[serde(serialize_with = "tradepost_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "tradepost_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            business_id: p.business_id,
            name: p.name,
            price: p.price,
            stock: p.stock,
            category: p.category,
            is_active: p.is_active,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

// ── GET /businesses/{id}/products ────────────────────────────────────────────

pub async fn list_products(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(business_id): Path<Uuid>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Vec<ProductResponse>>, CommerceServiceError> {
    let usecase = ListProductsUseCase {
        policy: state.policy(),
        products: state.product_repo(),
    };
    let products = usecase.execute(&user.user_id, business_id, page).await?;
    Ok(Json(
        products.into_iter().map(ProductResponse::from).collect(),
    ))
}

// ── POST /businesses/{id}/products ───────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub price: Decimal,
    pub stock: Option<i32>,
    pub category: Option<String>,
}

pub async fn create_product(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(business_id): Path<Uuid>,
    Json(body): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), CommerceServiceError> {
    let usecase = CreateProductUseCase {
        policy: state.policy(),
        products: state.product_repo(),
    };
    let product = usecase
        .execute(
            &user.user_id,
            business_id,
            CreateProductInput {
                name: body.name,
                price: body.price,
                stock: body.stock.unwrap_or(0),
                category: body.category,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(product.into())))
}

// ── PATCH /products/{id} ─────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<i32>,
    pub category: Option<String>,
    pub is_active: Option<bool>,
}

pub async fn update_product(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
    Json(body): Json<UpdateProductRequest>,
) -> Result<StatusCode, CommerceServiceError> {
    let usecase = UpdateProductUseCase {
        policy: state.policy(),
        products: state.product_repo(),
    };
    usecase
        .execute(
            &user.user_id,
            product_id,
            ProductChanges {
                name: body.name,
                price: body.price,
                stock: body.stock,
                category: body.category,
                is_active: body.is_active,
            },
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /products/{id} ────────────────────────────────────────────────────

pub async fn delete_product(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
) -> Result<StatusCode, CommerceServiceError> {
    let usecase = DeleteProductUseCase {
        policy: state.policy(),
        products: state.product_repo(),
    };
    usecase.execute(&user.user_id, product_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /products/low-stock ──────────────────────────────────────────────────

pub async fn list_low_stock(
    user: CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, CommerceServiceError> {
    let usecase = LowStockUseCase {
        businesses: state.business_repo(),
        products: state.product_repo(),
        threshold: state.low_stock_threshold,
    };
    let products = usecase.execute(&user.user_id).await?;
    Ok(Json(
        products.into_iter().map(ProductResponse::from).collect(),
    ))
}
