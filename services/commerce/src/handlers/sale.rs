use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tradepost_domain::pagination::PageRequest;
use tradepost_domain::sale::{SaleSource, SaleStatus};

use crate::domain::types::{CreatedSale, Invoice, Sale, SaleItem};
use crate::error::CommerceServiceError;
use crate::extract::CurrentUser;
use crate::handlers::invoice::InvoiceResponse;
use crate::state::AppState;
use crate::usecase::sale::{
    CreateSaleInput, CreateSaleUseCase, GetSaleUseCase, ListSalesUseCase, SaleLineInput,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleResponse {
    pub id: Uuid,
    pub business_id: Uuid,
    pub seller_id: String,
    pub buyer_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_info: Option<String>,
    pub total_amount: Decimal,
    pub status: SaleStatus,
    pub source: SaleSource,
    #[serde(serialize_with = "tradepost_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Sale> for SaleResponse {
    fn from(s: Sale) -> Self {
        Self {
            id: s.id,
            business_id: s.business_id,
            seller_id: s.seller_id,
            buyer_name: s.buyer_name,
            buyer_info: s.buyer_info,
            total_amount: s.total_amount,
            status: s.status,
            source: s.source,
            created_at: s.created_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleItemResponse {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<Uuid>,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub total_price: Decimal,
}

impl From<SaleItem> for SaleItemResponse {
    fn from(item: SaleItem) -> Self {
        Self {
            id: item.id,
            product_id: item.product_id,
            product_name: item.product_name,
            quantity: item.quantity,
            unit_price: item.unit_price,
            total_price: item.total_price,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleDetailResponse {
    #[serde(flatten)]
    pub sale: SaleResponse,
    pub items: Vec<SaleItemResponse>,
    pub invoice: InvoiceResponse,
}

impl SaleDetailResponse {
    fn new(sale: Sale, items: Vec<SaleItem>, invoice: Invoice) -> Self {
        Self {
            sale: sale.into(),
            items: items.into_iter().map(SaleItemResponse::from).collect(),
            invoice: invoice.into(),
        }
    }
}

impl From<CreatedSale> for SaleDetailResponse {
    fn from(created: CreatedSale) -> Self {
        Self::new(created.sale, created.items, created.invoice)
    }
}

// ── Query params ─────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct SaleListQuery {
    pub business_id: Option<Uuid>,
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

impl SaleListQuery {
    pub fn page_request(&self) -> PageRequest {
        let defaults = PageRequest::default();
        PageRequest {
            per_page: self.per_page.unwrap_or(defaults.per_page),
            page: self.page.unwrap_or(defaults.page),
        }
    }
}

// ── GET /sales ───────────────────────────────────────────────────────────────

pub async fn list_sales(
    user: CurrentUser,
    State(state): State<AppState>,
    Query(query): Query<SaleListQuery>,
) -> Result<Json<Vec<SaleResponse>>, CommerceServiceError> {
    let usecase = ListSalesUseCase {
        policy: state.policy(),
        sales: state.sale_repo(),
    };
    let sales = usecase
        .execute(&user.user_id, query.business_id, query.page_request())
        .await?;
    Ok(Json(sales.into_iter().map(SaleResponse::from).collect()))
}

// ── GET /sales/{id} ──────────────────────────────────────────────────────────

pub async fn get_sale(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(sale_id): Path<Uuid>,
) -> Result<Json<SaleDetailResponse>, CommerceServiceError> {
    let usecase = GetSaleUseCase {
        policy: state.policy(),
        sales: state.sale_repo(),
        invoices: state.invoice_repo(),
    };
    let (sale, items, invoice) = usecase.execute(&user.user_id, sale_id).await?;
    Ok(Json(SaleDetailResponse::new(sale, items, invoice)))
}

// ── POST /sales ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleItemRequest {
    pub product_id: Uuid,
    pub quantity: i32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSaleRequest {
    pub business_id: Uuid,
    pub buyer_name: String,
    pub buyer_info: Option<String>,
    pub items: Vec<SaleItemRequest>,
}

/// The seller is the logged-in user. Prices and name snapshots are resolved
/// server-side; the whole write is one atomic unit.
pub async fn create_sale(
    user: CurrentUser,
    State(state): State<AppState>,
    Json(body): Json<CreateSaleRequest>,
) -> Result<(StatusCode, Json<SaleDetailResponse>), CommerceServiceError> {
    let usecase = CreateSaleUseCase {
        policy: state.policy(),
        products: state.product_repo(),
        sales: state.sale_repo(),
    };
    let created = usecase
        .execute(
            &user.user_id,
            CreateSaleInput {
                business_id: body.business_id,
                buyer_name: body.buyer_name,
                buyer_info: body.buyer_info,
                items: body
                    .items
                    .into_iter()
                    .map(|item| SaleLineInput {
                        product_id: item.product_id,
                        quantity: item.quantity,
                    })
                    .collect(),
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}
