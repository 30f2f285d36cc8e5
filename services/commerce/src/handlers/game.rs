use axum::{Json, extract::State, http::StatusCode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CommerceServiceError;
use crate::state::AppState;
use crate::usecase::sale::{CreateGameSaleInput, CreateGameSaleUseCase, SaleLineInput};

// ── POST /game/sales ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSaleItemRequest {
    pub product_id: Uuid,
    pub quantity: i32,
}

/// Game-server ingestion request. Authenticated by the per-business API key
/// in the body — there is no user session on this path. Prices are never
/// part of this payload.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSaleRequest {
    pub business_api_key: String,
    pub buyer_name: String,
    pub buyer_info: Option<String>,
    pub seller_id: Option<String>,
    pub items: Vec<GameSaleItemRequest>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSaleResponse {
    pub success: bool,
    pub sale_id: Uuid,
    pub invoice_number: String,
    pub total_amount: Decimal,
}

pub async fn create_game_sale(
    State(state): State<AppState>,
    Json(body): Json<GameSaleRequest>,
) -> Result<(StatusCode, Json<GameSaleResponse>), CommerceServiceError> {
    let usecase = CreateGameSaleUseCase {
        businesses: state.business_repo(),
        employees: state.employee_repo(),
        products: state.product_repo(),
        sales: state.sale_repo(),
    };
    let created = usecase
        .execute(CreateGameSaleInput {
            business_api_key: body.business_api_key,
            buyer_name: body.buyer_name,
            buyer_info: body.buyer_info,
            seller_id: body.seller_id,
            items: body
                .items
                .into_iter()
                .map(|item| SaleLineInput {
                    product_id: item.product_id,
                    quantity: item.quantity,
                })
                .collect(),
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(GameSaleResponse {
            success: true,
            sale_id: created.sale.id,
            invoice_number: created.invoice.invoice_number,
            total_amount: created.sale.total_amount,
        }),
    ))
}
