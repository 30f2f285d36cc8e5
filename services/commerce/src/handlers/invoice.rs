use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tradepost_domain::sale::InvoiceStatus;

use crate::domain::types::Invoice;
use crate::error::CommerceServiceError;
use crate::extract::CurrentUser;
use crate::handlers::sale::SaleListQuery;
use crate::state::AppState;
use crate::usecase::invoice::{ListInvoicesUseCase, UpdateInvoiceStatusUseCase};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceResponse {
    pub id: Uuid,
    pub sale_id: Uuid,
    pub invoice_number: String,
    pub status: InvoiceStatus,
    #[serde(serialize_with = "tradepost_core::serde::to_rfc3339_ms")]
    pub issue_date: chrono::DateTime<chrono::Utc>,
    #[serde(
        serialize_with = "tradepost_core::serde::to_rfc3339_ms_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(
        serialize_with = "tradepost_core::serde::to_rfc3339_ms_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub paid_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(serialize_with = "tradepost_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Invoice> for InvoiceResponse {
    fn from(invoice: Invoice) -> Self {
        Self {
            id: invoice.id,
            sale_id: invoice.sale_id,
            invoice_number: invoice.invoice_number,
            status: invoice.status,
            issue_date: invoice.issue_date,
            due_date: invoice.due_date,
            paid_at: invoice.paid_at,
            created_at: invoice.created_at,
        }
    }
}

// ── GET /invoices ────────────────────────────────────────────────────────────

pub async fn list_invoices(
    user: CurrentUser,
    State(state): State<AppState>,
    Query(query): Query<SaleListQuery>,
) -> Result<Json<Vec<InvoiceResponse>>, CommerceServiceError> {
    let usecase = ListInvoicesUseCase {
        policy: state.policy(),
        invoices: state.invoice_repo(),
    };
    let invoices = usecase
        .execute(&user.user_id, query.business_id, query.page_request())
        .await?;
    Ok(Json(
        invoices.into_iter().map(InvoiceResponse::from).collect(),
    ))
}

// ── PATCH /invoices/{id} ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateInvoiceRequest {
    pub status: InvoiceStatus,
}

/// Transition the invoice status. The first transition to paid stamps the
/// paid timestamp; repeating it leaves the original value.
pub async fn update_invoice(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(invoice_id): Path<Uuid>,
    Json(body): Json<UpdateInvoiceRequest>,
) -> Result<Json<InvoiceResponse>, CommerceServiceError> {
    let usecase = UpdateInvoiceStatusUseCase {
        policy: state.policy(),
        sales: state.sale_repo(),
        invoices: state.invoice_repo(),
    };
    let invoice = usecase
        .execute(&user.user_id, invoice_id, body.status)
        .await?;
    Ok(Json(invoice.into()))
}
