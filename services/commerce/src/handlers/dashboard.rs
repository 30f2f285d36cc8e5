use axum::{Json, extract::State};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::CommerceServiceError;
use crate::extract::CurrentUser;
use crate::state::AppState;
use crate::usecase::dashboard::DashboardStatsUseCase;

// ── GET /dashboard/stats ─────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsResponse {
    pub today_revenue: Decimal,
    pub completed_sales: u64,
    pub low_stock_products: u64,
    pub businesses: u64,
}

pub async fn get_dashboard_stats(
    user: CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<DashboardStatsResponse>, CommerceServiceError> {
    let usecase = DashboardStatsUseCase {
        businesses: state.business_repo(),
        sales: state.sale_repo(),
        products: state.product_repo(),
        low_stock_threshold: state.low_stock_threshold,
    };
    let stats = usecase.execute(&user.user_id).await?;
    Ok(Json(DashboardStatsResponse {
        today_revenue: stats.today_revenue,
        completed_sales: stats.completed_sales,
        low_stock_products: stats.low_stock_products,
        businesses: stats.businesses,
    }))
}
