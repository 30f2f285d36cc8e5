use chrono::{DateTime, Local, NaiveTime, Utc};

use crate::domain::repository::{BusinessRepository, ProductRepository, SaleRepository};
use crate::domain::types::DashboardStats;
use crate::error::CommerceServiceError;

/// Start of the current day at the server's local timezone, in UTC.
/// Midnight can be skipped or doubled around a DST transition; fall back
/// to `now` in that case rather than panic.
fn start_of_local_day() -> DateTime<Utc> {
    let now = Local::now();
    now.with_time(NaiveTime::MIN)
        .single()
        .unwrap_or(now)
        .with_timezone(&Utc)
}

pub struct DashboardStatsUseCase<B, S, P>
where
    B: BusinessRepository,
    S: SaleRepository,
    P: ProductRepository,
{
    pub businesses: B,
    pub sales: S,
    pub products: P,
    pub low_stock_threshold: i32,
}

impl<B, S, P> DashboardStatsUseCase<B, S, P>
where
    B: BusinessRepository,
    S: SaleRepository,
    P: ProductRepository,
{
    /// Rollups over every business the actor owns or works at. Recomputed
    /// from scoped queries on each call; no caching.
    pub async fn execute(&self, actor_id: &str) -> Result<DashboardStats, CommerceServiceError> {
        let business_ids = self.businesses.accessible_ids(actor_id).await?;

        let today_revenue = self
            .sales
            .sum_completed_since(&business_ids, start_of_local_day())
            .await?;
        let completed_sales = self.sales.count_completed(&business_ids).await?;
        let low_stock_products = self
            .products
            .count_low_stock(&business_ids, self.low_stock_threshold)
            .await?;

        Ok(DashboardStats {
            today_revenue,
            completed_sales,
            low_stock_products,
            businesses: business_ids.len() as u64,
        })
    }
}
