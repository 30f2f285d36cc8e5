use chrono::Utc;
use uuid::Uuid;

use tradepost_domain::business::AccessLevel;
use tradepost_domain::pagination::PageRequest;
use tradepost_domain::sale::InvoiceStatus;

use crate::domain::repository::{
    BusinessRepository, EmployeeRepository, InvoiceRepository, SaleRepository,
};
use crate::domain::types::Invoice;
use crate::error::CommerceServiceError;
use crate::usecase::policy::BusinessPolicy;

// ── ListInvoices ─────────────────────────────────────────────────────────────

pub struct ListInvoicesUseCase<B, E, I>
where
    B: BusinessRepository,
    E: EmployeeRepository,
    I: InvoiceRepository,
{
    pub policy: BusinessPolicy<B, E>,
    pub invoices: I,
}

impl<B, E, I> ListInvoicesUseCase<B, E, I>
where
    B: BusinessRepository,
    E: EmployeeRepository,
    I: InvoiceRepository,
{
    pub async fn execute(
        &self,
        actor_id: &str,
        business_id: Option<Uuid>,
        page: PageRequest,
    ) -> Result<Vec<Invoice>, CommerceServiceError> {
        let business_ids = match business_id {
            Some(id) => {
                self.policy
                    .require(actor_id, id, AccessLevel::Member)
                    .await?;
                vec![id]
            }
            None => self.policy.businesses.accessible_ids(actor_id).await?,
        };
        self.invoices.list_by_businesses(&business_ids, page).await
    }
}

// ── UpdateInvoiceStatus ──────────────────────────────────────────────────────

pub struct UpdateInvoiceStatusUseCase<B, E, S, I>
where
    B: BusinessRepository,
    E: EmployeeRepository,
    S: SaleRepository,
    I: InvoiceRepository,
{
    pub policy: BusinessPolicy<B, E>,
    pub sales: S,
    pub invoices: I,
}

impl<B, E, S, I> UpdateInvoiceStatusUseCase<B, E, S, I>
where
    B: BusinessRepository,
    E: EmployeeRepository,
    S: SaleRepository,
    I: InvoiceRepository,
{
    /// Transition the invoice status. The first transition to paid stamps
    /// `paid_at`; repeating it leaves the original timestamp. Cancelling
    /// never restocks the sale's products — sales are immutable audit
    /// records.
    pub async fn execute(
        &self,
        actor_id: &str,
        invoice_id: Uuid,
        status: InvoiceStatus,
    ) -> Result<Invoice, CommerceServiceError> {
        let invoice = self
            .invoices
            .find_by_id(invoice_id)
            .await?
            .ok_or(CommerceServiceError::InvoiceNotFound)?;
        let sale = self
            .sales
            .find_by_id(invoice.sale_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("invoice {invoice_id} has no sale"))?;
        self.policy
            .require(actor_id, sale.business_id, AccessLevel::Member)
            .await?;

        let paid_at = match status {
            InvoiceStatus::Paid => invoice.paid_at.or_else(|| Some(Utc::now())),
            InvoiceStatus::Pending | InvoiceStatus::Cancelled => invoice.paid_at,
        };
        self.invoices
            .update_status(invoice_id, status, paid_at)
            .await?;

        Ok(Invoice {
            status,
            paid_at,
            ..invoice
        })
    }
}
