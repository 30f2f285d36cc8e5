use rust_decimal::Decimal;
use uuid::Uuid;

use tradepost_domain::business::AccessLevel;
use tradepost_domain::pagination::PageRequest;
use tradepost_domain::sale::SaleSource;

use crate::domain::repository::{
    BusinessRepository, EmployeeRepository, InvoiceRepository, ProductRepository, SaleRepository,
};
use crate::domain::types::{CreatedSale, Invoice, NewSale, NewSaleLine, Sale, SaleItem};
use crate::error::CommerceServiceError;
use crate::usecase::policy::BusinessPolicy;

/// One requested sale line as it arrives from either entry point: product
/// reference and quantity only — prices are never client-supplied.
#[derive(Debug, Clone)]
pub struct SaleLineInput {
    pub product_id: Uuid,
    pub quantity: i32,
}

/// Resolve every requested line against the inventory ledger.
///
/// Preconditions checked per line, in order: the product exists, belongs
/// to the given business, and has enough stock. Unit prices and name
/// snapshots come from the current product row. The stock check here gives
/// the client a specific reason up front; the transaction re-checks it
/// atomically at write time.
async fn compose_lines<P: ProductRepository>(
    products: &P,
    business_id: Uuid,
    items: &[SaleLineInput],
) -> Result<(Vec<NewSaleLine>, Decimal), CommerceServiceError> {
    let mut lines = Vec::with_capacity(items.len());
    let mut total = Decimal::ZERO;
    for item in items {
        if item.quantity <= 0 {
            return Err(CommerceServiceError::InvalidQuantity);
        }
        let product = products
            .find_by_id(item.product_id)
            .await?
            .ok_or(CommerceServiceError::ProductNotFound)?;
        if product.business_id != business_id {
            return Err(CommerceServiceError::ProductBusinessMismatch {
                product: product.name,
            });
        }
        if product.stock < item.quantity {
            return Err(CommerceServiceError::InsufficientStock {
                product: product.name,
            });
        }
        let line_total = product.price * Decimal::from(item.quantity);
        total += line_total;
        lines.push(NewSaleLine {
            product_id: product.id,
            product_name: product.name,
            quantity: item.quantity,
            unit_price: product.price,
            total_price: line_total,
        });
    }
    Ok((lines, total))
}

// ── CreateSale (authenticated web path) ──────────────────────────────────────

pub struct CreateSaleInput {
    pub business_id: Uuid,
    pub buyer_name: String,
    pub buyer_info: Option<String>,
    pub items: Vec<SaleLineInput>,
}

pub struct CreateSaleUseCase<B, E, P, S>
where
    B: BusinessRepository,
    E: EmployeeRepository,
    P: ProductRepository,
    S: SaleRepository,
{
    pub policy: BusinessPolicy<B, E>,
    pub products: P,
    pub sales: S,
}

impl<B, E, P, S> CreateSaleUseCase<B, E, P, S>
where
    B: BusinessRepository,
    E: EmployeeRepository,
    P: ProductRepository,
    S: SaleRepository,
{
    /// The seller is the authenticated user and must be a member of the
    /// business. All preconditions hold before any write; the write itself
    /// is one atomic unit (sale, items, decrements, invoice).
    pub async fn execute(
        &self,
        seller_id: &str,
        input: CreateSaleInput,
    ) -> Result<CreatedSale, CommerceServiceError> {
        if input.buyer_name.trim().is_empty() {
            return Err(CommerceServiceError::MissingBuyerName);
        }
        if input.items.is_empty() {
            return Err(CommerceServiceError::EmptyItems);
        }
        self.policy
            .require(seller_id, input.business_id, AccessLevel::Member)
            .await?;

        let (lines, total) =
            compose_lines(&self.products, input.business_id, &input.items).await?;
        let new_sale = NewSale {
            business_id: input.business_id,
            seller_id: seller_id.to_owned(),
            buyer_name: input.buyer_name.trim().to_owned(),
            buyer_info: input.buyer_info,
            total_amount: total,
            source: SaleSource::Web,
            lines,
        };
        self.sales.create_sale(&new_sale).await
    }
}

// ── CreateGameSale (API-key path) ────────────────────────────────────────────

pub struct CreateGameSaleInput {
    pub business_api_key: String,
    pub buyer_name: String,
    pub buyer_info: Option<String>,
    pub seller_id: Option<String>,
    pub items: Vec<SaleLineInput>,
}

pub struct CreateGameSaleUseCase<B, E, P, S>
where
    B: BusinessRepository,
    E: EmployeeRepository,
    P: ProductRepository,
    S: SaleRepository,
{
    pub businesses: B,
    pub employees: E,
    pub products: P,
    pub sales: S,
}

impl<B, E, P, S> CreateGameSaleUseCase<B, E, P, S>
where
    B: BusinessRepository,
    E: EmployeeRepository,
    P: ProductRepository,
    S: SaleRepository,
{
    /// Authenticated by the per-business API key instead of a user session.
    /// The seller defaults to the business owner; an explicitly supplied
    /// seller id must be the owner or an employee of that business.
    pub async fn execute(
        &self,
        input: CreateGameSaleInput,
    ) -> Result<CreatedSale, CommerceServiceError> {
        let business = self
            .businesses
            .find_by_api_key(&input.business_api_key)
            .await?
            .ok_or(CommerceServiceError::InvalidApiKey)?;

        if input.buyer_name.trim().is_empty() {
            return Err(CommerceServiceError::MissingBuyerName);
        }
        if input.items.is_empty() {
            return Err(CommerceServiceError::EmptyItems);
        }

        let seller_id = match input.seller_id {
            None => business.owner_id.clone(),
            Some(id) if id == business.owner_id => id,
            Some(id) => {
                self.employees
                    .find(business.id, &id)
                    .await?
                    .ok_or(CommerceServiceError::InvalidSeller)?;
                id
            }
        };

        let (lines, total) = compose_lines(&self.products, business.id, &input.items).await?;
        let new_sale = NewSale {
            business_id: business.id,
            seller_id,
            buyer_name: input.buyer_name.trim().to_owned(),
            buyer_info: input.buyer_info,
            total_amount: total,
            source: SaleSource::Game,
            lines,
        };
        self.sales.create_sale(&new_sale).await
    }
}

// ── GetSale ──────────────────────────────────────────────────────────────────

pub struct GetSaleUseCase<B, E, S, I>
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

impl<B, E, S, I> GetSaleUseCase<B, E, S, I>
where
    B: BusinessRepository,
    E: EmployeeRepository,
    S: SaleRepository,
    I: InvoiceRepository,
{
    pub async fn execute(
        &self,
        actor_id: &str,
        sale_id: Uuid,
    ) -> Result<(Sale, Vec<SaleItem>, Invoice), CommerceServiceError> {
        let (sale, items) = self
            .sales
            .find_with_items(sale_id)
            .await?
            .ok_or(CommerceServiceError::SaleNotFound)?;
        self.policy
            .require(actor_id, sale.business_id, AccessLevel::Member)
            .await?;
        let invoice = self
            .invoices
            .find_by_sale(sale_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("sale {sale_id} has no invoice"))?;
        Ok((sale, items, invoice))
    }
}

// ── ListSales ────────────────────────────────────────────────────────────────

pub struct ListSalesUseCase<B, E, S>
where
    B: BusinessRepository,
    E: EmployeeRepository,
    S: SaleRepository,
{
    pub policy: BusinessPolicy<B, E>,
    pub sales: S,
}

impl<B, E, S> ListSalesUseCase<B, E, S>
where
    B: BusinessRepository,
    E: EmployeeRepository,
    S: SaleRepository,
{
    /// With a business filter: member-gated listing of that business.
    /// Without: sales across every accessible business.
    pub async fn execute(
        &self,
        actor_id: &str,
        business_id: Option<Uuid>,
        page: PageRequest,
    ) -> Result<Vec<Sale>, CommerceServiceError> {
        let business_ids = match business_id {
            Some(id) => {
                self.policy
                    .require(actor_id, id, AccessLevel::Member)
                    .await?;
                vec![id]
            }
            None => self.policy.businesses.accessible_ids(actor_id).await?,
        };
        self.sales.list_by_businesses(&business_ids, page).await
    }
}
