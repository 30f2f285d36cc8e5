use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use tradepost_domain::business::AccessLevel;
use tradepost_domain::pagination::PageRequest;

use crate::domain::repository::{
    BusinessRepository, EmployeeRepository, ProductChanges, ProductRepository,
};
use crate::domain::types::Product;
use crate::error::CommerceServiceError;
use crate::usecase::policy::BusinessPolicy;

// ── CreateProduct ────────────────────────────────────────────────────────────

pub struct CreateProductInput {
    pub name: String,
    pub price: Decimal,
    pub stock: i32,
    pub category: Option<String>,
}

pub struct CreateProductUseCase<B, E, P>
where
    B: BusinessRepository,
    E: EmployeeRepository,
    P: ProductRepository,
{
    pub policy: BusinessPolicy<B, E>,
    pub products: P,
}

impl<B, E, P> CreateProductUseCase<B, E, P>
where
    B: BusinessRepository,
    E: EmployeeRepository,
    P: ProductRepository,
{
    pub async fn execute(
        &self,
        actor_id: &str,
        business_id: Uuid,
        input: CreateProductInput,
    ) -> Result<Product, CommerceServiceError> {
        if input.name.trim().is_empty() {
            return Err(CommerceServiceError::MissingData);
        }
        if input.price < Decimal::ZERO {
            return Err(CommerceServiceError::InvalidPrice);
        }
        if input.stock < 0 {
            return Err(CommerceServiceError::InvalidStock);
        }
        self.policy
            .require(actor_id, business_id, AccessLevel::Member)
            .await?;

        let now = Utc::now();
        let product = Product {
            id: Uuid::now_v7(),
            business_id,
            name: input.name.trim().to_owned(),
            price: input.price,
            stock: input.stock,
            category: input.category,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        self.products.create(&product).await?;
        Ok(product)
    }
}

// ── UpdateProduct ────────────────────────────────────────────────────────────

pub struct UpdateProductUseCase<B, E, P>
where
    B: BusinessRepository,
    E: EmployeeRepository,
    P: ProductRepository,
{
    pub policy: BusinessPolicy<B, E>,
    pub products: P,
}

impl<B, E, P> UpdateProductUseCase<B, E, P>
where
    B: BusinessRepository,
    E: EmployeeRepository,
    P: ProductRepository,
{
    /// Any field except the owning business. Manual stock edits land here;
    /// sale-driven decrements go through the sale transaction instead.
    pub async fn execute(
        &self,
        actor_id: &str,
        product_id: Uuid,
        changes: ProductChanges,
    ) -> Result<(), CommerceServiceError> {
        if changes.is_empty() {
            return Err(CommerceServiceError::MissingData);
        }
        if let Some(ref name) = changes.name {
            if name.trim().is_empty() {
                return Err(CommerceServiceError::MissingData);
            }
        }
        if let Some(price) = changes.price {
            if price < Decimal::ZERO {
                return Err(CommerceServiceError::InvalidPrice);
            }
        }
        if let Some(stock) = changes.stock {
            if stock < 0 {
                return Err(CommerceServiceError::InvalidStock);
            }
        }

        let product = self
            .products
            .find_by_id(product_id)
            .await?
            .ok_or(CommerceServiceError::ProductNotFound)?;
        self.policy
            .require(actor_id, product.business_id, AccessLevel::Member)
            .await?;
        self.products.update(product_id, &changes).await
    }
}

// ── DeleteProduct ────────────────────────────────────────────────────────────

pub struct DeleteProductUseCase<B, E, P>
where
    B: BusinessRepository,
    E: EmployeeRepository,
    P: ProductRepository,
{
    pub policy: BusinessPolicy<B, E>,
    pub products: P,
}

impl<B, E, P> DeleteProductUseCase<B, E, P>
where
    B: BusinessRepository,
    E: EmployeeRepository,
    P: ProductRepository,
{
    /// Owner-only. Past sale items keep their snapshots; their product
    /// reference goes NULL.
    pub async fn execute(
        &self,
        actor_id: &str,
        product_id: Uuid,
    ) -> Result<(), CommerceServiceError> {
        let product = self
            .products
            .find_by_id(product_id)
            .await?
            .ok_or(CommerceServiceError::ProductNotFound)?;
        self.policy
            .require(actor_id, product.business_id, AccessLevel::Owner)
            .await?;
        self.products.delete(product_id).await?;
        Ok(())
    }
}

// ── ListProducts ─────────────────────────────────────────────────────────────

pub struct ListProductsUseCase<B, E, P>
where
    B: BusinessRepository,
    E: EmployeeRepository,
    P: ProductRepository,
{
    pub policy: BusinessPolicy<B, E>,
    pub products: P,
}

impl<B, E, P> ListProductsUseCase<B, E, P>
where
    B: BusinessRepository,
    E: EmployeeRepository,
    P: ProductRepository,
{
    pub async fn execute(
        &self,
        actor_id: &str,
        business_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Product>, CommerceServiceError> {
        self.policy
            .require(actor_id, business_id, AccessLevel::Member)
            .await?;
        self.products.list_by_business(business_id, page).await
    }
}

// ── LowStock ─────────────────────────────────────────────────────────────────

pub struct LowStockUseCase<B: BusinessRepository, P: ProductRepository> {
    pub businesses: B,
    pub products: P,
    pub threshold: i32,
}

impl<B: BusinessRepository, P: ProductRepository> LowStockUseCase<B, P> {
    /// Products at or below the threshold across every business the actor
    /// can access.
    pub async fn execute(&self, actor_id: &str) -> Result<Vec<Product>, CommerceServiceError> {
        let business_ids = self.businesses.accessible_ids(actor_id).await?;
        self.products
            .list_low_stock(&business_ids, self.threshold)
            .await
    }
}
