#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use tradepost_auth_types::identity::VerifiedIdentity;
use tradepost_domain::business::BusinessCategory;
use tradepost_domain::pagination::PageRequest;
use tradepost_domain::sale::InvoiceStatus;

use crate::domain::types::{
    Business, CreatedSale, EmployeeMembership, Invoice, NewSale, Product, Sale, SaleItem,
    UserProfile,
};
use crate::error::CommerceServiceError;

/// Repository for the local user mirror.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<UserProfile>, CommerceServiceError>;

    /// Insert the user, or refresh email/name/avatar if the row exists.
    /// The role tag is set only on first insert.
    async fn upsert(&self, user: &UserProfile) -> Result<(), CommerceServiceError>;
}

/// Partial update of a business. `None` leaves the field unchanged; the
/// owner reference is immutable and has no entry here.
#[derive(Debug, Default, Clone)]
pub struct BusinessChanges {
    pub name: Option<String>,
    pub category: Option<BusinessCategory>,
    pub is_active: Option<bool>,
}

impl BusinessChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.category.is_none() && self.is_active.is_none()
    }
}

/// Repository for businesses.
pub trait BusinessRepository: Send + Sync {
    async fn create(&self, business: &Business) -> Result<(), CommerceServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Business>, CommerceServiceError>;

    async fn find_by_api_key(&self, key: &str)
    -> Result<Option<Business>, CommerceServiceError>;

    /// Businesses the user owns or works at, newest first.
    async fn list_accessible(
        &self,
        user_id: &str,
        page: PageRequest,
    ) -> Result<Vec<Business>, CommerceServiceError>;

    /// Ids of every business the user owns or works at.
    async fn accessible_ids(&self, user_id: &str) -> Result<Vec<Uuid>, CommerceServiceError>;

    async fn update(
        &self,
        id: Uuid,
        changes: &BusinessChanges,
    ) -> Result<(), CommerceServiceError>;

    async fn set_api_key(&self, id: Uuid, key: &str) -> Result<(), CommerceServiceError>;

    /// Delete a business. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, CommerceServiceError>;
}

/// Repository for business memberships.
pub trait EmployeeRepository: Send + Sync {
    async fn list_by_business(
        &self,
        business_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<EmployeeMembership>, CommerceServiceError>;

    async fn find(
        &self,
        business_id: Uuid,
        user_id: &str,
    ) -> Result<Option<EmployeeMembership>, CommerceServiceError>;

    /// Create a membership. Fails with `EmployeeAlreadyExists` if the user
    /// already holds one for this business.
    async fn create(&self, membership: &EmployeeMembership) -> Result<(), CommerceServiceError>;

    /// Delete a membership. Returns `true` if a row was deleted.
    async fn delete(&self, business_id: Uuid, user_id: &str)
    -> Result<bool, CommerceServiceError>;
}

/// Partial update of a product. The owning business is immutable and has
/// no entry here.
#[derive(Debug, Default, Clone)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<i32>,
    pub category: Option<String>,
    pub is_active: Option<bool>,
}

impl ProductChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.stock.is_none()
            && self.category.is_none()
            && self.is_active.is_none()
    }
}

/// Repository for the inventory ledger.
pub trait ProductRepository: Send + Sync {
    async fn create(&self, product: &Product) -> Result<(), CommerceServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, CommerceServiceError>;

    async fn list_by_business(
        &self,
        business_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Product>, CommerceServiceError>;

    /// Products with `stock <= threshold` across the given businesses.
    async fn list_low_stock(
        &self,
        business_ids: &[Uuid],
        threshold: i32,
    ) -> Result<Vec<Product>, CommerceServiceError>;

    async fn count_low_stock(
        &self,
        business_ids: &[Uuid],
        threshold: i32,
    ) -> Result<u64, CommerceServiceError>;

    async fn update(
        &self,
        id: Uuid,
        changes: &ProductChanges,
    ) -> Result<(), CommerceServiceError>;

    /// Delete a product. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, CommerceServiceError>;
}

/// Repository for sales. `create_sale` is the single multi-write unit in
/// the system and must be atomic: sale, items, stock decrements, and the
/// invoice commit together or not at all.
pub trait SaleRepository: Send + Sync {
    async fn create_sale(&self, new_sale: &NewSale) -> Result<CreatedSale, CommerceServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Sale>, CommerceServiceError>;

    async fn find_with_items(
        &self,
        id: Uuid,
    ) -> Result<Option<(Sale, Vec<SaleItem>)>, CommerceServiceError>;

    async fn list_by_businesses(
        &self,
        business_ids: &[Uuid],
        page: PageRequest,
    ) -> Result<Vec<Sale>, CommerceServiceError>;

    /// Revenue of completed sales created at or after `since`.
    async fn sum_completed_since(
        &self,
        business_ids: &[Uuid],
        since: DateTime<Utc>,
    ) -> Result<Decimal, CommerceServiceError>;

    async fn count_completed(&self, business_ids: &[Uuid])
    -> Result<u64, CommerceServiceError>;
}

/// Repository for invoices.
pub trait InvoiceRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Invoice>, CommerceServiceError>;

    async fn find_by_sale(&self, sale_id: Uuid)
    -> Result<Option<Invoice>, CommerceServiceError>;

    async fn list_by_businesses(
        &self,
        business_ids: &[Uuid],
        page: PageRequest,
    ) -> Result<Vec<Invoice>, CommerceServiceError>;

    async fn update_status(
        &self,
        id: Uuid,
        status: InvoiceStatus,
        paid_at: Option<DateTime<Utc>>,
    ) -> Result<(), CommerceServiceError>;
}

/// Port for the external identity provider's introspection endpoint.
pub trait IdentityProviderPort: Send + Sync {
    /// Verify a bearer credential and return its claims.
    /// Invalid or expired credentials map to `Unauthenticated`.
    async fn introspect(&self, token: &str) -> Result<VerifiedIdentity, CommerceServiceError>;
}

/// Port for the short-TTL identity-mirror cache.
pub trait IdentityCache: Send + Sync {
    async fn get_user_id(&self, token: &str) -> Result<Option<String>, CommerceServiceError>;

    async fn set_user_id(
        &self,
        token: &str,
        user_id: &str,
        ttl_secs: u64,
    ) -> Result<(), CommerceServiceError>;
}
