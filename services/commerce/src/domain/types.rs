use chrono::{DateTime, Utc};
use rand::RngExt;
use rust_decimal::Decimal;
use uuid::Uuid;

use tradepost_domain::business::{BusinessCategory, EmployeeRole, UserRole};
use tradepost_domain::sale::{InvoiceStatus, SaleSource, SaleStatus};

/// Local mirror of an identity-provider user.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub profile_image_url: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A tenant-scoped business owned by exactly one user.
#[derive(Debug, Clone)]
pub struct Business {
    pub id: Uuid,
    pub name: String,
    pub category: BusinessCategory,
    pub owner_id: String,
    pub api_key: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Membership of a non-owner user in a business.
#[derive(Debug, Clone)]
pub struct EmployeeMembership {
    pub id: Uuid,
    pub business_id: Uuid,
    pub user_id: String,
    pub role: EmployeeRole,
    pub created_at: DateTime<Utc>,
}

/// A product with a non-negative stock count.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub business_id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub stock: i32,
    pub category: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An immutable sale record.
#[derive(Debug, Clone)]
pub struct Sale {
    pub id: Uuid,
    pub business_id: Uuid,
    pub seller_id: String,
    pub buyer_name: String,
    pub buyer_info: Option<String>,
    pub total_amount: Decimal,
    pub status: SaleStatus,
    pub source: SaleSource,
    pub created_at: DateTime<Utc>,
}

/// A sale line item with name/price snapshots taken at sale time.
/// `product_id` is `None` when the product has since been deleted.
#[derive(Debug, Clone)]
pub struct SaleItem {
    pub id: Uuid,
    pub sale_id: Uuid,
    pub product_id: Option<Uuid>,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub total_price: Decimal,
}

/// Billing document tied 1:1 to a sale.
#[derive(Debug, Clone)]
pub struct Invoice {
    pub id: Uuid,
    pub sale_id: Uuid,
    pub invoice_number: String,
    pub status: InvoiceStatus,
    pub issue_date: DateTime<Utc>,
    pub due_date: Option<DateTime<Utc>>,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// A fully validated sale line ready to be written: prices and names are
/// resolved server-side before this exists.
#[derive(Debug, Clone)]
pub struct NewSaleLine {
    pub product_id: Uuid,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub total_price: Decimal,
}

/// A fully validated sale ready for the atomic write.
#[derive(Debug, Clone)]
pub struct NewSale {
    pub business_id: Uuid,
    pub seller_id: String,
    pub buyer_name: String,
    pub buyer_info: Option<String>,
    pub total_amount: Decimal,
    pub source: SaleSource,
    pub lines: Vec<NewSaleLine>,
}

/// Result of the sale transaction: the sale, its line items, and the
/// invoice issued with it.
#[derive(Debug, Clone)]
pub struct CreatedSale {
    pub sale: Sale,
    pub items: Vec<SaleItem>,
    pub invoice: Invoice,
}

/// Read-only dashboard rollups for one user's accessible businesses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub today_revenue: Decimal,
    pub completed_sales: u64,
    pub low_stock_products: u64,
    pub businesses: u64,
}

/// Bounded retries when an invoice number collides with an existing one.
pub const INVOICE_NUMBER_ATTEMPTS: usize = 5;

const INVOICE_NUMBER_LEN: usize = 10;

/// Charset for invoice-number tokens (uppercase alphanumeric).
const INVOICE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate a candidate invoice number. Uniqueness is enforced by the
/// caller's check-and-retry loop plus the unique index, not by this token.
pub fn generate_invoice_number() -> String {
    let mut rng = rand::rng();
    let token: String = (0..INVOICE_NUMBER_LEN)
        .map(|_| INVOICE_CHARSET[rng.random_range(0..INVOICE_CHARSET.len())] as char)
        .collect();
    format!("INV-{token}")
}

const API_KEY_LEN: usize = 32;

/// Charset for business API keys (lowercase alphanumeric).
const API_KEY_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Generate a fresh business API key for the game-integration path.
pub fn generate_api_key() -> String {
    let mut rng = rand::rng();
    let token: String = (0..API_KEY_LEN)
        .map(|_| API_KEY_CHARSET[rng.random_range(0..API_KEY_CHARSET.len())] as char)
        .collect();
    format!("bk_{token}")
}
