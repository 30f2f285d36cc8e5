use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use tradepost_commerce::domain::repository::{
    BusinessChanges, BusinessRepository, EmployeeRepository, InvoiceRepository, ProductChanges,
    ProductRepository, SaleRepository, UserRepository,
};
use tradepost_commerce::domain::types::{
    Business, CreatedSale, EmployeeMembership, Invoice, NewSale, Product, Sale, SaleItem,
    UserProfile, generate_api_key, generate_invoice_number,
};
use tradepost_commerce::error::CommerceServiceError;
use tradepost_domain::business::{BusinessCategory, EmployeeRole, UserRole};
use tradepost_domain::pagination::PageRequest;
use tradepost_domain::sale::{InvoiceStatus, SaleSource, SaleStatus};

fn paged<T: Clone>(values: Vec<T>, page: PageRequest) -> Vec<T> {
    let PageRequest { per_page, page } = page.clamped();
    values
        .into_iter()
        .skip(((page - 1) * per_page) as usize)
        .take(per_page as usize)
        .collect()
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn test_user(id: &str) -> UserProfile {
    let now = Utc::now();
    UserProfile {
        id: id.to_owned(),
        email: format!("{id}@example.com"),
        first_name: "Test".to_owned(),
        last_name: id.to_owned(),
        profile_image_url: None,
        role: UserRole::default(),
        created_at: now,
        updated_at: now,
    }
}

pub fn test_business(owner_id: &str, name: &str) -> Business {
    let now = Utc::now();
    Business {
        id: Uuid::now_v7(),
        name: name.to_owned(),
        category: BusinessCategory::Restaurant,
        owner_id: owner_id.to_owned(),
        api_key: Some(generate_api_key()),
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn test_product(business_id: Uuid, name: &str, price: &str, stock: i32) -> Product {
    let now = Utc::now();
    Product {
        id: Uuid::now_v7(),
        business_id,
        name: name.to_owned(),
        price: price.parse().unwrap(),
        stock,
        category: None,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn test_membership(business_id: Uuid, user_id: &str) -> EmployeeMembership {
    EmployeeMembership {
        id: Uuid::now_v7(),
        business_id,
        user_id: user_id.to_owned(),
        role: EmployeeRole::Employee,
        created_at: Utc::now(),
    }
}

pub fn test_sale(
    business_id: Uuid,
    seller_id: &str,
    total: &str,
    created_at: DateTime<Utc>,
) -> Sale {
    Sale {
        id: Uuid::now_v7(),
        business_id,
        seller_id: seller_id.to_owned(),
        buyer_name: "Walk-in".to_owned(),
        buyer_info: None,
        total_amount: total.parse().unwrap(),
        status: SaleStatus::Completed,
        source: SaleSource::Web,
        created_at,
    }
}

pub fn test_invoice(sale_id: Uuid, status: InvoiceStatus) -> Invoice {
    let now = Utc::now();
    Invoice {
        id: Uuid::now_v7(),
        sale_id,
        invoice_number: generate_invoice_number(),
        status,
        issue_date: now,
        due_date: None,
        paid_at: None,
        created_at: now,
    }
}

// ── MockUserRepo ─────────────────────────────────────────────────────────────

pub struct MockUserRepo {
    pub users: Vec<UserProfile>,
}

impl MockUserRepo {
    pub fn new(users: Vec<UserProfile>) -> Self {
        Self { users }
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_id(&self, id: &str) -> Result<Option<UserProfile>, CommerceServiceError> {
        Ok(self.users.iter().find(|u| u.id == id).cloned())
    }

    async fn upsert(&self, _user: &UserProfile) -> Result<(), CommerceServiceError> {
        Ok(())
    }
}

// ── MockBusinessRepo ─────────────────────────────────────────────────────────

pub struct MockBusinessRepo {
    pub businesses: Arc<Mutex<Vec<Business>>>,
    pub memberships: Arc<Mutex<Vec<EmployeeMembership>>>,
}

impl MockBusinessRepo {
    pub fn new(
        businesses: Vec<Business>,
        memberships: Arc<Mutex<Vec<EmployeeMembership>>>,
    ) -> Self {
        Self {
            businesses: Arc::new(Mutex::new(businesses)),
            memberships,
        }
    }

    fn accessible(&self, user_id: &str) -> Vec<Business> {
        let memberships = self.memberships.lock().unwrap();
        self.businesses
            .lock()
            .unwrap()
            .iter()
            .filter(|b| {
                b.owner_id == user_id
                    || memberships
                        .iter()
                        .any(|m| m.business_id == b.id && m.user_id == user_id)
            })
            .cloned()
            .collect()
    }
}

impl BusinessRepository for MockBusinessRepo {
    async fn create(&self, business: &Business) -> Result<(), CommerceServiceError> {
        self.businesses.lock().unwrap().push(business.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Business>, CommerceServiceError> {
        Ok(self
            .businesses
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == id)
            .cloned())
    }

    async fn find_by_api_key(
        &self,
        key: &str,
    ) -> Result<Option<Business>, CommerceServiceError> {
        Ok(self
            .businesses
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.api_key.as_deref() == Some(key))
            .cloned())
    }

    async fn list_accessible(
        &self,
        user_id: &str,
        page: PageRequest,
    ) -> Result<Vec<Business>, CommerceServiceError> {
        Ok(paged(self.accessible(user_id), page))
    }

    async fn accessible_ids(&self, user_id: &str) -> Result<Vec<Uuid>, CommerceServiceError> {
        Ok(self.accessible(user_id).into_iter().map(|b| b.id).collect())
    }

    async fn update(
        &self,
        id: Uuid,
        changes: &BusinessChanges,
    ) -> Result<(), CommerceServiceError> {
        let mut businesses = self.businesses.lock().unwrap();
        if let Some(b) = businesses.iter_mut().find(|b| b.id == id) {
            if let Some(ref name) = changes.name {
                b.name = name.clone();
            }
            if let Some(category) = changes.category {
                b.category = category;
            }
            if let Some(is_active) = changes.is_active {
                b.is_active = is_active;
            }
            b.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn set_api_key(&self, id: Uuid, key: &str) -> Result<(), CommerceServiceError> {
        let mut businesses = self.businesses.lock().unwrap();
        if let Some(b) = businesses.iter_mut().find(|b| b.id == id) {
            b.api_key = Some(key.to_owned());
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, CommerceServiceError> {
        let mut businesses = self.businesses.lock().unwrap();
        let before = businesses.len();
        businesses.retain(|b| b.id != id);
        Ok(businesses.len() < before)
    }
}

// ── MockEmployeeRepo ─────────────────────────────────────────────────────────

pub struct MockEmployeeRepo {
    pub memberships: Arc<Mutex<Vec<EmployeeMembership>>>,
}

impl MockEmployeeRepo {
    pub fn new(memberships: Arc<Mutex<Vec<EmployeeMembership>>>) -> Self {
        Self { memberships }
    }
}

impl EmployeeRepository for MockEmployeeRepo {
    async fn list_by_business(
        &self,
        business_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<EmployeeMembership>, CommerceServiceError> {
        let memberships: Vec<_> = self
            .memberships
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.business_id == business_id)
            .cloned()
            .collect();
        Ok(paged(memberships, page))
    }

    async fn find(
        &self,
        business_id: Uuid,
        user_id: &str,
    ) -> Result<Option<EmployeeMembership>, CommerceServiceError> {
        Ok(self
            .memberships
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.business_id == business_id && m.user_id == user_id)
            .cloned())
    }

    async fn create(
        &self,
        membership: &EmployeeMembership,
    ) -> Result<(), CommerceServiceError> {
        let mut memberships = self.memberships.lock().unwrap();
        if memberships
            .iter()
            .any(|m| m.business_id == membership.business_id && m.user_id == membership.user_id)
        {
            return Err(CommerceServiceError::EmployeeAlreadyExists);
        }
        memberships.push(membership.clone());
        Ok(())
    }

    async fn delete(
        &self,
        business_id: Uuid,
        user_id: &str,
    ) -> Result<bool, CommerceServiceError> {
        let mut memberships = self.memberships.lock().unwrap();
        let before = memberships.len();
        memberships.retain(|m| !(m.business_id == business_id && m.user_id == user_id));
        Ok(memberships.len() < before)
    }
}

// ── MockProductRepo ──────────────────────────────────────────────────────────

pub struct MockProductRepo {
    pub products: Arc<Mutex<Vec<Product>>>,
}

impl MockProductRepo {
    pub fn new(products: Arc<Mutex<Vec<Product>>>) -> Self {
        Self { products }
    }
}

impl ProductRepository for MockProductRepo {
    async fn create(&self, product: &Product) -> Result<(), CommerceServiceError> {
        self.products.lock().unwrap().push(product.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, CommerceServiceError> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn list_by_business(
        &self,
        business_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Product>, CommerceServiceError> {
        let products: Vec<_> = self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.business_id == business_id)
            .cloned()
            .collect();
        Ok(paged(products, page))
    }

    async fn list_low_stock(
        &self,
        business_ids: &[Uuid],
        threshold: i32,
    ) -> Result<Vec<Product>, CommerceServiceError> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| business_ids.contains(&p.business_id) && p.stock <= threshold)
            .cloned()
            .collect())
    }

    async fn count_low_stock(
        &self,
        business_ids: &[Uuid],
        threshold: i32,
    ) -> Result<u64, CommerceServiceError> {
        Ok(self.list_low_stock(business_ids, threshold).await?.len() as u64)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: &ProductChanges,
    ) -> Result<(), CommerceServiceError> {
        let mut products = self.products.lock().unwrap();
        if let Some(p) = products.iter_mut().find(|p| p.id == id) {
            if let Some(ref name) = changes.name {
                p.name = name.clone();
            }
            if let Some(price) = changes.price {
                p.price = price;
            }
            if let Some(stock) = changes.stock {
                p.stock = stock;
            }
            if let Some(ref category) = changes.category {
                p.category = Some(category.clone());
            }
            if let Some(is_active) = changes.is_active {
                p.is_active = is_active;
            }
            p.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, CommerceServiceError> {
        let mut products = self.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| p.id != id);
        Ok(products.len() < before)
    }
}

// ── MockSaleRepo ─────────────────────────────────────────────────────────────

/// Mimics the atomic sale transaction: validate every line against current
/// stock, then apply decrements, sale, items, and invoice together — or
/// nothing at all.
pub struct MockSaleRepo {
    pub products: Arc<Mutex<Vec<Product>>>,
    pub sales: Arc<Mutex<Vec<Sale>>>,
    pub items: Arc<Mutex<Vec<SaleItem>>>,
    pub invoices: Arc<Mutex<Vec<Invoice>>>,
}

impl MockSaleRepo {
    pub fn new(products: Arc<Mutex<Vec<Product>>>) -> Self {
        Self {
            products,
            sales: Arc::new(Mutex::new(Vec::new())),
            items: Arc::new(Mutex::new(Vec::new())),
            invoices: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl SaleRepository for MockSaleRepo {
    async fn create_sale(
        &self,
        new_sale: &NewSale,
    ) -> Result<CreatedSale, CommerceServiceError> {
        {
            let mut products = self.products.lock().unwrap();
            for line in &new_sale.lines {
                let product = products
                    .iter()
                    .find(|p| p.id == line.product_id)
                    .ok_or(CommerceServiceError::ProductNotFound)?;
                if product.stock < line.quantity {
                    return Err(CommerceServiceError::InsufficientStock {
                        product: line.product_name.clone(),
                    });
                }
            }
            for line in &new_sale.lines {
                if let Some(p) = products.iter_mut().find(|p| p.id == line.product_id) {
                    p.stock -= line.quantity;
                }
            }
        }

        let now = Utc::now();
        let sale = Sale {
            id: Uuid::now_v7(),
            business_id: new_sale.business_id,
            seller_id: new_sale.seller_id.clone(),
            buyer_name: new_sale.buyer_name.clone(),
            buyer_info: new_sale.buyer_info.clone(),
            total_amount: new_sale.total_amount,
            status: SaleStatus::Completed,
            source: new_sale.source,
            created_at: now,
        };
        let items: Vec<SaleItem> = new_sale
            .lines
            .iter()
            .map(|line| SaleItem {
                id: Uuid::now_v7(),
                sale_id: sale.id,
                product_id: Some(line.product_id),
                product_name: line.product_name.clone(),
                quantity: line.quantity,
                unit_price: line.unit_price,
                total_price: line.total_price,
            })
            .collect();

        let mut invoice_number = generate_invoice_number();
        {
            let invoices = self.invoices.lock().unwrap();
            while invoices
                .iter()
                .any(|i| i.invoice_number == invoice_number)
            {
                invoice_number = generate_invoice_number();
            }
        }
        let invoice = Invoice {
            id: Uuid::now_v7(),
            sale_id: sale.id,
            invoice_number,
            status: InvoiceStatus::Pending,
            issue_date: now,
            due_date: None,
            paid_at: None,
            created_at: now,
        };

        self.sales.lock().unwrap().push(sale.clone());
        self.items.lock().unwrap().extend(items.clone());
        self.invoices.lock().unwrap().push(invoice.clone());
        Ok(CreatedSale {
            sale,
            items,
            invoice,
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Sale>, CommerceServiceError> {
        Ok(self
            .sales
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn find_with_items(
        &self,
        id: Uuid,
    ) -> Result<Option<(Sale, Vec<SaleItem>)>, CommerceServiceError> {
        let Some(sale) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        let items = self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.sale_id == id)
            .cloned()
            .collect();
        Ok(Some((sale, items)))
    }

    async fn list_by_businesses(
        &self,
        business_ids: &[Uuid],
        page: PageRequest,
    ) -> Result<Vec<Sale>, CommerceServiceError> {
        let sales: Vec<_> = self
            .sales
            .lock()
            .unwrap()
            .iter()
            .filter(|s| business_ids.contains(&s.business_id))
            .cloned()
            .collect();
        Ok(paged(sales, page))
    }

    async fn sum_completed_since(
        &self,
        business_ids: &[Uuid],
        since: DateTime<Utc>,
    ) -> Result<Decimal, CommerceServiceError> {
        Ok(self
            .sales
            .lock()
            .unwrap()
            .iter()
            .filter(|s| {
                business_ids.contains(&s.business_id)
                    && s.status == SaleStatus::Completed
                    && s.created_at >= since
            })
            .map(|s| s.total_amount)
            .sum())
    }

    async fn count_completed(
        &self,
        business_ids: &[Uuid],
    ) -> Result<u64, CommerceServiceError> {
        Ok(self
            .sales
            .lock()
            .unwrap()
            .iter()
            .filter(|s| {
                business_ids.contains(&s.business_id) && s.status == SaleStatus::Completed
            })
            .count() as u64)
    }
}

// ── MockInvoiceRepo ──────────────────────────────────────────────────────────

pub struct MockInvoiceRepo {
    pub invoices: Arc<Mutex<Vec<Invoice>>>,
    pub sales: Arc<Mutex<Vec<Sale>>>,
}

impl MockInvoiceRepo {
    pub fn new(invoices: Arc<Mutex<Vec<Invoice>>>, sales: Arc<Mutex<Vec<Sale>>>) -> Self {
        Self { invoices, sales }
    }
}

impl InvoiceRepository for MockInvoiceRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Invoice>, CommerceServiceError> {
        Ok(self
            .invoices
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id == id)
            .cloned())
    }

    async fn find_by_sale(
        &self,
        sale_id: Uuid,
    ) -> Result<Option<Invoice>, CommerceServiceError> {
        Ok(self
            .invoices
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.sale_id == sale_id)
            .cloned())
    }

    async fn list_by_businesses(
        &self,
        business_ids: &[Uuid],
        page: PageRequest,
    ) -> Result<Vec<Invoice>, CommerceServiceError> {
        let sales = self.sales.lock().unwrap();
        let invoices: Vec<_> = self
            .invoices
            .lock()
            .unwrap()
            .iter()
            .filter(|i| {
                sales
                    .iter()
                    .any(|s| s.id == i.sale_id && business_ids.contains(&s.business_id))
            })
            .cloned()
            .collect();
        Ok(paged(invoices, page))
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: InvoiceStatus,
        paid_at: Option<DateTime<Utc>>,
    ) -> Result<(), CommerceServiceError> {
        let mut invoices = self.invoices.lock().unwrap();
        if let Some(invoice) = invoices.iter_mut().find(|i| i.id == id) {
            invoice.status = status;
            invoice.paid_at = paid_at;
        }
        Ok(())
    }
}
