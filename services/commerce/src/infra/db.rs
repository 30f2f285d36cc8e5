use anyhow::Context as _;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    FromQueryResult, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionError,
    TransactionTrait,
    sea_query::{Expr, OnConflict, Query},
};
use uuid::Uuid;

use tradepost_commerce_schema::{
    business_employees, businesses, invoices, products, sale_items, sales, users,
};
use tradepost_domain::business::{BusinessCategory, EmployeeRole, UserRole};
use tradepost_domain::pagination::PageRequest;
use tradepost_domain::sale::{InvoiceStatus, SaleSource, SaleStatus};

use crate::domain::repository::{
    BusinessChanges, BusinessRepository, EmployeeRepository, InvoiceRepository, ProductChanges,
    ProductRepository, SaleRepository, UserRepository,
};
use crate::domain::types::{
    Business, CreatedSale, EmployeeMembership, INVOICE_NUMBER_ATTEMPTS, Invoice, NewSale, Product,
    Sale, SaleItem, UserProfile, generate_invoice_number,
};
use crate::error::CommerceServiceError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<UserProfile>, CommerceServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        model.map(user_from_model).transpose()
    }

    async fn upsert(&self, user: &UserProfile) -> Result<(), CommerceServiceError> {
        let active = users::ActiveModel {
            id: Set(user.id.clone()),
            email: Set(user.email.clone()),
            first_name: Set(user.first_name.clone()),
            last_name: Set(user.last_name.clone()),
            profile_image_url: Set(user.profile_image_url.clone()),
            role: Set(user.role.as_str().to_owned()),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        };
        users::Entity::insert(active)
            .on_conflict(
                OnConflict::column(users::Column::Id)
                    .update_columns([
                        users::Column::Email,
                        users::Column::FirstName,
                        users::Column::LastName,
                        users::Column::ProfileImageUrl,
                        users::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("upsert user")?;
        Ok(())
    }
}

fn user_from_model(model: users::Model) -> Result<UserProfile, CommerceServiceError> {
    let role = UserRole::parse(&model.role)
        .ok_or_else(|| anyhow::anyhow!("unknown user role: {}", model.role))?;
    Ok(UserProfile {
        id: model.id,
        email: model.email,
        first_name: model.first_name,
        last_name: model.last_name,
        profile_image_url: model.profile_image_url,
        role,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

// ── Business repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbBusinessRepository {
    pub db: DatabaseConnection,
}

/// Owner of the business OR holder of a membership row.
fn accessible_cond(user_id: &str) -> Condition {
    Condition::any()
        .add(businesses::Column::OwnerId.eq(user_id))
        .add(
            businesses::Column::Id.in_subquery(
                Query::select()
                    .column(business_employees::Column::BusinessId)
                    .from(business_employees::Entity)
                    .and_where(Expr::col(business_employees::Column::UserId).eq(user_id))
                    .to_owned(),
            ),
        )
}

impl BusinessRepository for DbBusinessRepository {
    async fn create(&self, business: &Business) -> Result<(), CommerceServiceError> {
        businesses::ActiveModel {
            id: Set(business.id),
            name: Set(business.name.clone()),
            category: Set(business.category.as_str().to_owned()),
            owner_id: Set(business.owner_id.clone()),
            api_key: Set(business.api_key.clone()),
            is_active: Set(business.is_active),
            created_at: Set(business.created_at),
            updated_at: Set(business.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create business")?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Business>, CommerceServiceError> {
        let model = businesses::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find business by id")?;
        model.map(business_from_model).transpose()
    }

    async fn find_by_api_key(
        &self,
        key: &str,
    ) -> Result<Option<Business>, CommerceServiceError> {
        let model = businesses::Entity::find()
            .filter(businesses::Column::ApiKey.eq(key))
            .one(&self.db)
            .await
            .context("find business by api key")?;
        model.map(business_from_model).transpose()
    }

    async fn list_accessible(
        &self,
        user_id: &str,
        page: PageRequest,
    ) -> Result<Vec<Business>, CommerceServiceError> {
        let PageRequest { per_page, page } = page.clamped();
        let models = businesses::Entity::find()
            .filter(accessible_cond(user_id))
            .order_by_desc(businesses::Column::CreatedAt)
            .offset(((page - 1) * per_page) as u64)
            .limit(per_page as u64)
            .all(&self.db)
            .await
            .context("list accessible businesses")?;
        models.into_iter().map(business_from_model).collect()
    }

    async fn accessible_ids(&self, user_id: &str) -> Result<Vec<Uuid>, CommerceServiceError> {
        let ids = businesses::Entity::find()
            .select_only()
            .column(businesses::Column::Id)
            .filter(accessible_cond(user_id))
            .into_tuple::<Uuid>()
            .all(&self.db)
            .await
            .context("list accessible business ids")?;
        Ok(ids)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: &BusinessChanges,
    ) -> Result<(), CommerceServiceError> {
        let mut am = businesses::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(ref name) = changes.name {
            am.name = Set(name.clone());
        }
        if let Some(category) = changes.category {
            am.category = Set(category.as_str().to_owned());
        }
        if let Some(is_active) = changes.is_active {
            am.is_active = Set(is_active);
        }
        am.updated_at = Set(Utc::now());
        am.update(&self.db).await.context("update business")?;
        Ok(())
    }

    async fn set_api_key(&self, id: Uuid, key: &str) -> Result<(), CommerceServiceError> {
        let mut am = businesses::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        am.api_key = Set(Some(key.to_owned()));
        am.updated_at = Set(Utc::now());
        am.update(&self.db).await.context("set business api key")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, CommerceServiceError> {
        let result = businesses::Entity::delete_many()
            .filter(businesses::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("delete business")?;
        Ok(result.rows_affected > 0)
    }
}

fn business_from_model(model: businesses::Model) -> Result<Business, CommerceServiceError> {
    let category = BusinessCategory::parse(&model.category)
        .ok_or_else(|| anyhow::anyhow!("unknown business category: {}", model.category))?;
    Ok(Business {
        id: model.id,
        name: model.name,
        category,
        owner_id: model.owner_id,
        api_key: model.api_key,
        is_active: model.is_active,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

// ── Employee repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbEmployeeRepository {
    pub db: DatabaseConnection,
}

impl EmployeeRepository for DbEmployeeRepository {
    async fn list_by_business(
        &self,
        business_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<EmployeeMembership>, CommerceServiceError> {
        let PageRequest { per_page, page } = page.clamped();
        let models = business_employees::Entity::find()
            .filter(business_employees::Column::BusinessId.eq(business_id))
            .order_by_asc(business_employees::Column::CreatedAt)
            .offset(((page - 1) * per_page) as u64)
            .limit(per_page as u64)
            .all(&self.db)
            .await
            .context("list employees")?;
        models.into_iter().map(employee_from_model).collect()
    }

    async fn find(
        &self,
        business_id: Uuid,
        user_id: &str,
    ) -> Result<Option<EmployeeMembership>, CommerceServiceError> {
        let model = business_employees::Entity::find()
            .filter(business_employees::Column::BusinessId.eq(business_id))
            .filter(business_employees::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .context("find employee membership")?;
        model.map(employee_from_model).transpose()
    }

    async fn create(&self, membership: &EmployeeMembership) -> Result<(), CommerceServiceError> {
        // Find-then-insert keeps the rejection typed; the unique index on
        // (business_id, user_id) is the backstop under races.
        let existing = self.find(membership.business_id, &membership.user_id).await?;
        if existing.is_some() {
            return Err(CommerceServiceError::EmployeeAlreadyExists);
        }
        business_employees::ActiveModel {
            id: Set(membership.id),
            business_id: Set(membership.business_id),
            user_id: Set(membership.user_id.clone()),
            role: Set(membership.role.as_str().to_owned()),
            created_at: Set(membership.created_at),
        }
        .insert(&self.db)
        .await
        .context("create employee membership")?;
        Ok(())
    }

    async fn delete(
        &self,
        business_id: Uuid,
        user_id: &str,
    ) -> Result<bool, CommerceServiceError> {
        let result = business_employees::Entity::delete_many()
            .filter(business_employees::Column::BusinessId.eq(business_id))
            .filter(business_employees::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .context("delete employee membership")?;
        Ok(result.rows_affected > 0)
    }
}

fn employee_from_model(
    model: business_employees::Model,
) -> Result<EmployeeMembership, CommerceServiceError> {
    let role = EmployeeRole::parse(&model.role)
        .ok_or_else(|| anyhow::anyhow!("unknown employee role: {}", model.role))?;
    Ok(EmployeeMembership {
        id: model.id,
        business_id: model.business_id,
        user_id: model.user_id,
        role,
        created_at: model.created_at,
    })
}

// ── Product repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProductRepository {
    pub db: DatabaseConnection,
}

impl ProductRepository for DbProductRepository {
    async fn create(&self, product: &Product) -> Result<(), CommerceServiceError> {
        products::ActiveModel {
            id: Set(product.id),
            business_id: Set(product.business_id),
            name: Set(product.name.clone()),
            price: Set(product.price),
            stock: Set(product.stock),
            category: Set(product.category.clone()),
            is_active: Set(product.is_active),
            created_at: Set(product.created_at),
            updated_at: Set(product.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create product")?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, CommerceServiceError> {
        let model = products::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find product by id")?;
        Ok(model.map(product_from_model))
    }

    async fn list_by_business(
        &self,
        business_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Product>, CommerceServiceError> {
        let PageRequest { per_page, page } = page.clamped();
        let models = products::Entity::find()
            .filter(products::Column::BusinessId.eq(business_id))
            .order_by_asc(products::Column::Name)
            .offset(((page - 1) * per_page) as u64)
            .limit(per_page as u64)
            .all(&self.db)
            .await
            .context("list products")?;
        Ok(models.into_iter().map(product_from_model).collect())
    }

    async fn list_low_stock(
        &self,
        business_ids: &[Uuid],
        threshold: i32,
    ) -> Result<Vec<Product>, CommerceServiceError> {
        if business_ids.is_empty() {
            return Ok(Vec::new());
        }
        let models = products::Entity::find()
            .filter(products::Column::BusinessId.is_in(business_ids.iter().copied()))
            .filter(products::Column::Stock.lte(threshold))
            .order_by_asc(products::Column::Stock)
            .all(&self.db)
            .await
            .context("list low-stock products")?;
        Ok(models.into_iter().map(product_from_model).collect())
    }

    async fn count_low_stock(
        &self,
        business_ids: &[Uuid],
        threshold: i32,
    ) -> Result<u64, CommerceServiceError> {
        if business_ids.is_empty() {
            return Ok(0);
        }
        let count = products::Entity::find()
            .filter(products::Column::BusinessId.is_in(business_ids.iter().copied()))
            .filter(products::Column::Stock.lte(threshold))
            .count(&self.db)
            .await
            .context("count low-stock products")?;
        Ok(count)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: &ProductChanges,
    ) -> Result<(), CommerceServiceError> {
        let mut am = products::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(ref name) = changes.name {
            am.name = Set(name.clone());
        }
        if let Some(price) = changes.price {
            am.price = Set(price);
        }
        if let Some(stock) = changes.stock {
            am.stock = Set(stock);
        }
        if let Some(ref category) = changes.category {
            am.category = Set(Some(category.clone()));
        }
        if let Some(is_active) = changes.is_active {
            am.is_active = Set(is_active);
        }
        am.updated_at = Set(Utc::now());
        am.update(&self.db).await.context("update product")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, CommerceServiceError> {
        let result = products::Entity::delete_many()
            .filter(products::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("delete product")?;
        Ok(result.rows_affected > 0)
    }
}

fn product_from_model(model: products::Model) -> Product {
    Product {
        id: model.id,
        business_id: model.business_id,
        name: model.name,
        price: model.price,
        stock: model.stock,
        category: model.category,
        is_active: model.is_active,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Sale repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbSaleRepository {
    pub db: DatabaseConnection,
}

impl SaleRepository for DbSaleRepository {
    async fn create_sale(
        &self,
        new_sale: &NewSale,
    ) -> Result<CreatedSale, CommerceServiceError> {
        let new_sale = new_sale.clone();
        let result = self
            .db
            .transaction::<_, (sales::Model, Vec<sale_items::Model>, invoices::Model), CommerceServiceError>(
                |txn| {
                    Box::pin(async move {
                        let now = Utc::now();
                        let sale_id = Uuid::now_v7();

                        let sale = sales::ActiveModel {
                            id: Set(sale_id),
                            business_id: Set(new_sale.business_id),
                            seller_id: Set(new_sale.seller_id.clone()),
                            buyer_name: Set(new_sale.buyer_name.clone()),
                            buyer_info: Set(new_sale.buyer_info.clone()),
                            total_amount: Set(new_sale.total_amount),
                            status: Set(SaleStatus::Completed.as_str().to_owned()),
                            source: Set(new_sale.source.as_str().to_owned()),
                            created_at: Set(now),
                        }
                        .insert(txn)
                        .await
                        .context("insert sale")?;

                        let mut items = Vec::with_capacity(new_sale.lines.len());
                        for line in &new_sale.lines {
                            // Conditional decrement: the WHERE clause re-checks
                            // availability so a concurrent sale of the last
                            // units aborts this transaction instead of driving
                            // stock negative.
                            let updated = products::Entity::update_many()
                                .filter(products::Column::Id.eq(line.product_id))
                                .filter(products::Column::Stock.gte(line.quantity))
                                .col_expr(
                                    products::Column::Stock,
                                    Expr::col(products::Column::Stock).sub(line.quantity),
                                )
                                .exec(txn)
                                .await
                                .context("decrement stock")?;
                            if updated.rows_affected == 0 {
                                return Err(CommerceServiceError::InsufficientStock {
                                    product: line.product_name.clone(),
                                });
                            }

                            let item = sale_items::ActiveModel {
                                id: Set(Uuid::now_v7()),
                                sale_id: Set(sale_id),
                                product_id: Set(Some(line.product_id)),
                                product_name: Set(line.product_name.clone()),
                                quantity: Set(line.quantity),
                                unit_price: Set(line.unit_price),
                                total_price: Set(line.total_price),
                            }
                            .insert(txn)
                            .await
                            .context("insert sale item")?;
                            items.push(item);
                        }

                        // Check-and-retry keeps collisions from aborting the
                        // sale; the unique index is the final arbiter.
                        let mut invoice_number = generate_invoice_number();
                        for _ in 0..INVOICE_NUMBER_ATTEMPTS {
                            let taken = invoices::Entity::find()
                                .filter(invoices::Column::InvoiceNumber.eq(&invoice_number))
                                .one(txn)
                                .await
                                .context("check invoice number")?;
                            if taken.is_none() {
                                break;
                            }
                            invoice_number = generate_invoice_number();
                        }

                        let invoice = invoices::ActiveModel {
                            id: Set(Uuid::now_v7()),
                            sale_id: Set(sale_id),
                            invoice_number: Set(invoice_number),
                            status: Set(InvoiceStatus::Pending.as_str().to_owned()),
                            issue_date: Set(now),
                            due_date: Set(None),
                            paid_at: Set(None),
                            created_at: Set(now),
                        }
                        .insert(txn)
                        .await
                        .context("insert invoice")?;

                        Ok((sale, items, invoice))
                    })
                },
            )
            .await;

        match result {
            Ok((sale, items, invoice)) => Ok(CreatedSale {
                sale: sale_from_model(sale)?,
                items: items.into_iter().map(sale_item_from_model).collect(),
                invoice: invoice_from_model(invoice)?,
            }),
            Err(TransactionError::Connection(e)) => Err(CommerceServiceError::Internal(e.into())),
            Err(TransactionError::Transaction(e)) => Err(e),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Sale>, CommerceServiceError> {
        let model = sales::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find sale by id")?;
        model.map(sale_from_model).transpose()
    }

    async fn find_with_items(
        &self,
        id: Uuid,
    ) -> Result<Option<(Sale, Vec<SaleItem>)>, CommerceServiceError> {
        let Some(model) = sales::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find sale by id")?
        else {
            return Ok(None);
        };
        let items = sale_items::Entity::find()
            .filter(sale_items::Column::SaleId.eq(id))
            .all(&self.db)
            .await
            .context("list sale items")?;
        Ok(Some((
            sale_from_model(model)?,
            items.into_iter().map(sale_item_from_model).collect(),
        )))
    }

    async fn list_by_businesses(
        &self,
        business_ids: &[Uuid],
        page: PageRequest,
    ) -> Result<Vec<Sale>, CommerceServiceError> {
        if business_ids.is_empty() {
            return Ok(Vec::new());
        }
        let PageRequest { per_page, page } = page.clamped();
        let models = sales::Entity::find()
            .filter(sales::Column::BusinessId.is_in(business_ids.iter().copied()))
            .order_by_desc(sales::Column::CreatedAt)
            .offset(((page - 1) * per_page) as u64)
            .limit(per_page as u64)
            .all(&self.db)
            .await
            .context("list sales")?;
        models.into_iter().map(sale_from_model).collect()
    }

    async fn sum_completed_since(
        &self,
        business_ids: &[Uuid],
        since: DateTime<Utc>,
    ) -> Result<Decimal, CommerceServiceError> {
        if business_ids.is_empty() {
            return Ok(Decimal::ZERO);
        }

        #[derive(Debug, FromQueryResult)]
        struct RevenueRow {
            total: Option<Decimal>,
        }

        let row = sales::Entity::find()
            .select_only()
            .column_as(sales::Column::TotalAmount.sum(), "total")
            .filter(sales::Column::BusinessId.is_in(business_ids.iter().copied()))
            .filter(sales::Column::Status.eq(SaleStatus::Completed.as_str()))
            .filter(sales::Column::CreatedAt.gte(since))
            .into_model::<RevenueRow>()
            .one(&self.db)
            .await
            .context("sum completed sales")?;
        Ok(row.and_then(|r| r.total).unwrap_or(Decimal::ZERO))
    }

    async fn count_completed(
        &self,
        business_ids: &[Uuid],
    ) -> Result<u64, CommerceServiceError> {
        if business_ids.is_empty() {
            return Ok(0);
        }
        let count = sales::Entity::find()
            .filter(sales::Column::BusinessId.is_in(business_ids.iter().copied()))
            .filter(sales::Column::Status.eq(SaleStatus::Completed.as_str()))
            .count(&self.db)
            .await
            .context("count completed sales")?;
        Ok(count)
    }
}

fn sale_from_model(model: sales::Model) -> Result<Sale, CommerceServiceError> {
    let status = SaleStatus::parse(&model.status)
        .ok_or_else(|| anyhow::anyhow!("unknown sale status: {}", model.status))?;
    let source = SaleSource::parse(&model.source)
        .ok_or_else(|| anyhow::anyhow!("unknown sale source: {}", model.source))?;
    Ok(Sale {
        id: model.id,
        business_id: model.business_id,
        seller_id: model.seller_id,
        buyer_name: model.buyer_name,
        buyer_info: model.buyer_info,
        total_amount: model.total_amount,
        status,
        source,
        created_at: model.created_at,
    })
}

fn sale_item_from_model(model: sale_items::Model) -> SaleItem {
    SaleItem {
        id: model.id,
        sale_id: model.sale_id,
        product_id: model.product_id,
        product_name: model.product_name,
        quantity: model.quantity,
        unit_price: model.unit_price,
        total_price: model.total_price,
    }
}

// ── Invoice repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbInvoiceRepository {
    pub db: DatabaseConnection,
}

impl InvoiceRepository for DbInvoiceRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Invoice>, CommerceServiceError> {
        let model = invoices::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find invoice by id")?;
        model.map(invoice_from_model).transpose()
    }

    async fn find_by_sale(
        &self,
        sale_id: Uuid,
    ) -> Result<Option<Invoice>, CommerceServiceError> {
        let model = invoices::Entity::find()
            .filter(invoices::Column::SaleId.eq(sale_id))
            .one(&self.db)
            .await
            .context("find invoice by sale")?;
        model.map(invoice_from_model).transpose()
    }

    async fn list_by_businesses(
        &self,
        business_ids: &[Uuid],
        page: PageRequest,
    ) -> Result<Vec<Invoice>, CommerceServiceError> {
        if business_ids.is_empty() {
            return Ok(Vec::new());
        }
        let PageRequest { per_page, page } = page.clamped();
        let models = invoices::Entity::find()
            .filter(
                invoices::Column::SaleId.in_subquery(
                    Query::select()
                        .column(sales::Column::Id)
                        .from(sales::Entity)
                        .and_where(
                            Expr::col(sales::Column::BusinessId)
                                .is_in(business_ids.iter().copied()),
                        )
                        .to_owned(),
                ),
            )
            .order_by_desc(invoices::Column::CreatedAt)
            .offset(((page - 1) * per_page) as u64)
            .limit(per_page as u64)
            .all(&self.db)
            .await
            .context("list invoices")?;
        models.into_iter().map(invoice_from_model).collect()
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: InvoiceStatus,
        paid_at: Option<DateTime<Utc>>,
    ) -> Result<(), CommerceServiceError> {
        let mut am = invoices::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        am.status = Set(status.as_str().to_owned());
        am.paid_at = Set(paid_at);
        am.update(&self.db).await.context("update invoice status")?;
        Ok(())
    }
}

fn invoice_from_model(model: invoices::Model) -> Result<Invoice, CommerceServiceError> {
    let status = InvoiceStatus::parse(&model.status)
        .ok_or_else(|| anyhow::anyhow!("unknown invoice status: {}", model.status))?;
    Ok(Invoice {
        id: model.id,
        sale_id: model.sale_id,
        invoice_number: model.invoice_number,
        status,
        issue_date: model.issue_date,
        due_date: model.due_date,
        paid_at: model.paid_at,
        created_at: model.created_at,
    })
}
