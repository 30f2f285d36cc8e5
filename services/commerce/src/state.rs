use deadpool_redis::Pool as RedisPool;
use sea_orm::DatabaseConnection;

use crate::infra::cache::RedisIdentityCache;
use crate::infra::db::{
    DbBusinessRepository, DbEmployeeRepository, DbInvoiceRepository, DbProductRepository,
    DbSaleRepository, DbUserRepository,
};
use crate::infra::identity_provider::HttpIdentityProvider;
use crate::usecase::policy::BusinessPolicy;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub redis: RedisPool,
    pub identity_provider: HttpIdentityProvider,
    pub low_stock_threshold: i32,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn business_repo(&self) -> DbBusinessRepository {
        DbBusinessRepository {
            db: self.db.clone(),
        }
    }

    pub fn employee_repo(&self) -> DbEmployeeRepository {
        DbEmployeeRepository {
            db: self.db.clone(),
        }
    }

    pub fn product_repo(&self) -> DbProductRepository {
        DbProductRepository {
            db: self.db.clone(),
        }
    }

    pub fn sale_repo(&self) -> DbSaleRepository {
        DbSaleRepository {
            db: self.db.clone(),
        }
    }

    pub fn invoice_repo(&self) -> DbInvoiceRepository {
        DbInvoiceRepository {
            db: self.db.clone(),
        }
    }

    pub fn identity_cache(&self) -> RedisIdentityCache {
        RedisIdentityCache {
            pool: self.redis.clone(),
        }
    }

    pub fn policy(&self) -> BusinessPolicy<DbBusinessRepository, DbEmployeeRepository> {
        BusinessPolicy {
            businesses: self.business_repo(),
            employees: self.employee_repo(),
        }
    }
}
