use chrono::Utc;
use uuid::Uuid;

use tradepost_domain::business::{AccessLevel, BusinessCategory};
use tradepost_domain::pagination::PageRequest;

use crate::domain::repository::{BusinessChanges, BusinessRepository, EmployeeRepository};
use crate::domain::types::{Business, generate_api_key};
use crate::error::CommerceServiceError;
use crate::usecase::policy::BusinessPolicy;

// ── CreateBusiness ───────────────────────────────────────────────────────────

pub struct CreateBusinessInput {
    pub name: String,
    pub category: BusinessCategory,
}

pub struct CreateBusinessUseCase<B: BusinessRepository> {
    pub businesses: B,
}

impl<B: BusinessRepository> CreateBusinessUseCase<B> {
    /// The creating user becomes the owner; an API key for the
    /// game-integration path is issued at creation.
    pub async fn execute(
        &self,
        owner_id: &str,
        input: CreateBusinessInput,
    ) -> Result<Business, CommerceServiceError> {
        if input.name.trim().is_empty() {
            return Err(CommerceServiceError::MissingData);
        }
        let now = Utc::now();
        let business = Business {
            id: Uuid::now_v7(),
            name: input.name.trim().to_owned(),
            category: input.category,
            owner_id: owner_id.to_owned(),
            api_key: Some(generate_api_key()),
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        self.businesses.create(&business).await?;
        Ok(business)
    }
}

// ── GetBusiness ──────────────────────────────────────────────────────────────

pub struct GetBusinessUseCase<B: BusinessRepository, E: EmployeeRepository> {
    pub policy: BusinessPolicy<B, E>,
}

impl<B: BusinessRepository, E: EmployeeRepository> GetBusinessUseCase<B, E> {
    pub async fn execute(
        &self,
        user_id: &str,
        business_id: Uuid,
    ) -> Result<Business, CommerceServiceError> {
        self.policy
            .require(user_id, business_id, AccessLevel::Member)
            .await
    }
}

// ── ListBusinesses ───────────────────────────────────────────────────────────

pub struct ListBusinessesUseCase<B: BusinessRepository> {
    pub businesses: B,
}

impl<B: BusinessRepository> ListBusinessesUseCase<B> {
    pub async fn execute(
        &self,
        user_id: &str,
        page: PageRequest,
    ) -> Result<Vec<Business>, CommerceServiceError> {
        self.businesses.list_accessible(user_id, page).await
    }
}

// ── UpdateBusiness ───────────────────────────────────────────────────────────

pub struct UpdateBusinessUseCase<B: BusinessRepository, E: EmployeeRepository> {
    pub policy: BusinessPolicy<B, E>,
}

impl<B: BusinessRepository, E: EmployeeRepository> UpdateBusinessUseCase<B, E> {
    pub async fn execute(
        &self,
        user_id: &str,
        business_id: Uuid,
        changes: BusinessChanges,
    ) -> Result<(), CommerceServiceError> {
        if changes.is_empty() {
            return Err(CommerceServiceError::MissingData);
        }
        if let Some(ref name) = changes.name {
            if name.trim().is_empty() {
                return Err(CommerceServiceError::MissingData);
            }
        }
        self.policy
            .require(user_id, business_id, AccessLevel::Owner)
            .await?;
        self.policy.businesses.update(business_id, &changes).await
    }
}

// ── DeleteBusiness ───────────────────────────────────────────────────────────

pub struct DeleteBusinessUseCase<B: BusinessRepository, E: EmployeeRepository> {
    pub policy: BusinessPolicy<B, E>,
}

impl<B: BusinessRepository, E: EmployeeRepository> DeleteBusinessUseCase<B, E> {
    /// Owner-only. Deletion cascades to employees, products, and sales.
    pub async fn execute(
        &self,
        user_id: &str,
        business_id: Uuid,
    ) -> Result<(), CommerceServiceError> {
        self.policy
            .require(user_id, business_id, AccessLevel::Owner)
            .await?;
        self.policy.businesses.delete(business_id).await?;
        Ok(())
    }
}

// ── RegenerateApiKey ─────────────────────────────────────────────────────────

pub struct RegenerateApiKeyUseCase<B: BusinessRepository, E: EmployeeRepository> {
    pub policy: BusinessPolicy<B, E>,
}

impl<B: BusinessRepository, E: EmployeeRepository> RegenerateApiKeyUseCase<B, E> {
    /// Owner-only. The previous key stops authenticating immediately.
    pub async fn execute(
        &self,
        user_id: &str,
        business_id: Uuid,
    ) -> Result<String, CommerceServiceError> {
        self.policy
            .require(user_id, business_id, AccessLevel::Owner)
            .await?;
        let key = generate_api_key();
        self.policy.businesses.set_api_key(business_id, &key).await?;
        Ok(key)
    }
}
