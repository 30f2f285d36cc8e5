use chrono::Utc;
use uuid::Uuid;

use tradepost_domain::business::{AccessLevel, EmployeeRole};
use tradepost_domain::pagination::PageRequest;

use crate::domain::repository::{BusinessRepository, EmployeeRepository, UserRepository};
use crate::domain::types::EmployeeMembership;
use crate::error::CommerceServiceError;
use crate::usecase::policy::BusinessPolicy;

// ── ListEmployees ────────────────────────────────────────────────────────────

pub struct ListEmployeesUseCase<B: BusinessRepository, E: EmployeeRepository> {
    pub policy: BusinessPolicy<B, E>,
}

impl<B: BusinessRepository, E: EmployeeRepository> ListEmployeesUseCase<B, E> {
    pub async fn execute(
        &self,
        user_id: &str,
        business_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<EmployeeMembership>, CommerceServiceError> {
        self.policy
            .require(user_id, business_id, AccessLevel::Member)
            .await?;
        self.policy.employees.list_by_business(business_id, page).await
    }
}

// ── AddEmployee ──────────────────────────────────────────────────────────────

pub struct AddEmployeeInput {
    pub user_id: String,
    pub role: EmployeeRole,
}

pub struct AddEmployeeUseCase<B, E, U>
where
    B: BusinessRepository,
    E: EmployeeRepository,
    U: UserRepository,
{
    pub policy: BusinessPolicy<B, E>,
    pub users: U,
}

impl<B, E, U> AddEmployeeUseCase<B, E, U>
where
    B: BusinessRepository,
    E: EmployeeRepository,
    U: UserRepository,
{
    /// Owner-only. The target user must already have logged in at least
    /// once (the mirror row must exist); the owner cannot be added as an
    /// employee of their own business.
    pub async fn execute(
        &self,
        actor_id: &str,
        business_id: Uuid,
        input: AddEmployeeInput,
    ) -> Result<EmployeeMembership, CommerceServiceError> {
        let business = self
            .policy
            .require(actor_id, business_id, AccessLevel::Owner)
            .await?;

        self.users
            .find_by_id(&input.user_id)
            .await?
            .ok_or(CommerceServiceError::UserNotFound)?;

        if business.owner_id == input.user_id {
            return Err(CommerceServiceError::EmployeeAlreadyExists);
        }

        let membership = EmployeeMembership {
            id: Uuid::now_v7(),
            business_id,
            user_id: input.user_id,
            role: input.role,
            created_at: Utc::now(),
        };
        self.policy.employees.create(&membership).await?;
        Ok(membership)
    }
}

// ── RemoveEmployee ───────────────────────────────────────────────────────────

pub struct RemoveEmployeeUseCase<B: BusinessRepository, E: EmployeeRepository> {
    pub policy: BusinessPolicy<B, E>,
}

impl<B: BusinessRepository, E: EmployeeRepository> RemoveEmployeeUseCase<B, E> {
    pub async fn execute(
        &self,
        actor_id: &str,
        business_id: Uuid,
        user_id: &str,
    ) -> Result<(), CommerceServiceError> {
        self.policy
            .require(actor_id, business_id, AccessLevel::Owner)
            .await?;
        let deleted = self.policy.employees.delete(business_id, user_id).await?;
        if !deleted {
            return Err(CommerceServiceError::EmployeeNotFound);
        }
        Ok(())
    }
}
