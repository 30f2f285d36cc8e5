use uuid::Uuid;

use tradepost_domain::business::AccessLevel;

use crate::domain::repository::{BusinessRepository, EmployeeRepository};
use crate::domain::types::Business;
use crate::error::CommerceServiceError;

/// The single authorization policy for business-scoped operations.
///
/// Every route handler goes through `require` with one of the two access
/// levels instead of comparing owner ids inline. The role tag on a
/// membership grants no extra capability here.
pub struct BusinessPolicy<B, E>
where
    B: BusinessRepository,
    E: EmployeeRepository,
{
    pub businesses: B,
    pub employees: E,
}

impl<B, E> BusinessPolicy<B, E>
where
    B: BusinessRepository,
    E: EmployeeRepository,
{
    /// Resolve the business and check the actor against the required level.
    ///
    /// `Member` passes for the owner or any employee; `Owner` only for the
    /// owner. Returns the business so callers do not re-fetch it.
    pub async fn require(
        &self,
        user_id: &str,
        business_id: Uuid,
        level: AccessLevel,
    ) -> Result<Business, CommerceServiceError> {
        let business = self
            .businesses
            .find_by_id(business_id)
            .await?
            .ok_or(CommerceServiceError::BusinessNotFound)?;

        if business.owner_id == user_id {
            return Ok(business);
        }

        match level {
            AccessLevel::Owner => Err(CommerceServiceError::Forbidden),
            AccessLevel::Member => {
                if self.employees.find(business_id, user_id).await?.is_some() {
                    Ok(business)
                } else {
                    Err(CommerceServiceError::Forbidden)
                }
            }
        }
    }

    /// `true` iff the user is the owner or holds a membership row.
    pub async fn is_authorized(
        &self,
        user_id: &str,
        business_id: Uuid,
    ) -> Result<bool, CommerceServiceError> {
        match self.require(user_id, business_id, AccessLevel::Member).await {
            Ok(_) => Ok(true),
            Err(CommerceServiceError::Forbidden | CommerceServiceError::BusinessNotFound) => {
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}
