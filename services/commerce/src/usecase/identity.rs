use chrono::Utc;

use tradepost_auth_types::identity::IDENTITY_CACHE_TTL_SECS;
use tradepost_domain::business::UserRole;

use crate::domain::repository::{IdentityCache, IdentityProviderPort, UserRepository};
use crate::domain::types::UserProfile;
use crate::error::CommerceServiceError;

// ── ResolveIdentity ──────────────────────────────────────────────────────────

/// Resolve a bearer credential to a local user id.
///
/// Cache hit: the mirror was refreshed within the TTL window — return the
/// id without touching the provider or the database. Miss: introspect with
/// the provider, upsert the local mirror from the verified claims, cache.
pub struct ResolveIdentityUseCase<P, C, U>
where
    P: IdentityProviderPort,
    C: IdentityCache,
    U: UserRepository,
{
    pub provider: P,
    pub cache: C,
    pub users: U,
}

impl<P, C, U> ResolveIdentityUseCase<P, C, U>
where
    P: IdentityProviderPort,
    C: IdentityCache,
    U: UserRepository,
{
    pub async fn execute(&self, token: &str) -> Result<String, CommerceServiceError> {
        if let Some(user_id) = self.cache.get_user_id(token).await? {
            return Ok(user_id);
        }

        let identity = self.provider.introspect(token).await?;

        let now = Utc::now();
        let user = UserProfile {
            id: identity.id,
            email: identity.email,
            first_name: identity.first_name,
            last_name: identity.last_name,
            profile_image_url: identity.profile_image_url,
            role: UserRole::default(),
            created_at: now,
            updated_at: now,
        };
        self.users.upsert(&user).await?;

        self.cache
            .set_user_id(token, &user.id, IDENTITY_CACHE_TTL_SECS)
            .await?;
        Ok(user.id)
    }
}
