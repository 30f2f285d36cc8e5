use deadpool_redis::Pool;
use deadpool_redis::redis::AsyncCommands;

use crate::domain::repository::IdentityCache;
use crate::error::CommerceServiceError;

/// Redis-backed identity-mirror cache. A hit means the local user row was
/// refreshed within the TTL window, so the provider round-trip and the
/// upsert are both skipped.
#[derive(Clone)]
pub struct RedisIdentityCache {
    pub pool: Pool,
}

fn identity_key(token: &str) -> String {
    format!("identity:{token}")
}

impl IdentityCache for RedisIdentityCache {
    async fn get_user_id(&self, token: &str) -> Result<Option<String>, CommerceServiceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| CommerceServiceError::Internal(e.into()))?;
        let value: Option<String> = conn
            .get(identity_key(token))
            .await
            .map_err(|e: deadpool_redis::redis::RedisError| {
                CommerceServiceError::Internal(e.into())
            })?;
        Ok(value)
    }

    async fn set_user_id(
        &self,
        token: &str,
        user_id: &str,
        ttl_secs: u64,
    ) -> Result<(), CommerceServiceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| CommerceServiceError::Internal(e.into()))?;
        let (): () = conn
            .set_ex(identity_key(token), user_id, ttl_secs)
            .await
            .map_err(|e: deadpool_redis::redis::RedisError| {
                CommerceServiceError::Internal(e.into())
            })?;
        Ok(())
    }
}
