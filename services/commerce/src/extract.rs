//! Authenticated-user extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use tradepost_auth_types::bearer::bearer_token;

use crate::error::CommerceServiceError;
use crate::state::AppState;
use crate::usecase::identity::ResolveIdentityUseCase;

/// The authenticated user behind the bearer credential.
///
/// Extraction runs the identity resolver: cache hit returns the mirrored
/// user id directly; a miss introspects with the provider and upserts the
/// local mirror. Rejects with 401 before any handler logic on a missing or
/// invalid credential.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: String,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = CommerceServiceError;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // Extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let token = bearer_token(&parts.headers);
        let state = state.clone();
        async move {
            let token = token.ok_or(CommerceServiceError::Unauthenticated)?;
            let usecase = ResolveIdentityUseCase {
                provider: state.identity_provider.clone(),
                cache: state.identity_cache(),
                users: state.user_repo(),
            };
            let user_id = usecase.execute(&token).await?;
            Ok(Self { user_id })
        }
    }
}
