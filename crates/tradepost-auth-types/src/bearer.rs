//! Bearer credential extraction from the `Authorization` header.

use axum::extract::FromRequestParts;
use http::StatusCode;
use http::header::HeaderMap;
use http::request::Parts;

/// Pull the bearer credential out of `Authorization: Bearer <token>`.
///
/// Returns `None` when the header is absent, not valid UTF-8, uses a
/// different scheme, or carries an empty token.
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(http::header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_owned())
}

/// Opaque bearer credential presented by the client.
///
/// Returns 401 if the `Authorization` header is absent or malformed.
/// The credential is NOT validated here — callers hand it to the identity
/// resolver, which is the trust boundary.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // Extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let token = bearer_token(&parts.headers);
        async move {
            let token = token.ok_or(StatusCode::UNAUTHORIZED)?;
            Ok(Self(token))
        }
    }
}
