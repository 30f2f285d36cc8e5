//! Verified identity claims returned by the external identity provider.

use serde::{Deserialize, Serialize};

/// How long a resolved identity may be served from cache before the
/// provider is consulted again. Keeps the local user mirror fresh without
/// a write on every authenticated request.
pub const IDENTITY_CACHE_TTL_SECS: u64 = 300;

/// Claims for an authenticated user, as verified by the identity provider's
/// introspection endpoint. Everything here comes from the provider response,
/// never from the original request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedIdentity {
    /// Opaque user id issued by the provider. Primary key of the local mirror.
    #[serde(rename = "sub")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}
