//! Mock auth helpers for integration tests.
//!
//! Handlers authenticate via `Authorization: Bearer <token>`, resolved
//! against the identity provider. In tests, a mock provider recognizes the
//! tokens built here so no real provider is needed.

use http::{HeaderMap, HeaderValue};

use tradepost_auth_types::identity::VerifiedIdentity;

/// Configurable bearer credential injected into test requests.
pub struct MockBearer {
    pub token: String,
}

impl MockBearer {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Return headers as if the client presented the credential.
    pub fn headers(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(
            http::header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.token)).unwrap(),
        );
        map
    }
}

/// A canned verified identity keyed by an opaque provider id.
pub fn test_identity(id: &str) -> VerifiedIdentity {
    VerifiedIdentity {
        id: id.to_owned(),
        email: format!("{id}@example.com"),
        first_name: "Test".to_owned(),
        last_name: id.to_owned(),
        profile_image_url: None,
    }
}
