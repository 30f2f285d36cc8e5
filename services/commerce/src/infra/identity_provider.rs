use anyhow::Context as _;
use reqwest::StatusCode;

use tradepost_auth_types::identity::VerifiedIdentity;

use crate::domain::repository::IdentityProviderPort;
use crate::error::CommerceServiceError;

/// HTTP client for the external identity provider's introspection endpoint.
///
/// The provider is the trust boundary: profile fields always come from its
/// verified response, never from anything the client sent.
#[derive(Clone)]
pub struct HttpIdentityProvider {
    client: reqwest::Client,
    base_url: String,
}

impl HttpIdentityProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn userinfo_url(&self) -> String {
        format!("{}/oauth/userinfo", self.base_url.trim_end_matches('/'))
    }
}

impl IdentityProviderPort for HttpIdentityProvider {
    async fn introspect(&self, token: &str) -> Result<VerifiedIdentity, CommerceServiceError> {
        let response = self
            .client
            .get(self.userinfo_url())
            .bearer_auth(token)
            .send()
            .await
            .context("identity provider request")?;

        match response.status() {
            StatusCode::OK => {
                let identity = response
                    .json::<VerifiedIdentity>()
                    .await
                    .context("identity provider response body")?;
                Ok(identity)
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(CommerceServiceError::Unauthenticated)
            }
            status => Err(CommerceServiceError::Internal(anyhow::anyhow!(
                "identity provider returned {status}"
            ))),
        }
    }
}
