//! Auth types shared across Tradepost services.
//!
//! Provides the `BearerToken` extractor and the `VerifiedIdentity` claims
//! shape returned by the external identity provider.

pub mod bearer;
pub mod identity;
