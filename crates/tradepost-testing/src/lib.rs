//! Test utilities for Tradepost services.
//!
//! Provides bearer-auth header builders and canned verified identities.
//! Import in `#[cfg(test)]` blocks and dev-dependencies only — never in
//! production code.

pub mod auth;
