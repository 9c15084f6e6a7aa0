//! Authentication backend interface used by the identity middleware.
use async_trait::async_trait;
use thiserror::Error;

use crate::api::v1::extractors::SelectedUser;

/// Why a presented credential did not resolve to a user.
///
/// Kept independent from `AppError`: the middleware decides how to fail
/// (currently fail-closed with 401 for both).
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("unknown credentials")]
    UnknownCredentials,
    /// Backend unreachable or misbehaving (session store, introspection endpoint).
    /// The in-memory static table never returns this.
    #[error("authentication backend error: {0}")]
    Backend(String),
}

/// Resolves a bearer token to the user projection handlers are allowed to see.
///
/// Implementations are shared across requests behind an `Arc`.
#[async_trait]
pub trait Authenticator: Send + Sync + 'static {
    // Backend name (for logging).
    fn backend_name(&self) -> &'static str;

    async fn authenticate(&self, token: &str) -> Result<SelectedUser, AuthError>;
}
