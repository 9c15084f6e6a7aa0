use std::collections::HashMap;

use async_trait::async_trait;

use crate::api::v1::extractors::SelectedUser;
use crate::services::auth::authenticator::{AuthError, Authenticator};

/// In-memory token table for local development and tests.
///
/// This is a lookup, not a verification: whoever holds a listed token is
/// that user.
#[derive(Clone, Default)]
pub struct StaticTokenAuthenticator {
    tokens: HashMap<String, SelectedUser>,
}

impl std::fmt::Debug for StaticTokenAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print tokens
        f.debug_struct("StaticTokenAuthenticator")
            .field("entries", &self.tokens.len())
            .finish()
    }
}

impl StaticTokenAuthenticator {
    pub fn new(tokens: HashMap<String, SelectedUser>) -> Self {
        Self { tokens }
    }

    pub fn with_token(mut self, token: impl Into<String>, user: SelectedUser) -> Self {
        self.tokens.insert(token.into(), user);
        self
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[async_trait]
impl Authenticator for StaticTokenAuthenticator {
    fn backend_name(&self) -> &'static str {
        "static-tokens"
    }

    async fn authenticate(&self, token: &str) -> Result<SelectedUser, AuthError> {
        self.tokens
            .get(token)
            .cloned()
            .ok_or(AuthError::UnknownCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authenticator() -> StaticTokenAuthenticator {
        StaticTokenAuthenticator::default()
            .with_token("tok-admin", SelectedUser::new("u1", "admin"))
            .with_token("tok-member", SelectedUser::new("u2", "member"))
    }

    #[tokio::test]
    async fn known_token_resolves_to_its_user() {
        let user = authenticator().authenticate("tok-member").await.unwrap();
        assert_eq!(user, SelectedUser::new("u2", "member"));
    }

    #[tokio::test]
    async fn unknown_token_is_rejected() {
        let err = authenticator().authenticate("nope").await.unwrap_err();
        assert!(matches!(err, AuthError::UnknownCredentials));
    }

    #[tokio::test]
    async fn lookup_is_exact() {
        let auth = authenticator();
        assert!(auth.authenticate("TOK-ADMIN").await.is_err());
        assert!(auth.authenticate("tok-admin ").await.is_err());
    }

    #[test]
    fn debug_hides_tokens() {
        let printed = format!("{:?}", authenticator());
        assert!(!printed.contains("tok-admin"));
        assert!(printed.contains("entries: 2"));
    }
}
