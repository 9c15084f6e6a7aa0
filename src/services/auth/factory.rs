//! Factory: build the `Authenticator` from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::services::auth::{Authenticator, StaticTokenAuthenticator};

pub fn build_authenticator(config: &Config) -> Arc<dyn Authenticator> {
    let auth = StaticTokenAuthenticator::new(config.static_tokens.clone());

    if auth.is_empty() {
        tracing::warn!("AUTH_STATIC_TOKENS is empty; every request will be anonymous");
    } else if config.app_env.is_production() {
        tracing::warn!(
            entries = auth.len(),
            "static bearer tokens are enabled in production"
        );
    }

    Arc::new(auth)
}
