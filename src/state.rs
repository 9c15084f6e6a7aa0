/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - ex: authenticator: Arc<dyn Authenticator>
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 * - リクエスト単位の状態はここに置かない (RequestContext 側)
 */
use std::sync::Arc;

use crate::services::auth::Authenticator;

#[derive(Clone)]
pub struct AppState {
    pub authenticator: Arc<dyn Authenticator>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("authenticator", &self.authenticator.backend_name())
            .finish()
    }
}

impl AppState {
    pub fn new(authenticator: Arc<dyn Authenticator>) -> Self {
        Self { authenticator }
    }
}
