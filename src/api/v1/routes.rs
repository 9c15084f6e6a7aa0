/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - identity middleware は app.rs 側で v1 全体に掛ける
 *   (認証必須かどうかは各 handler の extractor で決まる)
 */
use axum::{Router, routing::get};

use crate::state::AppState;

use crate::api::v1::handlers::{
    health::health,
    identity::{admin_ping, me, whoami},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/whoami", get(whoami))
        .route("/me", get(me))
        .route("/admin/ping", get(admin_ping))
}
