/*
 * Responsibility
 * - GET /health (疎通用)
 * - identity middleware の内側にあるが、匿名で到達できること
 */
use axum::Json;

use crate::api::v1::dto::health::HealthResponse;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
