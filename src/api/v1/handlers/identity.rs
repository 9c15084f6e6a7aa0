/*
 * Responsibility
 * - identity slot を読むだけの handler 群
 *   - /whoami: 任意 (Option<CurrentUser>)。匿名でも 200
 *   - /me: 必須 (CurrentUser)。匿名なら extractor が 401
 *   - /admin/ping: 必須 + role=admin。違えば 403
 */
use axum::Json;

use crate::{
    api::v1::{
        dto::identity::{AdminPingResponse, UserResponse, WhoAmIResponse},
        extractors::{CurrentUser, RequestContext},
    },
    error::AppError,
};

const ADMIN_ROLE: &str = "admin";

pub async fn whoami(ctx: RequestContext, user: Option<CurrentUser>) -> Json<WhoAmIResponse> {
    let user = user.map(|CurrentUser(user)| UserResponse::from(&user));

    Json(WhoAmIResponse {
        request_id: ctx.request_id().to_string(),
        received_at: ctx.received_at(),
        authenticated: user.is_some(),
        user,
    })
}

pub async fn me(CurrentUser(user): CurrentUser) -> Json<UserResponse> {
    Json(UserResponse::from(&user))
}

pub async fn admin_ping(user: CurrentUser) -> Result<Json<AdminPingResponse>, AppError> {
    let admin = user.require_role(ADMIN_ROLE)?;

    Ok(Json(AdminPingResponse {
        status: "ok",
        user_id: admin.id.clone(),
    }))
}
