/*
 * Responsibility
 * - identity 系の response DTO
 * - SelectedUser をそのまま返さず、公開する形をここで固定する
 */
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::v1::extractors::SelectedUser;

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub role: String,
}

impl From<&SelectedUser> for UserResponse {
    fn from(user: &SelectedUser) -> Self {
        Self {
            id: user.id.clone(),
            role: user.role.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WhoAmIResponse {
    pub request_id: String,
    pub received_at: DateTime<Utc>,
    pub authenticated: bool,
    // 匿名なら null
    pub user: Option<UserResponse>,
}

#[derive(Debug, Serialize)]
pub struct AdminPingResponse {
    pub status: &'static str,
    pub user_id: String,
}
