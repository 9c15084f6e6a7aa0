use std::convert::Infallible;

use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::http::request::Parts;

use crate::error::AppError;

use super::{RequestContext, SelectedUser};

/// middleware が RequestContext を extensions に insert 済みである前提。
/// 見つからない場合は配線ミスなので 500 を返す
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<RequestContext>().cloned().ok_or_else(|| {
            tracing::error!(
                path = %parts.uri.path(),
                "request context missing; identity middleware is not applied to this route"
            );
            AppError::Internal
        })
    }
}

/// Handler で認証済みユーザーを必須として受け取るための extractor
///
/// - identity slot が空なら 401
/// - 任意にしたい場合は `Option<CurrentUser>` を使う（401 にならない）
#[derive(Debug, Clone)]
pub struct CurrentUser(pub SelectedUser);

impl CurrentUser {
    /// Coarse-grained role gate. Returns 403 when the role does not match.
    pub fn require_role(&self, role: &str) -> Result<&SelectedUser, AppError> {
        if self.0.has_role(role) {
            Ok(&self.0)
        } else {
            tracing::warn!(user_id = %self.0.id, required = role, "role check failed");
            Err(AppError::Forbidden)
        }
    }
}

fn attached_user(parts: &Parts) -> Option<SelectedUser> {
    parts
        .extensions
        .get::<RequestContext>()
        .and_then(RequestContext::authenticated_user)
        .cloned()
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        attached_user(parts)
            .map(CurrentUser)
            .ok_or(AppError::Unauthorized)
    }
}

impl<S> OptionalFromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(attached_user(parts).map(CurrentUser))
    }
}
