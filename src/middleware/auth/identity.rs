//! Bearer token → SelectedUser → RequestContext を extensions に入れる
//!
//! - Authorization ヘッダが無いリクエストは匿名として通す (identity slot は None のまま)
//! - 401 にするかどうかは handler 側の extractor (`CurrentUser`) が決める
//! - token を提示したのに解決できない場合はここで 401 (fail-closed)

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::{self, Next},
    response::Response,
};
use uuid::Uuid;

use crate::api::v1::extractors::RequestContext;
use crate::error::AppError;
use crate::middleware::http::REQUEST_ID_HEADER;
use crate::state::AppState;

/// identity middleware を Router に適用する。
///
/// 例：
/// ```ignore
/// let v1 = api::v1::routes();
/// let v1 = middleware::auth::identity::apply(v1, state.clone());
/// app = app.nest("/api/v1", v1);
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.layer(middleware::from_fn_with_state(state, identity_middleware))
}

async fn identity_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    // 既に外側の layer が作っていればそれを引き継ぐ（二重に layer されても上書きしない）
    let existing = req.extensions_mut().remove::<RequestContext>();
    let mut ctx = existing.unwrap_or_else(|| RequestContext::new(request_id(req.headers())));

    if ctx.is_authenticated() {
        tracing::debug!(
            request_id = %ctx.request_id(),
            "identity already attached, skipping authentication"
        );
    } else if let Some(token) = bearer_token(req.headers())? {
        let user = match state.authenticator.authenticate(token).await {
            Ok(user) => user,
            Err(err) => {
                tracing::warn!(
                    request_id = %ctx.request_id(),
                    backend = state.authenticator.backend_name(),
                    error = %err,
                    "bearer authentication failed"
                );
                return Err(AppError::Unauthorized);
            }
        };

        tracing::debug!(
            request_id = %ctx.request_id(),
            user_id = %user.id,
            role = %user.role,
            "identity attached"
        );

        if let Err(rejected) = ctx.set_authenticated_user(user) {
            tracing::warn!(user_id = %rejected.id, "identity slot already set, keeping the first");
        }
    }

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(ctx);

    Ok(next.run(req).await)
}

/// `x-request-id` は PropagateRequestIdLayer がそのまま response に返すので、
/// 非 UTF-8 でも捨てずに lossy 変換して同じ値として扱う
fn request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .filter(|v| !v.is_empty())
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

/// - ヘッダ無し: Ok(None)
/// - `Bearer <token>`: Ok(Some(token)). scheme は大文字小文字を区別しない (RFC 7235)
/// - それ以外 (非 UTF-8 / 別 scheme / 空 token): 401
fn bearer_token(headers: &HeaderMap) -> Result<Option<&str>, AppError> {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return Ok(None);
    };

    let token = value
        .to_str()
        .ok()
        .and_then(|v| v.split_once(' '))
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("Bearer"))
        .map(|(_, token)| token.trim())
        .filter(|t| !t.is_empty())
        .ok_or(AppError::Unauthorized)?;

    Ok(Some(token))
}
