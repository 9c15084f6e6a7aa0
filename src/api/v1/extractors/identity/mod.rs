/*!
 * Request identity
 *
 * Responsibility:
 * - リクエスト単位のコンテキスト（RequestContext）と認証済み主体（SelectedUser）を定義する
 * - handler に extractor として提供する
 * - HTTP / axum 依存は core に閉じ込め、型定義は types に分離する
 *
 * Public API:
 * - RequestContext
 * - SelectedUser
 * - CurrentUser
 */

mod core;
mod types;

pub use self::core::CurrentUser;
pub use self::types::{RequestContext, SelectedUser};
