/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth::identity (RequestContext の組み立て), http (request-id / trace / limit / timeout)
 */
pub mod auth;
pub mod http;
