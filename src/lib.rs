//! Request-scoped authenticated identity for axum services.
//!
//! An identity middleware resolves the bearer token through an
//! [`services::auth::Authenticator`] and stores the result in a
//! [`RequestContext`] inside the request extensions. Handlers read it back with
//! the [`CurrentUser`] extractor (required) or `Option<CurrentUser>` (optional).

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;

pub use api::v1::extractors::identity::{CurrentUser, RequestContext, SelectedUser};
