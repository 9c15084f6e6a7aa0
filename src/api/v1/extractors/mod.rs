pub mod identity;

pub use identity::{CurrentUser, RequestContext, SelectedUser};
