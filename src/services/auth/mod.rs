pub mod authenticator;
pub mod factory;
pub mod static_tokens;

pub use authenticator::{AuthError, Authenticator};
pub use factory::build_authenticator;
pub use static_tokens::StaticTokenAuthenticator;
