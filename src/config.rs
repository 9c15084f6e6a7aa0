/*
 * Responsibility
 * - 環境変数や設定の読み込み (PORT, APP_ENV, timeout/body limit, 開発用 token 表)
 * - 設定値のバリデーション (不正なら起動失敗)
 */
use std::collections::HashMap;
use std::net::SocketAddr;
use std::str::FromStr;

use thiserror::Error;

use crate::api::v1::extractors::SelectedUser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()))
    }

    fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    pub request_timeout_secs: u64,
    pub body_limit_bytes: usize,

    /// bearer token -> user. 開発用の静的な表（検証ではなく lookup のみ）
    pub static_tokens: HashMap<String, SelectedUser>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::from_env();

        let request_timeout_secs = std::env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);

        let body_limit_bytes = std::env::var("BODY_LIMIT_BYTES")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(1024 * 1024);

        let static_tokens = parse_static_tokens(
            &std::env::var("AUTH_STATIC_TOKENS").unwrap_or_default(),
        )?;

        Ok(Self {
            addr,
            app_env,
            request_timeout_secs,
            body_limit_bytes,
            static_tokens,
        })
    }
}

/// Parse `token=id:role,token=id:role`.
///
/// Empty entries are skipped. A malformed entry or a duplicated token fails the
/// whole value so a typo is caught at startup.
pub fn parse_static_tokens(raw: &str) -> Result<HashMap<String, SelectedUser>, ConfigError> {
    const KEY: &str = "AUTH_STATIC_TOKENS";

    let mut tokens = HashMap::new();

    for entry in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let (token, user) = entry.split_once('=').ok_or(ConfigError::Invalid(KEY))?;
        let (id, role) = user.split_once(':').ok_or(ConfigError::Invalid(KEY))?;

        let (token, id, role) = (token.trim(), id.trim(), role.trim());
        if token.is_empty() || id.is_empty() || role.is_empty() {
            return Err(ConfigError::Invalid(KEY));
        }

        if tokens
            .insert(token.to_string(), SelectedUser::new(id, role))
            .is_some()
        {
            return Err(ConfigError::Invalid(KEY));
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_token_table() {
        let tokens = parse_static_tokens("tok-a=u1:admin, tok-b = u2:member").unwrap();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens["tok-a"], SelectedUser::new("u1", "admin"));
        assert_eq!(tokens["tok-b"], SelectedUser::new("u2", "member"));
    }

    #[test]
    fn empty_value_is_an_empty_table() {
        assert!(parse_static_tokens("").unwrap().is_empty());
        assert!(parse_static_tokens(" , ,").unwrap().is_empty());
    }

    #[test]
    fn malformed_entries_fail() {
        for raw in ["tok-a", "tok-a=u1", "=u1:admin", "tok-a=:admin", "tok-a=u1:"] {
            assert_eq!(
                parse_static_tokens(raw),
                Err(ConfigError::Invalid("AUTH_STATIC_TOKENS")),
                "{raw}"
            );
        }
    }

    #[test]
    fn duplicated_token_fails() {
        assert!(parse_static_tokens("t=u1:admin,t=u2:member").is_err());
    }

    #[test]
    fn app_env_parsing() {
        assert_eq!(AppEnv::parse("Production"), AppEnv::Production);
        assert_eq!(AppEnv::parse("prod"), AppEnv::Production);
        assert_eq!(AppEnv::parse("staging"), AppEnv::Development);
        assert!(!AppEnv::parse("").is_production());
    }
}
