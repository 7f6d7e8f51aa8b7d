//! Bearer token sources for catalog requests.
//!
//! Tokens are looked up on every request and never cached here, so a token
//! rotated by the login flow is picked up by the next fetch or retry.

/// Supplies the bearer token for the catalog, if any.
pub trait CredentialProvider {
    fn get_token(&self) -> Option<String>;
}

/// Fixed token, or a fixed absence of one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticToken(pub Option<String>);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl CredentialProvider for StaticToken {
    fn get_token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Reads the token from an environment variable on each call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvToken {
    var: String,
}

impl EnvToken {
    pub const DEFAULT_VAR: &'static str = "JWT_TOKEN";

    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvToken {
    fn default() -> Self {
        Self::new(Self::DEFAULT_VAR)
    }
}

impl CredentialProvider for EnvToken {
    fn get_token(&self) -> Option<String> {
        std::env::var(&self.var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

/// Extracts `name` from a `document.cookie` style string (`a=1; b=2`).
///
/// Values are returned as stored; an empty value counts as absent.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
