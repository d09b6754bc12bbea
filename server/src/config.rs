//! Environment-driven server configuration.
//!
//! All knobs have defaults so `cargo leptos watch` works with no `.env`.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DEMO_EMAIL: &str = "user@example.com";
const DEFAULT_DEMO_PASSWORD: &str = "secret1";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),
}

/// Seed account created at startup for local development.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoAccount {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub demo_account: Option<DemoAccount>,
}

/// Environment variable names the configuration is read from.
pub(crate) struct EnvKeys {
    pub port: &'static str,
    pub demo_account: &'static str,
    pub demo_email: &'static str,
    pub demo_password: &'static str,
}

const ENV_KEYS: EnvKeys = EnvKeys {
    port: "PORT",
    demo_account: "DEMO_ACCOUNT",
    demo_email: "DEMO_EMAIL",
    demo_password: "DEMO_PASSWORD",
};

impl ServerConfig {
    /// Load from `PORT`, `DEMO_ACCOUNT`, `DEMO_EMAIL`, `DEMO_PASSWORD`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is set but not a `u16`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_keys(&ENV_KEYS)
    }

    pub(crate) fn from_keys(keys: &EnvKeys) -> Result<Self, ConfigError> {
        let port = match std::env::var(keys.port) {
            Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let demo_account = env_bool(keys.demo_account).unwrap_or(true).then(|| DemoAccount {
            email: env_or(keys.demo_email, DEFAULT_DEMO_EMAIL),
            password: env_or(keys.demo_password, DEFAULT_DEMO_PASSWORD),
        });

        Ok(Self { port, demo_account })
    }
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_owned())
}
