//! # Marquee Config
//!
//! Configuration types for the Marquee API, loaded from environment variables:
//!
//! - [`database`]: connection string and pool size
//! - [`jwt`]: token signing secret and optional expiry
//! - [`cors`]: allowed origins
//! - [`rate_limit`]: per-IP request quota
//! - [`server`]: listen address
//!
//! Required values (`DATABASE_URL`, `JWT_SECRET`) produce a [`ConfigError`]
//! when absent so startup fails instead of running with a degraded setup.
//! Optional values fall back to their defaults when unset or unparsable.
//!
//! Every config also has a `from_lookup` constructor taking a key lookup
//! function, which tests use instead of mutating the process environment.
//!
//! # Example
//!
//! ```ignore
//! use marquee_config::{JwtConfig, RateLimitConfig};
//!
//! let jwt_config = JwtConfig::from_env()?;
//! let rate_limit_config = RateLimitConfig::from_env();
//! ```

pub mod cors;
pub mod database;
pub mod jwt;
pub mod rate_limit;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use jwt::JwtConfig;
pub use rate_limit::RateLimitConfig;
pub use server::ServerConfig;

/// Failure to build a configuration from the environment.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
}

pub(crate) fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

pub(crate) fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing(key))
}

pub(crate) fn parsed_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
pub(crate) fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let owned: Vec<(String, String)> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| {
        owned
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }
}
