use crate::{ConfigError, env_lookup, required};

/// Token signing configuration.
///
/// - `JWT_SECRET` (required): HMAC secret shared by every process instance
/// - `JWT_EXPIRY_SECONDS` (optional): lifetime of issued tokens; when unset
///   tokens carry no `exp` claim and never expire
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub token_expiry: Option<i64>,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            token_expiry: None,
        }
    }

    pub fn with_expiry(mut self, seconds: i64) -> Self {
        self.token_expiry = Some(seconds);
        self
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = required(&lookup, "JWT_SECRET")?;
        let token_expiry = lookup("JWT_EXPIRY_SECONDS")
            .and_then(|v| v.trim().parse::<i64>().ok())
            .filter(|seconds| *seconds > 0);

        Ok(Self {
            secret,
            token_expiry,
        })
    }
}
