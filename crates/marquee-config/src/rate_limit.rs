//! Per-client rate limiting configuration.
//!
//! Each client IP gets a quota of `max_requests` that refills evenly over
//! `window_seconds`, using the Governor token bucket (GCRA):
//!
//! - the bucket holds at most `max_requests` tokens (the burst size)
//! - one token is restored every `window_seconds / max_requests`
//! - a request without a token is rejected with `429 Too Many Requests`
//!
//! # Environment Variables
//!
//! - `RATE_LIMIT_ENABLED`: `false`/`0` turns the limiter off (default: on)
//! - `RATE_LIMIT_MAX_REQUESTS`: quota per window (default: 100)
//! - `RATE_LIMIT_WINDOW_SECONDS`: window length (default: 900, 15 minutes)
//!
//! Clients are keyed by the peer address of the TCP connection. Forwarding
//! headers are ignored since any client can set them. The server must be
//! served with `into_make_service_with_connect_info::<SocketAddr>()`.

use std::time::Duration;

use tower_governor::governor::{GovernorConfig, GovernorConfigBuilder};
use tower_governor::key_extractor::PeerIpKeyExtractor;

use crate::{env_lookup, parsed_or};

pub type IpGovernorConfig = GovernorConfig<PeerIpKeyExtractor, ::governor::middleware::NoOpMiddleware>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub enabled: bool,
    pub max_requests: u32,
    pub window_seconds: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_requests: 100,
            window_seconds: 15 * 60,
        }
    }
}

impl RateLimitConfig {
    /// A config with limiting switched off.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            enabled: lookup("RATE_LIMIT_ENABLED")
                .map(|v| {
                    let v = v.trim().to_lowercase();
                    v != "false" && v != "0"
                })
                .unwrap_or(defaults.enabled),
            max_requests: parsed_or(&lookup, "RATE_LIMIT_MAX_REQUESTS", defaults.max_requests),
            window_seconds: parsed_or(&lookup, "RATE_LIMIT_WINDOW_SECONDS", defaults.window_seconds),
        }
    }

    /// Time after which one request's worth of quota is restored.
    pub fn replenish_interval(&self) -> Duration {
        let max_requests = u64::from(self.max_requests.max(1));
        let window_ms = self.window_seconds.saturating_mul(1000);
        Duration::from_millis((window_ms / max_requests).max(1))
    }

    /// Builds the Governor config keyed by peer IP.
    ///
    /// Returns `None` when limiting is disabled or the quota is zero.
    #[must_use]
    pub fn governor_config(&self) -> Option<IpGovernorConfig> {
        if !self.enabled || self.max_requests == 0 {
            return None;
        }

        let interval_ms = u64::try_from(self.replenish_interval().as_millis()).unwrap_or(u64::MAX);

        GovernorConfigBuilder::default()
            .per_millisecond(interval_ms)
            .burst_size(self.max_requests)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
    }
}
