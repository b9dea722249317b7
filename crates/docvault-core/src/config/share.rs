//! Share link configuration.

use serde::{Deserialize, Serialize};

/// Hard ceiling for `max_ttl_minutes` and `sweep_retention_minutes` (one year).
pub const TTL_CEILING_MINUTES: i64 = 365 * 24 * 60;

/// What redemption does to a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedemptionPolicy {
    /// Every redemption inside the validity window succeeds; links are never mutated.
    #[default]
    MultiUse,
    /// The first successful redemption consumes the link.
    SingleUse,
}

/// Share link issuance and housekeeping settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Public origin used to build redemption URLs, without a trailing slash.
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
    /// TTL applied when the request does not specify one.
    #[serde(default = "default_ttl_minutes")]
    pub default_ttl_minutes: i64,
    /// Largest TTL accepted (30 days).
    #[serde(default = "default_max_ttl_minutes")]
    pub max_ttl_minutes: i64,
    /// Total token generation attempts before giving up with a conflict.
    #[serde(default = "default_max_token_attempts")]
    pub max_token_attempts: u32,
    /// Redemption policy.
    #[serde(default)]
    pub redemption_policy: RedemptionPolicy,
    /// Seconds between expired-link sweeps (0 disables the sweeper).
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_seconds: u64,
    /// How long an expired link is kept before the sweeper deletes it.
    #[serde(default = "default_sweep_retention")]
    pub sweep_retention_minutes: i64,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            public_base_url: default_public_base_url(),
            default_ttl_minutes: default_ttl_minutes(),
            max_ttl_minutes: default_max_ttl_minutes(),
            max_token_attempts: default_max_token_attempts(),
            redemption_policy: RedemptionPolicy::default(),
            sweep_interval_seconds: default_sweep_interval(),
            sweep_retention_minutes: default_sweep_retention(),
        }
    }
}

impl ShareConfig {
    /// Redemption URL for a token.
    pub fn redemption_url(&self, token: &str) -> String {
        format!(
            "{}/api/shares/{}",
            self.public_base_url.trim_end_matches('/'),
            token
        )
    }
}

fn default_public_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_ttl_minutes() -> i64 {
    60
}

fn default_max_ttl_minutes() -> i64 {
    30 * 24 * 60
}

fn default_max_token_attempts() -> u32 {
    3
}

fn default_sweep_interval() -> u64 {
    3600
}

fn default_sweep_retention() -> i64 {
    24 * 60
}
