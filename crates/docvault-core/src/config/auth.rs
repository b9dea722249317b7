//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Bearer-token verification settings.
///
/// Tokens are HS256 JWTs issued by the external auth provider and signed
/// with the shared project secret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT verification (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Expected `aud` claim, if the provider sets one.
    #[serde(default)]
    pub audience: Option<String>,
    /// Clock-skew leeway in seconds when checking `exp`.
    #[serde(default = "default_leeway")]
    pub leeway_seconds: u64,
    /// TTL for development tokens minted by the CLI, in minutes.
    #[serde(default = "default_dev_token_ttl")]
    pub dev_token_ttl_minutes: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            audience: None,
            leeway_seconds: default_leeway(),
            dev_token_ttl_minutes: default_dev_token_ttl(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_leeway() -> u64 {
    5
}

fn default_dev_token_ttl() -> u64 {
    60
}
