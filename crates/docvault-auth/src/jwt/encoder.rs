//! Token minting for development and tests.
//!
//! Production tokens come from the auth provider; this produces tokens the
//! decoder accepts so the API can be exercised locally.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use docvault_core::config::AuthConfig;
use docvault_core::error::AppError;
use docvault_core::types::UserId;

use super::claims::Claims;

/// Creates signed HS256 tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Audience stamped into every token.
    audience: Option<String>,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("audience", &self.audience)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            audience: config.audience.clone(),
        }
    }

    /// Mints a token for `user_id` valid for `ttl` from now.
    pub fn generate(
        &self,
        user_id: UserId,
        email: Option<&str>,
        ttl: Duration,
    ) -> Result<(String, DateTime<Utc>), AppError> {
        let now = Utc::now();
        let exp = now
            .checked_add_signed(ttl)
            .ok_or_else(|| AppError::validation("Token lifetime is out of range"))?;

        let claims = Claims {
            sub: user_id.into_uuid(),
            exp: exp.timestamp(),
            iat: Some(now.timestamp()),
            email: email.map(str::to_string),
            role: Some("authenticated".to_string()),
            aud: self.audience.clone(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))?;

        Ok((token, exp))
    }
}
