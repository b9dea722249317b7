//! Bearer-token verification.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use docvault_core::config::AuthConfig;
use docvault_core::error::AppError;
use docvault_core::types::Principal;

use super::claims::Claims;

/// Validates HS256 bearer tokens against the shared secret.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = config.leeway_seconds;
        match config.audience {
            Some(ref aud) => validation.set_audience(&[aud.as_str()]),
            None => validation.validate_aud = false,
        }

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                debug!(error = %e, "Bearer token rejected");
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::unauthorized("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::unauthorized("Invalid token signature")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidAudience => {
                        AppError::unauthorized("Invalid token audience")
                    }
                    _ => AppError::unauthorized("Invalid token"),
                }
            })?;

        Ok(token_data.claims)
    }

    /// Verifies a token and returns the principal it identifies.
    pub fn authenticate(&self, token: &str) -> Result<Principal, AppError> {
        self.decode(token).map(Claims::into_principal)
    }
}
