//! Share link token generation.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngCore;

/// Number of random bytes behind every token (256 bits).
pub const TOKEN_BYTES: usize = 32;

/// Produces opaque, unguessable share tokens.
pub trait TokenGenerator: Send + Sync + std::fmt::Debug + 'static {
    /// Returns a fresh token.
    fn generate(&self) -> String;
}

/// Draws tokens from the thread-local CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTokenGenerator;

impl RandomTokenGenerator {
    /// Creates a new generator.
    pub fn new() -> Self {
        Self
    }
}

impl TokenGenerator for RandomTokenGenerator {
    fn generate(&self) -> String {
        let mut bytes = [0u8; TOKEN_BYTES];
        rand::thread_rng().fill_bytes(&mut bytes);
        URL_SAFE_NO_PAD.encode(bytes)
    }
}
