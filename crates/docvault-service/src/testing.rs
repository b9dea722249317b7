//! Shared fixtures for service tests.

use std::sync::{Arc, Mutex};

use docvault_core::config::{RedemptionPolicy, ShareConfig};
use docvault_core::traits::ManualClock;
use docvault_core::types::{Principal, Role};
use docvault_database::memory::{MemoryDirectory, MemoryDocumentStore, MemoryLinkStore};

use crate::share::{RandomTokenGenerator, RedemptionService, ShareService, TokenGenerator};

/// Hands out a fixed sequence of tokens, then repeats the last one.
#[derive(Debug)]
pub struct ScriptedTokens {
    tokens: Mutex<Vec<String>>,
}

impl ScriptedTokens {
    pub fn new<const N: usize>(tokens: [&str; N]) -> Self {
        let mut tokens: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        tokens.reverse();
        Self {
            tokens: Mutex::new(tokens),
        }
    }
}

impl TokenGenerator for ScriptedTokens {
    fn generate(&self) -> String {
        let mut tokens = self.tokens.lock().unwrap();
        if tokens.len() > 1 {
            tokens.pop().unwrap()
        } else {
            tokens.last().cloned().unwrap_or_default()
        }
    }
}

/// In-memory stores, a manual clock, and the two share services over them.
pub struct Fixture {
    pub clock: Arc<ManualClock>,
    pub directory: Arc<MemoryDirectory>,
    pub documents: Arc<MemoryDocumentStore>,
    pub links: Arc<MemoryLinkStore>,
    pub shares: ShareService,
    pub redemption: RedemptionService,
}

impl Fixture {
    pub fn new() -> Self {
        Self::build(Arc::new(RandomTokenGenerator), ShareConfig::default())
    }

    pub fn with_tokens(tokens: ScriptedTokens) -> Self {
        Self::build(Arc::new(tokens), ShareConfig::default())
    }

    pub fn with_policy(policy: RedemptionPolicy) -> Self {
        Self::with_config(ShareConfig {
            redemption_policy: policy,
            ..Default::default()
        })
    }

    /// Uses `config` as given, without running `AppConfig::validate`.
    pub fn with_config(config: ShareConfig) -> Self {
        Self::build(Arc::new(RandomTokenGenerator), config)
    }

    fn build(tokens: Arc<dyn TokenGenerator>, config: ShareConfig) -> Self {
        let clock = Arc::new(ManualClock::starting_now());
        let directory = Arc::new(MemoryDirectory::new());
        let documents = Arc::new(MemoryDocumentStore::new());
        let links = Arc::new(MemoryLinkStore::new());
        let policy = config.redemption_policy;

        let shares = ShareService::new(
            directory.clone(),
            documents.clone(),
            links.clone(),
            tokens,
            clock.clone(),
            config,
        );
        let redemption =
            RedemptionService::new(links.clone(), documents.clone(), clock.clone(), policy);

        Self {
            clock,
            directory,
            documents,
            links,
            shares,
            redemption,
        }
    }

    /// Registers an account and returns its principal.
    pub fn user(&self, email: &str, role: Role) -> Principal {
        Principal::new(self.directory.add(email, role)).with_email(email)
    }
}
