//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use docvault_auth::JwtDecoder;
use docvault_core::config::AppConfig;
use docvault_core::traits::{AccountDirectory, Clock, DocumentCatalog, LinkStore};
use docvault_database::store::{DocumentStore, ProfileStore};
use docvault_service::{
    AdminService, DocumentService, RandomTokenGenerator, RedemptionService, ShareService,
};

/// Storage and time backends the services are built over.
///
/// Production wires the sqlx repositories and the system clock; tests wire
/// the in-memory stores and a manual clock.
#[derive(Clone)]
pub struct Backends {
    /// Role lookup
    pub directory: Arc<dyn AccountDirectory>,
    /// Document owner and location lookup
    pub catalog: Arc<dyn DocumentCatalog>,
    /// Document CRUD
    pub documents: Arc<dyn DocumentStore>,
    /// Profile CRUD
    pub profiles: Arc<dyn ProfileStore>,
    /// Share link persistence
    pub links: Arc<dyn LinkStore>,
    /// Time source
    pub clock: Arc<dyn Clock>,
}

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Bearer token verification
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Role lookup for authenticated callers
    pub directory: Arc<dyn AccountDirectory>,
    /// Share link creation and revocation
    pub share_service: Arc<ShareService>,
    /// Share link redemption
    pub redemption_service: Arc<RedemptionService>,
    /// Document metadata
    pub document_service: Arc<DocumentService>,
    /// Admin operations
    pub admin_service: Arc<AdminService>,
}

impl AppState {
    /// Builds every service over the given backends.
    pub fn new(config: AppConfig, backends: Backends) -> Self {
        let share_service = ShareService::new(
            Arc::clone(&backends.directory),
            Arc::clone(&backends.catalog),
            Arc::clone(&backends.links),
            Arc::new(RandomTokenGenerator::new()),
            Arc::clone(&backends.clock),
            config.share.clone(),
        );
        let redemption_service = RedemptionService::new(
            Arc::clone(&backends.links),
            Arc::clone(&backends.catalog),
            Arc::clone(&backends.clock),
            config.share.redemption_policy,
        );
        let document_service = DocumentService::new(Arc::clone(&backends.documents));
        let admin_service = AdminService::new(backends.documents, backends.profiles);

        Self {
            jwt_decoder: Arc::new(JwtDecoder::new(&config.auth)),
            config: Arc::new(config),
            directory: backends.directory,
            share_service: Arc::new(share_service),
            redemption_service: Arc::new(redemption_service),
            document_service: Arc::new(document_service),
            admin_service: Arc::new(admin_service),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("share_service", &self.share_service)
            .field("redemption_service", &self.redemption_service)
            .finish_non_exhaustive()
    }
}
