//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use chrono::Duration;
use serde_json::Value;
use tower::ServiceExt;

use docvault_api::{AppState, Backends};
use docvault_auth::JwtEncoder;
use docvault_core::config::{AppConfig, RedemptionPolicy};
use docvault_core::traits::ManualClock;
use docvault_core::types::{DocumentId, Role, UserId};
use docvault_database::memory::{MemoryDirectory, MemoryDocumentStore, MemoryLinkStore};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Frozen clock shared by every service
    pub clock: Arc<ManualClock>,
    /// Account roles
    pub directory: Arc<MemoryDirectory>,
    /// Document records
    pub documents: Arc<MemoryDocumentStore>,
    /// Share link records
    pub links: Arc<MemoryLinkStore>,
    /// Application config
    pub config: AppConfig,
    encoder: JwtEncoder,
}

/// A registered account and its bearer token.
pub struct TestUser {
    pub id: UserId,
    pub token: String,
}

/// Captured response
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestApp {
    /// Create a new test application over in-memory stores
    pub fn new() -> Self {
        Self::with_policy(RedemptionPolicy::MultiUse)
    }

    /// Create a test application with the given redemption policy
    pub fn with_policy(policy: RedemptionPolicy) -> Self {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = "integration-test-secret".to_string();
        config.share.public_base_url = "https://vault.test".to_string();
        config.share.redemption_policy = policy;

        let clock = Arc::new(ManualClock::starting_now());
        let directory = Arc::new(MemoryDirectory::new());
        let documents = Arc::new(MemoryDocumentStore::new());
        let links = Arc::new(MemoryLinkStore::new());

        let state = AppState::new(
            config.clone(),
            Backends {
                directory: directory.clone(),
                catalog: documents.clone(),
                documents: documents.clone(),
                profiles: directory.clone(),
                links: links.clone(),
                clock: clock.clone(),
            },
        );

        Self {
            router: docvault_api::build_app(state),
            clock,
            directory,
            documents,
            links,
            encoder: JwtEncoder::new(&config.auth),
            config,
        }
    }

    /// Register an account and mint a bearer token for it
    pub fn create_test_user(&self, email: &str, role: Role) -> TestUser {
        let id = self.directory.add(email, role);
        let (token, _) = self
            .encoder
            .generate(id, Some(email), Duration::hours(1))
            .expect("Failed to mint token");
        TestUser { id, token }
    }

    /// Store a document owned by `owner`
    pub fn create_test_document(&self, owner: &TestUser, file_name: &str) -> DocumentId {
        self.documents.add(owner.id, file_name)
    }

    /// Create a share link and return its token
    pub async fn share(&self, user: &TestUser, document_id: &DocumentId, ttl: Option<i64>) -> String {
        let mut body = serde_json::json!({ "document_id": document_id.to_string() });
        if let Some(ttl) = ttl {
            body["ttl_minutes"] = ttl.into();
        }
        let response = self
            .request("POST", "/api/shares", Some(body), Some(&user.token))
            .await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Share failed: {:?}",
            response.body
        );
        response.body["token"]
            .as_str()
            .expect("No token in share response")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.raw_request(method, path, body_str, token).await
    }

    /// Make an HTTP request with a literal body
    pub async fn raw_request(
        &self,
        method: &str,
        path: &str,
        body: String,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req.body(Body::from(body)).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

impl TestResponse {
    /// The `Location` header, if present
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get("location")
            .and_then(|v| v.to_str().ok())
    }
}
