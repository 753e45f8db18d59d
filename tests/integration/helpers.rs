//! Shared test helpers for integration tests.
//!
//! The router runs against the in-memory store, so these tests need no
//! database.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use rentdesk_api::{AppState, build_app};
use rentdesk_auth::SessionEncoder;
use rentdesk_core::config::{
    AppConfig, AuthConfig, DatabaseConfig, LoggingConfig, ServerConfig, TenancyConfig,
};
use rentdesk_core::types::UserId;
use rentdesk_database::store::{TeamStore, TenantStore};
use rentdesk_database::{MemoryStore, Stores};
use rentdesk_entity::identity::SessionRole;
use rentdesk_entity::membership::{MemberRole, NewMembership};
use rentdesk_entity::tenant::{CreateTenant, Tenant, TenantSlug};

/// Root domain every test host lives under.
pub const ROOT: &str = "rentals.app";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Direct access to the data behind the router
    pub stores: Stores,
    /// Application config
    pub config: AppConfig,
    encoder: SessionEncoder,
}

/// A response with its JSON body decoded.
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Parsed body, `Null` when empty or not JSON
    pub body: Value,
}

impl TestResponse {
    /// The `data` field of a success envelope.
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }

    /// The machine-readable code of an error body.
    pub fn error_code(&self) -> Option<&str> {
        self.body["error"].as_str()
    }
}

impl TestApp {
    /// Create a new test application with an empty store
    pub fn new() -> Self {
        let config = test_config();
        let stores = Stores::memory(Arc::new(MemoryStore::new()));
        let router = build_app(AppState::new(config.clone(), &stores));
        let encoder = SessionEncoder::new(&config.auth);

        Self {
            router,
            stores,
            config,
            encoder,
        }
    }

    /// The host name of a tenant's subdomain.
    pub fn host(slug: &str) -> String {
        format!("{slug}.{ROOT}")
    }

    /// Create an active tenant with a fresh owner.
    pub async fn create_tenant(&self, slug: &str) -> Tenant {
        self.stores
            .tenants
            .create_tenant(&CreateTenant {
                slug: TenantSlug::new(slug),
                name: format!("{slug} rentals"),
                owner_id: UserId::new(),
            })
            .await
            .expect("Failed to create tenant")
    }

    /// Add a fresh user to the tenant's team.
    pub async fn add_member(&self, tenant: &Tenant, role: MemberRole) -> UserId {
        let user = UserId::new();
        self.stores
            .team
            .add_member(&NewMembership {
                tenant_id: tenant.id,
                user_id: user,
                role,
                invited_by: tenant.owner_id,
            })
            .await
            .expect("Failed to add member");
        user
    }

    /// A valid session token.
    pub fn token(&self, user: UserId, role: SessionRole) -> String {
        self.encoder
            .issue(user, role)
            .expect("Failed to issue token")
            .token
    }

    /// The owner's session token.
    pub fn owner_token(&self, tenant: &Tenant) -> String {
        self.token(tenant.owner_id, SessionRole::LandlordOwner)
    }

    /// Send a request to `host` with an optional JSON body and bearer token.
    pub async fn request(
        &self,
        method: &str,
        host: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Host", host)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Send a prepared request.
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig::default(),
        database: DatabaseConfig {
            url: "postgres://localhost/rentdesk_test".to_string(),
            max_connections: 1,
            min_connections: 0,
            connect_timeout_seconds: 1,
            idle_timeout_seconds: 1,
            auto_migrate: false,
        },
        auth: AuthConfig {
            session_secret: "integration-test-secret-0123456789".to_string(),
            ..AuthConfig::default()
        },
        tenancy: TenancyConfig::for_root(ROOT),
        logging: LoggingConfig::default(),
    }
}
