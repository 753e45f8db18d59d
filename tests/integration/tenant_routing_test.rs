//! Integration tests for host-based tenant resolution.

mod helpers;

use axum::body::Body;
use http::{Request, StatusCode};

use helpers::{ROOT, TestApp};
use rentdesk_core::types::UserId;
use rentdesk_database::store::TenantStore;
use rentdesk_entity::identity::SessionRole;

#[tokio::test]
async fn test_subdomain_serves_its_tenant() {
    let app = TestApp::new();
    let acme = app.create_tenant("acme").await;

    let response = app
        .request("GET", &TestApp::host("acme"), "/api/tenant", None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["slug"], "acme");
    assert_eq!(response.data()["id"], acme.id.to_string());
}

#[tokio::test]
async fn test_host_is_normalized() {
    let app = TestApp::new();
    app.create_tenant("acme").await;

    for host in ["ACME.Rentals.App", "acme.rentals.app:8080", "acme.rentals.app."] {
        let response = app.request("GET", host, "/api/tenant", None, None).await;
        assert_eq!(response.status, StatusCode::OK, "host {host}");
        assert_eq!(response.data()["slug"], "acme");
    }
}

#[tokio::test]
async fn test_unknown_subdomain_is_not_found() {
    let app = TestApp::new();
    app.create_tenant("acme").await;
    let token = app.token(UserId::new(), SessionRole::SuperAdmin);

    for path in ["/api/tenant", "/api/me", "/api/team", "/api/properties"] {
        let response = app
            .request("GET", &TestApp::host("unknown"), path, None, Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "path {path}");
        assert_eq!(response.error_code(), Some("NOT_FOUND"));
    }
}

#[tokio::test]
async fn test_disabled_tenant_stops_resolving() {
    let app = TestApp::new();
    let acme = app.create_tenant("acme").await;
    let host = TestApp::host("acme");

    app.stores.tenants.disable_tenant(acme.id).await.unwrap();

    let response = app.request("GET", &host, "/api/tenant", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_root_domain_has_no_tenant() {
    let app = TestApp::new();
    let landlord = app.token(UserId::new(), SessionRole::LandlordOwner);

    let response = app.request("GET", ROOT, "/api/tenant", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request("GET", ROOT, "/api/properties", None, Some(&landlord))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("GET", ROOT, "/api/me", None, Some(&landlord)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.data()["tenant"].is_null());
    assert_eq!(response.data()["role"], "landlord-owner");
}

#[tokio::test]
async fn test_foreign_hosts_are_root() {
    let app = TestApp::new();
    app.create_tenant("acme").await;

    for host in ["acme.evil.com", "rentals.app.evil.com", "localhost"] {
        let response = app.request("GET", host, "/api/me", None, None).await;
        assert_eq!(response.status, StatusCode::OK, "host {host}");
        assert!(response.data()["tenant"].is_null(), "host {host}");
    }
}

#[tokio::test]
async fn test_nested_subdomain_names_no_tenant() {
    let app = TestApp::new();
    app.create_tenant("acme").await;

    let response = app
        .request("GET", "www.acme.rentals.app", "/api/tenant", None, None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_me_reports_relationship() {
    let app = TestApp::new();
    let acme = app.create_tenant("acme").await;
    let host = TestApp::host("acme");

    let response = app
        .request("GET", &host, "/api/me", None, Some(&app.owner_token(&acme)))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["tenant"], "acme");
    assert_eq!(response.data()["is_owner"], true);

    let stranger = app.token(UserId::new(), SessionRole::Tenant);
    let response = app.request("GET", &host, "/api/me", None, Some(&stranger)).await;
    assert_eq!(response.data()["is_owner"], false);
    assert!(response.data()["membership"].is_null());
}

#[tokio::test]
async fn test_invalid_token_is_anonymous() {
    let app = TestApp::new();
    app.create_tenant("acme").await;
    let host = TestApp::host("acme");

    let response = app
        .request("GET", &host, "/api/me", None, Some("not-a-token"))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["role"], "anonymous");
    assert!(response.data()["user_id"].is_null());

    let response = app
        .request("GET", &host, "/api/team", None, Some("not-a-token"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_session_cookie_is_accepted() {
    let app = TestApp::new();
    let acme = app.create_tenant("acme").await;
    let token = app.owner_token(&acme);

    let req = Request::builder()
        .method("GET")
        .uri("/api/team")
        .header("Host", TestApp::host("acme"))
        .header("Cookie", format!("theme=dark; session={token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.send(req).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_health_ignores_host() {
    let app = TestApp::new();

    let response = app
        .request("GET", &TestApp::host("unknown"), "/api/health", None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["status"], "ok");

    let response = app
        .request("GET", ROOT, "/api/health/ready", None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["database"], "in-memory");
}

#[tokio::test]
async fn test_unknown_route_is_json_not_found() {
    let app = TestApp::new();
    let response = app.request("GET", ROOT, "/api/nope", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_code(), Some("NOT_FOUND"));
}
