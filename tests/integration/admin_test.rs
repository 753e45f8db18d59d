//! Integration tests for platform administration and onboarding.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::{ROOT, TestApp};
use rentdesk_core::types::UserId;
use rentdesk_entity::identity::SessionRole;

#[tokio::test]
async fn test_admin_routes_require_super_admin() {
    let app = TestApp::new();
    let acme = app.create_tenant("acme").await;

    let response = app.request("GET", ROOT, "/api/admin/tenants", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request(
            "GET",
            ROOT,
            "/api/admin/tenants",
            None,
            Some(&app.owner_token(&acme)),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "GET",
            ROOT,
            "/api/admin/properties",
            None,
            Some(&app.token(UserId::new(), SessionRole::TeamAdmin)),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_super_admin_lists_tenants() {
    let app = TestApp::new();
    app.create_tenant("acme").await;
    app.create_tenant("globex").await;
    let admin = app.token(UserId::new(), SessionRole::SuperAdmin);

    let response = app
        .request("GET", ROOT, "/api/admin/tenants", None, Some(&admin))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["total_items"], 2);
}

#[tokio::test]
async fn test_super_admin_has_no_tenant_rights() {
    let app = TestApp::new();
    app.create_tenant("acme").await;
    let admin = app.token(UserId::new(), SessionRole::SuperAdmin);

    let response = app
        .request("GET", &TestApp::host("acme"), "/api/team", None, Some(&admin))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_disable_takes_effect_immediately() {
    let app = TestApp::new();
    let acme = app.create_tenant("acme").await;
    let host = TestApp::host("acme");
    let admin = app.token(UserId::new(), SessionRole::SuperAdmin);

    // Warm the slug cache.
    let response = app.request("GET", &host, "/api/tenant", None, None).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "PUT",
            ROOT,
            &format!("/api/admin/tenants/{}/disable", acme.id),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.data()["disabled_at"].is_string());

    let response = app.request("GET", &host, "/api/tenant", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_landlord_onboards_on_root_domain() {
    let app = TestApp::new();
    let landlord = UserId::new();
    let token = app.token(landlord, SessionRole::LandlordOwner);

    let response = app
        .request(
            "POST",
            ROOT,
            "/api/onboarding",
            Some(json!({ "slug": "Maple-Homes", "name": "Maple Homes" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.data()["slug"], "maple-homes");
    assert_eq!(response.data()["owner_id"], landlord.to_string());

    let response = app
        .request("GET", &TestApp::host("maple-homes"), "/api/team", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "POST",
            ROOT,
            "/api/onboarding",
            Some(json!({ "slug": "maple-homes", "name": "Copycat" })),
            Some(&app.token(UserId::new(), SessionRole::LandlordOwner)),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_onboarding_rejects_bad_requests() {
    let app = TestApp::new();
    app.create_tenant("acme").await;
    let landlord = app.token(UserId::new(), SessionRole::LandlordOwner);

    let response = app
        .request(
            "POST",
            ROOT,
            "/api/onboarding",
            Some(json!({ "slug": "www", "name": "Reserved" })),
            Some(&landlord),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "POST",
            ROOT,
            "/api/onboarding",
            Some(json!({ "slug": "renters", "name": "Renters" })),
            Some(&app.token(UserId::new(), SessionRole::Tenant)),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "POST",
            &TestApp::host("acme"),
            "/api/onboarding",
            Some(json!({ "slug": "nested", "name": "Nested" })),
            Some(&landlord),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
