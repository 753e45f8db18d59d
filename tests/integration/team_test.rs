//! Integration tests for team management under tenant isolation.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::TestApp;
use rentdesk_core::types::UserId;
use rentdesk_entity::identity::SessionRole;
use rentdesk_entity::membership::MemberRole;

#[tokio::test]
async fn test_non_member_sees_not_found() {
    let app = TestApp::new();
    app.create_tenant("acme").await;
    let stranger = app.token(UserId::new(), SessionRole::LandlordOwner);

    let response = app
        .request("GET", &TestApp::host("acme"), "/api/team", None, Some(&stranger))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_anonymous_is_unauthenticated() {
    let app = TestApp::new();
    app.create_tenant("acme").await;

    let response = app
        .request("GET", &TestApp::host("acme"), "/api/team", None, None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), Some("UNAUTHENTICATED"));
}

#[tokio::test]
async fn test_owner_manages_team() {
    let app = TestApp::new();
    let acme = app.create_tenant("acme").await;
    let host = TestApp::host("acme");
    let owner = app.owner_token(&acme);
    let newcomer = UserId::new();

    let response = app
        .request(
            "POST",
            &host,
            "/api/team",
            Some(json!({ "user_id": newcomer, "role": "member" })),
            Some(&owner),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.data()["role"], "member");

    let response = app
        .request(
            "PUT",
            &host,
            &format!("/api/team/{newcomer}"),
            Some(json!({ "role": "admin" })),
            Some(&owner),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["role"], "admin");

    let response = app.request("GET", &host, "/api/team", None, Some(&owner)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data().as_array().map(Vec::len), Some(1));

    let response = app
        .request(
            "DELETE",
            &host,
            &format!("/api/team/{newcomer}"),
            None,
            Some(&owner),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_duplicate_member_conflicts() {
    let app = TestApp::new();
    let acme = app.create_tenant("acme").await;
    let member = app.add_member(&acme, MemberRole::Member).await;

    let response = app
        .request(
            "POST",
            &TestApp::host("acme"),
            "/api/team",
            Some(json!({ "user_id": member, "role": "admin" })),
            Some(&app.owner_token(&acme)),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_owner_cannot_be_removed() {
    let app = TestApp::new();
    let acme = app.create_tenant("acme").await;
    let admin = app.add_member(&acme, MemberRole::Admin).await;
    let token = app.token(admin, SessionRole::TeamAdmin);

    let response = app
        .request(
            "DELETE",
            &TestApp::host("acme"),
            &format!("/api/team/{}", acme.owner_id),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_membership_does_not_cross_tenants() {
    let app = TestApp::new();
    app.create_tenant("acme").await;
    let globex = app.create_tenant("globex").await;
    let globex_admin = app.add_member(&globex, MemberRole::Admin).await;
    let token = app.token(globex_admin, SessionRole::TeamAdmin);

    let response = app
        .request("GET", &TestApp::host("globex"), "/api/team", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", &TestApp::host("acme"), "/api/team", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_plain_member_cannot_add() {
    let app = TestApp::new();
    let acme = app.create_tenant("acme").await;
    let member = app.add_member(&acme, MemberRole::Member).await;
    let token = app.token(member, SessionRole::TeamMember);

    let response = app
        .request(
            "POST",
            &TestApp::host("acme"),
            "/api/team",
            Some(json!({ "user_id": UserId::new(), "role": "admin" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let app = TestApp::new();
    let acme = app.create_tenant("acme").await;

    let response = app
        .request(
            "POST",
            &TestApp::host("acme"),
            "/api/team",
            Some(json!({ "user_id": "nope", "role": "overlord" })),
            Some(&app.owner_token(&acme)),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), Some("VALIDATION_ERROR"));
}
