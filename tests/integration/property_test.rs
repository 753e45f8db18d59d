//! Integration tests for properties and rental applications.

mod helpers;

use http::StatusCode;
use serde_json::{Value, json};

use helpers::TestApp;
use rentdesk_core::types::UserId;
use rentdesk_entity::identity::SessionRole;
use rentdesk_entity::membership::MemberRole;
use rentdesk_entity::tenant::Tenant;

async fn create_property(app: &TestApp, tenant: &Tenant, name: &str) -> Value {
    let response = app
        .request(
            "POST",
            &TestApp::host(tenant.slug.as_str()),
            "/api/properties",
            Some(json!({ "name": name, "address": "1 Main St" })),
            Some(&app.owner_token(tenant)),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    response.data().clone()
}

#[tokio::test]
async fn test_members_list_properties() {
    let app = TestApp::new();
    let acme = app.create_tenant("acme").await;
    create_property(&app, &acme, "Maple Court").await;
    create_property(&app, &acme, "Oak Terrace").await;

    let member = app.add_member(&acme, MemberRole::Member).await;
    let response = app
        .request(
            "GET",
            &TestApp::host("acme"),
            "/api/properties?page=1&per_page=1",
            None,
            Some(&app.token(member, SessionRole::TeamMember)),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["total_items"], 2);
    assert_eq!(response.data()["items"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_page_far_past_the_end_is_empty() {
    let app = TestApp::new();
    let acme = app.create_tenant("acme").await;
    create_property(&app, &acme, "Maple Court").await;

    let response = app
        .request(
            "GET",
            &TestApp::host("acme"),
            &format!("/api/properties?page={}&per_page=100", u64::MAX),
            None,
            Some(&app.owner_token(&acme)),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["total_items"], 1);
    assert_eq!(response.data()["items"].as_array().map(Vec::len), Some(0));
    assert_eq!(response.data()["has_next"], false);
}

#[tokio::test]
async fn test_cross_tenant_property_is_not_found() {
    let app = TestApp::new();
    let acme = app.create_tenant("acme").await;
    let globex = app.create_tenant("globex").await;
    let property = create_property(&app, &acme, "Maple Court").await;
    let path = format!("/api/properties/{}", property["id"].as_str().unwrap());

    let response = app
        .request("GET", &TestApp::host("acme"), &path, None, Some(&app.owner_token(&acme)))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // globex's owner on its own subdomain, asking for acme's id
    let response = app
        .request(
            "GET",
            &TestApp::host("globex"),
            &path,
            None,
            Some(&app.owner_token(&globex)),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    // acme's owner on the wrong subdomain
    let response = app
        .request("GET", &TestApp::host("globex"), &path, None, Some(&app.owner_token(&acme)))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_only_admins_create_and_delete() {
    let app = TestApp::new();
    let acme = app.create_tenant("acme").await;
    let host = TestApp::host("acme");
    let property = create_property(&app, &acme, "Maple Court").await;
    let path = format!("/api/properties/{}", property["id"].as_str().unwrap());

    let member = app.add_member(&acme, MemberRole::Member).await;
    let member_token = app.token(member, SessionRole::TeamMember);
    let response = app
        .request("DELETE", &host, &path, None, Some(&member_token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let admin = app.add_member(&acme, MemberRole::Admin).await;
    let admin_token = app.token(admin, SessionRole::TeamAdmin);
    let response = app
        .request("DELETE", &host, &path, None, Some(&admin_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", &host, &path, None, Some(&admin_token)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_property_is_rejected() {
    let app = TestApp::new();
    let acme = app.create_tenant("acme").await;

    let response = app
        .request(
            "POST",
            &TestApp::host("acme"),
            "/api/properties",
            Some(json!({ "name": "", "address": "1 Main St" })),
            Some(&app.owner_token(&acme)),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["details"]["name"].is_array());
}

#[tokio::test]
async fn test_malformed_id_is_not_found() {
    let app = TestApp::new();
    let acme = app.create_tenant("acme").await;

    let response = app
        .request(
            "GET",
            &TestApp::host("acme"),
            "/api/properties/not-a-uuid",
            None,
            Some(&app.owner_token(&acme)),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_application_lifecycle() {
    let app = TestApp::new();
    let acme = app.create_tenant("acme").await;
    let host = TestApp::host("acme");
    let property = create_property(&app, &acme, "Maple Court").await;
    let property_id = property["id"].as_str().unwrap();

    let renter = app.token(UserId::new(), SessionRole::Tenant);
    let response = app
        .request(
            "POST",
            &host,
            &format!("/api/properties/{property_id}/applications"),
            Some(json!({ "message": "Two cats, no dogs." })),
            Some(&renter),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.data()["status"], "submitted");
    let application_path = format!(
        "/api/applications/{}",
        response.data()["id"].as_str().unwrap()
    );

    let response = app
        .request("GET", &host, "/api/applications/mine", None, Some(&renter))
        .await;
    assert_eq!(response.data().as_array().map(Vec::len), Some(1));

    let response = app
        .request("GET", &host, &application_path, None, Some(&renter))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let other_renter = app.token(UserId::new(), SessionRole::Tenant);
    let response = app
        .request("GET", &host, &application_path, None, Some(&other_renter))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let owner = app.owner_token(&acme);
    let decision_path = format!("{application_path}/decision");
    let response = app
        .request(
            "PUT",
            &host,
            &decision_path,
            Some(json!({ "status": "approved" })),
            Some(&owner),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["status"], "approved");

    let response = app
        .request(
            "PUT",
            &host,
            &decision_path,
            Some(json!({ "status": "rejected" })),
            Some(&owner),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_only_renters_apply_within_the_tenant() {
    let app = TestApp::new();
    let acme = app.create_tenant("acme").await;
    app.create_tenant("globex").await;
    let property = create_property(&app, &acme, "Maple Court").await;
    let path = format!(
        "/api/properties/{}/applications",
        property["id"].as_str().unwrap()
    );

    let landlord = app.token(UserId::new(), SessionRole::LandlordOwner);
    let response = app
        .request("POST", &TestApp::host("acme"), &path, Some(json!({})), Some(&landlord))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let renter = app.token(UserId::new(), SessionRole::Tenant);
    let response = app
        .request("POST", &TestApp::host("globex"), &path, Some(json!({})), Some(&renter))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request("POST", &TestApp::host("acme"), &path, Some(json!({})), None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
