//! Integration tests for share link create, redeem, and revoke.

mod helpers;

use axum::http::StatusCode;
use chrono::Duration;
use serde_json::json;

use docvault_core::config::RedemptionPolicy;
use docvault_core::types::{DocumentId, Role};
use docvault_database::store::DocumentStore;

#[tokio::test]
async fn test_owner_share_redeems_then_expires() {
    let app = helpers::TestApp::new();
    let u1 = app.create_test_user("u1@example.com", Role::User);
    let d1 = app.create_test_document(&u1, "passport.pdf");

    let response = app
        .request(
            "POST",
            "/api/shares",
            Some(json!({ "document_id": d1.to_string(), "ttl_minutes": 60 })),
            Some(&u1.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    let token = response.body["token"].as_str().expect("token").to_string();
    assert!(token.len() >= 43);
    assert_eq!(response.body["document_id"], d1.to_string());
    assert_eq!(
        response.body["url"],
        format!("https://vault.test/api/shares/{token}")
    );

    let redeemed = app
        .request("GET", &format!("/api/shares/{token}"), None, None)
        .await;
    assert_eq!(redeemed.status, StatusCode::FOUND);
    let location = redeemed.location().expect("Location header");
    assert!(location.ends_with("/passport.pdf"), "{location}");

    app.clock.advance(Duration::minutes(61));
    let expired = app
        .request("GET", &format!("/api/shares/{token}"), None, None)
        .await;
    assert_eq!(expired.status, StatusCode::GONE);
    assert!(expired.location().is_none());
}

#[tokio::test]
async fn test_non_owner_is_forbidden() {
    let app = helpers::TestApp::new();
    let u1 = app.create_test_user("u1@example.com", Role::User);
    let u2 = app.create_test_user("u2@example.com", Role::User);
    let d1 = app.create_test_document(&u1, "passport.pdf");

    let response = app
        .request(
            "POST",
            "/api/shares",
            Some(json!({ "document_id": d1.to_string() })),
            Some(&u2.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert!(app.links.is_empty());
}

#[tokio::test]
async fn test_admin_can_share_any_document() {
    let app = helpers::TestApp::new();
    let u1 = app.create_test_user("u1@example.com", Role::User);
    let admin = app.create_test_user("admin@example.com", Role::Admin);
    let d1 = app.create_test_document(&u1, "passport.pdf");

    let token = app.share(&admin, &d1, None).await;
    let redeemed = app
        .request("GET", &format!("/api/shares/{token}"), None, None)
        .await;
    assert_eq!(redeemed.status, StatusCode::FOUND);
}

#[tokio::test]
async fn test_anonymous_create_is_unauthorized() {
    let app = helpers::TestApp::new();
    let u1 = app.create_test_user("u1@example.com", Role::User);
    let d1 = app.create_test_document(&u1, "passport.pdf");

    let response = app
        .request(
            "POST",
            "/api/shares",
            Some(json!({ "document_id": d1.to_string() })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    // Authentication is checked before the body is looked at.
    let malformed = app
        .raw_request("POST", "/api/shares", "{not json".to_string(), None)
        .await;
    assert_eq!(malformed.status, StatusCode::UNAUTHORIZED);

    let bad_token = app
        .request(
            "POST",
            "/api/shares",
            Some(json!({ "document_id": d1.to_string() })),
            Some("not-a-jwt"),
        )
        .await;
    assert_eq!(bad_token.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_invalid_requests_are_rejected() {
    let app = helpers::TestApp::new();
    let u1 = app.create_test_user("u1@example.com", Role::User);
    let d1 = app.create_test_document(&u1, "passport.pdf");

    let cases = [
        json!({}),
        json!({ "document_id": "" }),
        json!({ "document_id": "not-a-uuid" }),
        json!({ "document_id": d1.to_string(), "ttl_minutes": 0 }),
        json!({ "document_id": d1.to_string(), "ttl_minutes": -5 }),
        json!({ "document_id": d1.to_string(), "ttl_minutes": 43_201 }),
    ];
    for body in cases {
        let response = app
            .request("POST", "/api/shares", Some(body.clone()), Some(&u1.token))
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "body {body}");
        assert_eq!(response.body["error"], "VALIDATION_ERROR");
    }

    let malformed = app
        .raw_request("POST", "/api/shares", "{not json".to_string(), Some(&u1.token))
        .await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
    assert!(app.links.is_empty());
}

#[tokio::test]
async fn test_legacy_ttl_field_name_is_accepted() {
    let app = helpers::TestApp::new();
    let u1 = app.create_test_user("u1@example.com", Role::User);
    let d1 = app.create_test_document(&u1, "passport.pdf");

    let response = app
        .request(
            "POST",
            "/api/shares",
            Some(json!({ "document_id": d1.to_string(), "expires_in_minutes": 5 })),
            Some(&u1.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let token = response.body["token"].as_str().expect("token").to_string();

    app.clock.advance(Duration::minutes(6));
    let expired = app
        .request("GET", &format!("/api/shares/{token}"), None, None)
        .await;
    assert_eq!(expired.status, StatusCode::GONE);
}

#[tokio::test]
async fn test_unknown_document_is_not_found() {
    let app = helpers::TestApp::new();
    let u1 = app.create_test_user("u1@example.com", Role::User);

    let response = app
        .request(
            "POST",
            "/api/shares",
            Some(json!({ "document_id": DocumentId::new().to_string() })),
            Some(&u1.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_token_is_not_found() {
    let app = helpers::TestApp::new();
    let response = app
        .request("GET", "/api/shares/nonexistent-token", None, None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_deleted_document_stops_redeeming() {
    let app = helpers::TestApp::new();
    let u1 = app.create_test_user("u1@example.com", Role::User);
    let d1 = app.create_test_document(&u1, "passport.pdf");
    let token = app.share(&u1, &d1, None).await;

    app.documents.delete(&d1).await.expect("delete");

    let response = app
        .request("GET", &format!("/api/shares/{token}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_revoked_link_is_gone() {
    let app = helpers::TestApp::new();
    let u1 = app.create_test_user("u1@example.com", Role::User);
    let u2 = app.create_test_user("u2@example.com", Role::User);
    let d1 = app.create_test_document(&u1, "passport.pdf");
    let token = app.share(&u1, &d1, None).await;
    let path = format!("/api/shares/{token}");

    let anonymous = app.request("DELETE", &path, None, None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    let stranger = app.request("DELETE", &path, None, Some(&u2.token)).await;
    assert_eq!(stranger.status, StatusCode::FORBIDDEN);

    let revoked = app.request("DELETE", &path, None, Some(&u1.token)).await;
    assert_eq!(revoked.status, StatusCode::OK, "{:?}", revoked.body);
    assert_eq!(revoked.body["success"], true);

    let redeemed = app.request("GET", &path, None, None).await;
    assert_eq!(redeemed.status, StatusCode::GONE);
}

#[tokio::test]
async fn test_single_use_policy_redeems_once() {
    let app = helpers::TestApp::with_policy(RedemptionPolicy::SingleUse);
    let u1 = app.create_test_user("u1@example.com", Role::User);
    let d1 = app.create_test_document(&u1, "passport.pdf");
    let token = app.share(&u1, &d1, None).await;
    let path = format!("/api/shares/{token}");

    assert_eq!(app.request("GET", &path, None, None).await.status, StatusCode::FOUND);
    assert_eq!(app.request("GET", &path, None, None).await.status, StatusCode::GONE);
}

#[tokio::test]
async fn test_concurrent_redemptions() {
    let app = helpers::TestApp::new();
    let u1 = app.create_test_user("u1@example.com", Role::User);
    let d1 = app.create_test_document(&u1, "passport.pdf");
    let token = app.share(&u1, &d1, None).await;
    let path = format!("/api/shares/{token}");

    let (a, b) = tokio::join!(
        app.request("GET", &path, None, None),
        app.request("GET", &path, None, None)
    );
    assert_eq!(a.status, StatusCode::FOUND);
    assert_eq!(b.status, StatusCode::FOUND);

    let single = helpers::TestApp::with_policy(RedemptionPolicy::SingleUse);
    let u1 = single.create_test_user("u1@example.com", Role::User);
    let d1 = single.create_test_document(&u1, "passport.pdf");
    let token = single.share(&u1, &d1, None).await;
    let path = format!("/api/shares/{token}");

    let (a, b) = tokio::join!(
        single.request("GET", &path, None, None),
        single.request("GET", &path, None, None)
    );
    let mut statuses = [a.status, b.status];
    statuses.sort();
    assert_eq!(statuses, [StatusCode::FOUND, StatusCode::GONE]);
}
