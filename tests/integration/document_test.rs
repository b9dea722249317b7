//! Integration tests for documents, categories, admin review, and health.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use docvault_core::traits::AccountDirectory;
use docvault_core::types::Role;

#[tokio::test]
async fn test_health_check() {
    let app = helpers::TestApp::new();
    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert!(response.body["version"].is_string());
}

#[tokio::test]
async fn test_documents_require_authentication() {
    let app = helpers::TestApp::new();
    let response = app.request("GET", "/api/documents", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_and_list_own_documents() {
    let app = helpers::TestApp::new();
    let u1 = app.create_test_user("u1@example.com", Role::User);
    let u2 = app.create_test_user("u2@example.com", Role::User);
    app.create_test_document(&u2, "other.pdf");

    let created = app
        .request(
            "POST",
            "/api/documents",
            Some(json!({
                "file_name": "passport.pdf",
                "file_url": "https://objects.docvault.local/u1/passport.pdf",
                "document_type": "passport",
                "tags": ["travel"],
                "expiry_date": "2030-01-31",
                "category_id": 2,
            })),
            Some(&u1.token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED, "{:?}", created.body);
    assert_eq!(created.body["data"]["status"], "Pending");
    assert_eq!(created.body["data"]["user_id"], u1.id.to_string());

    let listed = app.request("GET", "/api/documents", None, Some(&u1.token)).await;
    assert_eq!(listed.status, StatusCode::OK);
    let docs = listed.body["data"].as_array().expect("array");
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0]["file_name"], "passport.pdf");

    let tagged = app
        .request("GET", "/api/documents?tag=medical", None, Some(&u1.token))
        .await;
    assert_eq!(tagged.body["data"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_admin_lists_all_documents() {
    let app = helpers::TestApp::new();
    let u1 = app.create_test_user("u1@example.com", Role::User);
    let admin = app.create_test_user("admin@example.com", Role::Admin);
    app.create_test_document(&u1, "a.pdf");
    app.create_test_document(&u1, "b.pdf");

    let listed = app
        .request("GET", "/api/documents", None, Some(&admin.token))
        .await;
    assert_eq!(listed.body["data"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_create_document_validation() {
    let app = helpers::TestApp::new();
    let u1 = app.create_test_user("u1@example.com", Role::User);

    let response = app
        .request(
            "POST",
            "/api/documents",
            Some(json!({ "file_name": "", "file_url": "https://x" })),
            Some(&u1.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_document_owner_only() {
    let app = helpers::TestApp::new();
    let u1 = app.create_test_user("u1@example.com", Role::User);
    let u2 = app.create_test_user("u2@example.com", Role::User);
    let d1 = app.create_test_document(&u1, "passport.pdf");
    let path = format!("/api/documents/{d1}");

    let stranger = app.request("DELETE", &path, None, Some(&u2.token)).await;
    assert_eq!(stranger.status, StatusCode::FORBIDDEN);

    let owner = app.request("DELETE", &path, None, Some(&u1.token)).await;
    assert_eq!(owner.status, StatusCode::OK);

    let again = app.request("DELETE", &path, None, Some(&u1.token)).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_categories_are_listed() {
    let app = helpers::TestApp::new();
    let u1 = app.create_test_user("u1@example.com", Role::User);
    let response = app.request("GET", "/api/categories", None, Some(&u1.token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"].as_array().map(Vec::len), Some(4));
}

#[tokio::test]
async fn test_admin_review_document() {
    let app = helpers::TestApp::new();
    let u1 = app.create_test_user("u1@example.com", Role::User);
    let admin = app.create_test_user("admin@example.com", Role::Admin);
    let d1 = app.create_test_document(&u1, "passport.pdf");

    let body = json!({ "id": d1.to_string(), "status": "Approved" });

    let forbidden = app
        .request("POST", "/api/admin/approve", Some(body.clone()), Some(&u1.token))
        .await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);

    let approved = app
        .request("POST", "/api/admin/approve", Some(body), Some(&admin.token))
        .await;
    assert_eq!(approved.status, StatusCode::OK, "{:?}", approved.body);

    let listed = app.request("GET", "/api/documents", None, Some(&u1.token)).await;
    assert_eq!(listed.body["data"][0]["status"], "Approved");

    let pending = app
        .request(
            "POST",
            "/api/admin/approve",
            Some(json!({ "id": d1.to_string(), "status": "Pending" })),
            Some(&admin.token),
        )
        .await;
    assert_eq!(pending.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_admin_sets_user_role() {
    let app = helpers::TestApp::new();
    let u1 = app.create_test_user("u1@example.com", Role::User);
    let admin = app.create_test_user("admin@example.com", Role::Admin);
    let path = format!("/api/admin/users/{}/role", u1.id);

    let response = app
        .request("PUT", &path, Some(json!({ "role": "admin" })), Some(&admin.token))
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(
        app.directory.role_of(&u1.id).await.expect("lookup"),
        Some(Role::Admin)
    );

    let invalid = app
        .request("PUT", &path, Some(json!({ "role": "root" })), Some(&admin.token))
        .await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
}
