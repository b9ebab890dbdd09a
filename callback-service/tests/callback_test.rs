mod common;

use callback_service::models::SessionProfile;
use common::TestApp;
use serde_json::{json, Value};

// =============================================================================
// POST /callback
// =============================================================================

#[tokio::test]
async fn callback_returns_session_config_for_call() {
    let app = TestApp::spawn().await;

    let response = app
        .post_raw(
            "/callback",
            r#"{"uri":"sip:x","from":"+1555","call_id":"abc"}"#,
        )
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    let instructions = body["system_instructions"].as_str().unwrap();
    assert!(instructions.contains("[COLLECTION]"));
    assert_eq!(body["voice"], "Puck");
    assert_eq!(body["end_on_intent"], true);
    assert_eq!(body["intent_timeout_seconds"], 30);
    assert_eq!(body["intent_end_categories"], json!([2]));
    assert!(body.get("language").is_none());
}

#[tokio::test]
async fn callback_accepts_empty_object() {
    let app = TestApp::spawn().await;

    let response = app.post_raw("/callback", "{}").await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert!(!body["system_instructions"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn callback_accepts_body_without_content_type() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(format!("{}/callback", app.address))
        .body(r#"{"call_id":"no-header"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn callback_is_idempotent() {
    let app = TestApp::spawn().await;
    let body = r#"{"uri":"sip:x","from":"+1555","call_id":"abc"}"#;

    let first = app.post_raw("/callback", body).await.text().await.unwrap();
    for _ in 0..5 {
        let again = app.post_raw("/callback", body).await.text().await.unwrap();
        assert_eq!(again, first);
    }
}

#[tokio::test]
async fn callback_rejects_non_object_json() {
    let app = TestApp::spawn().await;

    for body in ["[]", "null", "\"sip:x\"", "42"] {
        let response = app.post_raw("/callback", body).await;
        assert_eq!(response.status().as_u16(), 400, "body {}", body);
        assert_eq!(response.text().await.unwrap(), r#"{"error":"invalid json"}"#);
    }
}

#[tokio::test]
async fn callback_reports_missing_instructions_as_server_error() {
    let app = TestApp::spawn_with_profile(SessionProfile {
        system_instructions: String::new(),
        ..SessionProfile::default()
    })
    .await;

    let response = app.post_raw("/callback", "{}").await;

    assert_eq!(response.status().as_u16(), 500);
    assert_eq!(
        response.text().await.unwrap(),
        r#"{"error":"missing system_instructions"}"#
    );
}

// =============================================================================
// Malformed bodies on every endpoint
// =============================================================================

#[tokio::test]
async fn malformed_json_is_rejected_everywhere() {
    let app = TestApp::spawn().await;

    for path in ["/callback", "/intent", "/callback/intent"] {
        for body in ["not-json", "", "{\"uri\":"] {
            let response = app.post_raw(path, body).await;
            assert_eq!(response.status().as_u16(), 400, "{} with {:?}", path, body);
            assert_eq!(
                response.text().await.unwrap(),
                r#"{"error":"invalid json"}"#
            );
        }
    }
}

// =============================================================================
// POST /intent and /callback/intent
// =============================================================================

#[tokio::test]
async fn intent_is_acknowledged() {
    let app = TestApp::spawn().await;

    let response = app
        .post_raw("/intent", r#"{"category":2,"reason":"promised tomorrow"}"#)
        .await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.unwrap(), r#"{"status":"ok"}"#);
}

#[tokio::test]
async fn intent_alias_matches_intent() {
    let app = TestApp::spawn().await;
    let body = r#"{"category":3,"reason":"refuses to pay currently","call_id":"abc"}"#;

    let direct = app.post_raw("/intent", body).await;
    let alias = app.post_raw("/callback/intent", body).await;

    assert_eq!(direct.status(), alias.status());
    assert_eq!(
        direct.bytes().await.unwrap(),
        alias.bytes().await.unwrap()
    );
}

#[tokio::test]
async fn intent_accepts_any_json_value() {
    let app = TestApp::spawn().await;

    for body in ["{}", "[]", "null", "\"category 2\"", "7"] {
        let response = app.post_raw("/intent", body).await;
        assert_eq!(response.status().as_u16(), 200, "body {}", body);
    }
}

// =============================================================================
// Health and errors
// =============================================================================

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "callback-service");
}

#[tokio::test]
async fn unknown_route_returns_json_error() {
    let app = TestApp::spawn().await;

    let response = app.post_raw("/does-not-exist", "{}").await;

    assert_eq!(response.status().as_u16(), 404);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("/does-not-exist"));
}
