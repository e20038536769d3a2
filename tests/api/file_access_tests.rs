//! File access endpoint tests
//!
//! Community 10 has channels 100 (public) and 101 (private).
//! User 1 belongs to the community and to channel 101, user 2 belongs to the
//! community only, user 3 is a stranger. DM group 500 holds users 1 and 3.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use test_case::test_case;

use chat_file_access::domain::ResourceType;
use chat_file_access::infrastructure::metrics::FILE_ACCESS_DECISIONS_TOTAL;

use crate::common::{json_body, text_body, token_for, InMemoryStore, TestApp};

fn fixture() -> InMemoryStore {
    InMemoryStore::default()
        .with_channel(100, 10, false)
        .with_channel(101, 10, true)
        .with_community_member(10, 1)
        .with_community_member(10, 2)
        .with_channel_member(101, 1)
        .with_direct_message_member(500, 1)
        .with_direct_message_member(500, 3)
        .with_channel_message(1000, 100)
        .with_channel_message(1001, 101)
        .with_direct_message(1002, 500)
        .with_replay_clip(2000, 101)
        // files
        .with_file(1, None, Some(ResourceType::UserAvatar))
        .with_file(2, Some(10), Some(ResourceType::CommunityBanner))
        .with_file(3, Some(1000), Some(ResourceType::MessageAttachment))
        .with_file(4, Some(1001), Some(ResourceType::MessageAttachment))
        .with_file(5, Some(1002), Some(ResourceType::MessageAttachment))
        .with_file(6, Some(2000), Some(ResourceType::ReplayClip))
        .with_file(7, Some(9999), Some(ResourceType::MessageAttachment))
        .with_file(8, Some(10), None)
}

fn app() -> TestApp {
    TestApp::new(fixture())
}

#[tokio::test]
async fn test_public_file_served_to_anonymous_caller() {
    let response = app().get("/api/v1/files/1").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["file_id"], "1");
    assert_eq!(body["allowed"], true);
    assert_eq!(body["access"], "public");
}

#[tokio::test]
async fn test_scoped_file_requires_authentication() {
    let response = app().get("/api/v1/files/2").await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = json_body(response).await;
    assert_eq!(body["code"], 10004);
    assert_eq!(body["message"], "authentication required");
}

#[tokio::test]
async fn test_invalid_token_is_treated_as_anonymous() {
    let response = app().get_auth("/api/v1/files/2", "not-a-jwt").await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = json_body(response).await;
    assert_eq!(body["message"], "authentication required");

    let response = app().get_auth("/api/v1/files/1", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[test_case(1, 2, StatusCode::OK ; "community member sees banner")]
#[test_case(3, 2, StatusCode::FORBIDDEN ; "stranger denied banner")]
#[test_case(2, 3, StatusCode::OK ; "community member sees public channel attachment")]
#[test_case(3, 3, StatusCode::FORBIDDEN ; "stranger denied public channel attachment")]
#[test_case(1, 4, StatusCode::OK ; "channel member sees private attachment")]
#[test_case(2, 4, StatusCode::FORBIDDEN ; "community member denied private attachment")]
#[test_case(3, 5, StatusCode::OK ; "participant sees direct message attachment")]
#[test_case(2, 5, StatusCode::FORBIDDEN ; "outsider denied direct message attachment")]
#[test_case(1, 6, StatusCode::OK ; "channel member sees replay clip")]
#[test_case(2, 6, StatusCode::FORBIDDEN ; "community member denied private replay clip")]
#[tokio::test]
async fn test_scoped_decisions(user_id: i64, file_id: i64, expected: StatusCode) {
    let response = app()
        .get_auth(&format!("/api/v1/files/{}", file_id), &token_for(user_id))
        .await;

    assert_eq!(response.status(), expected);
    if expected == StatusCode::OK {
        let body = json_body(response).await;
        assert_eq!(body["access"], "scoped");
    }
}

#[tokio::test]
async fn test_denials_carry_reason() {
    let response = app()
        .get_auth("/api/v1/files/2", &token_for(3))
        .await;
    let body = json_body(response).await;
    assert_eq!(
        body["message"],
        "you must be a member of this community to access this file"
    );

    let response = app()
        .get_auth("/api/v1/files/4", &token_for(2))
        .await;
    let body = json_body(response).await;
    assert_eq!(body["message"], "you must be a member of this private channel");
}

#[test_case("/api/v1/files/424242", "file not found" ; "unknown file")]
#[test_case("/api/v1/files/abc", "file not found" ; "malformed id")]
#[test_case("/api/v1/files/7", "message not found" ; "dangling message")]
#[test_case("/api/v1/files/%FF", "file not found" ; "non utf8 id")]
#[test_case("/api/v1/files/", "file id not provided" ; "empty id segment")]
#[tokio::test]
async fn test_not_found(uri: &str, message: &str) {
    let response = app().get_auth(uri, &token_for(1)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["code"], 10001);
    assert_eq!(body["message"], message);
}

#[tokio::test]
async fn test_unknown_resource_type_is_denied() {
    let response = app()
        .get_auth("/api/v1/files/8", &token_for(1))
        .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = json_body(response).await;
    assert_eq!(body["message"], "access denied");
}

#[tokio::test]
async fn test_lookup_failure_reported_as_not_found() {
    let store = InMemoryStore {
        fail_file_lookups: true,
        ..fixture()
    };
    let response = TestApp::new(store)
        .get_auth("/api/v1/files/1", &token_for(1))
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["message"], "file not found");
}

#[tokio::test]
async fn test_head_request_is_guarded() {
    let app = app();

    let response = app.send("HEAD", "/api/v1/files/1", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.send("HEAD", "/api/v1/files/2", None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_undecodable_id_is_counted() {
    let counter = FILE_ACCESS_DECISIONS_TOTAL.with_label_values(&["not_found"]);
    let before = counter.get();

    app().get("/api/v1/files/%FF").await;

    assert!(counter.get() > before);
}

#[tokio::test]
async fn test_decisions_are_counted() {
    let app = app();
    app.get("/api/v1/files/1").await;

    let metrics = text_body(app.get("/metrics").await).await;
    assert!(metrics.contains("chat_file_access_file_access_decisions_total"));
    assert!(metrics.contains("outcome=\"public\""));
}
