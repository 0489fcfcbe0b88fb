//! Transport tests against a mock HTTP server
//!
//! These tests verify the wire behavior of `ReqwestTransport`: JSON bodies,
//! the authorization header, status mapping and timeouts.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use showroom_application::{CredentialStore, HttpError, HttpMethod, Transport};
use showroom_domain::{ClientSettings, Credential};
use showroom_infrastructure::{MemoryCredentialStore, ReqwestTransport};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn transport(server: &MockServer, credentials: Arc<MemoryCredentialStore>) -> ReqwestTransport {
    ReqwestTransport::new(&ClientSettings::with_api_url(server.uri()), credentials)
        .expect("Failed to build transport")
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/brands/"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "brand_name": "Audi" })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "id": 3, "brand_name": "Audi" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    let client = transport(&server, Arc::new(MemoryCredentialStore::new()));

    let response = client
        .request(
            HttpMethod::Post,
            "api/brands/",
            Some(json!({ "brand_name": "Audi" })),
            true,
        )
        .await
        .unwrap();

    assert_eq!(response, json!({ "id": 3, "brand_name": "Audi" }));
}

#[tokio::test]
async fn test_authorized_request_carries_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/profile/"))
        .and(header("Authorization", "token abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1, "username": "u" })))
        .expect(1)
        .mount(&server)
        .await;
    let credentials = Arc::new(MemoryCredentialStore::new());
    credentials.set(Credential::new("abc123")).await.unwrap();
    let client = transport(&server, credentials);

    let response = client
        .request(HttpMethod::Get, "api/profile/", None, true)
        .await
        .unwrap();

    assert_eq!(response["username"], "u");
}

#[tokio::test]
async fn test_unauthorized_request_omits_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "t" })))
        .mount(&server)
        .await;
    let credentials = Arc::new(MemoryCredentialStore::new());
    credentials.set(Credential::new("abc123")).await.unwrap();
    let client = transport(&server, credentials);

    client
        .request(HttpMethod::Post, "api/auth/", Some(json!({})), false)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn test_missing_credential_sends_no_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/brands/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    let client = transport(&server, Arc::new(MemoryCredentialStore::new()));

    let response = client
        .request(HttpMethod::Get, "api/brands/", None, true)
        .await
        .unwrap();

    assert_eq!(response, json!([]));
    let requests = server.received_requests().await.unwrap();
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn test_non_success_status_is_typed() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/segments/4/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "detail": "nope" })))
        .mount(&server)
        .await;
    let client = transport(&server, Arc::new(MemoryCredentialStore::new()));

    let error = client
        .request(HttpMethod::Delete, "api/segments/4/", None, true)
        .await
        .unwrap_err();

    assert_eq!(error.status_code(), Some(400));
    assert_eq!(error.to_string(), "Request failed with status code 400");
}

#[tokio::test]
async fn test_empty_success_body_is_null() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/vehicles/1/"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    let client = transport(&server, Arc::new(MemoryCredentialStore::new()));

    let response = client
        .request(HttpMethod::Delete, "api/vehicles/1/", None, true)
        .await
        .unwrap();

    assert_eq!(response, Value::Null);
}

#[tokio::test]
async fn test_configured_timeout_is_enforced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/brands/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;
    let settings = ClientSettings {
        request_timeout_ms: Some(50),
        ..ClientSettings::with_api_url(server.uri())
    };
    let client =
        ReqwestTransport::new(&settings, Arc::new(MemoryCredentialStore::new())).unwrap();

    let error = client
        .request(HttpMethod::Get, "api/brands/", None, true)
        .await
        .unwrap_err();

    assert_eq!(error, HttpError::Timeout { timeout_ms: 50 });
}

#[tokio::test]
async fn test_unreachable_server_is_a_transport_error() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);
    let client = ReqwestTransport::new(
        &ClientSettings::with_api_url(uri),
        Arc::new(MemoryCredentialStore::new()),
    )
    .unwrap();

    let error = client
        .request(HttpMethod::Get, "api/brands/", None, true)
        .await
        .unwrap_err();

    assert!(matches!(error, HttpError::Transport(_)), "got {error:?}");
    assert_eq!(error.status_code(), None);
}
