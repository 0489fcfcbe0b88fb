//! End-to-end session tests
//!
//! These tests drive a `Session` with parsed commands against a mock
//! catalog service, using the real transport and a file-backed credential
//! store.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde_json::json;
use showroom::{Command, Session};
use showroom_application::{AuthStore, CatalogStore, CredentialStore};
use showroom_domain::ClientSettings;
use showroom_infrastructure::{FileCredentialStore, ReqwestTransport};
use showroom_ui::Route;
use tempfile::{TempDir, tempdir};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct Fixture {
    server: MockServer,
    dir: TempDir,
}

impl Fixture {
    async fn start() -> Self {
        let server = MockServer::start().await;
        mount_catalog(&server).await;
        Self {
            server,
            dir: tempdir().expect("Failed to create temp directory"),
        }
    }

    fn credentials(&self) -> Arc<FileCredentialStore> {
        Arc::new(FileCredentialStore::new(
            self.dir.path().join("credentials.json"),
            "token",
        ))
    }

    fn session(&self) -> Session<ReqwestTransport> {
        let credentials = self.credentials();
        let transport = Arc::new(
            ReqwestTransport::new(
                &ClientSettings::with_api_url(self.server.uri()),
                credentials.clone(),
            )
            .expect("Failed to build transport"),
        );
        let auth = Arc::new(AuthStore::new(transport.clone(), credentials));
        let catalog = Arc::new(CatalogStore::new(transport));
        Session::new(auth, &catalog)
    }
}

async fn mount_catalog(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/auth/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "abc123" })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/profile/"))
        .and(header("Authorization", "token abc123"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "id": 1, "username": "test user" })),
        )
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/segments/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "segment_name": "SUV" },
            { "id": 2, "segment_name": "EV" },
        ])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/brands/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "brand_name": "Audi" },
            { "id": 2, "brand_name": "Tesla" },
        ])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/vehicles/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "vehicle_name": "SQ7",
                "release_year": 2019,
                "price": "300.12",
                "segment": 1,
                "brand": 1,
                "segment_name": "SUV",
                "brand_name": "Audi",
            },
            {
                "id": 2,
                "vehicle_name": "MODEL S",
                "release_year": 2020,
                "price": "400.12",
                "segment": 2,
                "brand": 2,
                "segment_name": "EV",
                "brand_name": "Tesla",
            },
        ])))
        .mount(server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/brands/2/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;
}

async fn run(session: &mut Session<ReqwestTransport>, line: &str) -> String {
    let command: Command = line.parse().expect("valid command");
    session.execute(command).await
}

#[tokio::test]
async fn test_catalog_commands_require_login() {
    let fixture = Fixture::start().await;
    let mut session = fixture.session();

    assert_eq!(run(&mut session, "list brands").await, "Log in first.");
    assert_eq!(session.route(), Route::Auth);
    assert!(fixture.server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_login_mounts_main_page() {
    let fixture = Fixture::start().await;
    let mut session = fixture.session();

    let output = run(&mut session, "login user dummy").await;

    assert_eq!(output, "Successfully logged in!\nWelcome, test user.");
    assert_eq!(session.route(), Route::Vehicle);
    assert_eq!(run(&mut session, "whoami").await, "test user");
    assert_eq!(
        run(&mut session, "list vehicles").await,
        "1\tSQ7\t2019\t300.12\tSUV\tAudi\n2\tMODEL S\t2020\t400.12\tEV\tTesla"
    );
}

#[tokio::test]
async fn test_brand_delete_cascades_in_listing() {
    let fixture = Fixture::start().await;
    let mut session = fixture.session();
    run(&mut session, "login user dummy").await;

    assert_eq!(run(&mut session, "delete brand 2").await, "Deleted in brand!");

    assert_eq!(run(&mut session, "list brands").await, "1\tAudi");
    assert_eq!(
        run(&mut session, "list vehicles").await,
        "1\tSQ7\t2019\t300.12\tSUV\tAudi"
    );
}

#[tokio::test]
async fn test_failed_create_reports_create_error() {
    let fixture = Fixture::start().await;
    Mock::given(method("POST"))
        .and(path("/api/segments/"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&fixture.server)
        .await;
    let mut session = fixture.session();
    run(&mut session, "login user dummy").await;

    assert_eq!(run(&mut session, "add segment Coupe").await, "Create error!");
    assert_eq!(run(&mut session, "list segments").await, "1\tSUV\n2\tEV");
}

#[tokio::test]
async fn test_add_vehicle_with_spaced_name() {
    let fixture = Fixture::start().await;
    Mock::given(method("POST"))
        .and(path("/api/vehicles/"))
        .and(body_json(json!({
            "vehicle_name": "MODEL X",
            "release_year": 2021,
            "price": "500.50",
            "segment": 2,
            "brand": 2,
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 3,
            "vehicle_name": "MODEL X",
            "release_year": 2021,
            "price": "500.50",
            "segment": 2,
            "brand": 2,
            "segment_name": "EV",
            "brand_name": "Tesla",
        })))
        .expect(1)
        .mount(&fixture.server)
        .await;
    let mut session = fixture.session();
    run(&mut session, "login user dummy").await;

    assert_eq!(
        run(&mut session, "add vehicle MODEL X 2021 500.50 2 2").await,
        "Created in vehicle!"
    );
    assert_eq!(
        run(&mut session, "list vehicles").await,
        "1\tSQ7\t2019\t300.12\tSUV\tAudi\n\
         2\tMODEL S\t2020\t400.12\tEV\tTesla\n\
         3\tMODEL X\t2021\t500.50\tEV\tTesla"
    );
}

#[tokio::test]
async fn test_welcome_lists_failed_sections() {
    let fixture = Fixture::start().await;
    Mock::given(method("GET"))
        .and(path("/api/brands/"))
        .respond_with(ResponseTemplate::new(400))
        .with_priority(1)
        .mount(&fixture.server)
        .await;
    let mut session = fixture.session();

    let output = run(&mut session, "login user dummy").await;

    assert_eq!(
        output,
        "Successfully logged in!\nWelcome, test user.\nbrand: Get error!\n1 section(s) failed to load."
    );
    assert_eq!(run(&mut session, "list brands").await, "No brand entries.");
}

#[tokio::test]
async fn test_edit_unknown_id_sends_nothing() {
    let fixture = Fixture::start().await;
    let mut session = fixture.session();
    run(&mut session, "login user dummy").await;
    let before = fixture.server.received_requests().await.unwrap().len();

    assert_eq!(
        run(&mut session, "edit brand 9 Lancia").await,
        "No brand with id 9."
    );
    assert_eq!(
        fixture.server.received_requests().await.unwrap().len(),
        before
    );
}

#[tokio::test]
async fn test_credential_survives_restart_until_logout() {
    let fixture = Fixture::start().await;

    let mut first = fixture.session();
    run(&mut first, "login user dummy").await;
    drop(first);

    let stored = fixture.credentials().get().await.unwrap();
    assert_eq!(stored.map(|c| c.as_str().to_string()), Some("abc123".to_string()));

    let mut second = fixture.session();
    assert_eq!(second.resume().await, "Welcome, test user.");
    assert_eq!(run(&mut second, "logout").await, "Logged out.");
    assert_eq!(second.route(), Route::Auth);

    assert!(fixture.credentials().get().await.unwrap().is_none());
}
