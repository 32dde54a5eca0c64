use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hinge_shell::application::{LoginRequest, NavigationGuard, SessionStore};
use hinge_shell::domain::entities::{RouteTable, default_routes};
use hinge_shell::domain::ports::SessionStoragePort;
use hinge_shell::domain::services::NavigationPolicy;
use hinge_shell::infrastructure::{FileSessionStorage, HttpAuthClient};
use hinge_shell::presentation::Navigator;

fn navigator() -> Navigator {
    let table = RouteTable::new(default_routes()).unwrap();
    Navigator::new(
        NavigationGuard::new(table, NavigationPolicy::default()).unwrap(),
        "Home",
    )
}

fn client(server: &MockServer) -> Arc<HttpAuthClient> {
    Arc::new(
        HttpAuthClient::with_base_url(format!("{}/api/v1", server.uri()), Duration::from_secs(5))
            .unwrap(),
    )
}

#[tokio::test]
async fn test_session_survives_restart_until_logout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "session-token-0042",
            "user": {"id": 42, "email": "sam@example.com", "first_name": "Sam", "last_name": "Lee"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let session_path = dir.path().join("state").join("session.toml");

    let store = SessionStore::hydrated(
        client(&server),
        Arc::new(FileSessionStorage::new(&session_path)),
    );
    let mut nav = navigator();
    assert_eq!(nav.navigate("Profile", &store).route, "Login");

    let user = store
        .login(LoginRequest::new("sam@example.com", "secret"))
        .await
        .unwrap();
    assert_eq!(user.display_name(), "Sam Lee");
    assert!(session_path.exists());

    // A fresh process sees the persisted session without a network call.
    let restarted = SessionStore::hydrated(
        client(&server),
        Arc::new(FileSessionStorage::new(&session_path)),
    );
    assert!(restarted.is_authenticated());
    assert_eq!(
        restarted.token().map(hinge_shell::domain::SessionToken::into_inner),
        Some("session-token-0042".to_string())
    );

    let mut nav = navigator();
    assert_eq!(nav.navigate("Profile", &restarted).route, "Profile");
    let outcome = nav.navigate("Login", &restarted);
    assert_eq!(outcome.route, "Discover");
    assert_eq!(outcome.redirected_from.as_deref(), Some("Login"));

    restarted.logout();
    assert_eq!(nav.current().as_str(), "Discover");
    assert_eq!(nav.navigate("Matches", &restarted).route, "Login");

    let storage = FileSessionStorage::new(&session_path);
    assert_eq!(storage.get("user").unwrap(), None);
    assert_eq!(storage.get("user-token").unwrap(), None);

    let again = SessionStore::hydrated(client(&server), Arc::new(storage));
    assert!(!again.is_authenticated());
}

#[tokio::test]
async fn test_rejected_login_keeps_visitor_anonymous() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"status": "error", "error": "invalid password"})),
        )
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let session_path = dir.path().join("session.toml");
    let store = SessionStore::hydrated(
        client(&server),
        Arc::new(FileSessionStorage::new(&session_path)),
    );

    let err = store
        .login(LoginRequest::new("sam@example.com", "nope"))
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(store.error().as_deref(), Some("invalid password"));
    assert!(!store.is_loading());
    assert!(!store.is_authenticated());
    assert!(!session_path.exists());
}
