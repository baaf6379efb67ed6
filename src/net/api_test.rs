use super::*;
use crate::config::ClientConfig;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api(server: &MockServer) -> SessionApi {
    SessionApi::new(&ClientConfig::with_base_url(&server.uri())).unwrap()
}

// =============================================================================
// fetch_me
// =============================================================================

#[tokio::test]
async fn fetch_me_extracts_user_from_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "user": {"id": 1, "name": "A"}
        })))
        .mount(&server)
        .await;

    let user = api(&server).fetch_me().await.unwrap();
    assert_eq!(user.0, serde_json::json!({"id": 1, "name": "A"}));
}

#[tokio::test]
async fn fetch_me_maps_401_to_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(serde_json::json!({"error": "Not logged in"})),
        )
        .mount(&server)
        .await;

    let error = api(&server).fetch_me().await.unwrap_err();
    assert!(matches!(error, ApiError::Status { endpoint: "/me", status: 401 }));
}

#[tokio::test]
async fn fetch_me_rejects_body_without_user_field() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": "ok"})))
        .mount(&server)
        .await;

    let error = api(&server).fetch_me().await.unwrap_err();
    assert!(matches!(error, ApiError::Http(_)));
}

#[tokio::test]
async fn fetch_me_rejects_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let error = api(&server).fetch_me().await.unwrap_err();
    assert!(matches!(error, ApiError::Http(_)));
}

// =============================================================================
// login
// =============================================================================

#[tokio::test]
async fn login_posts_credentials_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(serde_json::json!({"username": "romi", "password": "pw"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": "Login successful"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    api(&server).login("romi", "pw").await.unwrap();
}

#[tokio::test]
async fn login_401_carries_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(serde_json::json!({"error": "User not found"})),
        )
        .mount(&server)
        .await;

    let error = api(&server).login("ghost", "pw").await.unwrap_err();
    match error {
        ApiError::RejectedCredentials { message } => assert_eq!(message, "User not found"),
        other => panic!("expected RejectedCredentials, got {other:?}"),
    }
}

#[tokio::test]
async fn login_401_without_body_uses_fallback_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let error = api(&server).login("romi", "wrong").await.unwrap_err();
    match error {
        ApiError::RejectedCredentials { message } => assert_eq!(message, INVALID_CREDENTIALS),
        other => panic!("expected RejectedCredentials, got {other:?}"),
    }
}

#[tokio::test]
async fn login_other_failures_map_to_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let error = api(&server).login("romi", "pw").await.unwrap_err();
    assert!(matches!(error, ApiError::Status { endpoint: "/login", status: 503 }));
}

#[tokio::test]
async fn login_cookie_rides_along_on_later_requests() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "session=abc123; Path=/")
                .set_body_json(serde_json::json!({"message": "Login successful"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/me"))
        .and(header("cookie", "session=abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"user": "romi"})))
        .expect(1)
        .mount(&server)
        .await;

    let api = api(&server);
    api.login("romi", "pw").await.unwrap();
    let user = api.fetch_me().await.unwrap();
    assert_eq!(user.0, serde_json::json!("romi"));
}

// =============================================================================
// logout
// =============================================================================

#[tokio::test]
async fn logout_succeeds_on_2xx() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/logout"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    api(&server).logout().await.unwrap();
}

#[tokio::test]
async fn logout_reports_non_2xx() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/logout"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let error = api(&server).logout().await.unwrap_err();
    assert!(matches!(error, ApiError::Status { endpoint: "/logout", status: 500 }));
}

// =============================================================================
// fetch_items
// =============================================================================

#[tokio::test]
async fn fetch_items_returns_raw_listing() {
    let server = MockServer::start().await;
    let listing = serde_json::json!([{"id": 1, "name": "hammer"}, {"id": 2, "name": "tape"}]);
    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing.clone()))
        .mount(&server)
        .await;

    let items = api(&server).fetch_items().await.unwrap();
    assert_eq!(items.0, listing);
}

#[tokio::test]
async fn fetch_items_maps_401_to_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let error = api(&server).fetch_items().await.unwrap_err();
    assert!(matches!(error, ApiError::Status { endpoint: "/items", status: 401 }));
}

// =============================================================================
// transport faults
// =============================================================================

#[tokio::test]
async fn requests_against_dead_server_fail_with_http_error() {
    let server = MockServer::builder().start().await;
    let api = api(&server);
    drop(server);

    let error = api.fetch_me().await.unwrap_err();
    assert!(matches!(error, ApiError::Http(_)));
}
