//! SpaceXApi against a local HTTP server, through the real reqwest adapter.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{launches, launches_body, mount_launches, mount_status, LAUNCHES_PATH};
use launchpad::adapters::ReqwestHttpClient;
use launchpad::api::SpaceXApi;
use launchpad::error::{ErrorCategory, FetchCause, NetworkError};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> SpaceXApi {
    SpaceXApi::with_base_url(Arc::new(ReqwestHttpClient::new()), server.uri())
}

#[tokio::test]
async fn test_get_all_launches_decodes_wire_format() {
    let server = MockServer::start().await;
    mount_launches(&server, 3, 1).await;

    let fetched = api_for(&server).get_all_launches().await.unwrap();
    assert_eq!(fetched, launches(3));
}

#[tokio::test]
async fn test_get_all_launches_sends_accept_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LAUNCHES_PATH))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(launches_body(1)))
        .expect(1)
        .mount(&server)
        .await;

    api_for(&server).get_all_launches().await.unwrap();
}

#[tokio::test]
async fn test_empty_array_is_success() {
    let server = MockServer::start().await;
    mount_launches(&server, 0, 1).await;

    let fetched = api_for(&server).get_all_launches().await.unwrap();
    assert!(fetched.is_empty());
}

#[tokio::test]
async fn test_server_error_maps_to_http_status() {
    let server = MockServer::start().await;
    mount_status(&server, 503).await;

    let err = api_for(&server).get_all_launches().await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Server);
    match err.cause() {
        FetchCause::Network(NetworkError::HttpStatus { status, message }) => {
            assert_eq!(*status, 503);
            assert_eq!(message, "upstream unavailable");
        }
        other => panic!("unexpected cause: {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LAUNCHES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"not\": \"a list\"}"))
        .mount(&server)
        .await;

    let err = api_for(&server).get_all_launches().await.unwrap_err();
    assert!(matches!(err.cause(), FetchCause::Decode(_)));
    assert_eq!(err.category(), ErrorCategory::Data);
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LAUNCHES_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(launches_body(1))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = ReqwestHttpClient::with_timeout(Duration::from_millis(100)).unwrap();
    let api = SpaceXApi::with_base_url(Arc::new(client), server.uri());

    let err = api.get_all_launches().await.unwrap_err();
    assert!(matches!(
        err.cause(),
        FetchCause::Network(NetworkError::Timeout { .. })
    ));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Bind and immediately release a port so nothing is listening on it
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let api = SpaceXApi::with_base_url(Arc::new(ReqwestHttpClient::new()), uri);
    let err = api.get_all_launches().await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Network);
}
