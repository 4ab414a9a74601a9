//! Common test utilities for AniList client tests.

use anilist::AniListClient;
use serde::Serialize;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Start a new mock server for testing.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// An anonymous client pointed at the mock server.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> AniListClient {
    AniListClient::builder().url(server.uri()).build().unwrap()
}

/// Create a successful GraphQL response with `data.{root}`.
#[allow(dead_code)]
pub fn mock_data<T: Serialize>(root: &str, value: T) -> ResponseTemplate {
    let mut data = serde_json::Map::new();
    data.insert(root.to_string(), serde_json::to_value(value).unwrap());
    ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": data }))
}

/// Create a GraphQL error response the way AniList sends one.
#[allow(dead_code)] // Not all test files use this
pub fn mock_errors(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(serde_json::json!({
        "errors": [{ "message": message, "status": status, "locations": [{ "line": 1, "column": 17 }] }],
        "data": null
    }))
}

/// Mount a mock expecting one POST whose body contains `variables`.
pub async fn mock_query(
    server: &MockServer,
    variables: serde_json::Value,
    response: ResponseTemplate,
) {
    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({ "variables": variables })))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

/// Mount a mock that fails the test if any request arrives.
#[allow(dead_code)]
pub async fn expect_no_requests(server: &MockServer) {
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

/// The GraphQL document of the only request the server received.
#[allow(dead_code)]
pub async fn received_document(server: &MockServer) -> String {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = requests[0].body_json().unwrap();
    body["query"].as_str().unwrap().to_string()
}
