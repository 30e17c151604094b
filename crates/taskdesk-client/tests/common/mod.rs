/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for taskdesk-client tests

use serde_json::{json, Value};
use taskdesk_client::{PortalClient, SessionToken};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Session token fixture used across tests
pub fn mock_session_token() -> &'static str {
    "test-session-token"
}

/// Client pointed at the mock server with a session already in place
pub fn authenticated_client(server: &MockServer) -> PortalClient {
    let mut client = PortalClient::new(&server.uri()).expect("client should build");
    client.set_session(SessionToken::new(mock_session_token()));
    client
}

/// Cookie header value the backend expects on protected requests
pub fn session_cookie() -> String {
    format!("accessToken={}", mock_session_token())
}

/// Minimal valid task JSON for list responses
#[allow(dead_code)]
pub fn task_json(id: &str, status: &str, created_at: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Task {id}"),
        "link_url": "https://docs.example.com/report",
        "department_name": "Sales",
        "status": status,
        "comment": null,
        "created_at": created_at,
        "employee": { "name": "Budi" }
    })
}
