//! Common test utilities for integration tests.
//!
//! Services here talk to a wiremock server through the real reqwest
//! transport, so requests leave the process exactly as in production.

use std::sync::Arc;

use crm::adapters::ReqwestHttpClient;
use crm::api::ApiClient;
use crm::store::coordinator::Services;
use serde_json::{json, Value};
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-jwt-token";

/// Base URL of the mock backend, with the `/api` prefix the client expects.
pub fn api_url(server: &MockServer) -> String {
    format!("{}/api", server.uri())
}

/// Services over the reqwest transport, with a token when `token` is set.
pub fn services(server: &MockServer, token: Option<&str>) -> Services {
    let client = Arc::new(ApiClient::new(
        api_url(server),
        Arc::new(ReqwestHttpClient::new()),
    ));
    client.set_token(token.map(str::to_string));
    Services::new(client)
}

pub fn customers_json() -> Value {
    json!([
        {"id": 1, "name": "A", "email": "a@crm.vn", "phone": "0901"},
        {"id": 2, "name": "B", "email": "b@crm.vn", "phone": "0902"}
    ])
}
