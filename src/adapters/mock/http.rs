//! Mock HTTP client for testing.
//!
//! Responses are looked up by method and URL, then by URL alone, then the
//! default. Every request is recorded for later assertions.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    /// HTTP method, upper case.
    pub method: String,
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
    /// Request body, for methods that carry one.
    pub body: Option<String>,
}

impl RecordedRequest {
    /// Parse the body as JSON.
    pub fn json_body(&self) -> Option<serde_json::Value> {
        self.body
            .as_deref()
            .and_then(|b| serde_json::from_str(b).ok())
    }
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response (any status).
    Success(Response),
    /// Fail at the transport level.
    Error(HttpError),
}

impl MockResponse {
    /// A 200 response with a JSON body.
    pub fn json(value: serde_json::Value) -> Self {
        MockResponse::Success(Response::json_body(200, &value))
    }

    /// A response with the given status and JSON body.
    pub fn status_json(status: u16, value: serde_json::Value) -> Self {
        MockResponse::Success(Response::json_body(status, &value))
    }
}

/// Mock HTTP client for testing.
///
/// ```ignore
/// let client = MockHttpClient::new();
/// client.set_response("GET", "http://api/customers", MockResponse::json(json!([])));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    /// Responses keyed by `(method, url)`; an empty method matches any.
    responses: Arc<Mutex<HashMap<(String, String), MockResponse>>>,
    default_response: Arc<Mutex<Option<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the response for `method` on `url`, matched exactly.
    pub fn set_response(&self, method: &str, url: &str, response: MockResponse) {
        lock(&self.responses).insert((method.to_uppercase(), url.to_string()), response);
    }

    /// Set the response for `url` regardless of method.
    pub fn set_url_response(&self, url: &str, response: MockResponse) {
        lock(&self.responses).insert((String::new(), url.to_string()), response);
    }

    /// Set a default response for requests without a specific match.
    pub fn set_default_response(&self, response: MockResponse) {
        *lock(&self.default_response) = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<RecordedRequest> {
        lock(&self.requests).last().cloned()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        lock(&self.requests).clear();
    }

    fn respond(
        &self,
        method: &str,
        url: &str,
        headers: &Headers,
        body: Option<&str>,
    ) -> Result<Response, HttpError> {
        lock(&self.requests).push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body: body.map(str::to_string),
        });

        let configured = {
            let responses = lock(&self.responses);
            responses
                .get(&(method.to_string(), url.to_string()))
                .or_else(|| responses.get(&(String::new(), url.to_string())))
                .cloned()
        };

        match configured.or_else(|| lock(&self.default_response).clone()) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Ok(Response::json_body(
                404,
                &serde_json::json!({ "message": format!("no mock for {} {}", method, url) }),
            )),
        }
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.respond("GET", url, headers, None)
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.respond("POST", url, headers, Some(body))
    }

    async fn put(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.respond("PUT", url, headers, Some(body))
    }

    async fn patch(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.respond("PATCH", url, headers, Some(body))
    }

    async fn delete(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.respond("DELETE", url, headers, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_method_specific_response_wins() {
        let client = MockHttpClient::new();
        client.set_url_response("http://x/customers", MockResponse::json(json!("any")));
        client.set_response("POST", "http://x/customers", MockResponse::json(json!("post")));

        let got = client.get("http://x/customers", &Headers::new()).await.unwrap();
        assert_eq!(got.json::<String>().unwrap(), "any");

        let posted = client
            .post("http://x/customers", "{}", &Headers::new())
            .await
            .unwrap();
        assert_eq!(posted.json::<String>().unwrap(), "post");
    }

    #[tokio::test]
    async fn test_unmatched_request_is_404() {
        let client = MockHttpClient::new();
        let response = client.delete("http://x/orders/1", &Headers::new()).await.unwrap();
        assert_eq!(response.status, 404);
    }

    #[tokio::test]
    async fn test_default_and_error_responses() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Error(HttpError::ConnectionFailed(
            "refused".to_string(),
        )));
        let err = client.get("http://x/", &Headers::new()).await.unwrap_err();
        assert_eq!(err, HttpError::ConnectionFailed("refused".to_string()));
    }

    #[tokio::test]
    async fn test_requests_are_recorded() {
        let client = MockHttpClient::new();
        let mut headers = Headers::new();
        headers.insert("Authorization".to_string(), "Bearer t".to_string());
        let _ = client
            .patch("http://x/users/1/status", r#"{"status":"LOCKED"}"#, &headers)
            .await;

        let request = client.last_request().unwrap();
        assert_eq!(request.method, "PATCH");
        assert_eq!(request.json_body().unwrap()["status"], "LOCKED");
        assert_eq!(request.headers["Authorization"], "Bearer t");

        client.clear_requests();
        assert!(client.get_requests().is_empty());
    }
}
