//! HTTP client wrapper for the CRM backend.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::{Arc, RwLock};

use crate::error::{classify_http_error, extract_error_message, CrmError, CrmResult, NetworkError};
use crate::traits::{Headers, HttpClient, Response};

/// Default backend base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Issues REST calls against the configured base URL.
///
/// Every request carries `Authorization: Bearer <token>` once a token is set.
/// Any non-2xx status is turned into [`NetworkError::HttpStatus`].
pub struct ApiClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
    token: RwLock<Option<String>>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.has_token())
            .finish()
    }
}

impl ApiClient {
    /// Create a client for `base_url` over the given transport.
    pub fn new(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http,
            token: RwLock::new(None),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Set or clear the bearer token.
    pub fn set_token(&self, token: Option<String>) {
        let mut slot = self
            .token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = token;
    }

    pub fn has_token(&self) -> bool {
        self.token
            .read()
            .map(|t| t.is_some())
            .unwrap_or(false)
    }

    /// Absolute URL for an API path such as `/customers/42`.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn headers(&self, with_body: bool) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        if with_body {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if let Ok(token) = self.token.read() {
            if let Some(token) = token.as_deref() {
                headers.insert("Authorization".to_string(), format!("Bearer {}", token));
            }
        }
        headers
    }

    async fn send(&self, method: &str, path: &str, body: Option<String>) -> CrmResult<Response> {
        let url = self.url(path);
        let headers = self.headers(body.is_some());
        tracing::debug!(method, url = %url, "api request");

        let result = match (method, body.as_deref()) {
            ("POST", Some(body)) => self.http.post(&url, body, &headers).await,
            ("PUT", Some(body)) => self.http.put(&url, body, &headers).await,
            ("PATCH", Some(body)) => self.http.patch(&url, body, &headers).await,
            ("DELETE", _) => self.http.delete(&url, &headers).await,
            _ => self.http.get(&url, &headers).await,
        };

        let response = result.map_err(|err| {
            tracing::warn!(method, url = %url, error = %err, "api transport failure");
            CrmError::from(classify_http_error(err, &url))
        })?;

        if !response.is_success() {
            let message = extract_error_message(response.status, &response.body);
            tracing::warn!(method, url = %url, status = response.status, %message, "api error status");
            return Err(NetworkError::HttpStatus {
                status: response.status,
                message,
            }
            .into());
        }

        tracing::debug!(method, url = %url, status = response.status, "api response");
        Ok(response)
    }

    fn encode<B: Serialize + ?Sized>(body: &B) -> CrmResult<String> {
        Ok(serde_json::to_string(body)?)
    }

    fn decode<T: DeserializeOwned>(response: &Response) -> CrmResult<T> {
        response.json().map_err(|err| {
            tracing::warn!(error = %err, "undecodable response body");
            CrmError::from(err)
        })
    }

    /// `GET` and decode a JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> CrmResult<T> {
        let response = self.send("GET", path, None).await?;
        Self::decode(&response)
    }

    /// `GET` a binary body.
    pub async fn get_bytes(&self, path: &str) -> CrmResult<Bytes> {
        Ok(self.send("GET", path, None).await?.body)
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> CrmResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send("POST", path, Some(Self::encode(body)?)).await?;
        Self::decode(&response)
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> CrmResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send("PUT", path, Some(Self::encode(body)?)).await?;
        Self::decode(&response)
    }

    pub async fn patch_json<B, T>(&self, path: &str, body: &B) -> CrmResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send("PATCH", path, Some(Self::encode(body)?)).await?;
        Self::decode(&response)
    }

    /// `DELETE`; any response body is ignored.
    pub async fn delete(&self, path: &str) -> CrmResult<()> {
        self.send("DELETE", path, None).await.map(|_| ())
    }
}
