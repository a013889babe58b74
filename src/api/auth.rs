//! Login and password-reset endpoints.

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use super::ApiClient;
use crate::auth::SessionUser;
use crate::error::{AuthError, CrmError, CrmResult, NetworkError};

/// Body returned by `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AuthApi {
    api: Arc<ApiClient>,
}

impl AuthApi {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// `POST /auth/login`. A 400 or 401 becomes [`AuthError::LoginRejected`].
    pub async fn login(&self, email: &str, password: &str) -> CrmResult<LoginResponse> {
        let body = json!({ "email": email, "password": password });
        self.api
            .post_json("/auth/login", &body)
            .await
            .map_err(|err| match err {
                CrmError::Network(NetworkError::HttpStatus {
                    status: 400 | 401,
                    message,
                }) => AuthError::LoginRejected { message }.into(),
                other => other,
            })
    }

    /// `POST /auth/forgot-password`, returning the server's confirmation text.
    pub async fn forgot_password(&self, email: &str) -> CrmResult<String> {
        let body = json!({ "email": email });
        let response: MessageResponse = self.api.post_json("/auth/forgot-password", &body).await?;
        Ok(response
            .message
            .unwrap_or_else(|| format!("Password reset instructions were sent to {}", email)))
    }
}
