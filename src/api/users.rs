//! User account endpoints beyond plain CRUD.

use serde_json::json;
use std::sync::Arc;

use super::ApiClient;
use crate::error::CrmResult;
use crate::models::{EntityId, User, UserStatus};

#[derive(Debug, Clone)]
pub struct UsersApi {
    api: Arc<ApiClient>,
}

impl UsersApi {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// `PATCH /users/{id}/status`, returning the updated account.
    pub async fn set_status(&self, id: &EntityId, status: &UserStatus) -> CrmResult<User> {
        let path = format!("/users/{}/status", urlencoding::encode(&id.to_string()));
        self.api
            .patch_json(&path, &json!({ "status": status.code() }))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};

    #[tokio::test]
    async fn test_lock_user() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "PATCH",
            "http://api.test/users/3/status",
            MockResponse::json(json!({"id":3,"name":"C","status":"LOCKED"})),
        );
        let api = UsersApi::new(Arc::new(ApiClient::new("http://api.test", Arc::new(mock.clone()))));
        let user = api
            .set_status(&EntityId::Number(3), &UserStatus::Locked)
            .await
            .unwrap();
        assert_eq!(user.status, UserStatus::Locked);
        assert_eq!(mock.last_request().unwrap().json_body().unwrap()["status"], "LOCKED");
    }
}
