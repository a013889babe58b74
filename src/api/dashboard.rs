//! Dashboard summary endpoint.

use std::sync::Arc;

use super::ApiClient;
use crate::error::CrmResult;
use crate::models::DashboardData;

#[derive(Debug, Clone)]
pub struct DashboardApi {
    api: Arc<ApiClient>,
}

impl DashboardApi {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// `GET /dashboard`
    pub async fn fetch(&self) -> CrmResult<DashboardData> {
        self.api.get_json("/dashboard").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use serde_json::json;

    #[tokio::test]
    async fn test_fetch_dashboard() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "GET",
            "http://api.test/dashboard",
            MockResponse::json(json!({"totalRevenue": 10.0, "newCustomers": 2})),
        );
        let api = DashboardApi::new(Arc::new(ApiClient::new("http://api.test", Arc::new(mock))));
        let data = api.fetch().await.unwrap();
        assert_eq!(data.new_customers, 2);
    }
}
