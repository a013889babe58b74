//! Generic CRUD service over one REST collection.

use bytes::Bytes;
use std::marker::PhantomData;
use std::sync::Arc;

use super::ApiClient;
use crate::error::CrmResult;
use crate::models::{Entity, EntityId};

/// Query parameters accepted by the export endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportQuery {
    pub term: Option<String>,
    pub status: Option<String>,
}

impl ExportQuery {
    /// URL query string including the leading `?`, or empty.
    pub fn to_query_string(&self) -> String {
        let params: Vec<String> = [("term", &self.term), ("status", &self.status)]
            .into_iter()
            .filter_map(|(key, value)| {
                value
                    .as_deref()
                    .filter(|v| !v.is_empty())
                    .map(|v| format!("{}={}", key, urlencoding::encode(v)))
            })
            .collect();
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

/// Typed calls for the `/{resource}` collection of `E`.
pub struct EntityService<E: Entity> {
    api: Arc<ApiClient>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> Clone for EntityService<E> {
    fn clone(&self) -> Self {
        Self::new(self.api.clone())
    }
}

impl<E: Entity> EntityService<E> {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            _entity: PhantomData,
        }
    }

    fn collection() -> String {
        format!("/{}", E::KIND.resource())
    }

    fn member(id: &EntityId) -> String {
        format!(
            "/{}/{}",
            E::KIND.resource(),
            urlencoding::encode(&id.to_string())
        )
    }

    /// `GET /{resource}`
    pub async fn list(&self) -> CrmResult<Vec<E>> {
        self.api.get_json(&Self::collection()).await
    }

    /// `GET /{resource}/{id}`
    pub async fn get(&self, id: &EntityId) -> CrmResult<E> {
        self.api.get_json(&Self::member(id)).await
    }

    /// `GET /{resource}/search?term=`
    pub async fn search(&self, term: &str) -> CrmResult<Vec<E>> {
        let path = format!(
            "/{}/search?term={}",
            E::KIND.resource(),
            urlencoding::encode(term)
        );
        self.api.get_json(&path).await
    }

    /// `POST /{resource}`
    pub async fn create(&self, draft: &E::Draft) -> CrmResult<E> {
        self.api.post_json(&Self::collection(), draft).await
    }

    /// `PUT /{resource}/{id}`
    pub async fn update(&self, id: &EntityId, draft: &E::Draft) -> CrmResult<E> {
        self.api.put_json(&Self::member(id), draft).await
    }

    /// `DELETE /{resource}/{id}`
    pub async fn delete(&self, id: &EntityId) -> CrmResult<()> {
        self.api.delete(&Self::member(id)).await
    }

    /// `GET /{resource}/export`, returning the spreadsheet bytes.
    pub async fn export(&self, query: &ExportQuery) -> CrmResult<Bytes> {
        let path = format!(
            "/{}/export{}",
            E::KIND.resource(),
            query.to_query_string()
        );
        self.api.get_bytes(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::models::{Customer, CustomerDraft, PortInventory};
    use crate::traits::Response;
    use serde_json::json;

    const BASE: &str = "http://api.test/api";

    fn service<E: Entity>(mock: &MockHttpClient) -> EntityService<E> {
        EntityService::new(Arc::new(ApiClient::new(BASE, Arc::new(mock.clone()))))
    }

    #[tokio::test]
    async fn test_list_preserves_server_order() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "GET",
            "http://api.test/api/customers",
            MockResponse::json(json!([{"id":1,"name":"A"},{"id":2,"name":"B"}])),
        );
        let customers = service::<Customer>(&mock).list().await.unwrap();
        let names: Vec<_> = customers.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_search_encodes_term() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::json(json!([])));
        service::<Customer>(&mock).search("an & co").await.unwrap();
        assert_eq!(
            mock.last_request().unwrap().url,
            "http://api.test/api/customers/search?term=an%20%26%20co"
        );
    }

    #[tokio::test]
    async fn test_update_puts_draft_to_member_url() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "PUT",
            "http://api.test/api/customers/1",
            MockResponse::json(json!({"id":1,"name":"A2"})),
        );
        let draft = CustomerDraft {
            name: "A2".into(),
            ..Default::default()
        };
        let updated = service::<Customer>(&mock)
            .update(&EntityId::Number(1), &draft)
            .await
            .unwrap();
        assert_eq!(updated.name, "A2");
        assert_eq!(mock.last_request().unwrap().json_body().unwrap()["name"], "A2");
    }

    #[tokio::test]
    async fn test_delete_uses_resource_path() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "DELETE",
            "http://api.test/api/port-inventories/7",
            MockResponse::Success(Response::new(204, Bytes::new())),
        );
        service::<PortInventory>(&mock)
            .delete(&EntityId::Number(7))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_export_returns_raw_bytes() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "GET",
            "http://api.test/api/customers/export?term=acme&status=VIP",
            MockResponse::Success(Response::new(200, Bytes::from_static(b"PK\x03\x04"))),
        );
        let query = ExportQuery {
            term: Some("acme".into()),
            status: Some("VIP".into()),
        };
        let bytes = service::<Customer>(&mock).export(&query).await.unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_export_query_skips_empty_values() {
        let query = ExportQuery {
            term: Some(String::new()),
            status: Some("ACTIVE".into()),
        };
        assert_eq!(query.to_query_string(), "?status=ACTIVE");
        assert_eq!(ExportQuery::default().to_query_string(), "");
    }
}
