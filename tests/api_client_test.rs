//! REST calls through the reqwest adapter, verified with wiremock.

mod common;

use common::{customers_json, services, TEST_TOKEN};
use crm::api::ExportQuery;
use crm::error::{CrmError, NetworkError};
use crm::models::{Customer, CustomerDraft, EntityId, User, UserStatus};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_list_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/customers"))
        .and(header("Authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(customers_json()))
        .expect(1)
        .mount(&server)
        .await;

    let customers = services(&server, Some(TEST_TOKEN))
        .entity::<Customer>()
        .list()
        .await
        .unwrap();

    assert_eq!(customers.len(), 2);
    assert_eq!(customers[0].name, "A");
    assert_eq!(customers[1].id, EntityId::from(2));
}

#[tokio::test]
async fn test_search_encodes_term() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/customers/search"))
        .and(query_param("term", "Nguyễn An"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 7, "fullName": "Nguyễn An", "email": "an@crm.vn"}
        ])))
        .mount(&server)
        .await;

    let found = services(&server, Some(TEST_TOKEN))
        .entity::<Customer>()
        .search("Nguyễn An")
        .await
        .unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Nguyễn An");
}

#[tokio::test]
async fn test_create_posts_draft() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/customers"))
        .and(body_partial_json(json!({"name": "C", "email": "c@crm.vn"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 3, "name": "C", "email": "c@crm.vn", "phone": "0903"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let draft = CustomerDraft {
        name: "C".to_string(),
        email: "c@crm.vn".to_string(),
        phone: "0903".to_string(),
        ..Default::default()
    };
    let created = services(&server, Some(TEST_TOKEN))
        .entity::<Customer>()
        .create(&draft)
        .await
        .unwrap();

    assert_eq!(created.id, EntityId::from(3));
}

#[tokio::test]
async fn test_error_body_message_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/customers/99"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "Customer not found"})),
        )
        .mount(&server)
        .await;

    let err = services(&server, Some(TEST_TOKEN))
        .entity::<Customer>()
        .get(&EntityId::from(99))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CrmError::Network(NetworkError::HttpStatus { status: 404, .. })
    ));
    assert_eq!(err.to_string(), "HTTP 404: Customer not found");
}

#[tokio::test]
async fn test_delete_accepts_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/orders/5"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    services(&server, Some(TEST_TOKEN))
        .entity::<crm::models::Order>()
        .delete(&EntityId::from(5))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_export_returns_raw_bytes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/customers/export"))
        .and(query_param("status", "VIP"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"PK\x03\x04sheet".to_vec()))
        .mount(&server)
        .await;

    let query = ExportQuery {
        term: None,
        status: Some("VIP".to_string()),
    };
    let bytes = services(&server, Some(TEST_TOKEN))
        .entity::<Customer>()
        .export(&query)
        .await
        .unwrap();

    assert_eq!(&bytes[..], b"PK\x03\x04sheet");
}

#[tokio::test]
async fn test_user_status_patch() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/users/4/status"))
        .and(body_partial_json(json!({"status": "LOCKED"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 4, "name": "Lan", "email": "lan@crm.vn", "status": "LOCKED"
        })))
        .mount(&server)
        .await;

    let user: User = services(&server, Some(TEST_TOKEN))
        .users
        .set_status(&EntityId::from(4), &UserStatus::Locked)
        .await
        .unwrap();

    assert_eq!(user.status, UserStatus::Locked);
}

#[tokio::test]
async fn test_unreachable_backend_is_a_network_error() {
    // Nothing listens on port 9 on loopback.
    let client = std::sync::Arc::new(crm::api::ApiClient::new(
        "http://127.0.0.1:9/api",
        std::sync::Arc::new(crm::adapters::ReqwestHttpClient::new()),
    ));
    let services = crm::store::coordinator::Services::new(client);

    let err = services.entity::<Customer>().list().await.unwrap_err();
    assert!(matches!(err, CrmError::Network(_)));
}
