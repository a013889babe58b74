//! Mock implementations for testing.
//!
//! These let the API, store and app layers be exercised without network
//! or file system access.

pub mod credentials;
pub mod http;

pub use credentials::InMemoryCredentials;
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
