//! REST API layer.
//!
//! [`ApiClient`] owns the transport, base URL and bearer token; the typed
//! services on top of it map each backend endpoint to one async method.

pub mod auth;
pub mod client;
pub mod dashboard;
pub mod service;
pub mod users;

pub use auth::{AuthApi, LoginResponse};
pub use client::ApiClient;
pub use dashboard::DashboardApi;
pub use service::{EntityService, ExportQuery};
pub use users::UsersApi;
