//! Unified error handling for the CRM client.
//!
//! - **Error Categories**: high-level classification for handling decisions
//! - **Domain errors**: Network, Auth, System and Config errors
//! - **Unified type**: [`CrmError`] consolidates them
//! - **Context**: [`ErrorContext`] names the failing operation and resource
//! - **Result alias**: [`CrmResult<T>`]
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Network | Connection, timeout | Yes |
//! | Auth | 401/403, missing session | No |
//! | Server | Backend errors (5xx) | Yes |
//! | Client | Undecodable payloads | No |
//! | User | Other 4xx, rejected input | No |
//! | System | Filesystem errors | Sometimes |
//! | Configuration | Bad settings | No |

mod auth;
mod category;
mod config;
mod context;
mod crm_error;
mod network;
mod result;
mod system;

pub use auth::AuthError;
pub use category::ErrorCategory;
pub use config::ConfigError;
pub use context::ErrorContext;
pub use crm_error::CrmError;
pub use network::{classify_http_error, extract_error_message, NetworkError};
pub use result::{CrmResult, ResultExt};
pub use system::{classify_io_error, SystemError};
