//! Authentication session storage.
//!
//! The session is the bearer token and user record returned by
//! `POST /auth/login`, stored at `<data dir>/.credentials.json`.

pub mod credentials;

pub use credentials::{Credentials, CredentialsManager, SessionUser};
