//! Startup: configuration, logging and session restore.
//!
//! - [`config`] - `CrmConfig` from defaults, environment and flags
//! - [`logging`] - file-backed `tracing` subscriber
//! - [`preflight`] - service wiring and session restore

pub mod config;
pub mod logging;
pub mod preflight;

pub use config::CrmConfig;
pub use logging::init_logging;
pub use preflight::{prepare, run_preflight, StartupResult};
