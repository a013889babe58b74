//! CRM - A terminal client for the CRM REST backend
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod auth;
pub mod cli;
pub mod error;
pub mod export;
pub mod filter;
pub mod forms;
pub mod models;
pub mod startup;
pub mod store;
pub mod terminal;
pub mod traits;
pub mod ui;
