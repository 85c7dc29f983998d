//! siteconf — maps and realtime-backend credential loading (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod logging;
pub mod output;

pub use config::{ConfigError, ConfigProvider, ConfigRecord, Field};
