//! Credential configuration.
//!
//! Handles loading the filled-in credentials file, rejecting partial or
//! unfilled (placeholder) values, and scaffolding the file from the template.

pub mod loader;
pub mod placeholder;
pub mod record;
pub mod template;

pub use loader::{ConfigError, ConfigProvider, load_file};
pub use record::{ConfigRecord, Field};
pub use template::{TEMPLATE, TemplateError, write_template};
