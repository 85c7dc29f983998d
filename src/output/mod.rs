//! Output renderers for a loaded record: terminal, JSON, TOML.

pub mod json;
pub mod terminal;
pub mod toml;

use crate::config::ConfigRecord;

/// Trait for rendering a credential record to an output format.
pub trait RecordRenderer {
    /// Render the record to a string.
    fn render(&self, record: &ConfigRecord) -> String;
}
