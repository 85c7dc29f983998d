//! TOML output renderer; the output is itself a loadable credentials file.

use crate::config::ConfigRecord;
use crate::output::RecordRenderer;

pub struct TomlRenderer;

impl RecordRenderer for TomlRenderer {
    fn render(&self, record: &ConfigRecord) -> String {
        toml::to_string(record).unwrap_or_default()
    }
}
