//! JSON output renderer, keyed exactly like the credentials file.

use crate::config::ConfigRecord;
use crate::output::RecordRenderer;

pub struct JsonRenderer;

impl RecordRenderer for JsonRenderer {
    fn render(&self, record: &ConfigRecord) -> String {
        let mut out = serde_json::to_string_pretty(record).unwrap_or_else(|_| "{}".to_string());
        out.push('\n');
        out
    }
}
