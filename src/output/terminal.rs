//! Terminal renderer: one aligned `key  value` line per field.

use colored::Colorize;

use crate::config::ConfigRecord;
use crate::output::RecordRenderer;

pub struct TerminalRenderer;

impl RecordRenderer for TerminalRenderer {
    fn render(&self, record: &ConfigRecord) -> String {
        let width = record
            .entries()
            .map(|(f, _)| f.key().len())
            .max()
            .unwrap_or(0);

        let mut output = String::new();
        for (field, value) in record.entries() {
            let key = format!("{:<width$}", field.key());
            let value = if field.is_secret() {
                value.dimmed().to_string()
            } else {
                value.to_string()
            };
            output.push_str(&format!("  {}  {}\n", key.cyan(), value));
        }
        output
    }
}
