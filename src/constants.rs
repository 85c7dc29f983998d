//! App-wide constants.
//!
//! Centralises the tool name, file names and placeholder patterns so a
//! rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "siteconf";

/// Crate version as reported by `siteconf version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Real credentials file, excluded from version control.
pub const CONFIG_FILENAME: &str = "config.toml";

/// Version-controlled template developers copy to [`CONFIG_FILENAME`].
pub const TEMPLATE_FILENAME: &str = "config.example.toml";

// ── Placeholder sentinels ───────────────────────────────────────────

/// Start of a full-value sentinel, e.g. `YOUR_MAPS_API_KEY_HERE`.
pub const PLACEHOLDER_PREFIX: &str = "YOUR_";

/// End of a full-value sentinel.
pub const PLACEHOLDER_SUFFIX: &str = "_HERE";

/// Literal that marks a value derived from an unfilled project id.
pub const PLACEHOLDER_PROJECT_ID: &str = "YOUR_PROJECT_ID";

/// Default log filter when neither `--verbose` nor `RUST_LOG` is given.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
