//! Credential file loading and the load-once provider.
//!
//! A [`ConfigProvider`] starts out unloaded, reads its file exactly once on
//! [`ConfigProvider::load`], and from then on hands out the same immutable
//! [`ConfigRecord`]. Callers own the provider and pass `&ConfigRecord` to
//! whatever needs credentials; there is no process global.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use thiserror::Error;

use super::record::{ConfigRecord, Field, RawRecord};
use crate::constants::TEMPLATE_FILENAME;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "config file {} not found; copy {} to it and fill in your credentials",
        .path.display(),
        TEMPLATE_FILENAME
    )]
    MissingConfig { path: PathBuf },

    #[error("`{field}` still holds the template placeholder {value:?}; replace it with a real value")]
    PlaceholderValue { field: Field, value: String },

    #[error("`{field}` is missing or empty; all six credential fields are required")]
    MissingField { field: Field },

    #[error("configuration accessed before it was loaded")]
    Uninitialized,

    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseJson {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Load-once holder for the credential record.
#[derive(Debug)]
pub struct ConfigProvider {
    path: PathBuf,
    record: OnceLock<ConfigRecord>,
}

impl ConfigProvider {
    /// Create an unloaded provider bound to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            record: OnceLock::new(),
        }
    }

    /// Path of the credentials file this provider reads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.record.get().is_some()
    }

    /// Read and validate the credentials file.
    ///
    /// Once a load has succeeded, later calls return the same record
    /// without touching the file again. A failed load leaves the provider
    /// unloaded.
    pub fn load(&self) -> Result<&ConfigRecord, ConfigError> {
        if let Some(record) = self.record.get() {
            return Ok(record);
        }
        let record = load_file(&self.path)?;
        tracing::debug!(path = %self.path.display(), "credentials loaded");
        Ok(self.record.get_or_init(|| record))
    }

    /// The record produced by a previous [`load`](Self::load).
    pub fn get(&self) -> Result<&ConfigRecord, ConfigError> {
        self.record.get().ok_or(ConfigError::Uninitialized)
    }
}

/// Read, parse and validate a credentials file.
///
/// `.json` files are parsed as JSON, anything else as TOML.
pub fn load_file(path: &Path) -> Result<ConfigRecord, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConfigError::MissingConfig {
            path: path.to_path_buf(),
        },
        _ => ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let raw = parse(path, &content)?;
    for key in raw.unknown.keys() {
        tracing::warn!(path = %path.display(), key = %key, "ignoring unknown config key");
    }
    raw.validate()
}

fn parse(path: &Path, content: &str) -> Result<RawRecord, ConfigError> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(content).map_err(|e| ConfigError::ParseJson {
            path: path.to_path_buf(),
            source: e,
        })
    } else {
        toml::from_str(content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
