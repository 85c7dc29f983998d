//! The six-field credential record and its field names.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

use super::loader::ConfigError;
use super::placeholder::is_placeholder;

/// Names of the record fields, displayed exactly as they appear in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum Field {
    MapsApiKey,
    BackendApiKey,
    BackendAuthDomain,
    BackendDatabaseUrl,
    BackendProjectId,
    BackendAppId,
}

impl Field {
    /// The key used for this field in the config file.
    pub fn key(self) -> &'static str {
        self.into()
    }

    /// Whether the value is a credential that must not be echoed by default.
    pub fn is_secret(self) -> bool {
        matches!(self, Field::MapsApiKey | Field::BackendApiKey)
    }
}

/// Fully populated credential set.
///
/// Values are opaque: nothing here parses or validates them beyond
/// presence and the placeholder check performed at load time.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigRecord {
    pub maps_api_key: String,
    pub backend_api_key: String,
    pub backend_auth_domain: String,
    pub backend_database_url: String,
    pub backend_project_id: String,
    pub backend_app_id: String,
}

impl ConfigRecord {
    /// Look up a value by field name.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::MapsApiKey => &self.maps_api_key,
            Field::BackendApiKey => &self.backend_api_key,
            Field::BackendAuthDomain => &self.backend_auth_domain,
            Field::BackendDatabaseUrl => &self.backend_database_url,
            Field::BackendProjectId => &self.backend_project_id,
            Field::BackendAppId => &self.backend_app_id,
        }
    }

    /// Iterate over `(field, value)` pairs in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::iter().map(move |f| (f, self.get(f)))
    }

    /// Copy of this record with secret fields replaced by `[REDACTED]`.
    pub fn redacted(&self) -> Self {
        Self {
            maps_api_key: REDACTED.to_string(),
            backend_api_key: REDACTED.to_string(),
            ..self.clone()
        }
    }
}

const REDACTED: &str = "[REDACTED]";

impl fmt::Debug for ConfigRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigRecord")
            .field("maps_api_key", &REDACTED)
            .field("backend_api_key", &REDACTED)
            .field("backend_auth_domain", &self.backend_auth_domain)
            .field("backend_database_url", &self.backend_database_url)
            .field("backend_project_id", &self.backend_project_id)
            .field("backend_app_id", &self.backend_app_id)
            .finish()
    }
}

/// File contents as parsed, before presence and placeholder checks.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawRecord {
    maps_api_key: Option<String>,
    backend_api_key: Option<String>,
    backend_auth_domain: Option<String>,
    backend_database_url: Option<String>,
    backend_project_id: Option<String>,
    backend_app_id: Option<String>,
    #[serde(flatten)]
    pub(crate) unknown: IndexMap<String, serde_json::Value>,
}

impl RawRecord {
    fn take(&mut self, field: Field) -> Option<String> {
        let slot = match field {
            Field::MapsApiKey => &mut self.maps_api_key,
            Field::BackendApiKey => &mut self.backend_api_key,
            Field::BackendAuthDomain => &mut self.backend_auth_domain,
            Field::BackendDatabaseUrl => &mut self.backend_database_url,
            Field::BackendProjectId => &mut self.backend_project_id,
            Field::BackendAppId => &mut self.backend_app_id,
        };
        slot.take().filter(|v| !v.is_empty())
    }

    /// Check every field in declaration order and build the record.
    ///
    /// Presence is checked for all fields before placeholders, so a file
    /// missing a key reports that rather than an earlier placeholder. An
    /// empty string counts as absent and is reported as `MissingField`.
    pub(crate) fn validate(mut self) -> Result<ConfigRecord, ConfigError> {
        let mut require =
            |field: Field| self.take(field).ok_or(ConfigError::MissingField { field });
        let record = ConfigRecord {
            maps_api_key: require(Field::MapsApiKey)?,
            backend_api_key: require(Field::BackendApiKey)?,
            backend_auth_domain: require(Field::BackendAuthDomain)?,
            backend_database_url: require(Field::BackendDatabaseUrl)?,
            backend_project_id: require(Field::BackendProjectId)?,
            backend_app_id: require(Field::BackendAppId)?,
        };

        if let Some((field, value)) = record.entries().find(|(_, v)| is_placeholder(v)) {
            return Err(ConfigError::PlaceholderValue {
                field,
                value: value.to_string(),
            });
        }

        Ok(record)
    }
}
