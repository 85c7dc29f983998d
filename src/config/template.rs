//! The version-controlled credentials template.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Template text, embedded from `config.example.toml` at the crate root.
pub const TEMPLATE: &str = include_str!("../../config.example.toml");

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("{path} already exists; pass --force to overwrite it")]
    AlreadyExists { path: PathBuf },

    #[error("failed to write template to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Write the template to `dest` so it can be filled in.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn write_template(dest: &Path, force: bool) -> Result<(), TemplateError> {
    let mut options = OpenOptions::new();
    options.write(true);
    if force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }

    let write_err = |e: std::io::Error| match e.kind() {
        ErrorKind::AlreadyExists => TemplateError::AlreadyExists {
            path: dest.to_path_buf(),
        },
        _ => TemplateError::Write {
            path: dest.to_path_buf(),
            source: e,
        },
    };
    let mut file = options.open(dest).map_err(write_err)?;
    file.write_all(TEMPLATE.as_bytes()).map_err(write_err)?;
    tracing::debug!(path = %dest.display(), "template written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, Field, load_file};

    #[test]
    fn template_names_every_field() {
        for key in ["mapsApiKey", "backendApiKey", "backendAuthDomain",
            "backendDatabaseUrl", "backendProjectId", "backendAppId"]
        {
            assert!(TEMPLATE.contains(key), "template missing {key}");
        }
    }

    #[test]
    fn unfilled_template_fails_on_first_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        write_template(&path, false).unwrap();

        let err = load_file(&path).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::PlaceholderValue { field: Field::MapsApiKey, .. }
        ));
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "mapsApiKey = \"real\"\n").unwrap();

        let err = write_template(&path, false).unwrap_err();
        assert!(matches!(err, TemplateError::AlreadyExists { .. }));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "mapsApiKey = \"real\"\n");

        write_template(&path, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), TEMPLATE);
    }

    #[test]
    fn force_truncates_longer_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, TEMPLATE.repeat(3)).unwrap();

        write_template(&path, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), TEMPLATE);
    }

    #[test]
    fn existing_directory_is_not_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_template(dir.path(), false).unwrap_err();
        assert!(matches!(err, TemplateError::AlreadyExists { .. }), "got: {err}");
    }
}
