//! Settings file management.
//!
//! Reads the optional `.hostbook.toml` settings file. The first file found
//! wins:
//!
//! 1. `.hostbook.toml` in the current directory
//! 2. `hostbook/config.toml` in the platform config directory
//!
//! A missing settings file means defaults. Paths inside a settings file are
//! relative to the file's directory.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::core::constants;
use crate::core::definition::DefinitionSchemas;
use crate::core::schema::Schema;
use crate::error::{ConfigError, Result};

/// Parsed settings file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Definition file used when no `--file` is given
    #[serde(default)]
    pub definition: Option<PathBuf>,
    /// Schema files for user-defined structures
    #[serde(default)]
    pub schemas: SchemaPaths,
    /// Password source switches
    #[serde(default)]
    pub password: PasswordSettings,
    #[serde(skip)]
    origin: Option<PathBuf>,
}

/// Schema files, each JSON or YAML.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaPaths {
    pub server_user_defined: Option<PathBuf>,
    pub group_user_defined: Option<PathBuf>,
    pub vault_server: Option<PathBuf>,
}

/// Which interactive password sources may be used.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PasswordSettings {
    #[serde(default = "enabled")]
    pub keyring: bool,
    #[serde(default = "enabled")]
    pub prompt: bool,
}

impl Default for PasswordSettings {
    fn default() -> Self {
        Self {
            keyring: true,
            prompt: true,
        }
    }
}

fn enabled() -> bool {
    true
}

impl Settings {
    /// Find the settings file to use, if any.
    pub fn locate() -> Option<PathBuf> {
        let local = PathBuf::from(constants::SETTINGS_FILE);
        if local.is_file() {
            return Some(local);
        }

        dirs::config_dir()
            .map(|dir| dir.join(constants::SETTINGS_DIR).join(constants::SETTINGS_DIR_FILE))
            .filter(|path| path.is_file())
    }

    /// Load the settings file, or defaults if there is none.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` or `ConfigError::Parse` if a settings
    /// file exists but cannot be used.
    pub fn load() -> Result<Self> {
        match Self::locate() {
            Some(path) => Self::from_path(&path),
            None => {
                debug!("no settings file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load a specific settings file.
    pub fn from_path(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading settings");

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents, path)
    }

    /// Parse settings text; `origin` anchors relative paths.
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self> {
        let mut settings: Self = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        settings.origin = Some(origin.to_path_buf());
        Ok(settings)
    }

    /// The settings file these settings came from.
    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    /// Definition file named by the settings, anchored to the settings file.
    pub fn definition_path(&self) -> Option<PathBuf> {
        self.definition.as_ref().map(|p| self.anchor(p))
    }

    /// Compile the configured definition schemas.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::SchemaFile` if a schema file cannot be read or
    /// parsed, or `SchemaError::Invalid` if it is not a valid JSON schema.
    pub fn definition_schemas(&self) -> Result<DefinitionSchemas> {
        Ok(DefinitionSchemas {
            server_user_defined: self.schema(
                self.schemas.server_user_defined.as_deref(),
                "server user_defined items",
            )?,
            group_user_defined: self.schema(
                self.schemas.group_user_defined.as_deref(),
                "server group user_defined items",
            )?,
        })
    }

    /// Compile the configured vault payload schema.
    pub fn vault_schema(&self) -> Result<Option<Schema>> {
        self.schema(self.schemas.vault_server.as_deref(), "vault server items")
    }

    fn schema(&self, path: Option<&Path>, target: &str) -> Result<Option<Schema>> {
        path.map(|p| load_schema(&self.anchor(p), target)).transpose()
    }

    fn anchor(&self, path: &Path) -> PathBuf {
        match self.origin.as_deref().and_then(Path::parent) {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

/// Read and compile a JSON or YAML schema file.
pub fn load_schema(path: &Path, target: &str) -> Result<Schema> {
    debug!(path = %path.display(), target, "loading schema");

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::SchemaFile {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    // YAML is a superset of JSON, so one parser covers both.
    let document: Value = serde_yaml::from_str(&contents).map_err(|e| ConfigError::SchemaFile {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Schema::compile(target, document)
}
