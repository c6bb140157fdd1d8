//! Per-invocation state shared by the commands.
//!
//! Combines the global flags with the settings file and knows how to load
//! the definition file and its vault.

use std::path::PathBuf;

use tracing::debug;

use crate::core::config::Settings;
use crate::core::definition::Definition;
use crate::core::password::PasswordSource;
use crate::core::secrets::SecretStore;
use crate::error::{ConfigError, NotFoundError, Result};

/// Flags and settings for one command.
pub struct Context {
    settings: Settings,
    file: Option<PathBuf>,
    keyring: bool,
    prompt: bool,
}

impl Context {
    /// Load settings and merge the global flags over them.
    pub fn new(file: Option<PathBuf>, no_keyring: bool, no_prompt: bool) -> Result<Self> {
        let settings = Settings::load()?;
        let keyring = settings.password.keyring && !no_keyring;
        let prompt = settings.password.prompt && !no_prompt;
        debug!(keyring, prompt, "password sources");

        Ok(Self {
            settings,
            file,
            keyring,
            prompt,
        })
    }

    /// The definition file to use; `--file` wins over the settings file.
    pub fn definition_path(&self) -> Result<PathBuf> {
        self.file
            .clone()
            .or_else(|| self.settings.definition_path())
            .ok_or_else(|| ConfigError::NoDefinitionFile.into())
    }

    /// Load and validate the definition file.
    pub fn definition(&self) -> Result<Definition> {
        let schemas = self.settings.definition_schemas()?;
        Definition::load(self.definition_path()?, &schemas)
    }

    /// The vault file named by a definition.
    pub fn vault_path(&self, definition: &Definition) -> Result<PathBuf> {
        definition
            .vault_file()
            .map(|p| p.to_path_buf())
            .ok_or_else(|| {
                NotFoundError::NoSecretStore {
                    path: definition.path().to_path_buf(),
                }
                .into()
            })
    }

    /// Password sources allowed for this invocation.
    pub fn passwords(&self) -> PasswordSource {
        PasswordSource::new().keyring(self.keyring).prompt(self.prompt)
    }

    /// Load the vault file named by a definition, if it names one.
    pub fn secrets(&self, definition: &Definition) -> Result<Option<SecretStore>> {
        let Some(path) = definition.vault_file() else {
            return Ok(None);
        };
        let schema = self.settings.vault_schema()?;
        SecretStore::load(path, &self.passwords(), schema.as_ref()).map(Some)
    }

    /// Load the vault file, failing if the definition names none.
    pub fn require_secrets(&self, definition: &Definition) -> Result<SecretStore> {
        let path = self.vault_path(definition)?;
        let schema = self.settings.vault_schema()?;
        SecretStore::load(path, &self.passwords(), schema.as_ref())
    }

    /// Schema applied to vault payloads before encryption.
    pub fn vault_schema(&self) -> Result<Option<crate::core::schema::Schema>> {
        self.settings.vault_schema()
    }
}
