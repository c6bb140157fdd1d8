//! A definition file together with its vault.
//!
//! [`Inventory`] is the one-stop entry point: load a definition file and, if
//! it names a `vault_file`, the secret store behind it. Callers that only
//! need metadata can use [`Definition`] directly and never touch the vault.

use std::path::Path;

use tracing::debug;

use crate::core::bind;
use crate::core::cipher::Decrypt;
use crate::core::definition::{Definition, DefinitionSchemas};
use crate::core::domain::{GroupEntry, ResolvedServer, ServerEntry};
use crate::core::schema::Schema;
use crate::core::secrets::SecretStore;
use crate::error::{NotFoundError, Result};

/// Loaded definition and optional secret store.
#[derive(Debug, Clone)]
pub struct Inventory {
    definition: Definition,
    secrets: Option<SecretStore>,
}

impl Inventory {
    /// Load a definition file and the vault file it names.
    ///
    /// # Arguments
    ///
    /// * `path` - Definition file
    /// * `schemas` - Optional schemas for the `user_defined` items
    /// * `decrypt` - Provider for the vault file plaintext
    /// * `vault_schema` - Optional schema for each secret payload
    ///
    /// # Errors
    ///
    /// Any error from [`Definition::load`] or [`SecretStore::load`].
    pub fn load(
        path: impl AsRef<Path>,
        schemas: &DefinitionSchemas,
        decrypt: &dyn Decrypt,
        vault_schema: Option<&Schema>,
    ) -> Result<Self> {
        let definition = Definition::load(path, schemas)?;

        let secrets = match definition.vault_file() {
            Some(vault) => Some(SecretStore::load(vault, decrypt, vault_schema)?),
            None => {
                debug!(path = %definition.path().display(), "definition has no vault file");
                None
            }
        };

        Ok(Self { definition, secrets })
    }

    /// Combine an already loaded definition and secret store.
    pub fn from_parts(definition: Definition, secrets: Option<SecretStore>) -> Self {
        Self { definition, secrets }
    }

    pub fn definition(&self) -> &Definition {
        &self.definition
    }

    pub fn secrets(&self) -> Option<&SecretStore> {
        self.secrets.as_ref()
    }

    pub fn server(&self, nickname: &str) -> Option<&ServerEntry> {
        self.definition.server(nickname)
    }

    pub fn servers(&self) -> impl Iterator<Item = &ServerEntry> {
        self.definition.servers()
    }

    pub fn groups(&self) -> impl Iterator<Item = &GroupEntry> {
        self.definition.groups()
    }

    /// Resolve a nickname (or the default) into leaf servers.
    pub fn resolve(&self, nickname: Option<&str>) -> Result<Vec<&ServerEntry>> {
        self.definition.resolve(nickname)
    }

    /// Resolve a nickname and bind each server to its secrets.
    ///
    /// # Errors
    ///
    /// Returns `NotFoundError::NoSecretStore` if the definition names no
    /// vault file, plus any resolution or binding error.
    pub fn resolve_and_bind(&self, nickname: Option<&str>) -> Result<Vec<ResolvedServer>> {
        let store = self.secrets.as_ref().ok_or_else(|| NotFoundError::NoSecretStore {
            path: self.definition.path().to_path_buf(),
        })?;
        bind::resolve_and_bind(&self.definition, store, nickname)
    }
}
