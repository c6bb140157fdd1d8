//! Secret store model.
//!
//! The decrypted content of a vault file: a mapping from server nickname to
//! an arbitrary secret payload. Nicknames here need not exist in any
//! definition file; the binder cross-checks lazily.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::debug;

use crate::core::cipher::Decrypt;
use crate::core::definition::raw::RawVault;
use crate::core::schema::{Schema, Violation};
use crate::core::types::{Nickname, Payload};
use crate::core::validation::is_valid_nickname;
use crate::error::{FileKind, FormatError, Result};

/// Secrets from a vault file, keyed by server nickname.
#[derive(Clone)]
pub struct SecretStore {
    path: PathBuf,
    entries: IndexMap<Nickname, Payload>,
}

impl std::fmt::Debug for SecretStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretStore")
            .field("path", &self.path)
            .field("nicknames", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl SecretStore {
    /// Load a vault file through a decrypt provider.
    ///
    /// # Arguments
    ///
    /// * `path` - Vault file path
    /// * `decrypt` - Provider returning the file's plaintext
    /// * `schema` - Optional schema every secret payload must satisfy
    ///
    /// # Errors
    ///
    /// Returns an `OpenError` from the provider, or a `FormatError` if the
    /// plaintext is not a valid vault document.
    pub fn load(
        path: impl AsRef<Path>,
        decrypt: &dyn Decrypt,
        schema: Option<&Schema>,
    ) -> Result<Self> {
        let path = std::path::absolute(path.as_ref())?;
        debug!(path = %path.display(), "loading vault file");

        let plaintext = decrypt.decrypt(&path)?;
        Self::from_yaml_str(&plaintext, &path, schema)
    }

    /// Build a secret store from decrypted YAML text.
    ///
    /// `origin` is the vault file path used in error messages.
    pub fn from_yaml_str(
        text: &str,
        origin: impl AsRef<Path>,
        schema: Option<&Schema>,
    ) -> Result<Self> {
        let path = std::path::absolute(origin.as_ref())?;

        // serde_yaml errors may quote the offending scalar; keep secrets out of them.
        let raw: RawVault = serde_yaml::from_str(text).map_err(|e| FormatError::Syntax {
            kind: FileKind::Vault,
            path: path.clone(),
            message: redact_location(&e),
        })?;
        let entries = raw.secrets.0;

        if let Some(nickname) = entries.keys().find(|n| !is_valid_nickname(n)) {
            return Err(FormatError::InvalidNickname {
                kind: FileKind::Vault,
                path,
                nickname: nickname.clone(),
            }
            .into());
        }

        if let Some(schema) = schema {
            for (nickname, payload) in &entries {
                if let Err(violation) = schema.validate(payload) {
                    return Err(FormatError::SecretPayload {
                        path,
                        nickname: nickname.clone(),
                        violation: redacted(violation),
                    }
                    .into());
                }
            }
        }

        debug!(entries = entries.len(), "vault file loaded");

        Ok(Self { path, entries })
    }

    /// Absolute path of the vault file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Secret payload for a nickname.
    pub fn get(&self, nickname: &str) -> Option<&Payload> {
        self.entries.get(nickname)
    }

    /// Nicknames with secrets, in document order.
    pub fn nicknames(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Drop the message of a violation found in a secret payload.
///
/// `jsonschema` messages embed the offending value.
fn redacted(violation: Violation) -> Violation {
    Violation {
        path: violation.path,
        message: "value does not match the schema".to_string(),
    }
}

/// Error text for a vault parse failure, without the offending value.
fn redact_location(err: &serde_yaml::Error) -> String {
    match err.location() {
        Some(loc) => format!(
            "invalid vault document at line {} column {}",
            loc.line(),
            loc.column()
        ),
        None => "invalid vault document".to_string(),
    }
}
