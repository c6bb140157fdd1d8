//! Vault file decryption.
//!
//! The loaders never see ciphertext. They ask a [`Decrypt`] provider for the
//! plaintext of a vault file, and the provider decides how to get it.
//!
//! ## Providers
//!
//! - [`Plaintext`]: reads an unencrypted vault file as-is.
//! - [`Passphrase`]: decrypts an age passphrase-encrypted vault file with a
//!   known password.
//! - [`PasswordSource`](crate::core::password::PasswordSource): finds the
//!   password itself (environment, keyring, prompt).
//! - Any `Fn(&Path) -> Result<Zeroizing<String>>`, handy for in-memory fakes.

use std::path::Path;

use tracing::debug;
use zeroize::Zeroizing;

use crate::error::{CipherError, Error, FileKind, OpenError, Result};

mod age;

pub use self::age::{decrypt, encrypt, is_encrypted};

/// Decrypt provider for vault files.
pub trait Decrypt {
    /// Return the plaintext of the vault file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an `OpenError` if the file cannot be read or decrypted, or
    /// no password is available.
    fn decrypt(&self, path: &Path) -> Result<Zeroizing<String>>;
}

impl<F> Decrypt for F
where
    F: Fn(&Path) -> Result<Zeroizing<String>>,
{
    fn decrypt(&self, path: &Path) -> Result<Zeroizing<String>> {
        self(path)
    }
}

/// Provider for vault files stored unencrypted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plaintext;

impl Decrypt for Plaintext {
    fn decrypt(&self, path: &Path) -> Result<Zeroizing<String>> {
        let contents = read_vault(path)?;
        if is_encrypted(&contents) {
            return Err(OpenError::Decrypt {
                path: path.to_path_buf(),
                reason: "file is encrypted and no password was given".to_string(),
            }
            .into());
        }
        Ok(contents)
    }
}

/// Provider decrypting with a fixed password.
///
/// Unencrypted vault files pass through unchanged.
pub struct Passphrase {
    password: Zeroizing<String>,
}

impl Passphrase {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: Zeroizing::new(password.into()),
        }
    }
}

impl std::fmt::Debug for Passphrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Passphrase(..)")
    }
}

impl Decrypt for Passphrase {
    fn decrypt(&self, path: &Path) -> Result<Zeroizing<String>> {
        let contents = read_vault(path)?;
        if !is_encrypted(&contents) {
            debug!(path = %path.display(), "vault file is not encrypted");
            return Ok(contents);
        }
        decrypt_contents(path, &contents, &self.password)
    }
}

/// Read a vault file into zeroizing memory.
pub(crate) fn read_vault(path: &Path) -> Result<Zeroizing<String>> {
    std::fs::read_to_string(path)
        .map(Zeroizing::new)
        .map_err(|source| {
            OpenError::Read {
                kind: FileKind::Vault,
                path: path.to_path_buf(),
                source,
            }
            .into()
        })
}

/// Decrypt armored contents read from `path`, mapping failures to `OpenError`.
pub(crate) fn decrypt_contents(
    path: &Path,
    contents: &str,
    password: &str,
) -> Result<Zeroizing<String>> {
    decrypt(contents, password).map_err(|e| {
        OpenError::Decrypt {
            path: path.to_path_buf(),
            reason: match e {
                Error::Cipher(CipherError::DecryptionFailed(reason)) => reason,
                other => other.to_string(),
            },
        }
        .into()
    })
}
