//! Vault password acquisition.
//!
//! A [`PasswordSource`] tries each enabled source in order:
//!
//! 1. an explicit password given by the caller
//! 2. the `HOSTBOOK_VAULT_PASSWORD` environment variable
//! 3. the keyring, keyed by the absolute vault path
//! 4. a hidden prompt, when stdin is a terminal
//!
//! It is itself a [`Decrypt`] provider. After a successful decrypt with a
//! password that did not come from the keyring, the password is written back
//! to the keyring.

use std::io::{self, IsTerminal};
use std::path::Path;

use dialoguer::Password;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::core::cipher::{self, Decrypt};
use crate::core::constants::PASSWORD_ENV;
use crate::error::{OpenError, Result};

pub mod keychain;

/// Where a password came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Explicit,
    Environment,
    Keyring,
    Prompt,
}

/// Ordered password sources.
#[derive(Clone)]
pub struct PasswordSource {
    explicit: Option<Zeroizing<String>>,
    env: bool,
    keyring: bool,
    prompt: bool,
}

impl Default for PasswordSource {
    fn default() -> Self {
        Self {
            explicit: None,
            env: true,
            keyring: true,
            prompt: true,
        }
    }
}

impl std::fmt::Debug for PasswordSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordSource")
            .field("explicit", &self.explicit.is_some())
            .field("env", &self.env)
            .field("keyring", &self.keyring)
            .field("prompt", &self.prompt)
            .finish()
    }
}

impl PasswordSource {
    /// All sources enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use this password before any other source.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.explicit = Some(Zeroizing::new(password.into()));
        self
    }

    pub fn env(mut self, enabled: bool) -> Self {
        self.env = enabled;
        self
    }

    pub fn keyring(mut self, enabled: bool) -> Self {
        self.keyring = enabled;
        self
    }

    pub fn prompt(mut self, enabled: bool) -> Self {
        self.prompt = enabled;
        self
    }

    /// Obtain a password for the vault file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `OpenError::NoPassword` if no source yields a password, or
    /// `OpenError::Prompt` if the prompt fails.
    pub fn password(&self, path: &Path) -> Result<(Zeroizing<String>, Origin)> {
        self.lookup(path, false)
    }

    /// Obtain a new password for encrypting the vault file at `path`.
    ///
    /// Same order as [`password`](Self::password), but the keyring is skipped
    /// and the prompt asks for confirmation.
    pub fn new_password(&self, path: &Path) -> Result<(Zeroizing<String>, Origin)> {
        self.lookup(path, true)
    }

    fn lookup(&self, path: &Path, confirm: bool) -> Result<(Zeroizing<String>, Origin)> {
        if let Some(password) = &self.explicit {
            debug!("using explicit vault password");
            return Ok((password.clone(), Origin::Explicit));
        }

        if self.env {
            match std::env::var(PASSWORD_ENV) {
                Ok(password) if !password.is_empty() => {
                    debug!(var = PASSWORD_ENV, "using vault password from environment");
                    return Ok((Zeroizing::new(password), Origin::Environment));
                }
                Ok(_) => warn!(var = PASSWORD_ENV, "ignoring empty password variable"),
                Err(_) => {}
            }
        }

        if self.keyring && !confirm {
            if let Some(password) = keychain::load(&account(path)) {
                return Ok((password, Origin::Keyring));
            }
        }

        if self.prompt {
            if io::stdin().is_terminal() {
                return prompt(path, confirm).map(|p| (p, Origin::Prompt));
            }
            debug!("stdin is not a terminal, not prompting");
        }

        Err(OpenError::NoPassword {
            path: path.to_path_buf(),
        }
        .into())
    }

    /// Save a password to the keyring, if enabled.
    pub fn remember(&self, path: &Path, password: &str) {
        if self.keyring {
            keychain::store(&account(path), password);
        }
    }
}

impl Decrypt for PasswordSource {
    fn decrypt(&self, path: &Path) -> Result<Zeroizing<String>> {
        let contents = cipher::read_vault(path)?;
        if !cipher::is_encrypted(&contents) {
            debug!(path = %path.display(), "vault file is not encrypted");
            return Ok(contents);
        }

        let (password, origin) = self.password(path)?;
        let plaintext = cipher::decrypt_contents(path, &contents, &password)?;

        if origin != Origin::Keyring {
            self.remember(path, &password);
        }

        Ok(plaintext)
    }
}

/// Keyring account for a vault file.
fn account(path: &Path) -> String {
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

fn prompt(path: &Path, confirm: bool) -> Result<Zeroizing<String>> {
    let mut input = Password::new().with_prompt(format!("Password for {}", path.display()));
    if confirm {
        input = input.with_confirmation("Confirm password", "passwords do not match");
    }
    let password = input
        .interact()
        .map_err(|e| OpenError::Prompt(e.to_string()))?;
    Ok(Zeroizing::new(password))
}
