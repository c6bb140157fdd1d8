//! Vault commands.
//!
//! Inspect the vault file named by the definition, and convert it between
//! plaintext and age passphrase encryption in place.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde_json::json;
use tracing::info;

use crate::cli::context::Context;
use crate::cli::output;
use crate::core::cipher;
use crate::core::secrets::SecretStore;
use crate::error::{CipherError, FileKind, OpenError, Result};

/// Show the vault file path and state.
pub fn status(ctx: &Context) -> Result<()> {
    let definition = ctx.definition()?;
    let path = ctx.vault_path(&definition)?;

    output::header("Vault");
    output::kv("path", output::path(&path));

    let state = match fs::read_to_string(&path) {
        Ok(contents) if cipher::is_encrypted(&contents) => "encrypted",
        Ok(_) => "plaintext",
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => "missing",
        Err(source) => {
            return Err(OpenError::Read {
                kind: FileKind::Vault,
                path,
                source,
            }
            .into())
        }
    };
    output::kv("state", state);

    Ok(())
}

/// List the nicknames in the vault, flagging ones the definition lacks.
pub fn nicknames(ctx: &Context, json: bool) -> Result<()> {
    let definition = ctx.definition()?;
    let store = ctx.require_secrets(&definition)?;

    if json {
        let records: Vec<_> = store
            .nicknames()
            .map(|n| json!({ "nickname": n, "defined": definition.server(n).is_some() }))
            .collect();
        return output::json(&records);
    }

    if store.is_empty() {
        output::dimmed("no secrets stored");
        return Ok(());
    }

    for nickname in store.nicknames() {
        if definition.server(nickname).is_some() {
            output::list_item(nickname);
        } else {
            output::list_item(&format!("{} (not a server in the definition file)", nickname));
        }
    }

    Ok(())
}

/// Encrypt a plaintext vault file in place.
pub fn encrypt(ctx: &Context) -> Result<()> {
    let definition = ctx.definition()?;
    let path = ctx.vault_path(&definition)?;

    let contents = cipher::read_vault(&path)?;
    if cipher::is_encrypted(&contents) {
        return Err(CipherError::AlreadyEncrypted { path }.into());
    }

    // Refuse to lock away a document that would not load afterwards.
    let schema = ctx.vault_schema()?;
    let store = SecretStore::from_yaml_str(&contents, &path, schema.as_ref())?;

    let passwords = ctx.passwords();
    let (password, _) = passwords.new_password(&path)?;
    let encrypted = cipher::encrypt(&contents, &password)?;
    write_private(&path, encrypted.as_bytes())?;
    passwords.remember(&path, &password);

    info!(path = %path.display(), entries = store.len(), "vault file encrypted");
    output::success(&format!("encrypted {}", output::path(&path)));

    Ok(())
}

/// Decrypt an encrypted vault file in place.
pub fn decrypt(ctx: &Context) -> Result<()> {
    let definition = ctx.definition()?;
    let path = ctx.vault_path(&definition)?;

    let contents = cipher::read_vault(&path)?;
    if !cipher::is_encrypted(&contents) {
        return Err(CipherError::NotEncrypted { path }.into());
    }

    let passwords = ctx.passwords();
    let (password, _) = passwords.password(&path)?;
    let plaintext = cipher::decrypt_contents(&path, &contents, &password)?;
    write_private(&path, plaintext.as_bytes())?;

    info!(path = %path.display(), "vault file decrypted");
    output::success(&format!("decrypted {}", output::path(&path)));
    output::warn("the vault file is now plaintext, do not commit it");

    Ok(())
}

/// Overwrite a vault file, readable by the owner only.
fn write_private(path: &Path, contents: &[u8]) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

        let mut file = fs::OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .mode(0o600)
            .open(path)?;
        file.write_all(contents)?;
        file.flush()?;

        // mode() only applies to newly created files.
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }

    #[cfg(not(unix))]
    {
        let mut file = fs::File::create(path)?;
        file.write_all(contents)?;
        file.flush()?;
    }

    Ok(())
}
