//! Age passphrase encryption.
//!
//! Vault files are encrypted to a single scrypt recipient and stored with
//! ASCII armor.

use std::io::{Read, Write};

use ::age::secrecy::SecretString;
use tracing::trace;
use zeroize::Zeroizing;

use crate::core::constants::ARMOR_HEADER;
use crate::error::{CipherError, Result};

/// Encrypt plaintext with a password.
///
/// # Returns
///
/// ASCII-armored age ciphertext.
///
/// # Errors
///
/// Returns `CipherError` if encryption fails at any stage.
pub fn encrypt(plaintext: &str, password: &str) -> Result<String> {
    trace!(plaintext_len = plaintext.len(), "encrypting");

    let encryptor =
        ::age::Encryptor::with_user_passphrase(SecretString::from(password.to_string()));

    let mut encrypted = Vec::new();
    let armor = ::age::armor::ArmoredWriter::wrap_output(
        &mut encrypted,
        ::age::armor::Format::AsciiArmor,
    )
    .map_err(|e| CipherError::ArmorFailed(format!("{}", e)))?;
    let mut writer = encryptor
        .wrap_output(armor)
        .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;

    writer.write_all(plaintext.as_bytes())?;
    let armored = writer
        .finish()
        .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;
    armored
        .finish()
        .map_err(|e| CipherError::ArmorFailed(format!("{}", e)))?;

    trace!(ciphertext_len = encrypted.len(), "encrypted");

    String::from_utf8(encrypted)
        .map_err(|e| CipherError::EncryptionFailed(format!("UTF-8 error: {}", e)).into())
}

/// Decrypt armored age ciphertext with a password.
///
/// # Errors
///
/// Returns `CipherError::DecryptionFailed` if the input is not passphrase
/// encrypted age, or the password is wrong.
pub fn decrypt(encrypted: &str, password: &str) -> Result<Zeroizing<String>> {
    trace!(ciphertext_len = encrypted.len(), "decrypting");

    let reader = ::age::armor::ArmoredReader::new(encrypted.as_bytes());
    let decryptor =
        ::age::Decryptor::new(reader).map_err(|e| CipherError::DecryptionFailed(format!("{}", e)))?;

    if !decryptor.is_scrypt() {
        return Err(CipherError::DecryptionFailed(
            "file is not encrypted with a passphrase".to_string(),
        )
        .into());
    }

    let identity = ::age::scrypt::Identity::new(SecretString::from(password.to_string()));
    let mut reader = decryptor
        .decrypt(std::iter::once(&identity as &dyn ::age::Identity))
        .map_err(|e| CipherError::DecryptionFailed(format!("{}", e)))?;

    let mut decrypted = Zeroizing::new(Vec::new());
    reader.read_to_end(&mut decrypted)?;

    trace!(plaintext_len = decrypted.len(), "decrypted");

    String::from_utf8(std::mem::take(&mut *decrypted))
        .map(Zeroizing::new)
        .map_err(|e| CipherError::DecryptionFailed(format!("UTF-8 error: {}", e)).into())
}

/// Whether file contents look like armored age ciphertext.
pub fn is_encrypted(contents: &str) -> bool {
    contents.trim_start().starts_with(ARMOR_HEADER)
}
