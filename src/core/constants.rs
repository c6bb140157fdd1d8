//! Constants used throughout hostbook.
//!
//! Centralizes magic strings and configuration values.

/// Settings file name looked up in the current directory (.hostbook.toml).
pub const SETTINGS_FILE: &str = ".hostbook.toml";

/// Settings directory name below the platform config dir.
pub const SETTINGS_DIR: &str = "hostbook";

/// Settings file name inside [`SETTINGS_DIR`].
pub const SETTINGS_DIR_FILE: &str = "config.toml";

/// Environment variable holding the vault password (CI use).
pub const PASSWORD_ENV: &str = "HOSTBOOK_VAULT_PASSWORD";

/// Environment variable naming the definition file.
pub const FILE_ENV: &str = "HOSTBOOK_FILE";

/// Environment variable controlling the log filter.
pub const LOG_ENV: &str = "HOSTBOOK_LOG";

/// Keychain service name under which vault passwords are stored.
pub const KEYCHAIN_SERVICE: &str = "hostbook";

/// First line of an ASCII-armored age file.
pub const ARMOR_HEADER: &str = "-----BEGIN AGE ENCRYPTED FILE-----";
