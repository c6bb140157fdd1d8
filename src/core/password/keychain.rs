//! Keyring storage for vault passwords.
//!
//! On macOS passwords live in the login Keychain under the `hostbook`
//! service, one item per absolute vault path. Elsewhere there is no keyring
//! and every lookup misses.
//!
//! Keyring failures are never fatal. They are logged and treated as a miss.

use zeroize::Zeroizing;

#[cfg(target_os = "macos")]
mod imp {
    use security_framework::passwords::{get_generic_password, set_generic_password};
    use tracing::{debug, info, warn};
    use zeroize::Zeroizing;

    use crate::core::constants::KEYCHAIN_SERVICE;

    /// errSecItemNotFound
    const ITEM_NOT_FOUND: i32 = -25300;
    /// errSecUserCanceled
    const USER_CANCELED: i32 = -128;

    pub fn load(account: &str) -> Option<Zeroizing<String>> {
        match get_generic_password(KEYCHAIN_SERVICE, account) {
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(password) => {
                    info!(account = %account, "loaded vault password from Keychain");
                    Some(Zeroizing::new(password))
                }
                Err(_) => {
                    warn!(account = %account, "ignoring non UTF-8 Keychain item");
                    None
                }
            },
            Err(e) if e.code() == ITEM_NOT_FOUND => {
                debug!(account = %account, "no vault password in Keychain");
                None
            }
            Err(e) if e.code() == USER_CANCELED => {
                warn!(account = %account, "Keychain access cancelled");
                None
            }
            Err(e) => {
                warn!(
                    account = %account,
                    error_code = e.code(),
                    error = %e,
                    "Keychain lookup failed"
                );
                None
            }
        }
    }

    pub fn store(account: &str, password: &str) -> bool {
        match set_generic_password(KEYCHAIN_SERVICE, account, password.as_bytes()) {
            Ok(()) => {
                info!(account = %account, "stored vault password in Keychain");
                true
            }
            Err(e) => {
                warn!(
                    account = %account,
                    error_code = e.code(),
                    error = %e,
                    "failed to store vault password in Keychain"
                );
                false
            }
        }
    }
}

#[cfg(not(target_os = "macos"))]
mod imp {
    use tracing::trace;
    use zeroize::Zeroizing;

    pub fn load(account: &str) -> Option<Zeroizing<String>> {
        trace!(account = %account, "no keyring on this platform");
        None
    }

    pub fn store(account: &str, _password: &str) -> bool {
        trace!(account = %account, "no keyring on this platform");
        false
    }
}

/// Look up the stored password for a vault account.
pub fn load(account: &str) -> Option<Zeroizing<String>> {
    imp::load(account)
}

/// Store a password for a vault account, replacing any previous one.
///
/// Returns whether the password was stored.
pub fn store(account: &str, password: &str) -> bool {
    imp::store(account, password)
}
