//! Hostbook - Resolve server nicknames into server records bound to secrets.
//!
//! A definition file lists servers and server groups by nickname. A separate,
//! usually encrypted, vault file holds one secret payload per server. Hostbook
//! expands a nickname into the ordered list of servers it stands for and
//! attaches each server's secrets.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── list          # Resolve and print servers
//! │   ├── show          # One server's details
//! │   ├── groups        # Server groups
//! │   ├── vault         # Vault status, encrypt, decrypt
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── definition/   # Definition file model and validation
//!     ├── secrets       # Vault file model
//!     ├── resolve       # Nickname resolution
//!     ├── bind          # Secret binding
//!     ├── schema        # JSON schema validation
//!     ├── cipher/       # Decrypt providers, age passphrase encryption
//!     ├── password/     # Password sources and keyring
//!     ├── inventory     # Definition plus vault facade
//!     └── config        # .hostbook.toml settings
//! ```
//!
//! # Example
//!
//! ```no_run
//! use hostbook::core::cipher::Passphrase;
//! use hostbook::core::definition::{Definition, DefinitionSchemas};
//! use hostbook::core::secrets::SecretStore;
//!
//! # fn main() -> hostbook::error::Result<()> {
//! let definition = Definition::load("servers.yaml", &DefinitionSchemas::default())?;
//! let store = SecretStore::load("vault.yml", &Passphrase::new("secret"), None)?;
//!
//! for server in hostbook::resolve_and_bind(&definition, &store, Some("webfarm"))? {
//!     println!("{} {}", server.nickname(), server.secrets());
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::bind::{bind, resolve_and_bind};
pub use crate::core::config::Settings;
pub use crate::core::definition::{Definition, DefinitionSchemas};
pub use crate::core::domain::{GroupEntry, ResolvedServer, ServerEntry};
pub use crate::core::inventory::Inventory;
pub use crate::core::resolve::resolve;
pub use crate::core::schema::Schema;
pub use crate::core::secrets::SecretStore;
pub use crate::error::{Error, Result};
