//! Resolved server.
//!
//! A server entry bound to its secret payload. Produced only by the binder.

use serde::Serialize;

use crate::core::domain::ServerEntry;
use crate::core::types::Payload;

/// A server with its secrets attached.
#[derive(Clone, PartialEq, Serialize)]
pub struct ResolvedServer {
    #[serde(flatten)]
    server: ServerEntry,
    secrets: Payload,
}

impl ResolvedServer {
    pub(crate) fn new(server: ServerEntry, secrets: Payload) -> Self {
        Self { server, secrets }
    }

    /// Nickname of the server
    pub fn nickname(&self) -> &str {
        self.server.nickname()
    }

    /// Short description of the server
    pub fn description(&self) -> &str {
        self.server.description()
    }

    /// Name of the technical contact
    pub fn contact_name(&self) -> Option<&str> {
        self.server.contact_name()
    }

    /// Reminder on how the server is reached
    pub fn access_via(&self) -> Option<&str> {
        self.server.access_via()
    }

    /// User-defined properties from the definition file
    pub fn user_defined(&self) -> Option<&Payload> {
        self.server.user_defined()
    }

    /// Secret payload from the vault file, verbatim
    pub fn secrets(&self) -> &Payload {
        &self.secrets
    }

    /// The openly readable part of this server
    pub fn server(&self) -> &ServerEntry {
        &self.server
    }
}

// Secrets are never printed by Debug.
impl std::fmt::Debug for ResolvedServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedServer")
            .field("nickname", &self.server.nickname())
            .field("description", &self.server.description())
            .field("contact_name", &self.server.contact_name())
            .field("access_via", &self.server.access_via())
            .field("user_defined", &self.server.user_defined())
            .field("secrets", &format_args!("{{...}}"))
            .finish()
    }
}

impl std::fmt::Display for ResolvedServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.server.nickname())
    }
}
