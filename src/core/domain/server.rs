//! Server entry.
//!
//! The openly readable portion of a single server from a definition file.

use serde::Serialize;

use crate::core::types::{Nickname, Payload};

/// A leaf server from a definition file.
///
/// Immutable once the definition file has been loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerEntry {
    nickname: Nickname,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    access_via: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_defined: Option<Payload>,
}

impl ServerEntry {
    pub(crate) fn new(
        nickname: Nickname,
        description: String,
        contact_name: Option<String>,
        access_via: Option<String>,
        user_defined: Option<Payload>,
    ) -> Self {
        Self {
            nickname,
            description,
            contact_name,
            access_via,
            user_defined,
        }
    }

    /// Nickname of the server (its key in the definition file)
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// Short description of the server
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Name of the technical contact
    pub fn contact_name(&self) -> Option<&str> {
        self.contact_name.as_deref()
    }

    /// Reminder on the network/firewall/proxy/VPN used to reach the server
    pub fn access_via(&self) -> Option<&str> {
        self.access_via.as_deref()
    }

    /// User-defined properties, passed through untouched
    pub fn user_defined(&self) -> Option<&Payload> {
        self.user_defined.as_ref()
    }
}

impl std::fmt::Display for ServerEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.nickname)
    }
}
