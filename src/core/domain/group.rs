//! Server group entry.

use serde::Serialize;

use crate::core::types::{Nickname, Payload};

/// A server group from a definition file.
///
/// Members are nicknames of servers or other groups, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupEntry {
    nickname: Nickname,
    description: String,
    members: Vec<Nickname>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_defined: Option<Payload>,
}

impl GroupEntry {
    pub(crate) fn new(
        nickname: Nickname,
        description: String,
        members: Vec<Nickname>,
        user_defined: Option<Payload>,
    ) -> Self {
        Self {
            nickname,
            description,
            members,
            user_defined,
        }
    }

    /// Nickname of the group
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// Short description of the group
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Member nicknames in declaration order
    pub fn members(&self) -> &[Nickname] {
        &self.members
    }

    /// User-defined properties, passed through untouched
    pub fn user_defined(&self) -> Option<&Payload> {
        self.user_defined.as_ref()
    }
}

impl std::fmt::Display for GroupEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.nickname)
    }
}
