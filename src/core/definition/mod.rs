//! Definition model.
//!
//! Loads and validates a definition file: the openly readable servers,
//! server groups, an optional default nickname, and an optional reference
//! to the vault file holding the secrets.
//!
//! All checks happen at load time. A [`Definition`] that exists is
//! consistent: nicknames are valid and unique across servers and groups,
//! every group member and the default exist, and the group graph is acyclic.

mod graph;
pub(crate) mod raw;

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::debug;

use crate::core::domain::{GroupEntry, ServerEntry};
use crate::core::resolve;
use crate::core::schema::Schema;
use crate::core::types::{Nickname, Payload};
use crate::core::validation::is_valid_nickname;
use crate::error::{FileKind, FormatError, ItemKind, OpenError, Result};

use raw::{RawDefinition, RawGroup, RawServer};

/// Optional schemas for the user-defined portions of a definition file.
#[derive(Debug, Clone, Default)]
pub struct DefinitionSchemas {
    /// Applied to `user_defined` of every server item
    pub server_user_defined: Option<Schema>,
    /// Applied to `user_defined` of every server group item
    pub group_user_defined: Option<Schema>,
}

/// A loaded and validated definition file.
#[derive(Debug, Clone)]
pub struct Definition {
    path: PathBuf,
    vault_file: Option<PathBuf>,
    default: Option<Nickname>,
    servers: IndexMap<Nickname, ServerEntry>,
    groups: IndexMap<Nickname, GroupEntry>,
}

impl Definition {
    /// Load a definition file.
    ///
    /// # Arguments
    ///
    /// * `path` - Definition file; relative paths are relative to the current directory
    /// * `schemas` - Optional schemas for the `user_defined` items
    ///
    /// # Errors
    ///
    /// Returns `OpenError::Read` if the file cannot be read, or a `FormatError`
    /// if its content is invalid.
    pub fn load(path: impl AsRef<Path>, schemas: &DefinitionSchemas) -> Result<Self> {
        let path = std::path::absolute(path.as_ref())?;
        debug!(path = %path.display(), "loading definition file");

        let contents = fs::read_to_string(&path).map_err(|source| OpenError::Read {
            kind: FileKind::Definition,
            path: path.clone(),
            source,
        })?;

        Self::from_yaml_str(&contents, &path, schemas)
    }

    /// Build a definition from YAML text already in memory.
    ///
    /// `origin` is the path the text came from. It appears in error messages
    /// and anchors a relative `vault_file`.
    pub fn from_yaml_str(
        text: &str,
        origin: impl AsRef<Path>,
        schemas: &DefinitionSchemas,
    ) -> Result<Self> {
        let path = std::path::absolute(origin.as_ref())?;

        let raw: RawDefinition = serde_yaml::from_str(text).map_err(|e| FormatError::Syntax {
            kind: FileKind::Definition,
            path: path.clone(),
            message: e.to_string(),
        })?;

        let definition = Self::from_raw(raw, path, schemas)?;

        debug!(
            servers = definition.servers.len(),
            groups = definition.groups.len(),
            default = definition.default.as_deref().unwrap_or("-"),
            "definition file loaded"
        );

        Ok(definition)
    }

    fn from_raw(raw: RawDefinition, path: PathBuf, schemas: &DefinitionSchemas) -> Result<Self> {
        let raw_servers = raw.servers.0;
        let raw_groups = raw.server_groups.unwrap_or_default().0;

        if raw_servers.is_empty() {
            return Err(FormatError::NoServers { path }.into());
        }

        for nickname in raw_servers.keys().chain(raw_groups.keys()) {
            if !is_valid_nickname(nickname) {
                return Err(FormatError::InvalidNickname {
                    kind: FileKind::Definition,
                    path,
                    nickname: nickname.clone(),
                }
                .into());
            }
        }

        for (nickname, group) in &raw_groups {
            if group.members.is_empty() {
                return Err(FormatError::EmptyGroup {
                    path,
                    group: nickname.clone(),
                }
                .into());
            }
            if raw_servers.contains_key(nickname) {
                return Err(FormatError::Collision {
                    path,
                    nickname: nickname.clone(),
                }
                .into());
            }
        }

        if let Some(schema) = &schemas.server_user_defined {
            for (nickname, server) in &raw_servers {
                check_user_defined(
                    &path,
                    ItemKind::Server,
                    nickname,
                    server.user_defined.as_ref(),
                    schema,
                )?;
            }
        }
        if let Some(schema) = &schemas.group_user_defined {
            for (nickname, group) in &raw_groups {
                check_user_defined(
                    &path,
                    ItemKind::Group,
                    nickname,
                    group.user_defined.as_ref(),
                    schema,
                )?;
            }
        }

        let known = |nickname: &str| {
            raw_servers.contains_key(nickname) || raw_groups.contains_key(nickname)
        };

        if let Some(default) = &raw.default {
            if !known(default.as_str()) {
                return Err(FormatError::UnknownDefault {
                    path,
                    nickname: default.clone(),
                }
                .into());
            }
        }

        for (nickname, group) in &raw_groups {
            if let Some(member) = group.members.iter().find(|m| !known(m.as_str())) {
                return Err(FormatError::UnknownMember {
                    path,
                    group: nickname.clone(),
                    member: member.clone(),
                }
                .into());
            }
        }

        let servers: IndexMap<Nickname, ServerEntry> = raw_servers
            .into_iter()
            .map(|(nickname, server)| {
                let entry = server_entry(nickname.clone(), server);
                (nickname, entry)
            })
            .collect();
        let groups: IndexMap<Nickname, GroupEntry> = raw_groups
            .into_iter()
            .map(|(nickname, group)| {
                let entry = group_entry(nickname.clone(), group);
                (nickname, entry)
            })
            .collect();

        if let Some(chain) = graph::find_cycle(&groups) {
            return Err(FormatError::Cycle { path, chain }.into());
        }

        let vault_file = raw.vault_file.map(|file| {
            let file = PathBuf::from(file);
            match path.parent() {
                Some(dir) if file.is_relative() => dir.join(file),
                _ => file,
            }
        });

        Ok(Self {
            path,
            vault_file,
            default: raw.default,
            servers,
            groups,
        })
    }

    /// Absolute path of the definition file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Absolute path of the vault file, if the definition names one.
    ///
    /// A relative `vault_file` is relative to the definition file's directory.
    pub fn vault_file(&self) -> Option<&Path> {
        self.vault_file.as_deref()
    }

    /// Nickname of the default server or group.
    pub fn default_nickname(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// Server with the given nickname.
    pub fn server(&self, nickname: &str) -> Option<&ServerEntry> {
        self.servers.get(nickname)
    }

    /// Server group with the given nickname.
    pub fn group(&self, nickname: &str) -> Option<&GroupEntry> {
        self.groups.get(nickname)
    }

    /// Whether the nickname names a server or a group.
    pub fn contains(&self, nickname: &str) -> bool {
        self.servers.contains_key(nickname) || self.groups.contains_key(nickname)
    }

    /// All servers, in declaration order.
    pub fn servers(&self) -> impl Iterator<Item = &ServerEntry> {
        self.servers.values()
    }

    /// All server groups, in declaration order.
    pub fn groups(&self) -> impl Iterator<Item = &GroupEntry> {
        self.groups.values()
    }

    /// Resolve a nickname into its servers.
    ///
    /// See [`resolve::resolve`].
    pub fn resolve(&self, nickname: Option<&str>) -> Result<Vec<&ServerEntry>> {
        resolve::resolve(self, nickname)
    }
}

fn check_user_defined(
    path: &Path,
    item: ItemKind,
    nickname: &str,
    user_defined: Option<&Payload>,
    schema: &Schema,
) -> Result<()> {
    let Some(value) = user_defined else {
        return Err(FormatError::MissingUserDefined {
            path: path.to_path_buf(),
            item,
            nickname: nickname.to_string(),
        }
        .into());
    };

    schema.validate(value).map_err(|violation| {
        FormatError::UserDefined {
            path: path.to_path_buf(),
            item,
            nickname: nickname.to_string(),
            violation,
        }
        .into()
    })
}

fn server_entry(nickname: Nickname, raw: RawServer) -> ServerEntry {
    ServerEntry::new(
        nickname,
        raw.description,
        raw.contact_name,
        raw.access_via,
        raw.user_defined,
    )
}

fn group_entry(nickname: Nickname, raw: RawGroup) -> GroupEntry {
    GroupEntry::new(nickname, raw.description, raw.members, raw.user_defined)
}
