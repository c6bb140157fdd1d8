//! Error types.
//!
//! Every fallible operation returns [`Result`], whose error is one of the
//! domain enums below wrapped in [`Error`].

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::schema::Violation;

/// Which input file an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Definition,
    Vault,
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileKind::Definition => write!(f, "definition file"),
            FileKind::Vault => write!(f, "vault file"),
        }
    }
}

/// Which kind of definition item an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Server,
    Group,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Server => write!(f, "server"),
            ItemKind::Group => write!(f, "server group"),
        }
    }
}

/// Structural or schema violation in a definition file or vault file.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("invalid format in {kind} {}: {message}", .path.display())]
    Syntax {
        kind: FileKind,
        path: PathBuf,
        message: String,
    },

    #[error(
        "invalid nickname '{nickname}' in {kind} {}: only A-Z, a-z, 0-9 and underscore are allowed",
        .path.display()
    )]
    InvalidNickname {
        kind: FileKind,
        path: PathBuf,
        nickname: String,
    },

    #[error("no servers defined in definition file {}", .path.display())]
    NoServers { path: PathBuf },

    #[error("server group '{group}' has no members in definition file {}", .path.display())]
    EmptyGroup { path: PathBuf, group: String },

    #[error(
        "nickname '{nickname}' is used for both a server and a server group in definition file {}",
        .path.display()
    )]
    Collision { path: PathBuf, nickname: String },

    #[error(
        "nickname '{member}' in server group '{group}' (server_groups.{group}.members) not found in servers or groups in definition file {}",
        .path.display()
    )]
    UnknownMember {
        path: PathBuf,
        group: String,
        member: String,
    },

    #[error(
        "default nickname '{nickname}' not found in servers or groups in definition file {}",
        .path.display()
    )]
    UnknownDefault { path: PathBuf, nickname: String },

    #[error(
        "server group cycle {} in definition file {}",
        .chain.join(" -> "),
        .path.display()
    )]
    Cycle { path: PathBuf, chain: Vec<String> },

    #[error(
        "missing user_defined element for {item} '{nickname}' in definition file {}",
        .path.display()
    )]
    MissingUserDefined {
        path: PathBuf,
        item: ItemKind,
        nickname: String,
    },

    #[error(
        "invalid user_defined element for {item} '{nickname}' in definition file {}: validation failed on {violation}",
        .path.display()
    )]
    UserDefined {
        path: PathBuf,
        item: ItemKind,
        nickname: String,
        violation: Violation,
    },

    #[error(
        "invalid secrets for '{nickname}' in vault file {}: validation failed on {violation}",
        .path.display()
    )]
    SecretPayload {
        path: PathBuf,
        nickname: String,
        violation: Violation,
    },
}

/// A file could not be read, decrypted, or unlocked.
#[derive(Error, Debug)]
pub enum OpenError {
    #[error("cannot open {kind} {}: {source}", .path.display())]
    Read {
        kind: FileKind,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot decrypt vault file {}: {reason}", .path.display())]
    Decrypt { path: PathBuf, reason: String },

    #[error("no password available for vault file {}", .path.display())]
    NoPassword { path: PathBuf },

    #[error("password prompt failed: {0}")]
    Prompt(String),
}

/// A requested nickname, default, or secret entry does not exist.
#[derive(Error, Debug)]
pub enum NotFoundError {
    #[error(
        "server or server group '{nickname}' not found in definition file {}",
        .path.display()
    )]
    Nickname { path: PathBuf, nickname: String },

    #[error(
        "no default server or server group configured in definition file {}",
        .path.display()
    )]
    NoDefault { path: PathBuf },

    #[error("server '{nickname}' not found in vault file {}", .path.display())]
    Secret { path: PathBuf, nickname: String },

    #[error("definition file {} does not specify a vault file", .path.display())]
    NoSecretStore { path: PathBuf },
}

/// A caller-supplied schema is not a valid JSON schema.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("invalid JSON schema for {target}: {message}")]
    Invalid { target: String, message: String },
}

/// Vault file encryption and decryption failures.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("armor encoding failed: {0}")]
    ArmorFailed(String),

    #[error("vault file {} is already encrypted", .path.display())]
    AlreadyEncrypted { path: PathBuf },

    #[error("vault file {} is not encrypted", .path.display())]
    NotEncrypted { path: PathBuf },
}

/// Settings file and CLI configuration failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read settings file {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid settings file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("no definition file given")]
    NoDefinitionFile,

    #[error("cannot load schema file {}: {message}", .path.display())]
    SchemaFile { path: PathBuf, message: String },
}

/// Crate-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Open(#[from] OpenError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True for load-time format violations.
    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format(_))
    }

    /// True for open, read, and decrypt failures.
    pub fn is_open(&self) -> bool {
        matches!(self, Error::Open(_))
    }

    /// True when a nickname, default, or secret entry is missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
