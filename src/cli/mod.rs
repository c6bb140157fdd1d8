//! Command-line interface.

pub mod completions;
pub mod context;
pub mod groups;
pub mod list;
pub mod output;
pub mod show;
pub mod vault;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::constants::FILE_ENV;
use context::Context;

/// Hostbook - Resolve server nicknames into server records bound to secrets.
#[derive(Parser)]
#[command(
    name = "hostbook",
    about = "Resolve server and server group nicknames into servers with their secrets",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Definition file (defaults to `definition` in .hostbook.toml)
    #[arg(short, long, global = true, env = FILE_ENV, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Never read or store vault passwords in the keyring
    #[arg(long, global = true)]
    pub no_keyring: bool,

    /// Never prompt for a vault password
    #[arg(long, global = true)]
    pub no_prompt: bool,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve a nickname and list its servers
    List {
        /// Server or server group nickname (defaults to `default`)
        nickname: Option<String>,
        /// List every server in the definition file
        #[arg(long, conflicts_with = "nickname")]
        all: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Print secret values instead of masking them
        #[arg(long)]
        show_secrets: bool,
    },

    /// Show a server or server group
    Show {
        /// Server or server group nickname
        nickname: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List server groups
    Groups {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect or convert the vault file
    Vault {
        #[command(subcommand)]
        action: VaultAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Vault subcommands.
#[derive(Subcommand)]
pub enum VaultAction {
    /// Show the vault file path and whether it is encrypted
    Status,

    /// List nicknames that have secrets
    Nicknames {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Encrypt the vault file in place
    Encrypt,

    /// Decrypt the vault file in place
    Decrypt,
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(cli: Cli) -> crate::error::Result<()> {
    use Command::*;

    if let Completions { shell } = cli.command {
        return completions::execute(shell);
    }

    let ctx = Context::new(cli.file, cli.no_keyring, cli.no_prompt)?;

    match cli.command {
        List {
            nickname,
            all,
            json,
            show_secrets,
        } => list::execute(&ctx, nickname.as_deref(), all, json, show_secrets),
        Show { nickname, json } => show::execute(&ctx, &nickname, json),
        Groups { json } => groups::execute(&ctx, json),
        Vault { action } => match action {
            VaultAction::Status => vault::status(&ctx),
            VaultAction::Nicknames { json } => vault::nicknames(&ctx, json),
            VaultAction::Encrypt => vault::encrypt(&ctx),
            VaultAction::Decrypt => vault::decrypt(&ctx),
        },
        Completions { .. } => Ok(()),
    }
}
