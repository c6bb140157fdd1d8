//! Hostbook - Resolve server nicknames into server records bound to secrets.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hostbook::cli::output;
use hostbook::cli::{execute, Cli};
use hostbook::core::constants::{LOG_ENV, PASSWORD_ENV};
use hostbook::error::{ConfigError, Error, NotFoundError, OpenError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("hostbook=debug")
        } else {
            EnvFilter::new("hostbook=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Config(ConfigError::NoDefinitionFile) => {
                Some("pass --file <PATH> or set HOSTBOOK_FILE".to_string())
            }
            Error::Open(OpenError::NoPassword { .. }) => {
                Some(format!("set {} or run from a terminal", PASSWORD_ENV))
            }
            Error::NotFound(NotFoundError::NoDefault { .. }) => {
                Some("name a server or group: hostbook list <NICKNAME>".to_string())
            }
            Error::NotFound(NotFoundError::Nickname { .. }) => {
                Some("run: hostbook list --all".to_string())
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}
