//! List command.
//!
//! Resolve a nickname and print the servers it stands for, with their
//! secrets when the definition names a vault file.

use serde_json::Value;
use tracing::info;

use crate::cli::context::Context;
use crate::cli::output;
use crate::core::bind;
use crate::core::domain::{ResolvedServer, ServerEntry};
use crate::error::Result;

/// Resolve and print servers.
pub fn execute(
    ctx: &Context,
    nickname: Option<&str>,
    all: bool,
    json: bool,
    show_secrets: bool,
) -> Result<()> {
    let definition = ctx.definition()?;

    let servers: Vec<&ServerEntry> = if all {
        definition.servers().collect()
    } else {
        definition.resolve(nickname)?
    };
    info!(count = servers.len(), "resolved servers");

    let resolved = match ctx.secrets(&definition)? {
        Some(store) => Some(bind::bind(servers.iter().copied(), &store)?),
        None => None,
    };

    if json {
        let records: Vec<Value> = match &resolved {
            Some(resolved) => resolved
                .iter()
                .map(|r| record(r, show_secrets))
                .collect::<serde_json::Result<_>>()?,
            None => servers
                .iter()
                .map(serde_json::to_value)
                .collect::<serde_json::Result<_>>()?,
        };
        return output::json(&records);
    }

    print_table(&servers);

    if let Some(resolved) = &resolved {
        output::section("Secrets");
        for server in resolved {
            let secrets = if show_secrets {
                server.secrets().clone()
            } else {
                output::mask(server.secrets())
            };
            output::kv(server.nickname(), secrets);
        }
    }

    Ok(())
}

/// JSON record for a bound server, secrets masked unless requested.
fn record(server: &ResolvedServer, show_secrets: bool) -> serde_json::Result<Value> {
    let mut value = serde_json::to_value(server)?;
    if !show_secrets {
        if let Some(secrets) = value.get_mut("secrets") {
            *secrets = output::mask(secrets);
        }
    }
    Ok(value)
}

fn print_table(servers: &[&ServerEntry]) {
    let nick_width = servers
        .iter()
        .map(|s| s.nickname().len())
        .max()
        .unwrap_or(8)
        .max(8);
    let contact_width = servers
        .iter()
        .filter_map(|s| s.contact_name())
        .map(str::len)
        .max()
        .unwrap_or(7)
        .max(7);

    println!(
        "{:<nw$}  {:<cw$}  {}",
        "NICKNAME", "CONTACT", "DESCRIPTION",
        nw = nick_width,
        cw = contact_width
    );
    for s in servers {
        println!(
            "{:<nw$}  {:<cw$}  {}",
            s.nickname(),
            s.contact_name().unwrap_or("-"),
            s.description(),
            nw = nick_width,
            cw = contact_width
        );
    }
}
