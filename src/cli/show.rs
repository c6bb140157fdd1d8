//! Show command.
//!
//! Print the openly readable details of one server or server group. Never
//! opens the vault file.

use serde_json::json;

use crate::cli::context::Context;
use crate::cli::output;
use crate::error::{NotFoundError, Result};

/// Show a server or server group.
pub fn execute(ctx: &Context, nickname: &str, json: bool) -> Result<()> {
    let definition = ctx.definition()?;

    if let Some(server) = definition.server(nickname) {
        if json {
            return output::json(&json!({ "kind": "server", "server": server }));
        }

        output::header(&format!("server {}", output::nickname(server.nickname())));
        output::kv("description", server.description());
        if let Some(contact) = server.contact_name() {
            output::kv("contact", contact);
        }
        if let Some(access) = server.access_via() {
            output::kv("access via", access);
        }
        if let Some(user_defined) = server.user_defined() {
            output::kv("user defined", user_defined);
        }
        return Ok(());
    }

    if let Some(group) = definition.group(nickname) {
        let servers: Vec<&str> = definition
            .resolve(Some(nickname))?
            .into_iter()
            .map(|s| s.nickname())
            .collect();

        if json {
            return output::json(&json!({
                "kind": "server_group",
                "server_group": group,
                "servers": servers,
            }));
        }

        output::header(&format!("server group {}", output::nickname(group.nickname())));
        output::kv("description", group.description());
        output::kv("members", group.members().join(", "));
        if let Some(user_defined) = group.user_defined() {
            output::kv("user defined", user_defined);
        }
        output::section("Servers");
        for server in servers {
            output::list_item(server);
        }
        return Ok(());
    }

    Err(NotFoundError::Nickname {
        path: definition.path().to_path_buf(),
        nickname: nickname.to_string(),
    }
    .into())
}
