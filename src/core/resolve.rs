//! Nickname resolution.
//!
//! Expands a server or group nickname into the ordered, deduplicated list
//! of leaf servers it denotes.

use std::collections::HashSet;

use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use crate::core::definition::Definition;
use crate::core::domain::{GroupEntry, ServerEntry};
use crate::error::{FormatError, NotFoundError, Result};

/// Resolve a nickname into its leaf servers.
///
/// - `None` resolves the definition's default nickname.
/// - A server nickname yields that single server.
/// - A group nickname is expanded depth-first, pre-order, following members
///   in declaration order. A server reached more than once keeps the
///   position of its first occurrence.
///
/// The result is deterministic for a given definition. No I/O happens here.
///
/// # Errors
///
/// Returns `NotFoundError::NoDefault` if `nickname` is `None` and no default
/// is configured, and `NotFoundError::Nickname` if the nickname names
/// neither a server nor a group.
pub fn resolve<'a>(
    definition: &'a Definition,
    nickname: Option<&str>,
) -> Result<Vec<&'a ServerEntry>> {
    let nickname = match nickname {
        Some(nickname) => nickname,
        None => definition
            .default_nickname()
            .ok_or_else(|| NotFoundError::NoDefault {
                path: definition.path().to_path_buf(),
            })?,
    };

    if let Some(server) = definition.server(nickname) {
        debug!(nickname, "resolved server");
        return Ok(vec![server]);
    }

    let root = definition
        .group(nickname)
        .ok_or_else(|| not_found(definition, nickname))?;

    let servers = flatten(definition, root)?;
    debug!(nickname, count = servers.len(), "resolved server group");

    Ok(servers)
}

/// Iterative pre-order flattening of one group.
///
/// The active path is tracked even though loading already rejected cycles,
/// so a cycle fails fast instead of looping.
fn flatten<'a>(definition: &'a Definition, root: &'a GroupEntry) -> Result<Vec<&'a ServerEntry>> {
    let mut found: IndexMap<&'a str, &'a ServerEntry> = IndexMap::new();
    let mut expanded: HashSet<&'a str> = HashSet::new();
    let mut path: IndexSet<&'a str> = IndexSet::new();
    path.insert(root.nickname());
    let mut stack: Vec<(&'a GroupEntry, usize)> = vec![(root, 0)];

    while let Some(top) = stack.last_mut() {
        let (group, idx) = *top;
        top.1 += 1;

        let Some(member) = group.members().get(idx) else {
            expanded.insert(group.nickname());
            path.pop();
            stack.pop();
            continue;
        };

        if let Some(server) = definition.server(member) {
            found.entry(server.nickname()).or_insert(server);
            continue;
        }

        let child = definition
            .group(member)
            .ok_or_else(|| not_found(definition, member))?;

        // Everything below an already expanded group is in `found`.
        if expanded.contains(child.nickname()) {
            continue;
        }

        if let Some(start) = path.get_index_of(child.nickname()) {
            let mut chain: Vec<String> = path.iter().skip(start).map(|n| n.to_string()).collect();
            chain.push(child.nickname().to_string());
            return Err(FormatError::Cycle {
                path: definition.path().to_path_buf(),
                chain,
            }
            .into());
        }

        path.insert(child.nickname());
        stack.push((child, 0));
    }

    Ok(found.into_values().collect())
}

fn not_found(definition: &Definition, nickname: &str) -> crate::error::Error {
    NotFoundError::Nickname {
        path: definition.path().to_path_buf(),
        nickname: nickname.to_string(),
    }
    .into()
}
