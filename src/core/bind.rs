//! Binding resolved servers to their secrets.

use tracing::debug;

use crate::core::definition::Definition;
use crate::core::domain::{ResolvedServer, ServerEntry};
use crate::core::resolve;
use crate::core::secrets::SecretStore;
use crate::error::{NotFoundError, Result};

/// Attach each server's secret payload, looked up by nickname.
///
/// Output order is input order. Payloads are attached verbatim.
///
/// # Errors
///
/// Returns `NotFoundError::Secret` naming the first server without an entry
/// in the secret store. No partial list is returned.
pub fn bind<'a, I>(servers: I, store: &SecretStore) -> Result<Vec<ResolvedServer>>
where
    I: IntoIterator<Item = &'a ServerEntry>,
{
    let resolved = servers
        .into_iter()
        .map(|server| -> Result<ResolvedServer> {
            let secrets = store
                .get(server.nickname())
                .ok_or_else(|| NotFoundError::Secret {
                    path: store.path().to_path_buf(),
                    nickname: server.nickname().to_string(),
                })?;
            Ok(ResolvedServer::new(server.clone(), secrets.clone()))
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(count = resolved.len(), "bound secrets");
    Ok(resolved)
}

/// Resolve a nickname and bind the resulting servers to their secrets.
///
/// `None` resolves the definition's default nickname.
///
/// # Errors
///
/// Returns the errors of [`resolve::resolve`] and [`bind`].
pub fn resolve_and_bind(
    definition: &Definition,
    store: &SecretStore,
    nickname: Option<&str>,
) -> Result<Vec<ResolvedServer>> {
    let servers = resolve::resolve(definition, nickname)?;
    bind(servers, store)
}
