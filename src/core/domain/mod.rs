//! Domain types.

mod group;
mod resolved;
mod server;

pub use group::GroupEntry;
pub use resolved::ResolvedServer;
pub use server::ServerEntry;
