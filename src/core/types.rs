//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A server or server group nickname (e.g., `myserver1`).
///
/// Must match `^[A-Za-z0-9_]+$`; case-sensitive.
pub type Nickname = String;

/// Opaque user-defined structure (`user_defined` items and secret payloads).
///
/// Mappings keep document order.
pub type Payload = serde_json::Value;
