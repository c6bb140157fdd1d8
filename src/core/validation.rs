//! Input validation for nicknames.

/// Validate a nickname.
///
/// Nicknames are case-sensitive and must match `^[A-Za-z0-9_]+$`:
/// - Only ASCII letters, digits, and underscore
/// - Cannot be empty
pub fn is_valid_nickname(nickname: &str) -> bool {
    !nickname.is_empty()
        && nickname
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}
