//! Identifier name-part normalization.

/// Lowercases `name` and deletes every character outside `[a-z0-9_]`.
///
/// Nothing is substituted: accented letters, punctuation and spaces simply
/// disappear, so `"O'Brien"` and `"OBrien"` normalize to the same string.
pub fn normalize_name_part(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | '_'))
        .collect()
}
