//! Common utility functions shared across the codebase.

/// Checks if the text is a valid JavaScript identifier name (ASCII subset).
///
/// # Examples
///
/// ```
/// use cn2i18n::utils::is_identifier;
///
/// assert!(is_identifier("i18n"));
/// assert!(is_identifier("$t"));
/// assert!(!is_identifier("i18n.t"));
/// assert!(!is_identifier("1st"));
/// assert!(!is_identifier(""));
/// ```
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

/// Pluralize a count for display: `1 file`, `2 files`.
pub fn plural(count: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", count, if count == 1 { singular } else { plural })
}
