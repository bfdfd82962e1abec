/// Hint carried by email address fields.
pub const HINT_EMAIL_ADDRESS: &str = "emailAddress";

/// Hint carried by username fields.
pub const HINT_USERNAME: &str = "username";

/// Hint carried by password fields.
pub const HINT_PASSWORD: &str = "password";

/// Hints are compared and stored lowercased.
pub fn normalize_hint(hint: &str) -> String {
    hint.to_lowercase()
}

/// The only hint of a node that takes part in matching.
pub fn first_hint(hints: &[String]) -> Option<String> {
    hints.first().map(|h| normalize_hint(h))
}
