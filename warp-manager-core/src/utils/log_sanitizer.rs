//! Log sanitization utilities
//!
//! Keeps access/refresh tokens from being exposed in debug/error logs.

/// Number of leading characters of a secret left visible.
const SECRET_VISIBLE_CHARS: usize = 4;

/// Mask a secret token, keeping only a short prefix.
///
/// Secrets no longer than the visible prefix are masked entirely.
pub fn mask_secret(secret: &str) -> String {
    let total = secret.chars().count();
    if total <= SECRET_VISIBLE_CHARS {
        return "***".to_string();
    }
    let prefix: String = secret.chars().take(SECRET_VISIBLE_CHARS).collect();
    format!("{prefix}*** [{total} chars]")
}
