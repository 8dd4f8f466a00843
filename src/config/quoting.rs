//! Shell-quote handling for configured tool paths.
//!
//! Configured values may arrive pre-quoted (Windows installs under
//! `C:\Program Files` are usually written with embedded double quotes).
//! Stored paths are always raw; quoting is applied again only when a
//! command string is built for the target platform.

use std::path::Path;

/// Remove one matching pair of leading/trailing quotes, if present.
/// Anything else in the value is opaque and passed through untouched.
pub fn strip_shell_quotes(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.len() >= 2 {
        let bytes = trimmed.as_bytes();
        let first = bytes[0];
        let last = bytes[trimmed.len() - 1];
        if first == last && (first == b'"' || first == b'\'') {
            return &trimmed[1..trimmed.len() - 1];
        }
    }
    trimmed
}

/// Render a raw path as a single shell argument for the current platform.
/// Paths without whitespace are returned verbatim.
pub fn quote_for_platform(path: &Path) -> String {
    let raw = path.to_string_lossy();
    if !raw.chars().any(char::is_whitespace) {
        return raw.into_owned();
    }
    quote_with_spaces(&raw)
}

#[cfg(windows)]
fn quote_with_spaces(raw: &str) -> String {
    format!("\"{raw}\"")
}

#[cfg(not(windows))]
fn quote_with_spaces(raw: &str) -> String {
    // POSIX shells: wrap in single quotes, escaping embedded single quotes.
    format!("'{}'", raw.replace('\'', r"'\''"))
}
