// This file contains helper functions shared by the snippet renderers.

/// Joins a server base URL and a path template without doubling the slash
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Single-quotes a string for a POSIX shell, escaping embedded quotes
pub fn shell_quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', r"'\''"))
}
