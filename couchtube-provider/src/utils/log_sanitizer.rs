//! Log sanitization utilities
//!
//! Listing responses run to hundreds of kilobytes; only a prefix of them
//! belongs in debug/error logs.

/// Default number of bytes kept by [`truncate_for_log`].
const TRUNCATE_LIMIT: usize = 256;

/// Truncate a response body for logging.
pub fn truncate_for_log(s: &str) -> String {
    truncate_to(s, TRUNCATE_LIMIT)
}

/// Truncate `s` to at most `limit` bytes on a char boundary, noting the full size.
fn truncate_to(s: &str, limit: usize) -> String {
    if s.len() <= limit {
        return s.to_string();
    }

    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= limit)
        .last()
        .unwrap_or(0);

    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}
