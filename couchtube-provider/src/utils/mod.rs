//! Utility modules.

/// Log sanitization utilities to keep huge response bodies out of logs.
pub mod log_sanitizer;
