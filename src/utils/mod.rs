//! Utility modules.

/// Log sanitization utilities to keep response bodies readable in debug logs.
pub(crate) mod log_sanitizer;
