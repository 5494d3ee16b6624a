//! Shared helpers for command implementations.

use holovault_core::storage::VaultEntry;

/// Parse a raw argument as JSON, falling back to a plain string value.
///
/// `put app_state '{"count": 5}'` stores an object; `put note hello`
/// stores the string "hello".
pub fn parse_value(raw: &str) -> serde_json::Value {
    serde_json::from_str(raw).unwrap_or_else(|_| serde_json::Value::String(raw.to_string()))
}

/// Human-readable creation time for a listed entry.
pub fn format_stored_at(entry: &VaultEntry) -> String {
    match entry.stored_at() {
        Some(at) => at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => "-".to_string(),
    }
}
