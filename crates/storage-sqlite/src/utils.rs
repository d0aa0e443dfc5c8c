//! Column helpers shared by the repository models.
//!
//! Sequence fields are stored as JSON text and status enums as their
//! snake_case names.

use log::warn;
use std::fmt::Display;
use std::str::FromStr;

/// Serializes a string sequence for a TEXT column.
pub fn encode_list(items: &[String]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

/// Reads a JSON string sequence back; malformed text yields an empty list.
pub fn decode_list(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

/// Parses a stored status, falling back to the default for unknown text.
pub fn parse_status<S>(raw: &str) -> S
where
    S: FromStr + Default,
    S::Err: Display,
{
    raw.parse().unwrap_or_else(|e| {
        warn!("Unknown stored status '{}': {}", raw, e);
        S::default()
    })
}
