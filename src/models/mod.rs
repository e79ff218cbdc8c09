//! Diesel row types mirroring the domain entities.
//!
//! Status enums are stored as text and JSON payloads (feature lists, opaque
//! metadata) as JSON-encoded text columns; the conversions in each module
//! translate between the row form and the domain form.

use serde::Serialize;
use serde_json::Value;

pub mod audit_log;
pub mod config;
pub mod landlord;
pub mod notification;
pub mod payment;
pub mod property;
pub mod tour;
pub mod user;

/// JSON-encodes a string array column.
pub(crate) fn encode_string_list(items: Option<&Vec<String>>) -> Option<String> {
    items.and_then(|v| serde_json::to_string(v).ok())
}

/// Decodes a JSON-encoded string array column. Malformed stored text is
/// treated as absent rather than failing the whole row.
pub(crate) fn decode_string_list(text: Option<String>) -> Option<Vec<String>> {
    text.and_then(|t| serde_json::from_str(&t).ok())
}

/// JSON-encodes an opaque metadata column.
pub(crate) fn encode_value<T: Serialize>(value: Option<&T>) -> Option<String> {
    value.and_then(|v| serde_json::to_string(v).ok())
}

/// Decodes an opaque metadata column.
pub(crate) fn decode_value(text: Option<String>) -> Option<Value> {
    text.and_then(|t| serde_json::from_str(&t).ok())
}
