// Serialization layer - Convert operations to/from the JSON wire format
//!
//! Records look like:
//!
//! ```json
//! { "kind": "insert", "position": 5, "text": "hello",
//!   "author": "u1", "timestamp": "2024-01-01T00:00:00Z" }
//! ```
//!
//! `text` and `length` are omitted when absent. Records missing the payload
//! their kind requires still decode; the engine treats them as inert.

use crate::error::{OtError, Result};
use crate::ot::Operation;

/// Serialize one operation to a JSON record
pub fn encode_operation(op: &Operation) -> Result<String> {
    serde_json::to_string(op)
        .map_err(|e| OtError::Protocol(format!("Failed to encode operation: {}", e)))
}

/// Deserialize one operation from a JSON record
///
/// Unknown kinds, negative positions or lengths and unparseable timestamps
/// are rejected as [`OtError::Protocol`].
pub fn decode_operation(json: &str) -> Result<Operation> {
    serde_json::from_str(json)
        .map_err(|e| OtError::Protocol(format!("Failed to decode operation: {}", e)))
}

/// Serialize a batch as a JSON array, preserving order
pub fn encode_batch(ops: &[Operation]) -> Result<String> {
    serde_json::to_string(ops)
        .map_err(|e| OtError::Protocol(format!("Failed to encode batch: {}", e)))
}

/// Deserialize a JSON array of records, preserving order
pub fn decode_batch(json: &str) -> Result<Vec<Operation>> {
    serde_json::from_str(json)
        .map_err(|e| OtError::Protocol(format!("Failed to decode batch: {}", e)))
}

/// Convert an operation to a `serde_json::Value` record
pub fn operation_to_json(op: &Operation) -> Result<serde_json::Value> {
    serde_json::to_value(op)
        .map_err(|e| OtError::Protocol(format!("Failed to encode operation: {}", e)))
}

/// Convert a `serde_json::Value` record to an operation
pub fn json_to_operation(value: serde_json::Value) -> Result<Operation> {
    serde_json::from_value(value)
        .map_err(|e| OtError::Protocol(format!("Failed to decode operation: {}", e)))
}
