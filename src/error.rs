//! Error types for OTKit
//!
//! The transform engine itself never fails: malformed operations degrade to
//! no-ops. Errors only surface where silently continuing would produce wrong
//! text (inverting against an inconsistent snapshot) or at the wire boundary.

use crate::ot::OpKind;
use thiserror::Error;

/// Result type used throughout OTKit
pub type Result<T> = std::result::Result<T, OtError>;

/// Errors produced by OTKit
#[derive(Debug, Error)]
pub enum OtError {
    /// The document snapshot given to `invert` is too short for the delete
    #[error("Delete of {length} at {position} out of bounds (document length: {document_len})")]
    SnapshotOutOfRange {
        position: usize,
        length: usize,
        document_len: usize,
    },

    /// The payload required by the operation kind is absent
    #[error("{kind} operation at {position} is missing its payload")]
    MissingPayload { kind: OpKind, position: usize },

    /// A payload is present that the operation kind does not allow
    #[error("{kind} operation at {position} carries an unexpected payload")]
    UnexpectedPayload { kind: OpKind, position: usize },

    /// Wire-format violation or encode/decode failure
    #[error("Protocol error: {0}")]
    Protocol(String),
}
