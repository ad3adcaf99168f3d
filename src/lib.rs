//! OTKit Core - Operational Transform engine for collaborative text
//!
//! This is the conflict-resolution core behind a collaborative plain-text
//! editor, compiled to both native and WASM.
//! It implements:
//! - Insert/delete/retain operations over linear text
//! - Apply, pairwise transform and list transform
//! - Compose (log compaction) and invert (undo primitive)
//! - JSON wire format for operations
//!
//! The engine is pure: no shared state, no I/O. Deciding which operations
//! are concurrent and in what order sites apply them belongs to the
//! surrounding sync layer.
//!
//! # Examples
//!
//! ```rust
//! use otkit_core::{apply, transform, Operation};
//! use chrono::{TimeZone, Utc};
//!
//! let t0 = Utc.timestamp_opt(0, 0).unwrap();
//! let t1 = Utc.timestamp_opt(1, 0).unwrap();
//!
//! let a = Operation::insert(10, "A", "u1", t0);
//! let b = Operation::insert(10, "B", "u2", t1);
//!
//! let (a2, b2) = transform(&a, &b).into_pair();
//! assert_eq!(a2.position, 10);
//! assert_eq!(b2.position, 11);
//!
//! let doc = "0123456789";
//! assert_eq!(apply(&apply(doc, &a), &b2), "0123456789AB");
//! assert_eq!(apply(&apply(doc, &b), &a2), "0123456789AB");
//! ```

pub mod error;
pub mod ot;
pub mod protocol;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-exports for convenience
pub use error::{OtError, Result};
pub use ot::{
    apply, apply_all, compact, compose, invert, transform, transform_list, transform_with,
    Composed, OpKind, Operation, TransformResult,
};

/// Participant identifier type
pub type AuthorId = String;

/// Authoring time of an operation (ISO-8601 on the wire)
pub type Timestamp = chrono::DateTime<chrono::Utc>;
