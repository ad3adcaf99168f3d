//! Wire protocol for exchanging operations with collaborators
//!
//! The sync/session layer and storage see operations only as JSON records;
//! this module is the single place that format is defined.

pub mod serialize;

pub use serialize::{
    decode_batch, decode_operation, encode_batch, encode_operation, json_to_operation,
    operation_to_json,
};
