//! Operational Transform engine for plain text
//!
//! This module contains the pure, stateless core that lets concurrent edits
//! to the same document converge without coordination.
//!
//! # Components
//!
//! - **Operation:** Immutable insert/delete/retain value
//! - **Apply:** Interpret operations against a document string
//! - **Transform:** Rewrite two concurrent operations so either order converges
//! - **Compose:** Collapse consecutive operations from one stream
//! - **Invert:** Build the undo of an operation
//!
//! Everything here is a free function over immutable inputs; it is safe to
//! call from any number of threads without synchronization.
//!
//! # Usage contract
//!
//! Concurrent operations must go through [`transform`] before both are
//! applied at one site, and every site must apply the resulting stream in
//! the same order. Sorting raw operations by timestamp and applying them
//! untransformed is *not* equivalent and does not converge in general.
//!
//! # Example
//!
//! ```rust
//! use otkit_core::ot::{apply, transform, Operation};
//! use chrono::{TimeZone, Utc};
//!
//! let base = "Hello World";
//! let t0 = Utc.timestamp_opt(0, 0).unwrap();
//! let t1 = Utc.timestamp_opt(1, 0).unwrap();
//!
//! // Alice and Bob edit the same version concurrently
//! let alice = Operation::insert(5, ",", "alice", t0);
//! let bob = Operation::delete(6, 5, "bob", t1);
//!
//! let (alice2, bob2) = transform(&alice, &bob).into_pair();
//!
//! let at_alice = apply(&apply(base, &alice), &bob2);
//! let at_bob = apply(&apply(base, &bob), &alice2);
//! assert_eq!(at_alice, "Hello, ");
//! assert_eq!(at_alice, at_bob);
//! ```
//!
//! # References
//!
//! - Ellis & Gibbs, "Concurrency Control in Groupware Systems" (1989)

mod apply;
mod compose;
mod invert;
mod operation;
pub mod order;
mod transform;

pub use apply::{apply, apply_all};
pub use compose::{compact, compose, Composed};
pub use invert::invert;
pub use operation::{OpKind, Operation};
pub use transform::{transform, transform_list, transform_with, TransformResult};
