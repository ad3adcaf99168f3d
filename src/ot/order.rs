//! Deterministic ordering of concurrent operations
//!
//! When two inserts land on the same position, one of them has to go first.
//! Nothing in the content decides that, so every participant applies the
//! same fixed policy: compare `(timestamp, author)` lexicographically,
//! ascending. Any peer that orders differently will not converge with us.

use super::Operation;
use std::cmp::Ordering;

/// Signature of a tie-break policy accepted by
/// [`transform_with`](super::transform_with)
pub type TieBreak = fn(&Operation, &Operation) -> Ordering;

/// Default tie-break: timestamp first, then author
///
/// # Example
///
/// ```rust
/// use otkit_core::ot::{order, Operation};
/// use chrono::{TimeZone, Utc};
/// use std::cmp::Ordering;
///
/// let t0 = Utc.timestamp_opt(0, 0).unwrap();
/// let t1 = Utc.timestamp_opt(1, 0).unwrap();
///
/// let early = Operation::insert(0, "A", "zed", t0);
/// let late = Operation::insert(0, "B", "amy", t1);
/// assert_eq!(order::tie_break(&early, &late), Ordering::Less);
///
/// // Same timestamp: author decides
/// let amy = Operation::insert(0, "A", "amy", t0);
/// let zed = Operation::insert(0, "B", "zed", t0);
/// assert_eq!(order::tie_break(&amy, &zed), Ordering::Less);
/// ```
pub fn tie_break(a: &Operation, b: &Operation) -> Ordering {
    match a.timestamp.cmp(&b.timestamp) {
        Ordering::Equal => a.author.cmp(&b.author),
        other => other,
    }
}

/// Whether `a` ranks ahead of `b` under `policy`
///
/// A full tie ranks `a` first, so the left-hand operation keeps its place.
pub(crate) fn precedes(a: &Operation, b: &Operation, policy: TieBreak) -> bool {
    policy(a, b) != Ordering::Greater
}
