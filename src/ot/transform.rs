//! Transform: rewrite concurrent operations so both orders converge
//!
//! Given `a` and `b` authored against the same document, `transform`
//! produces `(a', b')` such that applying `a` then `b'` gives the same text
//! as applying `b` then `a'`.
//!
//! # Cases
//!
//! | a \ b  | Insert                 | Delete               | Retain    |
//! |--------|------------------------|----------------------|-----------|
//! | Insert | shift later one right  | shift around range   | unchanged |
//! | Delete | mirror of Insert/Delete| shrink by overlap    | unchanged |
//! | Retain | unchanged              | unchanged            | unchanged |
//!
//! Missing payloads count as zero-length, so the result is always a pair of
//! structurally valid operations.

use super::order::{self, TieBreak};
use super::{OpKind, Operation};

/// Transformed pair `(a', b')`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformResult {
    /// `a` rewritten to apply after `b`
    pub a: Operation,
    /// `b` rewritten to apply after `a`
    pub b: Operation,
}

impl TransformResult {
    fn new(a: Operation, b: Operation) -> Self {
        Self { a, b }
    }

    /// Split into `(a', b')`
    pub fn into_pair(self) -> (Operation, Operation) {
        (self.a, self.b)
    }

    fn swap(self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }
}

impl From<TransformResult> for (Operation, Operation) {
    fn from(result: TransformResult) -> Self {
        result.into_pair()
    }
}

/// Transform two concurrent operations using the default tie-break
///
/// # Example
///
/// ```rust
/// use otkit_core::ot::{apply, transform, Operation};
/// use chrono::{TimeZone, Utc};
///
/// let t0 = Utc.timestamp_opt(0, 0).unwrap();
/// let t1 = Utc.timestamp_opt(1, 0).unwrap();
/// let doc = "The quick fox";
///
/// let a = Operation::insert(4, "very ", "u1", t0);
/// let b = Operation::insert(10, "brown ", "u2", t1);
/// let (a2, b2) = transform(&a, &b).into_pair();
///
/// let left = apply(&apply(doc, &a), &b2);
/// let right = apply(&apply(doc, &b), &a2);
/// assert_eq!(left, right);
/// assert_eq!(left, "The very quick brown fox");
/// ```
pub fn transform(a: &Operation, b: &Operation) -> TransformResult {
    transform_with(a, b, order::tie_break)
}

/// Transform two concurrent operations with an explicit tie-break policy
///
/// The policy only matters for inserts at the same position.
pub fn transform_with(a: &Operation, b: &Operation, policy: TieBreak) -> TransformResult {
    match (a.kind, b.kind) {
        (OpKind::Insert, OpKind::Insert) => insert_insert(a, b, policy),
        (OpKind::Insert, OpKind::Delete) => insert_delete(a, b),
        (OpKind::Delete, OpKind::Insert) => insert_delete(b, a).swap(),
        (OpKind::Delete, OpKind::Delete) => delete_delete(a, b),
        (OpKind::Retain, _) | (_, OpKind::Retain) => {
            log::trace!("transform: {a} against {b} left unchanged");
            TransformResult::new(a.clone(), b.clone())
        }
    }
}

/// Rebase `list_a` over `list_b`
///
/// Every operation of `list_b`, in order, is transformed against the whole
/// working copy of `list_a`; each `a` is replaced with its `a'` and the
/// matching `b'` is dropped. This suits a local queue being rebased onto a
/// remote batch that has already been accepted as canonical.
///
/// # Example
///
/// ```rust
/// use otkit_core::ot::{transform_list, Operation};
/// use chrono::{TimeZone, Utc};
///
/// let t0 = Utc.timestamp_opt(0, 0).unwrap();
/// let t1 = Utc.timestamp_opt(1, 0).unwrap();
///
/// let local = vec![Operation::insert(10, "!", "me", t1)];
/// let remote = vec![
///     Operation::insert(0, ">> ", "them", t0),
///     Operation::delete(3, 2, "them", t0),
/// ];
///
/// let rebased = transform_list(&local, &remote);
/// assert_eq!(rebased[0].position, 11);
/// ```
pub fn transform_list(list_a: &[Operation], list_b: &[Operation]) -> Vec<Operation> {
    let mut working = list_a.to_vec();
    for b in list_b {
        for a in working.iter_mut() {
            *a = transform(a, b).a;
        }
    }
    log::trace!(
        "transform_list: rebased {} operations over {}",
        working.len(),
        list_b.len()
    );
    working
}

fn insert_insert(a: &Operation, b: &Operation, policy: TieBreak) -> TransformResult {
    let a_first = if a.position == b.position {
        order::precedes(a, b, policy)
    } else {
        a.position < b.position
    };

    if a_first {
        let shifted = b.with_position(b.position.saturating_add(a.text_len()));
        TransformResult::new(a.clone(), shifted)
    } else {
        let shifted = a.with_position(a.position.saturating_add(b.text_len()));
        TransformResult::new(shifted, b.clone())
    }
}

/// Insert against delete; the result keeps that order
fn insert_delete(insert: &Operation, delete: &Operation) -> TransformResult {
    let inserted = insert.text_len();
    let removed = delete.delete_len();
    let delete_end = delete.end();

    if insert.position <= delete.position {
        let delete = delete.with_position(delete.position.saturating_add(inserted));
        TransformResult::new(insert.clone(), delete)
    } else if insert.position >= delete_end {
        let insert = insert.with_position(insert.position - removed);
        TransformResult::new(insert, delete.clone())
    } else {
        // Insert lands strictly inside the deleted range
        let moved = insert.with_position(delete.position);
        let delete = delete.with_position(delete.position.saturating_add(inserted));
        TransformResult::new(moved, delete)
    }
}

fn delete_delete(a: &Operation, b: &Operation) -> TransformResult {
    let a_end = a.end();
    let b_end = b.end();

    if a_end <= b.position {
        let b = b.with_position(b.position.saturating_sub(a.delete_len()));
        return TransformResult::new(a.clone(), b);
    }
    if b_end <= a.position {
        let a = a.with_position(a.position.saturating_sub(b.delete_len()));
        return TransformResult::new(a, b.clone());
    }

    let overlap = a_end.min(b_end) - a.position.max(b.position);
    let start = a.position.min(b.position);

    let a = a
        .with_position(start)
        .with_length(a.delete_len().saturating_sub(overlap));
    let b = b
        .with_position(start)
        .with_length(b.delete_len().saturating_sub(overlap));
    TransformResult::new(a, b)
}
