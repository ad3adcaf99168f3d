//! Compose: collapse consecutive operations from one stream
//!
//! Used to compact an operation log before storage. Only a few shapes
//! collapse cleanly into a single positional operation; everything else is
//! reported as not composable and kept as-is.

use super::{OpKind, Operation};

/// Outcome of a successful [`compose`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Composed {
    /// The pair is equivalent to this single operation
    Operation(Operation),
    /// The pair cancels out entirely
    Noop,
}

impl Composed {
    /// The merged operation, if the pair did not cancel
    pub fn into_operation(self) -> Option<Operation> {
        match self {
            Composed::Operation(op) => Some(op),
            Composed::Noop => None,
        }
    }
}

/// Compose `first` followed by `second` into one equivalent edit
///
/// Returns `None` when the pair cannot be expressed as a single operation.
/// The merged operation keeps the author of `first` and the timestamp of
/// `second`.
///
/// # Example
///
/// ```rust
/// use otkit_core::ot::{compose, Composed, Operation};
/// use chrono::{TimeZone, Utc};
///
/// let t0 = Utc.timestamp_opt(0, 0).unwrap();
/// let t1 = Utc.timestamp_opt(1, 0).unwrap();
///
/// let first = Operation::insert(5, "Hello", "u1", t0);
/// let second = Operation::insert(10, " World", "u1", t1);
///
/// match compose(&first, &second) {
///     Some(Composed::Operation(op)) => {
///         assert_eq!(op.position, 5);
///         assert_eq!(op.text.as_deref(), Some("Hello World"));
///     }
///     other => panic!("unexpected {:?}", other),
/// }
///
/// // Typing then erasing the same text leaves nothing behind
/// let erase = Operation::delete(5, 5, "u1", t1);
/// assert_eq!(compose(&first, &erase), Some(Composed::Noop));
/// ```
pub fn compose(first: &Operation, second: &Operation) -> Option<Composed> {
    match (first.kind, second.kind) {
        (OpKind::Insert, OpKind::Insert) => {
            let (head, tail) = (first.text.as_deref()?, second.text.as_deref()?);
            if first.position.checked_add(first.text_len()) != Some(second.position) {
                return None;
            }
            let mut merged = first.clone();
            merged.text = Some(format!("{head}{tail}"));
            merged.timestamp = second.timestamp;
            Some(Composed::Operation(merged))
        }
        (OpKind::Delete, OpKind::Delete) => {
            let (a, b) = (first.length?, second.length?);
            if first.position != second.position {
                return None;
            }
            let mut merged = first.with_length(a.saturating_add(b));
            merged.timestamp = second.timestamp;
            Some(Composed::Operation(merged))
        }
        (OpKind::Insert, OpKind::Delete) => {
            first.text.as_ref()?;
            let removed = second.length?;
            (first.position == second.position && removed == first.text_len())
                .then_some(Composed::Noop)
        }
        _ => None,
    }
}

/// Compact an operation stream by composing neighbours
///
/// Walks the stream once, folding each operation into the one before it when
/// they compose. Cancelled pairs disappear; the operation preceding them is
/// then eligible to merge with what follows.
///
/// # Example
///
/// ```rust
/// use otkit_core::ot::{apply_all, compact, Operation};
/// use chrono::Utc;
///
/// let now = Utc::now();
/// let ops = vec![
///     Operation::insert(0, "H", "u1", now),
///     Operation::insert(1, "i", "u1", now),
///     Operation::insert(2, "!", "u1", now),
/// ];
///
/// let compacted = compact(&ops);
/// assert_eq!(compacted.len(), 1);
/// assert_eq!(apply_all("", &compacted), apply_all("", &ops));
/// ```
pub fn compact(ops: &[Operation]) -> Vec<Operation> {
    let mut out: Vec<Operation> = Vec::with_capacity(ops.len());
    for op in ops {
        let composed = out.last().and_then(|last| compose(last, op));
        match composed {
            Some(Composed::Operation(merged)) => {
                out.pop();
                out.push(merged);
            }
            Some(Composed::Noop) => {
                out.pop();
            }
            None => out.push(op.clone()),
        }
    }
    log::debug!("compact: {} operations -> {}", ops.len(), out.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ot::{apply, apply_all};
    use crate::Timestamp;
    use chrono::{TimeZone, Utc};

    fn t(secs: i64) -> Timestamp {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn merged(result: Option<Composed>) -> Operation {
        match result {
            Some(Composed::Operation(op)) => op,
            other => panic!("Expected merged operation, got {:?}", other),
        }
    }

    #[test]
    fn test_adjacent_inserts_merge() {
        let first = Operation::insert(5, "Hello", "u1", t(0));
        let second = Operation::insert(10, " World", "u1", t(1));

        let op = merged(compose(&first, &second));
        assert_eq!(op.kind, OpKind::Insert);
        assert_eq!(op.position, 5);
        assert_eq!(op.text.as_deref(), Some("Hello World"));
        assert_eq!(op.author, "u1");
        assert_eq!(op.timestamp, t(1));

        let doc = "01234";
        assert_eq!(
            apply(&apply(doc, &first), &second),
            apply(doc, &op)
        );
    }

    #[test]
    fn test_adjacency_counts_chars() {
        let first = Operation::insert(0, "né", "u1", t(0));
        let second = Operation::insert(2, "e", "u1", t(1));
        assert_eq!(merged(compose(&first, &second)).text.as_deref(), Some("née"));
    }

    #[test]
    fn test_non_adjacent_inserts_do_not_compose() {
        let first = Operation::insert(5, "Hello", "u1", t(0));
        let second = Operation::insert(9, "x", "u1", t(1));
        assert_eq!(compose(&first, &second), None);

        // Typing before the previous insert is not a simple append
        let second = Operation::insert(5, "x", "u1", t(1));
        assert_eq!(compose(&first, &second), None);
    }

    #[test]
    fn test_deletes_at_same_position_merge() {
        let first = Operation::delete(3, 2, "u1", t(0));
        let second = Operation::delete(3, 4, "u1", t(1));

        let op = merged(compose(&first, &second));
        assert_eq!(op.position, 3);
        assert_eq!(op.length, Some(6));

        let doc = "0123456789";
        assert_eq!(apply(&apply(doc, &first), &second), apply(doc, &op));
    }

    #[test]
    fn test_deletes_at_different_positions_do_not_compose() {
        let first = Operation::delete(3, 2, "u1", t(0));
        let second = Operation::delete(2, 1, "u1", t(1));
        assert_eq!(compose(&first, &second), None);
    }

    #[test]
    fn test_insert_then_matching_delete_cancels() {
        let first = Operation::insert(4, "abc", "u1", t(0));
        let second = Operation::delete(4, 3, "u1", t(1));
        assert_eq!(compose(&first, &second), Some(Composed::Noop));
        assert_eq!(Composed::Noop.into_operation(), None);
    }

    #[test]
    fn test_insert_then_partial_delete_is_not_composable() {
        let first = Operation::insert(4, "abc", "u1", t(0));
        assert_eq!(compose(&first, &Operation::delete(4, 2, "u1", t(1))), None);
        assert_eq!(compose(&first, &Operation::delete(5, 3, "u1", t(1))), None);
    }

    #[test]
    fn test_other_pairs_are_not_composable() {
        let insert = Operation::insert(0, "a", "u1", t(0));
        let delete = Operation::delete(0, 1, "u1", t(0));
        let retain = Operation::retain(0, "u1", t(0));

        assert_eq!(compose(&delete, &insert), None);
        assert_eq!(compose(&retain, &insert), None);
        assert_eq!(compose(&insert, &retain), None);
        assert_eq!(compose(&retain, &retain), None);
    }

    #[test]
    fn test_missing_payload_is_not_composable() {
        let mut first = Operation::insert(0, "a", "u1", t(0));
        first.text = None;
        assert_eq!(compose(&first, &Operation::insert(0, "b", "u1", t(1))), None);
        assert_eq!(compose(&first, &Operation::delete(0, 0, "u1", t(1))), None);
    }

    #[test]
    fn test_compact_typing_run() {
        let ops: Vec<Operation> = "hello"
            .chars()
            .enumerate()
            .map(|(i, c)| Operation::insert(i, c.to_string(), "u1", t(i as i64)))
            .collect();

        let compacted = compact(&ops);
        assert_eq!(compacted.len(), 1);
        assert_eq!(compacted[0].text.as_deref(), Some("hello"));
        assert_eq!(compacted[0].timestamp, t(4));
    }

    #[test]
    fn test_compact_drops_cancelled_pairs() {
        let ops = vec![
            Operation::insert(0, "ab", "u1", t(0)),
            Operation::insert(2, "typo", "u1", t(1)),
            Operation::delete(0, 6, "u1", t(2)),
        ];
        // "ab" + "typo" merge first, then the 6-char delete cancels both
        assert!(compact(&ops).is_empty());

        let ops = vec![
            Operation::delete(0, 1, "u1", t(0)),
            Operation::insert(3, "x", "u1", t(1)),
            Operation::delete(3, 1, "u1", t(2)),
            Operation::delete(0, 2, "u1", t(3)),
        ];
        let compacted = compact(&ops);
        assert_eq!(compacted.len(), 1);
        assert_eq!(compacted[0].length, Some(3));
        assert_eq!(apply_all("0123456", &compacted), apply_all("0123456", &ops));
    }

    #[test]
    fn test_compact_keeps_unrelated_ops() {
        let ops = vec![
            Operation::insert(0, "a", "u1", t(0)),
            Operation::delete(5, 1, "u1", t(1)),
            Operation::insert(2, "b", "u1", t(2)),
        ];
        assert_eq!(compact(&ops), ops);
    }
}
