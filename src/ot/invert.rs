//! Invert: build the operation that undoes another

use super::{OpKind, Operation};
use crate::error::{OtError, Result};

/// Produce the inverse of `op`
///
/// `original` is the document as it was before `op` was applied. It is only
/// read for deletes, to recover the removed text; a snapshot that does not
/// cover the deleted range is an error rather than a silently wrong undo.
///
/// The inverse keeps the author and timestamp of `op`.
///
/// # Example
///
/// ```rust
/// use otkit_core::ot::{apply, invert, Operation};
/// use chrono::Utc;
///
/// let doc = "Hello World";
/// let op = Operation::delete(5, 6, "u1", Utc::now());
///
/// let undo = invert(&op, doc).unwrap();
/// assert_eq!(undo.text.as_deref(), Some(" World"));
/// assert_eq!(apply(&apply(doc, &op), &undo), doc);
/// ```
pub fn invert(op: &Operation, original: &str) -> Result<Operation> {
    op.validate()?;

    match op.kind {
        OpKind::Insert => Ok(Operation::delete(
            op.position,
            op.text_len(),
            op.author.clone(),
            op.timestamp,
        )),
        OpKind::Delete => {
            let length = op.delete_len();
            let removed = original
                .chars()
                .skip(op.position)
                .take(length)
                .collect::<String>();

            let got = removed.chars().count();
            if got != length {
                return Err(OtError::SnapshotOutOfRange {
                    position: op.position,
                    length,
                    document_len: original.chars().count(),
                });
            }

            Ok(Operation::insert(
                op.position,
                removed,
                op.author.clone(),
                op.timestamp,
            ))
        }
        OpKind::Retain => Ok(op.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ot::apply;
    use crate::Timestamp;
    use chrono::{TimeZone, Utc};

    fn t(secs: i64) -> Timestamp {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_invert_insert() {
        let op = Operation::insert(3, "abc", "u1", t(7));
        let inverse = invert(&op, "whatever").unwrap();

        assert_eq!(inverse.kind, OpKind::Delete);
        assert_eq!(inverse.position, 3);
        assert_eq!(inverse.length, Some(3));
        assert_eq!(inverse.author, "u1");
        assert_eq!(inverse.timestamp, t(7));
    }

    #[test]
    fn test_invert_insert_counts_chars() {
        let op = Operation::insert(0, "日本語", "u1", t(0));
        assert_eq!(invert(&op, "").unwrap().length, Some(3));
    }

    #[test]
    fn test_invert_delete_recovers_text() {
        let doc = "Hello World";
        let op = Operation::delete(5, 6, "u1", t(0));
        let inverse = invert(&op, doc).unwrap();

        assert_eq!(inverse.kind, OpKind::Insert);
        assert_eq!(inverse.position, 5);
        assert_eq!(inverse.text.as_deref(), Some(" World"));
    }

    #[test]
    fn test_invert_retain_is_identity() {
        let op = Operation::retain(2, "u1", t(0));
        assert_eq!(invert(&op, "").unwrap(), op);
    }

    #[test]
    fn test_round_trip() {
        let doc = "the quick brown fox";
        for op in [
            Operation::insert(4, "very ", "u1", t(0)),
            Operation::insert(doc.len(), "!", "u1", t(0)),
            Operation::delete(4, 6, "u1", t(0)),
            Operation::delete(0, doc.len(), "u1", t(0)),
        ] {
            let undo = invert(&op, doc).unwrap();
            assert_eq!(apply(&apply(doc, &op), &undo), doc, "round trip of {op}");
        }
    }

    #[test]
    fn test_short_snapshot_is_an_error() {
        let op = Operation::delete(3, 5, "u1", t(0));

        match invert(&op, "abcdef") {
            Err(OtError::SnapshotOutOfRange {
                position,
                length,
                document_len,
            }) => {
                assert_eq!(position, 3);
                assert_eq!(length, 5);
                assert_eq!(document_len, 6);
            }
            other => panic!("Expected SnapshotOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_payload_is_an_error() {
        let mut op = Operation::delete(0, 1, "u1", t(0));
        op.length = None;
        assert!(matches!(
            invert(&op, "abc"),
            Err(OtError::MissingPayload { kind: OpKind::Delete, .. })
        ));
    }
}
