//! Apply: interpret operations against a document string
//!
//! Out-of-range positions and missing payloads never fail the call; the
//! offending operation is skipped and the document passes through unchanged
//! for that step.

use super::{OpKind, Operation};
use ropey::Rope;

/// Apply a single operation to `document`
///
/// # Example
///
/// ```rust
/// use otkit_core::ot::{apply, Operation};
/// use chrono::Utc;
///
/// let now = Utc::now();
/// let doc = apply("Hello World", &Operation::delete(5, 6, "u1", now));
/// assert_eq!(doc, "Hello");
///
/// // Out of range: unchanged
/// let doc = apply("Hello", &Operation::insert(9, "!", "u1", now));
/// assert_eq!(doc, "Hello");
/// ```
pub fn apply(document: &str, op: &Operation) -> String {
    let mut rope = Rope::from_str(document);
    apply_to_rope(&mut rope, op);
    rope.to_string()
}

/// Apply `ops` in the given order
///
/// No sorting and no transformation happens here; callers hand in an
/// already-ordered, already-transformed stream. Each invalid step is skipped
/// on its own, the rest of the batch still applies.
pub fn apply_all(document: &str, ops: &[Operation]) -> String {
    let mut rope = Rope::from_str(document);
    let mut skipped = 0;
    for op in ops {
        if !apply_to_rope(&mut rope, op) {
            skipped += 1;
        }
    }
    if skipped > 0 {
        log::debug!("apply_all: skipped {skipped}/{} operations", ops.len());
    }
    rope.to_string()
}

/// Edit `rope` in place, returning whether anything changed
fn apply_to_rope(rope: &mut Rope, op: &Operation) -> bool {
    if !op.fits(rope.len_chars()) {
        if op.kind != OpKind::Retain {
            log::debug!(
                "Skipping {op}: out of range or missing payload (document length {})",
                rope.len_chars()
            );
        }
        return false;
    }

    match (op.kind, op.text.as_deref(), op.length) {
        (OpKind::Insert, Some(text), _) => {
            rope.insert(op.position, text);
            true
        }
        (OpKind::Delete, _, Some(length)) => {
            rope.remove(op.position..op.position + length);
            true
        }
        _ => false,
    }
}
