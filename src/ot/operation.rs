//! Operation: a single immutable edit against a plain-text document
//!
//! Every operation records:
//! - Kind: insert, delete or retain
//! - Position: character offset at authoring time
//! - Payload: inserted text (insert) or removed length (delete)
//! - Author and timestamp: the deterministic tie-break key
//!
//! Positions and lengths count Unicode scalar values (`char`s), never bytes,
//! so an in-range offset always lands on a character boundary.

use crate::error::{OtError, Result};
use crate::{AuthorId, Timestamp};
use serde::{Deserialize, Serialize};

/// The kind of edit an [`Operation`] performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpKind {
    /// Insert `text` at `position`
    Insert,
    /// Remove `length` characters starting at `position`
    Delete,
    /// Structural no-op
    Retain,
}

impl std::fmt::Display for OpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpKind::Insert => write!(f, "insert"),
            OpKind::Delete => write!(f, "delete"),
            OpKind::Retain => write!(f, "retain"),
        }
    }
}

/// A single edit authored against a known document version
///
/// Operations are values: the engine never mutates one in place, every
/// transform/compose/invert result is a freshly built operation.
///
/// `text` is present iff `kind` is [`OpKind::Insert`] and `length` is present
/// iff `kind` is [`OpKind::Delete`]. The constructors uphold this; operations
/// decoded from the wire may not, and [`Operation::validate`] reports it.
/// Malformed operations are still accepted by the engine and stay inert.
///
/// # Example
///
/// ```rust
/// use otkit_core::ot::{Operation, OpKind};
/// use chrono::{TimeZone, Utc};
///
/// let t0 = Utc.timestamp_opt(0, 0).unwrap();
/// let op = Operation::insert(5, "hello", "u1", t0);
///
/// assert_eq!(op.kind, OpKind::Insert);
/// assert_eq!(op.text_len(), 5);
/// assert!(op.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Operation {
    /// What this operation does
    pub kind: OpKind,

    /// Character offset into the document at authoring time
    pub position: usize,

    /// Inserted text (insert only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Number of characters removed (delete only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,

    /// Originating participant
    pub author: AuthorId,

    /// Authoring time
    pub timestamp: Timestamp,
}

impl Operation {
    /// Create an insert of `text` at `position`
    pub fn insert(
        position: usize,
        text: impl Into<String>,
        author: impl Into<AuthorId>,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            kind: OpKind::Insert,
            position,
            text: Some(text.into()),
            length: None,
            author: author.into(),
            timestamp,
        }
    }

    /// Create a delete of `length` characters starting at `position`
    pub fn delete(
        position: usize,
        length: usize,
        author: impl Into<AuthorId>,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            kind: OpKind::Delete,
            position,
            text: None,
            length: Some(length),
            author: author.into(),
            timestamp,
        }
    }

    /// Create a retain (no-op placeholder) at `position`
    pub fn retain(position: usize, author: impl Into<AuthorId>, timestamp: Timestamp) -> Self {
        Self {
            kind: OpKind::Retain,
            position,
            text: None,
            length: None,
            author: author.into(),
            timestamp,
        }
    }

    /// Copy of this operation moved to `position`
    pub fn with_position(&self, position: usize) -> Self {
        Self {
            position,
            ..self.clone()
        }
    }

    /// Copy of this delete with a different removed length
    pub(crate) fn with_length(&self, length: usize) -> Self {
        Self {
            length: Some(length),
            ..self.clone()
        }
    }

    pub fn is_insert(&self) -> bool {
        self.kind == OpKind::Insert
    }

    pub fn is_delete(&self) -> bool {
        self.kind == OpKind::Delete
    }

    pub fn is_retain(&self) -> bool {
        self.kind == OpKind::Retain
    }

    /// Length in characters of the inserted text (0 when absent)
    pub fn text_len(&self) -> usize {
        self.text.as_deref().map_or(0, |text| text.chars().count())
    }

    /// Number of characters removed (0 when absent)
    pub fn delete_len(&self) -> usize {
        self.length.unwrap_or(0)
    }

    /// End of the range this operation touches in its base document
    ///
    /// For a delete this is `position + length`; inserts and retains touch
    /// no existing characters, so their end is their position.
    pub fn end(&self) -> usize {
        match self.kind {
            OpKind::Delete => self.position.saturating_add(self.delete_len()),
            OpKind::Insert | OpKind::Retain => self.position,
        }
    }

    /// Check that the payload matches the kind
    pub fn validate(&self) -> Result<()> {
        let (required, forbidden) = match self.kind {
            OpKind::Insert => (self.text.is_some(), self.length.is_some()),
            OpKind::Delete => (self.length.is_some(), self.text.is_some()),
            OpKind::Retain => (true, self.text.is_some() || self.length.is_some()),
        };

        if !required {
            return Err(OtError::MissingPayload {
                kind: self.kind,
                position: self.position,
            });
        }
        if forbidden {
            return Err(OtError::UnexpectedPayload {
                kind: self.kind,
                position: self.position,
            });
        }
        Ok(())
    }

    /// Whether [`apply`](crate::ot::apply) would actually edit `document`
    ///
    /// False for retains, for operations missing their payload and for
    /// positions or ranges outside the document.
    pub fn is_applicable(&self, document: &str) -> bool {
        self.fits(document.chars().count())
    }

    /// Range check against a document of `doc_len` characters
    pub(crate) fn fits(&self, doc_len: usize) -> bool {
        match self.kind {
            OpKind::Insert => self.text.is_some() && self.position <= doc_len,
            OpKind::Delete => match self.length {
                Some(length) => self
                    .position
                    .checked_add(length)
                    .is_some_and(|end| end <= doc_len),
                None => false,
            },
            OpKind::Retain => false,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            OpKind::Insert => write!(
                f,
                "insert({}, {:?}) by {}",
                self.position,
                self.text.as_deref().unwrap_or(""),
                self.author
            ),
            OpKind::Delete => write!(
                f,
                "delete({}, {}) by {}",
                self.position,
                self.delete_len(),
                self.author
            ),
            OpKind::Retain => write!(f, "retain({}) by {}", self.position, self.author),
        }
    }
}
