//! Error types for concept operations.
//!
//! Uses `thiserror` for ergonomic error definition. A missing record is not
//! an error: `view` and `update` report it as `None`.

use thiserror::Error;

use crate::id::RecordId;

/// Result type alias for concept operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for concept operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{concept}: {kind}")]
pub struct Error {
    /// The concept that rejected the operation.
    pub concept: &'static str,
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error raised by the named concept.
    #[must_use]
    pub fn new(concept: &'static str, kind: ErrorKind) -> Self {
        Self { concept, kind }
    }

    /// Creates a duplicate identifier error.
    #[must_use]
    pub fn duplicate_identifier(concept: &'static str, id: RecordId) -> Self {
        Self::new(concept, ErrorKind::DuplicateIdentifier(id))
    }

    /// Creates an identifier space exhausted error.
    #[must_use]
    pub fn identifier_space_exhausted(concept: &'static str) -> Self {
        Self::new(concept, ErrorKind::IdentifierSpaceExhausted)
    }

    /// Creates an invalid identifier error.
    #[must_use]
    pub fn invalid_identifier(concept: &'static str, id: RecordId) -> Self {
        Self::new(concept, ErrorKind::InvalidIdentifier(id))
    }

    /// Returns true if this error reports an identifier collision.
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self.kind, ErrorKind::DuplicateIdentifier(_))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A record with this identifier already exists.
    #[error("record with ID {0} already exists")]
    DuplicateIdentifier(RecordId),

    /// Identifiers are positive; zero is rejected.
    #[error("record ID {0} is not a positive integer")]
    InvalidIdentifier(RecordId),

    /// The auto-assignment counter has no identifiers left.
    #[error("no identifiers left to assign")]
    IdentifierSpaceExhausted,
}
