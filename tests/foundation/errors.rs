//! Integration tests for Error types
//!
//! Tests error construction, display, and error kinds.

use pokedex_foundation::{Error, ErrorKind, RecordId};

#[test]
fn error_duplicate_identifier() {
    let err = Error::duplicate_identifier("PokemonEntry", RecordId::new(25));
    assert!(matches!(err.kind, ErrorKind::DuplicateIdentifier(_)));
    assert!(err.is_duplicate());
    let msg = format!("{err}");
    assert!(msg.contains("PokemonEntry"));
    assert!(msg.contains("25"));
}

#[test]
fn error_identifier_space_exhausted() {
    let err = Error::identifier_space_exhausted("Type");
    assert_eq!(err.kind, ErrorKind::IdentifierSpaceExhausted);
    assert_eq!(err.concept, "Type");
    assert!(!err.is_duplicate());
}

#[test]
fn errors_compare_by_value() {
    let a = Error::duplicate_identifier("Type", RecordId::new(2));
    let b = Error::new("Type", ErrorKind::DuplicateIdentifier(RecordId::new(2)));
    assert_eq!(a, b);
    assert_ne!(a, Error::duplicate_identifier("Type", RecordId::new(3)));
}

#[test]
fn error_is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&Error::identifier_space_exhausted("Type"));
}
