//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use narrata_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_unknown_dialect() {
    let err = Error::unknown_dialect("sources/main/notes.md", ".md");
    assert!(matches!(err.kind, ErrorKind::UnknownDialect { .. }));
    let msg = format!("{err}");
    assert!(msg.contains(".md"));
    assert!(msg.contains("notes.md"));
}

#[test]
fn error_invalid_descriptor() {
    let err = Error::invalid_descriptor("place", "bad group");
    assert!(matches!(err.kind, ErrorKind::InvalidDescriptor { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("place"));
    assert!(msg.contains("bad group"));
}

#[test]
fn error_io() {
    let err = Error::io("disk full");
    assert!(matches!(err.kind, ErrorKind::Io(_)));
    assert!(format!("{err}").contains("disk full"));
}

// =============================================================================
// Error Classification
// =============================================================================

#[test]
fn configuration_errors() {
    assert!(Error::unknown_dialect("a.txt", ".txt").is_configuration());
    assert!(Error::invalid_descriptor("x", "y").is_configuration());
    assert!(Error::new(ErrorKind::MissingDirectory("sources".into())).is_configuration());
}

#[test]
fn environmental_errors() {
    assert!(!Error::io("x").is_configuration());
    assert!(!Error::new(ErrorKind::Serialization("x".into())).is_configuration());
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_without_context_has_no_suffix() {
    let err = Error::io("boom");
    assert_eq!(format!("{err}"), "i/o error: boom");
}

#[test]
fn error_with_full_context() {
    let err = Error::io("boom").with_context(
        ErrorContext::new()
            .with_package("main")
            .with_source("sources/main/ch1.place"),
    );
    assert_eq!(
        format!("{err}"),
        "i/o error: boom (in package main at sources/main/ch1.place)"
    );
}

#[test]
fn error_with_empty_context_has_no_suffix() {
    let err = Error::io("boom").with_context(ErrorContext::new());
    assert_eq!(format!("{err}"), "i/o error: boom");
}
