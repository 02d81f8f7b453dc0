//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use marshal_foundation::{Error, ErrorContext, ErrorKind, ValueKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_type_mismatch() {
    let err = Error::type_mismatch(ValueKind::Integer, ValueKind::String);
    assert!(matches!(err.kind, ErrorKind::TypeMismatch { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("integer"));
    assert!(msg.contains("string"));
}

#[test]
fn error_index_out_of_range() {
    let err = Error::index_out_of_range(5, 2);
    let msg = format!("{err}");
    assert!(msg.contains('5'));
    assert!(msg.contains('2'));
}

#[test]
fn error_parse_error() {
    let err = Error::parse_error("missing '('", "Get");
    assert!(err.is_parse_error());
    let msg = format!("{err}");
    assert!(msg.contains("Get"));
    assert!(msg.contains("missing '('"));
}

#[test]
fn error_missing_property() {
    let err = Error::missing_property("Name");
    assert!(matches!(err.kind, ErrorKind::MissingProperty(ref key) if key == "Name"));
    assert!(!err.is_parse_error());
}

#[test]
fn error_lossy_number() {
    let err = Error::lossy_number(1, " 1-2");
    assert!(matches!(err.kind, ErrorKind::LossyNumber { index: 1, .. }));
    assert!(format!("{err}").contains("1-2"));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_without_context() {
    let err = Error::new(ErrorKind::Internal("boom".into()));
    assert!(err.context.is_none());
}

#[test]
fn error_with_context() {
    let err = Error::missing_property("Name").with_context(
        ErrorContext::new()
            .with_source("Echo")
            .with_frame("Echo(.)"),
    );
    let context = err.context.as_ref().unwrap();
    assert_eq!(context.source.as_deref(), Some("Echo"));
    assert_eq!(context.stack, vec!["Echo(.)".to_string()]);

    let shown = context.to_string();
    assert!(shown.starts_with("at Echo"));
    assert!(shown.contains("in Echo(.)"));
}

#[test]
fn error_is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&Error::index_out_of_range(0, 0));
}

#[test]
fn error_usage_is_not_internal() {
    let err = Error::usage(":save requires a path");
    assert!(matches!(err.kind, ErrorKind::Usage(_)));
    assert_eq!(err.to_string(), "usage error: :save requires a path");
}
