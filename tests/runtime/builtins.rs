//! Integration tests for the built-in methods

use marshal_command::{Command, DispatchConfig};
use marshal_foundation::{ErrorKind, Value};
use marshal_runtime::builtins;

fn call(name: &str, arguments: &str) -> marshal_foundation::Result<Option<Vec<Value>>> {
    let dispatcher = builtins::dispatcher(DispatchConfig::default())?;
    let mut cmd = Command::parse(name, arguments);
    Ok(dispatcher
        .dispatch(&mut cmd)?
        .then(|| cmd.returns.into_iter().collect()))
}

#[test]
fn add_wraps_on_overflow() {
    assert_eq!(
        call("Add", "9223372036854775807, 1").unwrap(),
        Some(vec![Value::Integer(i64::MIN)])
    );
}

#[test]
fn add_needs_two_arguments() {
    assert_eq!(call("Add", "1").unwrap(), None);
    assert_eq!(call("Add", "1, 2, 3").unwrap(), None);
}

#[test]
fn concat_requires_leading_string() {
    let err = call("Concat", "1, 2").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TypeMismatch { .. }));
    assert!(err.context.is_some());
}

#[test]
fn kinds_of_quoted_and_bare() {
    assert_eq!(
        call("Kinds", "\"1\", 1").unwrap(),
        Some(vec![Value::from("string"), Value::from("integer")])
    );
}
