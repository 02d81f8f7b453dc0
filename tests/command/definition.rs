//! Integration tests for definition matching
//!
//! Tests the count-only matcher, the wildcard, and strict kind checking.

use marshal_command::{Command, Definition, TypeToken, matches_definition};
use marshal_foundation::{ObjectId, Value, ValueKind, ValueSeq};

fn strings(n: usize) -> ValueSeq {
    (0..n).map(|i| Value::from(format!("s{i}"))).collect()
}

// =============================================================================
// Count-Only Matching
// =============================================================================

#[test]
fn zero_arguments() {
    let cmd = Command::parse("Get", "");
    assert!(cmd.matches_definition("Get()").unwrap());
    assert!(!cmd.matches_definition("Get(s)").unwrap());
}

#[test]
fn exact_count() {
    let cmd = Command::with_args("Set", strings(2));
    assert!(cmd.matches_definition("Set(v,v)").unwrap());
    assert!(!cmd.matches_definition("Set(v)").unwrap());
    assert!(!cmd.matches_definition("Set(v,v,v)").unwrap());
}

#[test]
fn kinds_are_not_checked() {
    let args: ValueSeq = [Value::Boolean(true), Value::from(ObjectId::new(1, 0))]
        .into_iter()
        .collect();
    assert!(matches_definition("Set", &args, "Set(n,s)").unwrap());
}

#[test]
fn name_must_match_exactly() {
    let args = strings(1);
    assert!(!matches_definition("get", &args, "Get(s)").unwrap());
    assert!(!matches_definition("Ge", &args, "Get(s)").unwrap());
    assert!(!matches_definition("Get ", &args, "Get(s)").unwrap());
}

#[test]
fn missing_open_paren_is_an_error() {
    let err = matches_definition("Get", &strings(0), "Get").unwrap_err();
    assert!(err.is_parse_error());
}

#[test]
fn missing_close_paren_stops_at_end() {
    assert!(matches_definition("Get", &strings(1), "Get(s").unwrap());
    assert!(!matches_definition("Get", &strings(2), "Get(s").unwrap());
}

// =============================================================================
// Wildcard
// =============================================================================

#[test]
fn wildcard_accepts_any_count() {
    for n in 0..8 {
        assert!(
            matches_definition("Log", &strings(n), "Log(.)").unwrap(),
            "{n} arguments"
        );
    }
}

#[test]
fn wildcard_after_fixed_positions() {
    assert!(!matches_definition("Log", &strings(0), "Log(s,.)").unwrap());
    assert!(matches_definition("Log", &strings(1), "Log(s,.)").unwrap());
    assert!(matches_definition("Log", &strings(5), "Log(s,.)").unwrap());
}

// =============================================================================
// Strict Matching
// =============================================================================

#[test]
fn strict_checks_kinds() {
    let cmd = Command::with_args("Set", strings(2));
    assert!(cmd.matches_definition("Set(v,v)").unwrap());
    assert!(!cmd.matches_definition_strict("Set(v,v)").unwrap());
    assert!(cmd.matches_definition_strict("Set(s,s)").unwrap());
    assert!(cmd.matches_definition_strict("Set(s,?)").unwrap());
}

#[test]
fn strict_mixed_kinds() {
    let cmd = Command::parse("Put", "1, 2.5, true, x");
    assert!(cmd.matches_definition_strict("Put(n,v,b,s)").unwrap());
    assert!(!cmd.matches_definition_strict("Put(v,n,b,s)").unwrap());
    assert!(cmd.matches_definition_strict("Put(n,.)").unwrap());
}

#[test]
fn strict_rejects_malformed_definitions() {
    let cmd = Command::parse("Put", "1");
    assert!(cmd.matches_definition_strict("Put(x)").is_err());
    assert!(cmd.matches_definition_strict("Put(n").is_err());
    assert!(cmd.matches_definition_strict("Put(n, n)").is_err());
}

#[test]
fn parsed_definition_structure() {
    let def = Definition::parse("Log(s,?,.)").unwrap();
    assert_eq!(def.name(), "Log");
    assert_eq!(
        def.params(),
        &[TypeToken::Kind(ValueKind::String), TypeToken::Any]
    );
    assert!(def.is_variadic());
    assert_eq!(def.to_string(), "Log(s,?,.)");
}

#[test]
fn parsed_definition_agrees_with_string_matcher() {
    for definition in ["Get()", "Set(v,v)", "Log(.)", "Log(s,.)", "Put(n,n,n)"] {
        let parsed = Definition::parse(definition).unwrap();
        for n in 0..5 {
            let args = strings(n);
            let name = parsed.name().to_string();
            assert_eq!(
                parsed.matches(&name, &args),
                matches_definition(&name, &args, definition).unwrap(),
                "{definition} with {n} arguments"
            );
        }
    }
}
