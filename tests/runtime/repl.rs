//! Integration tests for the REPL
//!
//! Drives the REPL through a scripted line editor.

use marshal_command::DispatchConfig;
use marshal_foundation::{ErrorKind, Result, Value, ValueSeq};
use marshal_runtime::{
    LineEditor, Outcome, ReadResult, Repl, builtins, parse_call, render, render_error,
};

/// Feeds a fixed list of lines, then reports EOF.
struct ScriptedEditor {
    lines: std::vec::IntoIter<String>,
    completions: Vec<String>,
}

impl ScriptedEditor {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines
                .iter()
                .map(|s| (*s).to_string())
                .collect::<Vec<_>>()
                .into_iter(),
            completions: Vec::new(),
        }
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self.lines.next().map_or(ReadResult::Eof, ReadResult::Line))
    }

    fn add_history(&mut self, _line: &str) {}

    fn set_method_names(&mut self, names: Vec<String>) {
        self.completions = names;
    }
}

fn repl_with(config: DispatchConfig, lines: &[&str]) -> Repl<ScriptedEditor> {
    let dispatcher = builtins::dispatcher(config).unwrap();
    Repl::with_editor(ScriptedEditor::new(lines), dispatcher).without_banner()
}

fn repl() -> Repl<ScriptedEditor> {
    repl_with(DispatchConfig::default(), &[])
}

#[test]
fn call_line_is_tokenized() {
    let cmd = parse_call("Concat(\"a, b\", 1, true)");
    assert_eq!(cmd.name, "Concat");
    assert_eq!(cmd.args.len(), 3);
    assert_eq!(cmd.args.get(0).unwrap(), &Value::from("a, b"));
}

#[test]
fn evaluates_builtin_calls() {
    let mut repl = repl();
    let Outcome::Returned(values) = repl.eval("Add(2, 40)").unwrap() else {
        panic!("expected a return");
    };
    assert_eq!(render(&Outcome::Returned(values)), "=> Integer(42)");
}

#[test]
fn bare_name_is_zero_argument_call() {
    let mut repl = repl();
    assert_eq!(
        repl.eval("Echo").unwrap(),
        Outcome::Returned(ValueSeq::new())
    );
}

#[test]
fn unknown_method_is_no_match() {
    let mut repl = repl();
    assert!(matches!(repl.eval("Nope(1)").unwrap(), Outcome::NoMatch(_)));
}

#[test]
fn strict_configuration_applies() {
    let mut repl = repl_with(DispatchConfig::strict(), &[]);
    assert!(matches!(repl.eval("Len(42)").unwrap(), Outcome::NoMatch(_)));
    assert!(matches!(repl.eval("Len(abc)").unwrap(), Outcome::Returned(_)));
}

#[test]
fn lossy_rejection_is_an_error() {
    let config = DispatchConfig::permissive().with_reject_lossy_numbers(true);
    let mut repl = repl_with(config, &[]);
    assert!(repl.eval("Add(1, -)").is_err());
    assert!(repl.eval("Add(1, 2)").is_ok());
}

#[test]
fn methods_command_lists_builtins() {
    let mut repl = repl();
    let Outcome::Message(listing) = repl.eval(":methods").unwrap() else {
        panic!("expected a message");
    };
    for def in ["Add(?,?)", "Concat(s,.)", "Echo(.)", "Kinds(.)", "Len(s)", "Not(b)"] {
        assert!(listing.lines().any(|line| line == def), "missing {def}");
    }
}

#[test]
fn save_and_load_across_sessions() {
    let path = std::env::temp_dir().join(format!("marshal-it-repl-{}.mp", std::process::id()));
    let path = path.display().to_string();

    let mut first = repl();
    first.eval("Kinds(1, x)").unwrap();
    first.eval(&format!(":save {path}")).unwrap();

    let mut second = repl();
    second.eval(&format!(":load {path}")).unwrap();
    assert_eq!(second.last_command().unwrap().name, "Kinds");

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn run_consumes_script_until_eof() {
    let mut repl = repl_with(DispatchConfig::default(), &["Echo(1)", "Not(1)", "Echo(2)"]);
    repl.run().unwrap();
    assert_eq!(
        repl.last_command().unwrap().args.get(0).unwrap(),
        &Value::Integer(2)
    );
}

#[test]
fn run_stops_at_quit() {
    let mut repl = repl_with(DispatchConfig::default(), &["Echo(1)", ":q", "Echo(2)"]);
    repl.run().unwrap();
    assert_eq!(
        repl.last_command().unwrap().args.get(0).unwrap(),
        &Value::Integer(1)
    );
}

#[test]
fn method_error_shows_where_it_happened() {
    let mut repl = repl();
    let err = repl.eval("Concat(1, 2)").unwrap_err();
    let shown = render_error(&err);
    assert!(shown.starts_with("Error: type mismatch"));
    assert!(shown.contains("at Concat"));
    assert!(shown.contains("in Concat(s,.)"));
}

#[test]
fn malformed_repl_commands_are_usage_errors() {
    let mut repl = repl();
    for line in [":save", ":load", ":frobnicate"] {
        let err = repl.eval(line).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Usage(_)), "{line}");
    }
}

#[test]
fn overloaded_names_complete_once() {
    fn nothing(_: &ValueSeq, _: &mut ValueSeq) -> Result<()> {
        Ok(())
    }

    let mut dispatcher = builtins::dispatcher(DispatchConfig::default()).unwrap();
    dispatcher.register("Len()", nothing).unwrap();
    dispatcher.register("Len(s,s)", nothing).unwrap();
    let repl = Repl::with_editor(ScriptedEditor::new(&[]), dispatcher);
    let completions = &repl.editor().completions;
    assert_eq!(completions.iter().filter(|n| *n == "Len").count(), 1);
    assert_eq!(
        completions,
        &["Add", "Concat", "Echo", "Kinds", "Len", "Not"]
            .map(String::from)
            .to_vec()
    );
}
