//! Line editor abstraction for the REPL.
//!
//! The REPL talks to a [`LineEditor`] so tests can feed it scripted input;
//! [`RustylineEditor`] is the interactive implementation.

use marshal_foundation::{Error, ErrorKind, Result};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);

    /// Set the method names offered for completion.
    fn set_method_names(&mut self, names: Vec<String>);
}

/// Helper for rustyline that provides completion and history hints.
#[derive(Helper, Completer, Hinter, Validator)]
struct MarshalHelper {
    #[rustyline(Completer)]
    completer: MethodCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

impl Highlighter for MarshalHelper {}

/// Completes method names and REPL commands at the start of a line.
struct MethodCompleter {
    names: Vec<String>,
}

impl MethodCompleter {
    fn new() -> Self {
        Self {
            names: [":help", ":methods", ":save", ":load", ":quit"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl Completer for MethodCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        // Only the method name is completed; arguments are free text
        let word = &line[..pos];
        if word.contains(['(', ' ']) {
            return Ok((pos, Vec::new()));
        }

        let candidates = self
            .names
            .iter()
            .filter(|name| name.starts_with(word))
            .map(|name| Pair {
                display: name.clone(),
                replacement: name.clone(),
            })
            .collect();

        Ok((0, candidates))
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<MarshalHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?
            .build();

        let helper = MarshalHelper {
            completer: MethodCompleter::new(),
            hinter: HistoryHinter::new(),
        };

        let mut editor = Editor::with_config(config)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::new(ErrorKind::Internal(e.to_string()))),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_method_names(&mut self, names: Vec<String>) {
        if let Some(helper) = self.editor.helper_mut() {
            let mut completer = MethodCompleter::new();
            completer.names.extend(names);
            helper.completer = completer;
        }
    }
}
