//! The main REPL implementation.
//!
//! Each input line is a call such as `Add(1, 2)`. The text between the first
//! `(` and the last `)` is the argument string; a line without parentheses
//! is a call with no arguments. Lines starting with `:` are REPL commands.

use std::io::{self, Write};

use marshal_command::{Command, Dispatcher, MemoryStore, Persist};
use marshal_foundation::{Error, Result, ValueSeq};
use tracing::debug;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};

/// What evaluating one line produced.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// A method ran and returned these values.
    Returned(ValueSeq),
    /// No registered definition matched the call.
    NoMatch(String),
    /// A REPL command produced a message.
    Message(String),
    /// The user asked to leave.
    Quit,
}

/// Splits a call line into a command.
#[must_use]
pub fn parse_call(line: &str) -> Command {
    let line = line.trim();
    let Some(open) = line.find('(') else {
        return Command::parse(line, "");
    };

    let name = line[..open].trim_end();
    let rest = &line[open + 1..];
    let arguments = match rest.rfind(')') {
        Some(close) => &rest[..close],
        None => rest,
    };
    Command::parse(name, arguments)
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Methods callable from the prompt.
    dispatcher: Dispatcher,

    /// The most recently dispatched command.
    last: Option<Command>,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(dispatcher: Dispatcher) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, dispatcher))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(mut editor: E, dispatcher: Dispatcher) -> Self {
        // Overloads share a name; definitions() is already sorted by name
        let mut names: Vec<String> = dispatcher
            .definitions()
            .into_iter()
            .map(|def| def.name().to_owned())
            .collect();
        names.dedup();
        editor.set_method_names(names);

        Self {
            editor,
            dispatcher,
            last: None,
            show_banner: true,
            prompt: "marshal> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns the line editor.
    #[must_use]
    pub const fn editor(&self) -> &E {
        &self.editor
    }

    /// Returns the dispatcher.
    #[must_use]
    pub const fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Returns the most recently dispatched (or loaded) command.
    #[must_use]
    pub const fn last_command(&self) -> Option<&Command> {
        self.last.as_ref()
    }

    /// Runs the REPL loop until EOF or `:quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => break,
            };
            if line.trim().is_empty() {
                continue;
            }
            self.editor.add_history(&line);

            match self.eval(&line) {
                Ok(Outcome::Quit) => break,
                Ok(outcome) => println!("{}", render(&outcome)),
                Err(e) => eprintln!("\x1b[31m{}\x1b[0m", render_error(&e)),
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Evaluates one line.
    ///
    /// # Errors
    ///
    /// Returns an error if the invoked method fails, a lossy argument is
    /// rejected, or a REPL command fails.
    pub fn eval(&mut self, line: &str) -> Result<Outcome> {
        let line = line.trim();
        if let Some(command) = line.strip_prefix(':') {
            return self.eval_repl_command(command);
        }

        let mut command = parse_call(line);
        let matched = self.dispatcher.dispatch(&mut command)?;
        let outcome = if matched {
            Outcome::Returned(command.returns.clone())
        } else {
            Outcome::NoMatch(format!(
                "no method matches {}({} arguments)",
                command.name,
                command.args.len()
            ))
        };
        self.last = Some(command);
        Ok(outcome)
    }

    fn eval_repl_command(&mut self, input: &str) -> Result<Outcome> {
        let (command, argument) = match input.split_once(char::is_whitespace) {
            Some((command, argument)) => (command, argument.trim()),
            None => (input, ""),
        };
        debug!(command, argument, "repl command");

        match command {
            "help" | "h" => Ok(Outcome::Message(HELP.to_string())),
            "methods" | "m" => {
                let listed: Vec<&str> = self
                    .dispatcher
                    .definitions()
                    .into_iter()
                    .map(|def| def.as_str())
                    .collect();
                Ok(Outcome::Message(listed.join("\n")))
            }
            "save" => {
                let path = require_path(command, argument)?;
                let last = self
                    .last
                    .as_ref()
                    .ok_or_else(|| Error::usage("no command to save"))?;
                let mut store = MemoryStore::new();
                last.save(&mut store)?;
                store.save_to_file(path)?;
                Ok(Outcome::Message(format!("saved {} to {path}", last.name)))
            }
            "load" => {
                let path = require_path(command, argument)?;
                let store = MemoryStore::load_from_file(path)?;
                let mut loaded = Command::new();
                loaded.load(&store)?;
                let message = format!("loaded {} from {path}", loaded.name);
                self.last = Some(loaded);
                Ok(Outcome::Message(message))
            }
            "quit" | "q" => Ok(Outcome::Quit),
            other => Err(Error::usage(format!("unknown REPL command :{other} (try :help)"))),
        }
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("Marshal v{}", env!("CARGO_PKG_VERSION"));
        println!("Type calls like Add(1, 2). Use :help for commands, Ctrl+D to exit.\n");

        // Flush to ensure banner appears
        let _ = io::stdout().flush();
    }
}

const HELP: &str = "\
Calls:     Name(arg, arg, ...)   quoted text stays a string: Echo(\"1, 2\")
:methods   list registered definitions
:save PATH persist the last command's name
:load PATH restore a command name
:quit      exit";

fn require_path<'a>(command: &str, argument: &'a str) -> Result<&'a str> {
    if argument.is_empty() {
        return Err(Error::usage(format!(":{command} requires a path")));
    }
    Ok(argument)
}

/// Formats an error for display, followed by its context when present.
#[must_use]
pub fn render_error(error: &Error) -> String {
    match &error.context {
        Some(context) => format!("Error: {error} {}", context.to_string().trim_end()),
        None => format!("Error: {error}"),
    }
}

/// Formats an outcome for display.
#[must_use]
pub fn render(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Returned(values) if values.is_empty() => "=> (nothing)".to_string(),
        Outcome::Returned(values) => values
            .iter()
            .map(|value| format!("=> {value:?}"))
            .collect::<Vec<_>>()
            .join("\n"),
        Outcome::NoMatch(message) | Outcome::Message(message) => message.clone(),
        Outcome::Quit => String::new(),
    }
}
