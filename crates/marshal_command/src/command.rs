//! The command aggregate.
//!
//! A command is a named call: the arguments going in and the values the
//! invoked method hands back.

use marshal_foundation::{Error, Result, ValueSeq};

use crate::definition::{Definition, matches_definition};
use crate::persist::{NAME_KEY, Persist, PropertyStore};
use crate::tokenizer::{ArgumentTokenizer, LossyNumber};

/// A named call with input and output values.
///
/// Only the name is persisted (see [`Persist`]); argument and return
/// sequences are not saved.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Command {
    /// Method name, compared case-sensitively against definitions.
    pub name: String,
    /// Input arguments.
    pub args: ValueSeq,
    /// Values filled in by the invoked method.
    pub returns: ValueSeq,
    lossy: Vec<LossyNumber>,
}

impl Command {
    /// Creates an empty command.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a command by tokenizing an argument string.
    #[must_use]
    pub fn parse(name: impl Into<String>, arguments: &str) -> Self {
        let report = ArgumentTokenizer::tokenize_with_report(arguments);
        Self {
            name: name.into(),
            args: report.values,
            returns: ValueSeq::new(),
            lossy: report.lossy,
        }
    }

    /// Creates a command from already-typed arguments.
    #[must_use]
    pub fn with_args(name: impl Into<String>, args: ValueSeq) -> Self {
        Self {
            name: name.into(),
            args,
            ..Self::default()
        }
    }

    /// Returns the numeric arguments that converted lossily when the
    /// argument string was tokenized.
    #[must_use]
    pub fn lossy_numbers(&self) -> &[LossyNumber] {
        &self.lossy
    }

    /// Resets the name and both sequences to empty.
    pub fn clear(&mut self) {
        self.name.clear();
        self.args.clear();
        self.returns.clear();
        self.lossy.clear();
    }

    /// Checks this command against a definition string by argument count.
    ///
    /// # Errors
    ///
    /// Returns a parse error if the definition has no `(`.
    pub fn matches_definition(&self, definition: &str) -> Result<bool> {
        matches_definition(&self.name, &self.args, definition)
    }

    /// Checks this command against a definition string by argument count
    /// and argument kinds.
    ///
    /// # Errors
    ///
    /// Returns a parse error if the definition is not well formed.
    pub fn matches_definition_strict(&self, definition: &str) -> Result<bool> {
        Ok(Definition::parse(definition)?.matches_strict(&self.name, &self.args))
    }
}

impl Persist for Command {
    fn save(&self, store: &mut dyn PropertyStore) -> Result<()> {
        store.store_value(NAME_KEY, &self.name);
        Ok(())
    }

    fn load(&mut self, store: &dyn PropertyStore) -> Result<()> {
        let name = store
            .retrieve_value(NAME_KEY)
            .ok_or_else(|| Error::missing_property(NAME_KEY))?;
        self.name = name.to_owned();
        Ok(())
    }
}
