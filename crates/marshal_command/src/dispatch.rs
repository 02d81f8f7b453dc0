//! Method table and invocation.
//!
//! A [`Dispatcher`] owns the mapping from method names to implementations.
//! Several definitions may share a name; they are tried in registration
//! order and the first one that matches the command is invoked.

use std::collections::HashMap;

use marshal_foundation::{Error, ErrorContext, Result, ValueSeq};
use tracing::debug;

use crate::command::Command;
use crate::config::DispatchConfig;
use crate::definition::Definition;

/// A method implementation: reads the arguments and appends return values.
pub type MethodFn = fn(&ValueSeq, &mut ValueSeq) -> Result<()>;

/// A registered method.
#[derive(Clone)]
pub struct Method {
    definition: Definition,
    func: MethodFn,
}

impl Method {
    /// Returns the method's definition.
    #[must_use]
    pub const fn definition(&self) -> &Definition {
        &self.definition
    }

    /// Calls the implementation.
    ///
    /// # Errors
    ///
    /// Returns whatever error the implementation reports.
    pub fn invoke(&self, args: &ValueSeq, returns: &mut ValueSeq) -> Result<()> {
        (self.func)(args, returns)
    }
}

impl std::fmt::Debug for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Method({})", self.definition)
    }
}

/// Dispatches commands to registered methods.
#[derive(Clone, Debug, Default)]
pub struct Dispatcher {
    config: DispatchConfig,
    methods: HashMap<String, Vec<Method>>,
}

impl Dispatcher {
    /// Creates an empty dispatcher with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty dispatcher with the given configuration.
    #[must_use]
    pub fn with_config(config: DispatchConfig) -> Self {
        Self {
            config,
            methods: HashMap::new(),
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Registers a method under its definition.
    ///
    /// # Errors
    ///
    /// Returns a parse error if the definition is not well formed.
    pub fn register(&mut self, definition: &str, func: MethodFn) -> Result<()> {
        let definition = Definition::parse(definition)?;
        debug!(%definition, "register method");
        self.methods
            .entry(definition.name().to_owned())
            .or_default()
            .push(Method { definition, func });
        Ok(())
    }

    /// Returns true if any method is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Returns every registered definition, sorted by name then
    /// registration order.
    #[must_use]
    pub fn definitions(&self) -> Vec<&Definition> {
        let mut names: Vec<&String> = self.methods.keys().collect();
        names.sort();
        names
            .into_iter()
            .flat_map(|name| self.methods[name].iter().map(Method::definition))
            .collect()
    }

    /// Finds the method a command would invoke.
    ///
    /// Returns `Ok(None)` when no definition matches.
    ///
    /// # Errors
    ///
    /// Returns a lossy number error if the configuration rejects lossy
    /// numeric arguments and the command has one.
    pub fn resolve(&self, command: &Command) -> Result<Option<&Method>> {
        if self.config.reject_lossy_numbers {
            if let Some(lossy) = command.lossy_numbers().first() {
                return Err(Error::lossy_number(lossy.index, lossy.text.clone())
                    .with_context(ErrorContext::new().with_source(command.name.clone())));
            }
        }

        let Some(candidates) = self.methods.get(&command.name) else {
            return Ok(None);
        };

        let strict = self.config.strict_types;
        Ok(candidates.iter().find(|method| {
            if strict {
                method.definition.matches_strict(&command.name, &command.args)
            } else {
                method.definition.matches(&command.name, &command.args)
            }
        }))
    }

    /// Invokes the method matching `command`, replacing its return values.
    ///
    /// Returns `Ok(false)` if no method matches; `returns` is left empty.
    ///
    /// # Errors
    ///
    /// Returns an error if [`resolve`](Self::resolve) fails or the invoked
    /// method reports one. Method errors carry the command name and the
    /// matched definition as context.
    #[tracing::instrument(level = "debug", skip_all, fields(name = %command.name, args = command.args.len()))]
    pub fn dispatch(&self, command: &mut Command) -> Result<bool> {
        command.returns.clear();

        let Some(method) = self.resolve(command)? else {
            debug!("no matching method");
            return Ok(false);
        };

        debug!(definition = %method.definition, "invoke");
        method
            .invoke(&command.args, &mut command.returns)
            .map_err(|e| {
                e.with_context(
                    ErrorContext::new()
                        .with_source(command.name.clone())
                        .with_frame(method.definition.as_str()),
                )
            })?;
        Ok(true)
    }
}
