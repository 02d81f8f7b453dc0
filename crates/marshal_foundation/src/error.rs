//! Error types for the Marshal system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::kind::ValueKind;

/// The main error type for Marshal operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: ValueKind, actual: ValueKind) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, actual })
    }

    /// Creates an index out of range error.
    #[must_use]
    pub fn index_out_of_range(index: usize, length: usize) -> Self {
        Self::new(ErrorKind::IndexOutOfRange { index, length })
    }

    /// Creates a definition parse error.
    #[must_use]
    pub fn parse_error(message: impl Into<String>, definition: impl Into<String>) -> Self {
        Self::new(ErrorKind::ParseError {
            message: message.into(),
            definition: definition.into(),
        })
    }

    /// Creates a missing property error.
    #[must_use]
    pub fn missing_property(key: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingProperty(key.into()))
    }

    /// Creates a lossy number error.
    #[must_use]
    pub fn lossy_number(index: usize, text: impl Into<String>) -> Self {
        Self::new(ErrorKind::LossyNumber {
            index,
            text: text.into(),
        })
    }

    /// Creates a usage error for a malformed user request.
    #[must_use]
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Usage(message.into()))
    }

    /// Returns true if this error is a malformed-definition error.
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(self.kind, ErrorKind::ParseError { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A value was read as the wrong kind.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The kind the caller asked for.
        expected: ValueKind,
        /// The kind the value actually holds.
        actual: ValueKind,
    },

    /// Sequence access beyond its current length.
    #[error("index out of range: {index} (length {length})")]
    IndexOutOfRange {
        /// The index that was accessed.
        index: usize,
        /// The actual length of the sequence.
        length: usize,
    },

    /// Malformed method definition string.
    #[error("parse error in definition {definition:?}: {message}")]
    ParseError {
        /// Description of the problem.
        message: String,
        /// The definition string being parsed.
        definition: String,
    },

    /// A persisted property was not present on load.
    #[error("missing property: {0}")]
    MissingProperty(String),

    /// A numeric argument whose text did not fully parse.
    #[error("lossy numeric argument at index {index}: {text:?}")]
    LossyNumber {
        /// Position of the argument in the sequence.
        index: usize,
        /// The raw argument text.
        text: String,
    },

    /// Encoding or decoding a property store failed.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// File access failed.
    #[error("I/O error: {0}")]
    IoError(String),

    /// A REPL or command-line request was malformed.
    #[error("usage error: {0}")]
    Usage(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Command or file the error relates to.
    pub source: Option<String>,
    /// Method definitions being evaluated, innermost last.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
