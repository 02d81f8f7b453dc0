//! Marshal - Typed argument marshalling for textual method calls
//!
//! This crate re-exports all layers of the Marshal system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: marshal_runtime    - REPL, CLI, built-in methods
//! Layer 1: marshal_command    - Tokenizer, definition matching, commands, dispatch
//! Layer 0: marshal_foundation - Core types (Value, ValueSeq, handles, Error)
//! ```

pub use marshal_command as command;
pub use marshal_foundation as foundation;
pub use marshal_runtime as runtime;
