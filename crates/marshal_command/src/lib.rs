//! Argument tokenizer, definition matcher, commands, and dispatch for Marshal.
//!
//! This crate turns free-form textual calls into typed invocations.
//!
//! # Architecture
//!
//! ```text
//! "\"String 1\", 2, 3.3, False"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → [String("String 1"), Integer(2), Double(3.3), Boolean(false)]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ COMMAND         │  → { name: "Set", args: [...], returns: [] }
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ DEFINITION      │  → "Set(s,n,v,b)" accepts / rejects
//! │ MATCHING        │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ DISPATCH        │  → method fills `returns`
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`numeric`] - Permissive C-locale number parsing
//! - [`tokenizer`] - Argument string to value sequence
//! - [`definition`] - Definition strings and signature matching
//! - [`command`] - The command aggregate
//! - [`persist`] - Property store collaborator
//! - [`config`] - Dispatch configuration
//! - [`dispatch`] - Method table and invocation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod config;
pub mod definition;
pub mod dispatch;
pub mod numeric;
pub mod persist;
pub mod tokenizer;

// Re-export main types for convenience
pub use command::Command;
pub use config::DispatchConfig;
pub use definition::{Definition, TypeToken, matches_definition};
pub use dispatch::{Dispatcher, Method, MethodFn};
pub use persist::{MemoryStore, NAME_KEY, Persist, PropertyStore};
pub use tokenizer::{ArgumentTokenizer, LossyNumber, TokenizeReport};
