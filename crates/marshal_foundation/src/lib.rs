//! Typed values, value sequences, handles, and errors for Marshal.
//!
//! This crate provides:
//! - [`Value`] - A tagged union holding exactly one primitive argument
//! - [`ValueKind`] - The tag of a [`Value`], with its definition token
//! - [`ValueSeq`] - An ordered, append-only sequence of values
//! - [`BlobId`] / [`ObjectId`] - Non-owning handles into external stores
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod handle;
pub mod kind;
pub mod sequence;
pub mod value;

pub use error::{Error, ErrorContext, ErrorKind};
pub use handle::{BlobId, ObjectId};
pub use kind::{Ownership, ValueKind};
pub use sequence::ValueSeq;
pub use value::Value;

/// Result type alias using the Marshal error type.
pub type Result<T> = std::result::Result<T, Error>;
