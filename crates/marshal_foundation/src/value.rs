//! Core value type for marshalled arguments and return values.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::Error;
use crate::handle::{BlobId, ObjectId};
use crate::kind::{Ownership, ValueKind};
use crate::Result;

/// A single argument or return datum.
///
/// Exactly one kind is active and it never changes after construction.
/// Reading requires asking for the right kind: the typed accessors fail
/// with [`ErrorKind::TypeMismatch`](crate::ErrorKind::TypeMismatch) rather
/// than converting.
#[derive(Clone)]
pub enum Value {
    /// 64-bit signed integer.
    Integer(i64),
    /// 64-bit floating point.
    Double(f64),
    /// Boolean value.
    Boolean(bool),
    /// Owned text.
    String(String),
    /// Aliasing reference to an external blob.
    BlobRef(BlobId),
    /// Aliasing reference to an external object.
    ObjectRef(ObjectId),
}

impl Value {
    /// Returns the active kind.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Integer(_) => ValueKind::Integer,
            Self::Double(_) => ValueKind::Double,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::String(_) => ValueKind::String,
            Self::BlobRef(_) => ValueKind::Blob,
            Self::ObjectRef(_) => ValueKind::Object,
        }
    }

    /// Returns whether cloning this value duplicates or aliases its payload.
    #[must_use]
    pub const fn ownership(&self) -> Ownership {
        self.kind().ownership()
    }

    /// Reads the integer payload.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch if this is not an integer.
    pub fn as_integer(&self) -> Result<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            other => Err(other.mismatch(ValueKind::Integer)),
        }
    }

    /// Reads the double payload.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch if this is not a double. Integers are not
    /// promoted.
    pub fn as_double(&self) -> Result<f64> {
        match self {
            Self::Double(n) => Ok(*n),
            other => Err(other.mismatch(ValueKind::Double)),
        }
    }

    /// Reads the boolean payload.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch if this is not a boolean.
    pub fn as_boolean(&self) -> Result<bool> {
        match self {
            Self::Boolean(b) => Ok(*b),
            other => Err(other.mismatch(ValueKind::Boolean)),
        }
    }

    /// Borrows the string payload.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch if this is not a string.
    pub fn as_str(&self) -> Result<&str> {
        match self {
            Self::String(s) => Ok(s),
            other => Err(other.mismatch(ValueKind::String)),
        }
    }

    /// Reads the blob handle.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch if this is not a blob reference.
    pub fn as_blob(&self) -> Result<BlobId> {
        match self {
            Self::BlobRef(id) => Ok(*id),
            other => Err(other.mismatch(ValueKind::Blob)),
        }
    }

    /// Reads the object handle.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch if this is not an object reference.
    pub fn as_object(&self) -> Result<ObjectId> {
        match self {
            Self::ObjectRef(id) => Ok(*id),
            other => Err(other.mismatch(ValueKind::Object)),
        }
    }

    fn mismatch(&self, expected: ValueKind) -> Error {
        Error::type_mismatch(expected, self.kind())
    }
}

// Doubles compare by bit pattern so Eq and Hash agree
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Double(a), Self::Double(b)) => a.to_bits() == b.to_bits(),
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::BlobRef(a), Self::BlobRef(b)) => a == b,
            (Self::ObjectRef(a), Self::ObjectRef(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Integer(n) => n.hash(state),
            Self::Double(n) => n.to_bits().hash(state),
            Self::Boolean(b) => b.hash(state),
            Self::String(s) => s.hash(state),
            Self::BlobRef(id) => id.hash(state),
            Self::ObjectRef(id) => id.hash(state),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "Integer({n})"),
            Self::Double(n) => write!(f, "Double({n:?})"),
            Self::Boolean(b) => write!(f, "Boolean({b})"),
            Self::String(s) => write!(f, "String({s:?})"),
            Self::BlobRef(id) => write!(f, "{id:?}"),
            Self::ObjectRef(id) => write!(f, "{id:?}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Double(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::String(s) => write!(f, "{s}"),
            Self::BlobRef(id) => write!(f, "{id}"),
            Self::ObjectRef(id) => write!(f, "{id}"),
        }
    }
}

// Convenience From implementations

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Double(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<BlobId> for Value {
    fn from(id: BlobId) -> Self {
        Self::BlobRef(id)
    }
}

impl From<ObjectId> for Value {
    fn from(id: ObjectId) -> Self {
        Self::ObjectRef(id)
    }
}
