//! Ordered sequences of values.
//!
//! A thin wrapper around `im::Vector` so that cloning a sequence (and the
//! command holding it) is O(1) with structural sharing.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use crate::error::Error;
use crate::value::Value;
use crate::Result;

/// Ordered, index-addressable, append-only list of values.
///
/// Insertion order is significant; duplicates and mixed kinds are allowed.
/// The only way to remove elements is [`clear`](Self::clear).
#[derive(Clone, Default)]
pub struct ValueSeq(im::Vector<Value>);

impl ValueSeq {
    /// Creates an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self(im::Vector::new())
    }

    /// Returns the number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends a value at the end.
    pub fn append(&mut self, value: impl Into<Value>) {
        self.0.push_back(value.into());
    }

    /// Gets the value at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::IndexOutOfRange`](crate::ErrorKind::IndexOutOfRange)
    /// if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&Value> {
        self.0
            .get(index)
            .ok_or_else(|| Error::index_out_of_range(index, self.0.len()))
    }

    /// Removes every value. Idempotent.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Returns an iterator over the values in order.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.0.iter()
    }
}

impl From<Value> for ValueSeq {
    fn from(value: Value) -> Self {
        Self(im::vector![value])
    }
}

impl fmt::Debug for ValueSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for ValueSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl PartialEq for ValueSeq {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for ValueSeq {}

impl Hash for ValueSeq {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl FromIterator<Value> for ValueSeq {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(im::Vector::from_iter(iter))
    }
}

impl Extend<Value> for ValueSeq {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for ValueSeq {
    type Item = Value;
    type IntoIter = im::vector::ConsumingIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValueSeq {
    type Item = &'a Value;
    type IntoIter = im::vector::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
