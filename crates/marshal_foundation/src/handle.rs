//! Non-owning handles to externally managed blobs and objects.
//!
//! The resources behind these handles live in stores outside this crate.
//! A [`Value`](crate::Value) holding a handle aliases the resource: copying
//! the value copies the handle, never the resource, and the owning store
//! must keep the resource alive for as long as any value refers to it.

use std::fmt;

/// Handle to an externally owned binary blob.
///
/// # Layout
/// - `index`: 64-bit index into the owning blob store
/// - `generation`: 32-bit generation counter for stale reference detection
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct BlobId {
    /// Index into the blob store.
    pub index: u64,
    /// Generation counter for stale reference detection.
    pub generation: u32,
}

impl BlobId {
    /// Creates a new blob handle with the given index and generation.
    #[must_use]
    pub const fn new(index: u64, generation: u32) -> Self {
        Self { index, generation }
    }
}

impl fmt::Debug for BlobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlobId({}v{})", self.index, self.generation)
    }
}

impl fmt::Display for BlobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Blob({})", self.index)
    }
}

/// Handle to an externally owned object.
///
/// Same layout as [`BlobId`]; the two are distinct types so a blob handle
/// can never be passed where an object is expected.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct ObjectId {
    /// Index into the object store.
    pub index: u64,
    /// Generation counter for stale reference detection.
    pub generation: u32,
}

impl ObjectId {
    /// Creates a new object handle with the given index and generation.
    #[must_use]
    pub const fn new(index: u64, generation: u32) -> Self {
        Self { index, generation }
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({}v{})", self.index, self.generation)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Object({})", self.index)
    }
}
