//! Property store collaborator.
//!
//! Commands persist through a minimal key/value interface so the storage
//! backend stays outside this crate. [`MemoryStore`] is the provided
//! backend; it can be written to and read from `MessagePack` files.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use marshal_foundation::{Error, ErrorKind, Result};
use serde::{Deserialize, Serialize};

/// The key a command's name is stored under.
pub const NAME_KEY: &str = "Name";

/// Key/value storage for persisted fields.
pub trait PropertyStore {
    /// Stores `value` under `key`, replacing any previous value.
    fn store_value(&mut self, key: &str, value: &str);

    /// Retrieves the value stored under `key`.
    fn retrieve_value(&self, key: &str) -> Option<&str>;
}

/// Types that can save themselves to and load themselves from a store.
pub trait Persist {
    /// Writes persisted fields into `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if a field cannot be written.
    fn save(&self, store: &mut dyn PropertyStore) -> Result<()>;

    /// Reads persisted fields back from `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is missing.
    fn load(&mut self, store: &dyn PropertyStore) -> Result<()>;
}

/// In-memory property store, ordered by key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryStore {
    properties: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Returns an iterator over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serializes the store to bytes using `MessagePack` format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        rmp_serde::to_vec_named(self)
            .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
    }

    /// Deserializes a store from `MessagePack` bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        rmp_serde::from_slice(bytes)
            .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
    }

    /// Saves the store to a file, creating or overwriting it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| io_error("create", path, &e))?;

        let mut writer = BufWriter::new(file);
        let bytes = self.to_bytes()?;
        writer
            .write_all(&bytes)
            .map_err(|e| io_error("write to", path, &e))?;
        writer.flush().map_err(|e| io_error("flush", path, &e))?;

        Ok(())
    }

    /// Loads a store from a `MessagePack` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or deserialization fails.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| io_error("open", path, &e))?;

        let mut reader = BufReader::new(file);
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|e| io_error("read", path, &e))?;

        Self::from_bytes(&bytes)
    }
}

impl PropertyStore for MemoryStore {
    fn store_value(&mut self, key: &str, value: &str) {
        self.properties.insert(key.to_owned(), value.to_owned());
    }

    fn retrieve_value(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}

fn io_error(action: &str, path: &Path, err: &std::io::Error) -> Error {
    Error::new(ErrorKind::IoError(format!(
        "failed to {action} file '{}': {err}",
        path.display()
    )))
}
