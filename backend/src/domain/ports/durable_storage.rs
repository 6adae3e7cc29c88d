//! Driven port for the key-value storage that outlives a single request.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::define_port_error;

define_port_error! {
    /// Failures raised by durable session storage.
    pub enum StorageError {
        Read { key: String, message: String } => "failed to read `{key}`: {message}",
        Write { key: String, message: String } => "failed to write `{key}`: {message}",
    }
}

/// String key-value storage that survives reloads.
///
/// Production uses the encrypted session cookie; tests use
/// [`MemoryStorage`].
#[cfg_attr(test, mockall::automock)]
pub trait DurableStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Shared in-process storage. Clones see the same entries, which lets a
/// test restore a fresh session store over the same "browser".
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn with_entries<T>(
        &self,
        key: &str,
        on_poison: fn(String, String) -> StorageError,
        f: impl FnOnce(&mut HashMap<String, String>) -> T,
    ) -> Result<T, StorageError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| on_poison(key.to_owned(), "storage lock poisoned".to_owned()))?;
        Ok(f(&mut entries))
    }
}

impl DurableStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.with_entries(key, |k, m| StorageError::read(k, m), |entries| entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.with_entries(key, |k, m| StorageError::write(k, m), |entries| {
            entries.insert(key.to_owned(), value.to_owned());
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.with_entries(key, |k, m| StorageError::write(k, m), |entries| {
            entries.remove(key);
        })
    }
}
