use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("invalid storage key '{0}'")]
    InvalidKey(String),

    #[error("storage quota exceeded writing '{key}' ({needed} bytes, {limit} allowed)")]
    QuotaExceeded {
        key: String,
        needed: usize,
        limit: usize,
    },

    #[error("I/O error on '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not encode state: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Configuration(String),
}

/// A string-to-string store the application state is written to.
///
/// Reads report absence as `Ok(None)`; callers decide how tolerant to be of
/// a failed read.
pub trait KeyValueStore {
    fn read(
        &self,
        key: &str,
    ) -> Result<Option<String>, StorageError>;

    fn write(
        &mut self,
        key: &str,
        value: &str,
    ) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn read(
        &self,
        key: &str,
    ) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(
        &mut self,
        key: &str,
        value: &str,
    ) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

/// In-process store, optionally capped at a total byte size.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects writes once keys plus values exceed `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota: Some(bytes),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn used_without(
        &self,
        key: &str,
    ) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(
        &self,
        key: &str,
    ) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(
        &mut self,
        key: &str,
        value: &str,
    ) -> Result<(), StorageError> {
        if let Some(limit) = self.quota {
            let needed = self.used_without(key) + key.len() + value.len();
            if needed > limit {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    limit,
                });
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
