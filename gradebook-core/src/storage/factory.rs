use std::collections::HashMap;

use super::kv::{KeyValueStore, MemoryStore, StorageError};

/// Backend-agnostic storage configuration.
///
/// `backend` must match the [`StorageFactory::backend_name`] of a
/// registered factory. `location` is passed through to that factory
/// unchanged; its meaning is entirely backend-specific.
///
/// | backend  | location examples          |
/// |----------|----------------------------|
/// | `memory` | ignored                    |
/// | `fs`     | `~/.local/share/gradebook` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Lowercase identifier matching a registered factory (e.g. `"fs"`).
    pub backend: String,
    /// Opaque value forwarded to the factory's `create` method.
    pub location: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: MemoryStoreFactory.backend_name().to_string(),
            location: String::new(),
        }
    }
}

/// One implementation per storage backend. Each backend crate exports a
/// unit struct that implements this trait and is registered with a
/// [`StorageRegistry`] at startup.
pub trait StorageFactory {
    /// Unique, lowercase identifier for this backend.
    fn backend_name(&self) -> &'static str;

    /// Open (or create) the store described by `config`.
    fn create(
        &self,
        config: &StorageConfig,
    ) -> Result<Box<dyn KeyValueStore>, StorageError>;
}

/// Factory for the in-process [`MemoryStore`]. Nothing survives the process.
pub struct MemoryStoreFactory;

impl StorageFactory for MemoryStoreFactory {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    fn create(
        &self,
        _config: &StorageConfig,
    ) -> Result<Box<dyn KeyValueStore>, StorageError> {
        Ok(Box::new(MemoryStore::new()))
    }
}

/// Registry of [`StorageFactory`] instances, keyed by backend name.
///
/// Typical lifetime:
/// 1. Create with `StorageRegistry::new()`.
/// 2. Call `register` once per known backend.
/// 3. Call `create` with the configured backend.
pub struct StorageRegistry {
    factories: HashMap<&'static str, Box<dyn StorageFactory>>,
}

impl StorageRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a backend factory.
    ///
    /// If a factory with the same [`StorageFactory::backend_name`] is
    /// already present it is silently replaced.
    pub fn register(
        &mut self,
        factory: Box<dyn StorageFactory>,
    ) {
        self.factories.insert(factory.backend_name(), factory);
    }

    /// Names of every registered backend, sorted alphabetically.
    pub fn available_backends(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Dispatch to the factory that matches `config.backend` and return
    /// the store it produces.
    ///
    /// # Errors
    /// * [`StorageError::Configuration`] when no factory is registered for
    ///   the requested backend name.
    /// * Any error the chosen factory itself returns.
    pub fn create(
        &self,
        config: &StorageConfig,
    ) -> Result<Box<dyn KeyValueStore>, StorageError> {
        let factory = self
            .factories
            .get(config.backend.as_str())
            .ok_or_else(|| {
                StorageError::Configuration(format!(
                    "unknown backend '{}'; available: {:?}",
                    config.backend,
                    self.available_backends()
                ))
            })?;

        factory.create(config)
    }
}

impl Default for StorageRegistry {
    fn default() -> Self {
        Self::new()
    }
}
