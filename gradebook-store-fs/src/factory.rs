use gradebook_core::storage::{KeyValueStore, StorageConfig, StorageError, StorageFactory};

use crate::FileStore;

/// [`StorageFactory`] for the directory-backed [`FileStore`].
///
/// Register this with a [`gradebook_core::storage::StorageRegistry`] to make
/// the `"fs"` backend available:
///
/// ```rust,no_run
/// use gradebook_core::storage::StorageRegistry;
/// use gradebook_store_fs::FileStoreFactory;
///
/// let mut registry = StorageRegistry::new();
/// registry.register(Box::new(FileStoreFactory));
/// ```
pub struct FileStoreFactory;

impl StorageFactory for FileStoreFactory {
    fn backend_name(&self) -> &'static str {
        "fs"
    }

    /// Open the directory named by `config.location`, creating it if it
    /// does not exist.
    ///
    /// # Errors
    /// * [`StorageError::Configuration`] when `location` is empty.
    /// * [`StorageError::Io`] when the directory cannot be created.
    fn create(
        &self,
        config: &StorageConfig,
    ) -> Result<Box<dyn KeyValueStore>, StorageError> {
        if config.location.trim().is_empty() {
            return Err(StorageError::Configuration(
                "the fs backend needs a directory location".to_string(),
            ));
        }
        Ok(Box::new(FileStore::open(&config.location)?))
    }
}
