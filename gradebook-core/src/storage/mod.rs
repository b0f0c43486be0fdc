//! Local persistence: the key-value store seam, its backends and the
//! adapter that reads and writes application state through it.

pub mod factory;
pub mod kv;
pub mod persistence;
pub mod theme;

pub use factory::{MemoryStoreFactory, StorageConfig, StorageFactory, StorageRegistry};
pub use kv::{KeyValueStore, MemoryStore, StorageError};
pub use persistence::{
    APP_VERSION, Persistence, RestoreError, STATE_KEY, THEME_KEY, VERSION_KEY, decode_state,
    encode_state, validate_shape,
};
pub use theme::Theme;
