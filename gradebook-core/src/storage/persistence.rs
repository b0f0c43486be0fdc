//! Reading and writing [`AppState`] through a [`KeyValueStore`].
//!
//! Restoring is strict about what it trusts and silent about failing: any
//! problem with the stored blob means the seeded default is used instead.
//! Writing is best effort; the in-memory state stays authoritative.

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::kv::{KeyValueStore, StorageError};
use super::theme::Theme;
use crate::models::AppState;

/// Version tag written next to the state blob. A stored blob is only
/// restored when its tag matches.
pub const APP_VERSION: &str = "1.0.2";

pub const STATE_KEY: &str = "cgpa_calc_state";
pub const VERSION_KEY: &str = "cgpa_calc_version";
pub const THEME_KEY: &str = "theme";

/// Why a stored state was not restored.
#[derive(Debug, Error)]
pub enum RestoreError {
    #[error("no stored state")]
    Missing,

    #[error("stored state has version '{found}', expected '{expected}'")]
    VersionMismatch { found: String, expected: String },

    #[error("stored state is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("stored state has the wrong shape: {0}")]
    Shape(&'static str),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Structural check of a parsed blob before it is trusted: `semesters`
/// must be an array and `activeSemesterId` a non-empty string.
pub fn validate_shape(value: &Value) -> Result<(), RestoreError> {
    let object = value
        .as_object()
        .ok_or(RestoreError::Shape("top level is not an object"))?;

    if !object.get("semesters").is_some_and(Value::is_array) {
        return Err(RestoreError::Shape("semesters is not a list"));
    }

    match object.get("activeSemesterId").and_then(Value::as_str) {
        Some(id) if !id.is_empty() => Ok(()),
        _ => Err(RestoreError::Shape("activeSemesterId is missing")),
    }
}

/// Parses, shape-checks and decodes a state blob.
pub fn decode_state(blob: &str) -> Result<AppState, RestoreError> {
    let value: Value = serde_json::from_str(blob)?;
    validate_shape(&value)?;
    Ok(serde_json::from_value(value)?)
}

pub fn encode_state(state: &AppState) -> Result<String, StorageError> {
    Ok(serde_json::to_string(state)?)
}

/// Persistence adapter over a key-value store.
pub struct Persistence<S> {
    storage: S,
    version: String,
}

impl<S: KeyValueStore> Persistence<S> {
    /// Adapter tagged with [`APP_VERSION`].
    pub fn new(storage: S) -> Self {
        Self::with_version(storage, APP_VERSION)
    }

    pub fn with_version(
        storage: S,
        version: impl Into<String>,
    ) -> Self {
        Self {
            storage,
            version: version.into(),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Restores the stored state, reporting why it could not be trusted.
    pub fn restore(&self) -> Result<AppState, RestoreError> {
        let blob = self.storage.read(STATE_KEY)?;
        let stored_version = self.storage.read(VERSION_KEY)?;

        let (blob, stored_version) = match (blob, stored_version) {
            (Some(blob), Some(version)) => (blob, version),
            _ => return Err(RestoreError::Missing),
        };

        if stored_version != self.version {
            return Err(RestoreError::VersionMismatch {
                found: stored_version,
                expected: self.version.clone(),
            });
        }

        decode_state(&blob)
    }

    /// The state to start the session with: the restored one when it can be
    /// trusted, the seeded default otherwise.
    pub fn load_state(&self) -> AppState {
        match self.restore() {
            Ok(state) => {
                info!(
                    semesters = state.semesters.len(),
                    active = %state.active_semester_id,
                    "restored saved state"
                );
                state
            }
            Err(RestoreError::Missing) => {
                debug!("no saved state, using defaults");
                AppState::seeded()
            }
            Err(error) => {
                warn!(%error, "state restoration failed, using defaults");
                AppState::seeded()
            }
        }
    }

    /// Writes the state blob and then the version tag.
    pub fn try_save_state(
        &mut self,
        state: &AppState,
    ) -> Result<(), StorageError> {
        let blob = encode_state(state)?;
        self.storage.write(STATE_KEY, &blob)?;
        self.storage.write(VERSION_KEY, &self.version)
    }

    /// Best-effort write. Failures are logged and otherwise ignored.
    pub fn save_state(
        &mut self,
        state: &AppState,
    ) {
        if let Err(error) = self.try_save_state(state) {
            warn!(%error, "failed to persist state");
        }
    }

    /// Stored theme, or `system` when nothing is stored. Any stored value
    /// other than exactly `"dark"` means light.
    pub fn load_theme(
        &self,
        system: Theme,
    ) -> Theme {
        match self.storage.read(THEME_KEY) {
            Ok(Some(value)) if value.is_empty() => system,
            Ok(Some(value)) if value == Theme::Dark.as_str() => Theme::Dark,
            Ok(Some(value)) => {
                if value != Theme::Light.as_str() {
                    debug!(value = %value, "unrecognised theme, using light");
                }
                Theme::Light
            }
            Ok(None) => system,
            Err(error) => {
                warn!(%error, "failed to read theme");
                system
            }
        }
    }

    /// Best-effort write of the theme preference.
    pub fn save_theme(
        &mut self,
        theme: Theme,
    ) {
        if let Err(error) = self.storage.write(THEME_KEY, theme.as_str()) {
            warn!(%error, "failed to persist theme");
        }
    }
}
