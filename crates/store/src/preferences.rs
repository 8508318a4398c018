//! User preferences - persisted through the same storage port as the roster.
//!
//! These used to be loose localStorage keys; keeping them behind the port
//! means tests (and the rules engine) never touch a real backend.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::StoreError;
use crate::storage::{storage_keys, StoragePort};

/// Color theme for the sheet view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Per-user settings that are not part of any character record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub theme: Theme,
    /// Whether the first-run info panel has been dismissed.
    pub has_seen_info: bool,
}

impl Preferences {
    /// Load preferences, falling back to defaults when absent or unreadable.
    ///
    /// A corrupt preferences blob is not worth failing startup over; it is
    /// replaced on the next save.
    pub fn load(storage: &dyn StoragePort) -> Result<Self, StoreError> {
        let Some(json) = storage.read(storage_keys::PREFERENCES)? else {
            return Ok(Self::default());
        };
        match serde_json::from_str(&json) {
            Ok(prefs) => Ok(prefs),
            Err(e) => {
                debug!(error = %e, "unreadable preferences, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn save(&self, storage: &dyn StoragePort) -> Result<(), StoreError> {
        let json = serde_json::to_string(self)?;
        storage.write(storage_keys::PREFERENCES, &json)?;
        Ok(())
    }
}
