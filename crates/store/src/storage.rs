//! Storage port - the contract persistence backends implement.

use crate::error::StorageError;

/// Well-known storage keys.
///
/// Keys are namespaced so several applications can share one backend without
/// colliding.
pub mod storage_keys {
    /// The character roster document.
    pub const ROSTER: &str = "torchledger.roster";
    /// User preferences (theme, first-run flag).
    pub const PREFERENCES: &str = "torchledger.preferences";
}

/// Key-value storage contract.
///
/// Mirrors the browser local-storage model the tracker was built around:
/// synchronous string reads and writes keyed by name. Implementations must be
/// safe to share between threads, but calls are not expected to overlap in
/// normal use (the application is single-user and synchronous).
///
/// NOTE: This trait is intentionally **object-safe** so the store can hold a
/// `Box<dyn StoragePort>` without depending on concrete backend types.
pub trait StoragePort: Send + Sync {
    /// Read the value stored under `key`, or `None` if the key is absent.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key` if present. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
