//! Error types for the store layer.

use thiserror::Error;
use torchledger_domain::DomainError;

/// Failure reported by a storage backend.
#[derive(Debug, Error, Clone)]
#[error("Storage backend error: {0}")]
pub struct StorageError(pub String);

impl StorageError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Unified error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage backend failed
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The roster document could not be encoded or decoded
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The save document was written by a newer revision
    #[error("Unsupported save format version {found} (this build supports up to {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Character not found in the roster
    #[error("Character not found: {0}")]
    CharacterNotFound(String),

    /// A record failed domain validation
    #[error(transparent)]
    Domain(#[from] DomainError),
}
