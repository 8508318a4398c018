//! Torchledger store - character persistence behind an injected storage port.
//!
//! The domain crate's rules engine is pure; everything stateful lives here.
//! `CharacterStore` holds the canonical character records and persists them as
//! a versioned JSON roster through a [`StoragePort`], a small key-value
//! contract with in-memory and file-backed adapters. User preferences (theme,
//! first-run flag) ride the same port under their own key, so nothing in the
//! application depends on ambient global state.

pub mod error;
pub mod file;
pub mod memory;
pub mod preferences;
pub mod roster;
pub mod storage;
pub mod store;

pub use error::{StorageError, StoreError};
pub use file::FileStorage;
pub use memory::InMemoryStorage;
pub use preferences::{Preferences, Theme};
pub use roster::{Roster, SAVE_FORMAT_VERSION};
pub use storage::{storage_keys, StoragePort};
pub use store::CharacterStore;
