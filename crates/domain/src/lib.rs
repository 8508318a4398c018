//! Torchledger domain - character records and the derived-stat rules engine.
//!
//! The domain crate owns the canonical character record types and the pure
//! calculation engine that turns a character snapshot into display-ready
//! derived values (encumbrance, max HP, level info, armor class, speed,
//! container contents). Persistence lives in `torchledger-store`; nothing in
//! this crate performs I/O.

pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod rules;
pub mod value_objects;

// Re-export entities
pub use entities::{
    Character, Companion, EffectKind, InventoryItem, ItemEffect, SpellRecord,
};

pub use error::DomainError;

// Re-export the rules engine and its derived view types
pub use rules::{
    AttributeSummary, ContainerInfo, DerivedSheet, EncumbranceInfo, EncumbranceStatus,
    LevelInfo, Ruleset,
};

// Re-export ID types
pub use ids::{CharacterId, ItemId};

// Re-export value objects
pub use value_objects::{
    ArmorClassComponents, Attribute, AttributeScore, Race, RacialModifier, Wallet,
};
