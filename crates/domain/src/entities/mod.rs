//! Entities - the mutable records the store persists.

mod character;
mod item;

pub use character::{Character, Companion, SpellRecord};
pub use item::{EffectKind, InventoryItem, ItemEffect};
