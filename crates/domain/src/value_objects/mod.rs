//! Value objects - immutable building blocks of the character record.

mod armor;
mod attribute;
mod race;
mod wallet;

pub use armor::ArmorClassComponents;
pub use attribute::{Attribute, AttributeScore};
pub use race::{Race, RacialModifier};
pub use wallet::Wallet;
