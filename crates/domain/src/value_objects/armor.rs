//! Armor class components tracked on the character record.

use serde::{Deserialize, Serialize};

use crate::common::lenient::{lenient_i32, lenient_score};

/// The flat armor class terms the character tracks directly.
///
/// Equipment-derived terms (armor, shield, item effects) live on the inventory
/// and are folded in by the armor class calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArmorClassComponents {
    /// Unarmored baseline, 10 for a typical character.
    #[serde(deserialize_with = "lenient_score")]
    pub base: i32,
    /// Generic bonus entered by the player.
    #[serde(deserialize_with = "lenient_i32")]
    pub bonus: i32,
    /// Magic adjustments not tied to a specific item.
    #[serde(deserialize_with = "lenient_i32")]
    pub magic: i32,
    /// Everything else (blessings, curses, house rules).
    #[serde(deserialize_with = "lenient_i32")]
    pub misc: i32,
}

impl Default for ArmorClassComponents {
    fn default() -> Self {
        Self {
            base: 10,
            bonus: 0,
            magic: 0,
            misc: 0,
        }
    }
}
