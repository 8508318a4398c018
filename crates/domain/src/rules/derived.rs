//! Derived view types - ephemeral results the calculators hand to the
//! presentation layer. Recomputed on every query, never persisted.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::ItemId;
use crate::value_objects::Attribute;

/// Carrying state relative to the encumbrance rating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EncumbranceStatus {
    #[default]
    Unburdened,
    Burdened,
    Overburdened,
}

impl fmt::Display for EncumbranceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Unburdened => "Unburdened",
            Self::Burdened => "Burdened",
            Self::Overburdened => "Overburdened",
        };
        write!(f, "{label}")
    }
}

/// Result of the encumbrance calculator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncumbranceInfo {
    /// Carrying capacity in EV (equals the STR total).
    pub rating: i32,
    pub total_ev: f64,
    pub total_weight: f64,
    /// Portion of `total_weight` contributed by coins.
    pub coin_weight: f64,
    /// Portion of `total_ev` contributed by coins.
    pub coin_ev: f64,
    pub status: EncumbranceStatus,
    pub speed_penalty: i32,
}

/// Result of the level/XP calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelInfo {
    pub next_level_xp: i64,
    /// Percent of the way to the next level, one decimal place, 0-100.
    pub progress: f64,
    /// XP has outrun the hit points recorded per level.
    pub can_level_up: bool,
    /// The level the XP total has earned (same as `xp_earned_level`).
    pub current_level: i32,
    pub drained_levels: i32,
    /// Earned level minus drained levels, never below 1.
    pub effective_level: i32,
    pub xp_earned_level: i32,
}

impl Default for LevelInfo {
    fn default() -> Self {
        Self {
            next_level_xp: 0,
            progress: 0.0,
            can_level_up: false,
            current_level: 1,
            drained_levels: 0,
            effective_level: 1,
            xp_earned_level: 1,
        }
    }
}

/// Result of the container resolver.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerInfo {
    pub container_id: Option<ItemId>,
    /// Inventory items stored in this container.
    pub item_ids: Vec<ItemId>,
    /// Combined quantity across the stored stacks.
    pub item_count: u32,
    /// Combined weight of the stored stacks, in pounds.
    pub total_weight: f64,
    /// Declared EV capacity.
    pub capacity: f64,
    /// Declared weight limit (None = unbounded).
    pub max_weight: Option<f64>,
    pub magical: bool,
    /// Weight of the coins kept loose in the container.
    pub stored_coin_weight: f64,
}

/// One attribute line of the derived sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeSummary {
    pub attribute: Attribute,
    pub total: i32,
    pub modifier: i32,
}

/// The full display-ready aggregate the engine produces for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedSheet {
    /// All six attributes in sheet order.
    pub attributes: Vec<AttributeSummary>,
    pub max_hp: i32,
    pub level: LevelInfo,
    pub encumbrance: EncumbranceInfo,
    pub armor_class: i32,
    pub speed: i32,
    pub wallet_value_gp: f64,
    /// Display level: the effective (post-drain) level.
    pub total_level: i32,
    /// One entry per container item in the inventory.
    pub containers: Vec<ContainerInfo>,
}
