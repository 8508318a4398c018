//! Character entity - the aggregate root the store persists.
//!
//! Every field the rules engine reads is optional in the serialized form and
//! carries a documented default, so records exported from older revisions (or
//! hand-edited backups) load without error. The engine receives this record as
//! an immutable snapshot and never writes derived values back into it.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::lenient::{lenient_i32, lenient_i64, lenient_opt_i32, lenient_u32};
use crate::entities::item::{EffectKind, InventoryItem};
use crate::error::DomainError;
use crate::ids::{CharacterId, ItemId};
use crate::value_objects::{ArmorClassComponents, Attribute, AttributeScore, Race, Wallet};

fn default_true() -> bool {
    true
}

fn default_base_speed() -> i32 {
    30
}

/// A spell the character has recorded in their grimoire.
///
/// Tracked for the record only; no calculator reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpellRecord {
    pub name: String,
    #[serde(deserialize_with = "lenient_u32")]
    pub level: u32,
    pub prepared: bool,
}

/// An animal or hireling travelling with the character.
///
/// Tracked for the record only; no calculator reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Companion {
    pub name: String,
    #[serde(deserialize_with = "lenient_i32")]
    pub hp: i32,
    #[serde(deserialize_with = "lenient_i32")]
    pub max_hp: i32,
    #[serde(deserialize_with = "lenient_i32")]
    pub ac: i32,
    pub notes: String,
}

/// A character record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub description: String,
    pub class_name: String,
    pub race: Race,

    /// Attribute scores by key; a missing entry reads as base 10.
    pub attributes: HashMap<Attribute, AttributeScore>,

    // Hit points
    /// Hit points rolled at each level, index = level - 1.
    pub hp_by_level: Vec<i32>,
    /// Drained-level mask, same indexing as `hp_by_level`.
    pub level_drained: Vec<bool>,
    /// Flat HP adjustment on top of the per-level rolls.
    #[serde(deserialize_with = "lenient_i32")]
    pub hp_bonus: i32,
    /// Flat maximum, used only when `hp_by_level` is empty.
    #[serde(deserialize_with = "lenient_opt_i32")]
    pub max_hp: Option<i32>,
    #[serde(deserialize_with = "lenient_i32")]
    pub current_hp: i32,

    // Experience
    /// Ascending XP thresholds, index = level - 1.
    pub xp_table: Vec<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub current_xp: i64,

    // Armor class
    pub armor_class: ArmorClassComponents,
    /// Derive the DEX term from the DEX score; off = use `dex_ac_manual`.
    #[serde(default = "default_true")]
    pub dex_ac_auto: bool,
    #[serde(deserialize_with = "lenient_i32")]
    pub dex_ac_manual: i32,

    // Speed
    #[serde(default = "default_base_speed", deserialize_with = "lenient_i32")]
    pub base_speed: i32,
    #[serde(deserialize_with = "lenient_i32")]
    pub speed_bonus: i32,

    // Possessions
    pub inventory: Vec<InventoryItem>,
    pub wallet: Wallet,

    // Equipment references
    pub equipped_armor_ids: HashSet<ItemId>,
    pub equipped_shield_id: Option<ItemId>,
    /// Pre-effect-slot save files listed speed items here; both paths still
    /// contribute so old records keep their bonuses.
    pub equipped_speed_item_ids: Vec<ItemId>,
    /// Effect slot -> ids of items whose effects of that kind are active.
    pub active_effects: HashMap<EffectKind, HashSet<ItemId>>,

    // Settings
    #[serde(default = "default_true")]
    pub include_coin_weight: bool,
    #[serde(default = "default_true")]
    pub encumbrance_enabled: bool,

    // Record keeping, not read by any calculator
    pub grimoire: Vec<SpellRecord>,
    pub companions: Vec<Companion>,

    // Metadata
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for Character {
    fn default() -> Self {
        Self::new("")
    }
}

impl Character {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: CharacterId::new(),
            name: name.into(),
            description: String::new(),
            class_name: String::new(),
            race: Race::default(),
            attributes: HashMap::new(),
            hp_by_level: Vec::new(),
            level_drained: Vec::new(),
            hp_bonus: 0,
            max_hp: None,
            current_hp: 0,
            xp_table: Vec::new(),
            current_xp: 0,
            armor_class: ArmorClassComponents::default(),
            dex_ac_auto: true,
            dex_ac_manual: 0,
            base_speed: default_base_speed(),
            speed_bonus: 0,
            inventory: Vec::new(),
            wallet: Wallet::default(),
            equipped_armor_ids: HashSet::new(),
            equipped_shield_id: None,
            equipped_speed_item_ids: Vec::new(),
            active_effects: HashMap::new(),
            include_coin_weight: true,
            encumbrance_enabled: true,
            grimoire: Vec::new(),
            companions: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_race(mut self, race: Race) -> Self {
        self.race = race;
        self
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn with_attribute(mut self, attribute: Attribute, score: AttributeScore) -> Self {
        self.attributes.insert(attribute, score);
        self
    }

    pub fn with_xp_table(mut self, table: Vec<i64>) -> Self {
        self.xp_table = table;
        self
    }

    pub fn with_item(mut self, item: InventoryItem) -> Self {
        self.inventory.push(item);
        self
    }

    /// Look up an inventory item by id.
    pub fn item(&self, id: ItemId) -> Option<&InventoryItem> {
        self.inventory.iter().find(|i| i.id == id)
    }

    /// Ids active in the given effect slot.
    pub fn active_effect_ids(&self, kind: EffectKind) -> Option<&HashSet<ItemId>> {
        self.active_effects.get(&kind)
    }

    pub fn equip_armor(&mut self, id: ItemId) {
        self.equipped_armor_ids.insert(id);
    }

    pub fn equip_shield(&mut self, id: ItemId) {
        self.equipped_shield_id = Some(id);
    }

    /// Mark an item's effects of the given kind active.
    pub fn activate_effect(&mut self, kind: EffectKind, id: ItemId) {
        self.active_effects.entry(kind).or_default().insert(id);
    }

    /// Remove an item's effects of the given kind from the active set.
    pub fn deactivate_effect(&mut self, kind: EffectKind, id: ItemId) {
        if let Some(ids) = self.active_effects.get_mut(&kind) {
            ids.remove(&id);
        }
    }

    /// Update the last-modified timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Validate that the record can be committed to the store.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("Character name cannot be empty"));
        }
        if self.xp_table.windows(2).any(|w| w[1] < w[0]) {
            return Err(DomainError::validation(
                "Experience table thresholds must be ascending",
            ));
        }
        Ok(())
    }
}
