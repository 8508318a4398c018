//! Inventory item entity - carried gear, containers, and their effects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::common::lenient::{lenient_f64, lenient_i32, lenient_opt_f64, lenient_u32};
use crate::ids::ItemId;

/// The slot an item effect occupies in the character's active-effect map.
///
/// Effects do nothing on their own; an item's effects of a given kind apply
/// only while the item's id is listed in that kind's active set on the
/// character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EffectKind {
    ToHit,
    Damage,
    Speed,
    ArmorClass,
    Save,
    Attribute,
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::ToHit => "toHit",
            Self::Damage => "damage",
            Self::Speed => "speed",
            Self::ArmorClass => "armorClass",
            Self::Save => "save",
            Self::Attribute => "attribute",
        };
        write!(f, "{label}")
    }
}

impl FromStr for EffectKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "toHit" => Ok(Self::ToHit),
            "damage" => Ok(Self::Damage),
            "speed" => Ok(Self::Speed),
            "armorClass" => Ok(Self::ArmorClass),
            "save" => Ok(Self::Save),
            "attribute" => Ok(Self::Attribute),
            _ => Err(()),
        }
    }
}

/// A numeric effect an item grants while active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ItemEffect {
    ToHit {
        #[serde(default, deserialize_with = "lenient_i32")]
        value: i32,
    },
    Damage {
        #[serde(default, deserialize_with = "lenient_i32")]
        value: i32,
    },
    Speed {
        #[serde(default, deserialize_with = "lenient_i32")]
        value: i32,
    },
    ArmorClass {
        #[serde(default, deserialize_with = "lenient_i32")]
        value: i32,
    },
    Save {
        #[serde(default, deserialize_with = "lenient_i32")]
        value: i32,
    },
    Attribute {
        attribute: crate::value_objects::Attribute,
        #[serde(default, deserialize_with = "lenient_i32")]
        value: i32,
    },
}

impl ItemEffect {
    /// The slot this effect belongs to.
    pub fn kind(&self) -> EffectKind {
        match self {
            Self::ToHit { .. } => EffectKind::ToHit,
            Self::Damage { .. } => EffectKind::Damage,
            Self::Speed { .. } => EffectKind::Speed,
            Self::ArmorClass { .. } => EffectKind::ArmorClass,
            Self::Save { .. } => EffectKind::Save,
            Self::Attribute { .. } => EffectKind::Attribute,
        }
    }

    /// The numeric payload, regardless of kind.
    pub fn value(&self) -> i32 {
        match self {
            Self::ToHit { value }
            | Self::Damage { value }
            | Self::Speed { value }
            | Self::ArmorClass { value }
            | Self::Save { value }
            | Self::Attribute { value, .. } => *value,
        }
    }
}

/// An item in the character's inventory.
///
/// This is a data-carrying struct with no invariants to protect; any
/// combination of values is representable. Container fields are meaningful
/// only when `is_container` is set, and `stored_in_id` points at the container
/// item currently holding this one (None = carried loose).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    #[serde(deserialize_with = "lenient_u32")]
    pub quantity: u32,
    /// Weight of a single unit, in pounds.
    #[serde(deserialize_with = "lenient_f64")]
    pub weight_per: f64,
    /// Encumbrance value of a single unit.
    #[serde(deserialize_with = "lenient_f64")]
    pub ev: f64,

    // Container properties
    pub is_container: bool,
    /// Declared carrying capacity in EV.
    #[serde(deserialize_with = "lenient_f64")]
    pub capacity: f64,
    /// Weight limit in pounds (None = unbounded).
    #[serde(deserialize_with = "lenient_opt_f64")]
    pub max_weight: Option<f64>,
    /// Contents are weightless for the carrier (bag of holding and kin).
    pub magical_container: bool,
    /// Gold-piece value of loose coins kept in this container.
    #[serde(deserialize_with = "lenient_f64")]
    pub stored_coins_gp: f64,
    /// The container this item currently sits in.
    pub stored_in_id: Option<ItemId>,

    // Armor properties
    #[serde(deserialize_with = "lenient_i32")]
    pub ac_bonus: i32,
    #[serde(deserialize_with = "lenient_i32")]
    pub magic_ac_bonus: i32,

    /// Effects granted while this item is active in a matching slot.
    pub effects: Vec<ItemEffect>,
}

impl Default for InventoryItem {
    fn default() -> Self {
        Self {
            id: ItemId::new(),
            name: String::new(),
            quantity: 1,
            weight_per: 0.0,
            ev: 0.0,
            is_container: false,
            capacity: 0.0,
            max_weight: None,
            magical_container: false,
            stored_coins_gp: 0.0,
            stored_in_id: None,
            ac_bonus: 0,
            magic_ac_bonus: 0,
            effects: Vec::new(),
        }
    }
}

impl InventoryItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_weight(mut self, weight_per: f64) -> Self {
        self.weight_per = weight_per;
        self
    }

    pub fn with_ev(mut self, ev: f64) -> Self {
        self.ev = ev;
        self
    }

    pub fn with_armor_bonus(mut self, ac_bonus: i32, magic_ac_bonus: i32) -> Self {
        self.ac_bonus = ac_bonus;
        self.magic_ac_bonus = magic_ac_bonus;
        self
    }

    pub fn with_effect(mut self, effect: ItemEffect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Turn this item into a container with the given EV capacity.
    pub fn as_container(mut self, capacity: f64) -> Self {
        self.is_container = true;
        self.capacity = capacity;
        self
    }

    /// Mark this container's contents as weightless.
    pub fn magical(mut self) -> Self {
        self.magical_container = true;
        self
    }

    pub fn stored_in(mut self, container_id: ItemId) -> Self {
        self.stored_in_id = Some(container_id);
        self
    }

    /// Weight of the whole stack.
    pub fn total_weight(&self) -> f64 {
        self.weight_per * f64::from(self.quantity)
    }

    /// EV of the whole stack.
    pub fn total_ev(&self) -> f64 {
        self.ev * f64::from(self.quantity)
    }
}
