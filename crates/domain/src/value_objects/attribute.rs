//! Attribute value objects - the six ability scores and their components.
//!
//! Provides type safety for attribute references instead of using magic strings
//! like "STR", "DEX".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::common::lenient::{lenient_i32, lenient_score};
use crate::error::DomainError;

/// The six character attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Attribute {
    /// Strength - physical power, carrying capacity
    Str,
    /// Dexterity - agility and reflexes
    Dex,
    /// Constitution - endurance and health
    Con,
    /// Intelligence - reasoning and memory
    Int,
    /// Wisdom - perception and insight
    Wis,
    /// Charisma - force of personality
    Cha,
}

impl Attribute {
    /// Returns the short uppercase string representation (e.g., "STR", "DEX").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Str => "STR",
            Self::Dex => "DEX",
            Self::Con => "CON",
            Self::Int => "INT",
            Self::Wis => "WIS",
            Self::Cha => "CHA",
        }
    }

    /// Returns the full name of the attribute (e.g., "Strength", "Dexterity").
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Str => "Strength",
            Self::Dex => "Dexterity",
            Self::Con => "Constitution",
            Self::Int => "Intelligence",
            Self::Wis => "Wisdom",
            Self::Cha => "Charisma",
        }
    }

    /// Returns all six attributes in sheet order.
    pub fn all_standard() -> [Attribute; 6] {
        [
            Self::Str,
            Self::Dex,
            Self::Con,
            Self::Int,
            Self::Wis,
            Self::Cha,
        ]
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "STR" | "STRENGTH" => Ok(Self::Str),
            "DEX" | "DEXTERITY" => Ok(Self::Dex),
            "CON" | "CONSTITUTION" => Ok(Self::Con),
            "INT" | "INTELLIGENCE" => Ok(Self::Int),
            "WIS" | "WISDOM" => Ok(Self::Wis),
            "CHA" | "CHARISMA" => Ok(Self::Cha),
            other => Err(DomainError::parse(format!("unknown attribute: {other}"))),
        }
    }
}

/// The three components of a single attribute score.
///
/// `base` is what was rolled, `bonus` is a permanent adjustment (racial,
/// training), `temp_mod` is a temporary swing (spells, poison). The effective
/// score is always the sum of the three.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttributeScore {
    #[serde(deserialize_with = "lenient_score")]
    pub base: i32,
    #[serde(deserialize_with = "lenient_i32")]
    pub bonus: i32,
    #[serde(deserialize_with = "lenient_i32")]
    pub temp_mod: i32,
}

impl Default for AttributeScore {
    fn default() -> Self {
        Self {
            base: 10,
            bonus: 0,
            temp_mod: 0,
        }
    }
}

impl AttributeScore {
    /// Create a score with the given base and no adjustments.
    pub fn new(base: i32) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    /// Create a copy with a permanent bonus applied.
    pub fn with_bonus(self, bonus: i32) -> Self {
        Self { bonus, ..self }
    }

    /// Create a copy with a temporary modifier applied.
    pub fn with_temp_mod(self, temp_mod: i32) -> Self {
        Self { temp_mod, ..self }
    }

    /// The effective score: base + permanent bonus + temporary modifier.
    pub fn total(&self) -> i32 {
        self.base + self.bonus + self.temp_mod
    }
}
