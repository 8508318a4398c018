//! Race value object - racial attribute adjustments.

use serde::{Deserialize, Serialize};

use crate::common::lenient::lenient_i32;

/// A single racial adjustment, keyed by attribute name.
///
/// The key is a free-form string rather than [`crate::Attribute`] because races
/// may also grant pseudo-attribute adjustments; the armor class calculator
/// looks for an "ac" entry (case-insensitive).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RacialModifier {
    pub attribute: String,
    #[serde(default, deserialize_with = "lenient_i32")]
    pub value: i32,
}

impl RacialModifier {
    pub fn new(attribute: impl Into<String>, value: i32) -> Self {
        Self {
            attribute: attribute.into(),
            value,
        }
    }
}

/// The character's race and its attribute adjustments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Race {
    pub name: String,
    pub attribute_modifiers: Vec<RacialModifier>,
}

impl Race {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attribute_modifiers: Vec::new(),
        }
    }

    pub fn with_modifier(mut self, attribute: impl Into<String>, value: i32) -> Self {
        self.attribute_modifiers
            .push(RacialModifier::new(attribute, value));
        self
    }

    /// First adjustment whose key matches, compared case-insensitively.
    pub fn modifier_for(&self, attribute: &str) -> Option<i32> {
        self.attribute_modifiers
            .iter()
            .find(|m| m.attribute.eq_ignore_ascii_case(attribute))
            .map(|m| m.value)
    }
}
