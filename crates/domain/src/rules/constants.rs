//! The single constants table the calculators draw from.

use serde::{Deserialize, Serialize};

/// Tabletop constants used by the calculators.
///
/// Every rule number lives here so no calculator re-derives one; `Default`
/// yields the published tabletop values. Tests and house rules may construct
/// variants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ruleset {
    /// EV above capacity but at or below capacity * this is "burdened";
    /// beyond it is "overburdened".
    pub overburdened_multiplier: f64,
    /// Coins of any denomination per pound of weight.
    pub coins_per_pound: f64,
    /// Coins per point of encumbrance value.
    pub coins_per_ev: f64,
    /// Speed penalty while burdened.
    pub burdened_speed_penalty: i32,
    /// Speed penalty while overburdened.
    pub overburdened_speed_penalty: i32,
    /// Unarmored armor class baseline.
    pub base_ac: i32,
    /// Walking speed baseline, in feet.
    pub base_speed: i32,
    /// Attribute score assumed when a score is missing entirely.
    pub attribute_default: i32,
}

impl Default for Ruleset {
    fn default() -> Self {
        Self {
            overburdened_multiplier: 3.0,
            coins_per_pound: 10.0,
            coins_per_ev: 100.0,
            burdened_speed_penalty: 5,
            overburdened_speed_penalty: 10,
            base_ac: 10,
            base_speed: 30,
            attribute_default: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_values() {
        let rules = Ruleset::default();
        assert_eq!(rules.overburdened_multiplier, 3.0);
        assert_eq!(rules.coins_per_pound, 10.0);
        assert_eq!(rules.coins_per_ev, 100.0);
        assert_eq!(rules.burdened_speed_penalty, 5);
        assert_eq!(rules.overburdened_speed_penalty, 10);
    }
}
