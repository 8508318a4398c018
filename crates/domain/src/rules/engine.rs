//! The calculators.
//!
//! All methods take the character as `Option<&Character>`: the sheet view asks
//! for derived values before any record exists, and an absent snapshot must
//! produce the documented defaults, not an error. Inputs are never mutated and
//! results are recomputed from scratch on every call; memoization is the
//! caller's concern.

use std::collections::HashSet;

use crate::entities::{Character, EffectKind};
use crate::ids::ItemId;
use crate::value_objects::{Attribute, AttributeScore};

use super::constants::Ruleset;
use super::derived::{
    AttributeSummary, ContainerInfo, DerivedSheet, EncumbranceInfo, EncumbranceStatus, LevelInfo,
};

impl Ruleset {
    /// Effective attribute score: base + permanent bonus + temporary modifier.
    ///
    /// A missing attribute (or character) reads as the default score.
    pub fn attribute_total(&self, character: Option<&Character>, attribute: Attribute) -> i32 {
        character
            .and_then(|c| c.attributes.get(&attribute))
            .map(AttributeScore::total)
            .unwrap_or(self.attribute_default)
    }

    /// Standard attribute modifier: floor((total - 10) / 2).
    ///
    /// Rust's `/` rounds toward zero, so negatives need explicit floor
    /// division: a score of 9 is -1, not 0.
    pub fn attribute_modifier(&self, total: i32) -> i32 {
        let diff = total - 10;
        if diff >= 0 {
            diff / 2
        } else {
            (diff - 1) / 2
        }
    }

    /// One sheet line: attribute key, effective total, modifier.
    pub fn attribute_summary(
        &self,
        character: Option<&Character>,
        attribute: Attribute,
    ) -> AttributeSummary {
        let total = self.attribute_total(character, attribute);
        AttributeSummary {
            attribute,
            total,
            modifier: self.attribute_modifier(total),
        }
    }

    /// Carried weight, EV, and burden status.
    ///
    /// Items stored in a magical container weigh nothing for the carrier, and
    /// the coins kept in magical containers come off the wallet's coin count
    /// (ceiling-rounded, floored at zero). Coins in ordinary containers still
    /// count.
    pub fn encumbrance(&self, character: Option<&Character>) -> EncumbranceInfo {
        let Some(c) = character else {
            return EncumbranceInfo::default();
        };
        let rating = self.attribute_total(character, Attribute::Str);

        let magical_ids: HashSet<ItemId> = c
            .inventory
            .iter()
            .filter(|i| i.is_container && i.magical_container)
            .map(|i| i.id)
            .collect();

        let mut total_weight = 0.0;
        let mut total_ev = 0.0;
        for item in &c.inventory {
            let weightless = item
                .stored_in_id
                .is_some_and(|id| magical_ids.contains(&id));
            if weightless {
                continue;
            }
            total_weight += item.total_weight();
            total_ev += item.total_ev();
        }

        let mut coins = c.wallet.total_coins() as f64;
        for item in &c.inventory {
            if item.is_container && item.magical_container {
                coins -= item.stored_coins_gp.ceil();
            }
        }
        let coins = coins.max(0.0);
        let coin_weight = coins / self.coins_per_pound;
        let coin_ev = coins / self.coins_per_ev;
        if c.include_coin_weight {
            total_weight += coin_weight;
            total_ev += coin_ev;
        }

        let capacity = f64::from(rating);
        let (status, speed_penalty) = if c.encumbrance_enabled && rating > 0 {
            if total_ev > capacity * self.overburdened_multiplier {
                (
                    EncumbranceStatus::Overburdened,
                    self.overburdened_speed_penalty,
                )
            } else if total_ev > capacity {
                (EncumbranceStatus::Burdened, self.burdened_speed_penalty)
            } else {
                (EncumbranceStatus::Unburdened, 0)
            }
        } else {
            (EncumbranceStatus::Unburdened, 0)
        };

        EncumbranceInfo {
            rating,
            total_ev,
            total_weight,
            coin_weight,
            coin_ev,
            status,
            speed_penalty,
        }
    }

    /// Maximum hit points: per-level rolls with drained levels zeroed, plus
    /// the flat bonus. Records without a per-level breakdown fall back to the
    /// stored flat maximum.
    pub fn max_hp(&self, character: Option<&Character>) -> i32 {
        let Some(c) = character else {
            return 0;
        };
        if c.hp_by_level.is_empty() {
            return c.max_hp.unwrap_or(0);
        }
        let rolled: i32 = c
            .hp_by_level
            .iter()
            .enumerate()
            .filter(|(i, _)| !c.level_drained.get(*i).copied().unwrap_or(false))
            .map(|(_, hp)| *hp)
            .sum();
        rolled + c.hp_bonus
    }

    /// Level standing derived from the XP table and the drained-level mask.
    pub fn level_info(&self, character: Option<&Character>) -> LevelInfo {
        let Some(c) = character else {
            return LevelInfo::default();
        };
        let table = &c.xp_table;
        if table.is_empty() {
            return LevelInfo::default();
        }

        let mut earned = 1usize;
        for (i, &threshold) in table.iter().enumerate().rev() {
            if c.current_xp >= threshold {
                earned = i + 1;
                break;
            }
        }
        let earned_level = earned as i32;

        let drained_levels = c.level_drained.iter().filter(|d| **d).count() as i32;
        let effective_level = (earned_level - drained_levels).max(1);

        let last = table.len() - 1;
        let current_threshold = table[(earned - 1).min(last)];
        let next_level_xp = table[earned.min(last)];

        let span = next_level_xp - current_threshold;
        let progress = if span <= 0 {
            100.0
        } else {
            let pct = (c.current_xp - current_threshold) as f64 / span as f64 * 100.0;
            pct.clamp(0.0, 100.0)
        };
        // one decimal place for display
        let progress = (progress * 10.0).round() / 10.0;

        let levels_with_hp = c.hp_by_level.iter().filter(|hp| **hp != 0).count() as i32;
        let can_level_up = earned_level > levels_with_hp;

        LevelInfo {
            next_level_xp,
            progress,
            can_level_up,
            current_level: earned_level,
            drained_levels,
            effective_level,
            xp_earned_level: earned_level,
        }
    }

    /// Armor class as the ordered sum of its component terms.
    ///
    /// The DEX term is derived from the DEX score unless the record switches
    /// to a manual value, and is forced to zero while overburdened in auto
    /// mode. No term is clamped and zero terms are still terms.
    pub fn armor_class(&self, character: Option<&Character>) -> i32 {
        let Some(c) = character else {
            return self.base_ac;
        };
        let mut ac = c.armor_class.base;

        if let Some(shield) = c.equipped_shield_id.and_then(|id| c.item(id)) {
            ac += shield.ac_bonus + shield.magic_ac_bonus;
        }

        // Multi-piece armor: every equipped armor id contributes.
        for id in &c.equipped_armor_ids {
            if let Some(armor) = c.item(*id) {
                ac += armor.ac_bonus + armor.magic_ac_bonus;
            }
        }

        if c.dex_ac_auto {
            let overburdened =
                self.encumbrance(character).status == EncumbranceStatus::Overburdened;
            if !overburdened {
                ac += self.attribute_modifier(self.attribute_total(character, Attribute::Dex));
            }
        } else {
            ac += c.dex_ac_manual;
        }

        ac += c.armor_class.magic + c.armor_class.misc + c.armor_class.bonus;
        ac += c.race.modifier_for("ac").unwrap_or(0);
        ac += self.active_effect_total(c, EffectKind::ArmorClass);
        ac
    }

    /// Walking speed after bonuses, item effects, and the encumbrance
    /// penalty. Never negative.
    ///
    /// Speed effects are read from both the effect-slot map and the legacy
    /// equipped-speed-item list; older saves only populate the latter.
    pub fn speed(&self, character: Option<&Character>) -> i32 {
        let Some(c) = character else {
            return self.base_speed;
        };
        let mut speed = c.base_speed + c.speed_bonus;
        speed += self.active_effect_total(c, EffectKind::Speed);
        for id in &c.equipped_speed_item_ids {
            if let Some(item) = c.item(*id) {
                speed += item
                    .effects
                    .iter()
                    .filter(|e| e.kind() == EffectKind::Speed)
                    .map(|e| e.value())
                    .sum::<i32>();
            }
        }
        speed -= self.encumbrance(character).speed_penalty;
        speed.max(0)
    }

    /// Contents and limits of one container. An absent or non-container id
    /// resolves to the empty result, not an error.
    pub fn container_info(
        &self,
        character: Option<&Character>,
        container_id: ItemId,
    ) -> ContainerInfo {
        let Some(c) = character else {
            return ContainerInfo::default();
        };
        let Some(container) = c.item(container_id).filter(|i| i.is_container) else {
            return ContainerInfo::default();
        };

        let mut item_ids = Vec::new();
        let mut item_count = 0u32;
        let mut total_weight = 0.0;
        for item in &c.inventory {
            if item.stored_in_id == Some(container_id) {
                item_ids.push(item.id);
                item_count += item.quantity;
                total_weight += item.total_weight();
            }
        }

        let stored_coin_weight = container.stored_coins_gp.ceil().max(0.0) / self.coins_per_pound;

        ContainerInfo {
            container_id: Some(container_id),
            item_ids,
            item_count,
            total_weight,
            capacity: container.capacity,
            max_weight: container.max_weight,
            magical: container.magical_container,
            stored_coin_weight,
        }
    }

    /// The full display-ready aggregate for one snapshot.
    pub fn derive_sheet(&self, character: Option<&Character>) -> DerivedSheet {
        let attributes = Attribute::all_standard()
            .iter()
            .map(|&attribute| self.attribute_summary(character, attribute))
            .collect();

        let level = self.level_info(character);
        let containers = character
            .map(|c| {
                c.inventory
                    .iter()
                    .filter(|i| i.is_container)
                    .map(|i| self.container_info(character, i.id))
                    .collect()
            })
            .unwrap_or_default();

        DerivedSheet {
            attributes,
            max_hp: self.max_hp(character),
            encumbrance: self.encumbrance(character),
            armor_class: self.armor_class(character),
            speed: self.speed(character),
            wallet_value_gp: character.map(|c| c.wallet.value_gp()).unwrap_or(0.0),
            total_level: level.effective_level,
            level,
            containers,
        }
    }

    /// Sum of a kind's effect values across items active in that slot.
    fn active_effect_total(&self, c: &Character, kind: EffectKind) -> i32 {
        let Some(ids) = c.active_effect_ids(kind) else {
            return 0;
        };
        c.inventory
            .iter()
            .filter(|item| ids.contains(&item.id))
            .flat_map(|item| item.effects.iter())
            .filter(|e| e.kind() == kind)
            .map(|e| e.value())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{InventoryItem, ItemEffect};
    use crate::value_objects::{Race, Wallet};

    fn rules() -> Ruleset {
        Ruleset::default()
    }

    fn character_with_str(score: i32) -> Character {
        Character::new("Brennoc").with_attribute(Attribute::Str, AttributeScore::new(score))
    }

    // ── Attribute resolver ──────────────────────────────────────────────────

    #[test]
    fn test_missing_attribute_reads_as_ten() {
        let pc = Character::new("Brennoc");
        assert_eq!(rules().attribute_total(Some(&pc), Attribute::Wis), 10);
        assert_eq!(rules().attribute_total(None, Attribute::Wis), 10);
    }

    #[test]
    fn test_attribute_total_sums_components() {
        let pc = Character::new("Brennoc").with_attribute(
            Attribute::Dex,
            AttributeScore::new(14).with_bonus(1).with_temp_mod(-2),
        );
        assert_eq!(rules().attribute_total(Some(&pc), Attribute::Dex), 13);
    }

    #[test]
    fn test_modifier_table() {
        let rules = rules();
        assert_eq!(rules.attribute_modifier(10), 0);
        assert_eq!(rules.attribute_modifier(11), 0);
        assert_eq!(rules.attribute_modifier(12), 1);
        assert_eq!(rules.attribute_modifier(9), -1);
        assert_eq!(rules.attribute_modifier(8), -1);
        assert_eq!(rules.attribute_modifier(7), -2);
        assert_eq!(rules.attribute_modifier(18), 4);
        assert_eq!(rules.attribute_modifier(3), -4);
    }

    // ── Encumbrance ─────────────────────────────────────────────────────────

    #[test]
    fn test_ev_at_capacity_is_unburdened() {
        let pc = character_with_str(12).with_item(InventoryItem::new("Gear").with_ev(12.0));
        let enc = rules().encumbrance(Some(&pc));
        assert_eq!(enc.rating, 12);
        assert_eq!(enc.total_ev, 12.0);
        assert_eq!(enc.status, EncumbranceStatus::Unburdened);
        assert_eq!(enc.speed_penalty, 0);
    }

    #[test]
    fn test_ev_one_over_capacity_is_burdened() {
        let pc = character_with_str(12).with_item(InventoryItem::new("Gear").with_ev(13.0));
        let enc = rules().encumbrance(Some(&pc));
        assert_eq!(enc.status, EncumbranceStatus::Burdened);
        assert_eq!(enc.speed_penalty, 5);
    }

    #[test]
    fn test_ev_past_multiplier_is_overburdened() {
        // capacity 12, threshold 36
        let pc = character_with_str(12).with_item(InventoryItem::new("Anvil").with_ev(36.5));
        let enc = rules().encumbrance(Some(&pc));
        assert_eq!(enc.status, EncumbranceStatus::Overburdened);
        assert_eq!(enc.speed_penalty, 10);

        let at_threshold =
            character_with_str(12).with_item(InventoryItem::new("Anvil").with_ev(36.0));
        assert_eq!(
            rules().encumbrance(Some(&at_threshold)).status,
            EncumbranceStatus::Burdened
        );
    }

    #[test]
    fn test_encumbrance_disabled_never_burdens() {
        let mut pc = character_with_str(12).with_item(InventoryItem::new("Anvil").with_ev(100.0));
        pc.encumbrance_enabled = false;
        let enc = rules().encumbrance(Some(&pc));
        assert_eq!(enc.status, EncumbranceStatus::Unburdened);
        assert_eq!(enc.speed_penalty, 0);
        // totals are still reported
        assert_eq!(enc.total_ev, 100.0);
    }

    #[test]
    fn test_magical_container_contents_are_weightless() {
        let bag = InventoryItem::new("Bag of Holding")
            .as_container(50.0)
            .magical();
        let bag_id = bag.id;
        let pc = character_with_str(10)
            .with_item(bag)
            .with_item(
                InventoryItem::new("Anvil")
                    .with_weight(100.0)
                    .with_ev(20.0)
                    .stored_in(bag_id),
            )
            .with_item(InventoryItem::new("Rope").with_weight(5.0).with_ev(1.0));
        let enc = rules().encumbrance(Some(&pc));
        assert_eq!(enc.total_weight, 5.0);
        assert_eq!(enc.total_ev, 1.0);
    }

    #[test]
    fn test_ordinary_container_contents_still_count() {
        let sack = InventoryItem::new("Sack").as_container(10.0);
        let sack_id = sack.id;
        let pc = character_with_str(10).with_item(sack).with_item(
            InventoryItem::new("Anvil")
                .with_weight(100.0)
                .with_ev(20.0)
                .stored_in(sack_id),
        );
        let enc = rules().encumbrance(Some(&pc));
        assert_eq!(enc.total_weight, 100.0);
        assert_eq!(enc.total_ev, 20.0);
    }

    #[test]
    fn test_coin_weight_added_when_enabled() {
        let mut pc = character_with_str(10);
        pc.wallet = Wallet {
            gp: 100,
            ..Wallet::default()
        };
        let enc = rules().encumbrance(Some(&pc));
        assert_eq!(enc.coin_weight, 10.0);
        assert_eq!(enc.coin_ev, 1.0);
        assert_eq!(enc.total_weight, 10.0);
        assert_eq!(enc.total_ev, 1.0);

        pc.include_coin_weight = false;
        let enc = rules().encumbrance(Some(&pc));
        // informational fields stay, totals drop the coins
        assert_eq!(enc.coin_weight, 10.0);
        assert_eq!(enc.total_weight, 0.0);
    }

    #[test]
    fn test_coins_in_magical_container_come_off_the_count() {
        let mut bag = InventoryItem::new("Bag of Holding")
            .as_container(50.0)
            .magical();
        bag.stored_coins_gp = 40.5;
        let mut pc = character_with_str(10).with_item(bag);
        pc.wallet = Wallet {
            gp: 100,
            ..Wallet::default()
        };
        let enc = rules().encumbrance(Some(&pc));
        // 100 - ceil(40.5) = 59 coins
        assert_eq!(enc.coin_weight, 5.9);
        assert_eq!(enc.coin_ev, 0.59);
    }

    #[test]
    fn test_coin_subtraction_floors_at_zero() {
        let mut bag = InventoryItem::new("Bag of Holding")
            .as_container(50.0)
            .magical();
        bag.stored_coins_gp = 500.0;
        let mut pc = character_with_str(10).with_item(bag);
        pc.wallet = Wallet {
            gp: 20,
            ..Wallet::default()
        };
        let enc = rules().encumbrance(Some(&pc));
        assert_eq!(enc.coin_weight, 0.0);
        assert_eq!(enc.coin_ev, 0.0);
    }

    #[test]
    fn test_absent_character_is_zeroed_and_unburdened() {
        let enc = rules().encumbrance(None);
        assert_eq!(enc, EncumbranceInfo::default());
        assert_eq!(enc.status, EncumbranceStatus::Unburdened);
    }

    // ── Max HP ──────────────────────────────────────────────────────────────

    #[test]
    fn test_max_hp_sums_levels_and_bonus() {
        let mut pc = Character::new("Brennoc");
        pc.hp_by_level = vec![8, 6, 5];
        pc.hp_bonus = 2;
        assert_eq!(rules().max_hp(Some(&pc)), 21);
    }

    #[test]
    fn test_max_hp_skips_drained_levels() {
        let mut pc = Character::new("Brennoc");
        pc.hp_by_level = vec![8, 6, 5];
        pc.level_drained = vec![false, true, false];
        assert_eq!(rules().max_hp(Some(&pc)), 13);
    }

    #[test]
    fn test_max_hp_falls_back_to_flat_value() {
        let mut pc = Character::new("Brennoc");
        pc.max_hp = Some(17);
        assert_eq!(rules().max_hp(Some(&pc)), 17);
        assert_eq!(rules().max_hp(None), 0);
    }

    // ── Level / XP ──────────────────────────────────────────────────────────

    #[test]
    fn test_level_progress_between_thresholds() {
        let mut pc = Character::new("Brennoc").with_xp_table(vec![0, 1000, 3000]);
        pc.current_xp = 1500;
        let info = rules().level_info(Some(&pc));
        assert_eq!(info.xp_earned_level, 2);
        assert_eq!(info.current_level, 2);
        assert_eq!(info.next_level_xp, 3000);
        assert_eq!(info.progress, 25.0);
    }

    #[test]
    fn test_level_drain_reduces_effective_level() {
        let mut pc = Character::new("Brennoc").with_xp_table(vec![0, 1000, 3000]);
        pc.current_xp = 3000;
        pc.level_drained = vec![false, true, false];
        let info = rules().level_info(Some(&pc));
        assert_eq!(info.xp_earned_level, 3);
        assert_eq!(info.drained_levels, 1);
        assert_eq!(info.effective_level, 2);
    }

    #[test]
    fn test_effective_level_never_below_one() {
        let mut pc = Character::new("Brennoc").with_xp_table(vec![0, 1000]);
        pc.current_xp = 0;
        pc.level_drained = vec![true, true, true];
        assert_eq!(rules().level_info(Some(&pc)).effective_level, 1);
    }

    #[test]
    fn test_level_at_table_cap_shows_full_progress() {
        let mut pc = Character::new("Brennoc").with_xp_table(vec![0, 1000, 3000]);
        pc.current_xp = 9999;
        let info = rules().level_info(Some(&pc));
        assert_eq!(info.xp_earned_level, 3);
        assert_eq!(info.next_level_xp, 3000);
        assert_eq!(info.progress, 100.0);
    }

    #[test]
    fn test_can_level_up_when_hp_not_yet_rolled() {
        let mut pc = Character::new("Brennoc").with_xp_table(vec![0, 1000, 3000]);
        pc.current_xp = 1200;
        pc.hp_by_level = vec![8];
        assert!(rules().level_info(Some(&pc)).can_level_up);

        pc.hp_by_level = vec![8, 6];
        assert!(!rules().level_info(Some(&pc)).can_level_up);

        // a zero entry is a placeholder, not a rolled level
        pc.hp_by_level = vec![8, 0];
        assert!(rules().level_info(Some(&pc)).can_level_up);
    }

    #[test]
    fn test_level_progress_rounds_to_one_decimal() {
        let mut pc = Character::new("Brennoc").with_xp_table(vec![0, 3000]);
        pc.current_xp = 1000;
        // 1000/3000 = 33.333...%
        assert_eq!(rules().level_info(Some(&pc)).progress, 33.3);
    }

    #[test]
    fn test_missing_table_yields_default_level_info() {
        let pc = Character::new("Brennoc");
        assert_eq!(rules().level_info(Some(&pc)), LevelInfo::default());
        assert_eq!(rules().level_info(None), LevelInfo::default());
        assert_eq!(LevelInfo::default().effective_level, 1);
    }

    // ── Armor class ─────────────────────────────────────────────────────────

    #[test]
    fn test_ac_with_armor_and_dex() {
        let plate = InventoryItem::new("Plate").with_armor_bonus(4, 1);
        let plate_id = plate.id;
        let mut pc = Character::new("Brennoc")
            .with_attribute(Attribute::Dex, AttributeScore::new(14))
            .with_item(plate);
        pc.equip_armor(plate_id);
        assert_eq!(rules().armor_class(Some(&pc)), 17);
    }

    #[test]
    fn test_ac_counts_shield_and_every_armor_piece() {
        let helm = InventoryItem::new("Helm").with_armor_bonus(1, 0);
        let mail = InventoryItem::new("Mail").with_armor_bonus(4, 0);
        let shield = InventoryItem::new("Shield").with_armor_bonus(1, 1);
        let (helm_id, mail_id, shield_id) = (helm.id, mail.id, shield.id);
        let mut pc = Character::new("Brennoc")
            .with_item(helm)
            .with_item(mail)
            .with_item(shield);
        pc.equip_armor(helm_id);
        pc.equip_armor(mail_id);
        pc.equip_shield(shield_id);
        // 10 + 1 + 4 + (1+1) + dex 0
        assert_eq!(rules().armor_class(Some(&pc)), 17);
    }

    #[test]
    fn test_ac_dex_zeroed_when_overburdened_in_auto_mode() {
        let mut pc = character_with_str(1)
            .with_attribute(Attribute::Dex, AttributeScore::new(18))
            .with_item(InventoryItem::new("Anvil").with_ev(50.0));
        assert_eq!(
            rules().encumbrance(Some(&pc)).status,
            EncumbranceStatus::Overburdened
        );
        assert_eq!(rules().armor_class(Some(&pc)), 10);

        // manual mode keeps the entered value regardless of burden
        pc.dex_ac_auto = false;
        pc.dex_ac_manual = 3;
        assert_eq!(rules().armor_class(Some(&pc)), 13);
    }

    #[test]
    fn test_ac_includes_flat_and_racial_terms() {
        let mut pc = Character::new("Brennoc").with_race(Race::new("Gnome").with_modifier("AC", 1));
        pc.armor_class.magic = 1;
        pc.armor_class.misc = 2;
        pc.armor_class.bonus = 1;
        // 10 + dex 0 + 1 + 2 + 1 + racial 1
        assert_eq!(rules().armor_class(Some(&pc)), 15);
    }

    #[test]
    fn test_ac_item_effects_apply_only_while_active() {
        let ring = InventoryItem::new("Ring of Protection")
            .with_effect(ItemEffect::ArmorClass { value: 2 })
            .with_effect(ItemEffect::Save { value: 1 });
        let ring_id = ring.id;
        let mut pc = Character::new("Brennoc").with_item(ring);
        assert_eq!(rules().armor_class(Some(&pc)), 10);

        pc.activate_effect(EffectKind::ArmorClass, ring_id);
        // the save effect on the same item does not leak into AC
        assert_eq!(rules().armor_class(Some(&pc)), 12);
    }

    #[test]
    fn test_ac_for_absent_character_is_base() {
        assert_eq!(rules().armor_class(None), 10);
    }

    // ── Speed ───────────────────────────────────────────────────────────────

    #[test]
    fn test_speed_overburdened_penalty() {
        let pc = character_with_str(1).with_item(InventoryItem::new("Anvil").with_ev(50.0));
        assert_eq!(rules().speed(Some(&pc)), 20);
    }

    #[test]
    fn test_speed_never_negative() {
        let mut pc = character_with_str(1).with_item(InventoryItem::new("Anvil").with_ev(50.0));
        pc.base_speed = 5;
        assert_eq!(rules().speed(Some(&pc)), 0);
    }

    #[test]
    fn test_speed_sums_slot_and_legacy_paths() {
        let boots = InventoryItem::new("Boots of Striding")
            .with_effect(ItemEffect::Speed { value: 10 });
        let old_boots =
            InventoryItem::new("Old Boots").with_effect(ItemEffect::Speed { value: 5 });
        let (boots_id, old_id) = (boots.id, old_boots.id);
        let mut pc = Character::new("Brennoc").with_item(boots).with_item(old_boots);
        pc.activate_effect(EffectKind::Speed, boots_id);
        pc.equipped_speed_item_ids.push(old_id);
        pc.speed_bonus = 5;
        // 30 + 5 + 10 + 5
        assert_eq!(rules().speed(Some(&pc)), 50);
    }

    #[test]
    fn test_speed_for_absent_character_is_base() {
        assert_eq!(rules().speed(None), 30);
    }

    // ── Container resolver ──────────────────────────────────────────────────

    #[test]
    fn test_container_contents_resolve() {
        let mut chest = InventoryItem::new("Chest").as_container(20.0);
        chest.max_weight = Some(150.0);
        chest.stored_coins_gp = 35.0;
        let chest_id = chest.id;
        let pc = Character::new("Brennoc")
            .with_item(chest)
            .with_item(
                InventoryItem::new("Rations")
                    .with_quantity(4)
                    .with_weight(2.0)
                    .stored_in(chest_id),
            )
            .with_item(
                InventoryItem::new("Rope")
                    .with_weight(5.0)
                    .stored_in(chest_id),
            )
            .with_item(InventoryItem::new("Dagger"));

        let info = rules().container_info(Some(&pc), chest_id);
        assert_eq!(info.container_id, Some(chest_id));
        assert_eq!(info.item_ids.len(), 2);
        assert_eq!(info.item_count, 5);
        assert_eq!(info.total_weight, 13.0);
        assert_eq!(info.capacity, 20.0);
        assert_eq!(info.max_weight, Some(150.0));
        assert!(!info.magical);
        assert_eq!(info.stored_coin_weight, 3.5);
    }

    #[test]
    fn test_non_container_id_resolves_empty() {
        let dagger = InventoryItem::new("Dagger");
        let dagger_id = dagger.id;
        let pc = Character::new("Brennoc").with_item(dagger);
        assert_eq!(
            rules().container_info(Some(&pc), dagger_id),
            ContainerInfo::default()
        );
        assert_eq!(
            rules().container_info(Some(&pc), ItemId::new()),
            ContainerInfo::default()
        );
        assert_eq!(rules().container_info(None, dagger_id), ContainerInfo::default());
    }

    // ── Aggregate sheet ─────────────────────────────────────────────────────

    #[test]
    fn test_derive_sheet_for_absent_character() {
        let sheet = rules().derive_sheet(None);
        assert_eq!(sheet.attributes.len(), 6);
        assert!(sheet
            .attributes
            .iter()
            .all(|a| a.total == 10 && a.modifier == 0));
        assert_eq!(sheet.max_hp, 0);
        assert_eq!(sheet.armor_class, 10);
        assert_eq!(sheet.speed, 30);
        assert_eq!(sheet.wallet_value_gp, 0.0);
        assert_eq!(sheet.total_level, 1);
        assert!(sheet.containers.is_empty());
    }

    #[test]
    fn test_derive_sheet_is_idempotent() {
        let bag = InventoryItem::new("Bag of Holding").as_container(50.0).magical();
        let bag_id = bag.id;
        let mut pc = character_with_str(13)
            .with_attribute(Attribute::Dex, AttributeScore::new(15))
            .with_xp_table(vec![0, 2000, 4000])
            .with_item(bag)
            .with_item(
                InventoryItem::new("Anvil")
                    .with_weight(100.0)
                    .with_ev(20.0)
                    .stored_in(bag_id),
            );
        pc.current_xp = 2500;
        pc.hp_by_level = vec![9, 7];
        pc.wallet = Wallet {
            pp: 3,
            gp: 12,
            ..Wallet::default()
        };

        let first = rules().derive_sheet(Some(&pc));
        let second = rules().derive_sheet(Some(&pc));
        assert_eq!(first, second);

        assert_eq!(first.max_hp, 16);
        assert_eq!(first.level.current_level, 2);
        assert_eq!(first.total_level, 2);
        assert_eq!(first.wallet_value_gp, 42.0);
        assert_eq!(first.containers.len(), 1);
        assert!(first.containers[0].magical);
    }
}
