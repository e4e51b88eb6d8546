//! Card definitions - static card data.
//!
//! `CardData` holds the immutable identity and display data of a card.
//! The drag/stack core only reads `card_id` (stacking identity) and the
//! bonus capability; everything else is projected to the layout binding.
//!
//! Card kinds are a closed set (`CardArchetype`). Code that needs combat
//! numbers asks `combat_stats()` instead of matching on the kind.

use std::fmt::Write as _;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Informational item category. Stacking uses `card_id`, not this.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    Weapon,
    Armor,
    Potion,
    Scroll,
    Accessory,
    #[default]
    Item,
}

/// Player bonuses granted by a card while it sits in a zone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bonuses {
    pub damage: f32,
    pub health: f32,
    /// Critical hit damage multiplier bonus.
    pub crit_damage: f32,
    pub attack_dice: i32,
    pub defense_dice: i32,
    pub speed: i32,
}

fn signed<T: PartialOrd + Default + std::fmt::Display>(value: T) -> String {
    if value > T::default() {
        format!("+{value}")
    } else {
        format!("{value}")
    }
}

impl Bonuses {
    #[must_use]
    pub fn damage(mut self, value: f32) -> Self {
        self.damage = value;
        self
    }

    #[must_use]
    pub fn health(mut self, value: f32) -> Self {
        self.health = value;
        self
    }

    #[must_use]
    pub fn crit_damage(mut self, value: f32) -> Self {
        self.crit_damage = value;
        self
    }

    #[must_use]
    pub fn attack_dice(mut self, value: i32) -> Self {
        self.attack_dice = value;
        self
    }

    #[must_use]
    pub fn defense_dice(mut self, value: i32) -> Self {
        self.defense_dice = value;
        self
    }

    #[must_use]
    pub fn speed(mut self, value: i32) -> Self {
        self.speed = value;
        self
    }

    /// True if every bonus is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// One line per non-zero bonus, e.g. `"Damage +3\nSpeed -1"`.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut lines = Vec::new();
        if self.damage != 0.0 {
            lines.push(format!("Damage {}", signed(self.damage)));
        }
        if self.health != 0.0 {
            lines.push(format!("Health {}", signed(self.health)));
        }
        if self.crit_damage != 0.0 {
            lines.push(format!("Crit Damage {}x", signed(self.crit_damage)));
        }
        if self.attack_dice != 0 {
            lines.push(format!("Attack Dice {}", signed(self.attack_dice)));
        }
        if self.defense_dice != 0 {
            lines.push(format!("Defense Dice {}", signed(self.defense_dice)));
        }
        if self.speed != 0 {
            lines.push(format!("Speed {}", signed(self.speed)));
        }
        lines.join("\n")
    }
}

impl Add for Bonuses {
    type Output = Bonuses;

    fn add(self, rhs: Bonuses) -> Bonuses {
        Bonuses {
            damage: self.damage + rhs.damage,
            health: self.health + rhs.health,
            crit_damage: self.crit_damage + rhs.crit_damage,
            attack_dice: self.attack_dice + rhs.attack_dice,
            defense_dice: self.defense_dice + rhs.defense_dice,
            speed: self.speed + rhs.speed,
        }
    }
}

impl Sum for Bonuses {
    fn sum<I: Iterator<Item = Bonuses>>(iter: I) -> Bonuses {
        iter.fold(Bonuses::default(), Add::add)
    }
}

/// Combat numbers carried by monster cards.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonsterStats {
    pub health: f32,
    pub damage: f32,
    /// Added to the monster's attack roll.
    pub attack_bonus: i32,
    /// Added to the monster's defense roll.
    pub defense_bonus: i32,
    pub bounty_gold: i32,
    pub special_ability: String,
}

/// The closed set of card kinds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CardArchetype {
    Loot { category: ItemCategory, bonuses: Bonuses },
    Monster(MonsterStats),
}

impl CardArchetype {
    /// Combat stats, if this kind of card fights.
    #[must_use]
    pub fn combat_stats(&self) -> Option<&MonsterStats> {
        match self {
            CardArchetype::Monster(stats) => Some(stats),
            CardArchetype::Loot { .. } => None,
        }
    }

    /// Bonuses granted to the player. Monsters grant none.
    #[must_use]
    pub fn bonuses(&self) -> Bonuses {
        match self {
            CardArchetype::Loot { bonuses, .. } => *bonuses,
            CardArchetype::Monster(_) => Bonuses::default(),
        }
    }
}

/// Static card data.
///
/// ## Example
///
/// ```
/// use rust_cardstack::cards::{Bonuses, CardData, ItemCategory};
///
/// let sword = CardData::loot("great_sword", "Great Sword")
///     .with_category(ItemCategory::Weapon)
///     .with_bonuses(Bonuses::default().damage(3.0));
///
/// assert_eq!(sword.display_name(1), "Great Sword");
/// assert_eq!(sword.display_name(3), "Great Sword +2");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardData {
    /// Stacking identity. Cards stack only with equal ids; empty is a
    /// valid id of its own.
    pub card_id: String,

    pub name: String,

    pub description: String,

    pub archetype: CardArchetype,
}

impl CardData {
    /// Create a loot card with no bonuses.
    pub fn loot(card_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            card_id: card_id.into(),
            name: name.into(),
            description: String::new(),
            archetype: CardArchetype::Loot {
                category: ItemCategory::Item,
                bonuses: Bonuses::default(),
            },
        }
    }

    /// Create a monster card.
    pub fn monster(card_id: impl Into<String>, name: impl Into<String>, stats: MonsterStats) -> Self {
        Self {
            card_id: card_id.into(),
            name: name.into(),
            description: String::new(),
            archetype: CardArchetype::Monster(stats),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the bonuses. No effect on monster cards.
    #[must_use]
    pub fn with_bonuses(mut self, new_bonuses: Bonuses) -> Self {
        if let CardArchetype::Loot { bonuses, .. } = &mut self.archetype {
            *bonuses = new_bonuses;
        }
        self
    }

    /// Set the item category. No effect on monster cards.
    #[must_use]
    pub fn with_category(mut self, new_category: ItemCategory) -> Self {
        if let CardArchetype::Loot { category, .. } = &mut self.archetype {
            *category = new_category;
        }
        self
    }

    #[must_use]
    pub fn bonuses(&self) -> Bonuses {
        self.archetype.bonuses()
    }

    /// Name shown on the card: `"Name +N"` for a stack of `N + 1`.
    #[must_use]
    pub fn display_name(&self, stack_level: usize) -> String {
        if stack_level > 1 {
            format!("{} +{}", self.name, stack_level - 1)
        } else {
            self.name.clone()
        }
    }

    /// Description followed by bonus or combat lines.
    #[must_use]
    pub fn display_description(&self) -> String {
        let mut text = self.description.clone();
        match &self.archetype {
            CardArchetype::Loot { bonuses, .. } if !bonuses.is_empty() => {
                text.push_str("\n\n");
                text.push_str(&bonuses.summary());
            }
            CardArchetype::Loot { .. } => {}
            CardArchetype::Monster(stats) => {
                let _ = write!(
                    text,
                    "\n\nHP: {}\nDamage: {}\nBounty: {} gold",
                    stats.health, stats.damage, stats.bounty_gold
                );
                if !stats.special_ability.is_empty() {
                    let _ = write!(text, "\nSpecial: {}", stats.special_ability);
                }
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_stack_level() {
        let card = CardData::loot("potion", "Potion");
        assert_eq!(card.display_name(0), "Potion");
        assert_eq!(card.display_name(1), "Potion");
        assert_eq!(card.display_name(4), "Potion +3");
    }

    #[test]
    fn test_bonus_summary() {
        let bonuses = Bonuses::default().damage(3.0).crit_damage(0.5).speed(-1);
        assert_eq!(bonuses.summary(), "Damage +3\nCrit Damage +0.5x\nSpeed -1");
        assert!(Bonuses::default().summary().is_empty());
    }

    #[test]
    fn test_bonus_sum() {
        let total: Bonuses = [
            Bonuses::default().damage(2.0).attack_dice(1),
            Bonuses::default().damage(1.5).defense_dice(2),
        ]
        .into_iter()
        .sum();

        assert_eq!(total.damage, 3.5);
        assert_eq!(total.attack_dice, 1);
        assert_eq!(total.defense_dice, 2);
        assert_eq!(total.speed, 0);
    }

    #[test]
    fn test_description_with_bonuses() {
        let card = CardData::loot("shield", "Shield")
            .with_description("Sturdy.")
            .with_bonuses(Bonuses::default().health(10.0));
        assert_eq!(card.display_description(), "Sturdy.\n\nHealth +10");

        let plain = CardData::loot("rock", "Rock").with_description("A rock.");
        assert_eq!(plain.display_description(), "A rock.");
    }

    #[test]
    fn test_monster_capabilities() {
        let stats = MonsterStats {
            health: 12.0,
            damage: 3.0,
            bounty_gold: 5,
            ..MonsterStats::default()
        };
        let goblin = CardData::monster("goblin", "Goblin", stats).with_bonuses(Bonuses::default().damage(9.0));

        assert_eq!(goblin.archetype.combat_stats().map(|s| s.health), Some(12.0));
        assert!(goblin.bonuses().is_empty());
        assert_eq!(goblin.display_description(), "\n\nHP: 12\nDamage: 3\nBounty: 5 gold");

        let sword = CardData::loot("sword", "Sword");
        assert!(sword.archetype.combat_stats().is_none());
    }

    #[test]
    fn test_serialization() {
        let card = CardData::loot("sword", "Sword").with_category(ItemCategory::Weapon);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: CardData = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
