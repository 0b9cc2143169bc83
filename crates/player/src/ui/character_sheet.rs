//! Character sheet view model for confirmed party members.
//!
//! Every number comes from the server; this module only formats.

use std::fmt;

use delve_domain::{ability_modifier, Ability};
use delve_shared::CharacterData;

/// Experience needed for the next level, fetched separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextLevel {
    Xp(u64),
    ErrorLoading,
}

impl fmt::Display for NextLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NextLevel::Xp(xp) => write!(f, "{xp}"),
            NextLevel::ErrorLoading => write!(f, "Error loading"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilityLine {
    pub ability: Ability,
    pub score: i32,
    pub modifier: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellLevelView {
    pub level: String,
    pub slots: u32,
    pub spells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSheetView {
    pub name: String,
    pub race: String,
    pub class: String,
    pub color: &'static str,
    pub level: u32,
    pub experience: u64,
    pub next_level: NextLevel,
    pub money: String,
    pub hit_points: String,
    pub armor_class: i32,
    pub thac0: i32,
    pub abilities: Vec<AbilityLine>,
    pub saving_throws: Vec<(String, i32)>,
    pub equipment: Vec<(String, String)>,
    pub inventory: Vec<String>,
    pub spells: Vec<SpellLevelView>,
}

impl CharacterSheetView {
    pub fn from_character(character: &CharacterData, next_level: NextLevel) -> Self {
        let abilities = character
            .abilities
            .iter()
            .map(|(ability, score)| AbilityLine {
                ability,
                score,
                modifier: format_modifier(ability_modifier(score)),
            })
            .collect();

        let equipment = character
            .equipment
            .iter()
            .map(|(slot, item)| {
                let item = item.as_ref().map_or("None", |i| i.name.as_str());
                (slot.clone(), item.to_string())
            })
            .collect();

        let inventory = character
            .inventory
            .iter()
            .map(|item| match item.quantity {
                0 | 1 => item.name.clone(),
                n => format!("{} ({n})", item.name),
            })
            .collect();

        let spells = character
            .spells
            .iter()
            .map(|(level, known)| SpellLevelView {
                level: level.clone(),
                slots: character.spell_slots.get(level).copied().unwrap_or(0),
                spells: known
                    .iter()
                    .map(|spell| {
                        let mut line = spell.name.clone();
                        if spell.memorized {
                            line.push_str(" (Memorized)");
                        }
                        if spell.cast {
                            line.push_str(" (Cast)");
                        }
                        line
                    })
                    .collect(),
            })
            .collect();

        Self {
            name: character.name.clone(),
            race: character.race.to_string(),
            class: character.character_class.to_string(),
            color: character.character_class.marker_color(),
            level: character.level,
            experience: character.experience,
            next_level,
            money: format_money(character.gold, character.silver, character.copper),
            hit_points: format!("{}/{}", character.hit_points, character.max_hit_points),
            armor_class: character.armor_class,
            thac0: character.thac0,
            abilities,
            saving_throws: character
                .saving_throws
                .iter()
                .map(|(name, value)| (name.clone(), *value))
                .collect(),
            equipment,
            inventory,
            spells,
        }
    }
}

/// `+2`, `+0`, `-1`
pub fn format_modifier(modifier: i32) -> String {
    format!("{modifier:+}")
}

pub fn format_money(gold: u32, silver: u32, copper: u32) -> String {
    format!("{gold}g {silver}s {copper}c")
}
