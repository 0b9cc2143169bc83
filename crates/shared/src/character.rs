//! Finalized character as returned by the server
//!
//! Every derived stat here is computed server-side; the client only formats it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use delve_domain::{AbilityBlock, CharacterClass, Race};

/// A party member as the server reports it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub race: Race,
    pub character_class: CharacterClass,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub experience: u64,
    pub abilities: AbilityBlock,
    #[serde(default)]
    pub hit_points: i32,
    #[serde(default)]
    pub max_hit_points: i32,
    #[serde(default = "default_armor_class")]
    pub armor_class: i32,
    #[serde(default)]
    pub thac0: i32,
    #[serde(default)]
    pub saving_throws: BTreeMap<String, i32>,
    #[serde(default)]
    pub inventory: Vec<InventoryItem>,
    /// Equipment slot name -> item, `None` for an empty slot
    #[serde(default)]
    pub equipment: BTreeMap<String, Option<EquippedItem>>,
    /// Spell level (as a string key, e.g. "1") -> known spells
    #[serde(default)]
    pub spells: BTreeMap<String, Vec<SpellData>>,
    #[serde(default)]
    pub spell_slots: BTreeMap<String, u32>,
    #[serde(default)]
    pub gold: u32,
    #[serde(default)]
    pub silver: u32,
    #[serde(default)]
    pub copper: u32,
    #[serde(default)]
    pub position: Position,
}

fn default_level() -> u32 {
    1
}

fn default_armor_class() -> i32 {
    10
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquippedItem {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpellData {
    pub name: String,
    #[serde(default)]
    pub memorized: bool,
    #[serde(default)]
    pub cast: bool,
}

/// Dungeon grid coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}
