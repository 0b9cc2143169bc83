//! Ability value objects - the six scores every character carries.
//!
//! Provides type safety for ability references instead of using magic strings like "STR", "DEX".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::error::DomainError;

/// Highest score the point-buy can raise an ability to.
pub const MAX_BOUGHT_SCORE: i32 = 18;

/// The six fixed ability identifiers, in character-sheet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Ability {
    /// Strength - physical power
    Str,
    /// Intelligence - reasoning and memory
    Int,
    /// Wisdom - perception and insight
    Wis,
    /// Dexterity - agility and reflexes
    Dex,
    /// Constitution - endurance and health
    Con,
    /// Charisma - force of personality
    Cha,
}

impl Ability {
    /// All abilities in the order the builder presents them.
    pub const ALL: [Ability; 6] = [
        Self::Str,
        Self::Int,
        Self::Wis,
        Self::Dex,
        Self::Con,
        Self::Cha,
    ];

    /// Returns the short uppercase wire key (e.g., "STR", "DEX").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Str => "STR",
            Self::Int => "INT",
            Self::Wis => "WIS",
            Self::Dex => "DEX",
            Self::Con => "CON",
            Self::Cha => "CHA",
        }
    }

    /// Returns the full name of the ability (e.g., "Strength").
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Str => "Strength",
            Self::Int => "Intelligence",
            Self::Wis => "Wisdom",
            Self::Dex => "Dexterity",
            Self::Con => "Constitution",
            Self::Cha => "Charisma",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Ability {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "STR" | "STRENGTH" => Ok(Self::Str),
            "INT" | "INTELLIGENCE" => Ok(Self::Int),
            "WIS" | "WISDOM" => Ok(Self::Wis),
            "DEX" | "DEXTERITY" => Ok(Self::Dex),
            "CON" | "CONSTITUTION" => Ok(Self::Con),
            "CHA" | "CHARISMA" => Ok(Self::Cha),
            _ => Err(DomainError::parse(format!("Unknown ability: {}", s))),
        }
    }
}

/// Ability modifier shown next to a score on the character sheet.
///
/// Uses floor division so that 9 maps to -1 and 8 maps to -1 as well.
pub fn ability_modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

/// One score per ability.
///
/// Serializes as `{"STR": 10, "INT": 12, ...}`, the shape the game server expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AbilityBlock {
    #[serde(rename = "STR")]
    strength: i32,
    #[serde(rename = "INT")]
    intelligence: i32,
    #[serde(rename = "WIS")]
    wisdom: i32,
    #[serde(rename = "DEX")]
    dexterity: i32,
    #[serde(rename = "CON")]
    constitution: i32,
    #[serde(rename = "CHA")]
    charisma: i32,
}

impl AbilityBlock {
    /// Every ability set to the same score.
    pub fn uniform(score: i32) -> Self {
        Self::from_fn(|_| score)
    }

    /// Builds a block by asking `f` for each ability in [`Ability::ALL`] order.
    pub fn from_fn(mut f: impl FnMut(Ability) -> i32) -> Self {
        let mut block = Self::default();
        for ability in Ability::ALL {
            block[ability] = f(ability);
        }
        block
    }

    /// Iterates `(ability, score)` pairs in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Ability, i32)> + '_ {
        Ability::ALL.into_iter().map(move |a| (a, self[a]))
    }

    /// Sum of `self - other` over all abilities.
    pub fn total_above(&self, other: &AbilityBlock) -> i32 {
        Ability::ALL
            .into_iter()
            .map(|a| self[a] - other[a])
            .sum()
    }

    fn slot(&self, ability: Ability) -> &i32 {
        match ability {
            Ability::Str => &self.strength,
            Ability::Int => &self.intelligence,
            Ability::Wis => &self.wisdom,
            Ability::Dex => &self.dexterity,
            Ability::Con => &self.constitution,
            Ability::Cha => &self.charisma,
        }
    }

    fn slot_mut(&mut self, ability: Ability) -> &mut i32 {
        match ability {
            Ability::Str => &mut self.strength,
            Ability::Int => &mut self.intelligence,
            Ability::Wis => &mut self.wisdom,
            Ability::Dex => &mut self.dexterity,
            Ability::Con => &mut self.constitution,
            Ability::Cha => &mut self.charisma,
        }
    }
}

impl Index<Ability> for AbilityBlock {
    type Output = i32;

    fn index(&self, ability: Ability) -> &Self::Output {
        self.slot(ability)
    }
}

impl IndexMut<Ability> for AbilityBlock {
    fn index_mut(&mut self, ability: Ability) -> &mut Self::Output {
        self.slot_mut(ability)
    }
}
