use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::race::normalize;
use crate::error::DomainError;

/// Character classes, in selector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CharacterClass {
    #[default]
    Fighter,
    #[serde(rename = "Magic-User")]
    MagicUser,
    Cleric,
    Thief,
    Ranger,
    Paladin,
    Druid,
    Illusionist,
    Bard,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 9] = [
        Self::Fighter,
        Self::MagicUser,
        Self::Cleric,
        Self::Thief,
        Self::Ranger,
        Self::Paladin,
        Self::Druid,
        Self::Illusionist,
        Self::Bard,
    ];

    /// The name the server uses for this class.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fighter => "Fighter",
            Self::MagicUser => "Magic-User",
            Self::Cleric => "Cleric",
            Self::Thief => "Thief",
            Self::Ranger => "Ranger",
            Self::Paladin => "Paladin",
            Self::Druid => "Druid",
            Self::Illusionist => "Illusionist",
            Self::Bard => "Bard",
        }
    }

    /// Map colour used for this class's party marker, as a CSS hex string.
    pub fn marker_color(&self) -> &'static str {
        match self {
            Self::Fighter => "#ff0000",
            Self::MagicUser => "#0000ff",
            Self::Cleric => "#ffff00",
            Self::Thief => "#00ff00",
            Self::Ranger => "#ffa500",
            Self::Paladin => "#ff00ff",
            Self::Druid => "#008000",
            Self::Illusionist => "#800080",
            Self::Bard => "#00ffff",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CharacterClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|class| normalize(class.as_str()) == wanted)
            .ok_or_else(|| DomainError::parse(format!("Unknown class: {}", s)))
    }
}
