use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Playable races, in selector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Race {
    #[default]
    Human,
    Elf,
    Dwarf,
    Halfling,
    Gnome,
    #[serde(rename = "Half-Orc")]
    HalfOrc,
    #[serde(rename = "Half-Elf")]
    HalfElf,
    Lizardfolk,
    Tabaxi,
    Goblin,
}

impl Race {
    pub const ALL: [Race; 10] = [
        Self::Human,
        Self::Elf,
        Self::Dwarf,
        Self::Halfling,
        Self::Gnome,
        Self::HalfOrc,
        Self::HalfElf,
        Self::Lizardfolk,
        Self::Tabaxi,
        Self::Goblin,
    ];

    /// The name the server uses for this race.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Human => "Human",
            Self::Elf => "Elf",
            Self::Dwarf => "Dwarf",
            Self::Halfling => "Halfling",
            Self::Gnome => "Gnome",
            Self::HalfOrc => "Half-Orc",
            Self::HalfElf => "Half-Elf",
            Self::Lizardfolk => "Lizardfolk",
            Self::Tabaxi => "Tabaxi",
            Self::Goblin => "Goblin",
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Race {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|race| normalize(race.as_str()) == wanted)
            .ok_or_else(|| DomainError::parse(format!("Unknown race: {}", s)))
    }
}

/// Case- and punctuation-insensitive key so "half orc" matches "Half-Orc".
pub(crate) fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
