//! Compass directions the party can walk in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// One step on the dungeon grid; north is towards row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Wire value sent in `{"direction": ...}`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" | "up" => Ok(Self::North),
            "south" | "down" => Ok(Self::South),
            "east" | "right" => Ok(Self::East),
            "west" | "left" => Ok(Self::West),
            _ => Err(DomainError::parse(format!("Unknown direction: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_arrows() {
        assert_eq!("North".parse(), Ok(Direction::North));
        assert_eq!(" west ".parse(), Ok(Direction::West));
        assert_eq!("right".parse(), Ok(Direction::East));
        assert!("w".parse::<Direction>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_value(Direction::South).unwrap();
        assert_eq!(json, serde_json::json!("south"));
        assert_eq!(Direction::South.to_string(), "south");
    }
}
