//! Request bodies sent to the game server

use serde::{Deserialize, Serialize};

use delve_domain::{AbilityBlock, CharacterClass, Direction, Race};

/// Body of `POST /api/character/create`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCharacterRequest {
    pub name: String,
    pub race: Race,
    pub character_class: CharacterClass,
    pub abilities: AbilityBlock,
}

/// Body of `POST /api/rules/xp-for-level`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XpForLevelRequest {
    pub character_class: CharacterClass,
    pub level: u32,
}

/// Body of `POST /api/game/save`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveGameRequest {
    pub slot_name: String,
}

/// Body of `POST /api/game/move`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub direction: Direction,
}
