//! Game state snapshot (`GET /api/game/state`, `GET /api/game/load`)

use serde::{Deserialize, Serialize};

use crate::character::CharacterData;

/// Everything the server reports about the running session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    #[serde(default)]
    pub party: Vec<CharacterData>,
    #[serde(default = "default_level")]
    pub current_level: u32,
    /// Row-major grid, `dungeon[y][x]`
    #[serde(default)]
    pub dungeon: Option<Vec<Vec<Tile>>>,
    #[serde(default)]
    pub in_combat: bool,
    /// Combat details are opaque to the client
    #[serde(default)]
    pub combat: Option<serde_json::Value>,
}

fn default_level() -> u32 {
    1
}

/// One dungeon cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub char: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub visible: bool,
    #[serde(default)]
    pub monster_data: Option<MonsterData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterData {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_snake_case_snapshot() {
        let json = r##"{
            "party": [],
            "current_level": 2,
            "dungeon": [[{"char": "#", "color": "#666666", "walkable": false, "visible": true}]],
            "in_combat": false,
            "combat": null
        }"##;
        let snapshot: GameStateSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.current_level, 2);
        let dungeon = snapshot.dungeon.unwrap();
        assert_eq!(dungeon[0][0].char, "#");
        assert!(dungeon[0][0].visible);
    }

    #[test]
    fn monster_tiles_carry_a_name() {
        let json = r##"{"char": "g", "color": "#ff0000", "visible": true,
                       "monster_data": {"name": "Goblin", "hp": 4}}"##;
        let tile: Tile = serde_json::from_str(json).unwrap();
        assert_eq!(tile.monster_data.unwrap().name, "Goblin");
    }
}
