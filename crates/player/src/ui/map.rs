//! ASCII dungeon map rendering.

use delve_shared::{CharacterData, GameStateSnapshot, Position, Tile};

/// A single rendered map cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapCell {
    pub glyph: String,
    pub color: Option<String>,
    /// Hover text: party member or monster name
    pub tooltip: Option<String>,
}

impl MapCell {
    fn hidden() -> Self {
        Self {
            glyph: " ".to_string(),
            color: None,
            tooltip: None,
        }
    }

    fn member(character: &CharacterData) -> Self {
        Self {
            glyph: "@".to_string(),
            color: Some(character.character_class.marker_color().to_string()),
            tooltip: Some(character.name.clone()),
        }
    }

    fn tile(tile: &Tile) -> Self {
        Self {
            glyph: tile.char.clone(),
            color: tile.color.clone(),
            tooltip: tile.monster_data.as_ref().map(|m| m.name.clone()),
        }
    }
}

/// Render the snapshot's dungeon into rows of cells.
///
/// Party members win over the tile beneath them; invisible tiles render blank.
/// Returns an empty grid when the snapshot carries no dungeon.
pub fn render_cells(state: &GameStateSnapshot) -> Vec<Vec<MapCell>> {
    let Some(dungeon) = state.dungeon.as_ref() else {
        return Vec::new();
    };

    dungeon
        .iter()
        .enumerate()
        .map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(|(x, tile)| {
                    let here = Position {
                        x: x as i32,
                        y: y as i32,
                    };
                    match state.party.iter().find(|c| c.position == here) {
                        Some(member) => MapCell::member(member),
                        None if !tile.visible => MapCell::hidden(),
                        None => MapCell::tile(tile),
                    }
                })
                .collect()
        })
        .collect()
}

/// Plain-text rendering, one line per dungeon row.
pub fn render_ascii(state: &GameStateSnapshot) -> String {
    render_cells(state)
        .iter()
        .map(|row| row.iter().map(|cell| cell.glyph.as_str()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
