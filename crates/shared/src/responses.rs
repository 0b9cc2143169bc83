//! Response bodies returned by the game server

use serde::{Deserialize, Serialize};

use crate::character::CharacterData;
use crate::game_state::GameStateSnapshot;

/// Structured error body: `{"error": "Party is full"}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Body of `POST /api/party/generate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyResponse {
    #[serde(default)]
    pub status: Option<String>,
    pub party: Vec<CharacterData>,
}

/// Status-only acknowledgement (`{"success": true}`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub success: bool,
}

/// Body of `POST /api/rules/xp-for-level`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpResponse {
    pub xp: u64,
}

/// Body of `POST /api/game/move`
///
/// A refused step comes back as `{"success": false, "message": "Cannot move there"}`
/// with no state attached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoveResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(rename = "gameState", default)]
    pub game_state: Option<GameStateSnapshot>,
    #[serde(default)]
    pub message: Option<String>,
}
