//! Delve Protocol - Wire types for the game server's HTTP API
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json, and the domain vocabulary
//! 2. **No business logic** - Pure data types and serialization
//! 3. **Lenient decoding** - Optional server fields default instead of failing

pub mod character;
pub mod game_state;
pub mod requests;
pub mod responses;

pub use character::{CharacterData, EquippedItem, InventoryItem, Position, SpellData};
pub use game_state::{GameStateSnapshot, MonsterData, Tile};
pub use requests::{CreateCharacterRequest, MoveRequest, SaveGameRequest, XpForLevelRequest};
pub use responses::{ErrorBody, MoveResponse, PartyResponse, StatusResponse, XpResponse};

/// REST paths exposed by the game server.
pub mod paths {
    pub const NEW_GAME: &str = "/api/game/new";
    pub const GAME_STATE: &str = "/api/game/state";
    pub const SAVE_GAME: &str = "/api/game/save";
    pub const LOAD_GAME: &str = "/api/game/load";
    pub const MOVE: &str = "/api/game/move";
    pub const CREATE_CHARACTER: &str = "/api/character/create";
    pub const GENERATE_PARTY: &str = "/api/party/generate";
    pub const XP_FOR_LEVEL: &str = "/api/rules/xp-for-level";
}
