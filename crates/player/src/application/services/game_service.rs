//! Game Service - session lifecycle, persistence and rules lookups

use delve_domain::{CharacterClass, Direction};
use delve_shared::{
    paths, CharacterData, GameStateSnapshot, MoveRequest, MoveResponse, PartyResponse,
    SaveGameRequest, StatusResponse, XpForLevelRequest, XpResponse,
};

use crate::application::{Api, ServiceError};

#[derive(Clone)]
pub struct GameService {
    api: Api,
}

impl GameService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// Reset the server-side game: empty party, fresh dungeon.
    pub async fn new_game(&self) -> Result<(), ServiceError> {
        self.api.post_empty(paths::NEW_GAME).await?;
        tracing::info!("new game started");
        Ok(())
    }

    /// Have the server roll a complete party, replacing the current one.
    pub async fn generate_party(&self) -> Result<Vec<CharacterData>, ServiceError> {
        let response: PartyResponse = self
            .api
            .post_empty_with_response(paths::GENERATE_PARTY)
            .await?;
        tracing::info!(size = response.party.len(), "party generated");
        Ok(response.party)
    }

    pub async fn fetch_state(&self) -> Result<GameStateSnapshot, ServiceError> {
        Ok(self.api.get(paths::GAME_STATE).await?)
    }

    /// Ask the server to walk the party one step.
    ///
    /// A blocked step is not an error: the response carries `success: false`
    /// and the server's explanation.
    pub async fn move_party(&self, direction: Direction) -> Result<MoveResponse, ServiceError> {
        let response: MoveResponse = self.api.post(paths::MOVE, &MoveRequest { direction }).await?;
        if response.success && response.game_state.is_none() {
            return Err(ServiceError::ParseError(
                "move succeeded without a game state".into(),
            ));
        }
        tracing::debug!(%direction, success = response.success, "party moved");
        Ok(response)
    }

    pub async fn save_game(&self, slot_name: &str) -> Result<(), ServiceError> {
        let request = SaveGameRequest {
            slot_name: slot_name.to_string(),
        };
        let response: StatusResponse = self.api.post(paths::SAVE_GAME, &request).await?;
        if !response.success {
            return Err(ServiceError::Rejected("Failed to save game".into()));
        }
        tracing::info!(slot = slot_name, "game saved");
        Ok(())
    }

    pub async fn load_game(&self, slot_name: &str) -> Result<GameStateSnapshot, ServiceError> {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("slot_name", slot_name)
            .finish();
        let path = format!("{}?{}", paths::LOAD_GAME, query);
        let state: GameStateSnapshot = self.api.get(&path).await?;
        tracing::info!(slot = slot_name, party = state.party.len(), "game loaded");
        Ok(state)
    }

    /// Experience required to reach `level` for `class`.
    pub async fn xp_for_level(
        &self,
        class: CharacterClass,
        level: u32,
    ) -> Result<u64, ServiceError> {
        let request = XpForLevelRequest {
            character_class: class,
            level,
        };
        let response: XpResponse = self.api.post(paths::XP_FOR_LEVEL, &request).await?;
        Ok(response.xp)
    }
}
