//! Character Service - submits builder drafts to the game server

use delve_shared::{paths, CharacterData, CreateCharacterRequest};

use crate::application::{Api, ServiceError};
use crate::ports::outbound::RandomPort;
use crate::state::{BuilderState, SubmitOutcome};

#[derive(Clone)]
pub struct CharacterService {
    api: Api,
}

impl CharacterService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// Create one character from a finalized draft.
    pub async fn create_character(
        &self,
        request: &CreateCharacterRequest,
    ) -> Result<CharacterData, ServiceError> {
        let character: CharacterData = self.api.post(paths::CREATE_CHARACTER, request).await?;
        tracing::info!(
            name = %character.name,
            race = %character.race,
            class = %character.character_class,
            "character created"
        );
        Ok(character)
    }

    /// Submit the builder's active slot and record the result.
    ///
    /// A full party is refused before any request goes out. On any failure
    /// the builder returns to editing with the slot unchanged; on success the
    /// server's character is appended to `party` and the builder advances.
    pub async fn submit_active_slot(
        &self,
        builder: &mut BuilderState,
        party: &mut Vec<CharacterData>,
        rng: &dyn RandomPort,
    ) -> Result<SubmitOutcome, ServiceError> {
        let request = builder.begin_submit(party.len())?;
        let slot = builder.active_slot();

        match self.create_character(&request).await {
            Ok(character) => {
                let outcome = builder.complete_submit(&character, party.len() + 1, rng);
                party.push(character);
                tracing::debug!(slot, ?outcome, party_size = party.len(), "slot confirmed");
                Ok(outcome)
            }
            Err(e) => {
                tracing::warn!(slot, error = %e, "character submission failed");
                builder.abort_submit();
                Err(e)
            }
        }
    }
}
