//! Player controller - owns the session and turns commands into replies.
//!
//! One command is handled at a time. Failures end up in the message log and
//! never leave the builder or game state half-updated.

use std::sync::Arc;

use delve_domain::Direction;
use delve_shared::GameStateSnapshot;

use crate::application::services::{CharacterService, GameService};
use crate::application::ServiceError;
use crate::ports::outbound::RandomPort;
use crate::state::{BuilderAction, BuilderState, PointBuyRules, SubmitOutcome, PARTY_SIZE};
use crate::ui::character_sheet::{CharacterSheetView, NextLevel};
use crate::ui::commands::Command;
use crate::ui::map::render_ascii;
use crate::ui::view_model::BuilderView;

/// Something the renderer should draw after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    Builder(BuilderView),
    Sheets(Vec<CharacterSheetView>),
    Map(String),
    Help,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    pub panels: Vec<Panel>,
    pub messages: Vec<String>,
    pub quit: bool,
}

pub struct PlayerController {
    game: GameService,
    characters: CharacterService,
    rng: Arc<dyn RandomPort>,
    rules: PointBuyRules,
    default_save_slot: String,
    builder: Option<BuilderState>,
    state: GameStateSnapshot,
    log: Vec<String>,
}

impl PlayerController {
    pub fn new(
        game: GameService,
        characters: CharacterService,
        rng: Arc<dyn RandomPort>,
        rules: PointBuyRules,
        default_save_slot: impl Into<String>,
    ) -> Self {
        Self {
            game,
            characters,
            rng,
            rules,
            default_save_slot: default_save_slot.into(),
            builder: None,
            state: GameStateSnapshot::default(),
            log: Vec::new(),
        }
    }

    pub fn builder(&self) -> Option<&BuilderState> {
        self.builder.as_ref()
    }

    pub fn game_state(&self) -> &GameStateSnapshot {
        &self.state
    }

    /// Every message produced so far, oldest first.
    pub fn message_log(&self) -> &[String] {
        &self.log
    }

    pub async fn handle(&mut self, command: Command) -> Reply {
        let mut reply = Reply::default();
        tracing::debug!(?command, "handling command");

        match command {
            Command::NewGame => self.new_game(&mut reply).await,
            Command::GenerateParty => self.generate_party(&mut reply).await,
            Command::CustomParty => self.custom_party(&mut reply),
            Command::Reroll => self.edit(&mut reply, BuilderAction::Reroll),
            Command::Increase(ability) => self.edit(&mut reply, BuilderAction::Increase(ability)),
            Command::Decrease(ability) => self.edit(&mut reply, BuilderAction::Decrease(ability)),
            Command::Previous => self.edit(&mut reply, BuilderAction::PreviousSlot),
            Command::Next => self.edit(&mut reply, BuilderAction::NextSlot),
            Command::Race(race) => self.edit(&mut reply, BuilderAction::SelectRace(race)),
            Command::Class(class) => self.edit(&mut reply, BuilderAction::SelectClass(class)),
            Command::Name(name) => self.edit(&mut reply, BuilderAction::SetName(name)),
            Command::Submit => self.submit(&mut reply).await,
            Command::Sheet => self.sheets(&mut reply).await,
            Command::Map => {
                if self.state.dungeon.is_some() {
                    reply.panels.push(Panel::Map(render_ascii(&self.state)));
                } else {
                    self.say(&mut reply, "No dungeon yet");
                }
            }
            Command::Move(direction) => self.move_party(&mut reply, direction).await,
            Command::Save(slot) => self.save(&mut reply, slot).await,
            Command::Load(slot) => self.load(&mut reply, slot).await,
            Command::Help => reply.panels.push(Panel::Help),
            Command::Quit => reply.quit = true,
        }

        reply
    }

    fn say(&mut self, reply: &mut Reply, message: impl Into<String>) {
        let message = message.into();
        self.log.push(message.clone());
        reply.messages.push(message);
    }

    fn fail(&mut self, reply: &mut Reply, context: &str, error: &ServiceError) {
        tracing::warn!(context, error = %error, "operation failed");
        self.say(reply, error.user_message());
    }

    async fn new_game(&mut self, reply: &mut Reply) {
        match self.game.new_game().await {
            Ok(()) => {
                self.builder = None;
                self.state = GameStateSnapshot::default();
                self.say(
                    reply,
                    "New game started. Type 'generate' for a random party or 'custom' to build one.",
                );
            }
            Err(e) => self.fail(reply, "new game", &e),
        }
    }

    async fn generate_party(&mut self, reply: &mut Reply) {
        match self.game.generate_party().await {
            Ok(party) => {
                self.builder = None;
                self.state.party = party;
                self.say(reply, "A party has been generated.");
                self.start_dungeon(reply).await;
            }
            Err(e) => self.fail(reply, "generate party", &e),
        }
    }

    async fn start_dungeon(&mut self, reply: &mut Reply) {
        match self.game.fetch_state().await {
            Ok(state) => {
                self.state = state;
                tracing::info!(
                    level = self.state.current_level,
                    party = self.state.party.len(),
                    "entered dungeon"
                );
                reply.panels.push(Panel::Map(render_ascii(&self.state)));
            }
            Err(e) => self.fail(reply, "start dungeon", &e),
        }
    }

    fn custom_party(&mut self, reply: &mut Reply) {
        if let Some(builder) = self.builder.as_ref().filter(|b| !b.is_closed()) {
            let view = BuilderView::from_state(builder);
            self.say(
                reply,
                "A party is already being built. Type 'new' to start over.",
            );
            reply.panels.push(Panel::Builder(view));
            return;
        }

        let builder = BuilderState::new(self.rules, self.rng.as_ref());
        reply.panels.push(Panel::Builder(BuilderView::from_state(&builder)));
        self.builder = Some(builder);
        self.say(reply, "Create your party: four characters, one at a time.");
    }

    fn edit(&mut self, reply: &mut Reply, action: BuilderAction) {
        let Some(builder) = self.builder.as_mut() else {
            self.say(reply, "No character is being built. Type 'custom' to start.");
            return;
        };
        if builder.is_closed() {
            self.say(reply, "The party is already complete.");
            return;
        }

        let (race, class) = (builder.race(), builder.class());
        let refusal = refusal_reason(builder, &action);
        let applied = builder.apply(action.clone(), self.rng.as_ref());
        let note = match action {
            BuilderAction::SelectRace(_) if applied && builder.class() != class => Some(format!(
                "{class} is not available to {}; class set to {}",
                builder.race(),
                builder.class()
            )),
            BuilderAction::SelectClass(_) if applied && builder.race() != race => Some(format!(
                "{race} cannot be a {}; race set to {}",
                builder.class(),
                builder.race()
            )),
            _ => None,
        };
        let view = BuilderView::from_state(builder);

        if let Some(message) = refusal.filter(|_| !applied).or(note) {
            self.say(reply, message);
        }
        reply.panels.push(Panel::Builder(view));
    }

    async fn submit(&mut self, reply: &mut Reply) {
        let Some(builder) = self.builder.as_mut() else {
            self.say(reply, "No character is being built. Type 'custom' to start.");
            return;
        };

        let result = self
            .characters
            .submit_active_slot(builder, &mut self.state.party, self.rng.as_ref())
            .await;
        let view = BuilderView::from_state(builder);

        match result {
            Ok(SubmitOutcome::Advanced { slot }) => {
                if let Some(member) = self.state.party.last() {
                    let joined = format!("{} joined the party", member.name);
                    self.say(reply, joined);
                }
                tracing::debug!(slot, "builder advanced");
                reply.panels.push(Panel::Builder(view));
            }
            Ok(SubmitOutcome::PartyComplete) => {
                self.builder = None;
                self.say(reply, format!("All {PARTY_SIZE} adventurers are ready. Entering the dungeon..."));
                self.start_dungeon(reply).await;
            }
            Err(e) => {
                self.fail(reply, "submit character", &e);
                reply.panels.push(Panel::Builder(view));
            }
        }
    }

    async fn sheets(&mut self, reply: &mut Reply) {
        if self.state.party.is_empty() {
            self.say(reply, "No characters in the party");
            return;
        }

        let mut sheets = Vec::with_capacity(self.state.party.len());
        for character in &self.state.party {
            let next_level = match self
                .game
                .xp_for_level(character.character_class, character.level)
                .await
            {
                Ok(xp) => NextLevel::Xp(xp),
                Err(e) => {
                    tracing::warn!(name = %character.name, error = %e, "xp lookup failed");
                    NextLevel::ErrorLoading
                }
            };
            sheets.push(CharacterSheetView::from_character(character, next_level));
        }
        reply.panels.push(Panel::Sheets(sheets));
    }

    async fn move_party(&mut self, reply: &mut Reply, direction: Direction) {
        if self.state.dungeon.is_none() || self.state.party.is_empty() {
            self.say(reply, "No dungeon yet");
            return;
        }
        if self.state.in_combat {
            self.say(reply, "You cannot move during combat");
            return;
        }

        match self.game.move_party(direction).await {
            Ok(response) => {
                if let Some(state) = response.game_state.filter(|_| response.success) {
                    self.state = state;
                    reply.panels.push(Panel::Map(render_ascii(&self.state)));
                }
                if let Some(message) = response.message {
                    self.say(reply, message);
                }
            }
            Err(e) => self.fail(reply, "move party", &e),
        }
    }

    async fn save(&mut self, reply: &mut Reply, slot: Option<String>) {
        let slot = slot.unwrap_or_else(|| self.default_save_slot.clone());
        match self.game.save_game(&slot).await {
            Ok(()) => self.say(reply, "Game saved successfully"),
            Err(e) => self.fail(reply, "save game", &e),
        }
    }

    async fn load(&mut self, reply: &mut Reply, slot: Option<String>) {
        let slot = slot.unwrap_or_else(|| self.default_save_slot.clone());
        match self.game.load_game(&slot).await {
            Ok(state) => {
                self.builder = None;
                self.state = state;
                self.say(reply, format!("Loaded '{slot}'"));
                if self.state.dungeon.is_some() {
                    reply.panels.push(Panel::Map(render_ascii(&self.state)));
                }
            }
            Err(e) => self.fail(reply, "load game", &e),
        }
    }
}

/// Why a builder action would be refused, if it would be.
fn refusal_reason(builder: &BuilderState, action: &BuilderAction) -> Option<String> {
    match action {
        BuilderAction::Increase(ability) if !builder.can_increase(*ability) => {
            Some(if builder.bonus_points() == 0 {
                "No bonus points left".to_string()
            } else {
                format!("{ability} cannot be raised any further")
            })
        }
        BuilderAction::Decrease(ability) if !builder.can_decrease(*ability) => {
            Some(format!("{ability} is already at its rolled value"))
        }
        BuilderAction::PreviousSlot if !builder.can_go_previous() => {
            Some("This is the first character".to_string())
        }
        BuilderAction::NextSlot if !builder.can_go_next() => Some(
            if builder.active_slot() + 1 >= PARTY_SIZE {
                "This is the last character".to_string()
            } else {
                "Submit this character before moving on".to_string()
            },
        ),
        _ => None,
    }
}
