//! Point-buy character builder.
//!
//! Holds one session of party creation: four slots, the active slot's rolled
//! baseline, and the shared pool of bonus points. All transitions are plain
//! method calls on [`BuilderState`]; the submit round-trip is split into
//! [`BuilderState::begin_submit`] and [`BuilderState::complete_submit`] /
//! [`BuilderState::abort_submit`] so the network call stays outside.

use thiserror::Error;

use delve_domain::game_systems::{allowed_classes, allowed_races, is_allowed};
use delve_domain::{
    Ability, AbilityBlock, CharacterClass, CharacterName, DomainError, Race, MAX_BOUGHT_SCORE,
};
use delve_shared::{CharacterData, CreateCharacterRequest};

use super::PointBuyRules;
use crate::ports::outbound::RandomPort;

/// Number of party slots filled during creation.
pub const PARTY_SIZE: usize = 4;

/// A confirmed slot, as echoed back by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterDraft {
    pub name: String,
    pub race: Race,
    pub class: CharacterClass,
    pub abilities: AbilityBlock,
}

impl From<&CharacterData> for CharacterDraft {
    fn from(character: &CharacterData) -> Self {
        Self {
            name: character.name.clone(),
            race: character.race,
            class: character.character_class,
            abilities: character.abilities,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderPhase {
    Editing,
    /// A create request is in flight; every edit is refused.
    Submitting,
    /// All slots confirmed.
    Closed,
}

/// User intents the builder understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuilderAction {
    Reroll,
    Increase(Ability),
    Decrease(Ability),
    PreviousSlot,
    NextSlot,
    SelectRace(Race),
    SelectClass(CharacterClass),
    SetName(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Party is already full (maximum {max} characters)")]
    PartyFull { max: usize },

    #[error("A character is already being submitted")]
    Busy,

    #[error("Character creation is closed")]
    Closed,

    #[error(transparent)]
    Invalid(#[from] DomainError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Builder moved on to this (empty) slot with a fresh roll.
    Advanced { slot: usize },
    /// Fourth member confirmed; the builder is closed.
    PartyComplete,
}

#[derive(Debug, Clone)]
pub struct BuilderState {
    rules: PointBuyRules,
    active_slot: usize,
    drafts: [Option<CharacterDraft>; PARTY_SIZE],
    baseline: AbilityBlock,
    scores: AbilityBlock,
    bonus_points: u32,
    name: String,
    race: Race,
    class: CharacterClass,
    phase: BuilderPhase,
}

impl BuilderState {
    /// Opens a session on slot 0 with a fresh roll.
    pub fn new(rules: PointBuyRules, rng: &dyn RandomPort) -> Self {
        let mut state = Self {
            rules,
            active_slot: 0,
            drafts: Default::default(),
            baseline: AbilityBlock::default(),
            scores: AbilityBlock::default(),
            bonus_points: 0,
            name: String::new(),
            race: Race::default(),
            class: CharacterClass::default(),
            phase: BuilderPhase::Editing,
        };
        state.roll(rng);
        state.enforce_compatibility();
        state
    }

    pub fn rules(&self) -> &PointBuyRules {
        &self.rules
    }

    pub fn active_slot(&self) -> usize {
        self.active_slot
    }

    pub fn drafts(&self) -> &[Option<CharacterDraft>; PARTY_SIZE] {
        &self.drafts
    }

    pub fn draft(&self, slot: usize) -> Option<&CharacterDraft> {
        self.drafts.get(slot).and_then(Option::as_ref)
    }

    pub fn baseline(&self) -> &AbilityBlock {
        &self.baseline
    }

    pub fn scores(&self) -> &AbilityBlock {
        &self.scores
    }

    pub fn bonus_points(&self) -> u32 {
        self.bonus_points
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn race(&self) -> Race {
        self.race
    }

    pub fn class(&self) -> CharacterClass {
        self.class
    }

    pub fn phase(&self) -> BuilderPhase {
        self.phase
    }

    pub fn is_closed(&self) -> bool {
        self.phase == BuilderPhase::Closed
    }

    fn editing(&self) -> bool {
        self.phase == BuilderPhase::Editing
    }

    pub fn can_increase(&self, ability: Ability) -> bool {
        self.editing() && self.bonus_points > 0 && self.scores[ability] < MAX_BOUGHT_SCORE
    }

    pub fn can_decrease(&self, ability: Ability) -> bool {
        self.editing() && self.scores[ability] > self.baseline[ability]
    }

    pub fn can_go_previous(&self) -> bool {
        self.editing() && self.active_slot > 0
    }

    /// Forward navigation requires the active slot to be confirmed first.
    pub fn can_go_next(&self) -> bool {
        self.editing()
            && self.active_slot + 1 < PARTY_SIZE
            && self.drafts[self.active_slot].is_some()
    }

    pub fn can_submit(&self) -> bool {
        self.editing()
    }

    /// Applies one user action. Returns `false` when it was refused (a no-op).
    pub fn apply(&mut self, action: BuilderAction, rng: &dyn RandomPort) -> bool {
        match action {
            BuilderAction::Reroll => self.reroll(rng),
            BuilderAction::Increase(ability) => self.increase(ability),
            BuilderAction::Decrease(ability) => self.decrease(ability),
            BuilderAction::PreviousSlot => self.previous(rng),
            BuilderAction::NextSlot => self.next(rng),
            BuilderAction::SelectRace(race) => self.select_race(race),
            BuilderAction::SelectClass(class) => self.select_class(class),
            BuilderAction::SetName(name) => self.set_name(name),
        }
    }

    /// Rolls every ability anew; the roll becomes both score and baseline.
    pub fn reroll(&mut self, rng: &dyn RandomPort) -> bool {
        if !self.editing() {
            return false;
        }
        self.roll(rng);
        self.enforce_compatibility();
        true
    }

    pub fn increase(&mut self, ability: Ability) -> bool {
        if !self.can_increase(ability) {
            return false;
        }
        self.scores[ability] += 1;
        self.bonus_points -= 1;
        true
    }

    pub fn decrease(&mut self, ability: Ability) -> bool {
        if !self.can_decrease(ability) {
            return false;
        }
        self.scores[ability] -= 1;
        self.bonus_points += 1;
        true
    }

    pub fn previous(&mut self, rng: &dyn RandomPort) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.load_slot(self.active_slot - 1, rng);
        true
    }

    pub fn next(&mut self, rng: &dyn RandomPort) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.load_slot(self.active_slot + 1, rng);
        true
    }

    /// Selects a race; an incompatible class falls back to the first allowed one.
    pub fn select_race(&mut self, race: Race) -> bool {
        if !self.editing() {
            return false;
        }
        self.race = race;
        if !is_allowed(self.race, self.class) {
            if let Some(class) = allowed_classes(self.race).next() {
                tracing::debug!(%race, from = %self.class, to = %class, "class reassigned");
                self.class = class;
            }
        }
        true
    }

    /// Selects a class; an incompatible race falls back to the first allowed one.
    pub fn select_class(&mut self, class: CharacterClass) -> bool {
        if !self.editing() {
            return false;
        }
        self.class = class;
        if !is_allowed(self.race, self.class) {
            if let Some(race) = allowed_races(self.class).next() {
                tracing::debug!(%class, from = %self.race, to = %race, "race reassigned");
                self.race = race;
            }
        }
        true
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> bool {
        if !self.editing() {
            return false;
        }
        self.name = name.into();
        true
    }

    /// Validates the active slot and moves to [`BuilderPhase::Submitting`].
    ///
    /// `party_size` is the number of members the party already holds; a full
    /// party is refused here so no request is ever sent for it.
    pub fn begin_submit(
        &mut self,
        party_size: usize,
    ) -> Result<CreateCharacterRequest, SubmitError> {
        match self.phase {
            BuilderPhase::Closed => return Err(SubmitError::Closed),
            BuilderPhase::Submitting => return Err(SubmitError::Busy),
            BuilderPhase::Editing => {}
        }
        if party_size >= PARTY_SIZE {
            return Err(SubmitError::PartyFull { max: PARTY_SIZE });
        }
        let name = CharacterName::new(self.name.as_str())?;

        self.phase = BuilderPhase::Submitting;
        Ok(CreateCharacterRequest {
            name: name.into(),
            race: self.race,
            character_class: self.class,
            abilities: self.scores,
        })
    }

    /// Records the server's character for the active slot and advances.
    ///
    /// `party_size` counts the party including `character`.
    pub fn complete_submit(
        &mut self,
        character: &CharacterData,
        party_size: usize,
        rng: &dyn RandomPort,
    ) -> SubmitOutcome {
        self.drafts[self.active_slot] = Some(CharacterDraft::from(character));

        let next_empty = (self.active_slot + 1..PARTY_SIZE)
            .chain(0..self.active_slot)
            .find(|slot| self.drafts[*slot].is_none());

        match next_empty {
            Some(slot) if party_size < PARTY_SIZE => {
                self.phase = BuilderPhase::Editing;
                self.active_slot = slot;
                self.reset_form();
                self.roll(rng);
                self.enforce_compatibility();
                SubmitOutcome::Advanced { slot }
            }
            _ => {
                self.phase = BuilderPhase::Closed;
                SubmitOutcome::PartyComplete
            }
        }
    }

    /// Returns to editing after a failed submission, leaving the slot untouched.
    pub fn abort_submit(&mut self) {
        if self.phase == BuilderPhase::Submitting {
            self.phase = BuilderPhase::Editing;
        }
    }

    fn roll(&mut self, rng: &dyn RandomPort) {
        let (min, max) = (self.rules.roll_min, self.rules.roll_max);
        self.baseline = AbilityBlock::from_fn(|_| rng.gen_range(min, max));
        self.scores = self.baseline;
        self.bonus_points = self.rules.bonus_points;
    }

    fn load_slot(&mut self, slot: usize, rng: &dyn RandomPort) {
        self.active_slot = slot;
        match self.drafts[slot].clone() {
            Some(draft) => {
                self.name = draft.name;
                self.race = draft.race;
                self.class = draft.class;
                self.baseline = draft.abilities;
                self.scores = draft.abilities;
                self.bonus_points = 0;
            }
            None => {
                self.reset_form();
                self.roll(rng);
            }
        }
        self.enforce_compatibility();
    }

    fn reset_form(&mut self) {
        self.name.clear();
        self.race = Race::default();
        self.class = CharacterClass::default();
    }

    /// Re-applied whenever the selectors are repopulated.
    fn enforce_compatibility(&mut self) {
        if !is_allowed(self.race, self.class) {
            if let Some(class) = allowed_classes(self.race).next() {
                self.class = class;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::random::ScriptedRandom;
    use delve_shared::Position;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn tens() -> ScriptedRandom {
        ScriptedRandom::new(vec![10])
    }

    fn builder() -> BuilderState {
        BuilderState::new(PointBuyRules::default(), &tens())
    }

    fn server_character(name: &str, state: &BuilderState) -> CharacterData {
        CharacterData {
            id: None,
            name: name.to_string(),
            race: state.race(),
            character_class: state.class(),
            level: 1,
            experience: 0,
            abilities: *state.scores(),
            hit_points: 8,
            max_hit_points: 8,
            armor_class: 10,
            thac0: 20,
            saving_throws: Default::default(),
            inventory: vec![],
            equipment: Default::default(),
            spells: Default::default(),
            spell_slots: Default::default(),
            gold: 50,
            silver: 0,
            copper: 0,
            position: Position::default(),
        }
    }

    fn submit(state: &mut BuilderState, name: &str, party: &mut Vec<CharacterData>) -> SubmitOutcome {
        state.set_name(name);
        state.begin_submit(party.len()).unwrap();
        let character = server_character(name, state);
        party.push(character.clone());
        state.complete_submit(&character, party.len(), &tens())
    }

    fn spent(state: &BuilderState) -> i32 {
        state.scores().total_above(state.baseline())
    }

    mod rolling {
        use super::*;

        #[test]
        fn fresh_builder_starts_on_slot_zero_with_full_pool() {
            let state = builder();
            assert_eq!(state.active_slot(), 0);
            assert_eq!(state.phase(), BuilderPhase::Editing);
            assert_eq!(state.bonus_points(), 5);
            assert_eq!(*state.scores(), AbilityBlock::uniform(10));
            assert_eq!(state.scores(), state.baseline());
        }

        #[test]
        fn reroll_resets_points_and_baseline() {
            let mut state = builder();
            state.increase(Ability::Str);
            state.increase(Ability::Dex);

            let rng = ScriptedRandom::new(vec![5, 19, 7, 12, 14, 9]);
            assert!(state.reroll(&rng));

            assert_eq!(state.bonus_points(), 5);
            assert_eq!(state.scores(), state.baseline());
            assert_eq!(state.scores()[Ability::Str], 5);
            assert_eq!(state.scores()[Ability::Int], 19);
            assert_eq!(state.scores()[Ability::Cha], 9);
        }

        #[test]
        fn system_rolls_stay_within_configured_range() {
            let rng = crate::infrastructure::SystemRandom::new();
            let mut state = BuilderState::new(PointBuyRules::default(), &rng);
            for _ in 0..200 {
                state.reroll(&rng);
                assert_eq!(state.bonus_points(), 5);
                for (_, score) in state.scores().iter() {
                    assert!((5..=19).contains(&score));
                }
            }
        }

        #[test]
        fn custom_rules_change_pool_and_range() {
            let rules = PointBuyRules::new(3, 3, 2).unwrap();
            let state = BuilderState::new(rules, &crate::infrastructure::SystemRandom::new());
            assert_eq!(*state.scores(), AbilityBlock::uniform(3));
            assert_eq!(state.bonus_points(), 2);
        }

        #[test]
        fn reroll_uses_the_dice_port_once_per_ability() {
            let mut rng = crate::ports::outbound::MockRandomPort::new();
            rng.expect_gen_range()
                .withf(|min, max| *min == 5 && *max == 19)
                .times(6)
                .return_const(11);
            let state = BuilderState::new(PointBuyRules::default(), &rng);
            assert_eq!(*state.baseline(), AbilityBlock::uniform(11));
        }
    }

    mod point_buy {
        use super::*;

        #[test]
        fn spend_and_refund_scenario() {
            let mut state = builder();

            for _ in 0..3 {
                assert!(state.increase(Ability::Str));
            }
            assert_eq!(state.scores()[Ability::Str], 13);
            assert_eq!(state.bonus_points(), 2);

            for _ in 0..3 {
                assert!(state.decrease(Ability::Str));
            }
            assert_eq!(state.scores()[Ability::Str], 10);
            assert_eq!(state.bonus_points(), 5);
        }

        #[test]
        fn decrease_at_baseline_is_a_noop() {
            let mut state = builder();
            assert!(!state.can_decrease(Ability::Wis));
            assert!(!state.decrease(Ability::Wis));
            assert_eq!(state.scores()[Ability::Wis], 10);
            assert_eq!(state.bonus_points(), 5);
        }

        #[test]
        fn increase_without_points_is_a_noop() {
            let mut state = builder();
            for _ in 0..5 {
                assert!(state.increase(Ability::Con));
            }
            assert_eq!(state.bonus_points(), 0);
            assert!(!state.can_increase(Ability::Cha));
            assert!(!state.increase(Ability::Cha));
            assert_eq!(state.scores()[Ability::Cha], 10);
        }

        #[test]
        fn increase_caps_at_eighteen() {
            let mut state = BuilderState::new(PointBuyRules::default(), &ScriptedRandom::new(vec![17]));
            assert!(state.increase(Ability::Dex));
            assert_eq!(state.scores()[Ability::Dex], 18);
            assert!(!state.increase(Ability::Dex));
            assert_eq!(state.scores()[Ability::Dex], 18);
            assert_eq!(state.bonus_points(), 4);
        }

        #[test]
        fn rolled_nineteen_can_be_neither_raised_nor_lowered() {
            let state = BuilderState::new(PointBuyRules::default(), &ScriptedRandom::new(vec![19]));
            assert!(!state.can_increase(Ability::Str));
            assert!(!state.can_decrease(Ability::Str));
        }

        #[test]
        fn invariants_hold_for_arbitrary_sequences() {
            let mut dice = StdRng::seed_from_u64(0x5eed);
            for _ in 0..50 {
                let rolls: Vec<i32> = (0..6).map(|_| dice.gen_range(5..=19)).collect();
                let mut state =
                    BuilderState::new(PointBuyRules::default(), &ScriptedRandom::new(rolls));

                for _ in 0..100 {
                    let ability = Ability::ALL[dice.gen_range(0..6)];
                    if dice.gen_bool(0.5) {
                        state.increase(ability);
                    } else {
                        state.decrease(ability);
                    }

                    assert_eq!(state.bonus_points() as i32 + spent(&state), 5);
                    for ability in Ability::ALL {
                        let score = state.scores()[ability];
                        let base = state.baseline()[ability];
                        assert!(score >= base);
                        assert!(score <= MAX_BOUGHT_SCORE.max(base));
                    }
                }
            }
        }
    }

    mod navigation {
        use super::*;

        #[test]
        fn slot_zero_has_no_previous() {
            let mut state = builder();
            assert!(!state.can_go_previous());
            assert!(!state.previous(&tens()));
            assert_eq!(state.active_slot(), 0);
        }

        #[test]
        fn next_is_blocked_until_the_slot_is_submitted() {
            let mut state = builder();
            assert!(!state.can_go_next());
            assert!(!state.next(&tens()));
            assert_eq!(state.active_slot(), 0);
        }

        #[test]
        fn previous_loads_submitted_draft_with_empty_pool() {
            let mut state = builder();
            let mut party = Vec::new();
            state.select_class(CharacterClass::Cleric);
            state.increase(Ability::Wis);
            submit(&mut state, "Jozan", &mut party);
            assert_eq!(state.active_slot(), 1);

            assert!(state.previous(&tens()));
            assert_eq!(state.active_slot(), 0);
            assert_eq!(state.name(), "Jozan");
            assert_eq!(state.class(), CharacterClass::Cleric);
            assert_eq!(state.scores()[Ability::Wis], 11);
            assert_eq!(state.baseline(), state.scores());
            assert_eq!(state.bonus_points(), 0);
            assert!(!state.can_increase(Ability::Wis));
            assert!(!state.can_decrease(Ability::Wis));

            // Slot 0 is confirmed, so forward navigation is open again.
            assert!(state.can_go_next());
            assert!(state.next(&ScriptedRandom::new(vec![12])));
            assert_eq!(state.active_slot(), 1);
            assert_eq!(state.name(), "");
            assert_eq!(*state.scores(), AbilityBlock::uniform(12));
            assert_eq!(state.bonus_points(), 5);
        }

        #[test]
        fn unsubmitted_edits_are_discarded_on_navigation() {
            let mut state = builder();
            let mut party = Vec::new();
            submit(&mut state, "Lidda", &mut party);

            state.set_name("Half-typed");
            state.increase(Ability::Dex);
            state.previous(&tens());
            state.next(&tens());

            assert_eq!(state.name(), "");
            assert_eq!(state.bonus_points(), 5);
        }

        #[test]
        fn last_slot_has_no_next() {
            let mut state = builder();
            let mut party = Vec::new();
            for name in ["A", "B", "C"] {
                submit(&mut state, name, &mut party);
            }
            assert_eq!(state.active_slot(), 3);
            assert!(!state.can_go_next());
        }
    }

    mod compatibility {
        use super::*;

        #[test]
        fn choosing_paladin_moves_goblin_to_first_allowed_race() {
            let mut state = builder();
            state.select_race(Race::Goblin);
            state.select_class(CharacterClass::Paladin);
            assert_eq!(state.class(), CharacterClass::Paladin);
            assert_eq!(state.race(), Race::Human);
        }

        #[test]
        fn choosing_lizardfolk_moves_paladin_to_first_allowed_class() {
            let mut state = builder();
            state.select_class(CharacterClass::Paladin);
            state.select_race(Race::Lizardfolk);
            assert_eq!(state.race(), Race::Lizardfolk);
            assert_eq!(state.class(), CharacterClass::Fighter);
        }

        #[test]
        fn compatible_choices_are_left_alone() {
            let mut state = builder();
            state.select_race(Race::Goblin);
            state.select_class(CharacterClass::Thief);
            assert_eq!((state.race(), state.class()), (Race::Goblin, CharacterClass::Thief));
        }

        #[test]
        fn selection_is_always_a_legal_pair() {
            let mut state = builder();
            for race in Race::ALL {
                for class in CharacterClass::ALL {
                    state.select_race(race);
                    assert!(is_allowed(state.race(), state.class()));
                    state.select_class(class);
                    assert!(is_allowed(state.race(), state.class()));
                }
            }
        }
    }

    mod submission {
        use super::*;

        #[test]
        fn four_submissions_close_the_builder() {
            let mut state = builder();
            let mut party = Vec::new();

            for (i, name) in ["Regdar", "Mialee", "Jozan"].into_iter().enumerate() {
                let outcome = submit(&mut state, name, &mut party);
                assert_eq!(outcome, SubmitOutcome::Advanced { slot: i + 1 });
                assert_eq!(state.bonus_points(), 5);
                assert_eq!(state.name(), "");
            }

            let outcome = submit(&mut state, "Lidda", &mut party);
            assert_eq!(outcome, SubmitOutcome::PartyComplete);
            assert!(state.is_closed());
            assert!(state.drafts().iter().all(Option::is_some));
            assert!(!state.reroll(&tens()));
        }

        #[test]
        fn full_party_is_refused_before_any_request() {
            let mut state = builder();
            state.set_name("Fifth");
            let err = state.begin_submit(PARTY_SIZE).unwrap_err();
            assert_eq!(err, SubmitError::PartyFull { max: 4 });
            assert_eq!(state.phase(), BuilderPhase::Editing);
        }

        #[test]
        fn blank_name_is_refused() {
            let mut state = builder();
            state.set_name("   ");
            let err = state.begin_submit(0).unwrap_err();
            assert!(matches!(err, SubmitError::Invalid(DomainError::Validation(_))));
            assert_eq!(state.phase(), BuilderPhase::Editing);
        }

        #[test]
        fn long_name_is_left_to_the_server() {
            let mut state = builder();
            state.set_name("A".repeat(65));
            let request = state.begin_submit(0).unwrap();
            assert_eq!(request.name.chars().count(), 65);
            assert_eq!(state.phase(), BuilderPhase::Submitting);
        }

        #[test]
        fn request_carries_trimmed_name_and_scores() {
            let mut state = builder();
            state.set_name("  Regdar ");
            state.select_race(Race::HalfOrc);
            state.increase(Ability::Str);
            let request = state.begin_submit(0).unwrap();

            assert_eq!(request.name, "Regdar");
            assert_eq!(request.race, Race::HalfOrc);
            assert_eq!(request.character_class, CharacterClass::Fighter);
            assert_eq!(request.abilities[Ability::Str], 11);
            assert_eq!(state.phase(), BuilderPhase::Submitting);
        }

        #[test]
        fn second_submit_while_in_flight_is_busy() {
            let mut state = builder();
            state.set_name("Regdar");
            state.begin_submit(0).unwrap();
            assert_eq!(state.begin_submit(0).unwrap_err(), SubmitError::Busy);
            assert!(!state.increase(Ability::Str));
            assert!(!state.set_name("Other"));
        }

        #[test]
        fn rejected_forced_pairing_leaves_draft_untouched() {
            let mut state = builder();
            state.set_name("Snik");
            state.increase(Ability::Dex);
            // Bypass the selectors the way a tampered client would.
            state.race = Race::Goblin;
            state.class = CharacterClass::Paladin;
            let before = state.clone();

            let request = state.begin_submit(0).unwrap();
            assert_eq!(request.race, Race::Goblin);
            state.abort_submit();

            assert_eq!(state.phase(), BuilderPhase::Editing);
            assert_eq!(state.active_slot(), before.active_slot());
            assert_eq!(state.name(), before.name());
            assert_eq!((state.race(), state.class()), (Race::Goblin, CharacterClass::Paladin));
            assert_eq!(state.scores(), before.scores());
            assert_eq!(state.baseline(), before.baseline());
            assert_eq!(state.bonus_points(), before.bonus_points());
            assert!(state.draft(0).is_none());
        }

        #[test]
        fn closed_builder_refuses_submission() {
            let mut state = builder();
            let mut party = Vec::new();
            for name in ["A", "B", "C", "D"] {
                submit(&mut state, name, &mut party);
            }
            assert_eq!(state.begin_submit(0).unwrap_err(), SubmitError::Closed);
        }

        #[test]
        fn advances_to_next_empty_slot_after_resubmitting_earlier_slot() {
            let mut state = builder();
            let mut party = Vec::new();
            submit(&mut state, "A", &mut party);
            submit(&mut state, "B", &mut party);
            state.previous(&tens());
            state.previous(&tens());
            assert_eq!(state.active_slot(), 0);

            let outcome = submit(&mut state, "A2", &mut party);
            assert_eq!(outcome, SubmitOutcome::Advanced { slot: 2 });
            assert_eq!(state.draft(0).map(|d| d.name.as_str()), Some("A2"));
        }
    }
}
