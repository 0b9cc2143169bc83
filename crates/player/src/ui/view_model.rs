//! Builder view model - everything a renderer needs, derived from state.
//!
//! Pure functions of [`BuilderState`]; no rendering and no I/O.

use delve_domain::game_systems::is_allowed;
use delve_domain::{ability_modifier, Ability, CharacterClass, Race};

use crate::state::{BuilderPhase, BuilderState, PARTY_SIZE};

/// One ability line with its +/- control state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilityRow {
    pub ability: Ability,
    pub score: i32,
    pub baseline: i32,
    pub modifier: i32,
    pub can_increase: bool,
    pub can_decrease: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorOption<T> {
    pub value: T,
    pub label: &'static str,
    pub enabled: bool,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSummary {
    pub index: usize,
    /// Name of the confirmed character, if any
    pub confirmed: Option<String>,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderView {
    pub title: String,
    pub phase: BuilderPhase,
    pub name: String,
    pub abilities: Vec<AbilityRow>,
    pub bonus_points: u32,
    pub races: Vec<SelectorOption<Race>>,
    pub classes: Vec<SelectorOption<CharacterClass>>,
    pub slots: Vec<SlotSummary>,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub submit_enabled: bool,
}

impl BuilderView {
    pub fn from_state(state: &BuilderState) -> Self {
        let abilities = Ability::ALL
            .into_iter()
            .map(|ability| {
                let score = state.scores()[ability];
                AbilityRow {
                    ability,
                    score,
                    baseline: state.baseline()[ability],
                    modifier: ability_modifier(score),
                    can_increase: state.can_increase(ability),
                    can_decrease: state.can_decrease(ability),
                }
            })
            .collect();

        let races = Race::ALL
            .into_iter()
            .map(|race| SelectorOption {
                value: race,
                label: race.as_str(),
                enabled: is_allowed(race, state.class()),
                selected: race == state.race(),
            })
            .collect();

        let classes = CharacterClass::ALL
            .into_iter()
            .map(|class| SelectorOption {
                value: class,
                label: class.as_str(),
                enabled: is_allowed(state.race(), class),
                selected: class == state.class(),
            })
            .collect();

        let slots = (0..PARTY_SIZE)
            .map(|index| SlotSummary {
                index,
                confirmed: state.draft(index).map(|d| d.name.clone()),
                active: index == state.active_slot(),
            })
            .collect();

        Self {
            title: format!("Character {} of {}", state.active_slot() + 1, PARTY_SIZE),
            phase: state.phase(),
            name: state.name().to_string(),
            abilities,
            bonus_points: state.bonus_points(),
            races,
            classes,
            slots,
            can_go_previous: state.can_go_previous(),
            can_go_next: state.can_go_next(),
            submit_enabled: state.can_submit(),
        }
    }
}
