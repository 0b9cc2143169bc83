//! Static race/class incompatibility table.
//!
//! The server remains the authority; this table lets the builder grey out
//! pairings it would reject anyway.

use super::{CharacterClass, Race};

/// Race/class pairings that may not be combined.
pub const INCOMPATIBLE_PAIRS: &[(Race, CharacterClass)] = &[
    (Race::Lizardfolk, CharacterClass::Paladin),
    (Race::Goblin, CharacterClass::Paladin),
];

pub fn is_allowed(race: Race, class: CharacterClass) -> bool {
    !INCOMPATIBLE_PAIRS.contains(&(race, class))
}

/// Classes selectable for `race`, in selector order.
pub fn allowed_classes(race: Race) -> impl Iterator<Item = CharacterClass> {
    CharacterClass::ALL
        .into_iter()
        .filter(move |class| is_allowed(race, *class))
}

/// Races selectable for `class`, in selector order.
pub fn allowed_races(class: CharacterClass) -> impl Iterator<Item = Race> {
    Race::ALL
        .into_iter()
        .filter(move |race| is_allowed(*race, class))
}
