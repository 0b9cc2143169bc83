//! Value objects - immutable types validated on construction

mod ability;
mod direction;
mod names;

pub use ability::{ability_modifier, Ability, AbilityBlock, MAX_BOUGHT_SCORE};
pub use direction::Direction;
pub use names::CharacterName;
