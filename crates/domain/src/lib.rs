//! Delve domain types.
//!
//! Pure vocabulary shared by the wire protocol and the player client: ability
//! scores, races, classes, and the rules the client can check locally.

pub mod error;
pub mod game_systems;
pub mod value_objects;

pub use error::DomainError;
pub use game_systems::{CharacterClass, Race};
pub use value_objects::{
    ability_modifier, Ability, AbilityBlock, CharacterName, Direction, MAX_BOUGHT_SCORE,
};
