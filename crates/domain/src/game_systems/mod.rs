//! Game system vocabulary: playable races, classes, and the pairings the
//! server refuses.

mod class;
mod race;
mod restrictions;

pub use class::CharacterClass;
pub use race::Race;
pub use restrictions::{allowed_classes, allowed_races, is_allowed, INCOMPATIBLE_PAIRS};
