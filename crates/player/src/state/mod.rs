//! Client-side state machines
//!
//! Everything here is synchronous and free of I/O: network results are fed
//! in by the controller, dice come through [`RandomPort`](crate::ports::outbound::RandomPort).

mod builder;
mod point_buy;

pub use builder::{
    BuilderAction, BuilderPhase, BuilderState, CharacterDraft, SubmitError, SubmitOutcome,
    PARTY_SIZE,
};
pub use point_buy::PointBuyRules;
