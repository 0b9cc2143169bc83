//! Application services
//!
//! Services depend on the typed [`Api`](crate::application::Api) wrapper,
//! never on the HTTP adapter.

pub mod character_service;
pub mod game_service;

pub use character_service::CharacterService;
pub use game_service::GameService;
